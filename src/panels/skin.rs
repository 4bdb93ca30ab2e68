//! Skin panel: collagen, UV sensitivity, inflammation and aging markers,
//! with a combined skin profile.

use serde::Serialize;

use crate::types::{Genome, Section, SnpDef};

use super::{analyze_sections, PanelReport, SectionResult, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "collagen",
        name: "Коллаген и структура кожи",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1800012",
                gene: "COL1A1",
                description: "Структура коллагена I типа, склонность к морщинам",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Нормальная структура коллагена"),
                    ("GT", "moderate", "Умеренно сниженная плотность коллагена"),
                    ("TT", "impaired", "Сниженная плотность коллагена, склонность к морщинам"),
                    ("CC", "normal", "Нормальная структура коллагена"),
                    ("CT", "moderate", "Умеренно сниженная плотность коллагена"),
                ],
            },
        ],
    },
    Section {
        key: "mmp1",
        name: "Деградация коллагена (MMP1)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1799750",
                gene: "MMP1",
                description: "Коллагеназа - расщепление коллагена",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "fast_aging", "2G/2G - Быстрое разрушение коллагена, ранние морщины"),
                    ("DG", "moderate", "1G/2G - Умеренная деградация коллагена"),
                    ("GD", "moderate", "1G/2G - Умеренная деградация коллагена"),
                    ("DD", "normal", "1G/1G - Лучшее сохранение коллагена"),
                    ("II", "fast_aging", "2G/2G - Быстрое разрушение коллагена"),
                    ("DI", "moderate", "1G/2G - Умеренная деградация"),
                    ("ID", "moderate", "1G/2G - Умеренная деградация"),
                    ("TT", "normal", "1G/1G - Лучшее сохранение коллагена"),
                    ("CT", "moderate", "1G/2G - Умеренная деградация"),
                    ("TC", "moderate", "1G/2G - Умеренная деградация"),
                    ("CC", "fast_aging", "2G/2G - Быстрое разрушение коллагена"),
                ],
            },
        ],
    },
    Section {
        key: "antioxidants",
        name: "Антиоксидантная защита",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs4880",
                gene: "SOD2",
                description: "Супероксиддисмутаза - защита от окислительного стресса",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "good", "Высокая антиоксидантная защита (Ala/Ala)"),
                    ("CT", "moderate", "Умеренная защита (Ala/Val)"),
                    ("TC", "moderate", "Умеренная защита (Ala/Val)"),
                    ("TT", "low", "Сниженная антиоксидантная защита (Val/Val)"),
                    ("AA", "good", "Высокая антиоксидантная защита"),
                    ("AG", "moderate", "Умеренная защита"),
                    ("GA", "moderate", "Умеренная защита"),
                    ("GG", "low", "Сниженная антиоксидантная защита"),
                ],
            },
            SnpDef {
                rsid: "rs1695",
                gene: "GSTP1",
                description: "Глутатион-S-трансфераза - детоксикация",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("AA", "good", "Высокая детоксикационная способность (Ile/Ile)"),
                    ("AG", "moderate", "Умеренная детоксикация (Ile/Val)"),
                    ("GA", "moderate", "Умеренная детоксикация (Ile/Val)"),
                    ("GG", "low", "Сниженная детоксикация (Val/Val)"),
                ],
            },
        ],
    },
    Section {
        key: "uv_sensitivity",
        name: "Чувствительность к УФ-излучению",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1805007",
                gene: "MC1R (R151C)",
                description: "Рецептор меланокортина - рыжие волосы, веснушки",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Обычная чувствительность к УФ"),
                    ("CT", "sensitive", "Носитель - повышенная чувствительность к солнцу"),
                    ("TC", "sensitive", "Носитель - повышенная чувствительность к солнцу"),
                    ("TT", "high_risk", "Высокая чувствительность к УФ, риск ожогов"),
                ],
            },
            SnpDef {
                rsid: "rs1805008",
                gene: "MC1R (R160W)",
                description: "Рецептор меланокортина - фоточувствительность",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Обычная чувствительность к УФ"),
                    ("CT", "sensitive", "Носитель - повышенная чувствительность"),
                    ("TC", "sensitive", "Носитель - повышенная чувствительность"),
                    ("TT", "high_risk", "Высокая чувствительность, легко обгорает"),
                ],
            },
            SnpDef {
                rsid: "rs12913832",
                gene: "HERC2/OCA2",
                description: "Цвет глаз, пигментация кожи",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("AA", "light", "Светлые глаза, светлая кожа - выше чувствительность к УФ"),
                    ("AG", "medium", "Средняя пигментация"),
                    ("GA", "medium", "Средняя пигментация"),
                    ("GG", "dark", "Тёмные глаза, лучшая защита от УФ"),
                ],
            },
        ],
    },
    Section {
        key: "photoaging",
        name: "Фотостарение",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1805005",
                gene: "MC1R (V60L)",
                description: "Рецептор меланокортина - фотостарение",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Обычный риск фотостарения"),
                    ("GT", "elevated", "Повышенный риск фотостарения"),
                    ("TG", "elevated", "Повышенный риск фотостарения"),
                    ("TT", "high", "Высокий риск фотостарения"),
                    ("AA", "normal", "Обычный риск фотостарения"),
                    ("AG", "elevated", "Повышенный риск фотостарения"),
                    ("GA", "elevated", "Повышенный риск фотостарения"),
                ],
            },
            SnpDef {
                rsid: "rs1805009",
                gene: "MC1R (D294H)",
                description: "Рецептор меланокортина - пигментные пятна",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Обычный риск пигментации"),
                    ("GA", "elevated", "Повышенный риск пигментных пятен"),
                    ("AG", "elevated", "Повышенный риск пигментных пятен"),
                    ("AA", "high", "Высокий риск гиперпигментации"),
                    ("CC", "normal", "Обычный риск пигментации"),
                    ("CA", "elevated", "Повышенный риск пигментных пятен"),
                    ("AC", "elevated", "Повышенный риск пигментных пятен"),
                ],
            },
        ],
    },
    Section {
        key: "acne",
        name: "Акне и воспаления кожи",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs4133274",
                gene: "DDB2",
                description: "Репарация ДНК, склонность к акне",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("TT", "normal", "Обычный риск акне"),
                    ("TG", "elevated", "Умеренно повышенный риск акне"),
                    ("GT", "elevated", "Умеренно повышенный риск акне"),
                    ("GG", "high", "Повышенный риск акне"),
                    ("CC", "normal", "Обычный риск акне"),
                    ("CA", "elevated", "Умеренно повышенный риск"),
                    ("AC", "elevated", "Умеренно повышенный риск"),
                    ("AA", "high", "Повышенный риск акне"),
                ],
            },
            SnpDef {
                rsid: "rs1800629",
                gene: "TNF-alpha",
                description: "Фактор некроза опухоли - воспаление",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Нормальный уровень воспаления"),
                    ("GA", "elevated", "Повышенная склонность к воспалению"),
                    ("AG", "elevated", "Повышенная склонность к воспалению"),
                    ("AA", "high", "Высокая склонность к воспалению кожи"),
                ],
            },
        ],
    },
    Section {
        key: "psoriasis",
        name: "Псориаз",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs10484554",
                gene: "HLA-C",
                description: "Главный генетический фактор риска псориаза",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Низкий генетический риск псориаза"),
                    ("CT", "elevated", "Умеренный генетический риск псориаза"),
                    ("TC", "elevated", "Умеренный генетический риск псориаза"),
                    ("TT", "high", "Высокий генетический риск псориаза"),
                ],
            },
        ],
    },
    Section {
        key: "eczema",
        name: "Экзема (атопический дерматит)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs61816761",
                gene: "FLG (Filaggrin)",
                description: "Филаггрин - барьерная функция кожи",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Нормальный кожный барьер"),
                    ("GA", "impaired", "Нарушение кожного барьера, риск экземы"),
                    ("AG", "impaired", "Нарушение кожного барьера, риск экземы"),
                    ("AA", "high_risk", "Высокий риск атопического дерматита"),
                    ("CC", "normal", "Нормальный кожный барьер"),
                    ("CT", "impaired", "Нарушение кожного барьера"),
                    ("TC", "impaired", "Нарушение кожного барьера"),
                    ("TT", "high_risk", "Высокий риск экземы"),
                ],
            },
        ],
    },
    Section {
        key: "wound_healing",
        name: "Заживление ран",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1800629",
                gene: "TNF-alpha",
                description: "Скорость заживления, рубцевание",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Нормальное заживление"),
                    ("GA", "slow", "Замедленное заживление, риск келоидов"),
                    ("AG", "slow", "Замедленное заживление, риск келоидов"),
                    ("AA", "impaired", "Склонность к плохому заживлению"),
                ],
            },
            SnpDef {
                rsid: "rs1800795",
                gene: "IL-6",
                description: "Интерлейкин-6 - воспаление и заживление",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Нормальный воспалительный ответ"),
                    ("GC", "elevated", "Повышенное воспаление, медленнее заживление"),
                    ("CG", "elevated", "Повышенное воспаление, медленнее заживление"),
                    ("CC", "high", "Высокое воспаление, замедленное заживление"),
                ],
            },
        ],
    },
    Section {
        key: "cellulite",
        name: "Целлюлит",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1799750",
                gene: "MMP1",
                description: "Структура соединительной ткани",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "high_risk", "2G/2G - Повышенный риск целлюлита"),
                    ("DG", "moderate", "1G/2G - Умеренный риск"),
                    ("GD", "moderate", "1G/2G - Умеренный риск"),
                    ("DD", "normal", "1G/1G - Сниженный риск целлюлита"),
                    ("TT", "normal", "Сниженный риск целлюлита"),
                    ("CT", "moderate", "Умеренный риск"),
                    ("TC", "moderate", "Умеренный риск"),
                    ("CC", "high_risk", "Повышенный риск целлюлита"),
                ],
            },
            SnpDef {
                rsid: "rs1800012",
                gene: "COL1A1",
                description: "Плотность коллагена, эластичность кожи",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Нормальная плотность коллагена"),
                    ("GT", "moderate", "Умеренно снижена плотность"),
                    ("TT", "high_risk", "Сниженная плотность, риск целлюлита"),
                    ("CC", "normal", "Нормальная плотность коллагена"),
                    ("CT", "moderate", "Умеренно снижена плотность"),
                ],
            },
        ],
    },
    Section {
        key: "elasticity",
        name: "Эластичность кожи",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs7539120",
                gene: "ELN (Elastin)",
                description: "Эластин - упругость кожи",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "good", "Хорошая эластичность кожи"),
                    ("CT", "moderate", "Умеренная эластичность"),
                    ("TC", "moderate", "Умеренная эластичность"),
                    ("TT", "reduced", "Сниженная эластичность, ранние морщины"),
                    ("GG", "good", "Хорошая эластичность кожи"),
                    ("GA", "moderate", "Умеренная эластичность"),
                    ("AG", "moderate", "Умеренная эластичность"),
                    ("AA", "reduced", "Сниженная эластичность"),
                ],
            },
        ],
    },
    Section {
        key: "hydration",
        name: "Увлажнённость кожи",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs12212041",
                gene: "AQP3",
                description: "Аквапорин-3 - водный баланс кожи",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("TT", "good", "Хорошее удержание влаги"),
                    ("TC", "moderate", "Умеренное увлажнение"),
                    ("CT", "moderate", "Умеренное увлажнение"),
                    ("CC", "dry", "Склонность к сухой коже"),
                    ("AA", "good", "Хорошее удержание влаги"),
                    ("AG", "moderate", "Умеренное увлажнение"),
                    ("GA", "moderate", "Умеренное увлажнение"),
                    ("GG", "dry", "Склонность к сухой коже"),
                ],
            },
        ],
    },
    Section {
        key: "glycation",
        name: "Гликация (повреждение сахарами)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs2070600",
                gene: "AGER (RAGE)",
                description: "Рецептор конечных продуктов гликирования",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "protective", "Защита от гликационного старения"),
                    ("CT", "moderate", "Умеренный риск гликации"),
                    ("TC", "moderate", "Умеренный риск гликации"),
                    ("TT", "elevated", "Повышенный риск гликационного старения"),
                    ("GG", "protective", "Защита от гликации"),
                    ("GA", "moderate", "Умеренный риск"),
                    ("AG", "moderate", "Умеренный риск"),
                    ("AA", "elevated", "Повышенный риск"),
                ],
            },
        ],
    },
];

/// Score counters behind the combined skin profile
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkinScores {
    pub aging_prone: u32,
    pub sensitive: u32,
    pub resilient: u32,
    pub inflammation_prone: u32,
    pub photoaging_risk: u32,
}

/// Combined skin profile across the panel's sections
#[derive(Debug, Clone, Serialize)]
pub struct SkinProfile {
    pub profiles: Vec<&'static str>,
    pub scores: SkinScores,
    pub factors: Vec<String>,
}

pub fn skin_profile(sections: &[SectionResult]) -> SkinProfile {
    let mut scores = SkinScores::default();
    let mut factors = Vec::new();

    let in_sections = |keys: &[&str]| {
        sections
            .iter()
            .filter(|s| keys.contains(&s.key))
            .flat_map(|s| s.findings.iter())
            .collect::<Vec<_>>()
    };

    for f in in_sections(&["collagen", "mmp1", "elasticity"]) {
        match f.tag {
            Some("impaired") | Some("fast_aging") | Some("reduced") => {
                scores.aging_prone += 2;
                factors.push(format!("Быстрое старение ({})", f.gene));
            }
            Some("moderate") => scores.aging_prone += 1,
            Some("normal") | Some("good") => scores.resilient += 1,
            _ => {}
        }
    }

    for f in in_sections(&["uv_sensitivity", "photoaging"]) {
        match f.tag {
            Some("high_risk") | Some("high") | Some("sensitive") | Some("light") => {
                scores.sensitive += 2;
                scores.photoaging_risk += 2;
                factors.push(format!("УФ-чувствительность ({})", f.gene));
            }
            Some("elevated") | Some("medium") => {
                scores.sensitive += 1;
                scores.photoaging_risk += 1;
            }
            Some("normal") | Some("dark") => scores.resilient += 1,
            _ => {}
        }
    }

    for f in in_sections(&["acne", "psoriasis", "eczema", "wound_healing"]) {
        match f.tag {
            Some("high") | Some("high_risk") | Some("impaired") => {
                scores.inflammation_prone += 2;
                factors.push(format!("Склонность к воспалению ({})", f.gene));
            }
            Some("elevated") | Some("slow") => scores.inflammation_prone += 1,
            Some("normal") => scores.resilient += 1,
            _ => {}
        }
    }

    for f in in_sections(&["antioxidants"]) {
        match f.tag {
            Some("low") => {
                scores.aging_prone += 1;
                scores.sensitive += 1;
            }
            Some("good") => scores.resilient += 2,
            _ => {}
        }
    }

    let mut profiles = Vec::new();
    if scores.aging_prone >= 3 {
        profiles.push("Склонность к раннему старению");
    }
    if scores.sensitive >= 3 || scores.photoaging_risk >= 3 {
        profiles.push("Чувствительная кожа");
    }
    if scores.inflammation_prone >= 3 {
        profiles.push("Склонность к воспалениям");
    }
    if scores.resilient >= 5 && profiles.is_empty() {
        profiles.push("Устойчивая кожа");
    }
    if profiles.is_empty() {
        profiles.push("Средняя устойчивость");
    }

    SkinProfile {
        profiles,
        scores,
        factors,
    }
}

pub fn run(genome: &Genome) -> PanelReport {
    let sections = analyze_sections(SECTIONS, genome);

    let profile = skin_profile(&sections);
    let mut markdown = String::new();
    for p in &profile.profiles {
        markdown.push_str(&format!("- **{}**\n", p));
    }
    for factor in &profile.factors {
        markdown.push_str(&format!("  - {}\n", factor));
    }
    let specials = vec![SpecialSection {
        heading: "Профиль кожи".to_string(),
        markdown,
    }];

    PanelReport {
        key: "skin",
        title: "Кожа",
        sections,
        specials,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenomeRecord;

    fn genome_with(pairs: &[(&str, &str)]) -> Genome {
        let mut genome = Genome::new();
        for (rsid, genotype) in pairs {
            genome.insert(
                rsid.to_string(),
                GenomeRecord {
                    chromosome: "1".to_string(),
                    position: 1,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    #[test]
    fn empty_genome_is_average_resilience() {
        let sections = analyze_sections(SECTIONS, &Genome::new());
        let profile = skin_profile(&sections);
        assert_eq!(profile.profiles, vec!["Средняя устойчивость"]);
        assert!(profile.factors.is_empty());
    }

    #[test]
    fn aliased_wound_healing_snp_resolves_through_its_real_rsid() {
        // the wound-healing TNF-alpha entry reads the shared rs1800629
        let sections = analyze_sections(SECTIONS, &genome_with(&[("rs1800629", "AA")]));
        let wound = sections.iter().find(|s| s.key == "wound_healing").unwrap();
        let finding = wound.findings.iter().find(|f| f.rsid == "rs1800629").unwrap();
        assert_eq!(finding.tag, Some("impaired"));
    }

    #[test]
    fn impaired_healing_counts_toward_inflammation() {
        let sections = analyze_sections(SECTIONS, &genome_with(&[("rs1800629", "AA")]));
        let profile = skin_profile(&sections);
        assert!(profile.scores.inflammation_prone >= 2);
    }
}
