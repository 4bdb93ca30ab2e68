//! Pain sensitivity panel: pain threshold, opioid and NSAID response,
//! migraine markers, with GCH1 / CYP2C9 / COMT combined calls.

use serde::Serialize;

use crate::types::{Finding, Genome, Section, SnpDef};

use super::{analyze_sections, PanelReport, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "pain_threshold",
        name: "Базовая чувствительность к боли",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs4680",
                gene: "COMT Val158Met",
                description: "Катехол-О-метилтрансфераза - метаболизм дофамина и катехоламинов",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "low_pain", "Val/Val - низкая чувствительность к боли, быстрый метаболизм катехоламинов"),
                    ("AG", "moderate", "Val/Met - средняя чувствительность к боли"),
                    ("AA", "high_pain", "Met/Met - высокая чувствительность к боли, медленный метаболизм катехоламинов"),
                ],
            },
            SnpDef {
                rsid: "rs6746030",
                gene: "SCN9A",
                description: "Натриевый канал Nav1.7 - проведение болевых сигналов",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "low_pain", "Более высокий болевой порог"),
                    ("AG", "moderate", "Средний болевой порог"),
                    ("AA", "high_pain", "Более низкий болевой порог, повышенная чувствительность"),
                ],
            },
            SnpDef {
                rsid: "rs8007267",
                gene: "GCH1",
                description: "ГТФ-циклогидролаза 1 - часть защитного гаплотипа",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Стандартный вариант"),
                    ("AG", "protective", "Носитель защитного аллеля - сниженная болевая чувствительность"),
                    ("AA", "protective", "Защитный генотип - сниженная болевая чувствительность"),
                ],
            },
            SnpDef {
                rsid: "rs3783641",
                gene: "GCH1",
                description: "ГТФ-циклогидролаза 1 - защитный гаплотип против хронической боли",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("TT", "normal", "Стандартный вариант"),
                    ("AT", "protective", "Носитель защитного аллеля"),
                    ("AA", "protective", "Защитный генотип против хронической боли"),
                ],
            },
            SnpDef {
                rsid: "rs10483639",
                gene: "GCH1",
                description: "ГТФ-циклогидролаза 1 - компонент болезащитного гаплотипа",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Стандартный вариант"),
                    ("CG", "protective", "Носитель защитного аллеля"),
                    ("GG", "protective", "Защитный генотип - меньше риск хронической боли"),
                ],
            },
        ],
    },
    Section {
        key: "opioid_response",
        name: "Ответ на опиоидные анальгетики",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1799971",
                gene: "OPRM1 A118G",
                description: "Мю-опиоидный рецептор - основная мишень опиоидов",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("AA", "normal", "Нормальный ответ на опиоиды, стандартные дозы"),
                    ("AG", "moderate", "Сниженный ответ - могут потребоваться повышенные дозы"),
                    ("GG", "high", "Значительно сниженный ответ - нужны существенно выше дозы опиоидов"),
                ],
            },
            SnpDef {
                rsid: "rs1045642",
                gene: "ABCB1 C3435T",
                description: "P-гликопротеин - транспорт опиоидов через ГЭБ",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "good", "Хороший ответ на опиоиды, лучшее проникновение в ЦНС"),
                    ("CT", "moderate", "Средний ответ на опиоиды"),
                    ("TT", "poor", "Сниженный ответ на опиоиды, хуже проникновение"),
                ],
            },
        ],
    },
    Section {
        key: "inflammatory_pain",
        name: "Воспалительная боль",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1800629",
                gene: "TNF-α -308G>A",
                description: "Фактор некроза опухоли альфа - ключевой медиатор воспаления",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Нормальная продукция TNF-α"),
                    ("AG", "moderate", "Повышенная продукция TNF-α, склонность к воспалительной боли"),
                    ("AA", "high", "Высокая продукция TNF-α, повышен риск хронического воспаления и боли"),
                ],
            },
            SnpDef {
                rsid: "rs1800795",
                gene: "IL-6 -174G>C",
                description: "Интерлейкин-6 - провоспалительный цитокин",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Нормальный уровень IL-6"),
                    ("GC", "moderate", "Умеренно повышенный IL-6"),
                    ("CG", "moderate", "Умеренно повышенный IL-6"),
                    ("CC", "high", "Повышенная продукция IL-6, склонность к воспалительной боли"),
                ],
            },
            SnpDef {
                rsid: "rs1800896",
                gene: "IL-10 -1082A>G",
                description: "Интерлейкин-10 - противовоспалительный цитокин",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "protective", "Высокая продукция IL-10, хорошая противовоспалительная защита"),
                    ("AG", "normal", "Средняя продукция IL-10"),
                    ("GA", "normal", "Средняя продукция IL-10"),
                    ("AA", "high", "Низкая продукция IL-10, сниженная противовоспалительная защита"),
                ],
            },
        ],
    },
    Section {
        key: "migraine",
        name: "Мигрень",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1835740",
                gene: "MTDH/AEG-1",
                description: "Метадгерин - регуляция глутамата, первый GWAS-маркер мигрени",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("TT", "normal", "Нормальный риск мигрени"),
                    ("CT", "moderate", "Умеренно повышен риск мигрени (~20%)"),
                    ("TC", "moderate", "Умеренно повышен риск мигрени (~20%)"),
                    ("CC", "high", "Повышен риск мигрени (~40%)"),
                ],
            },
            SnpDef {
                rsid: "rs2651899",
                gene: "PRDM16",
                description: "Транскрипционный фактор - развитие нервной системы",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("TT", "normal", "Нормальный риск мигрени"),
                    ("CT", "moderate", "Немного повышен риск мигрени"),
                    ("TC", "moderate", "Немного повышен риск мигрени"),
                    ("CC", "high", "Повышен риск мигрени"),
                ],
            },
            SnpDef {
                rsid: "rs10166942",
                gene: "TRPM8",
                description: "Холодовой рецептор - сенсорная чувствительность",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Нормальный риск мигрени"),
                    ("CT", "moderate", "Немного повышен риск мигрени"),
                    ("TC", "moderate", "Немного повышен риск мигрени"),
                    ("TT", "high", "Повышен риск мигрени с аурой"),
                ],
            },
            SnpDef {
                rsid: "rs11172113",
                gene: "LRP1",
                description: "Рецептор липопротеинов низкой плотности - нейропротекция",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Нормальный риск мигрени"),
                    ("CT", "moderate", "Немного повышен риск"),
                    ("TC", "moderate", "Немного повышен риск"),
                    ("TT", "high", "Повышен риск мигрени"),
                ],
            },
        ],
    },
    Section {
        key: "anesthetics",
        name: "Местные анестетики",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs12532",
                gene: "SCN5A",
                description: "Натриевый канал - мишень местных анестетиков",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Нормальный ответ на местные анестетики"),
                    ("CT", "moderate", "Немного сниженная эффективность анестезии"),
                    ("TC", "moderate", "Немного сниженная эффективность анестезии"),
                    ("TT", "high", "Может потребоваться больше анестетика"),
                ],
            },
            SnpDef {
                rsid: "rs1805007",
                gene: "MC1R R151C",
                description: "Меланокортиновый рецептор 1 - ассоциирован с рыжими волосами",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Нормальный ответ на анестезию"),
                    ("CT", "high", "Носитель варианта MC1R - может требоваться на 19% больше анестетика"),
                    ("TC", "high", "Носитель варианта MC1R - может требоваться на 19% больше анестетика"),
                    ("TT", "high", "Вариант MC1R - требуется значительно больше местного анестетика"),
                ],
            },
        ],
    },
    Section {
        key: "nsaids",
        name: "Ответ на НПВС (нестероидные противовоспалительные)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1799853",
                gene: "CYP2C9*2",
                description: "Цитохром P450 2C9 - метаболизм НПВС",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Нормальный метаболизатор - стандартные дозы НПВС"),
                    ("CT", "moderate", "Промежуточный метаболизатор - осторожность с дозой"),
                    ("TC", "moderate", "Промежуточный метаболизатор - осторожность с дозой"),
                    ("TT", "high", "Медленный метаболизатор - повышен риск побочных эффектов НПВС, снизить дозу"),
                ],
            },
            SnpDef {
                rsid: "rs1057910",
                gene: "CYP2C9*3",
                description: "Цитохром P450 2C9 - важнейший фермент метаболизма НПВС",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("AA", "normal", "Нормальный метаболизатор - стандартные дозы"),
                    ("AC", "moderate", "Промежуточный метаболизатор - риск накопления НПВС"),
                    ("CA", "moderate", "Промежуточный метаболизатор - риск накопления НПВС"),
                    ("CC", "high", "Медленный метаболизатор - высокий риск побочных эффектов, снизить дозу на 50%"),
                ],
            },
        ],
    },
];

/// GCH1 pain-protection haplotype from three tag SNPs
#[derive(Debug, Clone, Serialize)]
pub struct Gch1Haplotype {
    pub rs8007267: String,
    pub rs3783641: String,
    pub rs10483639: String,
    pub protective_alleles: usize,
    pub status: &'static str,
    pub text: &'static str,
}

pub fn gch1_haplotype(genome: &Genome) -> Gch1Haplotype {
    let get = |rsid: &str| genome.get(rsid).map(|r| r.genotype.clone()).unwrap_or_default();

    let rs8007267 = get("rs8007267");
    let rs3783641 = get("rs3783641");
    let rs10483639 = get("rs10483639");

    let protective_alleles = rs8007267.matches('A').count()
        + rs3783641.matches('A').count()
        + rs10483639.matches('G').count();

    let (status, text): (&'static str, &'static str) = if protective_alleles >= 4 {
        (
            "strong_protective",
            "Сильный защитный GCH1 гаплотип - значительно снижена болевая чувствительность",
        )
    } else if protective_alleles >= 2 {
        (
            "protective",
            "Частичный защитный GCH1 гаплотип - умеренно снижена болевая чувствительность",
        )
    } else if protective_alleles >= 1 {
        ("mild_protective", "Носитель защитных аллелей GCH1")
    } else {
        ("normal", "Нет защитного GCH1 гаплотипа")
    };

    Gch1Haplotype {
        rs8007267,
        rs3783641,
        rs10483639,
        protective_alleles,
        status,
        text,
    }
}

/// Combined CYP2C9 *2/*3 metabolizer status for NSAID dosing
#[derive(Debug, Clone, Serialize)]
pub struct Cyp2c9Status {
    pub cyp2c9_2: String,
    pub cyp2c9_3: String,
    pub variant_alleles: usize,
    pub status: &'static str,
    pub text: &'static str,
}

pub fn cyp2c9_status(findings: &[Finding]) -> Option<Cyp2c9Status> {
    let star2 = findings
        .iter()
        .find(|f| f.rsid == "rs1799853")
        .and_then(|f| f.genotype.clone());
    let star3 = findings
        .iter()
        .find(|f| f.rsid == "rs1057910")
        .and_then(|f| f.genotype.clone());

    if star2.is_none() && star3.is_none() {
        return None;
    }

    let variant_alleles = star2.as_deref().map(|g| g.matches('T').count()).unwrap_or(0)
        + star3.as_deref().map(|g| g.matches('C').count()).unwrap_or(0);

    let (status, text): (&'static str, &'static str) = if variant_alleles >= 3 {
        ("poor", "Плохой метаболизатор CYP2C9 - снизить дозу НПВС на 50-75%")
    } else if variant_alleles == 2 {
        (
            "intermediate",
            "Промежуточный метаболизатор CYP2C9 - снизить дозу НПВС на 25-50%",
        )
    } else if variant_alleles == 1 {
        ("intermediate", "Промежуточный метаболизатор CYP2C9 - осторожность с дозой")
    } else {
        ("normal", "Нормальный метаболизатор CYP2C9 - стандартные дозы НПВС")
    };

    Some(Cyp2c9Status {
        cyp2c9_2: star2.unwrap_or_default(),
        cyp2c9_3: star3.unwrap_or_default(),
        variant_alleles,
        status,
        text,
    })
}

/// COMT Val158Met pain profile
#[derive(Debug, Clone, Serialize)]
pub struct ComtPainProfile {
    pub genotype: String,
    pub profile_type: &'static str,
    pub pain_sensitivity: &'static str,
    pub stress_tolerance: &'static str,
    pub dopamine_metabolism: &'static str,
    pub clinical: &'static str,
}

pub fn comt_pain_profile(genome: &Genome) -> ComtPainProfile {
    let genotype = genome
        .get("rs4680")
        .map(|r| r.genotype.clone())
        .unwrap_or_default();

    let (profile_type, pain_sensitivity, stress_tolerance, dopamine_metabolism, clinical) =
        match genotype.as_str() {
            "GG" => (
                "Warrior (Val/Val)",
                "Низкая",
                "Высокая",
                "Быстрый",
                "Меньше нужны обезболивающие, лучше переносит стресс",
            ),
            "AA" => (
                "Worrier (Met/Met)",
                "Высокая",
                "Низкая",
                "Медленный",
                "Может потребоваться больше обезболивающих, выше когнитивные функции",
            ),
            "AG" | "GA" => (
                "Смешанный (Val/Met)",
                "Средняя",
                "Средняя",
                "Средний",
                "Сбалансированный профиль боли и стресса",
            ),
            _ => ("Не определён", "Н/Д", "Н/Д", "Н/Д", "Генотип не найден"),
        };

    ComtPainProfile {
        genotype,
        profile_type,
        pain_sensitivity,
        stress_tolerance,
        dopamine_metabolism,
        clinical,
    }
}

pub fn run(genome: &Genome) -> PanelReport {
    let sections = analyze_sections(SECTIONS, genome);
    let findings: Vec<_> = sections.iter().flat_map(|s| s.findings.iter().cloned()).collect();

    let mut specials = Vec::new();

    let gch1 = gch1_haplotype(genome);
    specials.push(SpecialSection {
        heading: "GCH1 защитный гаплотип".to_string(),
        markdown: format!(
            "- rs8007267: {}\n- rs3783641: {}\n- rs10483639: {}\n- Защитных аллелей: {}\n- **Статус: {}**\n- {}",
            gch1.rs8007267,
            gch1.rs3783641,
            gch1.rs10483639,
            gch1.protective_alleles,
            gch1.status,
            gch1.text
        ),
    });

    if let Some(cyp) = cyp2c9_status(&findings) {
        specials.push(SpecialSection {
            heading: "CYP2C9 метаболизм НПВС".to_string(),
            markdown: format!(
                "- *2 (rs1799853): {}\n- *3 (rs1057910): {}\n- Вариантных аллелей: {}\n- **Статус: {}**\n- {}",
                cyp.cyp2c9_2, cyp.cyp2c9_3, cyp.variant_alleles, cyp.status, cyp.text
            ),
        });
    }

    let comt = comt_pain_profile(genome);
    specials.push(SpecialSection {
        heading: "COMT болевой профиль".to_string(),
        markdown: format!(
            "- Генотип rs4680: {}\n- **Тип: {}**\n- Болевая чувствительность: {}\n- Стрессоустойчивость: {}\n- Метаболизм дофамина: {}\n- {}",
            comt.genotype,
            comt.profile_type,
            comt.pain_sensitivity,
            comt.stress_tolerance,
            comt.dopamine_metabolism,
            comt.clinical
        ),
    });

    PanelReport {
        key: "pain",
        title: "Чувствительность к боли",
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
                    chromosome: "14".to_string(),
                    position: 1,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    #[test]
    fn full_gch1_haplotype_is_strongly_protective() {
        let genome = genome_with(&[
            ("rs8007267", "AA"),
            ("rs3783641", "AA"),
            ("rs10483639", "GG"),
        ]);
        let haplotype = gch1_haplotype(&genome);
        assert_eq!(haplotype.protective_alleles, 6);
        assert_eq!(haplotype.status, "strong_protective");
    }

    #[test]
    fn no_protective_alleles_is_normal() {
        let genome = genome_with(&[
            ("rs8007267", "GG"),
            ("rs3783641", "TT"),
            ("rs10483639", "CC"),
        ]);
        assert_eq!(gch1_haplotype(&genome).status, "normal");
    }

    #[test]
    fn three_cyp2c9_variant_alleles_make_a_poor_metabolizer() {
        let genome = genome_with(&[("rs1799853", "TT"), ("rs1057910", "AC")]);
        let findings: Vec<_> = run(&genome)
            .sections
            .iter()
            .flat_map(|s| s.findings.clone())
            .collect();
        let status = cyp2c9_status(&findings).unwrap();
        assert_eq!(status.variant_alleles, 3);
        assert_eq!(status.status, "poor");
    }

    #[test]
    fn met_met_is_the_high_sensitivity_profile() {
        let profile = comt_pain_profile(&genome_with(&[("rs4680", "AA")]));
        assert_eq!(profile.pain_sensitivity, "Высокая");
    }
}
