//! Reproductive health panel: ovarian reserve, PCOS, pregnancy risks,
//! estrogen metabolism, male fertility and BRCA markers, with combined
//! thrombophilia and estrogen-metabolism calls.

use serde::Serialize;

use crate::types::{Finding, Genome, Section, SnpDef};

use super::{analyze_sections, PanelReport, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "female_ovarian",
        name: "Овариальный резерв (женщины)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs16991615",
                gene: "MCM8",
                description: "Время менопаузы",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Ранняя менопауза - значительно раньше среднего"),
                    ("AG", "moderate", "Менопауза немного раньше среднего (~1 год)"),
                    ("GA", "moderate", "Менопауза немного раньше среднего (~1 год)"),
                    ("GG", "normal", "Нормальное время менопаузы"),
                ],
            },
            SnpDef {
                rsid: "rs244715",
                gene: "BRSK1",
                description: "Овариальный резерв",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "moderate", "Возможно сниженный овариальный резерв"),
                    ("CT", "low", "Незначительное влияние на резерв"),
                    ("TC", "low", "Незначительное влияние на резерв"),
                    ("TT", "normal", "Нормальный овариальный резерв"),
                ],
            },
            SnpDef {
                rsid: "rs2303369",
                gene: "FNDC4",
                description: "Функция яичников",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "moderate", "Возможно раннее снижение функции яичников"),
                    ("CT", "low", "Незначительное влияние"),
                    ("TC", "low", "Незначительное влияние"),
                    ("CC", "normal", "Нормальная функция яичников"),
                ],
            },
        ],
    },
    Section {
        key: "pcos",
        name: "Синдром поликистозных яичников (СПКЯ)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs13405728",
                gene: "LHCGR",
                description: "Рецептор ЛГ/ХГ - риск СПКЯ",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Повышенный риск СПКЯ"),
                    ("AG", "moderate", "Умеренно повышенный риск СПКЯ"),
                    ("GA", "moderate", "Умеренно повышенный риск СПКЯ"),
                    ("GG", "normal", "Обычный риск"),
                ],
            },
            SnpDef {
                rsid: "rs13429458",
                gene: "LHCGR",
                description: "Рецептор ЛГ/ХГ - чувствительность",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Повышенный риск СПКЯ"),
                    ("AG", "moderate", "Умеренно повышенный риск"),
                    ("GA", "moderate", "Умеренно повышенный риск"),
                    ("GG", "normal", "Обычный риск"),
                ],
            },
            SnpDef {
                rsid: "rs2479106",
                gene: "DENND1A",
                description: "Ключевой ген СПКЯ",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Значительно повышенный риск СПКЯ"),
                    ("AG", "moderate", "Повышенный риск СПКЯ"),
                    ("GA", "moderate", "Повышенный риск СПКЯ"),
                    ("GG", "normal", "Обычный риск"),
                ],
            },
            SnpDef {
                rsid: "rs10818854",
                gene: "DENND1A",
                description: "Гиперандрогения при СПКЯ",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Повышенный риск гиперандрогении"),
                    ("AG", "moderate", "Умеренный риск гиперандрогении"),
                    ("GA", "moderate", "Умеренный риск гиперандрогении"),
                    ("GG", "normal", "Обычный уровень андрогенов"),
                ],
            },
            SnpDef {
                rsid: "rs1801282",
                gene: "PPARG",
                description: "Инсулинорезистентность при СПКЯ",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "info", "Pro/Pro - стандартный вариант"),
                    ("CG", "protective", "Pro/Ala - защита от инсулинорезистентности"),
                    ("GC", "protective", "Pro/Ala - защита от инсулинорезистентности"),
                    ("GG", "protective", "Ala/Ala - защитный эффект"),
                ],
            },
        ],
    },
    Section {
        key: "pregnancy_risks",
        name: "Риски беременности",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs6025",
                gene: "F5 Leiden",
                description: "Тромбофилия (риск тромбозов при беременности)",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Фактор V Лейден гомозигота - риск тромбозов 50x! Требуется антикоагуляция"),
                    ("AG", "high", "Фактор V Лейден гетерозигота - риск тромбозов 5x, наблюдение обязательно"),
                    ("GA", "high", "Фактор V Лейден гетерозигота - риск тромбозов 5x, наблюдение обязательно"),
                    ("AC", "high", "Носитель Factor V Leiden - повышенный риск тромбозов"),
                    ("CA", "high", "Носитель Factor V Leiden - повышенный риск тромбозов"),
                    ("GG", "normal", "Нет мутации Factor V Leiden"),
                    ("CC", "normal", "Нет мутации Factor V Leiden"),
                    ("CG", "normal", "Нет мутации Factor V Leiden"),
                    ("GC", "normal", "Нет мутации Factor V Leiden"),
                ],
            },
            SnpDef {
                rsid: "rs1799963",
                gene: "F2 Prothrombin",
                description: "Протромбин G20210A - риск венозных тромбозов",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Гомозигота - очень высокий риск тромбозов при беременности"),
                    ("AG", "high", "Носитель - повышенный риск тромбозов, требуется наблюдение"),
                    ("GA", "high", "Носитель - повышенный риск тромбозов, требуется наблюдение"),
                    ("GG", "normal", "Нет мутации протромбина"),
                ],
            },
            SnpDef {
                rsid: "rs1801133",
                gene: "MTHFR C677T",
                description: "Фолатный метаболизм - риск дефектов нервной трубки",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Сниженная активность MTHFR (~30%) - требуется метилфолат"),
                    ("CT", "moderate", "Умеренно сниженная активность (~65%) - рекомендован метилфолат"),
                    ("TC", "moderate", "Умеренно сниженная активность (~65%) - рекомендован метилфолат"),
                    ("AG", "moderate", "Гетерозигота - умеренно сниженная активность"),
                    ("GA", "moderate", "Гетерозигота - умеренно сниженная активность"),
                    ("CC", "normal", "Нормальная активность MTHFR"),
                    ("AA", "normal", "Нормальная активность MTHFR"),
                ],
            },
            SnpDef {
                rsid: "rs1799889",
                gene: "SERPINE1 (PAI-1)",
                description: "Риск преэклампсии и невынашивания",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("GG", "high", "4G/4G - повышенный риск преэклампсии и тромбозов"),
                    ("AG", "moderate", "4G/5G - умеренный риск"),
                    ("GA", "moderate", "4G/5G - умеренный риск"),
                    ("AA", "normal", "5G/5G - нормальный риск"),
                ],
            },
        ],
    },
    Section {
        key: "gestational_diabetes",
        name: "Гестационный диабет",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs7903146",
                gene: "TCF7L2",
                description: "Главный ген риска диабета 2 типа и гестационного диабета",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Значительно повышен риск ГСД (~80% выше)"),
                    ("CT", "moderate", "Умеренно повышен риск ГСД (~40% выше)"),
                    ("TC", "moderate", "Умеренно повышен риск ГСД (~40% выше)"),
                    ("CC", "normal", "Обычный риск ГСД"),
                ],
            },
            SnpDef {
                rsid: "rs10830963",
                gene: "MTNR1B",
                description: "Рецептор мелатонина - инсулиновый ответ",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("GG", "high", "Повышенный риск ГСД, нарушение секреции инсулина"),
                    ("CG", "moderate", "Умеренный риск ГСД"),
                    ("GC", "moderate", "Умеренный риск ГСД"),
                    ("CC", "normal", "Обычный риск"),
                ],
            },
        ],
    },
    Section {
        key: "estrogen_metabolism",
        name: "Метаболизм эстрогенов",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs10046",
                gene: "CYP19A1",
                description: "Ароматаза - синтез эстрогенов",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "info", "Повышенная активность ароматазы, выше уровень эстрогенов"),
                    ("CT", "info", "Средняя активность ароматазы"),
                    ("TC", "info", "Средняя активность ароматазы"),
                    ("CC", "info", "Сниженная активность ароматазы, ниже эстрогены"),
                ],
            },
            SnpDef {
                rsid: "rs1056836",
                gene: "CYP1B1",
                description: "4-OH эстрогены (потенциально генотоксичные)",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("GG", "moderate", "Val/Val - повышенное образование 4-OH эстрогенов, выше риск"),
                    ("CG", "low", "Leu/Val - умеренное образование"),
                    ("GC", "low", "Leu/Val - умеренное образование"),
                    ("CC", "normal", "Leu/Leu - нормальный метаболизм эстрогенов"),
                ],
            },
            SnpDef {
                rsid: "rs4680",
                gene: "COMT",
                description: "Метилирование эстрогенов - детоксикация",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "moderate", "Met/Met - медленное метилирование эстрогенов, дольше в организме"),
                    ("AG", "info", "Val/Met - среднее метилирование"),
                    ("GA", "info", "Val/Met - среднее метилирование"),
                    ("GG", "info", "Val/Val - быстрое метилирование эстрогенов"),
                ],
            },
        ],
    },
    Section {
        key: "male_testosterone",
        name: "Тестостерон (мужчины)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs6258",
                gene: "SHBG",
                description: "Связывающий глобулин - уровень свободного тестостерона",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "info", "Снижен SHBG - выше свободный тестостерон"),
                    ("CT", "info", "Средний уровень SHBG"),
                    ("TC", "info", "Средний уровень SHBG"),
                    ("CC", "info", "Нормальный SHBG"),
                ],
            },
            SnpDef {
                rsid: "rs12150660",
                gene: "SHBG",
                description: "Уровень SHBG и тестостерона",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "info", "Низкий SHBG - выше биодоступный тестостерон"),
                    ("GT", "info", "Средний SHBG"),
                    ("TG", "info", "Средний SHBG"),
                    ("GG", "info", "Высокий SHBG - ниже свободный тестостерон"),
                ],
            },
            SnpDef {
                rsid: "rs727428",
                gene: "SHBG",
                description: "Уровень связывающего глобулина",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "info", "Низкий SHBG"),
                    ("AG", "info", "Средний SHBG"),
                    ("GA", "info", "Средний SHBG"),
                    ("GG", "info", "Высокий SHBG"),
                ],
            },
            SnpDef {
                rsid: "rs10046",
                gene: "CYP19A1",
                description: "Ароматаза - конверсия тестостерона в эстрогены",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "moderate", "Высокая ароматаза - больше конверсия в эстрогены"),
                    ("CT", "info", "Средняя активность ароматазы"),
                    ("TC", "info", "Средняя активность ароматазы"),
                    ("CC", "info", "Низкая ароматаза - меньше конверсия"),
                ],
            },
        ],
    },
    Section {
        key: "fertility_male",
        name: "Мужская фертильность",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs5934505",
                gene: "FSHB",
                description: "Фолликулостимулирующий гормон - сперматогенез",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "moderate", "Сниженная продукция ФСГ - возможно влияние на сперматогенез"),
                    ("CT", "low", "Незначительное снижение ФСГ"),
                    ("TC", "low", "Незначительное снижение ФСГ"),
                    ("CC", "normal", "Нормальная продукция ФСГ"),
                ],
            },
            SnpDef {
                rsid: "rs1801133",
                gene: "MTHFR C677T",
                description: "Качество спермы и ДНК фрагментация",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "moderate", "Сниженное качество спермы, повышенная ДНК фрагментация"),
                    ("CT", "low", "Незначительное влияние на качество"),
                    ("TC", "low", "Незначительное влияние на качество"),
                    ("AG", "low", "Незначительное влияние на качество спермы"),
                    ("GA", "low", "Незначительное влияние на качество спермы"),
                    ("CC", "normal", "Нормальное качество спермы"),
                    ("AA", "normal", "Нормальное качество спермы"),
                ],
            },
            SnpDef {
                rsid: "rs4880",
                gene: "SOD2",
                description: "Антиоксидант - защита спермы от окислительного стресса",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "moderate", "Ala/Ala - сниженная защита от оксидативного стресса"),
                    ("CT", "low", "Val/Ala - средняя защита"),
                    ("TC", "low", "Val/Ala - средняя защита"),
                    ("CC", "normal", "Val/Val - нормальная антиоксидантная защита"),
                ],
            },
        ],
    },
    Section {
        key: "brca",
        name: "BRCA онкориски (репродуктивные органы)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs80357906",
                gene: "BRCA1 (5382insC)",
                description: "Мутация BRCA1 - рак молочной железы и яичников",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Носитель патогенной мутации BRCA1 - требуется генетическое консультирование!"),
                    ("CT", "high", "Носитель патогенной мутации BRCA1 - требуется генетическое консультирование!"),
                    ("TC", "high", "Носитель патогенной мутации BRCA1 - требуется генетическое консультирование!"),
                    ("TT", "normal", "Нет мутации 5382insC"),
                    ("--", "normal", "Нет мутации"),
                ],
            },
            SnpDef {
                rsid: "rs28897672",
                gene: "BRCA1 (C61G)",
                description: "Мутация BRCA1 - высокопенетрантная",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Носитель патогенной мутации BRCA1!"),
                    ("GT", "high", "Носитель патогенной мутации BRCA1!"),
                    ("TG", "high", "Носитель патогенной мутации BRCA1!"),
                    ("GG", "normal", "Нет мутации C61G"),
                    ("--", "normal", "Нет мутации"),
                ],
            },
            SnpDef {
                rsid: "rs80359550",
                gene: "BRCA2 (6174delT)",
                description: "Мутация BRCA2 - рак молочной железы, яичников, простаты",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Носитель патогенной мутации BRCA2!"),
                    ("AT", "high", "Носитель патогенной мутации BRCA2!"),
                    ("TA", "high", "Носитель патогенной мутации BRCA2!"),
                    ("AA", "normal", "Нет мутации 6174delT"),
                    ("--", "normal", "Нет мутации"),
                ],
            },
        ],
    },
];

/// Combined hereditary thrombophilia risk from Factor V Leiden (rs6025)
/// and Prothrombin G20210A (rs1799963)
#[derive(Debug, Clone, Serialize)]
pub struct ThrombophiliaStatus {
    pub factor_v: String,
    pub prothrombin: String,
    pub status: &'static str,
    pub text: &'static str,
}

pub fn thrombophilia_status(findings: &[Finding]) -> Option<ThrombophiliaStatus> {
    let factor_v = findings.iter().find(|f| f.rsid == "rs6025")?;
    let prothrombin = findings.iter().find(|f| f.rsid == "rs1799963")?;

    let fv_risk = factor_v.tag.unwrap_or("normal");
    let pt_risk = prothrombin.tag.unwrap_or("normal");
    let fv_genotype = factor_v.genotype.as_deref().unwrap_or("");

    let (status, text): (&'static str, &'static str) = if fv_risk == "high" && pt_risk == "high" {
        (
            "very_high",
            "Комбинированная тромбофилия - ОЧЕНЬ высокий риск! Обязательна антикоагуляция при беременности",
        )
    } else if fv_risk == "high" || pt_risk == "high" {
        if fv_genotype == "AA" {
            ("very_high", "Гомозигота Factor V Leiden - риск тромбозов 50x")
        } else {
            (
                "high",
                "Носительство тромбофилии - требуется наблюдение гематолога при беременности",
            )
        }
    } else {
        ("normal", "Нет наследственной тромбофилии")
    };

    Some(ThrombophiliaStatus {
        factor_v: factor_v.genotype.clone().unwrap_or_else(|| "N/A".to_string()),
        prothrombin: prothrombin.genotype.clone().unwrap_or_else(|| "N/A".to_string()),
        status,
        text,
    })
}

/// Estrogen metabolism profile from CYP1B1 (4-OH production) and COMT
/// (methylation clearance)
#[derive(Debug, Clone, Serialize)]
pub struct EstrogenRisk {
    pub cyp1b1: String,
    pub comt: String,
    pub status: &'static str,
    pub text: &'static str,
}

pub fn estrogen_risk(findings: &[Finding]) -> Option<EstrogenRisk> {
    let cyp1b1 = findings.iter().find(|f| f.rsid == "rs1056836")?;
    let comt = findings.iter().find(|f| f.rsid == "rs4680")?;

    let cyp_gt = cyp1b1.genotype.as_deref().unwrap_or("");
    let comt_gt = comt.genotype.as_deref().unwrap_or("");

    let cyp1b1_high = matches!(cyp_gt, "GG" | "CG" | "GC");
    let comt_slow = matches!(comt_gt, "AA" | "AG" | "GA");

    let (status, text): (&'static str, &'static str) = if cyp_gt == "GG" && comt_gt == "AA" {
        (
            "high",
            "Неблагоприятный профиль: высокие 4-OH эстрогены + медленное выведение",
        )
    } else if cyp1b1_high && comt_slow {
        (
            "moderate",
            "Умеренный риск: повышенные 4-OH эстрогены, замедленное метилирование",
        )
    } else if cyp1b1_high || comt_slow {
        ("low", "Один неблагоприятный фактор - следить за уровнем эстрогенов")
    } else {
        ("normal", "Благоприятный профиль метаболизма эстрогенов")
    };

    Some(EstrogenRisk {
        cyp1b1: cyp1b1.genotype.clone().unwrap_or_else(|| "N/A".to_string()),
        comt: comt.genotype.clone().unwrap_or_else(|| "N/A".to_string()),
        status,
        text,
    })
}

pub fn run(genome: &Genome) -> PanelReport {
    let sections = analyze_sections(SECTIONS, genome);
    let findings: Vec<_> = sections.iter().flat_map(|s| s.findings.iter().cloned()).collect();

    let mut specials = Vec::new();

    if let Some(thrombo) = thrombophilia_status(&findings) {
        specials.push(SpecialSection {
            heading: "Тромбофилия (беременность)".to_string(),
            markdown: format!(
                "- Factor V Leiden (rs6025): {}\n- Протромбин (rs1799963): {}\n- **Статус: {}**\n- {}",
                thrombo.factor_v, thrombo.prothrombin, thrombo.status, thrombo.text
            ),
        });
    }

    if let Some(estrogen) = estrogen_risk(&findings) {
        specials.push(SpecialSection {
            heading: "Метаболизм эстрогенов".to_string(),
            markdown: format!(
                "- CYP1B1 (rs1056836): {}\n- COMT (rs4680): {}\n- **Статус: {}**\n- {}",
                estrogen.cyp1b1, estrogen.comt, estrogen.status, estrogen.text
            ),
        });
    }

    PanelReport {
        key: "reproductive",
        title: "Репродуктивное здоровье",
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

    fn findings_for(genome: &Genome) -> Vec<Finding> {
        run(genome).sections.iter().flat_map(|s| s.findings.clone()).collect()
    }

    #[test]
    fn factor_v_homozygote_is_very_high_risk() {
        let genome = genome_with(&[("rs6025", "AA"), ("rs1799963", "GG")]);
        let status = thrombophilia_status(&findings_for(&genome)).unwrap();
        assert_eq!(status.status, "very_high");
        assert!(status.text.contains("50x"));
    }

    #[test]
    fn clean_genotypes_mean_no_thrombophilia() {
        let genome = genome_with(&[("rs6025", "GG"), ("rs1799963", "GG")]);
        let status = thrombophilia_status(&findings_for(&genome)).unwrap();
        assert_eq!(status.status, "normal");
    }

    #[test]
    fn worst_estrogen_combination_is_high() {
        let genome = genome_with(&[("rs1056836", "GG"), ("rs4680", "AA")]);
        let status = estrogen_risk(&findings_for(&genome)).unwrap();
        assert_eq!(status.status, "high");
    }

    #[test]
    fn single_unfavorable_estrogen_factor_is_low() {
        let genome = genome_with(&[("rs1056836", "CC"), ("rs4680", "AG")]);
        let status = estrogen_risk(&findings_for(&genome)).unwrap();
        assert_eq!(status.status, "low");
    }
}
