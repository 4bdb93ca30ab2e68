//! Immunity panel: HLA markers, cytokines, antiviral response and
//! autoimmunity, with combined celiac-risk and inflammation calls.

use serde::Serialize;

use crate::types::{Finding, Genome, Section, SnpDef};

use super::{analyze_sections, PanelReport, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "hla_system",
        name: "HLA-система (HLA-B27, целиакия DQ2/DQ8)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs4349859",
                gene: "HLA-B27",
                description: "Анкилозирующий спондилит, реактивный артрит",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "HLA-B27 положительный - высокий риск анкилозирующего спондилита"),
                    ("AG", "moderate", "Носитель HLA-B27 - повышенный риск спондилоартропатий"),
                    ("GG", "normal", "HLA-B27 отрицательный - нормальный риск"),
                ],
            },
            SnpDef {
                rsid: "rs2187668",
                gene: "HLA-DQ2.5",
                description: "Целиакия (главный маркер)",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "HLA-DQ2.5 гомозигота - очень высокий риск целиакии"),
                    ("CT", "moderate", "Носитель HLA-DQ2.5 - повышенный риск целиакии"),
                    ("TC", "moderate", "Носитель HLA-DQ2.5 - повышенный риск целиакии"),
                    ("CC", "normal", "Низкий риск целиакии по DQ2.5"),
                ],
            },
            SnpDef {
                rsid: "rs7454108",
                gene: "HLA-DQ8",
                description: "Целиакия, диабет 1 типа",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "moderate", "HLA-DQ8 положительный - риск целиакии и СД1"),
                    ("CT", "low", "Носитель HLA-DQ8"),
                    ("TC", "low", "Носитель HLA-DQ8"),
                    ("TT", "normal", "Низкий риск по HLA-DQ8"),
                ],
            },
        ],
    },
    Section {
        key: "autoimmune",
        name: "Аутоиммунные риски",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs2476601",
                gene: "PTPN22",
                description: "Ревматоидный артрит, СД1, СКВ, тиреоидит",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Гомозигота риска - очень высокий риск аутоиммунных заболеваний"),
                    ("AG", "moderate", "Гетерозигота - повышенный риск RA, СД1, СКВ, тиреоидита"),
                    ("GA", "moderate", "Гетерозигота - повышенный риск RA, СД1, СКВ, тиреоидита"),
                    ("GG", "normal", "Нормальный риск аутоиммунных заболеваний"),
                ],
            },
            SnpDef {
                rsid: "rs6457617",
                gene: "HLA-DRB1",
                description: "Ревматоидный артрит (shared epitope)",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Высокий риск ревматоидного артрита"),
                    ("CT", "moderate", "Повышенный риск ревматоидного артрита"),
                    ("TC", "moderate", "Повышенный риск ревматоидного артрита"),
                    ("CC", "normal", "Нормальный риск ревматоидного артрита"),
                ],
            },
            SnpDef {
                rsid: "rs3135388",
                gene: "HLA-DRB1 (MS)",
                description: "Рассеянный склероз",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Высокий риск рассеянного склероза"),
                    ("AG", "moderate", "Повышенный риск рассеянного склероза"),
                    ("GA", "moderate", "Повышенный риск рассеянного склероза"),
                    ("GG", "normal", "Нормальный риск рассеянного склероза"),
                ],
            },
            SnpDef {
                rsid: "rs2066847",
                gene: "NOD2",
                description: "Болезнь Крона",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Высокий риск болезни Крона"),
                    ("CG", "moderate", "Повышенный риск болезни Крона (2-4x)"),
                    ("GC", "moderate", "Повышенный риск болезни Крона (2-4x)"),
                    ("--", "normal", "Инсерция отсутствует - нормальный риск"),
                    ("GG", "normal", "Нормальный риск болезни Крона"),
                ],
            },
            SnpDef {
                rsid: "rs3087243",
                gene: "CTLA4",
                description: "Аутоиммунный тиреоидит, СД1, RA",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("GG", "moderate", "Повышенный риск аутоиммунных заболеваний"),
                    ("AG", "low", "Немного повышенный риск"),
                    ("GA", "low", "Немного повышенный риск"),
                    ("AA", "normal", "Нормальный риск"),
                ],
            },
        ],
    },
    Section {
        key: "cytokines",
        name: "Цитокины (воспалительный ответ)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1800629",
                gene: "TNF-alpha",
                description: "Фактор некроза опухоли, воспаление",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Высокая продукция TNF-alpha - склонность к хроническому воспалению"),
                    ("AG", "moderate", "Повышенная продукция TNF-alpha"),
                    ("GA", "moderate", "Повышенная продукция TNF-alpha"),
                    ("GG", "normal", "Нормальная продукция TNF-alpha"),
                ],
            },
            SnpDef {
                rsid: "rs1800795",
                gene: "IL-6",
                description: "Интерлейкин-6, воспаление и иммунитет",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Высокая продукция IL-6 - провоспалительный профиль"),
                    ("CG", "moderate", "Умеренно повышенная продукция IL-6"),
                    ("GC", "moderate", "Умеренно повышенная продукция IL-6"),
                    ("GG", "normal", "Нормальная продукция IL-6"),
                ],
            },
            SnpDef {
                rsid: "rs1800896",
                gene: "IL-10",
                description: "Интерлейкин-10, противовоспалительный",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "low", "Низкая продукция IL-10 - сниженный противовоспалительный ответ"),
                    ("AG", "moderate", "Умеренная продукция IL-10"),
                    ("GA", "moderate", "Умеренная продукция IL-10"),
                    ("GG", "normal", "Высокая продукция IL-10 - хороший противовоспалительный ответ"),
                ],
            },
            SnpDef {
                rsid: "rs16944",
                gene: "IL-1beta",
                description: "Интерлейкин-1beta, воспаление",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Высокая продукция IL-1beta - провоспалительный профиль"),
                    ("AG", "moderate", "Умеренно повышенная продукция IL-1beta"),
                    ("GA", "moderate", "Умеренно повышенная продукция IL-1beta"),
                    ("GG", "normal", "Нормальная продукция IL-1beta"),
                ],
            },
            SnpDef {
                rsid: "rs20541",
                gene: "IL-13",
                description: "Интерлейкин-13, аллергия и астма",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Высокая продукция IL-13 - риск астмы и аллергии"),
                    ("AG", "moderate", "Повышенная продукция IL-13"),
                    ("GA", "moderate", "Повышенная продукция IL-13"),
                    ("GG", "normal", "Нормальная продукция IL-13"),
                ],
            },
        ],
    },
    Section {
        key: "innate_immunity",
        name: "Врождённый иммунитет (TLR, комплемент)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs5743708",
                gene: "TLR2",
                description: "Toll-like рецептор 2, бактериальные инфекции",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Нарушение функции TLR2 - сниженная защита от бактерий"),
                    ("AG", "moderate", "Сниженная функция TLR2"),
                    ("GA", "moderate", "Сниженная функция TLR2"),
                    ("GG", "normal", "Нормальная функция TLR2"),
                ],
            },
            SnpDef {
                rsid: "rs4986790",
                gene: "TLR4",
                description: "Toll-like рецептор 4, грам-отрицательные бактерии",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("GG", "high", "Нарушение функции TLR4 - сниженный ответ на LPS"),
                    ("AG", "moderate", "Сниженная функция TLR4"),
                    ("GA", "moderate", "Сниженная функция TLR4"),
                    ("AA", "normal", "Нормальная функция TLR4"),
                ],
            },
            SnpDef {
                rsid: "rs2230199",
                gene: "C3",
                description: "Компонент комплемента C3",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("GG", "moderate", "C3F/F - повышенная активация комплемента, риск AMD"),
                    ("CG", "low", "C3S/F - умеренная активация"),
                    ("GC", "low", "C3S/F - умеренная активация"),
                    ("CC", "normal", "C3S/S - нормальная активация комплемента"),
                ],
            },
        ],
    },
    Section {
        key: "infections",
        name: "Инфекционные заболевания",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs333",
                gene: "CCR5-delta32",
                description: "Устойчивость к ВИЧ",
                risk_allele: Some("D"),
                mutation: None,
                interpretations: &[
                    ("DD", "protective", "CCR5-delta32 гомозигота - высокая устойчивость к ВИЧ-1"),
                    ("DI", "protective", "CCR5-delta32 гетерозигота - частичная защита от ВИЧ"),
                    ("ID", "protective", "CCR5-delta32 гетерозигота - частичная защита от ВИЧ"),
                    ("--", "protective", "Делеция - устойчивость к ВИЧ"),
                    ("II", "normal", "Нет делеции CCR5 - стандартная восприимчивость"),
                ],
            },
            SnpDef {
                rsid: "rs12979860",
                gene: "IL28B (IFNL3)",
                description: "Гепатит C - спонтанное излечение и ответ на терапию",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "protective", "Хороший ответ на терапию гепатита C, высокий шанс излечения"),
                    ("CT", "moderate", "Промежуточный ответ на терапию гепатита C"),
                    ("TC", "moderate", "Промежуточный ответ на терапию гепатита C"),
                    ("TT", "low", "Плохой ответ на терапию гепатита C"),
                ],
            },
            SnpDef {
                rsid: "rs601338",
                gene: "FUT2",
                description: "Норовирус, ротавирус - секреторный статус",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "protective", "Несекретор - устойчивость к норовирусу и ротавирусу"),
                    ("AG", "normal", "Секретор - стандартная восприимчивость"),
                    ("GA", "normal", "Секретор - стандартная восприимчивость"),
                    ("GG", "normal", "Секретор - стандартная восприимчивость к норовирусу"),
                ],
            },
            SnpDef {
                rsid: "rs2814778",
                gene: "DARC (Duffy)",
                description: "Малярия Plasmodium vivax",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "protective", "Duffy-отрицательный - устойчивость к P. vivax малярии"),
                    ("CT", "moderate", "Частичная защита от P. vivax"),
                    ("TC", "moderate", "Частичная защита от P. vivax"),
                    ("TT", "normal", "Duffy-положительный - восприимчивость к P. vivax"),
                ],
            },
        ],
    },
    Section {
        key: "allergy",
        name: "Аллергия и атопия",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs7216389",
                gene: "ORMDL3",
                description: "Детская астма",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Высокий риск детской астмы"),
                    ("CT", "moderate", "Повышенный риск астмы"),
                    ("TC", "moderate", "Повышенный риск астмы"),
                    ("CC", "normal", "Нормальный риск астмы"),
                ],
            },
            SnpDef {
                rsid: "rs61816761",
                gene: "FLG (филаггрин)",
                description: "Атопический дерматит, экзема",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Нарушение барьерной функции кожи - высокий риск экземы"),
                    ("AG", "moderate", "Носитель - повышенный риск атопического дерматита"),
                    ("GA", "moderate", "Носитель - повышенный риск атопического дерматита"),
                    ("GG", "normal", "Нормальная функция филаггрина"),
                ],
            },
            SnpDef {
                rsid: "rs1801275",
                gene: "IL4RA",
                description: "Рецептор IL-4, атопия и аллергия",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Повышенная чувствительность к IL-4 - риск атопии"),
                    ("AG", "moderate", "Умеренно повышенный риск аллергии"),
                    ("GA", "moderate", "Умеренно повышенный риск аллергии"),
                    ("GG", "normal", "Нормальная чувствительность к IL-4"),
                ],
            },
        ],
    },
];

/// Combined celiac disease risk from HLA-DQ2.5 (rs2187668) and HLA-DQ8
/// (rs7454108)
#[derive(Debug, Clone, Serialize)]
pub struct CeliacRisk {
    pub dq2_genotype: String,
    pub dq8_genotype: String,
    pub status: &'static str,
    pub text: &'static str,
}

pub fn celiac_risk(findings: &[Finding]) -> Option<CeliacRisk> {
    let dq2 = findings.iter().find(|f| f.rsid == "rs2187668")?;
    let dq8 = findings.iter().find(|f| f.rsid == "rs7454108")?;

    let dq2_gt = dq2.genotype.clone().unwrap_or_default();
    let dq8_gt = dq8.genotype.clone().unwrap_or_default();

    let dq2_risk = dq2_gt.contains('T');
    let dq8_risk = dq8_gt.contains('C');

    let (status, text): (&'static str, &'static str) = if dq2_gt == "TT" {
        ("very_high", "HLA-DQ2.5 гомозигота - очень высокий риск целиакии (>50%)")
    } else if dq2_risk && dq8_risk {
        ("high", "DQ2.5 + DQ8 - высокий риск целиакии")
    } else if dq2_risk {
        ("moderate", "HLA-DQ2.5 носитель - повышенный риск целиакии (~5-10%)")
    } else if dq8_risk {
        ("low", "HLA-DQ8 - небольшой риск целиакии (~2%)")
    } else {
        ("normal", "Низкий риск целиакии (<1%)")
    };

    Some(CeliacRisk {
        dq2_genotype: dq2_gt,
        dq8_genotype: dq8_gt,
        status,
        text,
    })
}

/// Aggregate inflammation profile from the cytokine SNPs
#[derive(Debug, Clone, Serialize)]
pub struct InflammationProfile {
    pub proinflammatory_count: usize,
    pub antiinflammatory_count: usize,
    pub total_analyzed: usize,
    pub profile: &'static str,
    pub text: &'static str,
    pub details: Vec<String>,
}

pub fn inflammation_profile(findings: &[Finding]) -> Option<InflammationProfile> {
    let mut proinflammatory = 0;
    let mut antiinflammatory = 0;
    let mut total = 0;
    let mut details = Vec::new();

    for f in findings {
        if !f.found {
            continue;
        }
        total += 1;
        let genotype = f.genotype.as_deref().unwrap_or("");

        match f.rsid {
            "rs1800629" => {
                if genotype.contains('A') {
                    proinflammatory += 1;
                    details.push(format!("TNF-alpha ({}): повышен", genotype));
                } else {
                    details.push(format!("TNF-alpha ({}): норма", genotype));
                }
            }
            "rs1800795" => {
                if genotype.contains('C') {
                    proinflammatory += 1;
                    details.push(format!("IL-6 ({}): повышен", genotype));
                } else {
                    details.push(format!("IL-6 ({}): норма", genotype));
                }
            }
            "rs1800896" => {
                if genotype == "GG" {
                    antiinflammatory += 1;
                    details.push(format!("IL-10 ({}): высокий (защитный)", genotype));
                } else if genotype.contains('A') {
                    details.push(format!("IL-10 ({}): снижен", genotype));
                }
            }
            "rs16944" => {
                if genotype.contains('A') {
                    proinflammatory += 1;
                    details.push(format!("IL-1beta ({}): повышен", genotype));
                } else {
                    details.push(format!("IL-1beta ({}): норма", genotype));
                }
            }
            "rs20541" => {
                if genotype.contains('A') {
                    proinflammatory += 1;
                    details.push(format!("IL-13 ({}): повышен (аллергия)", genotype));
                } else {
                    details.push(format!("IL-13 ({}): норма", genotype));
                }
            }
            _ => {}
        }
    }

    if total == 0 {
        return None;
    }

    let (profile, text): (&'static str, &'static str) = if proinflammatory >= 3 {
        (
            "high_inflammation",
            "Провоспалительный профиль - рекомендуется противовоспалительная диета",
        )
    } else if proinflammatory >= 2 {
        ("moderate_inflammation", "Умеренно провоспалительный профиль")
    } else if antiinflammatory >= 1 && proinflammatory <= 1 {
        ("balanced", "Сбалансированный воспалительный профиль")
    } else {
        ("normal", "Нормальный воспалительный профиль")
    };

    Some(InflammationProfile {
        proinflammatory_count: proinflammatory,
        antiinflammatory_count: antiinflammatory,
        total_analyzed: total,
        profile,
        text,
        details,
    })
}

pub fn run(genome: &Genome) -> PanelReport {
    let sections = analyze_sections(SECTIONS, genome);
    let findings: Vec<_> = sections.iter().flat_map(|s| s.findings.iter().cloned()).collect();

    let mut specials = Vec::new();

    if let Some(celiac) = celiac_risk(&findings) {
        specials.push(SpecialSection {
            heading: "Риск целиакии (DQ2/DQ8)".to_string(),
            markdown: format!(
                "- HLA-DQ2.5 (rs2187668): {}\n- HLA-DQ8 (rs7454108): {}\n- **Статус: {}**\n- {}",
                celiac.dq2_genotype, celiac.dq8_genotype, celiac.status, celiac.text
            ),
        });
    }

    if let Some(inflammation) = inflammation_profile(&findings) {
        let mut markdown = format!(
            "- Провоспалительных маркеров: {}\n- Противовоспалительных: {}\n- **Профиль: {}**\n- {}",
            inflammation.proinflammatory_count,
            inflammation.antiinflammatory_count,
            inflammation.profile,
            inflammation.text
        );
        for detail in &inflammation.details {
            markdown.push_str(&format!("\n  - {}", detail));
        }
        specials.push(SpecialSection {
            heading: "Воспалительный профиль".to_string(),
            markdown,
        });
    }

    PanelReport {
        key: "immunity",
        title: "Иммунитет и воспаление",
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
                    chromosome: "6".to_string(),
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
    fn dq2_homozygote_is_very_high_risk() {
        let genome = genome_with(&[("rs2187668", "TT"), ("rs7454108", "TT")]);
        let risk = celiac_risk(&findings_for(&genome)).unwrap();
        assert_eq!(risk.status, "very_high");
    }

    #[test]
    fn dq8_without_dq2_is_low_risk() {
        let genome = genome_with(&[("rs2187668", "CC"), ("rs7454108", "CC")]);
        let risk = celiac_risk(&findings_for(&genome)).unwrap();
        assert_eq!(risk.status, "low");
    }

    #[test]
    fn no_risk_alleles_is_normal() {
        let genome = genome_with(&[("rs2187668", "CC"), ("rs7454108", "TT")]);
        let risk = celiac_risk(&findings_for(&genome)).unwrap();
        assert_eq!(risk.status, "normal");
    }

    #[test]
    fn three_proinflammatory_hits_flag_high_inflammation() {
        // TNF-alpha, IL-6 and IL-1beta all on their raised alleles
        let genome = genome_with(&[
            ("rs1800629", "AA"),
            ("rs1800795", "CC"),
            ("rs16944", "AG"),
        ]);
        let profile = inflammation_profile(&findings_for(&genome)).unwrap();
        assert_eq!(profile.proinflammatory_count, 3);
        assert_eq!(profile.profile, "high_inflammation");
    }

    #[test]
    fn il10_gg_balances_a_single_hit() {
        let genome = genome_with(&[("rs1800896", "GG"), ("rs1800629", "AG")]);
        let profile = inflammation_profile(&findings_for(&genome)).unwrap();
        assert_eq!(profile.profile, "balanced");
    }

    #[test]
    fn empty_genome_has_no_inflammation_profile() {
        assert!(inflammation_profile(&findings_for(&Genome::new())).is_none());
    }
}
