//! Vision and hearing panel. Its tables are bilingual like the longevity
//! one, and the AMD section feeds a combined risk multiplier.

use serde::Serialize;

use crate::interpret::match_genotype;
use crate::types::{Finding, Genome};

use super::{PanelReport, SectionResult, SpecialSection};

/// One bilingual SNP entry: `(genotype, tag, text, text_ru)`
#[derive(Debug)]
pub struct BiSnpDef {
    pub rsid: &'static str,
    pub gene: &'static str,
    pub description: &'static str,
    pub description_ru: &'static str,
    pub interpretations: &'static [(&'static str, &'static str, &'static str, &'static str)],
}

#[derive(Debug)]
pub struct BiSection {
    pub key: &'static str,
    pub name: &'static str,
    pub name_ru: &'static str,
    pub snps: &'static [BiSnpDef],
}

pub static VISION_SECTIONS: &[BiSection] = &[
    BiSection {
        key: "myopia",
        name: "Myopia (Nearsightedness)",
        name_ru: "Миопия (близорукость)",
        snps: &[
            BiSnpDef {
                rsid: "rs524952",
                gene: "GJD2",
                description: "Myopia susceptibility",
                description_ru: "Предрасположенность к миопии",
                interpretations: &[
                    ("AA", "high", "Increased myopia risk (homozygous)", "Повышенный риск миопии (гомозигота)"),
                    ("AG", "moderate", "Moderate myopia risk", "Умеренный риск миопии"),
                    ("AC", "moderate", "Moderate myopia risk", "Умеренный риск миопии"),
                    ("GG", "normal", "Normal myopia risk", "Нормальный риск"),
                    ("CC", "normal", "Normal myopia risk", "Нормальный риск"),
                ],
            },
            BiSnpDef {
                rsid: "rs634990",
                gene: "RASGRF1",
                description: "Myopia development",
                description_ru: "Развитие миопии",
                interpretations: &[
                    ("CC", "high", "Increased myopia risk", "Повышенный риск миопии"),
                    ("CT", "moderate", "Moderate myopia risk", "Умеренный риск миопии"),
                    ("TT", "normal", "Normal myopia risk", "Нормальный риск"),
                ],
            },
            BiSnpDef {
                rsid: "rs17412774",
                gene: "ZNF644",
                description: "High myopia susceptibility",
                description_ru: "Предрасположенность к высокой миопии",
                interpretations: &[
                    ("AA", "high", "High risk of severe myopia", "Высокий риск тяжелой миопии"),
                    ("AG", "moderate", "Moderate risk of high myopia", "Умеренный риск высокой миопии"),
                    ("GG", "normal", "Normal risk", "Нормальный риск"),
                ],
            },
        ],
    },
    BiSection {
        key: "amd",
        name: "Age-related Macular Degeneration (AMD)",
        name_ru: "Возрастная макулярная дегенерация (ВМД)",
        snps: &[
            BiSnpDef {
                rsid: "rs1061170",
                gene: "CFH (Y402H)",
                description: "Major AMD risk factor - Complement Factor H",
                description_ru: "Основной фактор риска ВМД - фактор комплемента H",
                interpretations: &[
                    ("CC", "high", "7x increased AMD risk (homozygous risk)", "7-кратный риск ВМД (гомозигота риска)"),
                    ("TC", "moderate", "2.5x increased AMD risk (heterozygous)", "2.5-кратный риск ВМД (гетерозигота)"),
                    ("CT", "moderate", "2.5x increased AMD risk (heterozygous)", "2.5-кратный риск ВМД (гетерозигота)"),
                    ("TT", "normal", "Normal AMD risk", "Нормальный риск ВМД"),
                ],
            },
            BiSnpDef {
                rsid: "rs10490924",
                gene: "ARMS2 (A69S)",
                description: "AMD susceptibility - ARMS2 gene",
                description_ru: "Предрасположенность к ВМД - ген ARMS2",
                interpretations: &[
                    ("TT", "high", "Significantly increased AMD risk", "Значительно повышенный риск ВМД"),
                    ("GT", "moderate", "Moderate AMD risk increase", "Умеренно повышенный риск ВМД"),
                    ("GG", "normal", "Normal AMD risk", "Нормальный риск ВМД"),
                ],
            },
        ],
    },
    BiSection {
        key: "glaucoma",
        name: "Glaucoma",
        name_ru: "Глаукома",
        snps: &[
            BiSnpDef {
                rsid: "rs10483727",
                gene: "SIX6",
                description: "Primary open-angle glaucoma risk",
                description_ru: "Риск первичной открытоугольной глаукомы",
                interpretations: &[
                    ("CC", "high", "Increased glaucoma risk", "Повышенный риск глаукомы"),
                    ("CT", "moderate", "Moderate glaucoma risk", "Умеренный риск глаукомы"),
                    ("TC", "moderate", "Moderate glaucoma risk", "Умеренный риск глаукомы"),
                    ("TT", "normal", "Normal glaucoma risk", "Нормальный риск глаукомы"),
                ],
            },
            BiSnpDef {
                rsid: "rs4656461",
                gene: "TMCO1",
                description: "Intraocular pressure regulation",
                description_ru: "Регуляция внутриглазного давления",
                interpretations: &[
                    ("GG", "high", "Increased glaucoma risk", "Повышенный риск глаукомы"),
                    ("AG", "moderate", "Moderate glaucoma risk", "Умеренный риск глаукомы"),
                    ("GA", "moderate", "Moderate glaucoma risk", "Умеренный риск глаукомы"),
                    ("AA", "normal", "Normal glaucoma risk", "Нормальный риск глаукомы"),
                ],
            },
        ],
    },
    BiSection {
        key: "cataracts",
        name: "Cataracts",
        name_ru: "Катаракта",
        snps: &[
            BiSnpDef {
                rsid: "rs2165241",
                gene: "EPHA2",
                description: "Age-related cataract susceptibility",
                description_ru: "Предрасположенность к возрастной катаракте",
                interpretations: &[
                    ("TT", "high", "Increased cataract risk", "Повышенный риск катаракты"),
                    ("CT", "moderate", "Moderate cataract risk", "Умеренный риск катаракты"),
                    ("TC", "moderate", "Moderate cataract risk", "Умеренный риск катаракты"),
                    ("CC", "normal", "Normal cataract risk", "Нормальный риск катаракты"),
                ],
            },
            BiSnpDef {
                rsid: "rs1048661",
                gene: "LOXL1",
                description: "Exfoliation syndrome and secondary glaucoma",
                description_ru: "Эксфолиативный синдром и вторичная глаукома",
                interpretations: &[
                    ("GG", "high", "Increased risk of exfoliation syndrome", "Повышенный риск эксфолиативного синдрома"),
                    ("GT", "moderate", "Moderate risk", "Умеренный риск"),
                    ("TG", "moderate", "Moderate risk", "Умеренный риск"),
                    ("TT", "normal", "Lower risk", "Пониженный риск"),
                ],
            },
        ],
    },
];

pub static HEARING_SECTIONS: &[BiSection] = &[
    BiSection {
        key: "age_related_hearing_loss",
        name: "Age-Related Hearing Loss (Presbycusis)",
        name_ru: "Возрастная потеря слуха (пресбиакузис)",
        snps: &[
            BiSnpDef {
                rsid: "rs7598759",
                gene: "GRM7",
                description: "Glutamate receptor - hearing sensitivity",
                description_ru: "Глутаматный рецептор - чувствительность слуха",
                interpretations: &[
                    ("AA", "high", "Increased risk of age-related hearing loss", "Повышенный риск возрастной потери слуха"),
                    ("AG", "moderate", "Moderate risk", "Умеренный риск"),
                    ("GA", "moderate", "Moderate risk", "Умеренный риск"),
                    ("GG", "normal", "Normal risk", "Нормальный риск"),
                ],
            },
            BiSnpDef {
                rsid: "rs11928865",
                gene: "GRHL2",
                description: "Cochlear hair cell function",
                description_ru: "Функция волосковых клеток улитки",
                interpretations: &[
                    ("AA", "high", "Increased hearing loss risk", "Повышенный риск потери слуха"),
                    ("AG", "moderate", "Moderate risk", "Умеренный риск"),
                    ("GA", "moderate", "Moderate risk", "Умеренный риск"),
                    ("GG", "normal", "Normal risk", "Нормальный риск"),
                ],
            },
        ],
    },
    BiSection {
        key: "hereditary_deafness",
        name: "Hereditary Deafness",
        name_ru: "Наследственная глухота",
        snps: &[
            BiSnpDef {
                rsid: "rs80338939",
                gene: "GJB2 (35delG)",
                description: "Most common cause of hereditary deafness",
                description_ru: "Наиболее частая причина наследственной глухоты",
                interpretations: &[
                    ("--", "high", "Homozygous 35delG - congenital deafness", "Гомозигота 35delG - врожденная глухота"),
                    ("D", "high", "Carrier of 35delG mutation - hearing loss risk", "Носитель мутации 35delG - риск потери слуха"),
                    ("DI", "moderate", "Heterozygous carrier of 35delG", "Гетерозиготный носитель 35delG"),
                    ("II", "normal", "Not a carrier of 35delG", "Не носитель 35delG"),
                    ("GG", "normal", "Not a carrier of 35delG", "Не носитель 35delG"),
                    ("CC", "normal", "Not a carrier of 35delG", "Не носитель 35delG"),
                    ("CG", "normal", "Not a carrier of 35delG", "Не носитель 35delG"),
                ],
            },
        ],
    },
    BiSection {
        key: "noise_induced_hearing_loss",
        name: "Noise-Induced Hearing Loss (NIHL)",
        name_ru: "Шумовая потеря слуха",
        snps: &[
            BiSnpDef {
                rsid: "rs7598759",
                gene: "GRM7",
                description: "Susceptibility to noise damage",
                description_ru: "Восприимчивость к шумовым повреждениям",
                interpretations: &[
                    ("AA", "high", "Increased NIHL susceptibility", "Повышенная восприимчивость к NIHL"),
                    ("AG", "moderate", "Moderate NIHL susceptibility", "Умеренная восприимчивость"),
                    ("GA", "moderate", "Moderate NIHL susceptibility", "Умеренная восприимчивость"),
                    ("GG", "normal", "Normal susceptibility", "Нормальная восприимчивость"),
                ],
            },
            BiSnpDef {
                rsid: "rs4880",
                gene: "SOD2 (Ala16Val)",
                description: "Oxidative stress protection in cochlea",
                description_ru: "Защита от окислительного стресса в улитке",
                interpretations: &[
                    ("TT", "high", "Reduced antioxidant protection - NIHL risk", "Сниженная антиоксидантная защита - риск NIHL"),
                    ("CT", "moderate", "Moderate antioxidant protection", "Умеренная антиоксидантная защита"),
                    ("TC", "moderate", "Moderate antioxidant protection", "Умеренная антиоксидантная защита"),
                    ("AT", "moderate", "Moderate antioxidant protection", "Умеренная антиоксидантная защита"),
                    ("TA", "moderate", "Moderate antioxidant protection", "Умеренная антиоксидантная защита"),
                    ("CC", "normal", "Good antioxidant protection", "Хорошая антиоксидантная защита"),
                    ("AA", "normal", "Good antioxidant protection (Ala/Ala)", "Хорошая антиоксидантная защита (Ala/Ala)"),
                ],
            },
        ],
    },
    BiSection {
        key: "otosclerosis",
        name: "Otosclerosis",
        name_ru: "Отосклероз",
        snps: &[
            BiSnpDef {
                rsid: "rs39399",
                gene: "TGFB1",
                description: "Abnormal bone remodeling in middle ear",
                description_ru: "Аномальное ремоделирование кости среднего уха",
                interpretations: &[
                    ("CC", "high", "Increased otosclerosis risk", "Повышенный риск отосклероза"),
                    ("CT", "moderate", "Moderate otosclerosis risk", "Умеренный риск отосклероза"),
                    ("TC", "moderate", "Moderate otosclerosis risk", "Умеренный риск отосклероза"),
                    ("TT", "normal", "Normal risk", "Нормальный риск"),
                ],
            },
        ],
    },
    BiSection {
        key: "menieres_disease",
        name: "Meniere's Disease",
        name_ru: "Болезнь Меньера",
        snps: &[
            BiSnpDef {
                rsid: "rs4947296",
                gene: "NFKB1",
                description: "Inflammatory response in inner ear",
                description_ru: "Воспалительная реакция во внутреннем ухе",
                interpretations: &[
                    ("TT", "high", "Increased Meniere's disease risk", "Повышенный риск болезни Меньера"),
                    ("CT", "moderate", "Moderate risk", "Умеренный риск"),
                    ("TC", "moderate", "Moderate risk", "Умеренный риск"),
                    ("CC", "normal", "Normal risk", "Нормальный риск"),
                ],
            },
        ],
    },
];

fn interpret_bi(def: &BiSnpDef, genome: &Genome) -> Finding {
    let record = genome.get(def.rsid);

    let mut finding = Finding {
        rsid: def.rsid,
        gene: def.gene,
        description: def.description_ru,
        risk_allele: None,
        mutation: None,
        found: record.is_some(),
        chromosome: record.map(|r| r.chromosome.clone()),
        position: record.map(|r| r.position),
        genotype: record.map(|r| r.genotype.clone()),
        tag: None,
        text: None,
    };

    if let Some(record) = record {
        if let Some((_, tag, en, ru)) =
            match_genotype(def.interpretations, &record.genotype, |e| e.0)
        {
            finding.tag = Some(*tag);
            finding.text = Some(format!("{} / {}", en, ru));
        }
    }

    finding
}

fn analyze_bi(sections: &'static [BiSection], genome: &Genome) -> Vec<SectionResult> {
    sections
        .iter()
        .map(|section| SectionResult {
            key: section.key,
            name: section.name_ru,
            inheritance: None,
            frequency: None,
            findings: section.snps.iter().map(|def| interpret_bi(def, genome)).collect(),
        })
        .collect()
}

/// Combined age-related macular degeneration risk from CFH (rs1061170)
/// and ARMS2 (rs10490924)
#[derive(Debug, Clone, Serialize)]
pub struct AmdRisk {
    pub cfh_genotype: String,
    pub cfh_risk_multiplier: f64,
    pub arms2_genotype: String,
    pub arms2_risk_multiplier: f64,
    pub combined_risk_multiplier: f64,
    pub risk_category: &'static str,
    pub risk_category_ru: &'static str,
    pub recommendation: &'static str,
    pub recommendation_ru: &'static str,
}

pub fn amd_risk(genome: &Genome) -> AmdRisk {
    let genotype = |rsid: &str| {
        genome
            .get(rsid)
            .map(|r| r.genotype.clone())
            .filter(|g| g != "--")
            .unwrap_or_default()
    };

    let cfh_genotype = genotype("rs1061170");
    let arms2_genotype = genotype("rs10490924");

    let cfh_risk = match cfh_genotype.as_str() {
        "CC" => 7.0,
        "TC" | "CT" => 2.5,
        _ => 1.0,
    };

    let arms2_risk = match arms2_genotype.as_str() {
        "TT" => 8.0,
        "GT" | "TG" => 2.5,
        _ => 1.0,
    };

    let combined = cfh_risk * arms2_risk;

    let (risk_category, risk_category_ru, recommendation, recommendation_ru) = if combined >= 10.0 {
        (
            "Very High",
            "Очень высокий",
            "Regular ophthalmologic screening strongly recommended",
            "Настоятельно рекомендуется регулярный осмотр офтальмолога",
        )
    } else if combined >= 5.0 {
        (
            "High",
            "Высокий",
            "Regular eye exams recommended, consider AREDS supplements",
            "Рекомендуются регулярные осмотры глаз, рассмотреть добавки AREDS",
        )
    } else if combined >= 2.0 {
        (
            "Moderate",
            "Умеренный",
            "Annual eye exams, healthy lifestyle",
            "Ежегодные осмотры глаз, здоровый образ жизни",
        )
    } else {
        (
            "Normal",
            "Нормальный",
            "Standard eye care",
            "Стандартный уход за глазами",
        )
    };

    AmdRisk {
        cfh_risk_multiplier: cfh_risk,
        arms2_risk_multiplier: arms2_risk,
        combined_risk_multiplier: combined,
        cfh_genotype: if cfh_genotype.is_empty() {
            "Not found".to_string()
        } else {
            cfh_genotype
        },
        arms2_genotype: if arms2_genotype.is_empty() {
            "Not found".to_string()
        } else {
            arms2_genotype
        },
        risk_category,
        risk_category_ru,
        recommendation,
        recommendation_ru,
    }
}

pub fn run(genome: &Genome) -> PanelReport {
    let mut sections = analyze_bi(VISION_SECTIONS, genome);
    sections.extend(analyze_bi(HEARING_SECTIONS, genome));

    let amd = amd_risk(genome);
    let specials = vec![SpecialSection {
        heading: "Риск возрастной макулодистрофии (AMD)".to_string(),
        markdown: format!(
            "- CFH (rs1061170): {} (x{})\n- ARMS2 (rs10490924): {} (x{})\n- **Комбинированный множитель риска: x{:.1}**\n- **Категория: {} / {}**\n- {}\n- {}",
            amd.cfh_genotype,
            amd.cfh_risk_multiplier,
            amd.arms2_genotype,
            amd.arms2_risk_multiplier,
            amd.combined_risk_multiplier,
            amd.risk_category,
            amd.risk_category_ru,
            amd.recommendation,
            amd.recommendation_ru
        ),
    }];

    PanelReport {
        key: "vision_hearing",
        title: "Зрение и слух",
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
    fn both_risk_homozygotes_multiply_to_very_high() {
        let amd = amd_risk(&genome_with(&[("rs1061170", "CC"), ("rs10490924", "TT")]));
        assert_eq!(amd.combined_risk_multiplier, 56.0);
        assert_eq!(amd.risk_category, "Very High");
    }

    #[test]
    fn heterozygotes_land_in_high() {
        let amd = amd_risk(&genome_with(&[("rs1061170", "CT"), ("rs10490924", "GT")]));
        assert_eq!(amd.combined_risk_multiplier, 6.25);
        assert_eq!(amd.risk_category, "High");
    }

    #[test]
    fn missing_markers_are_baseline() {
        let amd = amd_risk(&Genome::new());
        assert_eq!(amd.combined_risk_multiplier, 1.0);
        assert_eq!(amd.risk_category, "Normal");
        assert_eq!(amd.cfh_genotype, "Not found");
    }

    #[test]
    fn no_call_does_not_raise_risk() {
        let amd = amd_risk(&genome_with(&[("rs1061170", "--")]));
        assert_eq!(amd.cfh_risk_multiplier, 1.0);
    }

    #[test]
    fn bilingual_findings_carry_both_texts() {
        let report = run(&genome_with(&[("rs1061170", "CC")]));
        let finding = report.findings().find(|f| f.rsid == "rs1061170").unwrap();
        assert!(finding.found);
        let text = finding.text.as_deref().unwrap();
        assert!(text.contains(" / "));
    }
}
