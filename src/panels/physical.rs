//! Physical traits panel: pigmentation, hair, taste and other visible
//! traits, with eye- and hair-color predictions.

use serde::Serialize;

use crate::types::{Finding, Genome, Section, SnpDef};

use super::{analyze_sections, PanelReport, SectionResult, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "eye_color",
        name: "Цвет глаз",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs12913832",
                gene: "HERC2",
                description: "Главный детерминант цвета глаз",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "blue", "Голубые/серые глаза (основной генотип)"),
                    ("AG", "mixed", "Зелёные или светло-карие глаза"),
                    ("AA", "brown", "Карие глаза"),
                ],
            },
            SnpDef {
                rsid: "rs1800407",
                gene: "OCA2",
                description: "Модификатор цвета глаз",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "standard", "Стандартный вариант"),
                    ("AG", "modifier", "Может осветлять карий цвет"),
                    ("AA", "green_modifier", "Часто связан с зелёными глазами"),
                    ("CT", "modifier", "Может модифицировать цвет"),
                    ("TT", "green_modifier", "Часто связан с зелёными глазами"),
                ],
            },
            SnpDef {
                rsid: "rs12896399",
                gene: "SLC24A4",
                description: "Модификатор цвета глаз",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "darker", "Склонность к более тёмному цвету"),
                    ("GT", "intermediate", "Промежуточный эффект"),
                    ("TT", "lighter", "Склонность к более светлому цвету"),
                ],
            },
            SnpDef {
                rsid: "rs16891982",
                gene: "SLC45A2",
                description: "Пигментация глаз и кожи",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "dark", "Тёмная пигментация (типично для африканцев/азиатов)"),
                    ("CG", "mixed", "Смешанная пигментация"),
                    ("CC", "light", "Светлая пигментация (типично для европейцев)"),
                ],
            },
            SnpDef {
                rsid: "rs1393350",
                gene: "TYR",
                description: "Тирозиназа - пигментация",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "standard", "Стандартный вариант"),
                    ("AG", "lighter", "Немного светлее пигментация"),
                    ("AA", "lighter", "Склонность к более светлым глазам"),
                ],
            },
        ],
    },
    Section {
        key: "hair_color",
        name: "Цвет волос",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs12913832",
                gene: "HERC2",
                description: "Влияет на цвет волос",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "light", "Склонность к светлым волосам"),
                    ("AG", "mixed", "Средний цвет волос"),
                    ("AA", "dark", "Склонность к тёмным волосам"),
                ],
            },
            SnpDef {
                rsid: "rs1805007",
                gene: "MC1R R151C",
                description: "Рыжие волосы (вариант 1)",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Нет влияния на рыжий цвет"),
                    ("CT", "carrier", "Носитель рыжего - может быть рыжеватый оттенок"),
                    ("TT", "red", "Высокая вероятность рыжих волос"),
                ],
            },
            SnpDef {
                rsid: "rs1805008",
                gene: "MC1R R160W",
                description: "Рыжие волосы (вариант 2)",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Нет влияния на рыжий цвет"),
                    ("CT", "carrier", "Носитель рыжего"),
                    ("TT", "red", "Высокая вероятность рыжих волос"),
                ],
            },
            SnpDef {
                rsid: "rs1805009",
                gene: "MC1R D294H",
                description: "Рыжие волосы (вариант 3)",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Нет влияния на рыжий цвет"),
                    ("CG", "carrier", "Носитель рыжего"),
                    ("CC", "red", "Высокая вероятность рыжих волос"),
                ],
            },
            SnpDef {
                rsid: "rs12821256",
                gene: "KITLG",
                description: "Блондинизм",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("TT", "dark", "Тёмные волосы"),
                    ("CT", "light_carrier", "Может осветлять цвет волос"),
                    ("CC", "blonde", "Склонность к светлым/блондинистым волосам"),
                ],
            },
        ],
    },
    Section {
        key: "hair_structure",
        name: "Структура волос",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs11803731",
                gene: "TCHH",
                description: "Кудрявость волос",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("AA", "straight", "Прямые волосы"),
                    ("AT", "wavy", "Волнистые волосы"),
                    ("TT", "curly", "Кудрявые волосы"),
                ],
            },
            SnpDef {
                rsid: "rs3827760",
                gene: "EDAR",
                description: "Толщина волос (азиатский вариант)",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("AA", "thin", "Тонкие волосы (европейский вариант)"),
                    ("AG", "intermediate", "Средняя толщина"),
                    ("GG", "thick", "Толстые, жёсткие волосы (азиатский вариант)"),
                    ("CC", "thin", "Тонкие волосы"),
                    ("CT", "intermediate", "Средняя толщина"),
                    ("TT", "thick", "Толстые волосы"),
                ],
            },
        ],
    },
    Section {
        key: "baldness",
        name: "Облысение (мужское)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs2180439",
                gene: "HDAC9",
                description: "Андрогенная алопеция",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "high_risk", "Повышенный риск раннего облысения"),
                    ("CT", "moderate_risk", "Умеренный риск облысения"),
                    ("TT", "low_risk", "Низкий риск раннего облысения"),
                ],
            },
            SnpDef {
                rsid: "rs6625163",
                gene: "AR",
                description: "Андрогенная алопеция (X-хромосома)",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("AA", "high_risk", "Повышенный риск облысения"),
                    ("AC", "moderate_risk", "Умеренный риск"),
                    ("CC", "low_risk", "Низкий риск облысения"),
                ],
            },
        ],
    },
    Section {
        key: "skin",
        name: "Пигментация кожи",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1426654",
                gene: "SLC24A5",
                description: "Главный ген светлой кожи у европейцев",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("AA", "light", "Светлая кожа (европейский вариант)"),
                    ("AG", "intermediate", "Промежуточная пигментация"),
                    ("GG", "dark", "Тёмная кожа (африканский/азиатский вариант)"),
                ],
            },
            SnpDef {
                rsid: "rs16891982",
                gene: "SLC45A2",
                description: "Пигментация кожи",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "dark", "Тёмная пигментация"),
                    ("CG", "intermediate", "Промежуточная"),
                    ("CC", "light", "Светлая кожа"),
                ],
            },
        ],
    },
    Section {
        key: "freckles",
        name: "Веснушки",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1805007",
                gene: "MC1R",
                description: "Веснушки и чувствительность к солнцу",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "no_freckles", "Меньше веснушек, лучше загар"),
                    ("CT", "some_freckles", "Склонность к веснушкам, осторожно на солнце"),
                    ("TT", "many_freckles", "Много веснушек, высокая чувствительность к солнцу"),
                ],
            },
        ],
    },
    Section {
        key: "earwax",
        name: "Тип ушной серы",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs17822931",
                gene: "ABCC11",
                description: "Тип ушной серы и запах тела",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "dry", "Сухая ушная сера (азиатский тип), меньше запаха тела"),
                    ("CT", "intermediate", "Промежуточный тип"),
                    ("TT", "wet", "Влажная ушная сера (европейский тип), обычный запах тела"),
                ],
            },
        ],
    },
    Section {
        key: "light_sneeze",
        name: "Световой чихательный рефлекс (ACHOO)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs10427255",
                gene: "Около ZEB2",
                description: "Чихание от яркого света",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "no_achoo", "Нет светового рефлекса"),
                    ("CT", "mild_achoo", "Слабый световой рефлекс"),
                    ("TT", "achoo", "Чихание при взгляде на яркий свет"),
                ],
            },
        ],
    },
    Section {
        key: "taste",
        name: "Вкусовое восприятие",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs713598",
                gene: "TAS2R38",
                description: "Чувствительность к горечи (PROP/PTC)",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "supertaster", "Супертастер - сильно чувствует горечь (брокколи, кофе)"),
                    ("CG", "medium", "Средняя чувствительность к горечи"),
                    ("CC", "non_taster", "Не чувствует горечь PROP/PTC"),
                ],
            },
            SnpDef {
                rsid: "rs72921001",
                gene: "OR6A2",
                description: "Восприятие кориандра (кинзы)",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("AA", "soap", "Кориандр пахнет мылом"),
                    ("AC", "mild_soap", "Слабое восприятие мыльного вкуса"),
                    ("CC", "normal", "Нормальное восприятие кориандра - травяной аромат"),
                ],
            },
        ],
    },
];

fn section_findings<'a>(sections: &'a [SectionResult], key: &str) -> &'a [Finding] {
    sections
        .iter()
        .find(|s| s.key == key)
        .map(|s| s.findings.as_slice())
        .unwrap_or(&[])
}

fn genotype_in<'a>(findings: &'a [Finding], rsid: &str) -> &'a str {
    findings
        .iter()
        .find(|f| f.rsid == rsid)
        .and_then(|f| f.genotype.as_deref())
        .unwrap_or("")
}

fn tag_in<'a>(findings: &'a [Finding], rsid: &str) -> &'a str {
    findings
        .iter()
        .find(|f| f.rsid == rsid)
        .and_then(|f| f.tag)
        .unwrap_or("")
}

/// IrisPlex-like eye color prediction: HERC2 sets the base probabilities,
/// the minor markers shift them
#[derive(Debug, Clone, Serialize)]
pub struct EyeColorPrediction {
    pub prediction: &'static str,
    pub blue_probability: f64,
    pub green_probability: f64,
    pub brown_probability: f64,
}

pub fn predict_eye_color(sections: &[SectionResult]) -> Option<EyeColorPrediction> {
    let eye = section_findings(sections, "eye_color");

    let (mut blue, mut green, mut brown): (f64, f64, f64) = match genotype_in(eye, "rs12913832") {
        "GG" => (0.85, 0.10, 0.05),
        "AG" | "GA" => (0.25, 0.35, 0.40),
        "AA" => (0.02, 0.15, 0.83),
        _ => return None,
    };

    match genotype_in(eye, "rs1800407") {
        "AA" | "TT" => {
            green += 0.15;
            brown -= 0.10;
            blue -= 0.05;
        }
        "AG" | "CT" => green += 0.05,
        _ => {}
    }

    match genotype_in(eye, "rs12896399") {
        "TT" => {
            blue += 0.05;
            brown -= 0.05;
        }
        "GG" => {
            brown += 0.05;
            blue -= 0.05;
        }
        _ => {}
    }

    match genotype_in(eye, "rs16891982") {
        "CC" => {
            blue += 0.05;
            green += 0.02;
        }
        "GG" => {
            brown += 0.15;
            blue -= 0.10;
        }
        _ => {}
    }

    let total = blue + green + brown;
    let blue = (blue / total).clamp(0.0, 1.0);
    let green = (green / total).clamp(0.0, 1.0);
    let brown = (brown / total).clamp(0.0, 1.0);

    let prediction = if blue >= green && blue >= brown {
        "Голубые/серые"
    } else if green >= blue && green >= brown {
        "Зелёные"
    } else {
        "Карие"
    };

    Some(EyeColorPrediction {
        prediction,
        blue_probability: (blue * 1000.0).round() / 10.0,
        green_probability: (green * 1000.0).round() / 10.0,
        brown_probability: (brown * 1000.0).round() / 10.0,
    })
}

/// Hair color from the MC1R red-hair variants plus HERC2/KITLG lightness
#[derive(Debug, Clone, Serialize)]
pub struct HairColorPrediction {
    pub prediction: &'static str,
    pub confidence: &'static str,
    pub red_carrier: bool,
    pub red_alleles: usize,
    pub mc1r_note: Option<&'static str>,
}

pub fn predict_hair_color(sections: &[SectionResult]) -> HairColorPrediction {
    let hair = section_findings(sections, "hair_color");

    let mut red_alleles = 0usize;
    let mut carrier_alleles = 0usize;

    for rsid in ["rs1805007", "rs1805008", "rs1805009"] {
        match tag_in(hair, rsid) {
            "red" => red_alleles += 2,
            "carrier" => carrier_alleles += 1,
            _ => {}
        }
    }

    let herc2_tag = tag_in(hair, "rs12913832");
    let kitlg_tag = tag_in(hair, "rs12821256");

    let is_red = red_alleles >= 2 || carrier_alleles >= 2;
    let red_carrier = carrier_alleles >= 1;

    let (prediction, confidence) = if is_red {
        (
            "Рыжие волосы",
            if red_alleles >= 2 { "высокая" } else { "умеренная" },
        )
    } else if kitlg_tag == "blonde" && herc2_tag == "light" {
        ("Светлые/блонд волосы", "высокая")
    } else if matches!(kitlg_tag, "blonde" | "light_carrier") || herc2_tag == "light" {
        ("Светлые волосы", "умеренная")
    } else if herc2_tag == "dark" {
        ("Тёмные волосы", "высокая")
    } else {
        ("Средний цвет волос", "низкая")
    };

    HairColorPrediction {
        prediction,
        confidence,
        red_carrier,
        red_alleles: red_alleles + carrier_alleles,
        mc1r_note: if red_carrier {
            Some("Носитель MC1R - возможен рыжеватый оттенок у детей")
        } else {
            None
        },
    }
}

pub fn run(genome: &Genome) -> PanelReport {
    let sections = analyze_sections(SECTIONS, genome);

    let mut specials = Vec::new();

    if let Some(eyes) = predict_eye_color(&sections) {
        specials.push(SpecialSection {
            heading: "Прогноз цвета глаз".to_string(),
            markdown: format!(
                "- **{}**\n- Голубые: {:.1}%\n- Зелёные: {:.1}%\n- Карие: {:.1}%",
                eyes.prediction, eyes.blue_probability, eyes.green_probability, eyes.brown_probability
            ),
        });
    }

    let hair = predict_hair_color(&sections);
    let mut hair_md = format!(
        "- **{}** (уверенность: {})",
        hair.prediction, hair.confidence
    );
    if let Some(note) = hair.mc1r_note {
        hair_md.push_str(&format!("\n- {}", note));
    }
    specials.push(SpecialSection {
        heading: "Прогноз цвета волос".to_string(),
        markdown: hair_md,
    });

    PanelReport {
        key: "physical",
        title: "Физические черты",
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
                    chromosome: "15".to_string(),
                    position: 1,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    #[test]
    fn herc2_gg_predicts_blue_eyes() {
        let sections = analyze_sections(SECTIONS, &genome_with(&[("rs12913832", "GG")]));
        let eyes = predict_eye_color(&sections).unwrap();
        assert_eq!(eyes.prediction, "Голубые/серые");
        assert!(eyes.blue_probability > 80.0);
    }

    #[test]
    fn missing_herc2_gives_no_eye_prediction() {
        let sections = analyze_sections(SECTIONS, &Genome::new());
        assert!(predict_eye_color(&sections).is_none());
    }

    #[test]
    fn transposed_herc2_still_reads_as_heterozygous() {
        let sections = analyze_sections(SECTIONS, &genome_with(&[("rs12913832", "GA")]));
        let eyes = predict_eye_color(&sections).unwrap();
        assert_eq!(eyes.prediction, "Карие");
    }

    #[test]
    fn two_mc1r_carrier_variants_predict_red_hair() {
        // rs1805007 CT and rs1805008 CT are authored carrier genotypes
        let sections = analyze_sections(
            SECTIONS,
            &genome_with(&[("rs1805007", "CT"), ("rs1805008", "CT")]),
        );
        let hair = predict_hair_color(&sections);
        assert_eq!(hair.prediction, "Рыжие волосы");
        assert_eq!(hair.confidence, "умеренная");
        assert!(hair.red_carrier);
    }

    #[test]
    fn unknown_markers_fall_back_to_medium_hair() {
        let sections = analyze_sections(SECTIONS, &Genome::new());
        let hair = predict_hair_color(&sections);
        assert_eq!(hair.prediction, "Средний цвет волос");
        assert_eq!(hair.confidence, "низкая");
        assert!(hair.mc1r_note.is_none());
    }
}
