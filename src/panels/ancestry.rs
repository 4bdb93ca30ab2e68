//! Ancestry panel: ancestry-informative markers, genetic sex from
//! Y-chromosome coverage, and Y-haplogroup marker notes.

use serde::Serialize;

use crate::types::{Genome, Section, SnpDef};

use super::{analyze_sections, PanelReport, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "pigmentation",
        name: "Пигментация (происхождение)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1426654",
                gene: "SLC24A5",
                description: "Светлая кожа (Европа)",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("AA", "european", "Европейский вариант - светлая кожа"),
                    ("AG", "mixed", "Смешанный"),
                    ("GG", "ancestral", "Предковый вариант - тёмная кожа"),
                ],
            },
            SnpDef {
                rsid: "rs16891982",
                gene: "SLC45A2",
                description: "Светлая кожа (Европа)",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "european", "Европейский вариант - светлая кожа"),
                    ("CG", "mixed", "Смешанный"),
                    ("CC", "ancestral", "Предковый вариант"),
                ],
            },
            SnpDef {
                rsid: "rs12913832",
                gene: "HERC2/OCA2",
                description: "Цвет глаз, Северная Европа",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("AA", "northern_european", "Голубые глаза - Северная Европа"),
                    ("AG", "mixed", "Зелёные/ореховые глаза"),
                    ("GG", "other", "Карие глаза"),
                ],
            },
            SnpDef {
                rsid: "rs1800407",
                gene: "OCA2",
                description: "Светлые глаза (Европа)",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("TT", "european", "Светлые глаза"),
                    ("GT", "mixed", "Смешанный"),
                    ("GG", "other", "Тёмные глаза"),
                ],
            },
        ],
    },
    Section {
        key: "east_asian",
        name: "Восточноазиатские маркеры",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs3827760",
                gene: "EDAR",
                description: "Толстые волосы, лопатообразные резцы",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "east_asian", "Восточноазиатский вариант - толстые волосы"),
                    ("CT", "mixed", "Смешанный"),
                    ("TT", "other", "Не-азиатский вариант"),
                ],
            },
            SnpDef {
                rsid: "rs17822931",
                gene: "ABCC11",
                description: "Тип ушной серы",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "east_asian", "Сухая ушная сера (Восточная Азия)"),
                    ("CT", "mixed", "Смешанный"),
                    ("TT", "other", "Влажная ушная сера (Европа/Африка)"),
                ],
            },
        ],
    },
    Section {
        key: "african",
        name: "Африканские маркеры",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs2814778",
                gene: "DARC (Duffy)",
                description: "Duffy null - резистентность к малярии",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "african", "Duffy null - Африканское происхождение, защита от P.vivax"),
                    ("CT", "mixed", "Носитель"),
                    ("TT", "other", "Duffy positive"),
                ],
            },
        ],
    },
    Section {
        key: "lactase",
        name: "Персистенция лактазы (география)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs4988235",
                gene: "LCT (MCM6)",
                description: "Переносимость лактозы",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("TT", "european_pastoral", "Европейский пастушеский вариант - переносит лактозу"),
                    ("CT", "mixed", "Частичная переносимость"),
                    ("CC", "ancestral", "Предковый вариант - непереносимость лактозы"),
                    ("AA", "european_pastoral", "Переносит лактозу"),
                    ("AG", "mixed", "Частичная переносимость"),
                    ("GG", "ancestral", "Непереносимость лактозы"),
                ],
            },
            SnpDef {
                rsid: "rs182549",
                gene: "LCT",
                description: "Персистенция лактазы (арабский/африканский)",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "arabic_african", "Переносит лактозу (арабский/африканский вариант)"),
                    ("CT", "mixed", "Частичная"),
                    ("TT", "ancestral", "Предковый вариант"),
                ],
            },
        ],
    },
    Section {
        key: "neanderthal",
        name: "Неандертальское наследие",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs2298813",
                gene: "Neanderthal",
                description: "Направление роста волос",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("AA", "neanderthal", "Неандертальский вариант"),
                    ("AG", "mixed", "Смешанный"),
                    ("GG", "modern", "Современный человек"),
                ],
            },
            SnpDef {
                rsid: "rs3917862",
                gene: "Neanderthal",
                description: "Свёртываемость крови",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("TT", "neanderthal", "Неандертальский вариант"),
                    ("CT", "mixed", "Смешанный"),
                    ("CC", "modern", "Современный"),
                ],
            },
        ],
    },
];

pub static Y_HAPLOGROUP_MARKERS: &[(&str, &str, &str)] = &[
    ("rs9786184", "R1b", "M269 - Западная Европа"),
    ("rs17250804", "R1a", "M17/M198 - Восточная Европа, Азия"),
    ("rs9341296", "I1", "M253 - Скандинавия"),
    ("rs2032597", "I2", "M438 - Балканы, Восточная Европа"),
    ("rs34126399", "J1", "M267 - Ближний Восток"),
    ("rs34305635", "J2", "M172 - Средиземноморье"),
    ("rs2032604", "E1b1b", "M35 - Африка, Средиземноморье"),
    ("rs2032636", "G", "M201 - Кавказ, Европа"),
    ("rs9341301", "N", "M231 - Финно-угры, Сибирь"),
];

/// Genetic sex, called from the number of Y-chromosome SNPs the chip
/// reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GeneticSex {
    Male,
    Female,
}

pub fn determine_sex(genome: &Genome) -> GeneticSex {
    let y_snps = genome.values().filter(|r| r.chromosome == "Y").count();
    if y_snps > 10 {
        GeneticSex::Male
    } else {
        GeneticSex::Female
    }
}

/// A Y-haplogroup marker present in the genome
#[derive(Debug, Clone, Serialize)]
pub struct YHaplogroupHit {
    pub rsid: &'static str,
    pub haplogroup: &'static str,
    pub description: &'static str,
    pub genotype: String,
}

pub fn y_haplogroup_hits(genome: &Genome) -> Vec<YHaplogroupHit> {
    Y_HAPLOGROUP_MARKERS
        .iter()
        .filter_map(|&(rsid, haplogroup, description)| {
            genome.get(rsid).map(|record| YHaplogroupHit {
                rsid,
                haplogroup,
                description,
                genotype: record.genotype.clone(),
            })
        })
        .collect()
}

fn origin_label(origin: &str) -> &str {
    match origin {
        "european" => "🇪🇺 Европейское",
        "northern_european" => "🇸🇪 Северно-европейское",
        "european_pastoral" => "🐄 Европейское пастушеское",
        "east_asian" => "🇯🇵 Восточноазиатское",
        "african" => "🌍 Африканское",
        "arabic_african" => "🏜️ Арабское/Африканское",
        "neanderthal" => "🦴 Неандертальское",
        "ancestral" => "🌿 Предковое",
        "mixed" => "🔀 Смешанное",
        "modern" => "👤 Современный человек",
        "other" => "• Другое",
        other => other,
    }
}

pub fn run(genome: &Genome) -> PanelReport {
    let sections = analyze_sections(SECTIONS, genome);

    let mut specials = Vec::new();

    let sex = determine_sex(genome);
    specials.push(SpecialSection {
        heading: "Генетический пол".to_string(),
        markdown: format!(
            "**{}**",
            match sex {
                GeneticSex::Male => "Мужской",
                GeneticSex::Female => "Женский",
            }
        ),
    });

    if sex == GeneticSex::Male {
        let hits = y_haplogroup_hits(genome);
        if !hits.is_empty() {
            let mut markdown = String::from(
                "| SNP | Гаплогруппа | Генотип | Описание |\n|-----|-------------|---------|----------|",
            );
            for hit in &hits {
                markdown.push_str(&format!(
                    "\n| {} | {} | {} | {} |",
                    hit.rsid, hit.haplogroup, hit.genotype, hit.description
                ));
            }
            markdown.push_str(
                "\n\n**Примечание**: Для точного определения Y-гаплогруппы рекомендуется YFull или FTDNA",
            );
            specials.push(SpecialSection {
                heading: "Y-хромосомная гаплогруппа (отцовская линия)".to_string(),
                markdown,
            });
        }
    }

    // Tally matched origins across all markers
    let mut origin_counts: Vec<(&str, usize)> = Vec::new();
    for finding in sections.iter().flat_map(|s| s.findings.iter()) {
        if let Some(origin) = finding.tag {
            match origin_counts.iter_mut().find(|(o, _)| *o == origin) {
                Some((_, count)) => *count += 1,
                None => origin_counts.push((origin, 1)),
            }
        }
    }
    origin_counts.sort_by(|a, b| b.1.cmp(&a.1));

    if !origin_counts.is_empty() {
        let mut markdown = String::new();
        for &(origin, count) in &origin_counts {
            markdown.push_str(&format!("- {}: {} маркеров\n", origin_label(origin), count));
        }
        specials.push(SpecialSection {
            heading: "Сводка по происхождению".to_string(),
            markdown,
        });
    }

    specials.push(SpecialSection {
        heading: "Рекомендуемые ресурсы".to_string(),
        markdown: "- **GEDmatch**: gedmatch.com - бесплатное сравнение с базами данных\n\
                   - **DNA.Land**: dna.land - бесплатный анализ происхождения\n\
                   - **YFull**: yfull.com - детальный Y-хромосомный анализ\n\
                   - **FTDNA**: familytreedna.com - трансфер для гаплогрупп"
            .to_string(),
    });

    PanelReport {
        key: "ancestry",
        title: "Анализ происхождения",
        sections,
        specials,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenomeRecord;

    fn record(chromosome: &str, genotype: &str) -> GenomeRecord {
        GenomeRecord {
            chromosome: chromosome.to_string(),
            position: 1,
            genotype: genotype.to_string(),
        }
    }

    #[test]
    fn eleven_y_snps_call_male() {
        let mut genome = Genome::new();
        for i in 0..11 {
            genome.insert(format!("rs{}", i), record("Y", "A"));
        }
        assert_eq!(determine_sex(&genome), GeneticSex::Male);
    }

    #[test]
    fn few_y_snps_call_female() {
        let mut genome = Genome::new();
        genome.insert("rs1".to_string(), record("Y", "A"));
        genome.insert("rs2".to_string(), record("1", "AG"));
        assert_eq!(determine_sex(&genome), GeneticSex::Female);
    }

    #[test]
    fn haplogroup_markers_report_their_group() {
        let mut genome = Genome::new();
        genome.insert("rs9786184".to_string(), record("Y", "A"));
        let hits = y_haplogroup_hits(&genome);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].haplogroup, "R1b");
    }

    #[test]
    fn origin_summary_counts_matched_markers() {
        let mut genome = Genome::new();
        // rs1426654 AA is the European pigmentation variant
        genome.insert("rs1426654".to_string(), record("15", "AA"));
        let report = run(&genome);
        let summary = report
            .specials
            .iter()
            .find(|s| s.heading == "Сводка по происхождению")
            .unwrap();
        assert!(summary.markdown.contains("Европейское"));
    }
}
