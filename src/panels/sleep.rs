//! Sleep and chronotype panel with combined chronotype, sleep-quality and
//! caffeine-impact calls. This table was authored in English.

use serde::Serialize;

use crate::types::{Finding, Genome, Section, SnpDef};

use super::{analyze_sections, PanelReport, SectionResult, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "chronotype",
        name: "Chronotype (Morning/Evening Preference)",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1801260",
                gene: "CLOCK",
                description: "Master circadian clock gene - morning/evening preference",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("TT", "morning", "Morning person (lark) - natural early riser"),
                    ("TC", "intermediate", "Intermediate chronotype - flexible schedule"),
                    ("CT", "intermediate", "Intermediate chronotype - flexible schedule"),
                    ("CC", "evening", "Evening person (owl) - natural night owl"),
                ],
            },
            SnpDef {
                rsid: "rs2304672",
                gene: "PER2",
                description: "Period circadian protein 2 - circadian rhythm regulation",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Typical circadian rhythm"),
                    ("CG", "delayed", "Slightly delayed circadian phase"),
                    ("GC", "delayed", "Slightly delayed circadian phase"),
                    ("GG", "delayed", "Delayed sleep phase tendency - later sleep times"),
                ],
            },
            SnpDef {
                rsid: "rs228697",
                gene: "PER3",
                description: "Period circadian protein 3 - sleep timing and duration",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("CC", "morning", "Morning preference, shorter sleep need"),
                    ("CG", "intermediate", "Intermediate chronotype"),
                    ("GC", "intermediate", "Intermediate chronotype"),
                    ("GG", "evening", "Evening preference, may need more sleep"),
                ],
            },
        ],
    },
    Section {
        key: "sleep_depth",
        name: "Sleep Depth and Quality",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs73598374",
                gene: "ADA",
                description: "Adenosine deaminase - adenosine metabolism affects sleep depth",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "deep", "Deep sleeper - less sensitive to disturbances"),
                    ("CT", "average", "Average sleep depth"),
                    ("TC", "average", "Average sleep depth"),
                    ("TT", "light", "Light sleeper - more sensitive to disturbances"),
                ],
            },
            SnpDef {
                rsid: "rs5751876",
                gene: "ADORA2A",
                description: "Adenosine A2A receptor - sleep pressure and caffeine sensitivity",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "deep", "Normal adenosine signaling - good sleep quality"),
                    ("CT", "average", "Moderate caffeine sensitivity"),
                    ("TC", "average", "Moderate caffeine sensitivity"),
                    ("TT", "light", "High caffeine sensitivity - disturbed sleep from caffeine"),
                ],
            },
        ],
    },
    Section {
        key: "sleep_duration",
        name: "Sleep Duration",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1823125",
                gene: "PAX8",
                description: "Paired box 8 - associated with sleep duration",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("AA", "long", "Tendency for longer sleep duration (>8h)"),
                    ("AG", "average", "Average sleep duration needs (~7-8h)"),
                    ("GA", "average", "Average sleep duration needs (~7-8h)"),
                    ("GG", "short", "Short sleeper tendency (<7h may be sufficient)"),
                ],
            },
            SnpDef {
                rsid: "rs11046205",
                gene: "ABCC9",
                description: "ATP-binding cassette C9 - sleep duration regulation",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "short", "Short sleep duration tendency"),
                    ("AG", "average", "Average sleep duration"),
                    ("GA", "average", "Average sleep duration"),
                    ("AA", "long", "Longer sleep duration needed (~30 min more)"),
                ],
            },
        ],
    },
    Section {
        key: "melatonin",
        name: "Melatonin Regulation",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs10830963",
                gene: "MTNR1B",
                description: "Melatonin receptor 1B - melatonin signaling",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Normal melatonin receptor function"),
                    ("CG", "reduced", "Slightly reduced melatonin sensitivity"),
                    ("GC", "reduced", "Slightly reduced melatonin sensitivity"),
                    ("GG", "reduced", "Reduced melatonin receptor function - may benefit from melatonin"),
                ],
            },
            SnpDef {
                rsid: "rs4753426",
                gene: "MTNR1B",
                description: "Melatonin receptor 1B variant - chronotype influence",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("TT", "normal", "Normal melatonin timing"),
                    ("CT", "delayed", "Slightly delayed melatonin onset"),
                    ("TC", "delayed", "Slightly delayed melatonin onset"),
                    ("CC", "delayed", "Delayed melatonin onset - later natural sleep time"),
                ],
            },
        ],
    },
    Section {
        key: "restless_legs",
        name: "Restless Legs Syndrome Risk",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs2300478",
                gene: "MEIS1",
                description: "Meis homeobox 1 - strongest genetic factor for RLS",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("AA", "low", "Low risk for restless legs syndrome"),
                    ("AG", "moderate", "Moderate risk for RLS (~1.5x)"),
                    ("GA", "moderate", "Moderate risk for RLS (~1.5x)"),
                    ("GG", "high", "Elevated risk for restless legs syndrome (~2x)"),
                ],
            },
            SnpDef {
                rsid: "rs3923809",
                gene: "BTBD9",
                description: "BTB domain containing 9 - associated with RLS and PLM",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "low", "Lower risk for RLS and periodic limb movements"),
                    ("AG", "moderate", "Moderate risk for RLS"),
                    ("GA", "moderate", "Moderate risk for RLS"),
                    ("AA", "high", "Elevated risk for RLS and periodic limb movements"),
                ],
            },
        ],
    },
    Section {
        key: "insomnia_risk",
        name: "Insomnia Risk",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs113851554",
                gene: "MEIS1",
                description: "MEIS1 insomnia variant - sleep onset difficulty",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "low", "Lower genetic risk for insomnia"),
                    ("CT", "moderate", "Moderate insomnia susceptibility"),
                    ("TC", "moderate", "Moderate insomnia susceptibility"),
                    ("TT", "high", "Higher genetic susceptibility to insomnia"),
                ],
            },
        ],
    },
    Section {
        key: "caffeine_and_sleep",
        name: "Caffeine Metabolism and Sleep",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs762551",
                gene: "CYP1A2",
                description: "Cytochrome P450 1A2 - primary caffeine metabolizer",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("AA", "fast", "Fast caffeine metabolizer - caffeine clears quickly"),
                    ("AC", "intermediate", "Intermediate caffeine metabolism"),
                    ("CA", "intermediate", "Intermediate caffeine metabolism"),
                    ("CC", "slow", "Slow caffeine metabolizer - caffeine affects sleep longer"),
                ],
            },
            SnpDef {
                rsid: "rs5751876",
                gene: "ADORA2A",
                description: "Adenosine A2A receptor - caffeine binding site",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "low_sensitivity", "Lower caffeine sensitivity - less sleep disruption"),
                    ("CT", "moderate_sensitivity", "Moderate caffeine sensitivity"),
                    ("TC", "moderate_sensitivity", "Moderate caffeine sensitivity"),
                    ("TT", "high_sensitivity", "High caffeine sensitivity - caffeine disrupts sleep"),
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

/// Morning/evening preference aggregated over the chronotype and melatonin
/// sections
#[derive(Debug, Clone, Serialize)]
pub struct Chronotype {
    pub chronotype: &'static str,
    pub morning_score: f64,
    pub evening_score: f64,
    pub confidence: &'static str,
    pub description: &'static str,
}

pub fn chronotype(sections: &[SectionResult]) -> Chronotype {
    let mut morning_score = 0.0;
    let mut evening_score = 0.0;
    let mut total_snps = 0usize;

    for f in section_findings(sections, "chronotype") {
        if let (true, Some(tag)) = (f.found, f.tag) {
            total_snps += 1;
            match tag {
                "morning" => morning_score += 2.0,
                "evening" => evening_score += 2.0,
                "delayed" => evening_score += 1.0,
                "intermediate" => {
                    morning_score += 0.5;
                    evening_score += 0.5;
                }
                _ => {}
            }
        }
    }

    for f in section_findings(sections, "melatonin") {
        if let (true, Some(tag)) = (f.found, f.tag) {
            total_snps += 1;
            match tag {
                "delayed" => evening_score += 1.0,
                "normal" => morning_score += 0.5,
                _ => {}
            }
        }
    }

    if total_snps == 0 {
        return Chronotype {
            chronotype: "unknown",
            morning_score: 0.0,
            evening_score: 0.0,
            confidence: "low",
            description: "Insufficient data to determine chronotype",
        };
    }

    let diff = morning_score - evening_score;

    let (chronotype, description) = if diff > 1.5 {
        (
            "morning",
            "Strong morning chronotype (lark) - naturally wake early, most alert in morning",
        )
    } else if diff > 0.5 {
        (
            "moderate_morning",
            "Moderate morning preference - function well with early schedule",
        )
    } else if diff < -1.5 {
        (
            "evening",
            "Strong evening chronotype (owl) - naturally stay up late, peak alertness evening",
        )
    } else if diff < -0.5 {
        (
            "moderate_evening",
            "Moderate evening preference - may struggle with early mornings",
        )
    } else {
        (
            "intermediate",
            "Intermediate chronotype - adaptable to various schedules",
        )
    };

    let confidence = if total_snps >= 4 {
        "high"
    } else if total_snps >= 2 {
        "moderate"
    } else {
        "low"
    };

    Chronotype {
        chronotype,
        morning_score,
        evening_score,
        confidence,
        description,
    }
}

/// Genetic sleep-quality predisposition on a 1-10 scale
#[derive(Debug, Clone, Serialize)]
pub struct SleepQuality {
    pub score: f64,
    pub assessment: &'static str,
    pub factors: Vec<String>,
}

pub fn sleep_quality(sections: &[SectionResult]) -> SleepQuality {
    let mut score: f64 = 5.0;
    let mut factors = Vec::new();

    for f in section_findings(sections, "sleep_depth") {
        if let (true, Some(tag)) = (f.found, f.tag) {
            match tag {
                "deep" => {
                    score += 1.0;
                    factors.push(format!("+ Deep sleep tendency ({})", f.gene));
                }
                "light" => {
                    score -= 1.0;
                    factors.push(format!("- Light sleeper tendency ({})", f.gene));
                }
                _ => {}
            }
        }
    }

    for f in section_findings(sections, "restless_legs") {
        if let (true, Some(tag)) = (f.found, f.tag) {
            match tag {
                "high" => {
                    score -= 1.5;
                    factors.push(format!("- Elevated RLS risk ({})", f.gene));
                }
                "low" => {
                    score += 0.5;
                    factors.push(format!("+ Low RLS risk ({})", f.gene));
                }
                _ => {}
            }
        }
    }

    for f in section_findings(sections, "insomnia_risk") {
        if let (true, Some(tag)) = (f.found, f.tag) {
            match tag {
                "high" => {
                    score -= 1.5;
                    factors.push(format!("- Higher insomnia susceptibility ({})", f.gene));
                }
                "low" => {
                    score += 0.5;
                    factors.push(format!("+ Lower insomnia risk ({})", f.gene));
                }
                _ => {}
            }
        }
    }

    let score = score.clamp(1.0, 10.0);

    let assessment = if score >= 7.0 {
        "Good genetic predisposition for sleep quality"
    } else if score >= 5.0 {
        "Average genetic sleep quality predisposition"
    } else {
        "May be genetically prone to sleep difficulties"
    };

    SleepQuality {
        score: (score * 10.0).round() / 10.0,
        assessment,
        factors,
    }
}

/// Caffeine's likely impact on sleep, with a cutoff-time recommendation
#[derive(Debug, Clone, Serialize)]
pub struct CaffeineImpact {
    pub metabolism: &'static str,
    pub sensitivity: &'static str,
    pub recommendation: &'static str,
}

pub fn caffeine_impact(sections: &[SectionResult]) -> CaffeineImpact {
    let mut metabolism = "unknown";
    let mut sensitivity = "unknown";

    for f in section_findings(sections, "caffeine_and_sleep") {
        if !f.found {
            continue;
        }

        if f.rsid == "rs762551" {
            metabolism = match f.tag {
                Some("fast") => "fast",
                Some("slow") => "slow",
                _ => "intermediate",
            };
        }

        if f.rsid == "rs5751876" {
            if let Some(tag) = f.tag {
                if tag.contains("sensitivity") {
                    sensitivity = if tag.contains("high") {
                        "high"
                    } else if tag.contains("low") {
                        "low"
                    } else {
                        "moderate"
                    };
                }
            }
        }
    }

    let recommendation = if metabolism == "slow" || sensitivity == "high" {
        "Avoid caffeine after 12:00 PM (noon) - prolonged effects likely"
    } else if metabolism == "slow" && sensitivity == "high" {
        "Avoid caffeine after 10:00 AM - very sensitive to caffeine effects"
    } else if metabolism == "fast" && sensitivity == "low" {
        "Caffeine cutoff by 4:00 PM should be sufficient"
    } else if metabolism == "fast" {
        "Caffeine cutoff by 2:00-3:00 PM recommended"
    } else if metabolism == "intermediate" {
        "Caffeine cutoff by 2:00 PM recommended"
    } else {
        "Unknown - insufficient data"
    };

    CaffeineImpact {
        metabolism,
        sensitivity,
        recommendation,
    }
}

pub fn run(genome: &Genome) -> PanelReport {
    let sections = analyze_sections(SECTIONS, genome);

    let mut specials = Vec::new();

    let chrono = chronotype(&sections);
    specials.push(SpecialSection {
        heading: "Хронотип".to_string(),
        markdown: format!(
            "- Morning score: {:.1}\n- Evening score: {:.1}\n- **Тип: {}** (confidence: {})\n- {}",
            chrono.morning_score,
            chrono.evening_score,
            chrono.chronotype,
            chrono.confidence,
            chrono.description
        ),
    });

    let quality = sleep_quality(&sections);
    let mut quality_md = format!(
        "- **Оценка: {:.1}/10**\n- {}",
        quality.score, quality.assessment
    );
    for factor in &quality.factors {
        quality_md.push_str(&format!("\n  - {}", factor));
    }
    specials.push(SpecialSection {
        heading: "Качество сна".to_string(),
        markdown: quality_md,
    });

    let caffeine = caffeine_impact(&sections);
    specials.push(SpecialSection {
        heading: "Кофеин и сон".to_string(),
        markdown: format!(
            "- Метаболизм: {}\n- Чувствительность: {}\n- {}",
            caffeine.metabolism, caffeine.sensitivity, caffeine.recommendation
        ),
    });

    PanelReport {
        key: "sleep",
        title: "Сон и хронотип",
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
                    chromosome: "2".to_string(),
                    position: 1,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    #[test]
    fn empty_genome_has_unknown_chronotype() {
        let sections = analyze_sections(SECTIONS, &Genome::new());
        let chrono = chronotype(&sections);
        assert_eq!(chrono.chronotype, "unknown");
        assert_eq!(chrono.confidence, "low");
    }

    #[test]
    fn neutral_genome_scores_average_sleep_quality() {
        let sections = analyze_sections(SECTIONS, &Genome::new());
        let quality = sleep_quality(&sections);
        assert_eq!(quality.score, 5.0);
        assert!(quality.factors.is_empty());
    }

    #[test]
    fn slow_metabolizer_gets_the_noon_cutoff() {
        let genome = genome_with(&[("rs762551", "CC")]);
        let sections = analyze_sections(SECTIONS, &genome);
        let caffeine = caffeine_impact(&sections);
        assert_eq!(caffeine.metabolism, "slow");
        assert!(caffeine.recommendation.contains("12:00"));
    }

    #[test]
    fn caffeine_sensitivity_reads_the_sensitivity_tags() {
        let genome = genome_with(&[("rs5751876", "TT")]);
        let sections = analyze_sections(SECTIONS, &genome);
        let caffeine = caffeine_impact(&sections);
        assert_eq!(caffeine.sensitivity, "high");
    }
}
