//! The fourteen authored SNP panels plus the multi-SNP combination calls
//! (APOE, MTHFR) that several panels share.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

use crate::interpret::interpret_section;
use crate::types::{Finding, Genome, Section};

pub mod ancestry;
pub mod carrier;
pub mod cognitive;
pub mod combos;
pub mod detox;
pub mod health;
pub mod immunity;
pub mod longevity;
pub mod pain;
pub mod physical;
pub mod reproductive;
pub mod skin;
pub mod sleep;
pub mod sports;
pub mod vision_hearing;

/// Findings for one section of a panel
#[derive(Debug, Serialize)]
pub struct SectionResult {
    pub key: &'static str,
    pub name: &'static str,
    pub inheritance: Option<&'static str>,
    pub frequency: Option<&'static str>,
    pub findings: Vec<Finding>,
}

/// A panel-specific analysis block appended after the finding tables,
/// already rendered to markdown (the structured values behind it live in
/// the panel modules and carry their own tests).
#[derive(Debug, Serialize)]
pub struct SpecialSection {
    pub heading: String,
    pub markdown: String,
}

/// Everything one panel produced for one genome
#[derive(Debug, Serialize)]
pub struct PanelReport {
    pub key: &'static str,
    pub title: &'static str,
    pub sections: Vec<SectionResult>,
    pub specials: Vec<SpecialSection>,
}

impl PanelReport {
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.sections.iter().flat_map(|s| s.findings.iter())
    }

    pub fn total_count(&self) -> usize {
        self.findings().count()
    }

    pub fn found_count(&self) -> usize {
        self.findings().filter(|f| f.found).count()
    }
}

/// Run the shared interpreter over a panel's static sections
pub fn analyze_sections(sections: &'static [Section], genome: &Genome) -> Vec<SectionResult> {
    sections
        .iter()
        .map(|section| SectionResult {
            key: section.key,
            name: section.name,
            inheritance: section.inheritance,
            frequency: section.frequency,
            findings: interpret_section(section, genome),
        })
        .collect()
}

/// One runnable panel
pub struct PanelRunner {
    pub key: &'static str,
    pub title: &'static str,
    pub run: fn(&Genome) -> PanelReport,
}

pub static PANELS: &[PanelRunner] = &[
    PanelRunner {
        key: "ancestry",
        title: "Анализ происхождения",
        run: ancestry::run,
    },
    PanelRunner {
        key: "carrier",
        title: "Носительство наследственных заболеваний",
        run: carrier::run,
    },
    PanelRunner {
        key: "cognitive",
        title: "Когнитивные особенности",
        run: cognitive::run,
    },
    PanelRunner {
        key: "detox",
        title: "Детоксикация",
        run: detox::run,
    },
    PanelRunner {
        key: "health",
        title: "Здоровье",
        run: health::run,
    },
    PanelRunner {
        key: "immunity",
        title: "Иммунитет и воспаление",
        run: immunity::run,
    },
    PanelRunner {
        key: "longevity",
        title: "Долголетие",
        run: longevity::run,
    },
    PanelRunner {
        key: "pain",
        title: "Чувствительность к боли",
        run: pain::run,
    },
    PanelRunner {
        key: "physical",
        title: "Физические черты",
        run: physical::run,
    },
    PanelRunner {
        key: "reproductive",
        title: "Репродуктивное здоровье",
        run: reproductive::run,
    },
    PanelRunner {
        key: "skin",
        title: "Кожа",
        run: skin::run,
    },
    PanelRunner {
        key: "sleep",
        title: "Сон и хронотип",
        run: sleep::run,
    },
    PanelRunner {
        key: "sports",
        title: "Спорт и фитнес",
        run: sports::run,
    },
    PanelRunner {
        key: "vision_hearing",
        title: "Зрение и слух",
        run: vision_hearing::run,
    },
];

lazy_static! {
    /// Panel lookup by CLI key
    pub static ref PANEL_INDEX: HashMap<&'static str, &'static PanelRunner> =
        PANELS.iter().map(|p| (p.key, p)).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_panel_once() {
        assert_eq!(PANEL_INDEX.len(), PANELS.len());
        assert!(PANEL_INDEX.contains_key("health"));
        assert!(PANEL_INDEX.contains_key("vision_hearing"));
    }

    #[test]
    fn every_panel_runs_on_an_empty_genome() {
        let genome = Genome::new();
        for panel in PANELS {
            let report = (panel.run)(&genome);
            assert_eq!(report.key, panel.key);
            assert_eq!(report.found_count(), 0);
            for finding in report.findings() {
                // absent SNP: tag and text must both be empty
                assert!(!finding.found);
                assert!(finding.tag.is_none());
                assert!(finding.text.is_none());
            }
        }
    }
}
