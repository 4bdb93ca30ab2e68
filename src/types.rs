use serde::Serialize;
use std::collections::HashMap;

/// One row of a raw genome export (everything after the rsid column)
#[derive(Debug, Clone, Serialize)]
pub struct GenomeRecord {
    pub chromosome: String,
    pub position: u64,
    pub genotype: String,
}

impl GenomeRecord {
    /// `--` means the chip made no call at this position
    pub fn is_no_call(&self) -> bool {
        self.genotype == "--"
    }
}

/// The loaded export: rsid -> record
pub type Genome = HashMap<String, GenomeRecord>;

/// A single authored SNP entry: metadata plus the genotype interpretation table.
/// Interpretations are `(genotype, tag, text)` triples; tags are the open
/// vocabulary the tables were authored with ("high", "carrier", "blue", ...).
#[derive(Debug)]
pub struct SnpDef {
    pub rsid: &'static str,
    pub gene: &'static str,
    pub description: &'static str,
    pub risk_allele: Option<&'static str>,
    pub mutation: Option<&'static str>,
    pub interpretations: &'static [(&'static str, &'static str, &'static str)],
}

/// A named group of SNPs inside a panel. Inheritance and frequency are only
/// authored for carrier-status sections.
#[derive(Debug)]
pub struct Section {
    pub key: &'static str,
    pub name: &'static str,
    pub inheritance: Option<&'static str>,
    pub frequency: Option<&'static str>,
    pub snps: &'static [SnpDef],
}

/// The result of interpreting one SNP against one genome.
///
/// `tag` and `text` are both `None` exactly when the SNP was absent from the
/// genome or its genotype matched none of the tried forms.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub rsid: &'static str,
    pub gene: &'static str,
    pub description: &'static str,
    pub risk_allele: Option<&'static str>,
    pub mutation: Option<&'static str>,
    pub found: bool,
    pub chromosome: Option<String>,
    pub position: Option<u64>,
    pub genotype: Option<String>,
    pub tag: Option<&'static str>,
    pub text: Option<String>,
}

impl Finding {
    /// A SNP the chip never reported
    pub fn absent(def: &SnpDef) -> Self {
        Self {
            rsid: def.rsid,
            gene: def.gene,
            description: def.description,
            risk_allele: def.risk_allele,
            mutation: def.mutation,
            found: false,
            chromosome: None,
            position: None,
            genotype: None,
            tag: None,
            text: None,
        }
    }

    pub fn has_interpretation(&self) -> bool {
        self.tag.is_some()
    }
}

/// Tag groupings used by the cross-panel summary report. The tag vocabulary
/// is open (each panel authors its own), so these match the handful of
/// values the summary tables collect.
pub fn is_high_risk(tag: &str) -> bool {
    matches!(tag, "high" | "very_high" | "high_risk" | "affected")
}

pub fn is_moderate_risk(tag: &str) -> bool {
    matches!(tag, "moderate" | "moderate_risk" | "elevated")
}

pub fn is_protective(tag: &str) -> bool {
    matches!(tag, "protective" | "beneficial")
}

/// Emoji used in the per-panel risk summary blocks
pub fn tag_emoji(tag: &str) -> &'static str {
    match tag {
        "high" | "high_risk" | "affected" => "🔴",
        "very_high" => "🔴🔴",
        "moderate" | "moderate_risk" => "🟡",
        "low" | "low_risk" => "🟢",
        "normal" => "✅",
        "protective" | "beneficial" => "🛡️",
        "carrier" => "⚠️",
        "info" => "ℹ️",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_call_detection() {
        let rec = GenomeRecord {
            chromosome: "1".to_string(),
            position: 12345,
            genotype: "--".to_string(),
        };
        assert!(rec.is_no_call());
    }

    #[test]
    fn summary_groupings_are_disjoint() {
        for tag in ["high", "very_high", "high_risk", "affected"] {
            assert!(is_high_risk(tag));
            assert!(!is_moderate_risk(tag));
            assert!(!is_protective(tag));
        }
        assert!(is_moderate_risk("moderate"));
        assert!(is_protective("beneficial"));
        assert!(!is_high_risk("carrier"));
    }
}
