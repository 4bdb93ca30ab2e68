//! Multi-SNP combination calls shared between panels.
//!
//! APOE exists in two authored variants that disagree on several diplotype
//! assignments (e.g. rs429358=TT + rs7412=CC). The risk-table variant is
//! used by the health and cognitive panels, the lifespan variant by the
//! longevity panel. Both are kept as written; reconciling them would change
//! report output in ways the source never specified.

use serde::Serialize;

use crate::interpret::normalize_genotype;
use crate::types::{Finding, Genome};

/// APOE diplotype call from rs429358 and rs7412 (risk-table variant)
#[derive(Debug, Clone, Serialize)]
pub struct ApoeCall {
    pub rs429358: String,
    pub rs7412: String,
    pub genotype: String,
    pub tag: &'static str,
    pub text: String,
}

/// rs429358 (C=ε4), rs7412 (T=ε2); keys are normalized genotype pairs
static APOE_RISK_TABLE: &[((&str, &str), (&str, &str, &str))] = &[
    (("TT", "CC"), ("ε2/ε2", "protective", "Защитный генотип - пониженный риск Альцгеймера")),
    (("TT", "CT"), ("ε2/ε3", "protective", "Немного пониженный риск")),
    (("CT", "CC"), ("ε2/ε4", "moderate", "Смешанный - один защитный, один рисковый аллель")),
    (("TT", "TT"), ("ε3/ε3", "normal", "Наиболее распространённый генотип - обычный риск")),
    (("CT", "CT"), ("ε3/ε4", "high", "Повышенный риск Альцгеймера (~3x)")),
    (("CC", "TT"), ("ε4/ε4", "very_high", "Значительно повышенный риск Альцгеймера (~12x)")),
    (("CT", "TT"), ("ε3/ε4", "high", "Повышенный риск Альцгеймера (~3x)")),
    (("CC", "CT"), ("ε4/ε4 или ε3/ε4", "high", "Повышенный риск")),
];

fn genotype_of(genome: &Genome, rsid: &str) -> String {
    genome.get(rsid).map(|r| r.genotype.clone()).unwrap_or_default()
}

pub fn apoe_risk_call(genome: &Genome) -> ApoeCall {
    let rs429358 = genotype_of(genome, "rs429358");
    let rs7412 = genotype_of(genome, "rs7412");

    let n429 = normalize_genotype(&rs429358);
    let n7412 = normalize_genotype(&rs7412);

    for &((g1, g2), (apoe, tag, text)) in APOE_RISK_TABLE {
        if normalize_genotype(g1) == n429 && normalize_genotype(g2) == n7412 {
            return ApoeCall {
                rs429358,
                rs7412,
                genotype: apoe.to_string(),
                tag,
                text: text.to_string(),
            };
        }
    }

    ApoeCall {
        genotype: "Не определён".to_string(),
        tag: "unknown",
        text: format!("Комбинация {}/{} не в таблице", rs429358, rs7412),
        rs429358,
        rs7412,
    }
}

/// APOE diplotype call, lifespan variant (bilingual, with allele-count
/// fallback for pairs outside the table)
#[derive(Debug, Clone, Serialize)]
pub struct ApoeLifespanCall {
    pub rs429358: String,
    pub rs7412: String,
    pub genotype: String,
    pub text: String,
    pub text_ru: String,
}

static APOE_LIFESPAN_TABLE: &[((&str, &str), (&str, &str, &str))] = &[
    (
        ("TT", "CC"),
        (
            "ε3/ε3",
            "Most common genotype - baseline risk",
            "Самый распространённый генотип - базовый риск",
        ),
    ),
    (
        ("TT", "CT"),
        (
            "ε2/ε3",
            "Protective - lower cardiovascular and Alzheimer's risk",
            "Защитный - сниженный риск сердечно-сосудистых и Альцгеймера",
        ),
    ),
    (
        ("TT", "TT"),
        (
            "ε2/ε2",
            "Highly protective - lowest Alzheimer's risk, but increased triglycerides",
            "Высоко защитный - минимальный риск Альцгеймера, но повышены триглицериды",
        ),
    ),
    (
        ("CT", "CC"),
        (
            "ε3/ε4",
            "One ε4 allele - moderately increased Alzheimer's risk",
            "Один аллель ε4 - умеренно повышенный риск Альцгеймера",
        ),
    ),
    (
        ("CT", "CT"),
        (
            "ε2/ε4",
            "Mixed - ε2 partially compensates for ε4",
            "Смешанный - ε2 частично компенсирует ε4",
        ),
    ),
    (
        ("CC", "CC"),
        (
            "ε4/ε4",
            "Two ε4 alleles - significantly increased Alzheimer's risk",
            "Два аллеля ε4 - значительно повышенный риск Альцгеймера",
        ),
    ),
];

pub fn apoe_lifespan_call(genome: &Genome) -> ApoeLifespanCall {
    let rs429358 = normalize_genotype(&genotype_of(genome, "rs429358"));
    let rs7412 = normalize_genotype(&genotype_of(genome, "rs7412"));

    for &((g1, g2), (apoe, en, ru)) in APOE_LIFESPAN_TABLE {
        if g1 == rs429358 && g2 == rs7412 {
            return ApoeLifespanCall {
                rs429358,
                rs7412,
                genotype: apoe.to_string(),
                text: en.to_string(),
                text_ru: ru.to_string(),
            };
        }
    }

    // Fall back to counting risk alleles: rs429358 C=ε4, rs7412 T=ε2
    let e4_count = rs429358.matches('C').count();
    let e2_count = rs7412.matches('T').count();

    let genotype = match (e4_count, e2_count) {
        (0, 0) => "ε3/ε3",
        (0, 1) => "ε2/ε3",
        (0, 2) => "ε2/ε2",
        (1, 0) => "ε3/ε4",
        (1, 1) => "ε2/ε4",
        (2, _) => "ε4/ε4",
        _ => "Unknown",
    };

    ApoeLifespanCall {
        genotype: genotype.to_string(),
        text: format!("Determined from rs429358={}, rs7412={}", rs429358, rs7412),
        text_ru: format!("Определено из rs429358={}, rs7412={}", rs429358, rs7412),
        rs429358,
        rs7412,
    }
}

/// Combined MTHFR C677T + A1298C status
#[derive(Debug, Clone, Serialize)]
pub struct MthfrStatus {
    pub c677t: String,
    pub a1298c: String,
    pub status: &'static str,
    pub text: &'static str,
}

/// Derive the combined MTHFR status from the rs1801133 (C677T) and
/// rs1801131 (A1298C) findings. Genotypes may arrive on either strand;
/// the AG and GT special cases reproduce how the authored tables read
/// this assay (GT is taken as normal/normal on A1298C).
pub fn mthfr_status(findings: &[Finding]) -> Option<MthfrStatus> {
    let c677t = findings
        .iter()
        .find(|f| f.rsid == "rs1801133")
        .and_then(|f| f.genotype.clone())?;
    let a1298c = findings
        .iter()
        .find(|f| f.rsid == "rs1801131")
        .and_then(|f| f.genotype.clone())?;

    let is_c677t_homo = c677t == "TT" || c677t == "AA";
    let mut is_c677t_hetero = (c677t.contains('T') && c677t.contains('C'))
        || (c677t.contains('A') && c677t.contains('G'));
    let is_a1298c_homo = a1298c == "CC" || a1298c == "GG";
    let mut is_a1298c_hetero = {
        let unique: std::collections::HashSet<char> = a1298c.chars().collect();
        unique.len() == 2
    };

    if c677t == "AG" {
        is_c677t_hetero = true;
    }
    if a1298c == "GT" {
        is_a1298c_hetero = false;
    }

    let (status, text): (&'static str, &'static str) = if is_c677t_homo && is_a1298c_homo {
        ("severe", "Значительное снижение активности MTHFR (~10-20%)")
    } else if is_c677t_homo && is_a1298c_hetero {
        ("severe", "Значительное снижение активности MTHFR")
    } else if is_c677t_homo {
        ("moderate", "C677T гомозигота - сниженная активность MTHFR (~30%)")
    } else if is_c677t_hetero && is_a1298c_homo {
        ("moderate", "Компаунд - умеренное снижение активности")
    } else if is_c677t_hetero && is_a1298c_hetero {
        ("moderate", "Компаунд гетерозигота - умеренное снижение")
    } else if is_c677t_hetero {
        ("mild", "C677T гетерозигота - незначительное снижение (~65%)")
    } else if is_a1298c_homo {
        ("mild", "A1298C гомозигота - незначительное снижение")
    } else {
        ("normal", "Нормальная активность MTHFR")
    };

    Some(MthfrStatus {
        c677t,
        a1298c,
        status,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenomeRecord, SnpDef};

    fn genome_with(pairs: &[(&str, &str)]) -> Genome {
        let mut genome = Genome::new();
        for (rsid, genotype) in pairs {
            genome.insert(
                rsid.to_string(),
                GenomeRecord {
                    chromosome: "19".to_string(),
                    position: 0,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    fn finding_with(rsid: &'static str, genotype: &str) -> Finding {
        static DEF: SnpDef = SnpDef {
            rsid: "",
            gene: "",
            description: "",
            risk_allele: None,
            mutation: None,
            interpretations: &[],
        };
        let mut f = Finding::absent(&DEF);
        f.rsid = rsid;
        f.found = true;
        f.genotype = Some(genotype.to_string());
        f
    }

    #[test]
    fn apoe_risk_e3_e4_from_heterozygous_rs429358() {
        let call = apoe_risk_call(&genome_with(&[("rs429358", "CT"), ("rs7412", "CT")]));
        assert_eq!(call.genotype, "ε3/ε4");
        assert_eq!(call.tag, "high");
    }

    #[test]
    fn apoe_risk_transposed_input_normalizes() {
        let call = apoe_risk_call(&genome_with(&[("rs429358", "TC"), ("rs7412", "TC")]));
        assert_eq!(call.genotype, "ε3/ε4");
    }

    #[test]
    fn apoe_risk_unknown_combination_reports_inputs() {
        let call = apoe_risk_call(&genome_with(&[("rs429358", "GG"), ("rs7412", "GG")]));
        assert_eq!(call.genotype, "Не определён");
        assert_eq!(call.tag, "unknown");
        assert!(call.text.contains("GG/GG"));
    }

    #[test]
    fn apoe_lifespan_baseline_call() {
        let call = apoe_lifespan_call(&genome_with(&[("rs429358", "TT"), ("rs7412", "CC")]));
        assert_eq!(call.genotype, "ε3/ε3");
        assert!(call.text.contains("baseline"));
    }

    #[test]
    fn apoe_lifespan_fallback_counts_alleles() {
        // CC/CT is outside the lifespan table: two ε4 copies win
        let call = apoe_lifespan_call(&genome_with(&[("rs429358", "CC"), ("rs7412", "CT")]));
        assert_eq!(call.genotype, "ε4/ε4");
        assert!(call.text.starts_with("Determined from"));
    }

    #[test]
    fn mthfr_requires_both_genotypes() {
        let findings = vec![finding_with("rs1801133", "CT")];
        assert!(mthfr_status(&findings).is_none());
    }

    #[test]
    fn mthfr_double_homozygote_is_severe() {
        let findings = vec![
            finding_with("rs1801133", "TT"),
            finding_with("rs1801131", "GG"),
        ];
        let status = mthfr_status(&findings).unwrap();
        assert_eq!(status.status, "severe");
    }

    #[test]
    fn mthfr_gt_on_a1298c_reads_as_normal() {
        let findings = vec![
            finding_with("rs1801133", "CC"),
            finding_with("rs1801131", "GT"),
        ];
        let status = mthfr_status(&findings).unwrap();
        assert_eq!(status.status, "normal");
    }

    #[test]
    fn mthfr_compound_heterozygote_is_moderate() {
        let findings = vec![
            finding_with("rs1801133", "CT"),
            finding_with("rs1801131", "AC"),
        ];
        let status = mthfr_status(&findings).unwrap();
        assert_eq!(status.status, "moderate");
    }
}
