//! Genotype matching against authored interpretation tables.
//!
//! Chip exports report two-character genotypes in arbitrary allele order and
//! sometimes on the opposite strand from the one a table was authored
//! against, so a lookup tries three forms in order: the raw genotype, the
//! alphabetically sorted permutation, then the reversed string. Exact
//! matches win, so tables that explicitly list both `AG` and `GA` keep
//! their distinct entries.

use crate::types::{Finding, Genome, Section, SnpDef};

/// Match an observed genotype against table entries, trying raw, sorted and
/// reversed forms. `key` projects the genotype string out of an entry so
/// every table shape (plain, bilingual, weighted) shares this one routine.
pub fn match_genotype<'a, T>(
    entries: &'a [T],
    genotype: &str,
    key: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let lookup = |needle: &str| entries.iter().find(|&entry| key(entry) == needle);

    if let Some(entry) = lookup(genotype) {
        return Some(entry);
    }

    if genotype.len() != 2 {
        return None;
    }

    let sorted = normalize_genotype(genotype);
    if sorted != genotype {
        if let Some(entry) = lookup(&sorted) {
            return Some(entry);
        }
    }

    // Largely redundant with the sorted form, but kept because some tables
    // list forward and reverse genotypes explicitly.
    let bytes = genotype.as_bytes();
    let reversed = String::from_utf8(vec![bytes[1], bytes[0]]).expect("two ASCII alleles");
    lookup(&reversed)
}

/// Sort the two alleles of a genotype alphabetically (`GA` -> `AG`).
/// Anything that is not exactly two characters passes through unchanged.
pub fn normalize_genotype(genotype: &str) -> String {
    if genotype.len() == 2 {
        let bytes = genotype.as_bytes();
        if bytes[0] > bytes[1] {
            return String::from_utf8(vec![bytes[1], bytes[0]]).expect("two ASCII alleles");
        }
    }
    genotype.to_string()
}

/// Interpret one authored SNP against a loaded genome
pub fn interpret(def: &SnpDef, genome: &Genome) -> Finding {
    let record = match genome.get(def.rsid) {
        Some(record) => record,
        None => return Finding::absent(def),
    };

    let mut finding = Finding::absent(def);
    finding.found = true;
    finding.chromosome = Some(record.chromosome.clone());
    finding.position = Some(record.position);
    finding.genotype = Some(record.genotype.clone());

    if let Some((_, tag, text)) = match_genotype(def.interpretations, &record.genotype, |e| e.0) {
        finding.tag = Some(*tag);
        finding.text = Some((*text).to_string());
    }

    finding
}

/// Interpret every SNP of a section, preserving authored order
pub fn interpret_section(section: &Section, genome: &Genome) -> Vec<Finding> {
    section.snps.iter().map(|def| interpret(def, genome)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenomeRecord;

    static COMT: SnpDef = SnpDef {
        rsid: "rs4680",
        gene: "COMT Val158Met",
        description: "Катехол-О-метилтрансфераза",
        risk_allele: Some("A"),
        mutation: None,
        interpretations: &[
            ("AA", "info", "Met/Met"),
            ("AG", "info", "Val/Met"),
            ("GG", "info", "Val/Val"),
        ],
    };

    fn genome_with(rsid: &str, genotype: &str) -> Genome {
        let mut genome = Genome::new();
        genome.insert(
            rsid.to_string(),
            GenomeRecord {
                chromosome: "22".to_string(),
                position: 19951271,
                genotype: genotype.to_string(),
            },
        );
        genome
    }

    #[test]
    fn exact_match_wins() {
        let finding = interpret(&COMT, &genome_with("rs4680", "AG"));
        assert!(finding.found);
        assert_eq!(finding.tag, Some("info"));
        assert_eq!(finding.text.as_deref(), Some("Val/Met"));
    }

    #[test]
    fn sorted_form_matches_transposed_genotype() {
        // Table defines AG only; observed GA resolves through the sorted form
        let finding = interpret(&COMT, &genome_with("rs4680", "GA"));
        assert_eq!(finding.text.as_deref(), Some("Val/Met"));
    }

    #[test]
    fn explicit_entries_take_precedence_over_normalization() {
        static BOTH_FORMS: SnpDef = SnpDef {
            rsid: "rs1",
            gene: "X",
            description: "",
            risk_allele: None,
            mutation: None,
            interpretations: &[("AG", "info", "forward"), ("GA", "info", "reverse")],
        };
        let finding = interpret(&BOTH_FORMS, &genome_with("rs1", "GA"));
        assert_eq!(finding.text.as_deref(), Some("reverse"));
    }

    #[test]
    fn absent_snp_has_no_interpretation() {
        let finding = interpret(&COMT, &Genome::new());
        assert!(!finding.found);
        assert_eq!(finding.tag, None);
        assert_eq!(finding.text, None);
    }

    #[test]
    fn unmatched_genotype_is_found_but_uninterpreted() {
        let finding = interpret(&COMT, &genome_with("rs4680", "CC"));
        assert!(finding.found);
        assert_eq!(finding.genotype.as_deref(), Some("CC"));
        assert_eq!(finding.tag, None);
        assert_eq!(finding.text, None);
    }

    #[test]
    fn no_call_only_matches_explicit_entries() {
        static DELETION: SnpDef = SnpDef {
            rsid: "rs113993960",
            gene: "CFTR",
            description: "",
            risk_allele: Some("del"),
            mutation: Some("F508del"),
            interpretations: &[("--", "carrier", "Носитель F508del")],
        };
        let finding = interpret(&DELETION, &genome_with("rs113993960", "--"));
        assert_eq!(finding.tag, Some("carrier"));

        let finding = interpret(&COMT, &genome_with("rs4680", "--"));
        assert_eq!(finding.tag, None);
    }

    #[test]
    fn single_character_genotypes_skip_normalization() {
        static HEMI: SnpDef = SnpDef {
            rsid: "rs2032597",
            gene: "Y",
            description: "",
            risk_allele: None,
            mutation: None,
            interpretations: &[("A", "info", "derived")],
        };
        let finding = interpret(&HEMI, &genome_with("rs2032597", "A"));
        assert_eq!(finding.text.as_deref(), Some("derived"));
    }

    #[test]
    fn normalize_sorts_two_character_genotypes_only() {
        assert_eq!(normalize_genotype("GA"), "AG");
        assert_eq!(normalize_genotype("AG"), "AG");
        assert_eq!(normalize_genotype("--"), "--");
        assert_eq!(normalize_genotype("CTT"), "CTT");
        assert_eq!(normalize_genotype("A"), "A");
    }
}
