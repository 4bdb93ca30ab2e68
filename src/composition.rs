//! Ancestry-composition segment analysis.
//!
//! Consumer portals export a second CSV next to the raw genome: ancestry
//! composition segments with chromosome spans per assigned population.
//! This aggregates segment lengths into megabase totals per ancestry and
//! per chromosome.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Broad rollup categories the portal reports alongside the detailed
/// populations; kept apart so percentages are not double-counted
static BROAD_CATEGORIES: &[&str] = &[
    "European",
    "Western Asian & North African",
    "Northern West Asian",
    "East Asian & Indigenous American",
    "World",
    "Northern Asian",
    "Northwestern European",
    "Southern European",
];

/// Populations worth showing in the per-chromosome breakdown
static MAIN_ANCESTRIES: &[&str] = &[
    "Eastern European",
    "Ashkenazi Jewish",
    "Iranian, Caucasian & Mesopotamian",
    "Broadly European",
    "Broadly Northern West Asian",
    "Greek & Balkan",
    "Finnish",
    "Cypriot",
    "Siberian",
    "East Asian",
];

#[derive(Debug, Deserialize)]
struct SegmentRow {
    #[serde(rename = "Ancestry")]
    ancestry: String,
    #[serde(rename = "Chromosome")]
    chromosome: String,
    #[serde(rename = "Start Point")]
    start_point: String,
    #[serde(rename = "End Point")]
    end_point: String,
}

/// Megabase totals for one ancestry
#[derive(Debug, Clone, Serialize)]
pub struct AncestryShare {
    pub ancestry: String,
    pub length_mb: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChromosomeBreakdown {
    pub chromosome: String,
    pub total_mb: f64,
    /// (ancestry, percentage) above the 1% display threshold
    pub shares: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompositionReport {
    pub total_mb: f64,
    pub detailed: Vec<AncestryShare>,
    pub broad: Vec<AncestryShare>,
    pub chromosomes: Vec<ChromosomeBreakdown>,
}

fn chromosome_sort_key(chromosome: &str) -> u32 {
    let name = chromosome.strip_prefix("chr").unwrap_or(chromosome);
    match name {
        "X" => 23,
        "Y" => 24,
        other => other.parse().unwrap_or(99),
    }
}

/// Aggregate an ancestry-composition CSV. Rows with unparseable
/// coordinates are skipped, matching how the export's header/footer
/// noise is handled upstream.
pub fn analyze_composition(path: &Path) -> Result<CompositionReport> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open composition file {}", path.display()))?;

    let mut ancestry_lengths: HashMap<String, f64> = HashMap::new();
    let mut chrom_ancestry: HashMap<String, HashMap<String, f64>> = HashMap::new();
    let mut chrom_totals: HashMap<String, f64> = HashMap::new();
    let mut skipped = 0usize;

    for row in reader.deserialize() {
        let row: SegmentRow = match row {
            Ok(row) => row,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        let (start, end) = match (row.start_point.parse::<i64>(), row.end_point.parse::<i64>()) {
            (Ok(start), Ok(end)) => (start, end),
            _ => {
                skipped += 1;
                continue;
            }
        };

        let length_mb = (end - start) as f64 / 1_000_000.0;
        *ancestry_lengths.entry(row.ancestry.clone()).or_default() += length_mb;
        *chrom_ancestry
            .entry(row.chromosome.clone())
            .or_default()
            .entry(row.ancestry)
            .or_default() += length_mb;
        *chrom_totals.entry(row.chromosome).or_default() += length_mb;
    }

    debug!("Composition: {} ancestries, {} rows skipped", ancestry_lengths.len(), skipped);

    let total_mb: f64 = ancestry_lengths.values().sum();

    let mut shares: Vec<AncestryShare> = ancestry_lengths
        .into_iter()
        .map(|(ancestry, length_mb)| AncestryShare {
            percentage: if total_mb > 0.0 {
                length_mb / total_mb * 100.0
            } else {
                0.0
            },
            ancestry,
            length_mb,
        })
        .collect();
    shares.sort_by(|a, b| b.length_mb.partial_cmp(&a.length_mb).unwrap_or(std::cmp::Ordering::Equal));

    let (broad, detailed): (Vec<_>, Vec<_>) = shares
        .into_iter()
        .partition(|s| BROAD_CATEGORIES.contains(&s.ancestry.as_str()));

    let mut chromosomes: Vec<ChromosomeBreakdown> = chrom_ancestry
        .into_iter()
        .map(|(chromosome, ancestries)| {
            let total = chrom_totals.get(&chromosome).copied().unwrap_or(0.0);
            let mut shares: Vec<(String, f64)> = ancestries
                .into_iter()
                .filter(|(ancestry, length)| {
                    MAIN_ANCESTRIES.contains(&ancestry.as_str()) && *length > 0.0
                })
                .map(|(ancestry, length)| (ancestry, length / total * 100.0))
                .filter(|(_, pct)| *pct > 1.0)
                .collect();
            shares.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            ChromosomeBreakdown {
                chromosome,
                total_mb: total,
                shares,
            }
        })
        .collect();
    chromosomes.sort_by_key(|c| chromosome_sort_key(&c.chromosome));

    Ok(CompositionReport {
        total_mb,
        detailed,
        broad,
        chromosomes,
    })
}

/// Render the composition report as markdown
pub fn render_markdown(report: &CompositionReport) -> String {
    let mut out = String::new();

    out.push_str("# Этнический состав (Ancestry Composition)\n\n");
    out.push_str(&format!(
        "Общая длина проанализированных сегментов: {:.1} Mb\n\n",
        report.total_mb
    ));

    out.push_str("## Детальные популяции\n\n");
    for share in &report.detailed {
        let bar = "█".repeat((share.percentage / 2.0) as usize);
        out.push_str(&format!(
            "- {} — {:.1} Mb ({:.1}%) {}\n",
            share.ancestry, share.length_mb, share.percentage, bar
        ));
    }

    out.push_str("\n## Широкие категории (для справки)\n\n");
    for share in &report.broad {
        out.push_str(&format!(
            "- {} — {:.1} Mb ({:.1}%)\n",
            share.ancestry, share.length_mb, share.percentage
        ));
    }

    out.push_str("\n## Распределение по хромосомам\n");
    for chromosome in &report.chromosomes {
        out.push_str(&format!(
            "\n### {} ({:.1} Mb)\n\n",
            chromosome.chromosome, chromosome.total_mb
        ));
        for (ancestry, pct) in &chromosome.shares {
            out.push_str(&format!("- {} — {:.1}%\n", ancestry, pct));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn aggregates_segment_lengths() -> Result<()> {
        let file = write_csv(
            "Ancestry,Copy,Chromosome,Start Point,End Point\n\
             Eastern European,1,chr1,0,50000000\n\
             Eastern European,1,chr2,0,30000000\n\
             Finnish,1,chr1,50000000,60000000\n",
        );

        let report = analyze_composition(file.path())?;
        assert!((report.total_mb - 90.0).abs() < 1e-9);

        let eastern = report
            .detailed
            .iter()
            .find(|s| s.ancestry == "Eastern European")
            .unwrap();
        assert!((eastern.length_mb - 80.0).abs() < 1e-9);
        assert!((eastern.percentage - 80.0 / 90.0 * 100.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn broad_categories_are_kept_apart() -> Result<()> {
        let file = write_csv(
            "Ancestry,Copy,Chromosome,Start Point,End Point\n\
             European,1,chr1,0,50000000\n\
             Finnish,1,chr1,0,10000000\n",
        );

        let report = analyze_composition(file.path())?;
        assert_eq!(report.broad.len(), 1);
        assert_eq!(report.broad[0].ancestry, "European");
        assert_eq!(report.detailed.len(), 1);
        Ok(())
    }

    #[test]
    fn malformed_rows_are_skipped() -> Result<()> {
        let file = write_csv(
            "Ancestry,Copy,Chromosome,Start Point,End Point\n\
             Finnish,1,chr1,zero,10\n\
             Finnish,1,chr1,0,20000000\n",
        );

        let report = analyze_composition(file.path())?;
        assert!((report.total_mb - 20.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn chromosomes_sort_numerically_with_sex_chromosomes_last() {
        assert!(chromosome_sort_key("chr2") < chromosome_sort_key("chr10"));
        assert!(chromosome_sort_key("chr22") < chromosome_sort_key("chrX"));
        assert!(chromosome_sort_key("chrX") < chromosome_sort_key("chrY"));
    }
}
