use anyhow::Result;
use genome_insight::{
    interpret::interpret, load_genome, panels, resolve_export, Finding, ReportFormat, ReportWriter,
};
use pretty_assertions::assert_eq;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

fn write_export(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).expect("create export");
    file.write_all(contents.as_bytes()).expect("write export");
    path
}

#[test]
fn exact_genotype_match_on_comt() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_export(
        &dir,
        "genome.txt",
        "# This data file generated by 23andMe\n\
         rs4680\tchr22\t19951271\tAG\n",
    );

    let genome = load_genome(&path)?;
    let record = &genome["rs4680"];
    assert_eq!(record.chromosome, "chr22");
    assert_eq!(record.position, 19951271);

    // COMT appears in the cognitive panel with an exact AG entry
    let report = (panels::PANEL_INDEX["cognitive"].run)(&genome);
    let finding = report.findings().find(|f| f.rsid == "rs4680").unwrap();
    assert!(finding.found);
    assert_eq!(finding.genotype.as_deref(), Some("AG"));
    assert!(finding.tag.is_some());
    assert!(finding.text.is_some());
    Ok(())
}

#[test]
fn transposed_genotype_resolves_through_sorting() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_export(&dir, "genome.txt", "rs12913832\tchr15\t28365618\tGA\n");

    let genome = load_genome(&path)?;

    // The eye-color table defines AG but not GA; the sorted form matches
    let report = (panels::PANEL_INDEX["physical"].run)(&genome);
    let finding = report.findings().find(|f| f.rsid == "rs12913832").unwrap();
    assert!(finding.found);
    assert!(finding.tag.is_some());
    Ok(())
}

#[test]
fn short_lines_are_skipped_and_absent_snps_stay_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_export(
        &dir,
        "genome.txt",
        "rs4680\tchr22\t19951271\n\
         rs1800562\tchr6\t26093141\tGG\n",
    );

    let genome = load_genome(&path)?;
    assert!(!genome.contains_key("rs4680"));
    assert_eq!(genome.len(), 1);

    let report = (panels::PANEL_INDEX["health"].run)(&genome);
    let absent: Vec<&Finding> = report.findings().filter(|f| !f.found).collect();
    for finding in absent {
        assert_eq!(finding.tag, None);
        assert_eq!(finding.text, None);
    }
    Ok(())
}

#[test]
fn unmatched_genotype_is_found_without_interpretation() -> Result<()> {
    let dir = TempDir::new()?;
    // rs4680 has no NN entry in any table
    let path = write_export(&dir, "genome.txt", "rs4680\tchr22\t19951271\tNN\n");

    let genome = load_genome(&path)?;
    let report = (panels::PANEL_INDEX["cognitive"].run)(&genome);
    let finding = report.findings().find(|f| f.rsid == "rs4680").unwrap();
    assert!(finding.found);
    assert_eq!(finding.tag, None);
    assert_eq!(finding.text, None);
    Ok(())
}

#[test]
fn full_run_writes_a_report_per_panel() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_export(
        &dir,
        "genome.txt",
        "rs4680\tchr22\t19951271\tAG\n\
         rs429358\tchr19\t45411941\tCT\n\
         rs7412\tchr19\t45412079\tCC\n\
         rs12913832\tchr15\t28365618\tGG\n\
         rs1815739\tchr11\t66560624\tCC\n",
    );

    let genome = load_genome(&path)?;
    let reports: Vec<_> = panels::PANELS.iter().map(|p| (p.run)(&genome)).collect();
    assert_eq!(reports.len(), 14);

    let out = TempDir::new()?;
    let writer = ReportWriter::new(out.path());
    writer.write(&reports, &genome, ReportFormat::Both)?;

    for panel in panels::PANELS {
        assert!(
            out.path().join(panel.key).join("report.md").exists(),
            "missing report for {}",
            panel.key
        );
    }
    assert!(out.path().join("summary.md").exists());
    assert!(out.path().join("findings.json").exists());
    Ok(())
}

#[test]
fn discovery_finds_the_export_in_a_directory() -> Result<()> {
    let dir = TempDir::new()?;
    let export = write_export(
        &dir,
        "genome_export_v5.txt",
        "# This data file generated by 23andMe\nrs4680\t22\t19951271\tAG\n",
    );
    write_export(&dir, "readme.txt", "nothing genomic here\n");

    let resolved = resolve_export(dir.path())?;
    assert_eq!(resolved, export);

    let resolved_direct = resolve_export(&export)?;
    assert_eq!(resolved_direct, export);
    Ok(())
}

#[test]
fn exported_surface_is_usable() {
    // mirrors how the binary consumes the library
    use genome_insight::interpret::normalize_genotype;
    use genome_insight::types::{Genome, SnpDef};

    assert_eq!(normalize_genotype("GA"), "AG");

    static DEF: SnpDef = SnpDef {
        rsid: "rs0",
        gene: "TEST",
        description: "",
        risk_allele: None,
        mutation: None,
        interpretations: &[("AA", "info", "test")],
    };
    let finding = interpret(&DEF, &Genome::new());
    assert!(!finding.found);

    assert_eq!(panels::PANELS.len(), panels::PANEL_INDEX.len());
    let _format = ReportFormat::Markdown;
}
