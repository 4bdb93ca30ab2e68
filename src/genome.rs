use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::types::{Genome, GenomeRecord};

/// Open a genome export, transparently decompressing `.gz` files
pub fn open_export(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let reader: Box<dyn Read> = if path.extension().map(|e| e == "gz").unwrap_or(false) {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };

    Ok(Box::new(BufReader::new(reader)))
}

/// Load a tab-separated genome export into an rsid -> record map.
///
/// Lines are `rsid <TAB> chromosome <TAB> position <TAB> genotype`. Comment
/// lines (leading `#`), blank lines, lines with fewer than four fields and
/// lines with a non-numeric position are skipped silently. Later duplicates
/// of an rsid overwrite earlier ones.
pub fn load_genome(path: &Path) -> Result<Genome> {
    let mut reader = open_export(path)?;
    let mut genome = Genome::new();
    let mut skipped = 0usize;

    let mut line = String::new();
    while reader
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {}", path.display()))?
        > 0
    {
        parse_line(&line, &mut genome, &mut skipped);
        line.clear();
    }

    debug!(
        "Loaded {} SNPs from {} ({} lines skipped)",
        genome.len(),
        path.display(),
        skipped
    );

    Ok(genome)
}

fn parse_line(line: &str, genome: &mut Genome, skipped: &mut usize) {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return;
    }

    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 4 {
        *skipped += 1;
        return;
    }

    let position: u64 = match parts[2].parse() {
        Ok(pos) => pos,
        Err(_) => {
            *skipped += 1;
            return;
        }
    };

    genome.insert(
        parts[0].to_string(),
        GenomeRecord {
            chromosome: parts[1].to_string(),
            position,
            genotype: parts[3].to_string(),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_export(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn loads_plain_export() -> Result<()> {
        let file = write_export(
            "# This data file generated by 23andMe\n\
             rs4680\tchr22\t19951271\tAG\n\
             rs12913832\tchr15\t28365618\tGA\n",
        );

        let genome = load_genome(file.path())?;
        assert_eq!(genome.len(), 2);

        let rec = &genome["rs4680"];
        assert_eq!(rec.chromosome, "chr22");
        assert_eq!(rec.position, 19951271);
        assert_eq!(rec.genotype, "AG");
        Ok(())
    }

    #[test]
    fn skips_short_and_malformed_lines() -> Result<()> {
        let file = write_export(
            "rs1\t1\t100\tAA\n\
             rs2\t1\t200\n\
             rs3\t1\tnotanumber\tCC\n\
             \n\
             rs4\t2\t400\tGT\n",
        );

        let genome = load_genome(file.path())?;
        assert_eq!(genome.len(), 2);
        assert!(genome.contains_key("rs1"));
        assert!(!genome.contains_key("rs2"));
        assert!(!genome.contains_key("rs3"));
        assert!(genome.contains_key("rs4"));
        Ok(())
    }

    #[test]
    fn keeps_no_calls() -> Result<()> {
        let file = write_export("rs5\tX\t500\t--\n");
        let genome = load_genome(file.path())?;
        assert!(genome["rs5"].is_no_call());
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_genome(Path::new("/nonexistent/genome.txt")).is_err());
    }

    #[test]
    fn reads_gzipped_export() -> Result<()> {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("genome.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
        encoder.write_all(b"rs6\t7\t600\tTT\n")?;
        encoder.finish()?;

        let genome = load_genome(&path)?;
        assert_eq!(genome["rs6"].genotype, "TT");
        Ok(())
    }
}
