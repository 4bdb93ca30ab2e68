use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

use crate::genome::open_export;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("No genome export found under {}", .0.display())]
    NoExportFound(PathBuf),
}

/// Locates a raw genome export when the user points at a directory
pub struct ExportDiscovery {
    recursive: bool,
}

impl ExportDiscovery {
    pub fn new(recursive: bool) -> Self {
        Self { recursive }
    }

    /// Resolve `path` to a single export file. A file path is returned
    /// as-is; a directory is searched and the lexicographically first
    /// candidate wins (with a warning if there were several).
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }

        let mut candidates = self.candidates_in(path)?;
        candidates.sort();

        match candidates.len() {
            0 => Err(DiscoveryError::NoExportFound(path.to_path_buf()).into()),
            1 => Ok(candidates.remove(0)),
            n => {
                warn!(
                    "Found {} genome exports under {}, using {}",
                    n,
                    path.display(),
                    candidates[0].display()
                );
                Ok(candidates.remove(0))
            }
        }
    }

    fn candidates_in(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = if self.recursive {
            WalkDir::new(dir).follow_links(true)
        } else {
            WalkDir::new(dir).max_depth(1)
        };

        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_file() && self.looks_like_export(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Sniff the first lines for the shapes a raw export takes: a 23andMe
    /// comment banner, an rsid/chromosome/position header, or plain
    /// four-column data lines.
    fn looks_like_export(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some("txt") | Some("tsv") | Some("gz") => {}
            _ => return false,
        }

        let mut reader = match open_export(path) {
            Ok(reader) => reader,
            Err(_) => return false,
        };

        let mut line = String::new();
        for _ in 0..10 {
            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }

            let lower = line.to_lowercase();
            if lower.contains("23andme") {
                return true;
            }
            if lower.contains("rsid") && lower.contains("position") {
                return true;
            }
            if !line.starts_with('#') {
                let fields: Vec<&str> = line.trim().split('\t').collect();
                if fields.len() >= 4 && fields[0].starts_with("rs") && fields[2].parse::<u64>().is_ok() {
                    return true;
                }
            }
        }

        false
    }
}

/// Convenience wrapper used by the CLI
pub fn resolve_export(path: &Path) -> Result<PathBuf> {
    ExportDiscovery::new(true)
        .resolve(path)
        .with_context(|| format!("Could not locate a genome export at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn finds_export_in_directory() -> Result<()> {
        let dir = TempDir::new()?;

        let export = dir.path().join("genome_v5_full.txt");
        let mut f = File::create(&export)?;
        writeln!(f, "# This data file generated by 23andMe, Inc.")?;
        writeln!(f, "rs4680\t22\t19951271\tAG")?;

        let noise = dir.path().join("notes.txt");
        let mut f = File::create(&noise)?;
        writeln!(f, "shopping list")?;

        let resolved = ExportDiscovery::new(false).resolve(dir.path())?;
        assert_eq!(resolved, export);
        Ok(())
    }

    #[test]
    fn empty_directory_is_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        let result = ExportDiscovery::new(true).resolve(dir.path());
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn headerless_data_lines_are_recognized() -> Result<()> {
        let dir = TempDir::new()?;
        let export = dir.path().join("raw.tsv");
        let mut f = File::create(&export)?;
        writeln!(f, "rs123\t1\t1000\tAA")?;

        let resolved = ExportDiscovery::new(false).resolve(dir.path())?;
        assert_eq!(resolved, export);
        Ok(())
    }
}
