//! # Genome Insight
//!
//! Interprets a raw consumer genome export (23andMe-style TSV) against
//! fourteen authored SNP panels and writes markdown reports per panel plus
//! a cross-panel summary.
//!
//! ## Features
//!
//! - Tab-separated genome loader with transparent gzip support
//! - Shared genotype matcher (raw / allele-sorted / reversed forms)
//! - Authored interpretation panels: ancestry, carrier status, cognition,
//!   detoxification, health, immunity, longevity, pain, physical traits,
//!   reproductive health, skin, sleep, sports, vision/hearing
//! - Multi-SNP combination calls (APOE, MTHFR, athlete profile, chronotype,
//!   eye/hair color and more)
//! - Ancestry-composition segment aggregation from the portal's CSV export
//! - Markdown and JSON report output

pub mod composition;
pub mod discovery;
pub mod genome;
pub mod interpret;
pub mod panels;
pub mod report;
pub mod types;

// Re-export key types
pub use discovery::{resolve_export, ExportDiscovery};
pub use genome::load_genome;
pub use interpret::{interpret, match_genotype, normalize_genotype};
pub use panels::{PanelReport, PanelRunner, PANELS, PANEL_INDEX};
pub use report::{ReportFormat, ReportWriter};
pub use types::*;
