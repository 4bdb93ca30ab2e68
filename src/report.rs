//! Markdown and JSON report generation.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::panels::combos::{apoe_risk_call, mthfr_status};
use crate::panels::PanelReport;
use crate::types::{is_high_risk, is_moderate_risk, is_protective, tag_emoji, Finding, Genome};

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Json,
    Both,
}

impl ReportFormat {
    fn wants_markdown(self) -> bool {
        matches!(self, ReportFormat::Markdown | ReportFormat::Both)
    }

    fn wants_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }
}

/// Writes one report tree per run: a markdown report per panel, the
/// cross-panel summary, and optionally a JSON dump of everything
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn write(
        &self,
        reports: &[PanelReport],
        genome: &Genome,
        format: ReportFormat,
    ) -> Result<Vec<PathBuf>> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M").to_string();
        let mut written = Vec::new();

        if format.wants_markdown() {
            for report in reports {
                let dir = self.output_dir.join(report.key);
                fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;

                let path = dir.join("report.md");
                fs::write(&path, render_panel(report, &timestamp))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote {}", path.display());
                written.push(path);
            }

            fs::create_dir_all(&self.output_dir)
                .with_context(|| format!("Failed to create {}", self.output_dir.display()))?;
            let summary_path = self.output_dir.join("summary.md");
            fs::write(&summary_path, render_summary(reports, genome, &timestamp))
                .with_context(|| format!("Failed to write {}", summary_path.display()))?;
            info!("Wrote {}", summary_path.display());
            written.push(summary_path);
        }

        if format.wants_json() {
            fs::create_dir_all(&self.output_dir)
                .with_context(|| format!("Failed to create {}", self.output_dir.display()))?;
            let json_path = self.output_dir.join("findings.json");
            let dump = JsonDump { panels: reports };
            fs::write(&json_path, serde_json::to_string_pretty(&dump)?)
                .with_context(|| format!("Failed to write {}", json_path.display()))?;
            info!("Wrote {}", json_path.display());
            written.push(json_path);
        }

        Ok(written)
    }
}

#[derive(Serialize)]
struct JsonDump<'a> {
    panels: &'a [PanelReport],
}

fn finding_row(finding: &Finding) -> String {
    if finding.found {
        let tag = finding.tag.unwrap_or("н/д");
        let text = finding.text.as_deref().unwrap_or("Нет данных");
        format!(
            "| {} | {} | **{}** | {} | {} |",
            finding.rsid,
            finding.gene,
            finding.genotype.as_deref().unwrap_or("-"),
            tag,
            text
        )
    } else {
        format!(
            "| {} | {} | - | - | Не найден в геноме |",
            finding.rsid, finding.gene
        )
    }
}

/// Render one panel's report in the shared layout: statistics, tag
/// summary, a details table per section, then the panel's special blocks
pub fn render_panel(report: &PanelReport, timestamp: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n", report.title));
    out.push_str(&format!("\nДата анализа: {}\n", timestamp));
    out.push_str(&format!(
        "\nНайдено маркеров: {}/{}\n",
        report.found_count(),
        report.total_count()
    ));

    let mut tag_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for finding in report.findings() {
        if let Some(tag) = finding.tag {
            *tag_counts.entry(tag).or_default() += 1;
        }
    }
    if !tag_counts.is_empty() {
        out.push_str("\n## Сводка по рискам\n\n");
        for (&tag, count) in &tag_counts {
            out.push_str(&format!("- {} {}: {}\n", tag_emoji(tag), tag, count));
        }
    }

    for section in &report.sections {
        out.push_str(&format!("\n## {}\n\n", section.name));
        if let Some(inheritance) = section.inheritance {
            out.push_str(&format!("- **Тип наследования:** {}\n", inheritance));
        }
        if let Some(frequency) = section.frequency {
            out.push_str(&format!("- **Частота носительства:** {}\n", frequency));
        }
        if section.inheritance.is_some() || section.frequency.is_some() {
            out.push('\n');
        }

        out.push_str("| SNP | Ген | Генотип | Риск | Интерпретация |\n");
        out.push_str("|-----|-----|---------|------|---------------|\n");
        for finding in &section.findings {
            out.push_str(&finding_row(finding));
            out.push('\n');
        }
    }

    for special in &report.specials {
        out.push_str(&format!("\n## {}\n\n", special.heading));
        out.push_str(&special.markdown);
        out.push('\n');
    }

    out
}

fn summary_table(out: &mut String, rows: &[(&str, &Finding)]) {
    out.push_str("| Категория | SNP | Ген | Генотип | Описание |\n");
    out.push_str("|-----------|-----|-----|---------|----------|\n");
    for (panel, finding) in rows {
        out.push_str(&format!(
            "| {} | {} | {} | **{}** | {} |\n",
            panel,
            finding.rsid,
            finding.gene,
            finding.genotype.as_deref().unwrap_or("-"),
            finding.text.as_deref().unwrap_or("")
        ));
    }
    out.push('\n');
}

/// Render the cross-panel summary: disclaimers, risk groupings, the APOE
/// and MTHFR combination calls, and aggregate statistics
pub fn render_summary(reports: &[PanelReport], genome: &Genome, timestamp: &str) -> String {
    let mut out = String::new();

    out.push_str("# 📊 Сводный отчёт по геному\n");
    out.push_str(&format!("\nДата анализа: {}\n", timestamp));
    out.push_str("\n---\n\n");

    out.push_str("## ⚠️ Важные предупреждения\n\n");
    out.push_str("1. **Это НЕ медицинский диагноз** — только информационный анализ\n");
    out.push_str("2. **Наличие риск-аллеля ≠ заболевание** — пенетрантность варьируется\n");
    out.push_str("3. **Большинство болезней полигенные** — зависят от многих генов + среда\n");
    out.push_str("4. **Для медицинских решений** — консультация генетика обязательна\n");
    out.push_str("\n---\n\n");

    let mut high = Vec::new();
    let mut moderate = Vec::new();
    let mut protective = Vec::new();
    for report in reports {
        for finding in report.findings() {
            if let Some(tag) = finding.tag {
                if is_high_risk(tag) {
                    high.push((report.title, finding));
                } else if is_moderate_risk(tag) {
                    moderate.push((report.title, finding));
                } else if is_protective(tag) {
                    protective.push((report.title, finding));
                }
            }
        }
    }

    if !high.is_empty() {
        out.push_str("## 🔴 Маркеры повышенного риска\n\n");
        summary_table(&mut out, &high);
    }
    if !moderate.is_empty() {
        out.push_str("## 🟡 Маркеры умеренного риска\n\n");
        summary_table(&mut out, &moderate);
    }
    if !protective.is_empty() {
        out.push_str("## 🛡️ Защитные варианты\n\n");
        summary_table(&mut out, &protective);
    }

    out.push_str("---\n\n## 🧬 Специальные анализы\n\n");

    let apoe = apoe_risk_call(genome);
    out.push_str("### APOE (Болезнь Альцгеймера)\n\n");
    out.push_str(&format!("- **Генотип: {}**\n", apoe.genotype));
    out.push_str(&format!("- {}\n\n", apoe.text));

    let all_findings: Vec<Finding> = reports
        .iter()
        .flat_map(|r| r.findings().cloned())
        .collect();
    if let Some(mthfr) = mthfr_status(&all_findings) {
        out.push_str("### MTHFR (Метаболизм фолатов)\n\n");
        out.push_str(&format!("- C677T: {}, A1298C: {}\n", mthfr.c677t, mthfr.a1298c));
        out.push_str(&format!("- **Статус: {}**\n", mthfr.status));
        out.push_str(&format!("- {}\n\n", mthfr.text));
    }

    let total: usize = reports.iter().map(|r| r.total_count()).sum();
    let found: usize = reports.iter().map(|r| r.found_count()).sum();
    out.push_str("---\n\n## 📈 Статистика анализа\n\n");
    out.push_str(&format!("- Всего проанализировано SNP: {}\n", total));
    out.push_str(&format!("- Найдено в геноме: {}\n", found));
    out.push_str(&format!("- Не найдено: {}\n", total - found));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels;
    use crate::types::GenomeRecord;
    use tempfile::TempDir;

    fn genome_with(pairs: &[(&str, &str)]) -> Genome {
        let mut genome = Genome::new();
        for (rsid, genotype) in pairs {
            genome.insert(
                rsid.to_string(),
                GenomeRecord {
                    chromosome: "22".to_string(),
                    position: 19951271,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    #[test]
    fn found_findings_appear_verbatim_exactly_once() {
        let genome = genome_with(&[("rs6025", "AG")]);
        let report = (panels::PANEL_INDEX["health"].run)(&genome);
        let rendered = render_panel(&report, "2024-01-01 00:00");

        let finding = report.findings().find(|f| f.rsid == "rs6025").unwrap();
        let text = finding.text.as_deref().unwrap();
        assert_eq!(rendered.matches(text).count(), 1);
    }

    #[test]
    fn absent_findings_render_as_not_found() {
        let report = (panels::PANEL_INDEX["health"].run)(&Genome::new());
        let rendered = render_panel(&report, "2024-01-01 00:00");
        assert!(rendered.contains("Не найден в геноме"));
        assert!(rendered.contains("Найдено маркеров: 0/"));
    }

    #[test]
    fn summary_collects_high_risk_rows_across_panels() {
        let genome = genome_with(&[("rs6025", "AG")]);
        let reports = vec![
            (panels::PANEL_INDEX["health"].run)(&genome),
            (panels::PANEL_INDEX["immunity"].run)(&genome),
        ];
        let summary = render_summary(&reports, &genome, "2024-01-01 00:00");
        assert!(summary.contains("Маркеры повышенного риска"));
        assert!(summary.contains("rs6025"));
    }

    #[test]
    fn writer_produces_the_expected_tree() -> Result<()> {
        let dir = TempDir::new()?;
        let genome = genome_with(&[("rs4680", "AG")]);
        let reports = vec![(panels::PANEL_INDEX["cognitive"].run)(&genome)];

        let writer = ReportWriter::new(dir.path());
        let written = writer.write(&reports, &genome, ReportFormat::Both)?;

        assert!(dir.path().join("cognitive/report.md").exists());
        assert!(dir.path().join("summary.md").exists());
        assert!(dir.path().join("findings.json").exists());
        assert_eq!(written.len(), 3);

        let json = fs::read_to_string(dir.path().join("findings.json"))?;
        assert!(json.contains("\"rs4680\""));
        Ok(())
    }
}
