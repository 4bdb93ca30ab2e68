use anyhow::{bail, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{generate, Shell};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::io;
use std::path::PathBuf;
use tracing::info;

use genome_insight::composition;
use genome_insight::discovery::resolve_export;
use genome_insight::genome::load_genome;
use genome_insight::panels::{PanelReport, PanelRunner, PANELS, PANEL_INDEX};
use genome_insight::report::{ReportFormat, ReportWriter};

/// Personal genome SNP panel interpreter
#[derive(Parser, Debug)]
#[command(
    name = "genome-insight",
    version,
    about = "Interpret a raw genome export against authored SNP panels",
    long_about = r#"
Reads a tab-separated genome export (23andMe style) and matches each panel
SNP's observed genotype against authored interpretation tables, covering:
- health, immunity, detoxification and carrier status
- cognition, sleep/chronotype, pain sensitivity
- sports/fitness, longevity, skin, physical traits
- reproductive health, vision/hearing, ancestry

Reports are written as markdown per panel plus a cross-panel summary.
"#
)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Raw genome export file, or a directory to search for one
    #[arg(short, long, value_name = "FILE|DIR", value_hint = ValueHint::AnyPath)]
    genome: Option<PathBuf>,

    /// Panels to run (defaults to all)
    #[arg(short, long, value_name = "PANEL", num_args = 1..)]
    panel: Vec<String>,

    /// Ancestry-composition CSV for segment analysis
    #[arg(long, value_name = "CSV", value_hint = ValueHint::FilePath)]
    composition: Option<PathBuf>,

    /// Output directory for reports
    #[arg(short, long, default_value = "./reports")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: OutputFormat,

    /// Number of threads (0 = auto-detect)
    #[arg(short, long, default_value = "0")]
    threads: usize,

    /// Interactive mode with prompts for all parameters
    #[arg(short, long)]
    interactive: bool,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions
    Completions { shell: Shell },
    /// List available panels
    Panels,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Markdown,
    Json,
    Both,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> ReportFormat {
        match format {
            OutputFormat::Markdown => ReportFormat::Markdown,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Both => ReportFormat::Both,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    if let Some(Commands::Panels) = cli.command {
        list_panels();
        return Ok(());
    }

    init_logging(cli.verbose);

    let config = if cli.interactive {
        run_interactive_mode()?
    } else {
        AppConfig::from_cli(&cli)?
    };

    init_thread_pool(config.threads)?;

    info!("Starting genome analysis...");
    info!("Using {} threads", rayon::current_num_threads());

    run_analysis(config)
}

fn list_panels() {
    println!("{}", style("Available panels:").bold().cyan());
    println!();
    for panel in PANELS {
        println!(
            "  {} - {}",
            style(panel.key).green().bold(),
            style(panel.title).dim()
        );
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("genome_insight={}", level))
        .init();
}

fn init_thread_pool(threads: usize) -> Result<()> {
    let num_threads = if threads == 0 {
        num_cpus::get()
    } else {
        threads
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .map_err(|e| anyhow::anyhow!("Failed to initialize thread pool: {}", e))?;

    Ok(())
}

fn selected_panels(keys: &[String]) -> Result<Vec<&'static PanelRunner>> {
    if keys.is_empty() || keys.iter().any(|k| k == "all") {
        return Ok(PANELS.iter().collect());
    }

    let mut runners = Vec::new();
    for key in keys {
        match PANEL_INDEX.get(key.as_str()) {
            Some(runner) => runners.push(*runner),
            None => bail!(
                "Unknown panel '{}' (run `genome-insight panels` for the list)",
                key
            ),
        }
    }
    Ok(runners)
}

fn run_interactive_mode() -> Result<AppConfig> {
    println!(
        "{}",
        style("Genome Insight - Interactive Mode").cyan().bold()
    );
    println!();

    let theme = ColorfulTheme::default();

    let genome: String = Input::with_theme(&theme)
        .with_prompt("Genome export file or directory")
        .interact_text()?;

    let mut panel_items = vec!["all"];
    panel_items.extend(PANELS.iter().map(|p| p.key));
    let panel_idx = Select::with_theme(&theme)
        .with_prompt("Select panel")
        .default(0)
        .items(&panel_items)
        .interact()?;
    let panels = if panel_idx == 0 {
        vec![]
    } else {
        vec![panel_items[panel_idx].to_string()]
    };

    let formats = vec!["Markdown", "JSON", "Both"];
    let format_idx = Select::with_theme(&theme)
        .with_prompt("Select output format")
        .default(0)
        .items(&formats)
        .interact()?;
    let format = match format_idx {
        1 => OutputFormat::Json,
        2 => OutputFormat::Both,
        _ => OutputFormat::Markdown,
    };

    let output: String = Input::with_theme(&theme)
        .with_prompt("Output directory")
        .default("./reports".to_string())
        .interact_text()?;

    let with_composition = Confirm::with_theme(&theme)
        .with_prompt("Analyze an ancestry-composition CSV as well?")
        .default(false)
        .interact()?;
    let composition = if with_composition {
        let path: String = Input::with_theme(&theme)
            .with_prompt("Composition CSV path")
            .interact_text()?;
        Some(PathBuf::from(path))
    } else {
        None
    };

    Ok(AppConfig {
        genome: PathBuf::from(genome),
        panels,
        composition,
        output: PathBuf::from(output),
        format,
        threads: 0,
    })
}

fn run_analysis(config: AppConfig) -> Result<()> {
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Locating genome export...");
    let export = resolve_export(&config.genome)?;
    pb.set_position(5);

    pb.set_message("Loading genome...");
    let genome = load_genome(&export)?;
    pb.set_position(20);
    info!("Loaded {} SNPs from {}", genome.len(), export.display());

    let runners = selected_panels(&config.panels)?;

    pb.set_message("Running panels...");
    let reports: Vec<PanelReport> = runners.par_iter().map(|p| (p.run)(&genome)).collect();
    pb.set_position(70);

    pb.set_message("Writing reports...");
    let writer = ReportWriter::new(&config.output);
    writer.write(&reports, &genome, config.format.into())?;
    pb.set_position(90);

    if let Some(composition_path) = &config.composition {
        pb.set_message("Analyzing ancestry composition...");
        let composition_report = composition::analyze_composition(composition_path)?;
        let path = config.output.join("composition.md");
        std::fs::write(&path, composition::render_markdown(&composition_report))?;
        info!("Wrote {}", path.display());
    }
    pb.set_position(100);

    pb.finish_with_message("Analysis complete!");

    println!(
        "\n{} Reports saved to: {}",
        style("✓").green().bold(),
        style(config.output.display()).cyan()
    );

    Ok(())
}

#[derive(Debug)]
struct AppConfig {
    genome: PathBuf,
    panels: Vec<String>,
    composition: Option<PathBuf>,
    output: PathBuf,
    format: OutputFormat,
    threads: usize,
}

impl AppConfig {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let genome = match &cli.genome {
            Some(path) => path.clone(),
            None => bail!("--genome is required (or use --interactive)"),
        };

        Ok(Self {
            genome,
            panels: cli.panel.clone(),
            composition: cli.composition.clone(),
            output: cli.output.clone(),
            format: cli.format,
            threads: cli.threads,
        })
    }
}
