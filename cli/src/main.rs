//! venuelint CLI - content-quality auditor for generated venue pages
//!
//! A command-line tool for auditing a rendered page tree and its venue
//! records for duplicated copy, banned vocabulary, and templated writing.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::PathBuf;
use venuelint::{
    audit_dir, lint_records, similarity_dir, AuditConfig, AuditReport, Finding, Severity,
};

/// Content-quality audits for Korean venue directory builds
#[derive(Parser)]
#[command(
    name = "venuelint",
    version,
    about = "Audit generated venue pages for duplicated and templated copy",
    long_about = "venuelint - content-quality auditor for venue directory builds.\n\n\
                  Checks rendered pages and venue records for repeated words,\n\
                  cross-page phrase duplication, banned vocabulary, FAQ reuse\n\
                  and generated-prose patterns.\n\n\
                  Usage:\n  \
                  venuelint <dist>                 Audit a build output directory\n  \
                  venuelint similarity <dist>      Rank page pairs by text similarity\n  \
                  venuelint records <venues.json>  Lint venue card copy"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Build output directory (for the default audit command)
    #[arg(global = false)]
    dist: Option<PathBuf>,

    /// Threshold preset
    #[arg(long, global = true)]
    preset: Option<Preset>,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a build output directory (default command)
    Audit {
        /// Build output directory containing rendered index.html pages
        dist: PathBuf,

        /// Venue record JSON file
        #[arg(short, long, default_value = "data/venues.json")]
        venues: PathBuf,

        /// Threshold config JSON file (missing fields use defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the full report as JSON instead of the summary
        #[arg(long)]
        json: bool,

        /// Threshold preset
        #[arg(long)]
        preset: Option<Preset>,
    },

    /// Rank all page pairs by Hangul bigram similarity
    #[command(visible_alias = "sim")]
    Similarity {
        /// Build output directory containing rendered index.html pages
        dist: PathBuf,

        /// Most-similar pairs to list
        #[arg(long, default_value = "20")]
        top: usize,

        /// Least-similar pairs to list
        #[arg(long, default_value = "10")]
        bottom: usize,

        /// Print the full report as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },

    /// Lint venue card copy in a record file (any finding fails the run)
    Records {
        /// Venue record JSON file
        venues: PathBuf,

        /// Threshold config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Threshold preset
        #[arg(long)]
        preset: Option<Preset>,
    },

    /// Show version information
    Version,
}

/// Threshold preset
#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// Standard thresholds
    Default,
    /// Tightened thresholds for pre-release audits
    Strict,
    /// Relaxed thresholds for work-in-progress content
    Lenient,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Handle default command (venuelint <dist>)
    if cli.command.is_none() {
        if let Some(dist) = cli.dist {
            return run_audit_cmd(
                &dist,
                &PathBuf::from("data/venues.json"),
                None,
                false,
                cli.preset,
            );
        } else {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            return Ok(());
        }
    }

    match cli.command.unwrap() {
        Commands::Audit {
            dist,
            venues,
            config,
            json,
            preset,
        } => {
            run_audit_cmd(&dist, &venues, config.as_ref(), json, preset.or(cli.preset))?;
        }

        Commands::Similarity {
            dist,
            top,
            bottom,
            json,
        } => {
            let pb = create_spinner("Comparing pages...");
            let report = similarity_dir(&dist)?;
            pb.finish_and_clear();

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_similarity(&report, top, bottom);
            }
        }

        Commands::Records {
            venues,
            config,
            preset,
        } => {
            let config = load_config(config.as_ref(), preset.or(cli.preset))?;
            let records = venuelint::corpus::load_venues(&venues)?;
            let findings = lint_records(&records, &config);

            println!("{}", "Card Copy Lint".cyan().bold());
            println!("{}", "─".repeat(40));
            if findings.is_empty() {
                println!("{} {} records clean", "✓".green().bold(), records.len());
            } else {
                for finding in &findings {
                    print_finding(finding);
                }
                println!(
                    "\n{} {} finding(s) across {} records",
                    "!".yellow().bold(),
                    findings.len(),
                    records.len()
                );
            }
            let code = records_exit_code(&findings);
            if code != 0 {
                std::process::exit(code);
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn run_audit_cmd(
    dist: &PathBuf,
    venues: &PathBuf,
    config_path: Option<&PathBuf>,
    json: bool,
    preset: Option<Preset>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path, preset)?;

    let pb = create_spinner("Loading corpus...");
    pb.set_message("Auditing pages...");
    let report = audit_dir(dist, venues, &config)?;
    pb.finish_and_clear();

    if json {
        println!("{}", report.to_json());
    } else {
        print_audit(&report, &config);
    }

    std::process::exit(report.exit_code());
}

fn load_config(
    path: Option<&PathBuf>,
    preset: Option<Preset>,
) -> Result<AuditConfig, Box<dyn std::error::Error>> {
    let base = match path {
        Some(p) => AuditConfig::from_json_file(p)?,
        None => AuditConfig::default(),
    };
    Ok(match preset {
        Some(Preset::Strict) => base.strict(),
        Some(Preset::Lenient) => base.lenient(),
        _ => base,
    })
}

/// Prints the audit summary: one section per finding kind, truncated to the
/// configured detail limit, then a verdict line.
fn print_audit(report: &AuditReport, config: &AuditConfig) {
    println!("{}", "Content Audit".cyan().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Pages".bold(), report.pages_audited);

    let mut grouped: BTreeMap<&'static str, Vec<&Finding>> = BTreeMap::new();
    for finding in &report.findings {
        grouped.entry(finding.kind.label()).or_default().push(finding);
    }

    for (label, findings) in &grouped {
        let severity = findings[0].severity;
        let marker = match severity {
            Severity::Error => "✗".red().bold(),
            Severity::Warning => "!".yellow().bold(),
        };
        println!("\n{} {} ({})", marker, label.bold(), findings.len());
        for finding in findings.iter().take(config.detail_limit) {
            print_finding(finding);
        }
        if findings.len() > config.detail_limit {
            println!("  ... and {} more", findings.len() - config.detail_limit);
        }
    }

    println!("\n{}", "Summary".cyan().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Errors".bold(), report.error_count());
    println!("{}: {}", "Warnings".bold(), report.warning_count());
    if report.pass {
        println!("{} audit passed", "✓".green().bold());
    } else {
        println!("{} audit failed", "✗".red().bold());
    }
}

/// Card lint is stricter than the page audit: every reported finding fails
/// the run, advisory kinds included.
fn records_exit_code(findings: &[Finding]) -> i32 {
    if findings.is_empty() {
        0
    } else {
        1
    }
}

fn print_finding(finding: &Finding) {
    println!("  [{}] {}", finding.pages.join(", "), finding.detail);
}

/// Prints ranked pairs, the decade histogram with proportional bars, the
/// cumulative threshold counts, and per-category-pair means.
fn print_similarity(report: &venuelint::SimilarityReport, top: usize, bottom: usize) {
    println!("{}", "Page Similarity".cyan().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Pairs".bold(), report.pairs.len());
    println!("{}: {:.2}%", "Mean".bold(), report.mean);

    if !report.pairs.is_empty() {
        println!("\n{}", format!("Top {} most similar", top).bold());
        for pair in report.pairs.iter().take(top) {
            println!("  {:>6.2}%  {}  ↔  {}", pair.similarity, pair.a, pair.b);
        }

        println!("\n{}", format!("Bottom {} least similar", bottom).bold());
        for pair in report.pairs.iter().rev().take(bottom) {
            println!("  {:>6.2}%  {}  ↔  {}", pair.similarity, pair.a, pair.b);
        }
    }

    println!("\n{}", "Distribution".bold());
    let max_count = report
        .histogram
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0)
        .max(1);
    for bucket in &report.histogram {
        let width = bucket.count * 30 / max_count;
        println!(
            "  {:>3}-{:<3} {:<30} {}",
            bucket.lower,
            bucket.upper,
            "█".repeat(width),
            bucket.count
        );
    }

    println!("\n{}", "Cumulative".bold());
    for (threshold, count) in &report.cumulative {
        println!("  ≥ {:>2}%: {} pairs", threshold, count);
    }

    if !report.category_means.is_empty() {
        println!("\n{}", "Category pairs".bold());
        for cat in &report.category_means {
            println!(
                "  {:>6.2}%  {} ({} pairs)",
                cat.mean, cat.key, cat.pair_count
            );
        }
    }
}

fn print_version() {
    println!(
        "{} {}",
        "venuelint".green().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Content-quality auditor for Korean venue directory builds");
    println!();
    println!("Checks: repetition, phrase duplication, similarity, structured fields");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_records_fail_on_any_finding() {
        use venuelint::FindingKind;

        assert_eq!(records_exit_code(&[]), 0);

        // An advisory finding still fails the card lint.
        let warning = Finding::on_page(
            FindingKind::NamePosition,
            "octagon",
            "옥타곤.card_hook: store name not at sentence start",
        );
        assert!(!warning.is_error());
        assert_eq!(records_exit_code(&[warning]), 1);
    }
}
