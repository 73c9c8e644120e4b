//! Company Forge - company name availability checking
//!
//! Checks a proposed company name against the registration naming rules and
//! the company registry, then optionally suggests and checks alternatives.

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use company_forge::{
    BatchConfig, BatchSummary, CompanyForgeError, FallbackConfig, NameCheckResult, NameChecker,
    RegistryConfig, ScoreBand, SearchHistory, SessionReport, Verdict,
};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::validator::Validation;
use inquire::CustomUserError;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "company-forge",
    version,
    about = "Check company name availability and naming-convention compliance"
)]
struct Cli {
    /// Company name to check (words are joined with spaces)
    name: Vec<String>,

    /// Number of alternatives to generate and check
    #[arg(short, long, default_value_t = 0)]
    alternatives: usize,

    /// Use the synthetic registry only (no credentials needed)
    #[arg(long)]
    offline: bool,

    /// Seed the random source for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print the session report as JSON
    #[arg(long)]
    json: bool,

    /// Write the session report as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Delay between sequential checks, in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = company_forge::init() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<CompanyForgeError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("company_forge=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main company forge workflow
async fn run(cli: Cli) -> anyhow::Result<()> {
    let name = if cli.name.is_empty() {
        prompt_for_name()?
    } else {
        cli.name.join(" ")
    };

    let checker = if cli.offline {
        NameChecker::offline(FallbackConfig::default())?
    } else {
        NameChecker::online(RegistryConfig::from_env()?, FallbackConfig::default())?
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let batch = BatchConfig {
        delay: Duration::from_millis(cli.delay_ms),
    };

    if !cli.json {
        println!("🏢 Company Forge - company name availability");
        println!("════════════════════════════════════════════");
        println!("🔍 Checking \"{}\" ({} registry)", name, checker.registry_source());
        println!();
    }

    let check_start = Instant::now();
    let mut results = vec![checker.check_with_rng(&name, &mut rng).await];

    if cli.alternatives > 0 {
        match checker.generate_with_rng(&name, cli.alternatives, &mut rng) {
            Ok(alternatives) => {
                let checked =
                    check_alternatives(&checker, &alternatives, &batch, cli.json, &mut rng).await;
                results.extend(checked);
            }
            // The original name was still checked; report and carry on.
            Err(e) => eprintln!("{}", e.user_message()),
        }
    }

    let history = SearchHistory::new();
    let entry = history.record(&name, &results);
    tracing::info!(
        name = %entry.original_name,
        results = %entry.results_count,
        best_score = %entry.best_score,
        "Search recorded"
    );

    let report =
        SessionReport::new(&name, checker.registry_source(), results).with_history(&history);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print_results(&report.results);
        print_summary(&report.summary, check_start.elapsed());
    }

    if let Some(path) = &cli.output {
        report.save(path)?;
        if !cli.json {
            println!("💾 Report saved to {}", path.display());
        }
    }

    Ok(())
}

/// Ask for a company name when none was given on the command line.
///
/// The answer is returned as typed; surrounding whitespace is left for the
/// convention rules to report.
fn prompt_for_name() -> anyhow::Result<String> {
    let name = inquire::Text::new("Company name to check:")
        .with_help_message("e.g. Acme Solutions Private Limited")
        .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
            Ok(validate_prompt_input(input))
        })
        .prompt()?;

    Ok(name)
}

fn validate_prompt_input(input: &str) -> Validation {
    if input.trim().chars().count() < 3 {
        Validation::Invalid("Please enter at least 3 characters".into())
    } else {
        Validation::Valid
    }
}

/// Check alternatives one after another, pacing the registry calls
async fn check_alternatives(
    checker: &NameChecker,
    names: &[String],
    batch: &BatchConfig,
    quiet: bool,
    rng: &mut (dyn RngCore + Send),
) -> Vec<NameCheckResult> {
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(names.len() as u64)
    };
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut results = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if i > 0 && !batch.delay.is_zero() {
            tokio::time::sleep(batch.delay).await;
        }
        progress.set_message(name.clone());
        results.push(checker.check_with_rng(name, rng).await);
        progress.inc(1);
    }
    progress.finish_and_clear();

    results
}

fn print_results(results: &[NameCheckResult]) {
    for (i, result) in results.iter().enumerate() {
        let status = match result.verdict {
            Verdict::ExactMatch => "❌ TAKEN",
            Verdict::SimilarCompanies { .. } => "⚠️  SIMILAR NAMES",
            Verdict::ValidationFailed { .. } => "❌ NON-COMPLIANT",
            Verdict::MinorIssues { .. } | Verdict::Compliant => "✅ AVAILABLE",
            Verdict::CheckFailed => "⚠️  CHECK FAILED",
        };
        let label = if i == 0 { "Original" } else { "Alternative" };

        println!("{:2}. {} - {} ({})", i + 1, result.name, status, label);
        println!(
            "   📊 Score: {}/100, {} ({})",
            result.score(),
            ScoreBand::from_score(result.score()),
            result.validation_summary()
        );
        for error in &result.validation.errors {
            println!("   ❌ {}", error);
        }
        for warning in &result.validation.warnings {
            println!("   ⚠️  {}", warning);
        }
        for company in result.exact_matches.iter().chain(&result.existing_companies) {
            println!(
                "   🏢 {} ({}% similar, {})",
                company.registered_name, company.similarity, company.registration_status
            );
        }
        println!("   💡 {}", result.recommendation);
        println!();
    }
}

fn print_summary(summary: &BatchSummary, elapsed: Duration) {
    println!("📈 Summary:");
    println!("   📊 Total checked: {}", summary.total_checked);
    println!("   ✅ Available: {}", summary.available_count);
    println!("   📊 Average score: {:.1}", summary.average_score);
    if let Some(best) = &summary.best_name {
        println!("   🏆 Best: {} ({}/100)", best, summary.best_score);
    }
    println!("   ⏱️  Total time: {:.2}s", elapsed.as_secs_f32());

    if !summary.distinct_errors.is_empty() {
        println!();
        println!("❌ Common errors ({} total):", summary.error_count);
        for error in &summary.distinct_errors {
            println!("   • {}", error);
        }
    }
    if !summary.distinct_warnings.is_empty() {
        println!();
        println!("⚠️  Common warnings ({} total):", summary.warning_count);
        for warning in &summary.distinct_warnings {
            println!("   • {}", warning);
        }
    }
    println!();
}
