//! restyle CLI - one-shot email template rewriter
//!
//! Reads the target file (default `lib/email.ts`), runs the built-in rule
//! chain over it once, and overwrites it with the result:
//! - inline_styles: Replace inline `<style>` blocks with `${PREMIUM_EMAIL_STYLES}`
//! - premium_header: Add the tagline under the heading
//! - premium_footer: Add the website link to the address footer

mod config;
mod output;
mod process;

use anyhow::{bail, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use config::{Config, UnmatchedPolicy};
use output::{print_rule_list, OutputFormat, Reporter};
use process::{process_file, write_file};
use restyle_rules::RuleRegistry;

#[derive(Parser)]
#[command(name = "restyle")]
#[command(version = "0.1.0")]
#[command(about = "Rewrite email templates to the premium layout")]
struct Cli {
    /// File to rewrite (default: lib/email.ts, or `target` from config)
    path: Option<PathBuf>,

    /// Show the rewrite without writing the file
    #[arg(long, short = 'n')]
    check: bool,

    /// Fail without writing if any rule matches nothing
    #[arg(long)]
    strict: bool,

    /// Warn about rules that match nothing
    #[arg(long)]
    warn_unmatched: bool,

    /// Show verbose output
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Output format: text, json, diff
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    format: String,

    /// Shorthand for --format json
    #[arg(long)]
    json: bool,

    /// Path to config file (default: auto-detect .restyle.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// List the rule chain and exit
    #[arg(long)]
    list_rules: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().filter_or("RUST_LOG", default_level);

    if let Err(e) = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
    {
        eprintln!("Warning: Logger initialization failed: {}", e);
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let registry = RuleRegistry::new()?;

    let output_format = if cli.json {
        OutputFormat::Json
    } else {
        match OutputFormat::from_str(&cli.format) {
            Some(format) => format,
            None => bail!(
                "Invalid output format '{}'. Valid options: text, json, diff",
                cli.format
            ),
        }
    };

    if cli.list_rules {
        print_rule_list(&registry.list_rules(), output_format)?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        Config::default()
    } else if let Some(config_path) = &cli.config {
        let cfg = Config::load_path(config_path)?;
        log::info!("using config {}", config_path.display());
        cfg
    } else {
        match Config::load()? {
            Some((cfg, path)) => {
                log::info!("using config {}", path.display());
                cfg
            }
            None => Config::default(),
        }
    };

    let target = config.effective_target(cli.path.as_deref());
    let policy = config.effective_unmatched(cli.strict, cli.warn_unmatched);
    let check_mode = cli.check;

    log::debug!(
        "target {}, mode {}, unmatched rules: {:?}",
        target.display(),
        if check_mode { "check" } else { "fix" },
        policy
    );

    let mut reporter = Reporter::new(output_format, cli.verbose);

    let result = match process_file(&target, &registry) {
        Ok(result) => result,
        Err(e) => {
            reporter.report_error(&target, &format!("{:#}", e));
            reporter.finish(check_mode)?;
            return Ok(ExitCode::from(1));
        }
    };

    let unmatched = result.unmatched();
    match policy {
        UnmatchedPolicy::Ignore => {}
        UnmatchedPolicy::Warn => reporter.report_unmatched(&unmatched),
        UnmatchedPolicy::Error if !unmatched.is_empty() => {
            reporter.report_unmatched(&unmatched);
            reporter.report_error(
                &target,
                &format!(
                    "{} rule(s) matched nothing, file not written",
                    unmatched.len()
                ),
            );
            reporter.finish(check_mode)?;
            return Ok(ExitCode::from(1));
        }
        UnmatchedPolicy::Error => {}
    }

    if check_mode {
        reporter.report_check(&target, &result);
        let changed = result.changed();
        reporter.finish(check_mode)?;
        return Ok(if changed {
            ExitCode::from(2)
        } else {
            ExitCode::SUCCESS
        });
    }

    log::debug!("overwriting {} in place", target.display());
    write_file(&target, &result.new_source)?;
    reporter.report_fix(&target, &result);
    reporter.finish(check_mode)?;

    Ok(ExitCode::SUCCESS)
}
