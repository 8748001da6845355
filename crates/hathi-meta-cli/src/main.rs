use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hathi_meta_config::Config;
use hathi_meta_engine::{BatchOptions, BatchReport, convert_file};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "hathi-meta", version, about = "Generate meta.yml page descriptors from a scanning spreadsheet")]
struct Cli {
    /// Show per-row detail
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report problems
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file (default: ~/.config/hathi-meta/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write one meta.yml per spreadsheet row
    Convert {
        /// Spreadsheet exported as CSV. Unquoted paths with spaces are joined back together.
        #[arg(required = true, num_args = 1..)]
        csv_path: Vec<String>,

        /// Folder for the generated documents (default: the spreadsheet's folder)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Also save the time-corrected spreadsheet as <name>_fixed.csv
        #[arg(long)]
        write_fixed: bool,
    },
    /// Write a config file containing the built-in defaults
    InitConfig {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

/// `-v`/`-q` override the environment filter; without them it applies as given.
fn log_builder(cli: &Cli, env: env_logger::Env) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env);
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder
}

fn init_logging(cli: &Cli) {
    log_builder(cli, env_logger::Env::default().default_filter_or("info")).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            log::error!("{e:#}");
            process::exit(1);
        }
    }
}

/// Returns whether every row converted.
fn run(cli: Cli) -> Result<bool> {
    let config_path = cli.config.unwrap_or_else(Config::config_path);

    match cli.command {
        Commands::Convert {
            csv_path,
            output_dir,
            write_fixed,
        } => {
            let config = Config::load_or_default(Some(config_path.as_path()))
                .with_context(|| format!("Failed to load config file {}", config_path.display()))?;
            let csv_path = PathBuf::from(csv_path.join(" "));
            if !csv_path.is_file() {
                bail!("File '{}' not found", csv_path.display());
            }

            let options = BatchOptions {
                output_dir,
                write_fixed,
            };
            let report = convert_file(&csv_path, &config, &options)
                .with_context(|| format!("Could not process {}", csv_path.display()))?;
            summarize(&report);
            Ok(report.is_success())
        }
        Commands::InitConfig { force } => {
            if config_path.exists() && !force {
                bail!(
                    "Config file {} already exists (use --force to replace it)",
                    config_path.display()
                );
            }
            Config::default().save_to_path(&config_path)?;
            log::info!("Wrote default config to {}", config_path.display());
            Ok(true)
        }
    }
}

fn summarize(report: &BatchReport) {
    log::info!(
        "{} document(s) written, {} row(s) failed",
        report.written.len(),
        report.failures.len()
    );
    for failure in &report.failures {
        log::warn!(
            "row {} ({}): {}",
            failure.row,
            failure.identifier,
            failure.error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_joins_split_path() {
        let cli = Cli::parse_from([
            "hathi-meta",
            "convert",
            "/scans/May",
            "batch.csv",
            "--write-fixed",
        ]);

        match cli.command {
            Commands::Convert {
                csv_path,
                write_fixed,
                output_dir,
            } => {
                assert_eq!(csv_path.join(" "), "/scans/May batch.csv");
                assert!(write_fixed);
                assert!(output_dir.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["hathi-meta", "init-config", "--config", "/tmp/c.toml", "-v"]);

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(matches!(cli.command, Commands::InitConfig { force: false }));
    }

    /// Environment whose filter variable is never set, so `default` stands in for it.
    fn env_with(default: &str) -> env_logger::Env<'static> {
        env_logger::Env::new()
            .filter("HATHI_META_TEST_UNSET_LOG")
            .default_filter_or(default.to_string())
    }

    #[test]
    fn environment_filter_applies_without_flags() {
        let cli = Cli::parse_from(["hathi-meta", "init-config"]);

        let logger = log_builder(&cli, env_with("debug")).build();

        assert_eq!(logger.filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn flags_override_environment_filter() {
        let verbose = Cli::parse_from(["hathi-meta", "-v", "init-config"]);
        let quiet = Cli::parse_from(["hathi-meta", "-q", "init-config"]);

        assert_eq!(
            log_builder(&verbose, env_with("error")).build().filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log_builder(&quiet, env_with("trace")).build().filter(),
            log::LevelFilter::Warn
        );
    }

    #[test]
    fn run_converts_and_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("batch.csv");
        let mut header: Vec<String> = (0..33).map(|i| format!("col{i}")).collect();
        header[2] = "Scan Time HH:MM".to_string();
        let good = format!("item1,2024-01-01,9:15{}", ",".repeat(30));
        let short = "item2,2024-01-01,9:15";
        std::fs::write(&csv_path, format!("{}\n{good}\n{short}\n", header.join(","))).unwrap();

        let cli = Cli {
            verbose: false,
            quiet: true,
            config: Some(dir.path().join("missing.toml")),
            command: Commands::Convert {
                csv_path: vec![csv_path.to_string_lossy().into_owned()],
                output_dir: None,
                write_fixed: false,
            },
        };

        assert!(!run(cli).unwrap());
        let written = std::fs::read_to_string(dir.path().join("item1.yml")).unwrap();
        assert!(written.starts_with("capture_date: 2024-01-01T09:15:00-08:00\n"));
    }

    #[test]
    fn init_config_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let cli = |force| Cli {
            verbose: false,
            quiet: true,
            config: Some(config_path.clone()),
            command: Commands::InitConfig { force },
        };

        assert!(run(cli(false)).unwrap());
        assert!(run(cli(false)).is_err());
        assert!(run(cli(true)).unwrap());
        assert_eq!(
            Config::load_from_path(&config_path).unwrap(),
            Some(Config::default())
        );
    }
}
