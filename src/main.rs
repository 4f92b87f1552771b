use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use formcheck::util::config::AppConfig;
use formcheck::util::time::format_time_ago_str;
use formcheck::validation::{
    PasswordPolicy, validate_email, validate_password, validate_phone_number, validate_required,
};

#[derive(Parser, Debug)]
#[command(name = "formcheck", version, about = "Form validation and relative time labels")]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a "time ago" label for a timestamp
    Ago {
        /// Timestamp to describe (RFC 3339, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`)
        target: String,

        /// Reference time instead of now
        #[arg(short, long)]
        reference: Option<String>,
    },
    /// Validate a single field value
    Check {
        #[arg(value_enum)]
        kind: FieldKind,

        value: String,

        /// Field name used in the "required" message
        #[arg(long)]
        field_name: Option<String>,

        /// Override the configured minimum password length
        #[arg(long)]
        min_length: Option<usize>,

        /// Override the configured maximum password length
        #[arg(long)]
        max_length: Option<usize>,

        /// Do not require both upper and lower case letters
        #[arg(long)]
        allow_single_case: bool,

        /// Do not require a digit
        #[arg(long)]
        no_number: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FieldKind {
    Required,
    Email,
    Password,
    Phone,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("formcheck starting");

    match cli.command {
        Command::Ago { target, reference } => {
            match format_time_ago_str(&target, reference.as_deref()) {
                Ok(label) => {
                    println!("{label}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{e}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Check {
            kind,
            value,
            field_name,
            min_length,
            max_length,
            allow_single_case,
            no_number,
        } => {
            let outcome = match kind {
                FieldKind::Required => {
                    let name = field_name.unwrap_or(config.forms.default_field_name);
                    validate_required(value.as_str(), Some(name.as_str()))
                }
                FieldKind::Email => validate_email(&value),
                FieldKind::Password => {
                    let policy = PasswordPolicy {
                        min_length: min_length.unwrap_or(config.password.min_length),
                        max_length: max_length.unwrap_or(config.password.max_length),
                        require_mixed_case: config.password.require_mixed_case
                            && !allow_single_case,
                        require_number: config.password.require_number && !no_number,
                    };
                    policy.check()?;
                    validate_password(&value, &policy)
                }
                FieldKind::Phone => validate_phone_number(&value),
            };

            info!(kind = ?kind, valid = outcome.is_none(), "Checked field");
            match outcome {
                Some(message) => {
                    println!("{message}");
                    Ok(ExitCode::FAILURE)
                }
                None => {
                    println!("ok");
                    Ok(ExitCode::SUCCESS)
                }
            }
        }
    }
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "formcheck.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("formcheck=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
