//! argon2id CLI - hash and verify passwords from the shell
//!
//! Passwords are read from a prompt unless given with `--password` or the
//! `ARGON2ID_PASSWORD` environment variable. Logs go to stderr so stdout
//! only carries the command output.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use zeroize::Zeroizing;

use argon2id::SettingsManager;
use argon2id_cli::{CliError, CostOverrides};

/// Argon2id password hashing and verification
#[derive(Parser, Debug)]
#[command(name = "argon2id")]
#[command(version)]
#[command(about = "Hash passwords with Argon2id and verify them against encoded hashes")]
struct Args {
    /// Directory holding settings.json (defaults to the per-user config directory)
    #[arg(long, global = true, env = "ARGON2ID_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hash a password and print the encoded hash
    Hash {
        #[command(flatten)]
        costs: CostOverrides,

        /// Password to hash (prompted for if omitted)
        #[arg(long, env = "ARGON2ID_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Verify a password against an encoded hash
    Verify {
        /// Encoded hash, e.g. $argon2id$v=19$m=65536,t=3,p=4$...$...
        hash: String,

        /// Password to check (prompted for if omitted)
        #[arg(long, env = "ARGON2ID_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Show the parameters stored in an encoded hash
    Inspect {
        /// Encoded hash
        hash: String,
    },

    /// Show the settings file and cost profile
    Settings {
        /// Write the profile (with any cost flags applied) to the settings file
        #[arg(long)]
        init: bool,

        #[command(flatten)]
        costs: CostOverrides,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Command::Hash { costs, password } => {
            let manager = open_settings(args.config_dir)?;
            let costs = costs.apply(*manager.costs());
            debug!(?costs, "Hashing with cost profile");

            let password = read_password(password, "Password: ")?;
            argon2id_cli::hash(password.as_bytes(), &costs, &mut stdout)
        }
        Command::Verify { hash, password } => {
            let password = read_password(password, "Password: ")?;
            argon2id_cli::verify(&hash, password.as_bytes(), &mut stdout)
        }
        Command::Inspect { hash } => argon2id_cli::inspect(&hash, &mut stdout),
        Command::Settings { init, costs } => {
            let mut manager = open_settings(args.config_dir)?;
            if init {
                argon2id_cli::init_settings(&mut manager, &costs)?;
            }
            argon2id_cli::show_settings(&manager, &mut stdout)
        }
    }
}

fn open_settings(config_dir: Option<PathBuf>) -> Result<SettingsManager, CliError> {
    let manager = match config_dir {
        Some(dir) => SettingsManager::open(&dir)?,
        None => SettingsManager::open_default()?,
    };
    Ok(manager)
}

fn read_password(given: Option<String>, prompt: &str) -> Result<Zeroizing<String>, CliError> {
    match given {
        Some(password) => Ok(Zeroizing::new(password)),
        None => Ok(Zeroizing::new(rpassword::prompt_password(prompt)?)),
    }
}
