//! `mdt` - command-line interface for the MKV default-track editor.
//!
//! Probes Matroska files with mkvinfo and switches default audio/subtitle
//! tracks with mkvpropedit. All command construction lives in `mdt_core`;
//! this binary only parses arguments, loads settings, and executes the
//! built mutation command.

use std::path::PathBuf;
use std::process::{Command, ExitCode};

use clap::{Parser, Subcommand};
use directories::ProjectDirs;

use mdt_core::config::{ConfigManager, Settings};
use mdt_core::logging::{init_tracing, LogLevel};
use mdt_core::probe;
use mdt_core::propedit::{self, format_tokens_pretty};

const CLI_AFTER_HELP: &str = "Examples:\n  \
    mdt info movie.mkv\n  \
    mdt info movie.mkv --json\n  \
    mdt set-default movie.mkv --audio 2\n  \
    mdt set-default movie.mkv --audio 2 --subtitle 1 --dry-run";

#[derive(Debug, Parser)]
#[command(
    name = "mdt",
    version,
    about = "Inspect Matroska files and switch their default audio/subtitle tracks",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Show additional logging output.
    #[arg(long, global = true)]
    verbose: bool,

    /// Path to the settings file (defaults to the platform config dir).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Probe a file and list its audio and subtitle streams.
    Info {
        /// Matroska file to inspect.
        file: PathBuf,

        /// Print the stream listing as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Flag one audio and/or subtitle stream as the default.
    SetDefault {
        /// Matroska file to edit.
        file: PathBuf,

        /// Audio stream number to make default (0 = leave audio unchanged).
        #[arg(long, default_value_t = 0)]
        audio: u32,

        /// Subtitle stream number to make default (0 = leave subtitles unchanged).
        #[arg(long, default_value_t = 0)]
        subtitle: u32,

        /// Print the mkvpropedit command instead of executing it.
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.clone()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::from_name(&settings.logging.level)
    };
    init_tracing(level);

    match run(cli, &settings) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, settings: &Settings) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { file, json } => {
            let streams = probe::probe_file(&file, &settings.tools)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&streams)?);
                return Ok(ExitCode::SUCCESS);
            }

            if !streams.is_mkv {
                println!("{}: not a Matroska container", file.display());
                return Ok(ExitCode::FAILURE);
            }

            for stream in streams.audio.iter().chain(streams.subtitle.iter()) {
                println!("{}", stream.display_name());
            }
            if streams.audio.is_empty() && streams.subtitle.is_empty() {
                println!("{}: no audio or subtitle tracks", file.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::SetDefault {
            file,
            audio,
            subtitle,
            dry_run,
        } => {
            // 0 means "no change for this type".
            let audio = (audio > 0).then_some(audio);
            let subtitle = (subtitle > 0).then_some(subtitle);
            if audio.is_none() && subtitle.is_none() {
                eprintln!("nothing to do: pass --audio and/or --subtitle");
                return Ok(ExitCode::FAILURE);
            }

            let command =
                propedit::build_default_flag_command(&file, audio, subtitle, &settings.tools)?;

            if dry_run {
                print!("{} \\\n{}", command.program, format_tokens_pretty(&command.args));
                return Ok(ExitCode::SUCCESS);
            }

            execute(&command)
        }
    }
}

/// Execute the built mkvpropedit command, inheriting its output.
fn execute(command: &propedit::PropEditCommand) -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing::debug!("Running: {}", command.command_line());

    let status = Command::new(&command.program)
        .args(&command.args)
        .status()
        .map_err(|e| format!("{} could not be launched: {e}", command.program))?;

    if !status.success() {
        return Err(format!(
            "{} failed with exit code {}",
            command.program,
            status.code().unwrap_or(-1)
        )
        .into());
    }

    tracing::info!("Default flags updated");
    Ok(ExitCode::SUCCESS)
}

/// Load settings from the given path, or the platform config directory.
///
/// The file is created with defaults on first run.
fn load_settings(path: Option<PathBuf>) -> Result<Settings, Box<dyn std::error::Error>> {
    let path = match path {
        Some(path) => path,
        None => default_config_path(),
    };

    let mut manager = ConfigManager::new(path);
    manager.load_or_create()?;
    Ok(manager.settings().clone())
}

fn default_config_path() -> PathBuf {
    match ProjectDirs::from("", "", "mdt") {
        Some(dirs) => dirs.config_dir().join("mdt.toml"),
        None => PathBuf::from("mdt.toml"),
    }
}
