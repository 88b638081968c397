//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// OWhisper client - submit audio to an OWhisper transcription service
#[derive(Parser, Debug)]
#[command(name = "owhisper-client")]
#[command(version)]
#[command(about = "Command-line client for the OWhisper audio transcription service")]
#[command(long_about = None)]
pub struct Cli {
    /// Service base URL (default: http://$OWHISPER_HOST:$OWHISPER_PORT)
    #[arg(
        short = 'u',
        long,
        value_name = "URL",
        env = "OWHISPER_BASE_URL",
        global = true
    )]
    pub base_url: Option<String>,

    /// Request timeout (e.g., 90s, 30m, 1h)
    #[arg(short = 't', long, value_name = "TIME", global = true)]
    pub timeout: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show service status
    Status,
    /// Show model file status
    Model,
    /// Transcribe an audio file and write .txt and .srt output
    Transcribe {
        /// Audio file (.mp3, .wav, .aac, .m4a)
        file: PathBuf,

        /// Directory for the output files
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Enable or disable voice activity detection on the service
        #[arg(long, value_name = "BOOL")]
        vad: Option<bool>,
    },
    /// Inspect or cancel queued tasks
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Task subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TaskAction {
    /// List all tasks
    List,
    /// Show one task
    Get {
        /// Task id
        id: String,
    },
    /// Cancel a queued task
    Cancel {
        /// Task id
        id: String,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["base_url", "timeout"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
