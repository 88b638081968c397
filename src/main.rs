//! OWhisper client CLI entry point

use std::process::ExitCode;

use clap::Parser;

use owhisper_client::cli::{
    app::{
        build_client, init_logging, load_merged_config, run_model_status, run_status, run_tasks,
        run_transcribe, EXIT_ERROR, EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use owhisper_client::domain::config::AppConfig;
use owhisper_client::domain::transcription::TranscribeOptions;
use owhisper_client::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Config management does not talk to the service
    let command = match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        command => command,
    };

    let cli_config = AppConfig {
        base_url: cli.base_url,
        timeout: cli.timeout,
    };
    let config = load_merged_config(cli_config).await;

    let timeout = match config.parsed_timeout() {
        Ok(timeout) => timeout,
        Err(e) => {
            presenter.error(&format!("Invalid timeout: {}", e));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let client = match build_client(&config, timeout) {
        Ok(client) => client,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match command {
        Commands::Status => run_status(&client, &presenter).await,
        Commands::Model => run_model_status(&client, &presenter).await,
        Commands::Transcribe {
            file,
            output_dir,
            vad,
        } => {
            let options = TranscribeOptions { enable_vad: vad };
            run_transcribe(client, &file, output_dir.as_deref(), options).await
        }
        Commands::Tasks { action } => run_tasks(&client, action, &presenter).await,
        Commands::Config { .. } => unreachable!("handled above"),
    }
}
