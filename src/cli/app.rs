//! Command runners

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::application::ports::{ApiError, ConfigStore, TranscriptionApi};
use crate::application::{TranscribeError, TranscribeFileUseCase, TranscribeOutcome};
use crate::domain::config::{AppConfig, ClientConfig, Duration};
use crate::domain::envelope::ApiResponse;
use crate::domain::transcription::{
    CancelAck, ModelStatus, TaskList, TaskSummary, TranscribeOptions, TranscriptionResult,
};
use crate::infrastructure::{OWhisperClient, XdgConfigStore};

use super::args::TaskAction;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output for
/// this crate and warnings for everything else.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "owhisper_client=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Ignore a second initialisation (e.g. from tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Load and merge configuration: defaults < file < cli
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring config file {}: {}", store.path().display(), e);
            AppConfig::empty()
        }
    };

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Build the HTTP client from merged settings.
///
/// The configured base URL is the explicit address; without one the
/// environment fallback applies.
pub fn build_client(config: &AppConfig, timeout: Duration) -> Result<OWhisperClient, ApiError> {
    let client_config =
        ClientConfig::from_env(config.base_url.as_deref()).with_timeout(timeout);
    tracing::debug!(
        base_url = client_config.base_url(),
        timeout = %timeout,
        "client configured"
    );
    OWhisperClient::new(client_config)
}

/// Run `status`
pub async fn run_status<A: TranscriptionApi>(api: &A, presenter: &Presenter) -> ExitCode {
    match api.status().await {
        Ok(envelope) => report_envelope(&envelope, presenter, |data| presenter.json(data)),
        Err(e) => fail(presenter, &e.to_string()),
    }
}

/// Run `model`
pub async fn run_model_status<A: TranscriptionApi>(api: &A, presenter: &Presenter) -> ExitCode {
    let envelope = match api.model_status().await {
        Ok(envelope) => envelope,
        Err(e) => return fail(presenter, &e.to_string()),
    };

    match envelope.decode_data::<ModelStatus>() {
        Ok(model) => {
            presenter.key_value("exists", &model.exists.to_string());
            presenter.key_value("valid", &model.valid.to_string());
            presenter.key_value("size", &model.human_readable_size());
            presenter.key_value("path", &model.path);
            if !model.is_ready() {
                presenter.warn("Model is not ready; transcription requests will fail");
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => fail(presenter, &e.to_string()),
    }
}

/// Run `transcribe`: upload, then write `<stem>.txt` and `<stem>.srt`.
/// A queued upload reports its task id instead.
pub async fn run_transcribe<A: TranscriptionApi>(
    api: A,
    file: &Path,
    output_dir: Option<&Path>,
    options: TranscribeOptions,
) -> ExitCode {
    let mut presenter = Presenter::new();
    let use_case = TranscribeFileUseCase::new(api);

    presenter.start_spinner(&format!("Transcribing {}...", file.display()));
    let outcome = match use_case.execute(file, options).await {
        Ok(outcome) => outcome,
        Err(e) => {
            presenter.spinner_fail("Transcription failed");
            let message = match &e {
                TranscribeError::Service(s) => match s.code.as_deref() {
                    Some(code) => format!("{} ({})", s.message, code),
                    None => s.message.clone(),
                },
                other => other.to_string(),
            };
            return fail(&presenter, &message);
        }
    };

    let result = match outcome {
        TranscribeOutcome::Completed(result) => result,
        TranscribeOutcome::Queued(task) => {
            presenter.spinner_success(&format!("Queued as task {}", task.task_id));
            presenter.info(&format!("Queue position: {}", task.queue_position));
            presenter.info(&format!(
                "Run `owhisper-client tasks get {}` to fetch the transcript",
                task.task_id
            ));
            presenter.output(&task.task_id);
            return ExitCode::from(EXIT_SUCCESS);
        }
    };
    presenter.spinner_success(&format!(
        "Transcription complete ({:.1}s on server)",
        result.processing_duration().as_secs_f64()
    ));

    let dir = output_dir.map(Path::to_path_buf).unwrap_or_default();
    match write_outputs(&dir, file, &result).await {
        Ok((txt, srt)) => {
            presenter.info(&format!("Text saved to {}", txt.display()));
            match srt {
                Some(srt) => presenter.info(&format!("Subtitles saved to {}", srt.display())),
                None => presenter.warn("Service returned no subtitles"),
            }
            presenter.output(&result.text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => fail(&presenter, &format!("Failed to write output: {}", e)),
    }
}

/// Run `tasks ...`
pub async fn run_tasks<A: TranscriptionApi>(
    api: &A,
    action: TaskAction,
    presenter: &Presenter,
) -> ExitCode {
    let outcome = match &action {
        TaskAction::List => api.list_tasks().await,
        TaskAction::Get { id } => api.get_task(id).await,
        TaskAction::Cancel { id } => api.cancel_task(id).await,
    };
    let envelope = match outcome {
        Ok(envelope) => envelope,
        Err(e) => return fail(presenter, &e.to_string()),
    };

    let shown = match action {
        TaskAction::List => envelope.decode_data::<TaskList>().map(|list| {
            if list.tasks.is_empty() {
                presenter.info("No tasks");
            }
            for task in &list.tasks {
                presenter.task_line(task);
            }
            presenter.info(&format!("Queue length: {}", list.queue_length));
        }),
        TaskAction::Get { .. } => envelope.decode_data::<TaskSummary>().map(|task| {
            presenter.task_line(&task);
            if let Some(result) = task.result {
                presenter.output(&result.text);
            }
        }),
        TaskAction::Cancel { id } => envelope.decode_data::<CancelAck>().map(|ack| {
            if ack.message.is_empty() {
                presenter.success(&format!("Task {} cancelled", id));
            } else {
                presenter.success(&format!("Task {}: {}", id, ack.message));
            }
        }),
    };

    match shown {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => fail(presenter, &e.to_string()),
    }
}

/// Write transcript files next to each other in `dir`.
/// Returns the text path and, when subtitles are non-empty, the SRT path.
pub async fn write_outputs(
    dir: &Path,
    source: &Path,
    result: &TranscriptionResult,
) -> std::io::Result<(PathBuf, Option<PathBuf>)> {
    if !dir.as_os_str().is_empty() {
        tokio::fs::create_dir_all(dir).await?;
    }

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "transcription".to_string());

    let txt = dir.join(format!("{}.txt", stem));
    tokio::fs::write(&txt, &result.text).await?;

    if !result.has_subtitles() {
        return Ok((txt, None));
    }
    let srt = dir.join(format!("{}.srt", stem));
    tokio::fs::write(&srt, &result.srt_content).await?;
    Ok((txt, Some(srt)))
}

fn report_envelope(
    envelope: &ApiResponse,
    presenter: &Presenter,
    on_data: impl FnOnce(&serde_json::Value),
) -> ExitCode {
    match envelope.service_error() {
        None => {
            if let Some(data) = envelope.data() {
                on_data(data);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Some(e) => fail(presenter, &e.to_string()),
    }
}

fn fail(presenter: &Presenter, message: &str) -> ExitCode {
    presenter.error(message);
    ExitCode::from(EXIT_ERROR)
}
