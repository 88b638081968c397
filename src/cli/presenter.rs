//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::transcription::TaskSummary;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg} {elapsed:.dim}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print pretty JSON to stdout (falls back to compact form)
    pub fn json(&self, value: &serde_json::Value) {
        let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        println!("{}", text);
    }

    /// Print a key-value pair
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// One line per task
    pub fn task_line(&self, task: &TaskSummary) {
        println!("{}", Self::format_task(task));
    }

    fn format_task(task: &TaskSummary) -> String {
        let mut line = format!(
            "{}  {:<10} {:>5.1}%  {}",
            task.id,
            task.status.as_str(),
            task.progress,
            task.file_name
        );
        if task.queue_position > 0 && !task.status.is_terminal() {
            line.push_str(&format!("  (queue #{})", task.queue_position));
        }
        if let Some(err) = task.error_message.as_deref().filter(|e| !e.is_empty()) {
            line.push_str(&format!("  error: {}", err));
        }
        line
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transcription::TaskStatus;

    fn task(status: TaskStatus) -> TaskSummary {
        TaskSummary {
            id: "t1".to_string(),
            file_name: "talk.mp3".to_string(),
            status,
            progress: 12.5,
            queue_position: 3,
            created_at: None,
            started_at: None,
            completed_at: None,
            error_message: None,
            result: None,
        }
    }

    #[test]
    fn format_queued_task_shows_position() {
        let line = Presenter::format_task(&task(TaskStatus::Queued));
        assert!(line.starts_with("t1  Queued"));
        assert!(line.contains("12.5%"));
        assert!(line.contains("(queue #3)"));
    }

    #[test]
    fn format_failed_task_shows_error() {
        let mut t = task(TaskStatus::Failed);
        t.error_message = Some("decoder crashed".to_string());
        let line = Presenter::format_task(&t);
        assert!(!line.contains("queue #"));
        assert!(line.ends_with("error: decoder crashed"));
    }
}
