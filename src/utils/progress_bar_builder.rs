use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
const BAR_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg} [{wide_bar}] {pos}/{len}";

/// Spinners and bars share one look across commands. indicatif draws to stderr and
/// stays silent when that is not a terminal, so piped output is unaffected.
pub(crate) struct ProgressBarBuilder {
    message: String,
    length: Option<u64>,
    tick: Option<Duration>,
}

impl ProgressBarBuilder {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            length: None,
            tick: None,
        }
    }

    /// Switches from a spinner to a bar counting up to `length`.
    pub(crate) fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub(crate) fn with_tick(mut self) -> Self {
        self.tick = Some(Duration::from_millis(120));
        self
    }

    pub(crate) fn build(self) -> Result<ProgressBar> {
        let pb = match self.length {
            Some(length) => {
                let pb = ProgressBar::new(length);
                pb.set_style(ProgressStyle::default_bar().template(BAR_TEMPLATE)?);
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(ProgressStyle::default_spinner().template(SPINNER_TEMPLATE)?);
                pb
            }
        };
        pb.set_message(self.message);

        if let Some(interval) = self.tick {
            pb.enable_steady_tick(interval);
        }

        Ok(pb)
    }
}
