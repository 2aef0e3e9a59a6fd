//! Spinner shown on stderr while the search runs.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use degrees_core::search::SearchObserver;
use degrees_core::ActorId;

const TEMPLATE: &str = "{spinner:.cyan} Finding connections... {msg} [{elapsed}]";

/// Search observer driving an `indicatif` spinner.
pub struct SpinnerProgress {
    bar: ProgressBar,
    degrees: usize,
    discovered: u64,
}

impl SpinnerProgress {
    /// Creates a spinner, or a hidden one when `quiet`.
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::with_template(TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar.enable_steady_tick(Duration::from_millis(120));
            bar
        };
        Self {
            bar,
            degrees: 0,
            discovered: 0,
        }
    }

    /// Removes the spinner from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn refresh(&self) {
        self.bar.set_message(format!(
            "level {}, {} actors discovered",
            self.degrees, self.discovered
        ));
    }
}

impl SearchObserver for SpinnerProgress {
    fn on_level(&mut self, degrees: usize, _frontier_len: usize) {
        self.degrees = degrees;
        self.refresh();
    }

    fn on_expand(&mut self, _actor: &ActorId, name: &str) {
        self.bar.set_message(format!(
            "level {}, {} actors discovered, expanding {name}",
            self.degrees, self.discovered
        ));
    }

    fn on_discover(&mut self, _actor: &ActorId) {
        self.discovered += 1;
        self.bar.inc(1);
    }
}
