// UI layer: the pacing spinner shown before each request. Purely
// decorative; the request does not start until the spinner is done, so the
// silent variant can skip the whole sequence without changing semantics.

use std::io::IsTerminal;
use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// How long the spinner animates before the request goes out.
const SPINNER_DURATION: Duration = Duration::from_secs(3);

/// Fixed pause between the spinner stopping and the request being sent.
const REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Spinner frame rate.
const TICK_INTERVAL: Duration = Duration::from_millis(60);

/// Progress decoration for a command. `Interactive` animates a spinner,
/// `Silent` does nothing at all (no animation, no delays).
pub enum Progress {
    Interactive,
    Silent,
}

impl Progress {
    /// Pick the right variant for this process: interactive when stderr is
    /// a terminal, silent otherwise (pipes, CI, tests).
    pub fn auto() -> Self {
        if std::io::stderr().is_terminal() {
            Progress::Interactive
        } else {
            Progress::Silent
        }
    }

    /// Run the fixed spinner-then-wait sequence with `label` next to the
    /// spinner. Blocks for about four seconds in interactive mode.
    pub fn pace(&self, label: &str) {
        match self {
            Progress::Interactive => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::with_template("{spinner:.green.bold} {msg}").unwrap(),
                );
                spinner.set_message(label.to_string());
                spinner.enable_steady_tick(TICK_INTERVAL);
                thread::sleep(SPINNER_DURATION);
                spinner.finish_and_clear();
                thread::sleep(REQUEST_DELAY);
            }
            Progress::Silent => {}
        }
    }
}
