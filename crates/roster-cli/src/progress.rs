use std::io::{self, IsTerminal};
use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE_SPINNER: &str = "{spinner} {msg}";

/// Waits out the processing delay behind a spinner.
///
/// The spinner is hidden when stderr is not a terminal.
pub fn processing_pause(delay: Duration, message: &str) {
    if delay.is_zero() {
        return;
    }
    let spinner = if io::stderr().is_terminal() {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template(TEMPLATE_SPINNER) {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };
    spinner.set_message(message.to_string());
    thread::sleep(delay);
    spinner.finish_and_clear();
}
