//! Terminal status sink.
//!
//! Prints each creation event as it arrives. While the flow waits on the
//! chain (`confirming` events) a spinner runs; it is closed by the next event.

use indicatif::ProgressBar;
use parking_lot::Mutex;

use super::output;
use crate::domain::status::{StatusEvent, StatusKind};
use crate::port::outbound::status::StatusSink;

struct ActiveSpinner {
    bar: ProgressBar,
    title: String,
}

/// [`StatusSink`] that renders events through [`output`].
#[derive(Default)]
pub struct TerminalStatus {
    active: Mutex<Option<ActiveSpinner>>,
}

impl TerminalStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close a spinner left running by a trailing `confirming` event,
    /// marked by whether the command that drove it `succeeded`.
    pub fn finish(&self, succeeded: bool) {
        if let Some(active) = self.active.lock().take() {
            if succeeded {
                output::spinner_success(&active.bar, &active.title);
            } else {
                output::spinner_fail(&active.bar, &active.title);
            }
        }
    }
}

impl StatusSink for TerminalStatus {
    fn emit(&self, event: StatusEvent) {
        let mut active = self.active.lock();

        if let Some(previous) = active.take() {
            if event.kind == StatusKind::Error {
                output::spinner_fail(&previous.bar, &previous.title);
            } else {
                output::spinner_success(&previous.bar, &previous.title);
            }
        }

        if event.kind == StatusKind::Confirming && !output::is_json() {
            let bar = output::spinner(&format!("{} {}", event.title, output::muted(&event.message)));
            if let Some(hash) = &event.hash {
                bar.println(format!("    {:<10} {}", output::muted("tx"), hash));
            }
            *active = Some(ActiveSpinner {
                bar,
                title: event.title,
            });
            return;
        }

        output::status(&event);
    }
}

impl Drop for TerminalStatus {
    fn drop(&mut self) {
        if let Some(active) = self.active.get_mut().take() {
            active.bar.finish_and_clear();
        }
    }
}
