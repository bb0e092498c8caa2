//! Interactive signing prompt.

use std::sync::Arc;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::port::outbound::prompt::SigningPrompt;

/// [`SigningPrompt`] on the controlling terminal. Defaults to "no".
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl SigningPrompt for TerminalPrompt {
    fn confirm(&self, question: &str) -> std::io::Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(|e| std::io::Error::other(e.to_string()))
    }
}

/// Terminal prompt unless the user passed `--yes`.
#[must_use]
pub fn signing_prompt(skip: bool) -> Option<Arc<dyn SigningPrompt>> {
    if skip {
        None
    } else {
        Some(Arc::new(TerminalPrompt))
    }
}
