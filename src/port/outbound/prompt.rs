//! Signing prompt port.
//!
//! Local keys sign silently, so the creation flow asks a [`SigningPrompt`]
//! before each transaction when the operator wants to review it. Prompts
//! block; callers run them off the async executor.

/// Yes/no question put to the account holder before signing.
pub trait SigningPrompt: Send + Sync {
    /// Ask `question`. `Ok(false)` means the request was declined.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained, e.g. without a terminal.
    fn confirm(&self, question: &str) -> std::io::Result<bool>;
}

impl<F> SigningPrompt for F
where
    F: Fn(&str) -> std::io::Result<bool> + Send + Sync,
{
    fn confirm(&self, question: &str) -> std::io::Result<bool> {
        self(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_prompts() {
        let prompt = |question: &str| -> std::io::Result<bool> { Ok(question.ends_with('?')) };
        assert!(prompt.confirm("Sign?").unwrap());
        assert!(!prompt.confirm("Sign").unwrap());
    }
}
