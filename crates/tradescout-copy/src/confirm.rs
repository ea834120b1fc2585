//! Confirmation gate for destructive operations.

/// Asks the requester a yes/no question before anything is overwritten.
pub trait Confirmer {
    /// `true` means go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirmer for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A confirmer that always gives the same answer, for non-interactive use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl Confirmer for FixedAnswer {
    fn confirm(&mut self, prompt: &str) -> bool {
        tracing::debug!(prompt, answer = self.0, "Auto-answering confirmation");
        self.0
    }
}
