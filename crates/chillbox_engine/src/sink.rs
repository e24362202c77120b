//! Collaborator seams.
//!
//! Speech output and the e-paper grid live outside the core. The controller
//! hands them each result and a fresh snapshot after every processed
//! transcript.

use chillbox_storage::Snapshot;

use crate::outcome::ApplyResult;

/// Receives the outcome of each processed transcript (speech, console).
pub trait FeedbackSink {
    /// Reports one result to the user.
    fn announce(&mut self, result: &ApplyResult);
}

/// Redraws the inventory view from a full snapshot.
pub trait DisplaySink {
    /// Renders the current inventory.
    fn render(&mut self, snapshot: &Snapshot);
}

impl<F> FeedbackSink for F
where
    F: FnMut(&ApplyResult),
{
    fn announce(&mut self, result: &ApplyResult) {
        self(result);
    }
}

impl<F> DisplaySink for F
where
    F: FnMut(&Snapshot),
{
    fn render(&mut self, snapshot: &Snapshot) {
        self(snapshot);
    }
}
