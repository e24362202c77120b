//! The inventory controller state machine.

use std::fmt;

use chrono::Utc;

use chillbox_foundation::{Error, ErrorContext, ErrorKind, ItemId, OperationKind, Result};
use chillbox_parser::{CommandInterpreter, Operation};
use chillbox_storage::{HistoryEntry, InventoryStore, PendingChange, Snapshot, StoreTransaction};

use crate::outcome::{self, ApplyResult, RejectionReason};
use crate::sink::{DisplaySink, FeedbackSink};

// =============================================================================
// Stage
// =============================================================================

/// Lifecycle stage of one operation, as it appears in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Handed to the controller
    Received,
    /// Checked against current stock; about to be written
    Validated,
    /// Committed
    Applied,
    /// Refused with no effect
    Rejected,
}

impl Stage {
    /// Lowercase name used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Validated => "validated",
            Self::Applied => "applied",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Sole writer of inventory records and history.
///
/// Every mutating operation reads, writes and appends history inside one
/// store transaction. Undo pops the newest history entry across all items,
/// restores its previous quantity and deletes the entry; it never appends.
pub struct InventoryController<S> {
    interpreter: CommandInterpreter,
    store: S,
    feedback: Vec<Box<dyn FeedbackSink>>,
    displays: Vec<Box<dyn DisplaySink>>,
}

impl<S: InventoryStore> InventoryController<S> {
    /// Creates a controller over `store`.
    #[must_use]
    pub fn new(interpreter: CommandInterpreter, store: S) -> Self {
        Self {
            interpreter,
            store,
            feedback: Vec::new(),
            displays: Vec::new(),
        }
    }

    /// Adds a collaborator notified with each processed result.
    #[must_use]
    pub fn with_feedback(mut self, sink: impl FeedbackSink + 'static) -> Self {
        self.feedback.push(Box::new(sink));
        self
    }

    /// Adds a collaborator that redraws from a snapshot after each transcript.
    #[must_use]
    pub fn with_display(mut self, sink: impl DisplaySink + 'static) -> Self {
        self.displays.push(Box::new(sink));
        self
    }

    /// The interpreter used by [`Self::process`].
    #[must_use]
    pub fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the controller, returning its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Interprets a transcript, applies it, then notifies collaborators.
    ///
    /// # Errors
    ///
    /// Returns a fault if the operation could not be applied; nothing was
    /// changed and collaborators are not notified. The transcript is attached
    /// to the error context. Once the operation has been applied this always
    /// returns `Ok`, even if the display snapshot cannot be read.
    pub fn process(&mut self, transcript: &str) -> Result<ApplyResult> {
        let operation = self.interpreter.interpret(transcript);
        tracing::info!(transcript, %operation, "transcript interpreted");

        let result = self.apply(&operation).map_err(|err| {
            let context = err
                .context
                .clone()
                .unwrap_or_default()
                .with_transcript(transcript);
            err.with_context(context)
        })?;

        self.notify(&result);
        Ok(result)
    }

    /// Applies one operation.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the store fails, or an internal fault if an
    /// addition would overflow; the transaction is rolled back and nothing is
    /// changed. Rejections are `Ok`.
    pub fn apply(&mut self, operation: &Operation) -> Result<ApplyResult> {
        tracing::debug!(stage = %Stage::Received, %operation, "operation received");

        let outcome = match operation {
            Operation::Unrecognized(kind) => {
                let reason = RejectionReason::Parse(*kind);
                Ok(ApplyResult::rejected(reason, outcome::rejection(reason)))
            }
            Operation::Add { item, quantity } => {
                self.mutate(item, OperationKind::Add, quantity.get())
            }
            Operation::Remove { item, quantity } => {
                self.mutate(item, OperationKind::Remove, quantity.get())
            }
            Operation::Set { item, quantity } => self.mutate(item, OperationKind::Set, *quantity),
            Operation::Undo => self.undo(),
        };

        match &outcome {
            Ok(ApplyResult::Applied {
                item, new_quantity, ..
            }) => {
                tracing::info!(
                    stage = %Stage::Applied,
                    %operation,
                    %item,
                    new_quantity = *new_quantity,
                    "operation applied"
                );
            }
            Ok(ApplyResult::Rejected { reason, .. }) => {
                tracing::info!(stage = %Stage::Rejected, %operation, %reason, "operation rejected");
            }
            Err(err) => {
                tracing::error!(%operation, error = %err, "storage fault, operation rolled back");
            }
        }

        outcome.map_err(|err| {
            let mut context = ErrorContext::new().with_operation(format!("apply {operation}"));
            if let Some(item) = operation.item() {
                context = context.with_item(item.as_str());
            }
            err.with_context(context)
        })
    }

    /// Reads an item's committed quantity.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the read fails.
    pub fn quantity(&self, item: &ItemId) -> Result<u32> {
        self.store.quantity(item)
    }

    /// Reads the full inventory for display.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the read fails.
    pub fn snapshot(&self) -> Result<Snapshot> {
        self.store.list_all()
    }

    /// Reads the undoable history, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the read fails.
    pub fn history(&self) -> Result<Vec<HistoryEntry>> {
        self.store.history()
    }

    fn mutate(&mut self, item: &ItemId, kind: OperationKind, quantity: u32) -> Result<ApplyResult> {
        let mut tx = self.store.begin()?;
        let current = tx.quantity(item)?;

        let new_quantity = match kind {
            OperationKind::Add => current.checked_add(quantity).ok_or_else(|| {
                Error::new(ErrorKind::Internal(format!(
                    "quantity overflow adding {quantity} to {current}"
                )))
            })?,
            OperationKind::Remove => {
                let Some(remaining) = current.checked_sub(quantity) else {
                    let message = outcome::insufficient(item, quantity, current);
                    return Ok(ApplyResult::rejected(
                        RejectionReason::InsufficientQuantity,
                        message,
                    ));
                };
                remaining
            }
            OperationKind::Set => quantity,
        };
        tracing::debug!(stage = %Stage::Validated, %item, current, new_quantity, "operation validated");

        let timestamp = Utc::now();
        tx.write_quantity(item, new_quantity, timestamp)?;
        tx.append_history(&PendingChange {
            item: item.clone(),
            previous_quantity: current,
            new_quantity,
            kind,
            timestamp,
        })?;
        tx.commit()?;

        let message = match kind {
            OperationKind::Add => outcome::added(item, quantity, new_quantity),
            OperationKind::Remove => outcome::removed(item, quantity, new_quantity),
            OperationKind::Set => outcome::set(item, new_quantity),
        };
        Ok(ApplyResult::applied(item, new_quantity, message))
    }

    fn undo(&mut self) -> Result<ApplyResult> {
        let mut tx = self.store.begin()?;
        let Some(entry) = tx.latest_history()? else {
            let reason = RejectionReason::NothingToUndo;
            return Ok(ApplyResult::rejected(reason, outcome::rejection(reason)));
        };
        tracing::debug!(
            stage = %Stage::Validated,
            history_id = entry.id,
            item = %entry.item,
            restore = entry.previous_quantity,
            "undo validated"
        );

        tx.write_quantity(&entry.item, entry.previous_quantity, Utc::now())?;
        tx.delete_history(entry.id)?;
        tx.commit()?;

        let message = outcome::undone(&entry.item, entry.previous_quantity);
        Ok(ApplyResult::applied(&entry.item, entry.previous_quantity, message))
    }

    fn notify(&mut self, result: &ApplyResult) {
        for sink in &mut self.feedback {
            sink.announce(result);
        }
        if self.displays.is_empty() {
            return;
        }
        match self.store.list_all() {
            Ok(snapshot) => {
                for display in &mut self.displays {
                    display.render(&snapshot);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "display refresh skipped, snapshot unavailable");
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for InventoryController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryController")
            .field("store", &self.store)
            .field("feedback", &self.feedback.len())
            .field("displays", &self.displays.len())
            .finish_non_exhaustive()
    }
}
