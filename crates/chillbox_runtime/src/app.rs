//! Wiring a controller from settings, and batch processing.

use std::io::BufRead;
use std::sync::Arc;

use chillbox_engine::InventoryController;
use chillbox_foundation::{Error, ErrorKind, Result};
use chillbox_parser::CommandInterpreter;
use chillbox_storage::{InventoryStore, SqliteStore};

use crate::settings::Settings;

/// Builds the catalog, opens the database and returns a controller.
///
/// No collaborators are attached; callers add the ones they need.
///
/// # Errors
///
/// Returns a configuration error for a bad catalog, or a storage fault if
/// the database cannot be opened or migrated.
pub fn open_controller(settings: &Settings) -> Result<InventoryController<SqliteStore>> {
    let catalog = Arc::new(settings.build_catalog()?);
    tracing::info!(
        items = catalog.len(),
        variants = catalog.variant_count(),
        "catalog loaded"
    );
    let store = settings.open_store()?;
    Ok(InventoryController::new(
        CommandInterpreter::new(catalog),
        store,
    ))
}

/// Counts from [`run_batch`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Transcripts that changed the inventory
    pub applied: usize,
    /// Transcripts that were rejected
    pub rejected: usize,
}

/// Processes one transcript per line.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Stops at the first storage fault or read error. Lines before it remain
/// applied.
pub fn run_batch<S: InventoryStore>(
    controller: &mut InventoryController<S>,
    input: impl BufRead,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|e| Error::new(ErrorKind::Io(e.to_string())))?;
        let transcript = line.trim();
        if transcript.is_empty() || transcript.starts_with('#') {
            continue;
        }

        let result = controller.process(transcript).inspect_err(|err| {
            tracing::error!(line = index + 1, error = %err, "batch stopped");
        })?;
        if result.is_applied() {
            summary.applied += 1;
        } else {
            summary.rejected += 1;
        }
    }
    tracing::info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "batch finished"
    );
    Ok(summary)
}
