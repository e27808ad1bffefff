//! Admission and lifecycle of staged files.
//!
//! [`IntakeController`] owns the live collection. It decides which raw
//! handles become entries, moves entries through their status lifecycle and
//! keeps one abort handle per running simulated transfer, so that
//! [`remove`](IntakeController::remove) and [`clear`](IntakeController::clear)
//! also stop the matching drivers.

use std::collections::HashMap;

use futures::future::{AbortHandle, Abortable, FutureExt, LocalBoxFuture};
use futures::Stream;
use serde::Serialize;

use crate::config::{IntakeConfig, COMPLETE_PROGRESS};
use crate::entry::{FileEntry, FileId, FileSource, FileStatus};
use crate::error::{IntakeError, IntakeResult, RejectReason};
use crate::progress::{clamp_delta, EntryView, ProgressSource, RandomProgress};
use crate::transfer::{drive_transfer, IntakeHandle, TransferOutcome};

// =============================================================================
// Results
// =============================================================================

/// A candidate file that was not admitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub name: String,
    pub size_bytes: u64,
    pub reason: RejectReason,
}

/// Outcome of one [`IntakeController::admit`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct Admission<F> {
    /// New entries, in input order
    pub accepted: Vec<FileEntry<F>>,
    /// Dropped candidates, in input order
    pub rejected: Vec<Rejection>,
}

impl<F> Admission<F> {
    pub fn accepted_ids(&self) -> Vec<FileId> {
        self.accepted.iter().map(FileEntry::id).collect()
    }
}

/// Effect of a single progress tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Still uploading, with the new progress value
    Progressed(f64),
    /// Reached 100 and switched to success
    Completed,
}

/// Error text of a transfer whose ticks stopped before completion.
pub const INTERRUPTED_MESSAGE: &str = "Transfer interrupted";

/// Future of a started simulated transfer.
pub type TransferTask = LocalBoxFuture<'static, TransferOutcome>;

// =============================================================================
// Controller
// =============================================================================

/// Live collection of staged files for one widget instance.
pub struct IntakeController<F> {
    config: IntakeConfig,
    entries: Vec<FileEntry<F>>,
    drivers: HashMap<FileId, AbortHandle>,
    progress: Box<dyn ProgressSource>,
}

impl<F: FileSource> IntakeController<F> {
    pub fn new(config: IntakeConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            drivers: HashMap::new(),
            progress: Box::new(RandomProgress::new()),
        }
    }

    /// Replace the source of progress increments.
    pub fn with_progress(mut self, source: impl ProgressSource + 'static) -> Self {
        self.progress = Box::new(source);
        self
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    pub fn entries(&self) -> &[FileEntry<F>] {
        &self.entries
    }

    pub fn get(&self, id: FileId) -> Option<&FileEntry<F>> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of files that can still be admitted.
    pub fn remaining_slots(&self) -> usize {
        self.config.max_files.saturating_sub(self.entries.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining_slots() == 0
    }

    /// Number of transfers that are started and not yet finished or cancelled.
    pub fn active_transfers(&self) -> usize {
        self.drivers.len()
    }

    /// Turn raw handles into entries.
    ///
    /// Oversized files are rejected first; the remaining ones fill the free
    /// slots in input order and the overflow is rejected. Accepted entries
    /// start in [`FileStatus::Idle`] and are appended to the collection.
    pub fn admit(&mut self, files: impl IntoIterator<Item = F>) -> Admission<F> {
        let limit = self.config.max_size_bytes();
        let mut room = self.remaining_slots();
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for file in files {
            let size = file.size_bytes();
            if size > limit {
                log::warn!("File {} exceeds the maximum size limit", file.name());
                rejected.push(Rejection {
                    name: file.name(),
                    size_bytes: size,
                    reason: RejectReason::TooLarge { size, limit },
                });
                continue;
            }

            if room == 0 {
                log::debug!("No slot left for {}", file.name());
                rejected.push(Rejection {
                    name: file.name(),
                    size_bytes: size,
                    reason: RejectReason::CapacityExceeded {
                        max_files: self.config.max_files,
                    },
                });
                continue;
            }

            room -= 1;
            let entry = FileEntry::new(self.fresh_id(), file);
            self.entries.push(entry.clone());
            accepted.push(entry);
        }

        Admission { accepted, rejected }
    }

    /// Move an idle entry to uploading and hand back its cancellable driver.
    ///
    /// The returned task must be spawned by the caller; it advances the entry
    /// once per item of `ticks` through `intake` until the transfer completes,
    /// the entry disappears, or the entry is removed from this controller.
    pub fn start_simulated_transfer<H, T>(
        &mut self,
        id: FileId,
        intake: H,
        ticks: T,
    ) -> IntakeResult<TransferTask>
    where
        H: IntakeHandle<File = F>,
        T: Stream<Item = ()> + 'static,
    {
        self.begin_transfer(id)?;

        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.drivers.insert(id, handle) {
            previous.abort();
        }

        let driver = Abortable::new(drive_transfer(intake, id, ticks), registration);
        Ok(driver
            .map(|outcome| outcome.unwrap_or(TransferOutcome::Cancelled))
            .boxed_local())
    }

    /// `Idle -> Uploading`, progress reset to zero.
    pub(crate) fn begin_transfer(&mut self, id: FileId) -> IntakeResult<()> {
        let entry = self.entry_mut(id)?;
        if entry.status != FileStatus::Idle {
            return Err(IntakeError::InvalidTransition {
                id,
                from: entry.status,
                to: FileStatus::Uploading,
            });
        }
        entry.status = FileStatus::Uploading;
        entry.progress = 0.0;
        Ok(())
    }

    /// Apply one progress increment to an uploading entry.
    pub fn tick(&mut self, id: FileId) -> IntakeResult<TickOutcome> {
        let index = self.index_of(id)?;
        let entry = &self.entries[index];
        if entry.status != FileStatus::Uploading {
            return Err(IntakeError::InvalidTransition {
                id,
                from: entry.status,
                to: FileStatus::Uploading,
            });
        }

        let delta = clamp_delta(self.progress.next_tick(&EntryView::of(entry)));
        let entry = &mut self.entries[index];
        entry.progress += delta;

        if entry.progress >= COMPLETE_PROGRESS {
            entry.progress = COMPLETE_PROGRESS;
            entry.status = FileStatus::Success;
            // The driver is the caller here and stops on its own.
            self.drivers.remove(&id);
            return Ok(TickOutcome::Completed);
        }

        Ok(TickOutcome::Progressed(entry.progress))
    }

    /// `Uploading -> Error` with a message; stops the driver.
    pub fn fail(&mut self, id: FileId, message: impl Into<String>) -> IntakeResult<()> {
        let entry = self.entry_mut(id)?;
        if entry.status != FileStatus::Uploading {
            return Err(IntakeError::InvalidTransition {
                id,
                from: entry.status,
                to: FileStatus::Error,
            });
        }
        entry.status = FileStatus::Error;
        entry.error = Some(message.into());
        self.cancel_driver(id);
        Ok(())
    }

    /// Drop an entry and stop its transfer. Unknown ids are ignored.
    pub fn remove(&mut self, id: FileId) -> Option<FileEntry<F>> {
        self.cancel_driver(id);
        let index = self.entries.iter().position(|entry| entry.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Drop every entry and stop every transfer.
    pub fn clear(&mut self) {
        for (_, handle) in self.drivers.drain() {
            handle.abort();
        }
        self.entries.clear();
    }

    /// Drop the abort handle of a driver that is stopping on its own.
    pub(crate) fn forget_driver(&mut self, id: FileId) {
        self.drivers.remove(&id);
    }

    /// The driver of `id` lost its tick source: `Uploading -> Error`.
    pub(crate) fn interrupt_transfer(&mut self, id: FileId) {
        self.forget_driver(id);
        if let Ok(entry) = self.entry_mut(id) {
            if entry.status == FileStatus::Uploading {
                entry.status = FileStatus::Error;
                entry.error = Some(INTERRUPTED_MESSAGE.to_string());
            }
        }
    }

    fn cancel_driver(&mut self, id: FileId) {
        if let Some(handle) = self.drivers.remove(&id) {
            handle.abort();
        }
    }

    fn fresh_id(&self) -> FileId {
        loop {
            let id = FileId::new();
            if self.get(id).is_none() {
                return id;
            }
        }
    }

    fn index_of(&self, id: FileId) -> IntakeResult<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id() == id)
            .ok_or(IntakeError::NotFound(id))
    }

    fn entry_mut(&mut self, id: FileId) -> IntakeResult<&mut FileEntry<F>> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id() == id)
            .ok_or(IntakeError::NotFound(id))
    }
}

impl<F> Drop for IntakeController<F> {
    fn drop(&mut self) {
        for handle in self.drivers.values() {
            handle.abort();
        }
    }
}
