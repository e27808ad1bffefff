//! Widget-level glue around the controller.
//!
//! [`Dropzone`] is what a drop event or a file chooser talks to: it admits a
//! batch, reports the accepted handles to the selection callback and starts
//! one simulated transfer per accepted entry on the runtime.

use std::rc::Rc;

use futures::FutureExt;

use crate::config::TICK_INTERVAL_MS;
use crate::entry::{FileEntry, FileId};
use crate::intake::Admission;
use crate::transfer::{IntakeHandle, TransferRuntime};

type SelectionCallback<F> = Rc<dyn Fn(Vec<F>)>;

/// Entry point for file selections of one widget instance.
pub struct Dropzone<H: IntakeHandle, R> {
    intake: H,
    runtime: R,
    tick_interval_ms: u32,
    on_files_selected: Option<SelectionCallback<H::File>>,
}

impl<H: IntakeHandle, R: Clone> Clone for Dropzone<H, R> {
    fn clone(&self) -> Self {
        Self {
            intake: self.intake.clone(),
            runtime: self.runtime.clone(),
            tick_interval_ms: self.tick_interval_ms,
            on_files_selected: self.on_files_selected.clone(),
        }
    }
}

impl<H: IntakeHandle, R: TransferRuntime> Dropzone<H, R> {
    pub fn new(intake: H, runtime: R) -> Self {
        Self {
            intake,
            runtime,
            tick_interval_ms: TICK_INTERVAL_MS,
            on_files_selected: None,
        }
    }

    /// Called with the accepted raw handles of each batch that admitted at
    /// least one file.
    pub fn on_files_selected(mut self, callback: impl Fn(Vec<H::File>) + 'static) -> Self {
        self.on_files_selected = Some(Rc::new(callback));
        self
    }

    pub fn with_tick_interval(mut self, period_ms: u32) -> Self {
        self.tick_interval_ms = period_ms;
        self
    }

    pub fn intake(&self) -> &H {
        &self.intake
    }

    /// Admit a batch and start transfers for the accepted entries.
    ///
    /// Returns `None` when the controller is no longer available.
    pub fn admit(&self, files: Vec<H::File>) -> Option<Admission<H::File>> {
        let admission = self.intake.with_intake(|c| c.admit(files))?;

        for rejection in &admission.rejected {
            log::debug!("Rejected {}: {}", rejection.name, rejection.reason);
        }

        if admission.accepted.is_empty() {
            return Some(admission);
        }

        if let Some(callback) = &self.on_files_selected {
            callback(admission.accepted.iter().map(FileEntry::file).cloned().collect());
        }

        for id in admission.accepted_ids() {
            self.start(id);
        }

        Some(admission)
    }

    /// Remove one entry, cancelling its transfer.
    pub fn remove(&self, id: FileId) -> Option<FileEntry<H::File>> {
        self.intake.with_intake(|c| c.remove(id)).flatten()
    }

    /// Remove every entry, cancelling all transfers.
    pub fn clear(&self) {
        self.intake.with_intake(|c| c.clear());
    }

    fn start(&self, id: FileId) {
        let ticks = self.runtime.ticks(self.tick_interval_ms);
        let handle = self.intake.clone();
        match self
            .intake
            .with_intake(|c| c.start_simulated_transfer(id, handle, ticks))
        {
            Some(Ok(task)) => self.runtime.spawn(
                task.map(move |outcome| log::debug!("Transfer {} ended: {:?}", id, outcome))
                    .boxed_local(),
            ),
            Some(Err(e)) => log::warn!("Could not start transfer: {}", e),
            None => log::warn!("Intake dropped before transfer {} started", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::LocalPool;

    use super::*;
    use crate::config::IntakeConfig;
    use crate::entry::{FileStatus, RawFile};
    use crate::intake::IntakeController;
    use crate::progress::FixedProgress;
    use crate::testing::{DisposableIntake, ManualRuntime};

    const MB: u64 = 1024 * 1024;

    type Shared = Rc<RefCell<IntakeController<RawFile>>>;

    struct Fixture {
        pool: LocalPool,
        runtime: ManualRuntime,
        intake: Shared,
        selected: Rc<RefCell<Vec<Vec<String>>>>,
        dropzone: Dropzone<Shared, ManualRuntime>,
    }

    impl Fixture {
        fn new(config: IntakeConfig, step: f64) -> Self {
            let pool = LocalPool::new();
            let runtime = ManualRuntime::new(&pool);
            let intake = Rc::new(RefCell::new(
                IntakeController::new(config).with_progress(FixedProgress(step)),
            ));
            let selected = Rc::new(RefCell::new(Vec::new()));
            let sink = selected.clone();
            let dropzone = Dropzone::new(intake.clone(), runtime.clone()).on_files_selected(
                move |files: Vec<RawFile>| {
                    sink.borrow_mut()
                        .push(files.into_iter().map(|f| f.name).collect());
                },
            );
            Self {
                pool,
                runtime,
                intake,
                selected,
                dropzone,
            }
        }

        /// Deliver `n` ticks to every live timer and let the drivers run.
        fn advance(&mut self, n: usize) {
            for _ in 0..n {
                self.runtime.pulse();
                self.pool.run_until_stalled();
            }
        }

        fn status(&self, id: FileId) -> Option<FileStatus> {
            self.intake.borrow().get(id).map(|e| e.status())
        }
    }

    fn file(name: &str, size: u64) -> RawFile {
        RawFile::new(name, size, "text/plain")
    }

    #[test]
    fn test_admit_two_of_three_and_notify_once() {
        let mut fx = Fixture::new(IntakeConfig::default().with_max_files(2), 10.0);
        let admission = fx
            .dropzone
            .admit(vec![file("a", MB), file("b", 2 * MB), file("c", 3 * MB)])
            .unwrap();

        assert_eq!(admission.accepted.len(), 2);
        assert_eq!(*fx.selected.borrow(), vec![vec!["a".to_string(), "b".to_string()]]);

        fx.pool.run_until_stalled();
        assert_eq!(fx.runtime.live_timers(), 2);
        for id in admission.accepted_ids() {
            assert_eq!(fx.status(id), Some(FileStatus::Uploading));
        }
    }

    #[test]
    fn test_oversized_batch_skips_callback() {
        let fx = Fixture::new(IntakeConfig::default(), 10.0);
        let admission = fx.dropzone.admit(vec![file("big", 11 * MB)]).unwrap();

        assert!(admission.accepted.is_empty());
        assert_eq!(admission.rejected.len(), 1);
        assert!(fx.selected.borrow().is_empty());
        assert_eq!(fx.runtime.live_timers(), 0);
    }

    #[test]
    fn test_single_file_reaches_success() {
        let mut fx = Fixture::new(IntakeConfig::default(), 7.0);
        let id = fx.dropzone.admit(vec![file("a", MB)]).unwrap().accepted_ids()[0];

        assert_eq!(fx.status(id), Some(FileStatus::Uploading));

        // 7 per tick needs 15 ticks to reach 100
        fx.advance(14);
        assert_eq!(fx.status(id), Some(FileStatus::Uploading));
        fx.advance(1);

        let intake = fx.intake.borrow();
        let entry = intake.get(id).unwrap();
        assert_eq!(entry.status(), FileStatus::Success);
        assert_eq!(entry.progress(), 100.0);
        assert_eq!(intake.active_transfers(), 0);
        drop(intake);

        fx.advance(1);
        assert_eq!(fx.runtime.live_timers(), 0);
    }

    #[test]
    fn test_remove_cancels_driver() {
        let mut fx = Fixture::new(IntakeConfig::default(), 10.0);
        let ids = fx
            .dropzone
            .admit(vec![file("a", 1), file("b", 1)])
            .unwrap()
            .accepted_ids();
        fx.advance(2);

        let removed = fx.dropzone.remove(ids[0]).unwrap();
        assert_eq!(removed.name(), "a");
        fx.advance(3);

        assert!(fx.intake.borrow().get(ids[0]).is_none());
        assert_eq!(fx.intake.borrow().len(), 1);
        assert_eq!(fx.runtime.live_timers(), 1);
        assert_eq!(fx.intake.borrow().get(ids[1]).unwrap().progress(), 50.0);

        // removing twice is a no-op
        assert!(fx.dropzone.remove(ids[0]).is_none());
    }

    #[test]
    fn test_clear_stops_every_timer() {
        let mut fx = Fixture::new(IntakeConfig::default(), 10.0);
        fx.dropzone
            .admit(vec![file("a", 1), file("b", 1), file("c", 1)])
            .unwrap();
        fx.advance(1);
        assert_eq!(fx.runtime.live_timers(), 3);

        fx.dropzone.clear();
        fx.advance(5);

        assert!(fx.intake.borrow().is_empty());
        assert_eq!(fx.intake.borrow().active_transfers(), 0);
        assert_eq!(fx.runtime.live_timers(), 0);
    }

    #[test]
    fn test_slots_free_up_after_remove() {
        let fx = Fixture::new(IntakeConfig::default().with_max_files(1), 10.0);
        let first = fx.dropzone.admit(vec![file("a", 1)]).unwrap().accepted_ids()[0];
        assert!(fx.dropzone.admit(vec![file("b", 1)]).unwrap().accepted.is_empty());

        fx.dropzone.remove(first);
        let admission = fx.dropzone.admit(vec![file("b", 1)]).unwrap();
        assert_eq!(admission.accepted.len(), 1);
        assert_eq!(fx.selected.borrow().len(), 2);
    }

    #[test]
    fn test_dropping_controller_aborts_drivers() {
        let mut pool = LocalPool::new();
        let runtime = ManualRuntime::new(&pool);
        let intake = DisposableIntake::new(
            IntakeController::new(IntakeConfig::default()).with_progress(FixedProgress(10.0)),
        );
        let dropzone = Dropzone::new(intake.clone(), runtime.clone());

        dropzone.admit(vec![file("a", 1), file("b", 1)]).unwrap();
        runtime.pulse();
        pool.run_until_stalled();
        assert_eq!(runtime.live_timers(), 2);

        intake.dispose();
        pool.run_until_stalled();

        assert!(!intake.is_alive());
        assert_eq!(runtime.live_timers(), 0);
        assert!(dropzone.admit(vec![file("c", 1)]).is_none());
    }
}
