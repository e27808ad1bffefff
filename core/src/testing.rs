//! Manual transfer runtime for tests.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;

use crate::entry::RawFile;
use crate::intake::IntakeController;
use crate::transfer::{IntakeHandle, TransferRuntime};

/// Runtime whose timers only fire when [`pulse`](ManualRuntime::pulse) is called.
#[derive(Clone)]
pub(crate) struct ManualRuntime {
    spawner: LocalSpawner,
    timers: Rc<RefCell<Vec<UnboundedSender<()>>>>,
}

impl ManualRuntime {
    pub(crate) fn new(pool: &LocalPool) -> Self {
        Self {
            spawner: pool.spawner(),
            timers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Fire every timer once. Timers whose driver is gone are forgotten.
    pub(crate) fn pulse(&self) {
        self.timers
            .borrow_mut()
            .retain(|timer| timer.unbounded_send(()).is_ok());
    }

    /// Timers still held by a running driver.
    pub(crate) fn live_timers(&self) -> usize {
        let mut timers = self.timers.borrow_mut();
        timers.retain(|timer| !timer.is_closed());
        timers.len()
    }
}

impl TransferRuntime for ManualRuntime {
    type Ticks = UnboundedReceiver<()>;

    fn ticks(&self, _period_ms: u32) -> Self::Ticks {
        let (tx, rx) = mpsc::unbounded();
        self.timers.borrow_mut().push(tx);
        rx
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner
            .spawn_local(task)
            .expect("local pool is alive");
    }
}

/// Handle whose owner can drop the controller while clones still exist,
/// like a disposed reactive signal.
#[derive(Clone)]
pub(crate) struct DisposableIntake(Rc<RefCell<Option<IntakeController<RawFile>>>>);

impl DisposableIntake {
    pub(crate) fn new(intake: IntakeController<RawFile>) -> Self {
        Self(Rc::new(RefCell::new(Some(intake))))
    }

    /// Drop the controller.
    pub(crate) fn dispose(&self) {
        let intake = self.0.borrow_mut().take();
        drop(intake);
    }
}

impl IntakeHandle for DisposableIntake {
    type File = RawFile;

    fn with_intake<R>(&self, f: impl FnOnce(&mut IntakeController<RawFile>) -> R) -> Option<R> {
        let mut slot = self.0.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    }

    fn is_alive(&self) -> bool {
        self.0.try_borrow().map_or(true, |slot| slot.is_some())
    }
}
