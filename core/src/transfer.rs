//! Simulated transfer driver.
//!
//! A driver is a periodic task bound to one entry id. It reaches the
//! controller through an [`IntakeHandle`] and waits for ticks from a
//! [`TransferRuntime`], so the same code runs on browser timers and on a
//! manual test runtime.

use std::cell::RefCell;
use std::pin::pin;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::{Stream, StreamExt};

use crate::entry::{FileId, FileSource};
use crate::intake::{IntakeController, TickOutcome};

/// How a driver ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Progress reached 100
    Completed,
    /// Entry removed or failed, owner gone, driver aborted, or ticks ran out
    Cancelled,
}

/// Shared owner of an [`IntakeController`].
pub trait IntakeHandle: Clone + 'static {
    type File: FileSource + 'static;

    /// Run `f` against the controller.
    ///
    /// `None` when the controller cannot be reached right now, either because
    /// it is borrowed elsewhere or because its owner is gone. Use
    /// [`is_alive`](IntakeHandle::is_alive) to tell the two apart.
    fn with_intake<R>(&self, f: impl FnOnce(&mut IntakeController<Self::File>) -> R) -> Option<R>;

    /// `false` once the controller has been dropped for good.
    fn is_alive(&self) -> bool {
        true
    }
}

impl<F: FileSource + 'static> IntakeHandle for Rc<RefCell<IntakeController<F>>> {
    type File = F;

    // The Rc keeps the controller alive, so None here only means busy.
    fn with_intake<R>(&self, f: impl FnOnce(&mut IntakeController<F>) -> R) -> Option<R> {
        let mut intake = self.try_borrow_mut().ok()?;
        Some(f(&mut *intake))
    }
}

/// Timer and task spawner used by the drivers.
pub trait TransferRuntime: Clone + 'static {
    type Ticks: Stream<Item = ()> + 'static;

    /// A stream yielding once every `period_ms` milliseconds.
    fn ticks(&self, period_ms: u32) -> Self::Ticks;

    /// Run a task to completion in the background.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Advance entry `id` once per tick until it completes or goes away.
///
/// Every tick re-checks the entry through the handle, so a tick arriving
/// after removal never recreates state. A tick landing while the controller
/// is busy is skipped. If the ticks run out first, the entry is marked as
/// failed. Every exit other than an abort drops the driver's registration.
pub async fn drive_transfer<H, T>(intake: H, id: FileId, ticks: T) -> TransferOutcome
where
    H: IntakeHandle,
    T: Stream<Item = ()>,
{
    let mut ticks = pin!(ticks);

    while ticks.next().await.is_some() {
        match intake.with_intake(|c| c.tick(id)) {
            Some(Ok(TickOutcome::Progressed(_))) => {}
            Some(Ok(TickOutcome::Completed)) => {
                log::debug!("Transfer {} completed", id);
                return TransferOutcome::Completed;
            }
            Some(Err(e)) => {
                log::debug!("Transfer {} stopped: {}", id, e);
                intake.with_intake(|c| c.forget_driver(id));
                return TransferOutcome::Cancelled;
            }
            None if intake.is_alive() => {
                log::debug!("Intake busy, skipping tick for {}", id);
            }
            None => return TransferOutcome::Cancelled,
        }
    }

    log::warn!("Transfer {} lost its timer", id);
    intake.with_intake(|c| c.interrupt_transfer(id));
    TransferOutcome::Cancelled
}
