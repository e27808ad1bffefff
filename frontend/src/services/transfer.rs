//! Browser runtime for simulated transfers.
//!
//! Ticks come from `gloo-timers` intervals and driver tasks run on the
//! Leptos local executor. The controller lives in a signal so every tick
//! re-renders the entries that changed.

use dropzone::{IntakeController, IntakeHandle, TransferRuntime};
use futures::future::LocalBoxFuture;
use gloo_timers::future::IntervalStream;
use leptos::*;

use crate::BrowserFile;

/// Intake controller owned by a widget instance.
#[derive(Clone, Copy)]
pub struct SharedIntake(pub RwSignal<IntakeController<BrowserFile>>);

impl SharedIntake {
    pub fn new(intake: IntakeController<BrowserFile>) -> Self {
        Self(create_rw_signal(intake))
    }

    /// Read-only access for views.
    pub fn read_only(&self) -> ReadSignal<IntakeController<BrowserFile>> {
        self.0.read_only()
    }
}

impl IntakeHandle for SharedIntake {
    type File = BrowserFile;

    fn with_intake<R>(&self, f: impl FnOnce(&mut IntakeController<BrowserFile>) -> R) -> Option<R> {
        // None once the owning component is disposed
        self.0.try_update(f)
    }

    fn is_alive(&self) -> bool {
        self.0.try_with_untracked(|_| ()).is_some()
    }
}

/// `setInterval` ticks and `spawn_local` tasks.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

impl TransferRuntime for BrowserRuntime {
    type Ticks = IntervalStream;

    fn ticks(&self, period_ms: u32) -> IntervalStream {
        IntervalStream::new(period_ms)
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }
}
