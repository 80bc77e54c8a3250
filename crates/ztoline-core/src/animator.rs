//! Start/stop wrapper around a host-provided repeating task.

use crate::constants::TICK_PERIOD;
use crate::error::StageError;
use instant::Instant;
use std::time::Duration;

/// A repeating task registry supplied by the host.
///
/// The tick callback is bound when the host builds its scheduler; the
/// animator only decides when the task is registered.
pub trait Scheduler {
    type Handle;

    /// Starts invoking the bound callback every `period`.
    fn schedule(&mut self, period: Duration) -> Result<Self::Handle, StageError>;

    /// Deregisters a task returned by [`Scheduler::schedule`].
    fn cancel(&mut self, handle: Self::Handle);
}

struct Running<H> {
    handle: H,
    since: Instant,
}

/// Idle/running switch that holds at most one scheduled task.
pub struct Animator<S: Scheduler> {
    scheduler: S,
    period: Duration,
    running: Option<Running<S::Handle>>,
}

impl<S: Scheduler> Animator<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_period(scheduler, TICK_PERIOD)
    }

    pub fn with_period(scheduler: S, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Registers the repeating task unless one is already active.
    ///
    /// Returns `Ok(false)` when already running.
    pub fn start(&mut self) -> Result<bool, StageError> {
        if self.running.is_some() {
            return Ok(false);
        }
        let handle = self.scheduler.schedule(self.period)?;
        self.running = Some(Running {
            handle,
            since: Instant::now(),
        });
        log::debug!("[animator] started, period={:?}", self.period);
        Ok(true)
    }

    /// Cancels the active task. Returns false when already idle.
    pub fn stop(&mut self) -> bool {
        match self.running.take() {
            Some(Running { handle, since }) => {
                self.scheduler.cancel(handle);
                log::debug!("[animator] stopped after {:?}", since.elapsed());
                true
            }
            None => false,
        }
    }
}
