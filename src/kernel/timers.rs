//! Wall-clock timers for reversible abilities.
//!
//! Timers run on the tokio runtime and report back over a channel; the session applies them
//! from `tick()`, so session state is only ever touched by its owner.

use crate::kernel::editor::syntax::SyntaxSupport;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMessage {
    RestoreSyntax { generation: u64 },
}

/// The language-support entry a disable-syntax removed, and where it sat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestorePoint {
    pub index: usize,
    pub syntax: SyntaxSupport,
}

#[derive(Debug)]
struct PendingRestore {
    generation: u64,
    point: RestorePoint,
    task: JoinHandle<()>,
}

/// At most one pending syntax restore; scheduling a new one supersedes the old.
#[derive(Debug)]
pub struct EffectTimers {
    handle: Handle,
    tx: Sender<TimerMessage>,
    rx: Receiver<TimerMessage>,
    generation: u64,
    pending: Option<PendingRestore>,
}

impl EffectTimers {
    pub fn new(handle: Handle) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            handle,
            tx,
            rx,
            generation: 0,
            pending: None,
        }
    }

    pub fn has_pending_restore(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_point(&self) -> Option<RestorePoint> {
        self.pending.as_ref().map(|pending| pending.point)
    }

    pub fn schedule_restore(&mut self, delay: Duration, point: RestorePoint) -> u64 {
        self.cancel_restore();
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let tx = self.tx.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(TimerMessage::RestoreSyntax { generation });
        });
        tracing::debug!(
            generation,
            delay_ms = delay.as_millis() as u64,
            "syntax restore scheduled"
        );
        self.pending = Some(PendingRestore {
            generation,
            point,
            task,
        });
        generation
    }

    pub fn cancel_restore(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
            tracing::debug!(generation = pending.generation, "syntax restore superseded");
        }
    }

    /// Restores that fired and were not superseded meanwhile.
    pub fn drain_due(&mut self) -> Vec<RestorePoint> {
        let mut due = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(TimerMessage::RestoreSyntax { generation }) => {
                    let current = self
                        .pending
                        .as_ref()
                        .is_some_and(|pending| pending.generation == generation);
                    if !current {
                        tracing::debug!(generation, "dropping stale syntax restore");
                        continue;
                    }
                    if let Some(pending) = self.pending.take() {
                        due.push(pending.point);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        due
    }
}

impl Drop for EffectTimers {
    fn drop(&mut self) {
        self.cancel_restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/timers.rs"]
mod tests;
