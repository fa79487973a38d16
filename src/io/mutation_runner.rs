//! Background execution of page mutations.
//!
//! A mutation runs on a worker thread so the dialog can show its busy state;
//! the result comes back through a channel and is collected once per frame.

use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Shared progress flag, written by the worker when it finishes.
#[derive(Debug, Default)]
struct JobState {
    in_progress: bool,
}

/// Result of polling the runner.
#[derive(Debug)]
pub enum MutationResult {
    /// The running mutation finished
    Finished(anyhow::Result<()>),
    /// Nothing finished since the last poll
    None,
}

/// Runs one mutation at a time on a background thread.
pub struct MutationRunner {
    job_state: Arc<Mutex<JobState>>,
    receiver: Option<Receiver<anyhow::Result<()>>>,
    latency: Duration,
    ctx: Option<egui::Context>,
}

impl MutationRunner {
    /// Creates an idle runner. Each job sleeps for `latency` before running.
    pub fn new(latency: Duration) -> Self {
        Self {
            job_state: Arc::new(Mutex::new(JobState::default())),
            receiver: None,
            latency,
            ctx: None,
        }
    }

    /// Requests a repaint on `ctx` whenever a job finishes.
    pub fn with_context(mut self, ctx: egui::Context) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// Checks if a mutation is currently running.
    pub fn is_running(&self) -> bool {
        match self.job_state.lock() {
            Ok(state) => state.in_progress,
            Err(poisoned) => poisoned.into_inner().in_progress,
        }
    }

    /// Starts `job` on a worker thread.
    ///
    /// Call `check_completion()` once per frame to collect the result.
    pub fn start<F>(&mut self, job: F)
    where
        F: FnOnce() -> anyhow::Result<()> + Send + 'static,
    {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        if let Ok(mut state) = self.job_state.lock() {
            state.in_progress = true;
        }

        let job_state = Arc::clone(&self.job_state);
        let ctx = self.ctx.clone();
        let latency = self.latency;

        tracing::debug!(latency_ms = latency.as_millis() as u64, "mutation started");

        thread::spawn(move || {
            if !latency.is_zero() {
                thread::sleep(latency);
            }

            let result = job();
            let _ = sender.send(result);

            if let Ok(mut state) = job_state.lock() {
                state.in_progress = false;
            }

            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
    }

    /// Returns the finished mutation's result, if one arrived.
    pub fn check_completion(&mut self) -> MutationResult {
        let Some(receiver) = &self.receiver else {
            return MutationResult::None;
        };

        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                if let Err(err) = &result {
                    tracing::warn!(error = %format!("{err:#}"), "mutation finished with error");
                }
                MutationResult::Finished(result)
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => MutationResult::None,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.receiver = None;
                MutationResult::Finished(Err(anyhow::anyhow!("mutation worker exited early")))
            }
        }
    }
}

impl Default for MutationRunner {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
