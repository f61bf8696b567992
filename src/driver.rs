//! Search driver thread.
//!
//! The driver owns the driving loop: it polls the gate for a pending
//! configuration, builds a fresh problem + engine for each one, and runs
//! the search to a terminal state before looking again. Configuration
//! submissions arrive from any other thread through the shared gate.
//!
//! There is no cancellation: a running search always reaches a terminal
//! outcome before the next configuration is picked up, and `shutdown`
//! waits for an in-flight search to finish.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::events::EventSink;
use crate::gate::{ConfigRequest, SearchGate};
use crate::search::{MazeProblem, SearchConfig, SearchEngine};

/// Handle to the background search worker.
pub struct SearchDriver {
    gate: Arc<SearchGate>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SearchDriver {
    /// Spawn the worker thread.
    ///
    /// Every search started by this driver uses `config.start` as its
    /// initial state and emits events into `sink`.
    pub fn spawn<S: EventSink + 'static>(config: SearchConfig, sink: S) -> Self {
        Self::spawn_with_gate(config, Arc::new(SearchGate::new()), sink)
    }

    /// Spawn the worker thread against an existing gate.
    ///
    /// Lets a transport callback hold the gate before the worker starts;
    /// configurations submitted beforehand are picked up on the first
    /// poll.
    pub fn spawn_with_gate<S: EventSink + 'static>(
        config: SearchConfig,
        gate: Arc<SearchGate>,
        sink: S,
    ) -> Self {
        let running = Arc::new(AtomicBool::new(true));

        let handle = {
            let gate = Arc::clone(&gate);
            let running = Arc::clone(&running);
            thread::Builder::new()
                .name("search-driver".into())
                .spawn(move || run_loop(config, gate, running, sink))
                .expect("Failed to spawn search driver thread")
        };

        Self {
            gate,
            running,
            handle: Some(handle),
        }
    }

    /// The shared gate, for wiring `submit` to a transport callback.
    #[must_use]
    pub fn gate(&self) -> Arc<SearchGate> {
        Arc::clone(&self.gate)
    }

    /// Submit a configuration request (see `SearchGate::submit`).
    pub fn submit(&self, request: ConfigRequest) {
        self.gate.submit(request);
    }

    /// Whether a search is currently in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Stop the worker and wait for it to exit.
    ///
    /// An in-flight search runs to its terminal state first.
    pub fn shutdown(mut self) -> thread::Result<()> {
        self.running.store(false, Ordering::Release);
        match self.handle.take() {
            Some(handle) => handle.join(),
            None => Ok(()),
        }
    }
}

impl Drop for SearchDriver {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// The driving loop (one iteration per poll interval while idle).
fn run_loop<S: EventSink>(
    config: SearchConfig,
    gate: Arc<SearchGate>,
    running: Arc<AtomicBool>,
    mut sink: S,
) {
    log::info!("Search driver starting (start state {})", config.start);

    while running.load(Ordering::Acquire) {
        let Some(pending) = gate.try_claim() else {
            thread::sleep(config.poll_interval);
            continue;
        };

        match MazeProblem::new(config.start, pending.goal, pending.maze) {
            Ok(problem) => {
                log::info!("Starting search toward {}", pending.goal);
                let mut engine = SearchEngine::new(problem, config.clone());
                engine.run(&mut sink);
            }
            Err(e) => {
                log::warn!("Dropping unusable configuration: {}", e);
            }
        }

        gate.finish();
    }

    log::info!("Search driver stopped");
}
