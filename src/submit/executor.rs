use crate::submit::outcome::SubmitOutcome;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCompletion {
    pub run_id: u64,
    pub outcome: SubmitOutcome,
}

/// Runs submissions off the event loop and hands results back over a
/// channel, one completion per spawned job.
pub struct SubmitExecutor {
    completion_tx: Sender<SubmitCompletion>,
    completion_rx: Receiver<SubmitCompletion>,
    next_run_id: u64,
}

impl SubmitExecutor {
    pub fn new() -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<SubmitCompletion>();
        Self {
            completion_tx,
            completion_rx,
            next_run_id: 0,
        }
    }

    pub fn spawn<F>(&mut self, job: F) -> u64
    where
        F: FnOnce() -> SubmitOutcome + Send + 'static,
    {
        self.next_run_id += 1;
        let run_id = self.next_run_id;
        let mut guard = CompletionGuard {
            run_id,
            tx: Some(self.completion_tx.clone()),
        };

        std::thread::spawn(move || {
            let outcome = job();
            guard.complete(outcome);
        });
        run_id
    }

    pub fn drain_ready(&self) -> Vec<SubmitCompletion> {
        let mut out = Vec::<SubmitCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

impl Default for SubmitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends a `NetworkError` completion if the job unwinds before reporting.
struct CompletionGuard {
    run_id: u64,
    tx: Option<Sender<SubmitCompletion>>,
}

impl CompletionGuard {
    fn complete(&mut self, outcome: SubmitOutcome) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(SubmitCompletion {
                run_id: self.run_id,
                outcome,
            });
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if self.tx.is_some() {
            log::warn!("submission run {} ended without an outcome", self.run_id);
            self.complete(SubmitOutcome::NetworkError);
        }
    }
}
