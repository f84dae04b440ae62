//! Fan-out of independent alignments over a fixed pool of worker threads.
//!
//! Alignments share no state, so each worker owns its own [`Aligner`] and the
//! pool only moves raw sequences in and results out.

use std::num::NonZeroUsize;
use std::thread;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{debug, info};

use crate::{Aligner, AlignerError, AlignmentResult, Result, ScoringConfig};

struct WorkItem {
    index: usize,
    seq1: String,
    seq2: String,
}

struct WorkResult {
    worker: usize,
    index: usize,
    result: Result<AlignmentResult>,
}

/// Pool of alignment workers. Dropping it closes the queues and joins the
/// threads.
pub struct BatchAligner {
    config: ScoringConfig,
    work_queues: Vec<Sender<WorkItem>>,
    result_rx: Receiver<WorkResult>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl BatchAligner {
    /// Spawns `workers` threads; `0` means one per available CPU.
    pub fn new(workers: usize, config: ScoringConfig) -> Result<Self> {
        let count = if workers == 0 {
            thread::available_parallelism().map_or(1, NonZeroUsize::get)
        } else {
            workers
        };

        let (result_tx, result_rx) = unbounded();
        let mut work_queues = Vec::with_capacity(count);
        let mut handles = Vec::with_capacity(count);

        for worker in 0..count {
            let (work_tx, work_rx) = bounded(1);
            let result_tx = result_tx.clone();
            let aligner = Aligner::new(config);

            let handle = thread::Builder::new()
                .name(format!("nw-align-{worker}"))
                .spawn(move || Self::align_worker(worker, aligner, work_rx, result_tx))
                .map_err(|e| AlignerError::Worker(e.to_string()))?;

            work_queues.push(work_tx);
            handles.push(handle);
        }

        info!("Started {count} alignment worker(s)");
        Ok(Self {
            config,
            work_queues,
            result_rx,
            workers: handles,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers.len()
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn align_worker(
        worker: usize,
        aligner: Aligner,
        work_rx: Receiver<WorkItem>,
        result_tx: Sender<WorkResult>,
    ) {
        while let Ok(work) = work_rx.recv() {
            let result = aligner.align(&work.seq1, &work.seq2);
            if result_tx
                .send(WorkResult {
                    worker,
                    index: work.index,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
        debug!("Alignment worker {worker} exiting");
    }

    /// Aligns every pair and returns the per-pair outcomes in input order.
    ///
    /// A pair failing validation yields an `Err` in its slot without stopping
    /// the batch. The outer error is reserved for a worker that went away.
    pub fn align_parallel<I, A, B>(&mut self, pairs: I) -> Result<Vec<Result<AlignmentResult>>>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        let mut work_items = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (seq1, seq2))| WorkItem {
                index,
                seq1: seq1.into(),
                seq2: seq2.into(),
            });
        let mut results: Vec<Option<Result<AlignmentResult>>> = Vec::new();
        let mut active_work = 0;

        // Initial distribution of work
        for worker in 0..self.work_queues.len() {
            match work_items.next() {
                Some(item) => {
                    self.dispatch(worker, item)?;
                    active_work += 1;
                }
                None => break,
            }
        }

        while active_work > 0 {
            let done = self
                .result_rx
                .recv()
                .map_err(|e| AlignerError::Worker(e.to_string()))?;
            active_work -= 1;

            if results.len() <= done.index {
                results.resize_with(done.index + 1, || None);
            }
            results[done.index] = Some(done.result);

            // Refill the worker that just finished
            if let Some(item) = work_items.next() {
                self.dispatch(done.worker, item)?;
                active_work += 1;
            }
        }

        debug!("Batch of {} alignment(s) finished", results.len());
        results
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| AlignerError::Worker(format!("no result for pair {index}")))
            })
            .collect()
    }

    fn dispatch(&self, worker: usize, item: WorkItem) -> Result<()> {
        self.work_queues[worker]
            .send(item)
            .map_err(|e| AlignerError::Worker(e.to_string()))
    }
}

impl Drop for BatchAligner {
    fn drop(&mut self) {
        // Close work channels to stop workers
        self.work_queues.clear();

        while let Some(worker) = self.workers.pop() {
            let _ = worker.join();
        }
    }
}
