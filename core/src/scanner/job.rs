//! Shared state of one scan.
//!
//! Workers report into a [`ScanJob`] concurrently. Everything they mutate sits
//! behind a single mutex, so appends to the reachable list, progress events and
//! the final report are serialized in the order probes finish.

use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use parking_lot::Mutex;
use seedscan_common::scanning::{ProbeResult, ScanProgress, ScanReport, ScanState};
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub(crate) struct ScanJob {
    total: usize,
    completed: AtomicUsize,
    started: Instant,
    seed: Option<String>,
    stop: CancellationToken,
    inner: Mutex<JobInner>,
}

struct JobInner {
    state: ScanState,
    reachable: Vec<Ipv4Addr>,
    progress_tx: Option<mpsc::UnboundedSender<ScanProgress>>,
    report_tx: Option<oneshot::Sender<ScanReport>>,
}

impl ScanJob {
    pub(crate) fn new(
        total: usize,
        seed: Option<String>,
        progress_tx: mpsc::UnboundedSender<ScanProgress>,
        report_tx: oneshot::Sender<ScanReport>,
    ) -> Self {
        let job = Self {
            total,
            completed: AtomicUsize::new(0),
            started: Instant::now(),
            seed,
            stop: CancellationToken::new(),
            inner: Mutex::new(JobInner {
                state: ScanState::Running,
                reachable: Vec::new(),
                progress_tx: Some(progress_tx),
                report_tx: Some(report_tx),
            }),
        };

        if total == 0 {
            let mut inner = job.inner.lock();
            job.finalize(&mut inner);
        }
        job
    }

    pub(crate) fn total(&self) -> usize {
        self.total
    }

    pub(crate) fn completed(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }

    pub(crate) fn state(&self) -> ScanState {
        self.inner.lock().state
    }

    /// True once the job is completed or cancelled; queued probes are skipped from then on.
    pub(crate) fn is_stopped(&self) -> bool {
        self.stop.is_cancelled()
    }

    pub(crate) fn stop_token(&self) -> CancellationToken {
        self.stop.clone()
    }

    /// Folds one probe outcome into the job. Ignored once the job left `Running`.
    pub(crate) fn record(&self, result: ProbeResult) {
        let mut inner = self.inner.lock();
        if inner.state != ScanState::Running {
            return;
        }

        let completed = self.completed.fetch_add(1, Ordering::AcqRel) + 1;
        if result.reachable {
            inner.reachable.push(result.addr);
        }

        let progress = ScanProgress {
            completed,
            total: self.total,
            reachable_count: inner.reachable.len(),
            last: result,
        };
        if let Some(tx) = &inner.progress_tx {
            // Nobody listening is fine; the report still arrives.
            let _ = tx.send(progress);
        }

        if completed >= self.total {
            self.finalize(&mut inner);
        }
    }

    /// Moves a running job to `Cancelled`. Returns `false` if it had already finished.
    pub(crate) fn cancel(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.state != ScanState::Running {
            return false;
        }

        inner.state = ScanState::Cancelled;
        inner.progress_tx = None;
        inner.report_tx = None;
        self.stop.cancel();
        debug!(
            completed = self.completed(),
            total = self.total,
            "scan cancelled"
        );
        true
    }

    fn finalize(&self, inner: &mut JobInner) {
        inner.state = ScanState::Completed;
        inner.progress_tx = None;

        let report = ScanReport {
            total: self.total,
            reachable: inner.reachable.clone(),
            elapsed: self.started.elapsed(),
            seed: self.seed.clone(),
        };
        debug!(
            total = report.total,
            reachable = report.reachable_count(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "scan completed"
        );

        if let Some(tx) = inner.report_tx.take() {
            let _ = tx.send(report);
        }
        self.stop.cancel();
    }
}
