//! The central **coordinator** for reachability scans.
//!
//! A [`ScanCoordinator`] owns a fixed-size worker pool and runs at most one scan
//! at a time over it. Starting a scan enqueues one probe per candidate and hands
//! back a [`ScanHandle`]; the caller reads progress from the handle's stream,
//! awaits the [`ScanReport`], or cancels.
//!
//! **Concurrency Note:**
//! Workers report into a shared job whose reachable list, counter and event
//! sender sit behind one mutex. Results arriving after the job stopped are
//! dropped, so a cancelled scan never emits another event or a report.

use std::sync::Arc;

use parking_lot::Mutex;
use seedscan_common::error::ScanError;
use seedscan_common::network::candidate::CandidateList;
use seedscan_common::scanning::{ProbeResult, ScanProgress, ScanReport, ScanState};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::network::tcp::Prober;

mod job;
mod pool;

use job::ScanJob;
use pool::{ProbeTask, WorkerPool};

pub struct ScanCoordinator {
    prober: Arc<dyn Prober>,
    pool: Mutex<WorkerPool>,
    active: Mutex<Option<Arc<ScanJob>>>,
}

impl ScanCoordinator {
    /// Creates a coordinator with a pool of `concurrency` workers.
    ///
    /// Must be called from within a tokio runtime; the workers are spawned on it.
    pub fn new(prober: impl Prober + 'static, concurrency: usize) -> Result<Self, ScanError> {
        if concurrency == 0 {
            return Err(ScanError::InvalidConcurrency);
        }
        let prober: Arc<dyn Prober> = Arc::new(prober);
        let pool = WorkerPool::new(concurrency, prober.clone());

        Ok(Self {
            prober,
            pool: Mutex::new(pool),
            active: Mutex::new(None),
        })
    }

    #[cfg(test)]
    fn concurrency(&self) -> usize {
        self.pool.lock().size()
    }

    /// State of the most recent scan, `Idle` before the first one.
    pub fn state(&self) -> ScanState {
        self.active
            .lock()
            .as_ref()
            .map_or(ScanState::Idle, |job| job.state())
    }

    /// Quick check of the first candidate only.
    pub async fn probe_one(&self, candidates: &CandidateList) -> Result<ProbeResult, ScanError> {
        let addr = candidates.first().ok_or(ScanError::NoCandidates)?;
        let reachable = self.prober.probe(addr).await;
        debug!(%addr, reachable, "single probe finished");
        Ok(ProbeResult { addr, reachable })
    }

    /// Starts probing every candidate with `concurrency` parallel workers.
    ///
    /// The pool is rebuilt when `concurrency` differs from its current size.
    /// Fails with [`ScanError::ScanAlreadyInProgress`] while another scan is running;
    /// that scan is left untouched.
    pub fn start_scan(
        &self,
        candidates: CandidateList,
        concurrency: usize,
    ) -> Result<ScanHandle, ScanError> {
        if concurrency == 0 {
            return Err(ScanError::InvalidConcurrency);
        }

        let mut active = self.active.lock();
        if active
            .as_ref()
            .is_some_and(|job| job.state() == ScanState::Running)
        {
            return Err(ScanError::ScanAlreadyInProgress);
        }

        let (progress_tx, progress_rx) = mpsc::unbounded_channel();
        let (report_tx, report_rx) = oneshot::channel();
        let job = Arc::new(ScanJob::new(
            candidates.len(),
            candidates.seed().map(str::to_owned),
            progress_tx,
            report_tx,
        ));
        *active = Some(job.clone());

        info!(
            total = candidates.len(),
            concurrency,
            "starting scan"
        );

        let mut pool = self.pool.lock();
        if pool.size() != concurrency {
            pool.resize(concurrency);
        }
        for addr in candidates {
            pool.submit(ProbeTask {
                addr,
                job: job.clone(),
            });
        }

        Ok(ScanHandle {
            job,
            progress: Some(progress_rx),
            report: Some(report_rx),
        })
    }

    /// Cancels the running scan, if any. Returns whether a scan was cancelled.
    pub fn cancel(&self) -> bool {
        self.active.lock().as_ref().is_some_and(|job| job.cancel())
    }

    /// Cancels any running scan, closes the queue and waits for every worker to exit.
    pub async fn shutdown(self) {
        self.cancel();
        let handles = self.pool.lock().close();
        for handle in handles {
            let _ = handle.await;
        }
        debug!("scan coordinator shut down");
    }
}

impl Drop for ScanCoordinator {
    fn drop(&mut self) {
        if let Some(job) = self.active.get_mut().take() {
            job.cancel();
        }
        // Dropping the pool closes its queue; workers drain it and exit.
    }
}

/// Caller side of a running scan.
pub struct ScanHandle {
    job: Arc<ScanJob>,
    progress: Option<mpsc::UnboundedReceiver<ScanProgress>>,
    report: Option<oneshot::Receiver<ScanReport>>,
}

impl ScanHandle {
    /// Takes the progress stream. Only the first call returns it.
    ///
    /// The stream ends when the scan completes or is cancelled.
    pub fn subscribe(&mut self) -> Option<mpsc::UnboundedReceiver<ScanProgress>> {
        self.progress.take()
    }

    /// A cloneable handle that can cancel this scan from elsewhere.
    pub fn canceller(&self) -> ScanCanceller {
        ScanCanceller {
            job: self.job.clone(),
        }
    }

    pub fn cancel(&self) -> bool {
        self.job.cancel()
    }

    pub fn state(&self) -> ScanState {
        self.job.state()
    }

    pub fn total(&self) -> usize {
        self.job.total()
    }

    pub fn completed(&self) -> usize {
        self.job.completed()
    }

    /// Resolves once the scan stopped, whether completed or cancelled.
    pub async fn stopped(&self) {
        self.job.stop_token().cancelled().await;
    }

    /// Waits for the final report. `None` when the scan was cancelled.
    pub async fn report(&mut self) -> Option<ScanReport> {
        self.report.take()?.await.ok()
    }
}

#[derive(Clone)]
pub struct ScanCanceller {
    job: Arc<ScanJob>,
}

impl ScanCanceller {
    pub fn cancel(&self) -> bool {
        self.job.cancel()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
