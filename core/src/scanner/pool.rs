//! Fixed-size pool of probe workers.
//!
//! Workers are long-lived tokio tasks sharing one queue. The pool outlives
//! individual scans: each [`ProbeTask`] carries the job it reports into.

use std::net::Ipv4Addr;
use std::sync::Arc;

use seedscan_common::scanning::ProbeResult;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{error, trace};

use super::job::ScanJob;
use crate::network::tcp::Prober;

pub(crate) struct ProbeTask {
    pub(crate) addr: Ipv4Addr,
    pub(crate) job: Arc<ScanJob>,
}

type TaskQueue = Arc<Mutex<mpsc::UnboundedReceiver<ProbeTask>>>;

pub(crate) struct WorkerPool {
    prober: Arc<dyn Prober>,
    tx: Option<mpsc::UnboundedSender<ProbeTask>>,
    workers: Vec<JoinHandle<()>>,
    retired: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `size` workers on the current tokio runtime.
    pub(crate) fn new(size: usize, prober: Arc<dyn Prober>) -> Self {
        let mut pool = Self {
            prober,
            tx: None,
            workers: Vec::new(),
            retired: Vec::new(),
        };
        pool.spawn_workers(size);
        pool
    }

    pub(crate) fn size(&self) -> usize {
        self.workers.len()
    }

    /// Replaces the workers with `size` fresh ones.
    ///
    /// The old workers finish whatever is still queued for them and exit.
    pub(crate) fn resize(&mut self, size: usize) {
        trace!(from = self.size(), to = size, "resizing worker pool");
        self.tx = None;
        self.retired.append(&mut self.workers);
        self.retired.retain(|handle| !handle.is_finished());
        self.spawn_workers(size);
    }

    pub(crate) fn submit(&self, task: ProbeTask) {
        let Some(tx) = &self.tx else {
            Self::reject(task);
            return;
        };
        if let Err(mpsc::error::SendError(task)) = tx.send(task) {
            Self::reject(task);
        }
    }

    /// Closes the queue and hands back every worker handle for joining.
    pub(crate) fn close(&mut self) -> Vec<JoinHandle<()>> {
        self.tx = None;
        let mut handles = std::mem::take(&mut self.workers);
        handles.append(&mut self.retired);
        handles
    }

    fn spawn_workers(&mut self, size: usize) {
        let (tx, rx) = mpsc::unbounded_channel::<ProbeTask>();
        let queue: TaskQueue = Arc::new(Mutex::new(rx));

        self.workers = (0..size)
            .map(|id| tokio::spawn(worker(id, queue.clone(), self.prober.clone())))
            .collect();
        self.tx = Some(tx);
    }

    // Counts the address as unreachable so the job still reaches its total.
    fn reject(task: ProbeTask) {
        error!(addr = %task.addr, "worker pool is closed, probe dropped");
        task.job.record(ProbeResult {
            addr: task.addr,
            reachable: false,
        });
    }
}

async fn worker(id: usize, queue: TaskQueue, prober: Arc<dyn Prober>) {
    loop {
        let task = { queue.lock().await.recv().await };
        let Some(ProbeTask { addr, job }) = task else {
            break;
        };

        if job.is_stopped() {
            continue;
        }

        let stop = job.stop_token();
        tokio::select! {
            reachable = prober.probe(addr) => {
                job.record(ProbeResult { addr, reachable });
            }
            _ = stop.cancelled() => {
                trace!(worker = id, %addr, "probe abandoned");
            }
        }
    }
    trace!(worker = id, "worker exiting");
}
