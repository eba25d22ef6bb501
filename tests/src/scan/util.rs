use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use seedscan_common::network::candidate::CandidateList;
use seedscan_core::network::tcp::Prober;
use tokio::sync::Semaphore;

/// Every address answers after a short, address dependent delay.
pub struct AlwaysReachable;

#[async_trait]
impl Prober for AlwaysReachable {
    async fn probe(&self, addr: Ipv4Addr) -> bool {
        let jitter = u64::from(addr.octets()[3] % 7);
        tokio::time::sleep(Duration::from_micros(jitter * 50)).await;
        true
    }
}

/// Answers only for addresses in a fixed set and counts how often it was asked.
pub struct ReachableSet {
    reachable: HashSet<Ipv4Addr>,
    pub calls: Arc<AtomicUsize>,
}

impl ReachableSet {
    pub fn new(reachable: impl IntoIterator<Item = Ipv4Addr>) -> Self {
        Self {
            reachable: reachable.into_iter().collect(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl Prober for ReachableSet {
    async fn probe(&self, addr: Ipv4Addr) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.reachable.contains(&addr)
    }
}

/// Holds each probe until the test hands out a permit.
pub struct Gated {
    pub gate: Arc<Semaphore>,
}

impl Gated {
    pub fn closed() -> Self {
        Self {
            gate: Arc::new(Semaphore::new(0)),
        }
    }
}

#[async_trait]
impl Prober for Gated {
    async fn probe(&self, _addr: Ipv4Addr) -> bool {
        match self.gate.acquire().await {
            Ok(permit) => {
                permit.forget();
                true
            }
            Err(_) => false,
        }
    }
}

/// `count` distinct addresses in 10.0.0.0/16.
pub fn candidates(count: usize) -> CandidateList {
    (0..count)
        .map(|i| Ipv4Addr::new(10, 0, (i / 256) as u8, (i % 256) as u8))
        .collect()
}
