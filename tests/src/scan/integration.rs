use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::atomic::Ordering;
use std::time::Duration;

use seedscan_common::error::ScanError;
use seedscan_common::network::candidate::CandidateList;
use seedscan_common::scanning::{ScanProgress, ScanState};
use seedscan_common::seed::{self, DEFAULT_SEED, LOCAL_SUPPLEMENT};
use seedscan_core::network::tcp::TcpProber;
use seedscan_core::scanner::ScanCoordinator;
use tokio::net::TcpListener;
use tokio::time::timeout;

use super::util::{self, AlwaysReachable, Gated, ReachableSet};

const DEADLINE: Duration = Duration::from_secs(10);

/// Many workers reporting into one job must neither lose nor duplicate results.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn stress_scan_counts_every_probe_once() {
    let coordinator = ScanCoordinator::new(AlwaysReachable, 16).unwrap();

    for trial in 0..5 {
        let mut handle = coordinator.start_scan(util::candidates(200), 16).unwrap();
        let mut progress = handle.subscribe().unwrap();

        let report = timeout(DEADLINE, handle.report())
            .await
            .expect("scan timed out")
            .expect("scan was cancelled");

        let mut events: Vec<ScanProgress> = Vec::new();
        while let Some(event) = progress.recv().await {
            events.push(event);
        }

        assert_eq!(report.total, 200, "trial {trial}");
        assert_eq!(report.reachable_count(), 200, "trial {trial}");
        let unique: HashSet<Ipv4Addr> = report.reachable.iter().copied().collect();
        assert_eq!(unique.len(), 200, "trial {trial}: duplicate reachable entries");

        assert_eq!(events.len(), 200, "trial {trial}");
        for (idx, event) in events.iter().enumerate() {
            assert_eq!(event.completed, idx + 1, "trial {trial}");
            assert_eq!(event.reachable_count, idx + 1, "trial {trial}");
        }
        let probed: HashSet<Ipv4Addr> = events.iter().map(|e| e.last.addr).collect();
        assert_eq!(probed.len(), 200, "trial {trial}: an address was probed twice");
    }

    timeout(DEADLINE, coordinator.shutdown()).await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn derived_scan_reports_the_answering_subset() {
    let candidates: CandidateList = seed::derive_default(DEFAULT_SEED).unwrap();
    assert_eq!(candidates.len(), 35);

    let answering: Vec<Ipv4Addr> = LOCAL_SUPPLEMENT.iter().step_by(3).collect();
    let prober = ReachableSet::new(answering.iter().copied());
    let calls = prober.calls.clone();
    let coordinator = ScanCoordinator::new(prober, 10).unwrap();

    let mut handle = coordinator.start_scan(candidates, 10).unwrap();
    let report = timeout(DEADLINE, handle.report()).await.unwrap().unwrap();

    let reachable: HashSet<Ipv4Addr> = report.reachable.iter().copied().collect();
    let expected: HashSet<Ipv4Addr> = answering.into_iter().collect();
    assert_eq!(reachable, expected);
    assert_eq!(report.total, 35);
    assert_eq!(report.seed.as_deref(), Some(DEFAULT_SEED));
    assert_eq!(calls.load(Ordering::SeqCst), 35);
    assert_eq!(coordinator.state(), ScanState::Completed);
}

#[tokio::test]
async fn only_one_scan_runs_at_a_time() {
    let prober = Gated::closed();
    let gate = prober.gate.clone();
    let coordinator = ScanCoordinator::new(prober, 3).unwrap();

    let mut first = coordinator.start_scan(util::candidates(6), 3).unwrap();
    for _ in 0..3 {
        assert_eq!(
            coordinator.start_scan(util::candidates(2), 3).err(),
            Some(ScanError::ScanAlreadyInProgress)
        );
    }
    assert_eq!(first.state(), ScanState::Running);

    gate.add_permits(6);
    let report = timeout(DEADLINE, first.report()).await.unwrap().unwrap();
    assert_eq!(report.total, 6);
    assert_eq!(report.reachable_count(), 6);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cancel_stops_events_and_frees_the_coordinator() {
    let prober = Gated::closed();
    let gate = prober.gate.clone();
    let coordinator = ScanCoordinator::new(prober, 4).unwrap();

    let mut handle = coordinator.start_scan(util::candidates(50), 4).unwrap();
    let mut progress = handle.subscribe().unwrap();

    gate.add_permits(5);
    for _ in 0..5 {
        timeout(DEADLINE, progress.recv()).await.unwrap().unwrap();
    }

    assert!(coordinator.cancel());
    assert!(!coordinator.cancel());
    timeout(DEADLINE, handle.stopped()).await.unwrap();
    assert_eq!(handle.state(), ScanState::Cancelled);

    assert!(timeout(DEADLINE, progress.recv()).await.unwrap().is_none());
    assert!(handle.report().await.is_none());
    assert_eq!(handle.completed(), 5);

    // Leftover queue entries of the cancelled scan must not eat these permits.
    let mut next = coordinator.start_scan(util::candidates(8), 4).unwrap();
    gate.add_permits(8);
    let report = timeout(DEADLINE, next.report()).await.unwrap().unwrap();
    assert_eq!(report.total, 8);
    assert_eq!(report.reachable_count(), 8);
}

#[tokio::test]
async fn dropping_the_coordinator_cancels_its_scan() {
    let coordinator = ScanCoordinator::new(Gated::closed(), 2).unwrap();
    let mut handle = coordinator.start_scan(util::candidates(4), 2).unwrap();

    drop(coordinator);

    timeout(DEADLINE, handle.stopped()).await.unwrap();
    assert_eq!(handle.state(), ScanState::Cancelled);
    assert!(handle.report().await.is_none());
}

#[tokio::test]
async fn tcp_scan_finds_local_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let candidates: CandidateList = [
        Ipv4Addr::new(127, 0, 0, 2),
        Ipv4Addr::LOCALHOST,
        Ipv4Addr::new(127, 0, 0, 3),
    ]
    .into_iter()
    .collect();

    let prober = TcpProber::new(port, Duration::from_millis(500));
    let coordinator = ScanCoordinator::new(prober, 3).unwrap();

    let single = coordinator.probe_one(&candidates).await.unwrap();
    assert_eq!(single.addr, Ipv4Addr::new(127, 0, 0, 2));
    assert!(!single.reachable);

    let mut handle = coordinator.start_scan(candidates, 3).unwrap();
    let report = timeout(DEADLINE, handle.report()).await.unwrap().unwrap();
    assert_eq!(report.reachable, vec![Ipv4Addr::LOCALHOST]);
    assert_eq!(report.total, 3);

    timeout(DEADLINE, coordinator.shutdown()).await.unwrap();
}
