//! Background import worker

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use address_groups::config::ImportSettings;
use address_groups::import::{CalamineParser, ImportEvent, ImportWorker, ImportedRow};

use super::common::write_file;

async fn wait_for_events(worker: &mut ImportWorker, count: usize) -> Vec<ImportEvent> {
    let mut events = Vec::new();
    for _ in 0..200 {
        events.extend(worker.poll());
        if events.len() >= count {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    events
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_submit_delivers_one_batch_per_file() {
    let (_dir, path) = write_file("list.txt", b"a1,10\na2");
    let notified = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notified);

    let mut worker = ImportWorker::new(
        Handle::current(),
        ImportSettings::default(),
        Arc::new(CalamineParser),
    )
    .with_notify(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let ticket = worker.submit(path, 7);
    assert_eq!(worker.in_flight(), 1);

    let events = wait_for_events(&mut worker, 1).await;
    assert_eq!(events.len(), 1);
    assert_eq!(worker.in_flight(), 0);

    match &events[0] {
        ImportEvent::Completed {
            ticket: got,
            session,
            file_name,
            batch,
        } => {
            assert_eq!(*got, ticket);
            assert_eq!(*session, 7);
            assert_eq!(file_name, "list.txt");
            assert_eq!(
                batch.rows,
                vec![ImportedRow::new("a1", "10"), ImportedRow::new("a2", "")]
            );
        }
        other => panic!("unexpected event {:?}", other),
    }

    // The wake-up runs right after the send
    for _ in 0..200 {
        if notified.load(Ordering::SeqCst) == 1 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(notified.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failures_are_reported_not_dropped() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut worker = ImportWorker::new(
        Handle::current(),
        ImportSettings::default(),
        Arc::new(CalamineParser),
    );

    let ticket = worker.submit(dir.path().join("missing.txt"), 1);
    let events = wait_for_events(&mut worker, 1).await;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].ticket(), ticket);
    assert!(matches!(events[0], ImportEvent::Failed { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_overlapping_submissions_both_complete() {
    let (_dir_a, path_a) = write_file("a.txt", b"a1\na2");
    let (_dir_b, path_b) = write_file("b.txt", b"b1");
    let mut worker = ImportWorker::new(
        Handle::current(),
        ImportSettings::default(),
        Arc::new(CalamineParser),
    );

    let first = worker.submit(path_a, 1);
    let second = worker.submit(path_b, 1);
    assert_ne!(first, second);

    let mut events = wait_for_events(&mut worker, 2).await;
    events.sort_by_key(|e| e.ticket());

    let lens: Vec<usize> = events
        .iter()
        .map(|e| match e {
            ImportEvent::Completed { batch, .. } => batch.len(),
            ImportEvent::Failed { .. } => usize::MAX,
        })
        .collect();
    assert_eq!(lens, vec![2, 1]);
}
