//! Periodic task tests on a paused tokio clock.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use fiber_state::{RealTimeClock, every};
use tokio::sync::mpsc;

#[tokio::test(start_paused = true)]
async fn ticks_immediately_then_every_period() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let _handle = every(Duration::from_secs(1), move || {
        seen.fetch_add(1, Ordering::SeqCst);
    })
    .expect("runtime available");

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_callbacks() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let handle = every(Duration::from_secs(1), move || {
        seen.fetch_add(1, Ordering::SeqCst);
    })
    .expect("runtime available");

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    let before = count.load(Ordering::SeqCst);
    drop(handle);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(count.load(Ordering::SeqCst), before);
}

#[tokio::test(start_paused = true)]
async fn cancel_marks_handle_inactive() {
    let mut handle = every(Duration::from_secs(1), || {}).expect("runtime available");
    assert!(handle.is_active());
    handle.cancel();
    assert!(!handle.is_active());
}

#[tokio::test(start_paused = true)]
async fn clock_reports_formatted_time() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let clock = RealTimeClock::start(Duration::from_secs(1), move |now| {
        let _ = tx.send(now);
    })
    .expect("runtime available");
    assert!(clock.is_running());

    let first = rx.recv().await.expect("first tick");
    assert_eq!(first.len(), 8);
    assert_eq!(first.as_bytes()[2], b':');
    assert_eq!(first.as_bytes()[5], b':');

    clock.stop();
    tokio::time::sleep(Duration::from_secs(5)).await;
    while let Ok(_late) = rx.try_recv() {}
    assert!(rx.recv().await.is_none());
}
