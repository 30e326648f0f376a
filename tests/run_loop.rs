use std::error::Error;
use std::time::Duration;

use tempfile::tempdir;
use tokio::sync::mpsc;

use dirpoll::watch::{ChangeEvent, ChangeKind, DirectoryPoller, WatchSpec};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn run_emits_events_and_stops_on_shutdown() -> TestResult {
    let dir = tempdir()?;
    let spec = WatchSpec::new(dir.path(), false, Duration::from_millis(20));
    let mut poller = DirectoryPoller::new(spec)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);

    let handle = tokio::spawn(async move {
        poller
            .run(
                move |event: &ChangeEvent| {
                    let _ = event_tx.send(event.clone());
                },
                shutdown_rx,
            )
            .await
    });

    tokio::fs::write(dir.path().join("a.txt"), "hello").await?;

    let event = tokio::time::timeout(Duration::from_secs(5), event_rx.recv())
        .await?
        .ok_or("event channel closed before any event")?;
    assert_eq!(event, ChangeEvent::new(ChangeKind::Created, "a.txt"));

    shutdown_tx.send(()).await?;
    tokio::time::timeout(Duration::from_secs(5), handle).await???;
    Ok(())
}

#[tokio::test]
async fn run_stops_when_shutdown_channel_closes() -> TestResult {
    let dir = tempdir()?;
    let spec = WatchSpec::new(dir.path(), false, Duration::from_millis(20));
    let mut poller = DirectoryPoller::new(spec)?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
    drop(shutdown_tx);

    // A closed channel counts as a shutdown request; the loop must not spin.
    tokio::time::timeout(
        Duration::from_secs(5),
        poller.run(|_| {}, shutdown_rx),
    )
    .await??;
    Ok(())
}
