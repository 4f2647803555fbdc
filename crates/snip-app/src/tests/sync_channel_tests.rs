use std::time::Duration;

use snip_types::{AppEvent, CaptureRegion};
use tokio::time::timeout;

#[tokio::test]
async fn test_tokio_spawn_from_sync_context() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    // UI callbacks are sync closures that hand events off via tokio::spawn.
    let sync_callback = move || {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::TriggerSnip).await.expect("send failed");
        });
    };

    sync_callback();

    let result = timeout(Duration::from_secs(2), rx.recv()).await;

    match result {
        Ok(Ok(AppEvent::TriggerSnip)) => {}
        Ok(Ok(_)) => panic!("Wrong event type"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - tokio::spawn from sync context failed!"),
    }
}

#[tokio::test]
async fn test_overlay_release_with_tokio_spawn() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    let mouse_release = move || {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::RegionSelected(CaptureRegion {
                x: 100,
                y: 200,
                width: 300,
                height: 400,
            }))
            .await
            .expect("send failed");
        });
    };

    mouse_release();

    let result = timeout(Duration::from_secs(2), rx.recv()).await;

    match result {
        Ok(Ok(AppEvent::RegionSelected(CaptureRegion {
            x,
            y,
            width,
            height,
        }))) => {
            assert_eq!(x, 100);
            assert_eq!(y, 200);
            assert_eq!(width, 300);
            assert_eq!(height, 400);
        }
        Ok(Ok(_)) => panic!("Wrong event type"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - event never arrived!"),
    }
}

#[tokio::test]
async fn test_multiple_spawned_sends() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    for i in 0..100 {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::CopyText(format!("msg{}", i)))
                .await
                .expect("send failed");
        });
    }

    let mut count = 0;
    let result = timeout(Duration::from_secs(2), async {
        while count < 100 {
            rx.recv().await.expect("recv failed");
            count += 1;
        }
    })
    .await;

    assert!(result.is_ok(), "Timeout waiting for events!");
    assert_eq!(count, 100);
}
