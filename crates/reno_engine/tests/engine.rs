use std::path::PathBuf;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use reno_engine::{EngineConfig, EngineEvent, EngineHandle};

fn wait_for_event(engine: &EngineHandle, deadline: Duration) -> Option<EngineEvent> {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if let Some(event) = engine.try_recv() {
            return Some(event);
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    None
}

fn test_engine(analysis_delay: Duration) -> EngineHandle {
    reno_logging::initialize_for_tests();
    EngineHandle::new(EngineConfig { analysis_delay })
}

#[test]
fn preview_lifecycle_round_trips_through_the_worker() {
    let engine = test_engine(Duration::from_millis(50));

    engine.create_preview(1, PathBuf::from("/media/intro.mp4"));
    let created = wait_for_event(&engine, Duration::from_secs(2)).expect("created event");
    let reference = match created {
        EngineEvent::PreviewCreated { file_id, reference } => {
            assert_eq!(file_id, 1);
            reference
        }
        other => panic!("unexpected event {other:?}"),
    };
    assert!(reference.starts_with("preview://"));
    assert!(reference.ends_with("intro.mp4"));

    engine.revoke_preview(1);
    let revoked = wait_for_event(&engine, Duration::from_secs(2)).expect("revoked event");
    assert_eq!(revoked, EngineEvent::PreviewRevoked { file_id: 1 });
}

#[test]
fn double_revoke_emits_no_second_event() {
    let engine = test_engine(Duration::from_millis(50));

    engine.create_preview(1, PathBuf::from("/media/a.mp4"));
    let _ = wait_for_event(&engine, Duration::from_secs(2)).expect("created");
    engine.revoke_preview(1);
    let _ = wait_for_event(&engine, Duration::from_secs(2)).expect("revoked");

    // Revoke again, then create a second preview as a fence: the next event
    // observed must be the create, proving the stale revoke emitted nothing.
    engine.revoke_preview(1);
    engine.create_preview(2, PathBuf::from("/media/b.mp4"));
    let next = wait_for_event(&engine, Duration::from_secs(2)).expect("fence event");
    match next {
        EngineEvent::PreviewCreated { file_id, .. } => assert_eq!(file_id, 2),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn analysis_completes_after_the_configured_delay() {
    let engine = test_engine(Duration::from_millis(120));

    engine.begin_analysis();
    // The completion must not be observable before the timer elapses.
    assert_eq!(wait_for_event(&engine, Duration::from_millis(40)), None);

    let event = wait_for_event(&engine, Duration::from_secs(2)).expect("analysis event");
    assert_eq!(event, EngineEvent::AnalysisComplete);
}

#[test]
fn analysis_does_not_block_preview_commands() {
    let engine = test_engine(Duration::from_millis(200));

    engine.begin_analysis();
    engine.create_preview(1, PathBuf::from("/media/a.mp4"));

    // The preview event arrives while the analysis timer is still pending.
    let first = wait_for_event(&engine, Duration::from_millis(150)).expect("preview event");
    match first {
        EngineEvent::PreviewCreated { file_id, .. } => assert_eq!(file_id, 1),
        other => panic!("unexpected event {other:?}"),
    }

    let second = wait_for_event(&engine, Duration::from_secs(2)).expect("analysis event");
    assert_eq!(second, EngineEvent::AnalysisComplete);
}
