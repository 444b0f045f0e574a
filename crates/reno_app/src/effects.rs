use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use reno_core::{Effect, Msg};
use reno_engine::{EngineConfig, EngineEvent, EngineHandle};
use reno_logging::{reno_debug, reno_info};

/// Bridges core effects to the engine and engine events back to messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(EngineConfig::default());
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CreatePreview { file_id, path } => {
                    reno_info!("CreatePreview file_id={} path={}", file_id, path.display());
                    self.engine.create_preview(file_id, path);
                }
                Effect::RevokePreview { file_id } => {
                    reno_info!("RevokePreview file_id={file_id}");
                    self.engine.revoke_preview(file_id);
                }
                Effect::StartAnalysis => {
                    reno_info!("StartAnalysis");
                    self.engine.begin_analysis();
                }
            }
        }
    }

    /// Teardown: every preview still outstanding is released exactly once.
    pub fn shutdown(&self) {
        self.engine.revoke_all();
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::PreviewCreated { file_id, reference } => {
                        Some(Msg::PreviewReady { file_id, reference })
                    }
                    EngineEvent::PreviewRevoked { file_id } => {
                        // Bookkeeping only; the row is already gone from state.
                        reno_debug!("preview revoked file_id={file_id}");
                        None
                    }
                    EngineEvent::AnalysisComplete => Some(Msg::AnalysisFinished),
                };
                if let Some(msg) = msg {
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}
