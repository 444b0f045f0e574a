use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use reno_logging::{reno_info, reno_warn};

use crate::preview::PreviewStore;
use crate::{EngineEvent, FileId};

/// Tuning for the engine worker.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Fixed duration of the simulated chapter analysis.
    pub analysis_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_millis(1200),
        }
    }
}

enum EngineCommand {
    CreatePreview { file_id: FileId, path: PathBuf },
    RevokePreview { file_id: FileId },
    RevokeAll,
    BeginAnalysis,
}

/// Handle to the engine worker thread.
///
/// Commands go in over one channel, events come back over another. The
/// worker owns the preview store so all reference bookkeeping happens in a
/// single place and in command order.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let mut store = PreviewStore::new();
            while let Ok(command) = cmd_rx.recv() {
                handle_command(&mut store, &config, command, &event_tx);
            }
            // The shell is gone; release whatever is still outstanding.
            let leaked = store.revoke_all();
            if leaked > 0 {
                reno_warn!("engine shutdown released {leaked} outstanding previews");
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn create_preview(&self, file_id: FileId, path: PathBuf) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::CreatePreview { file_id, path });
    }

    pub fn revoke_preview(&self, file_id: FileId) {
        let _ = self.cmd_tx.send(EngineCommand::RevokePreview { file_id });
    }

    /// Teardown: release every outstanding preview reference.
    pub fn revoke_all(&self) {
        let _ = self.cmd_tx.send(EngineCommand::RevokeAll);
    }

    pub fn begin_analysis(&self) {
        let _ = self.cmd_tx.send(EngineCommand::BeginAnalysis);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

fn handle_command(
    store: &mut PreviewStore,
    config: &EngineConfig,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::CreatePreview { file_id, path } => {
            let reference = store.create(file_id, &path);
            reno_info!("preview created file_id={file_id} reference={reference}");
            let _ = event_tx.send(EngineEvent::PreviewCreated { file_id, reference });
        }
        EngineCommand::RevokePreview { file_id } => match store.revoke(file_id) {
            Some(reference) => {
                reno_info!("preview revoked file_id={file_id} reference={reference}");
                let _ = event_tx.send(EngineEvent::PreviewRevoked { file_id });
            }
            None => {
                reno_warn!("revoke for unknown preview file_id={file_id}");
            }
        },
        EngineCommand::RevokeAll => {
            let dropped = store.revoke_all();
            reno_info!("released all previews count={dropped}");
        }
        EngineCommand::BeginAnalysis => {
            // The simulated analysis never fails and cannot be cancelled.
            // A detached timer thread keeps the command loop responsive.
            let delay = config.analysis_delay;
            let event_tx = event_tx.clone();
            reno_info!("analysis started delay_ms={}", delay.as_millis());
            thread::spawn(move || {
                thread::sleep(delay);
                let _ = event_tx.send(EngineEvent::AnalysisComplete);
            });
        }
    }
}
