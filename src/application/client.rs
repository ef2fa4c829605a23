use crate::application::explorer::{CurveOutcome, DemoOutcome, Explorer, Sequencers};
use crate::domain::curve::{CurveRequest, SavedParameters};
use crate::domain::errors::ServiceError;
use anyhow::Result;
use crossbeam_channel::Receiver;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Requests sent from the presentation thread to the runtime.
#[derive(Debug, Clone)]
pub enum ExplorerCommand {
    Calculate(CurveRequest),
    LoadDemo,
    LoadSaved(u64),
    RefreshHistory,
}

/// Results delivered back to the presentation thread.
#[derive(Debug, Clone)]
pub enum ExplorerEvent {
    Curve(CurveOutcome),
    Demo(DemoOutcome),
    History(Result<Vec<SavedParameters>, ServiceError>),
    Log(String),
}

/// Runtime side: owns the command receiver, lives inside the tokio runtime.
pub struct ExplorerHandle {
    pub command_tx: mpsc::Sender<ExplorerCommand>,
    pub sequencers: Arc<Sequencers>,
}

/// Starts the command loop on the current runtime.
///
/// Each command runs on its own task, so a second click does not wait for the first
/// request; the view sorts out which response is current.
pub fn spawn_explorer(explorer: Explorer) -> (ExplorerHandle, Receiver<ExplorerEvent>) {
    let (command_tx, mut command_rx) = mpsc::channel::<ExplorerCommand>(32);
    let (event_tx, event_rx) = crossbeam_channel::unbounded();
    let sequencers = explorer.sequencers();
    let explorer = Arc::new(explorer);

    tokio::spawn(async move {
        info!("Explorer command loop started");
        while let Some(command) = command_rx.recv().await {
            debug!(?command, "Dispatching command");
            let explorer = explorer.clone();
            let event_tx = event_tx.clone();
            tokio::spawn(async move {
                let event = run_command(&explorer, command).await;
                let _ = event_tx.send(event);
            });
        }
        info!("Explorer command loop stopped");
    });

    (
        ExplorerHandle {
            command_tx,
            sequencers,
        },
        event_rx,
    )
}

async fn run_command(explorer: &Explorer, command: ExplorerCommand) -> ExplorerEvent {
    match command {
        ExplorerCommand::Calculate(request) => {
            ExplorerEvent::Curve(explorer.calculate_sigmoid(request).await)
        }
        ExplorerCommand::LoadDemo => ExplorerEvent::Demo(explorer.load_demo().await),
        ExplorerCommand::LoadSaved(id) => ExplorerEvent::Curve(explorer.load_saved_curve(id).await),
        ExplorerCommand::RefreshHistory => ExplorerEvent::History(explorer.saved_parameters().await),
    }
}

/// Presentation side of the channels.
/// Abstracts away channel management so the UI only sends commands and polls events.
pub struct ExplorerClient {
    command_tx: mpsc::Sender<ExplorerCommand>,
    event_rx: Receiver<ExplorerEvent>,
    log_rx: Option<Receiver<String>>,
}

impl ExplorerClient {
    pub fn new(
        handle: ExplorerHandle,
        event_rx: Receiver<ExplorerEvent>,
        log_rx: Option<Receiver<String>>,
    ) -> Self {
        Self {
            command_tx: handle.command_tx,
            event_rx,
            log_rx,
        }
    }

    /// Non-blocking. Service results take priority over log lines.
    pub fn poll_next(&mut self) -> Option<ExplorerEvent> {
        if let Ok(event) = self.event_rx.try_recv() {
            return Some(event);
        }

        if let Some(log_rx) = &self.log_rx
            && let Ok(line) = log_rx.try_recv()
        {
            return Some(ExplorerEvent::Log(line));
        }

        None
    }

    pub fn send(&self, command: ExplorerCommand) -> Result<()> {
        self.command_tx
            .try_send(command)
            .map_err(|e| anyhow::anyhow!("Failed to send explorer command: {}", e))
    }
}

