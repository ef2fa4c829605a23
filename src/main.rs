use sigmoid_explorer::application::client::{ExplorerClient, spawn_explorer};
use sigmoid_explorer::application::explorer::{Explorer, ExplorerView};
use sigmoid_explorer::application::loading::SharedBusyFlag;
use sigmoid_explorer::config::Config;
use sigmoid_explorer::infrastructure::ServiceFactory;
use sigmoid_explorer::infrastructure::logging::LogPanelWriter;
use sigmoid_explorer::interfaces::ExplorerApp;
use std::sync::Arc;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (panel_writer, log_rx) = LogPanelWriter::channel();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(panel_writer)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Starting Sigmoid Explorer {}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Mode={:?}, Backend={}",
        config.mode, config.api.base_url
    );

    let busy = Arc::new(SharedBusyFlag::new());

    // The runtime lives on its own thread; the UI owns the main thread.
    let (handle_tx, handle_rx) = crossbeam_channel::bounded(1);
    let runtime_config = config.clone();
    let runtime_busy = busy.clone();

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to build Tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(async move {
            let service = ServiceFactory::create_service(&runtime_config);
            let explorer = Explorer::new(service, runtime_busy);
            let _ = handle_tx.send(spawn_explorer(explorer));
            info!("Background runtime started.");

            std::future::pending::<()>().await;
        });
    });

    let (handle, event_rx) = handle_rx
        .recv()
        .map_err(|_| anyhow::anyhow!("Background runtime exited before it was ready"))?;

    let view = ExplorerView::new(handle.sequencers.clone());
    let client = ExplorerClient::new(handle, event_rx, Some(log_rx));
    let app = ExplorerApp::new(client, view, busy);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_title("Sigmoid Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Sigmoid Explorer",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
