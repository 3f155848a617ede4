use anyhow::Result;
use f95_notify::client::PollClient;
use f95_notify::config::ConfigStore;
use f95_notify::links::SystemOpener;
use f95_notify::notifier::DesktopNotifier;
use f95_notify::poller::PollLoop;
use f95_notify::tray::{wait_for_quit, QuitReason, TrayController};
use f95_notify::{logging, paths};
use std::sync::Arc;
use tokio::sync::broadcast;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = paths::config_path();
    let log_path = config_path.as_deref().ok().map(paths::log_path_beside);
    logging::init(log_path.as_deref());

    log::info!("Starting F95 Notify v{}...", env!("CARGO_PKG_VERSION"));
    if log_path.is_none() {
        log::warn!("Could not resolve a log file location, logging to stdout only");
    }

    let config_path = match config_path {
        Ok(path) => path,
        Err(e) => fail(e, 2),
    };

    let store = ConfigStore::new(config_path);
    let credentials = match store.load() {
        Ok(credentials) => Arc::new(credentials),
        Err(e) => {
            let code = e.exit_code();
            fail(e, code)
        }
    };
    log::info!("Loaded credentials from {}", store.path().display());

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

    let poller = PollLoop::new(PollClient::new()?, credentials, Arc::new(DesktopNotifier::new()));
    tokio::spawn(poller.run());

    let tray = match TrayController::new(Arc::new(SystemOpener), shutdown_tx) {
        Ok(tray) => tray,
        Err(e) => fail(e, 1),
    };

    let quit = tokio::spawn(async move {
        let reason = wait_for_quit(shutdown_rx).await;
        exit_with(reason);
    });

    log::info!("F95 Notify started successfully");

    tray.run_event_loop();
    quit.await?;
    Ok(())
}

/// Does not wait for an in-flight poll.
fn exit_with(reason: QuitReason) {
    match reason {
        QuitReason::Requested => log::info!("Cleaning up..."),
        QuitReason::TrayLost => log::error!("Tray stopped without a quit request, exiting"),
    }
    logging::flush();
    std::process::exit(reason.exit_code());
}

fn fail(error: impl std::fmt::Display, code: i32) -> ! {
    log::error!("{}", error);
    logging::flush();
    std::process::exit(code);
}
