#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub use macos::run_event_loop;

use crate::links::UrlOpener;
use crate::menu::router::{EventRouter, HandlerResult};
use anyhow::Result;
#[cfg(not(target_os = "macos"))]
use std::sync::mpsc;
use std::sync::Arc;
use tokio::sync::broadcast;

#[cfg(target_os = "macos")]
use tray_icon::TrayIcon;

pub enum PlatformTray {
    /// The tray lives on a dedicated UI thread.
    #[cfg(not(target_os = "macos"))]
    Detached,
    #[cfg(target_os = "macos")]
    Standard(TrayIcon),
}

#[cfg(target_os = "linux")]
pub fn create_tray(
    opener: Arc<dyn UrlOpener>,
    shutdown_tx: broadcast::Sender<()>,
    tooltip: String,
) -> Result<PlatformTray> {
    linux::create_tray(opener, shutdown_tx, tooltip)?;
    Ok(PlatformTray::Detached)
}

#[cfg(target_os = "windows")]
pub fn create_tray(
    opener: Arc<dyn UrlOpener>,
    shutdown_tx: broadcast::Sender<()>,
    tooltip: String,
) -> Result<PlatformTray> {
    windows::create_tray(opener, shutdown_tx, tooltip)?;
    Ok(PlatformTray::Detached)
}

#[cfg(target_os = "macos")]
pub fn create_tray(
    opener: Arc<dyn UrlOpener>,
    shutdown_tx: broadcast::Sender<()>,
    tooltip: String,
) -> Result<PlatformTray> {
    let tray = macos::create_tray(opener, shutdown_tx, tooltip)?;
    Ok(PlatformTray::Standard(tray))
}

/// Blocks until a tray thread reports that its icon exists, or why it could
/// not be built. A thread that dies without reporting counts as a failure.
#[cfg(not(target_os = "macos"))]
pub(crate) fn wait_until_ready(ready_rx: mpsc::Receiver<Result<()>>) -> Result<()> {
    ready_rx
        .recv()
        .map_err(|_| anyhow::anyhow!("Tray thread exited before the tray icon was created"))?
}

/// Routes one menu event. Returns true once the user asked to quit, after the
/// shutdown signal has been sent.
pub(crate) fn handle_menu_event(
    event_id: &str,
    router: &EventRouter,
    shutdown_tx: &broadcast::Sender<()>,
) -> bool {
    log::debug!("Menu event: {}", event_id);

    match router.route(event_id) {
        Ok(HandlerResult::Continue) => false,
        Ok(HandlerResult::Quit) => {
            log::info!("Quitting application");
            let _ = shutdown_tx.send(());
            true
        }
        Err(e) => {
            log::error!("Error handling menu event: {}", e);
            false
        }
    }
}
