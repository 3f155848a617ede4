pub mod icon;
pub mod platform;

use crate::links::UrlOpener;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};

/// Why the shutdown channel stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitReason {
    /// The user picked Quit from the tray menu.
    Requested,
    /// The tray thread went away without a quit request.
    TrayLost,
}

impl QuitReason {
    pub fn exit_code(self) -> i32 {
        match self {
            QuitReason::Requested => 0,
            QuitReason::TrayLost => 1,
        }
    }
}

pub async fn wait_for_quit(mut shutdown_rx: broadcast::Receiver<()>) -> QuitReason {
    match shutdown_rx.recv().await {
        Ok(()) | Err(RecvError::Lagged(_)) => QuitReason::Requested,
        Err(RecvError::Closed) => QuitReason::TrayLost,
    }
}

pub fn tooltip() -> String {
    format!("F95-Notify v{}", env!("CARGO_PKG_VERSION"))
}

/// Owns the tray icon and its menu for the life of the process. Menu clicks
/// open the alert or repository page, or send on `shutdown_tx`.
pub struct TrayController {
    _tray: platform::PlatformTray,
}

impl TrayController {
    /// Fails when the tray icon could not be created, e.g. without a
    /// graphical session.
    pub fn new(opener: Arc<dyn UrlOpener>, shutdown_tx: broadcast::Sender<()>) -> Result<Self> {
        let tray = platform::create_tray(opener, shutdown_tx, tooltip())?;
        Ok(Self { _tray: tray })
    }

    /// Blocks the calling thread in the native event loop where the platform
    /// requires it (macOS). Elsewhere the loop already runs on its own thread.
    pub fn run_event_loop(&self) {
        #[cfg(target_os = "macos")]
        tokio::task::block_in_place(platform::run_event_loop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_carries_version() {
        let tooltip = tooltip();
        assert!(tooltip.starts_with("F95-Notify v"));
        assert!(tooltip.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn quit_request_exits_with_success() {
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        shutdown_tx.send(()).unwrap();

        let reason = wait_for_quit(shutdown_rx).await;

        assert_eq!(reason, QuitReason::Requested);
        assert_eq!(reason.exit_code(), 0);
    }

    #[tokio::test]
    async fn dropped_tray_sender_is_not_a_quit() {
        // Arrange
        let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
        let tray_thread = std::thread::spawn(move || drop(shutdown_tx));
        tray_thread.join().unwrap();

        // Act
        let reason = wait_for_quit(shutdown_rx).await;

        // Assert
        assert_eq!(reason, QuitReason::TrayLost);
        assert_ne!(reason.exit_code(), 0);
    }
}
