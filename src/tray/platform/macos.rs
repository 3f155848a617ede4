use super::handle_menu_event;
use crate::links::UrlOpener;
use crate::menu::router::EventRouter;
use crate::tray::icon;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::broadcast;
use tray_icon::menu::MenuEvent;
use tray_icon::{TrayIcon, TrayIconBuilder};

/// Must be called on the main thread, before `run_event_loop`.
pub fn create_tray(
    opener: Arc<dyn UrlOpener>,
    shutdown_tx: broadcast::Sender<()>,
    tooltip: String,
) -> Result<TrayIcon> {
    let (menu, router) = crate::menu::builder::build_menu(opener)?;

    let tray_icon = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip(tooltip)
        .with_icon(icon::create_icon()?)
        .build()?;

    spawn_menu_event_handler(router, shutdown_tx);

    Ok(tray_icon)
}

fn spawn_menu_event_handler(router: EventRouter, shutdown_tx: broadcast::Sender<()>) {
    let menu_receiver = MenuEvent::receiver();

    std::thread::spawn(move || {
        while let Ok(event) = menu_receiver.recv() {
            if handle_menu_event(&event.id.0, &router, &shutdown_tx) {
                break;
            }
        }
    });
}

/// Run the macOS event loop on the main thread. Never returns; the process
/// exits from the shutdown handler.
pub fn run_event_loop() {
    use objc2::rc::Retained;
    use objc2::runtime::AnyObject;
    use objc2::{class, msg_send};

    unsafe {
        let app: Retained<AnyObject> = msg_send![class!(NSApplication), sharedApplication];
        let _: () = msg_send![&app, run];
    }
}
