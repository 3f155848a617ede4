use super::{handle_menu_event, wait_until_ready};
use crate::links::UrlOpener;
use crate::menu::router::EventRouter;
use crate::tray::icon;
use anyhow::{Context, Result};
use gtk::{self, glib};
use std::sync::{mpsc, Arc};
use tokio::sync::broadcast;
use tray_icon::menu::{MenuEvent, MenuEventReceiver};
use tray_icon::{TrayIcon, TrayIconBuilder};

/// Spawns the GTK thread and returns once the tray icon exists on it.
pub fn create_tray(
    opener: Arc<dyn UrlOpener>,
    shutdown_tx: broadcast::Sender<()>,
    tooltip: String,
) -> Result<()> {
    let (ready_tx, ready_rx) = mpsc::sync_channel(1);

    std::thread::Builder::new()
        .name("tray".into())
        .spawn(move || {
            let (tray_icon, router) = match build_tray(opener, &tooltip) {
                Ok(built) => built,
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };
            let _ = ready_tx.send(Ok(()));

            setup_event_loop(router, shutdown_tx);
            gtk::main();
            drop(tray_icon);
        })?;

    wait_until_ready(ready_rx)
}

fn build_tray(opener: Arc<dyn UrlOpener>, tooltip: &str) -> Result<(TrayIcon, EventRouter)> {
    gtk::init().context("Failed to initialize GTK")?;

    let (menu, router) = crate::menu::builder::build_menu(opener)?;
    let tray_icon = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip(tooltip)
        .with_icon(icon::create_icon()?)
        .build()
        .context("Failed to create tray icon")?;

    Ok((tray_icon, router))
}

fn setup_event_loop(router: EventRouter, shutdown_tx: broadcast::Sender<()>) {
    let menu_receiver = MenuEvent::receiver();

    glib::timeout_add_local(std::time::Duration::from_millis(100), move || {
        process_pending_events(menu_receiver, &router, &shutdown_tx)
    });
}

fn process_pending_events(
    receiver: &MenuEventReceiver,
    router: &EventRouter,
    shutdown_tx: &broadcast::Sender<()>,
) -> glib::ControlFlow {
    while let Ok(event) = receiver.try_recv() {
        if handle_menu_event(&event.id.0, router, shutdown_tx) {
            gtk::main_quit();
            return glib::ControlFlow::Break;
        }
    }
    glib::ControlFlow::Continue
}
