use super::{handle_menu_event, wait_until_ready};
use crate::links::UrlOpener;
use crate::menu::router::EventRouter;
use crate::tray::icon;
use anyhow::{Context, Result};
use std::sync::{mpsc, Arc};
use tokio::sync::broadcast;
use tray_icon::menu::MenuEvent;
use tray_icon::{TrayIcon, TrayIconBuilder};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, PostQuitMessage, TranslateMessage, MSG,
};

/// The tray icon and its message pump share one thread; Win32 delivers tray
/// clicks only to the thread that created the icon. Returns once the icon
/// exists on that thread.
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

            pump_messages(&router, &shutdown_tx);
            drop(tray_icon);
        })?;

    wait_until_ready(ready_rx)
}

fn build_tray(opener: Arc<dyn UrlOpener>, tooltip: &str) -> Result<(TrayIcon, EventRouter)> {
    let (menu, router) = crate::menu::builder::build_menu(opener)?;
    let tray_icon = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip(tooltip)
        .with_icon(icon::create_icon()?)
        .build()
        .context("Failed to create tray icon")?;

    Ok((tray_icon, router))
}

fn pump_messages(router: &EventRouter, shutdown_tx: &broadcast::Sender<()>) {
    let menu_receiver = MenuEvent::receiver();
    let mut msg: MSG = unsafe { std::mem::zeroed() };

    while unsafe { GetMessageW(&mut msg, std::ptr::null_mut(), 0, 0) } > 0 {
        unsafe {
            TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        while let Ok(event) = menu_receiver.try_recv() {
            if handle_menu_event(&event.id.0, router, shutdown_tx) {
                unsafe { PostQuitMessage(0) };
            }
        }
    }
}
