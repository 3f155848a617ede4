use super::router::{EventRouter, TrayAction};
use crate::links::UrlOpener;
use anyhow::Result;
use std::sync::Arc;
use tray_icon::menu::{Menu, MenuItem, PredefinedMenuItem};

pub fn build_menu(opener: Arc<dyn UrlOpener>) -> Result<(Menu, EventRouter)> {
    let menu = Menu::new();

    for action in [TrayAction::ViewNotifications, TrayAction::VisitRepository] {
        menu.append(&action_item(action))?;
    }
    menu.append(&PredefinedMenuItem::separator())?;
    menu.append(&action_item(TrayAction::Quit))?;

    Ok((menu, EventRouter::new(opener)))
}

fn action_item(action: TrayAction) -> MenuItem {
    MenuItem::with_id(action.id(), action.label(), true, None)
}
