use crate::links::{self, UrlOpener};
use anyhow::Result;
use std::sync::Arc;

/// The closed set of things a tray menu click can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    ViewNotifications,
    VisitRepository,
    Quit,
}

impl TrayAction {
    pub const ALL: [TrayAction; 3] = [
        TrayAction::ViewNotifications,
        TrayAction::VisitRepository,
        TrayAction::Quit,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TrayAction::ViewNotifications => "view_notifications",
            TrayAction::VisitRepository => "visit_github",
            TrayAction::Quit => "__quit__",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrayAction::ViewNotifications => "View Notifications",
            TrayAction::VisitRepository => "Visit Github",
            TrayAction::Quit => "Quit",
        }
    }

    pub fn from_id(event_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == event_id)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum HandlerResult {
    Continue,
    Quit,
}

pub struct EventRouter {
    opener: Arc<dyn UrlOpener>,
}

impl EventRouter {
    pub fn new(opener: Arc<dyn UrlOpener>) -> Self {
        Self { opener }
    }

    pub fn route(&self, event_id: &str) -> Result<HandlerResult> {
        match TrayAction::from_id(event_id) {
            Some(action) => self.dispatch(action),
            None => {
                log::warn!("No route found for event: {}", event_id);
                Ok(HandlerResult::Continue)
            }
        }
    }

    pub fn dispatch(&self, action: TrayAction) -> Result<HandlerResult> {
        match action {
            TrayAction::ViewNotifications => {
                self.opener.open(links::ALERTS_PAGE)?;
                Ok(HandlerResult::Continue)
            }
            TrayAction::VisitRepository => {
                self.opener.open(links::REPOSITORY_PAGE)?;
                Ok(HandlerResult::Continue)
            }
            TrayAction::Quit => {
                log::info!("Quit menu item clicked");
                Ok(HandlerResult::Quit)
            }
        }
    }
}
