use anyhow::{anyhow, Result};
use f95_notify::links::{UrlOpener, ALERTS_PAGE, REPOSITORY_PAGE};
use f95_notify::menu::router::{EventRouter, HandlerResult, TrayAction};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

struct FailingOpener;

impl UrlOpener for FailingOpener {
    fn open(&self, _url: &str) -> Result<()> {
        Err(anyhow!("no browser available"))
    }
}

fn recording_router() -> (Arc<RecordingOpener>, EventRouter) {
    let opener = Arc::new(RecordingOpener::default());
    let router = EventRouter::new(opener.clone());
    (opener, router)
}

#[test]
fn action_ids_round_trip_through_from_id() {
    for action in TrayAction::ALL {
        assert_eq!(TrayAction::from_id(action.id()), Some(action), "action: {:?}", action);
    }
}

#[test]
fn from_id_rejects_unknown_and_near_miss_ids() {
    let cases = ["", "quit", "__quit__now", "view_notification", "VISIT_GITHUB"];

    for id in cases {
        assert_eq!(TrayAction::from_id(id), None, "id: {:?}", id);
    }
}

#[test]
fn view_notifications_opens_alerts_page() {
    // Arrange
    let (opener, router) = recording_router();

    // Act
    let result = router.route(TrayAction::ViewNotifications.id()).unwrap();

    // Assert
    assert_eq!(result, HandlerResult::Continue);
    assert_eq!(*opener.opened.lock().unwrap(), vec![ALERTS_PAGE.to_string()]);
}

#[test]
fn visit_repository_opens_repository_page() {
    // Arrange
    let (opener, router) = recording_router();

    // Act
    let result = router.route(TrayAction::VisitRepository.id()).unwrap();

    // Assert
    assert_eq!(result, HandlerResult::Continue);
    assert_eq!(*opener.opened.lock().unwrap(), vec![REPOSITORY_PAGE.to_string()]);
}

#[test]
fn router_returns_quit_handler_result() {
    // Arrange
    let (opener, router) = recording_router();

    // Act
    let result = router.route(TrayAction::Quit.id()).unwrap();

    // Assert
    assert_eq!(result, HandlerResult::Quit);
    assert!(opener.opened.lock().unwrap().is_empty());
}

#[test]
fn router_returns_continue_when_no_route_matches() {
    // Arrange
    let (opener, router) = recording_router();

    // Act
    let result = router.route("unknown_event").unwrap();

    // Assert
    assert_eq!(result, HandlerResult::Continue);
    assert!(opener.opened.lock().unwrap().is_empty());
}

#[test]
fn open_failure_is_reported_as_error() {
    let router = EventRouter::new(Arc::new(FailingOpener));

    let result = router.route(TrayAction::ViewNotifications.id());

    assert!(result.is_err());
}

#[test]
fn quit_does_not_depend_on_the_opener() {
    let router = EventRouter::new(Arc::new(FailingOpener));

    let result = router.dispatch(TrayAction::Quit).unwrap();

    assert_eq!(result, HandlerResult::Quit);
}
