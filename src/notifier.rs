use notify_rust::Notification;

pub const APP_NAME: &str = "F95 Notify";
pub const UNREAD_TITLE: &str = "New Notifications!";

/// Fire-and-forget desktop notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str);
}

/// Sends through the OS notification service. On freedesktop platforms the
/// tray badge is attached as the notification image.
#[derive(Debug, Default, Clone)]
pub struct DesktopNotifier {
    #[cfg(all(unix, not(target_os = "macos")))]
    badge: Option<notify_rust::Image>,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self {
            #[cfg(all(unix, not(target_os = "macos")))]
            badge: badge_image(),
        }
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn badge_image() -> Option<notify_rust::Image> {
    use crate::tray::icon::{render_badge, ICON_SIZE};

    let size = ICON_SIZE as i32;
    match notify_rust::Image::from_rgba(size, size, render_badge(ICON_SIZE)) {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!("Error building notification image: {}", e);
            None
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        let mut notification = Notification::new();
        notification.appname(APP_NAME).summary(title).body(body);

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            if let Some(badge) = &self.badge {
                notification.image_data(badge.clone());
            }
        }

        let result = notification.show();

        if let Err(e) = result {
            log::error!("Error sending notification: {}", e);
        }
    }
}

pub fn unread_body(count: u64) -> String {
    format!("You have {} unread notifications.", count)
}
