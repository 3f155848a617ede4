pub mod alerts;
pub mod client;
pub mod config;
pub mod links;
pub mod logging;
pub mod menu;
pub mod notifier;
pub mod paths;
pub mod poller;
pub mod tray;
