use anyhow::Result;

pub const ALERTS_PAGE: &str = "https://f95zone.to/account/alerts";
pub const REPOSITORY_PAGE: &str = "https://github.com/Official-Husko/f95-notify";

pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands the URL to the OS default handler without waiting on it.
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that_detached(url)?;
        Ok(())
    }
}
