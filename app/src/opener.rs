use vitrine_scene::UrlOpener;

/// Hands the URL to the OS default browser.
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&mut self, url: &str) -> anyhow::Result<()> {
        open::that(url)?;
        Ok(())
    }
}
