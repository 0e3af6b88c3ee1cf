use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for the client bundle to hydrate and render.
const RENDER_TIMEOUT: Duration = Duration::from_secs(20);

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((1280, 900)))
            .build()
            .map_err(|e| anyhow::anyhow!("launch options: {e}"))?;

        let browser = ChromeBrowser::new(options).context("launching chrome")?;
        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        tab.set_default_timeout(RENDER_TIMEOUT);
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .with_context(|| format!("navigating to {url}"))?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    /// Inner text of the first element matching `selector`.
    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self
            .tab
            .wait_for_element(selector)
            .with_context(|| format!("waiting for {selector}"))?;
        Ok(element.get_inner_text()?)
    }

    pub fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        element.type_into(text)?;
        Ok(())
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        self.tab.wait_for_element(selector)?.click()?;
        Ok(())
    }

    /// Read a localStorage entry, e.g. `linguaromana_saved_words`.
    pub fn local_storage(&self, key: &str) -> Result<Option<String>> {
        let result = self
            .tab
            .evaluate(&format!("localStorage.getItem({key:?})"), false)?;
        Ok(result.value.and_then(|v| v.as_str().map(str::to_string)))
    }
}
