use std::ffi::OsStr;
use std::io::Write;
use std::sync::Arc;

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use tempfile::NamedTempFile;
use url::Url;

use crate::error::ExportError;
use crate::pdf::{EngineHandle, LaunchConfig, PageHandle, RenderEngine};
use crate::styles::{mm_to_inches, PageSetup};

/// Flags for running Chromium inside a constrained serverless sandbox.
const CHROME_ARGS: &[&str] = &[
    "--disable-gpu",
    "--disable-dev-shm-usage",
    "--disable-extensions",
    "--no-first-run",
    "--no-zygote",
    "--single-process",
    "--mute-audio",
];

/// Headless Chrome/Chromium via the DevTools protocol.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeEngine;

impl RenderEngine for ChromeEngine {
    fn launch(&self, config: &LaunchConfig) -> Result<Box<dyn EngineHandle>, ExportError> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(config.sandbox)
            .path(config.executable.clone())
            .idle_browser_timeout(config.idle_timeout)
            .args(CHROME_ARGS.iter().map(|arg| OsStr::new(*arg)).collect())
            .build()
            .map_err(|e| ExportError::EngineLaunch(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| ExportError::EngineLaunch(e.to_string()))?;
        Ok(Box::new(ChromeHandle {
            browser: Some(browser),
        }))
    }
}

struct ChromeHandle {
    browser: Option<Browser>,
}

impl EngineHandle for ChromeHandle {
    fn new_page(&mut self) -> Result<Box<dyn PageHandle>, ExportError> {
        let browser = self.browser.as_ref().ok_or(ExportError::EngineClosed)?;
        let tab = browser
            .new_tab()
            .map_err(|e| ExportError::Page(e.to_string()))?;
        Ok(Box::new(ChromePage {
            tab,
            document: None,
        }))
    }

    fn close(&mut self) -> Result<(), ExportError> {
        // Dropping the browser terminates the Chrome process.
        match self.browser.take() {
            Some(browser) => {
                drop(browser);
                Ok(())
            }
            None => Err(ExportError::EngineClosed),
        }
    }
}

struct ChromePage {
    tab: Arc<Tab>,
    /// Backing file for the loaded document; removed when the page drops.
    document: Option<NamedTempFile>,
}

impl PageHandle for ChromePage {
    fn set_content(&mut self, html: &str) -> Result<(), ExportError> {
        let mut file = tempfile::Builder::new()
            .prefix("struk-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(html.as_bytes())?;
        file.flush()?;

        let url = Url::from_file_path(file.path()).map_err(|_| {
            ExportError::Content(format!("not an absolute path: {}", file.path().display()))
        })?;

        self.tab
            .navigate_to(url.as_str())
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| ExportError::Content(e.to_string()))?;

        self.document = Some(file);
        Ok(())
    }

    fn render_to_document(&mut self, setup: &PageSetup) -> Result<Vec<u8>, ExportError> {
        self.tab
            .print_to_pdf(Some(print_options(setup)))
            .map_err(|e| ExportError::Capture(e.to_string()))
    }
}

/// DevTools print settings for `setup`. Chrome takes page dimensions in
/// inches; height is left to Chrome's default.
pub fn print_options(setup: &PageSetup) -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(setup.print_background),
        paper_width: Some(mm_to_inches(setup.width_mm)),
        margin_top: Some(mm_to_inches(setup.margins.top)),
        margin_right: Some(mm_to_inches(setup.margins.right)),
        margin_bottom: Some(mm_to_inches(setup.margins.bottom)),
        margin_left: Some(mm_to_inches(setup.margins.left)),
        ..Default::default()
    }
}
