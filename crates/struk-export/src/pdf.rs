//! Rendering-engine seam.
//!
//! The HTTP layer never talks to a browser directly. It goes through
//! [`RenderEngine`], so tests can swap in a stub and production uses
//! [`crate::chrome::ChromeEngine`].

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ExportError;
use crate::styles::PageSetup;

/// Options for starting an engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    /// Browser executable; `None` lets the engine locate one.
    pub executable: Option<PathBuf>,
    pub sandbox: bool,
    /// How long an idle engine may wait on the browser before giving up.
    pub idle_timeout: Duration,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            executable: None,
            sandbox: false,
            idle_timeout: Duration::from_secs(30),
        }
    }
}

/// Something that can start a document renderer.
pub trait RenderEngine: Send + Sync {
    fn launch(&self, config: &LaunchConfig) -> Result<Box<dyn EngineHandle>, ExportError>;
}

/// A running engine instance. Must be closed once finished with; use
/// [`EngineGuard`] rather than calling [`EngineHandle::close`] directly.
pub trait EngineHandle {
    fn new_page(&mut self) -> Result<Box<dyn PageHandle>, ExportError>;

    fn close(&mut self) -> Result<(), ExportError>;
}

pub trait PageHandle {
    /// Load `html` as the page document. Returns once the document has
    /// finished loading.
    fn set_content(&mut self, html: &str) -> Result<(), ExportError>;

    /// Capture the loaded document as PDF bytes.
    fn render_to_document(&mut self, setup: &PageSetup) -> Result<Vec<u8>, ExportError>;
}

/// Owns an acquired engine and closes it exactly once on drop.
pub struct EngineGuard {
    handle: Box<dyn EngineHandle>,
}

impl EngineGuard {
    pub fn acquire(engine: &dyn RenderEngine, config: &LaunchConfig) -> Result<Self, ExportError> {
        let handle = engine.launch(config)?;
        tracing::debug!("render engine launched");
        Ok(Self { handle })
    }

    pub fn new_page(&mut self) -> Result<Box<dyn PageHandle>, ExportError> {
        self.handle.new_page()
    }
}

impl Drop for EngineGuard {
    fn drop(&mut self) {
        match self.handle.close() {
            Ok(()) => tracing::debug!("render engine closed"),
            Err(e) => tracing::warn!(error = %e, "render engine close failed"),
        }
    }
}

/// Render a complete HTML document to PDF with a fresh engine instance.
///
/// The engine is released on every path out of this function, including
/// failures while loading or capturing.
pub fn render_pdf(
    engine: &dyn RenderEngine,
    config: &LaunchConfig,
    html: &str,
    setup: &PageSetup,
) -> Result<Vec<u8>, ExportError> {
    let mut engine = EngineGuard::acquire(engine, config)?;
    let mut page = engine.new_page()?;
    page.set_content(html)?;
    let pdf = page.render_to_document(setup)?;
    tracing::debug!(bytes = pdf.len(), "document captured");
    Ok(pdf)
}
