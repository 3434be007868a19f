use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("browser launch failed: {0}")]
    EngineLaunch(String),

    #[error("browser page could not be opened: {0}")]
    Page(String),

    #[error("document load failed: {0}")]
    Content(String),

    #[error("PDF capture failed: {0}")]
    Capture(String),

    #[error("browser already closed")]
    EngineClosed,

    #[error("render worker failed: {0}")]
    Worker(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
