use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use tower::ServiceExt;

use struk_export::error::ExportError;
use struk_export::pdf::{EngineHandle, LaunchConfig, PageHandle, RenderEngine};
use struk_export::styles::PageSetup;
use struk_lambda::config::AppConfig;
use struk_lambda::state::AppState;

#[derive(Clone, Copy, PartialEq)]
pub enum Failure {
    None,
    Launch,
    Capture,
}

/// Records how the handler drives the engine. Captured "PDFs" are the
/// length of the loaded HTML, as text.
#[derive(Default)]
pub struct EngineLog {
    pub launches: AtomicUsize,
    pub closes: AtomicUsize,
    pub documents: Mutex<Vec<String>>,
}

impl EngineLog {
    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn last_document(&self) -> String {
        self.documents.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

pub struct StubEngine {
    failure: Failure,
    log: Arc<EngineLog>,
}

impl RenderEngine for StubEngine {
    fn launch(&self, _config: &LaunchConfig) -> Result<Box<dyn EngineHandle>, ExportError> {
        self.log.launches.fetch_add(1, Ordering::SeqCst);
        if self.failure == Failure::Launch {
            return Err(ExportError::EngineLaunch("no usable sandbox".to_string()));
        }
        Ok(Box::new(StubHandle {
            failure: self.failure,
            log: Arc::clone(&self.log),
        }))
    }
}

struct StubHandle {
    failure: Failure,
    log: Arc<EngineLog>,
}

impl EngineHandle for StubHandle {
    fn new_page(&mut self) -> Result<Box<dyn PageHandle>, ExportError> {
        Ok(Box::new(StubPage {
            failure: self.failure,
            log: Arc::clone(&self.log),
            len: 0,
        }))
    }

    fn close(&mut self) -> Result<(), ExportError> {
        self.log.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct StubPage {
    failure: Failure,
    log: Arc<EngineLog>,
    len: usize,
}

impl PageHandle for StubPage {
    fn set_content(&mut self, html: &str) -> Result<(), ExportError> {
        self.log.documents.lock().unwrap().push(html.to_string());
        self.len = html.len();
        Ok(())
    }

    fn render_to_document(&mut self, _setup: &PageSetup) -> Result<Vec<u8>, ExportError> {
        if self.failure == Failure::Capture {
            return Err(ExportError::Capture("Printing failed".to_string()));
        }
        Ok(self.len.to_string().into_bytes())
    }
}

pub fn test_app(failure: Failure) -> (Router, Arc<EngineLog>) {
    let log = Arc::new(EngineLog::default());
    let engine = StubEngine {
        failure,
        log: Arc::clone(&log),
    };
    let state = AppState::new(&AppConfig::default(), Arc::new(engine)).unwrap();
    (struk_lambda::app(state), log)
}

pub async fn post(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub fn sample_batch(receipts: usize) -> serde_json::Value {
    let transactions: Vec<_> = (1..=receipts)
        .map(|i| {
            serde_json::json!({
                "receiptId": format!("TRX-{i:03}"),
                "employeeId": if i % 2 == 0 { serde_json::json!(99) } else { serde_json::json!("1") },
                "timestamp": "19/10/2025 17.05",
                "items": [
                    { "name": "Nasi Goreng", "quantity": 1, "price": 25000 },
                    { "name": "Es Jeruk", "quantity": 2, "price": 8000 }
                ],
                "total": 41000,
                "payment": 50000,
                "change": 9000
            })
        })
        .collect();

    serde_json::json!({
        "transactions": transactions,
        "employees": [{ "id": 1, "name": "Sari" }]
    })
}
