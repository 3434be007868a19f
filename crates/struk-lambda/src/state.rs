use std::sync::Arc;

use struk_core::format::display_time_zone;
use struk_export::pdf::{LaunchConfig, RenderEngine};
use struk_export::render::ReceiptFormatter;
use struk_export::styles::{PageSetup, ReceiptStyles};

use crate::config::AppConfig;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Nothing here is mutated after cold start; each request launches and
/// releases its own engine instance.
#[derive(Clone)]
pub struct AppState {
    pub formatter: Arc<ReceiptFormatter>,
    pub engine: Arc<dyn RenderEngine>,
    pub launch: LaunchConfig,
    pub page: PageSetup,
}

impl AppState {
    pub fn new(config: &AppConfig, engine: Arc<dyn RenderEngine>) -> eyre::Result<Self> {
        let time_zone = display_time_zone(&config.time_zone)?;
        let formatter =
            ReceiptFormatter::new(config.store.clone(), ReceiptStyles::default(), time_zone)?;

        Ok(Self {
            formatter: Arc::new(formatter),
            engine,
            launch: config.launch_config(),
            page: PageSetup::thermal_80mm(),
        })
    }
}
