// Route exports
pub mod centers;
pub mod error;
pub mod proximity;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::config::Settings;
use crate::core::{PendingZoneLocator, ProximityRanker, ZoneLocator};
use crate::models::HealthResponse;
use crate::services::Dataset;

pub use error::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub ranker: ProximityRanker,
    pub zones: Arc<dyn ZoneLocator>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State with the ranking limits from `settings` and no zone geometry
    pub fn new(dataset: Dataset, settings: Settings) -> Self {
        Self {
            dataset: Arc::new(dataset),
            ranker: ProximityRanker::new(settings.ranking.limits()),
            zones: Arc::new(PendingZoneLocator),
            settings: Arc::new(settings),
        }
    }

    pub fn with_zone_locator(mut self, zones: Arc<dyn ZoneLocator>) -> Self {
        self.zones = zones;
        self
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .configure(centers::configure)
        .configure(proximity::configure);
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("API de servicios de salud municipales")
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.dataset.locatable_count() > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        centros_cargados: state.dataset.len(),
    })
}
