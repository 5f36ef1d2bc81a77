use actix_web::{web, HttpResponse};
use std::collections::HashMap;

use crate::core::{parse_coordinates, CapabilityOutcome, RankError, ZoneLookup};
use crate::models::{
    size_param, AssignmentResponse, CapabilityCenter, CapabilityResponse, NearbyResponse,
    RankedCenterView, ServiceDetail,
};
use crate::routes::{error::ApiError, AppState};

/// Configure the location-based routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/centros_cercanos", web::get().to(nearby_centers))
        .route("/centro_correspondiente", web::get().to(assigned_center))
        .route("/centro_odontologia", web::get().to(dental_center))
        .route("/test_odo", web::get().to(dental_center));
}

/// Nearest centers to a point
///
/// GET /centros_cercanos?lat={lat}&lon={lon}&limit={n}
async fn nearby_centers(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let coords = parse_coordinates(&query)?;
    let ranking = &state.settings.ranking;
    let k = size_param(
        query.get("limit").map(String::as_str),
        ranking.default_nearby,
        1,
        ranking.max_nearby,
    );

    let result = state.ranker.top(&coords, state.dataset.centers(), k);

    Ok(HttpResponse::Ok().json(NearbyResponse {
        resultados: result.centers.iter().map(RankedCenterView::from).collect(),
        total: result.total,
        limit: result.limit,
        coords: coords.into(),
    }))
}

/// The center a point is assigned to, plus suggestions
///
/// GET /centro_correspondiente?lat={lat}&lon={lon}&sugerencias={n}
///
/// Assignment is by distance for now; the zone locator is consulted so a
/// polygon-backed locator can report the caller's zone once available.
async fn assigned_center(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let coords = parse_coordinates(&query)?;
    let ranking = &state.settings.ranking;
    let k = size_param(
        query.get("sugerencias").map(String::as_str),
        ranking.default_alternatives,
        1,
        ranking.max_alternatives,
    );

    let assignment = state
        .ranker
        .assigned_and_alternatives(&coords, state.dataset.centers(), k)
        .map_err(|RankError::NoValidCenters| ApiError::NoValidCenters("correspondencia"))?;

    let zone = state.zones.locate(&coords);
    if zone == ZoneLookup::NotImplemented {
        tracing::trace!("Zone lookup not available, assigning by distance only");
    }

    tracing::info!(
        lat = coords.lat(),
        lon = coords.lon(),
        center_id = %assignment.principal.center.id,
        "Assigned center {} ({})",
        assignment.principal.center.id,
        assignment.principal.center.name
    );

    Ok(HttpResponse::Ok().json(AssignmentResponse {
        centro_asignado: RankedCenterView::from(&assignment.principal),
        alternativas: assignment.alternatives.iter().map(RankedCenterView::from).collect(),
        zona_usuario: zone.zone().map(str::to_string),
    }))
}

/// Whether the nearest center offers dental care
///
/// GET /centro_odontologia?lat={lat}&lon={lon}
///
/// Only the nearest center is checked. When it has no dental service the
/// response points to the municipal orientation service instead.
async fn dental_center(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let coords = parse_coordinates(&query)?;
    let keyword = state.settings.ranking.capability_keyword.as_str();

    let outcome = state
        .ranker
        .nearest_with_capability(&coords, state.dataset.centers(), |service| {
            service.name_contains(keyword)
        })
        .map_err(|RankError::NoValidCenters| ApiError::NoValidCenters("distancia"))?;

    let response = match outcome {
        CapabilityOutcome::Available { center, service } => {
            tracing::debug!("Nearest center {} offers {}", center.center.id, service.name);
            CapabilityResponse::Available {
                centro: CapabilityCenter::from(&center),
                servicio: ServiceDetail::from(service),
            }
        }
        CapabilityOutcome::Unavailable { nearest } => {
            tracing::debug!("Nearest center {} has no '{}' service, redirecting", nearest.center.id, keyword);
            let redirect = &state.settings.redirect;
            CapabilityResponse::Unavailable {
                mensaje: redirect.mensaje.clone(),
                redireccion: redirect.redirect(),
            }
        }
    };

    Ok(HttpResponse::Ok().json(response))
}
