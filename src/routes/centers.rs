use actix_web::{web, HttpResponse, Responder};

use crate::core::{filter_by_zone, paginate, services_by_callcenter};
use crate::models::{
    size_param, AllCentersResponse, CenterPageResponse, ListCentersQuery, MapCenter, ServicesQuery,
};
use crate::routes::{error::ApiError, AppState};

/// Configure the catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/centros_salud", web::get().to(list_centers))
        .route("/centros_salud/{id}", web::get().to(get_center))
        .route("/centros_salud/{id}/servicios", web::get().to(get_center_services))
        .route("/centros_salud_mapa", web::get().to(map_centers));
}

/// List centers
///
/// GET /centros_salud?zona_programatica={zona}&page={n}&limit={n}
///
/// Without `page` or `limit` the whole (zone-filtered) listing is returned.
async fn list_centers(
    state: web::Data<AppState>,
    query: web::Query<ListCentersQuery>,
) -> impl Responder {
    let filtered = filter_by_zone(state.dataset.centers(), query.zone());

    if !query.is_paginated() {
        return HttpResponse::Ok().json(AllCentersResponse {
            total: filtered.len(),
            resultados: filtered.into_iter().cloned().collect(),
        });
    }

    let pagination = &state.settings.pagination;
    let limit = size_param(
        query.limit.as_deref(),
        pagination.default_limit,
        1,
        pagination.max_limit,
    );
    let page = paginate(&filtered, query.page_number(), limit);

    tracing::debug!(
        "Listing page {} of {} ({} centers, limit {})",
        page.page,
        page.total_pages,
        page.total,
        limit
    );

    HttpResponse::Ok().json(CenterPageResponse {
        resultados: page.items.iter().map(|center| (*center).clone()).collect(),
        pagina: page.page,
        siguiente_pagina: page.next_page,
        total: page.total,
        total_paginas: page.total_pages,
    })
}

/// GET /centros_salud/{id}
async fn get_center(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let center = state.dataset.find(&id).ok_or(ApiError::CenterNotFound)?;
    Ok(HttpResponse::Ok().json(center))
}

/// Services of one center
///
/// GET /centros_salud/{id}/servicios?callcenter=true|false
async fn get_center_services(
    state: web::Data<AppState>,
    id: web::Path<String>,
    query: web::Query<ServicesQuery>,
) -> Result<HttpResponse, ApiError> {
    let center = state.dataset.find(&id).ok_or(ApiError::CenterNotFound)?;
    Ok(HttpResponse::Ok().json(services_by_callcenter(center, query.callcenter())))
}

/// Lightweight listing for map markers
///
/// GET /centros_salud_mapa
async fn map_centers(state: web::Data<AppState>) -> impl Responder {
    let centers: Vec<MapCenter> = state.dataset.centers().iter().map(MapCenter::from).collect();
    HttpResponse::Ok().json(centers)
}
