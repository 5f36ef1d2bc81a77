// HTTP tests for Centros Salud

use actix_web::{http::StatusCode, test, web, App};
use centros_salud::config::Settings;
use centros_salud::core::{Coordinate, ZoneLocator, ZoneLookup};
use centros_salud::routes::{configure_routes, AppState};
use centros_salud::services::Dataset;
use serde_json::Value;
use std::sync::Arc;

const SAMPLE_DATASET: &str = include_str!("../data/centros_salud.json");

fn state() -> AppState {
    let dataset = Dataset::from_json_str(SAMPLE_DATASET).unwrap();
    AppState::new(dataset, Settings::default())
}

macro_rules! get_json {
    ($state:expr, $uri:expr) => {{
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::get().uri($uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn test_index() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;
    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, web::Bytes::from_static(b"API de servicios de salud municipales"));
}

#[actix_web::test]
async fn test_health() {
    let (status, body) = get_json!(state(), "/health");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["centros_cargados"], 6);
}

#[actix_web::test]
async fn test_list_all_centers() {
    let (status, body) = get_json!(state(), "/centros_salud");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);
    assert_eq!(body["resultados"].as_array().unwrap().len(), 6);
    assert!(body.get("pagina").is_none());
}

#[actix_web::test]
async fn test_list_paginated() {
    let (_, body) = get_json!(state(), "/centros_salud?page=2&limit=4");
    assert_eq!(body["pagina"], 2);
    assert_eq!(body["total"], 6);
    assert_eq!(body["totalPaginas"], 2);
    assert_eq!(body["siguientePagina"], Value::Null);
    let ids: Vec<&str> = body["resultados"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["CS005", "CS006"]);
}

#[actix_web::test]
async fn test_list_limit_clamped_and_past_end() {
    let (_, body) = get_json!(state(), "/centros_salud?limit=500");
    assert_eq!(body["pagina"], 1);
    assert_eq!(body["totalPaginas"], 1);
    assert_eq!(body["resultados"].as_array().unwrap().len(), 6);

    let (_, body) = get_json!(state(), "/centros_salud?page=9&limit=2");
    assert!(body["resultados"].as_array().unwrap().is_empty());
    assert_eq!(body["siguientePagina"], Value::Null);
    assert_eq!(body["totalPaginas"], 3);
}

#[actix_web::test]
async fn test_list_filtered_by_zone() {
    let (_, body) = get_json!(state(), "/centros_salud?zona_programatica=zona%20norte");
    assert_eq!(body["total"], 2);

    let (_, body) = get_json!(state(), "/centros_salud?zona_programatica=zona%20sur&page=1&limit=1");
    assert_eq!(body["total"], 2);
    assert_eq!(body["siguientePagina"], 2);
    assert_eq!(body["resultados"][0]["id"], "CS003");
}

#[actix_web::test]
async fn test_center_by_id() {
    let (status, body) = get_json!(state(), "/centros_salud/cs002");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "CS002");
    assert_eq!(body["servicios"].as_array().unwrap().len(), 2);

    let (status, body) = get_json!(state(), "/centros_salud/CS999");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Centro no encontrado");
}

#[actix_web::test]
async fn test_center_services_filter() {
    let (_, body) = get_json!(state(), "/centros_salud/CS001/servicios");
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (_, body) = get_json!(state(), "/centros_salud/CS001/servicios?callcenter=true");
    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0]["nombre"], "Clínica Médica");

    let (_, body) = get_json!(state(), "/centros_salud/CS001/servicios?callcenter=false");
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, _) = get_json!(state(), "/centros_salud/CS999/servicios");
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_map_view() {
    let (_, body) = get_json!(state(), "/centros_salud_mapa");
    let first = &body.as_array().unwrap()[0];
    assert_eq!(first["id"], "CS001");
    assert_eq!(first["servicios"][1], "Odontología");
    assert!(first.get("distancia_km").is_none());
}

#[actix_web::test]
async fn test_nearby_centers() {
    let (status, body) = get_json!(state(), "/centros_cercanos?lat=-31.3648&lon=-64.149057");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 3);
    assert_eq!(body["total"], 5);
    assert_eq!(body["coords"]["lat"], -31.3648);
    let results = body["resultados"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["id"], "CS001");
    assert_eq!(results[0]["distancia_km"], 0.0);

    let (_, body) = get_json!(state(), "/centros_cercanos?latitud=-31,3648&lng=-64,149057&limit=99");
    assert_eq!(body["limit"], 10);
    assert_eq!(body["resultados"].as_array().unwrap().len(), 5);
}

#[actix_web::test]
async fn test_nearby_bad_coordinates() {
    let (status, body) = get_json!(state(), "/centros_cercanos");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Debes indicar `lat` y `lon`"));

    let (status, body) = get_json!(state(), "/centros_cercanos?lat=0&lon=200");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "El parámetro `lon` debe estar entre -180 y 180.");
}

#[actix_web::test]
async fn test_assigned_center() {
    let (status, body) = get_json!(state(), "/centro_correspondiente?lat=-31.3648&lon=-64.149057");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["centro_asignado"]["id"], "CS001");
    assert_eq!(body["alternativas"].as_array().unwrap().len(), 2);
    assert!(body.get("zona_usuario").is_none());

    let (_, body) = get_json!(state(), "/centro_correspondiente?lat=-31.3648&lon=-64.149057&sugerencias=1");
    assert!(body["alternativas"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_assigned_center_without_valid_centers() {
    let dataset = Dataset::from_json_str(r#"{"centros_salud": [{"id": "CS100", "latitud": null}]}"#).unwrap();
    let state = AppState::new(dataset, Settings::default());

    let (status, body) = get_json!(state, "/centro_correspondiente?lat=-31.3648&lon=-64.149057");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "No hay centros con coordenadas válidas para calcular correspondencia"
    );
}

struct FixedZone;

impl ZoneLocator for FixedZone {
    fn locate(&self, _point: &Coordinate) -> ZoneLookup {
        ZoneLookup::Zone("Zona Norte".to_string())
    }
}

#[actix_web::test]
async fn test_assigned_center_reports_zone() {
    let state = state().with_zone_locator(Arc::new(FixedZone));
    let (_, body) = get_json!(state, "/centro_correspondiente?lat=-31.3648&lon=-64.149057");
    assert_eq!(body["zona_usuario"], "Zona Norte");
    assert_eq!(body["centro_asignado"]["id"], "CS001");
}

#[actix_web::test]
async fn test_dental_center_available() {
    let (status, body) = get_json!(state(), "/centro_odontologia?lat=-31.3648&lon=-64.149057");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tipo"], "centro_con_odontologia");
    assert_eq!(body["centro"]["id"], "CS001");
    assert_eq!(body["servicio"]["nombre"], "Odontología");
    assert_eq!(body["servicio"]["turno_callcenter"], false);
}

#[actix_web::test]
async fn test_dental_center_redirect() {
    let (status, body) = get_json!(state(), "/test_odo?lat=-31.4290&lon=-64.1480");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tipo"], "sin_odontologia");
    assert_eq!(body["redireccion"]["titulo"], "Servicio de Orientación Municipal (SOM)");
    assert!(body.get("centro").is_none());
}

#[actix_web::test]
async fn test_dental_center_without_valid_centers() {
    let state = AppState::new(Dataset::default(), Settings::default());
    let (status, body) = get_json!(state, "/centro_odontologia?lat=-31.3648&lon=-64.149057");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "No hay centros con coordenadas válidas para calcular distancia"
    );
}
