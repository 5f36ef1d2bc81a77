// Unit tests for Centros Salud

use centros_salud::core::{
    distance::haversine_distance, parse_coordinates, Coordinate, CoordinateError, ProximityRanker,
};
use centros_salud::models::{CenterRecord, GeoValue};
use std::collections::HashMap;

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn sample_points() -> Vec<Coordinate> {
    [
        (-31.3648, -64.149057),
        (-31.40, -64.20),
        (0.0, 0.0),
        (89.9, 179.9),
        (-89.9, -179.9),
        (51.5074, -0.1278),
        (40.7128, -74.0060),
    ]
    .iter()
    .map(|(lat, lon)| Coordinate::new(*lat, *lon).unwrap())
    .collect()
}

#[test]
fn test_distance_to_self_is_zero() {
    for c in sample_points() {
        assert_eq!(c.distance_to(&c), 0.0);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let points = sample_points();
    for a in &points {
        for b in &points {
            let ab = a.distance_to(b);
            let ba = b.distance_to(a);
            assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
        }
    }
}

#[test]
fn test_haversine_known_distance() {
    // New York to Los Angeles (approximately 3944 km)
    let distance = haversine_distance(40.7128, -74.0060, 34.0522, -118.2437);
    assert!((distance - 3944.0).abs() < 100.0, "Expected ~3944km, got {}", distance);
}

#[test]
fn test_parsed_coordinates_always_in_range() {
    let inputs = [
        ("0", "0"),
        ("90", "180"),
        ("-90", "-180"),
        ("45.5", "-120,25"),
        ("90.0001", "0"),
        ("0", "-180.5"),
        ("1e3", "0"),
    ];

    for (lat, lon) in inputs {
        if let Ok(c) = parse_coordinates(&params(&[("lat", lat), ("lon", lon)])) {
            assert!((-90.0..=90.0).contains(&c.lat()));
            assert!((-180.0..=180.0).contains(&c.lon()));
        }
    }
}

#[test]
fn test_alias_priority_lat_wins() {
    let c = parse_coordinates(&params(&[("lat", "-31.1"), ("latitude", "-32.2"), ("lon", "-64")])).unwrap();
    assert_eq!(c.lat(), -31.1);
}

#[test]
fn test_decimal_comma_accepted() {
    let c = parse_coordinates(&params(&[("lat", "-31,3648"), ("lon", "-64,149057")])).unwrap();
    assert_eq!(c.lat(), -31.3648);
    assert_eq!(c.lon(), -64.149057);
}

#[test]
fn test_range_rejection_mentions_lat() {
    let err = parse_coordinates(&params(&[("lat", "100"), ("lon", "0")])).unwrap_err();
    assert!(matches!(err, CoordinateError::LatitudeOutOfRange { .. }));
    assert_eq!(err.to_string(), "El parámetro `lat` debe estar entre -90 y 90.");
}

#[test]
fn test_missing_coordinates_message() {
    let err = parse_coordinates(&params(&[])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Debes indicar `lat` y `lon` como números (ej: ?lat=-31.3648&lon=-64.149057). También se aceptan `latitude`/`longitude` y `lng`."
    );
}

#[test]
fn test_rank_sorted_and_counts_only_valid() {
    let query = Coordinate::new(-31.42, -64.18).unwrap();

    let mut centers: Vec<CenterRecord> = (0..30)
        .map(|i| {
            let offset = ((i * 7) % 13) as f64 * 0.01;
            CenterRecord::new(format!("CS{:03}", i), -31.30 - offset, -64.10 - offset)
        })
        .collect();

    // Break every fifth record in a different way
    for (n, center) in centers.iter_mut().enumerate().filter(|(i, _)| i % 5 == 0) {
        match n % 3 {
            0 => center.latitude = None,
            1 => center.longitude = Some(GeoValue::Text("sin dato".to_string())),
            _ => center.latitude = Some(GeoValue::Number(95.0)),
        }
    }

    let valid = centers.iter().filter(|c| c.coordinate().is_some()).count();
    let ranked = ProximityRanker::default().rank(&query, &centers);

    assert_eq!(valid, 24);
    assert_eq!(ranked.len(), valid);
    for pair in ranked.windows(2) {
        assert!(pair[0].distance_km <= pair[1].distance_km);
    }
}

#[test]
fn test_rank_keeps_antipodal_center() {
    let query = Coordinate::new(-87.843, -64.149057).unwrap();
    let centers = vec![CenterRecord::new("CS900", 87.843, 115.850943)];

    let ranked = ProximityRanker::default().rank(&query, &centers);

    assert_eq!(ranked.len(), 1);
    assert!(ranked[0].distance_km.is_finite());
    assert!((ranked[0].distance_km - 20015.0).abs() < 1.0, "got {}", ranked[0].distance_km);
}
