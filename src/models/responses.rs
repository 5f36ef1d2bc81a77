use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, RankedCenter};
use crate::models::domain::{CenterRecord, GeoValue, Service};

/// Compact view of a center, shared by several endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterSummary {
    pub id: String,
    pub nombre: String,
    pub zona_programatica: String,
    pub direccion: Option<String>,
    pub latitud: Option<GeoValue>,
    pub longitud: Option<GeoValue>,
}

impl From<&CenterRecord> for CenterSummary {
    fn from(center: &CenterRecord) -> Self {
        Self {
            id: center.id.clone(),
            nombre: center.name.clone(),
            zona_programatica: center.zone.clone(),
            direccion: center.address.clone(),
            latitud: center.latitude.clone(),
            longitud: center.longitude.clone(),
        }
    }
}

/// Compact view plus the distance to the query point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCenterView {
    #[serde(flatten)]
    pub center: CenterSummary,
    pub distancia_km: f64,
}

impl From<&RankedCenter<'_>> for RankedCenterView {
    fn from(ranked: &RankedCenter<'_>) -> Self {
        Self {
            center: CenterSummary::from(ranked.center),
            distancia_km: ranked.rounded_km(),
        }
    }
}

/// Map marker: compact view plus service names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    #[serde(flatten)]
    pub center: CenterSummary,
    pub servicios: Vec<String>,
}

impl From<&CenterRecord> for MapCenter {
    fn from(center: &CenterRecord) -> Self {
        Self {
            center: CenterSummary::from(center),
            servicios: center.services.iter().map(|s| s.name.clone()).collect(),
        }
    }
}

/// Unpaginated listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllCentersResponse {
    pub total: usize,
    pub resultados: Vec<CenterRecord>,
}

/// One page of the listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterPageResponse {
    pub resultados: Vec<CenterRecord>,
    pub pagina: usize,
    #[serde(rename = "siguientePagina")]
    pub siguiente_pagina: Option<usize>,
    pub total: usize,
    #[serde(rename = "totalPaginas")]
    pub total_paginas: usize,
}

/// Echo of the parsed query coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryCoords {
    pub lat: f64,
    pub lon: f64,
}

impl From<Coordinate> for QueryCoords {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.lat(),
            lon: coordinate.lon(),
        }
    }
}

/// Response for the nearby centers endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyResponse {
    pub resultados: Vec<RankedCenterView>,
    pub total: usize,
    pub limit: usize,
    pub coords: QueryCoords,
}

/// Response for the assigned center endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub centro_asignado: RankedCenterView,
    pub alternativas: Vec<RankedCenterView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zona_usuario: Option<String>,
}

/// Center details in a capability answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityCenter {
    pub id: String,
    pub nombre: String,
    pub direccion: Option<String>,
    pub zona_programatica: String,
    pub distancia_km: f64,
}

impl From<&RankedCenter<'_>> for CapabilityCenter {
    fn from(ranked: &RankedCenter<'_>) -> Self {
        Self {
            id: ranked.center.id.clone(),
            nombre: ranked.center.name.clone(),
            direccion: ranked.center.address.clone(),
            zona_programatica: ranked.center.zone.clone(),
            distancia_km: ranked.rounded_km(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetail {
    pub nombre: String,
    pub turno_callcenter: bool,
}

impl From<&Service> for ServiceDetail {
    fn from(service: &Service) -> Self {
        Self {
            nombre: service.name.clone(),
            turno_callcenter: service.callcenter,
        }
    }
}

/// Where to send people when the nearest center lacks a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redirect {
    pub titulo: String,
    pub contacto: String,
    pub link: String,
}

/// Response for the dental service endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tipo")]
pub enum CapabilityResponse {
    #[serde(rename = "centro_con_odontologia")]
    Available {
        centro: CapabilityCenter,
        servicio: ServiceDetail,
    },
    #[serde(rename = "sin_odontologia")]
    Unavailable {
        mensaje: String,
        redireccion: Redirect,
    },
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub centros_cargados: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
