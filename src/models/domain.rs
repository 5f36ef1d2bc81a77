use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::core::coordinates::Coordinate;

/// A loosely typed coordinate component as found in the dataset
///
/// Source records carry numbers, numeric strings, or occasionally something
/// else entirely. Values are echoed back unchanged in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoValue {
    Number(f64),
    Text(String),
    Other(Value),
}

impl GeoValue {
    /// Coerce to a number; blank or non-numeric text yields `None`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeoValue::Number(n) => Some(*n),
            GeoValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            GeoValue::Other(_) => None,
        }
    }
}

/// Treat an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A service offered at a health center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "turno_callcenter", default, deserialize_with = "null_as_default")]
    pub callcenter: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Service {
    pub fn new(name: impl Into<String>, callcenter: bool) -> Self {
        Self {
            name: name.into(),
            callcenter,
            extra: Map::new(),
        }
    }

    /// Case-insensitive substring match on the service name
    pub fn name_contains(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(&keyword.to_lowercase())
    }
}

/// A municipal health center as stored in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterRecord {
    pub id: String,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "zona_programatica", default, deserialize_with = "null_as_default")]
    pub zone: String,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "latitud", default)]
    pub latitude: Option<GeoValue>,
    #[serde(rename = "longitud", default)]
    pub longitude: Option<GeoValue>,
    #[serde(rename = "servicios", default, deserialize_with = "null_as_default")]
    pub services: Vec<Service>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CenterRecord {
    /// Minimal record with numeric coordinates, mostly useful for tests and benches
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            zone: String::new(),
            address: None,
            latitude: Some(GeoValue::Number(latitude)),
            longitude: Some(GeoValue::Number(longitude)),
            services: Vec::new(),
            extra: Map::new(),
        }
    }

    /// The center's position, if both components coerce to a valid coordinate
    pub fn coordinate(&self) -> Option<Coordinate> {
        let lat = self.latitude.as_ref()?.as_f64()?;
        let lon = self.longitude.as_ref()?.as_f64()?;
        Coordinate::new(lat, lon).ok()
    }

    /// First service satisfying `predicate`, in dataset order
    pub fn find_service<F>(&self, predicate: F) -> Option<&Service>
    where
        F: Fn(&Service) -> bool,
    {
        self.services.iter().find(|service| predicate(*service))
    }
}
