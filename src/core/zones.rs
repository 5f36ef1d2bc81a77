use crate::core::coordinates::Coordinate;

/// Answer from a zone lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneLookup {
    /// The point falls inside the named programmatic zone
    Zone(String),
    /// The point is outside every known zone
    Outside,
    /// The locator has no zone geometry to work with
    NotImplemented,
}

impl ZoneLookup {
    pub fn zone(&self) -> Option<&str> {
        match self {
            ZoneLookup::Zone(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Resolves which programmatic zone a point belongs to
///
/// Route handlers hold an `Arc<dyn ZoneLocator>`, so a polygon-backed
/// implementation can replace [`PendingZoneLocator`] without touching them.
pub trait ZoneLocator: Send + Sync {
    fn locate(&self, point: &Coordinate) -> ZoneLookup;
}

/// Placeholder used until zone polygons are published
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingZoneLocator;

impl ZoneLocator for PendingZoneLocator {
    fn locate(&self, _point: &Coordinate) -> ZoneLookup {
        ZoneLookup::NotImplemented
    }
}
