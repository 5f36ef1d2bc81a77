// Core algorithm exports
pub mod catalog;
pub mod coordinates;
pub mod distance;
pub mod ranker;
pub mod zones;

pub use catalog::{filter_by_zone, find_center, paginate, services_by_callcenter, Page};
pub use coordinates::{parse_coordinates, Bound, Coordinate, CoordinateError};
pub use distance::{distance_to_record, haversine_distance, round_km};
pub use ranker::{Assignment, CapabilityOutcome, ProximityRanker, RankError, RankedCenter, RankingLimits, TopResult};
pub use zones::{PendingZoneLocator, ZoneLocator, ZoneLookup};
