// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CenterRecord, GeoValue, Service};
pub use requests::{lenient_int, size_param, ListCentersQuery, ServicesQuery};
pub use responses::{
    AllCentersResponse, AssignmentResponse, CapabilityCenter, CapabilityResponse, CenterPageResponse,
    CenterSummary, ErrorResponse, HealthResponse, MapCenter, NearbyResponse, QueryCoords, RankedCenterView,
    Redirect, ServiceDetail,
};
