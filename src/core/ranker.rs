use thiserror::Error;

use crate::core::coordinates::Coordinate;
use crate::core::distance::{distance_to_record, round_km};
use crate::models::{CenterRecord, Service};

/// Errors from ranking operations that need at least one placeable center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("no center in the dataset has usable coordinates")]
    NoValidCenters,
}

/// A center paired with its distance to the query point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCenter<'a> {
    pub center: &'a CenterRecord,
    /// Full precision, never rounded
    pub distance_km: f64,
}

impl<'a> RankedCenter<'a> {
    /// Distance rounded to two decimals for display
    pub fn rounded_km(&self) -> f64 {
        round_km(self.distance_km)
    }
}

/// First `k` ranked centers
#[derive(Debug)]
pub struct TopResult<'a> {
    pub centers: Vec<RankedCenter<'a>>,
    /// Number of centers that could be ranked at all
    pub total: usize,
    /// Effective `k` after clamping
    pub limit: usize,
}

/// The center a point is assigned to, plus the runners-up
#[derive(Debug)]
pub struct Assignment<'a> {
    pub principal: RankedCenter<'a>,
    pub alternatives: Vec<RankedCenter<'a>>,
}

/// Outcome of checking the nearest center for a capability
#[derive(Debug)]
pub enum CapabilityOutcome<'a> {
    /// The nearest center offers a matching service
    Available {
        center: RankedCenter<'a>,
        service: &'a Service,
    },
    /// The nearest center does not; the caller decides where to redirect
    Unavailable { nearest: RankedCenter<'a> },
}

/// Clamping bounds for list sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingLimits {
    pub max_nearby: usize,
    pub max_alternatives: usize,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            max_nearby: 10,
            max_alternatives: 5,
        }
    }
}

/// Orders centers by great-circle distance from a query point
///
/// Stateless apart from its limits. Records with unusable coordinates are
/// skipped, so one broken record never hides the others.
#[derive(Debug, Clone, Default)]
pub struct ProximityRanker {
    limits: RankingLimits,
}

impl ProximityRanker {
    pub fn new(limits: RankingLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> RankingLimits {
        self.limits
    }

    /// Every placeable center, nearest first
    ///
    /// The sort is stable, so equal distances keep dataset order.
    pub fn rank<'a>(&self, query: &Coordinate, centers: &'a [CenterRecord]) -> Vec<RankedCenter<'a>> {
        let mut ranked: Vec<RankedCenter<'a>> = centers
            .iter()
            .filter_map(|center| {
                distance_to_record(query, center).map(|distance_km| RankedCenter { center, distance_km })
            })
            .collect();

        ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        if ranked.len() < centers.len() {
            tracing::trace!(
                "Skipped {} centers without usable coordinates",
                centers.len() - ranked.len()
            );
        }

        ranked
    }

    /// The `k` nearest centers, `k` clamped to `[1, max_nearby]`
    pub fn top<'a>(&self, query: &Coordinate, centers: &'a [CenterRecord], k: usize) -> TopResult<'a> {
        let limit = k.clamp(1, self.limits.max_nearby.max(1));
        let mut ranked = self.rank(query, centers);
        let total = ranked.len();
        ranked.truncate(limit);

        TopResult {
            centers: ranked,
            total,
            limit,
        }
    }

    /// Nearest center plus up to `k - 1` alternatives
    ///
    /// `k` counts suggestions including the assigned center and is clamped to
    /// `[1, max_alternatives]`.
    pub fn assigned_and_alternatives<'a>(
        &self,
        query: &Coordinate,
        centers: &'a [CenterRecord],
        k: usize,
    ) -> Result<Assignment<'a>, RankError> {
        let suggestions = k.clamp(1, self.limits.max_alternatives.max(1));
        let mut ranked = self.rank(query, centers).into_iter();

        let principal = ranked.next().ok_or(RankError::NoValidCenters)?;
        let alternatives = ranked.take(suggestions - 1).collect();

        Ok(Assignment {
            principal,
            alternatives,
        })
    }

    /// Check whether the single nearest center offers a matching service
    ///
    /// Only the nearest center is examined. If it lacks the capability the
    /// result is `Unavailable`, even when a farther center would match.
    pub fn nearest_with_capability<'a, F>(
        &self,
        query: &Coordinate,
        centers: &'a [CenterRecord],
        predicate: F,
    ) -> Result<CapabilityOutcome<'a>, RankError>
    where
        F: Fn(&Service) -> bool,
    {
        let nearest = self
            .rank(query, centers)
            .into_iter()
            .next()
            .ok_or(RankError::NoValidCenters)?;

        match nearest.center.find_service(predicate) {
            Some(service) => Ok(CapabilityOutcome::Available {
                center: nearest,
                service,
            }),
            None => Ok(CapabilityOutcome::Unavailable { nearest }),
        }
    }
}
