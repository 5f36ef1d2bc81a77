use crate::models::{CenterRecord, Service};

/// One page of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub next_page: Option<usize>,
    pub total: usize,
    pub total_pages: usize,
}

/// Centers whose programmatic zone equals `zone`, ignoring case
///
/// A `None` or empty filter keeps every center.
pub fn filter_by_zone<'a>(centers: &'a [CenterRecord], zone: Option<&str>) -> Vec<&'a CenterRecord> {
    match zone.filter(|z| !z.is_empty()) {
        Some(zone) => {
            let wanted = zone.to_lowercase();
            centers
                .iter()
                .filter(|center| center.zone.to_lowercase() == wanted)
                .collect()
        }
        None => centers.iter().collect(),
    }
}

/// Slice out page `page` (1-based) of `limit` items
///
/// Pages past the end come back empty with no next page.
pub fn paginate<T>(items: &[T], page: usize, limit: usize) -> Page<'_, T> {
    let page = page.max(1);
    let limit = limit.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(limit);

    if page > total_pages {
        return Page {
            items: &[],
            page,
            next_page: None,
            total,
            total_pages,
        };
    }

    let start = (page - 1) * limit;
    let end = (start + limit).min(total);

    Page {
        items: &items[start..end],
        page,
        next_page: (page < total_pages).then_some(page + 1),
        total,
        total_pages,
    }
}

/// Look a center up by id; the requested id is upper-cased first
pub fn find_center<'a>(centers: &'a [CenterRecord], id: &str) -> Option<&'a CenterRecord> {
    let id = id.to_uppercase();
    centers.iter().find(|center| center.id == id)
}

/// Services filtered by call-center booking
///
/// `Some(true)` keeps bookable services, `Some(false)` the rest.
pub fn services_by_callcenter(center: &CenterRecord, callcenter: Option<bool>) -> Vec<&Service> {
    center
        .services
        .iter()
        .filter(|service| callcenter.map_or(true, |wanted| service.callcenter == wanted))
        .collect()
}
