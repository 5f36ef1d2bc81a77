use serde::{Deserialize, Serialize};

/// Query for the center listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCentersQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub zona_programatica: Option<String>,
}

impl ListCentersQuery {
    /// Whether the caller asked for a page rather than the whole listing
    pub fn is_paginated(&self) -> bool {
        has_value(&self.page) || has_value(&self.limit)
    }

    /// Requested page, at least 1
    pub fn page_number(&self) -> usize {
        match lenient_int(self.page.as_deref()) {
            Some(0) | None => 1,
            Some(page) => page.clamp(1, i64::MAX) as usize,
        }
    }

    pub fn zone(&self) -> Option<&str> {
        self.zona_programatica.as_deref()
    }
}

/// Query for a center's services
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicesQuery {
    pub callcenter: Option<String>,
}

impl ServicesQuery {
    /// `true`/`false` filter; any other value means no filter
    pub fn callcenter(&self) -> Option<bool> {
        match self.callcenter.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }
}

fn has_value(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Read the integer at the start of `raw`, ignoring trailing characters
///
/// `"5abc"` reads as `5`; values with no leading digits read as `None`.
pub fn lenient_int(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        return None;
    }

    s[..end].parse::<i64>().ok()
}

/// Resolve a size parameter: zero or unparseable falls back to `default`,
/// anything else is clamped into `[min, max]`
pub fn size_param(raw: Option<&str>, default: usize, min: usize, max: usize) -> usize {
    let value = match lenient_int(raw) {
        Some(0) | None => default as i64,
        Some(value) => value,
    };
    value.clamp(min as i64, max.max(min) as i64) as usize
}
