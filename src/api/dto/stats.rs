//! DTOs for the click statistics endpoint.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::entities::{LinkClicks, StatsSummary, StatsWindow};
use crate::error::AppError;

/// Query parameters for `GET /api/links/stats`.
///
/// Both bounds accept ISO-8601 timestamps (with or without seconds, with or
/// without an offset) or plain `YYYY-MM-DD` dates. Empty values count as
/// absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub start_date: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub end_date: Option<String>,
}

impl StatsQuery {
    /// Resolves the creation-date window.
    ///
    /// Returns `Ok(None)` (all time) unless both bounds are present. A
    /// timestamp without an offset is read as UTC; a plain date is midnight
    /// UTC of that day, for either bound.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a bound cannot be parsed.
    pub fn window(&self) -> Result<Option<StatsWindow>, AppError> {
        let start = self
            .start_date
            .as_deref()
            .map(|s| parse_bound(s, "startDate"))
            .transpose()?;
        let end = self
            .end_date
            .as_deref()
            .map(|s| parse_bound(s, "endDate"))
            .transpose()?;

        Ok(match (start, end) {
            (Some(start), Some(end)) => Some(StatsWindow::new(start, end)),
            _ => None,
        })
    }
}

/// Offset forms RFC 3339 does not cover (minute precision).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Local forms, read as UTC. A trailing `Z` is stripped before matching.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|f| DateTime::parse_from_str(raw, f).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    let local = raw.strip_suffix(['Z', 'z']).unwrap_or(raw);
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(local, f).ok())
    {
        return Some(dt.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

fn parse_bound(raw: &str, field: &str) -> Result<DateTime<Utc>, AppError> {
    parse_timestamp(raw.trim()).ok_or_else(|| {
        AppError::bad_request(
            "Invalid date, expected ISO-8601",
            json!({ "field": field, "value": raw }),
        )
    })
}

/// Aggregated clicks over the selected links.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_clicks: i64,
    pub links: Vec<LinkClicksItem>,
}

/// Per-link entry of [`StatsResponse`].
#[derive(Debug, Serialize)]
pub struct LinkClicksItem {
    pub name: String,
    pub clicks: i64,
    pub color: String,
    pub icon: String,
}

impl From<LinkClicks> for LinkClicksItem {
    fn from(l: LinkClicks) -> Self {
        Self {
            name: l.name,
            clicks: l.clicks,
            color: l.color,
            icon: l.icon,
        }
    }
}

impl From<StatsSummary> for StatsResponse {
    fn from(summary: StatsSummary) -> Self {
        Self {
            total_clicks: summary.total_clicks,
            links: summary.links.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn query(start: Option<&str>, end: Option<&str>) -> StatsQuery {
        StatsQuery {
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
        }
    }

    #[test]
    fn test_no_bounds_means_all_time() {
        assert_eq!(query(None, None).window().unwrap(), None);
    }

    #[test]
    fn test_single_bound_is_ignored() {
        assert_eq!(query(Some("2024-01-01"), None).window().unwrap(), None);
        assert_eq!(query(None, Some("2024-01-31")).window().unwrap(), None);
    }

    #[test]
    fn test_rfc3339_bounds() {
        let window = query(Some("2024-01-01T10:00:00Z"), Some("2024-01-02T12:30:00+02:00"))
            .window()
            .unwrap()
            .unwrap();

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 1, 2, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_plain_dates_are_midnight_utc() {
        let window = query(Some("2024-01-01"), Some("2024-01-31"))
            .window()
            .unwrap()
            .unwrap();

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_timestamps_without_offset_are_utc() {
        let window = query(Some("2024-01-01T00:00:00"), Some("2024-01-31T23:59:59"))
            .window()
            .unwrap()
            .unwrap();

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_fractional_and_minute_precision_timestamps() {
        let window = query(Some("2024-01-01T00:00:00.000Z"), Some("2024-01-31T00:00Z"))
            .window()
            .unwrap()
            .unwrap();

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_minute_precision_with_offset() {
        let window = query(Some("2024-01-01T10:30+02:00"), Some("2024-01-01T12:00"))
            .window()
            .unwrap()
            .unwrap();

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let err = query(Some("yesterday"), Some("2024-01-31"))
            .window()
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_error_info().details["field"], "startDate");
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let q: StatsQuery =
            serde_json::from_value(serde_json::json!({ "startDate": "", "endDate": "" })).unwrap();

        assert!(q.start_date.is_none());
        assert!(q.end_date.is_none());
        assert_eq!(q.window().unwrap(), None);
    }

    #[test]
    fn test_response_shape() {
        let summary = StatsSummary::from_links(vec![LinkClicks {
            name: "GitHub".to_string(),
            clicks: 3,
            color: "#333".to_string(),
            icon: "gh".to_string(),
        }])
        .unwrap();

        let value = serde_json::to_value(StatsResponse::from(summary)).unwrap();

        assert_eq!(
            value,
            json!({
                "totalClicks": 3,
                "links": [{ "name": "GitHub", "clicks": 3, "color": "#333", "icon": "gh" }]
            })
        );
    }
}
