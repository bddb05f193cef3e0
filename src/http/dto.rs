//! Request DTOs and their validation.
//!
//! Query fields arrive as strings and are validated here, before any
//! engine call: a request either fails fast with 400 or runs to
//! completion. Numeric fields are parsed by hand so a bad value produces
//! the service's own error document instead of a framework rejection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::models::{DisplayOffset, GeoPosition};

pub const MAX_LEGACY_DAYS: u64 = 15;

/// GET /health response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Raw query for the single-day events route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsQuery {
    pub date: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub offset: Option<String>,
    pub elevation: Option<String>,
}

/// Raw query for the legacy multi-day route. Same fields as
/// [`EventsQuery`] plus the day count and output format; kept flat because
/// urlencoded deserialization does not compose through `flatten`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyQuery {
    pub date: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub offset: Option<String>,
    pub elevation: Option<String>,
    pub days: Option<String>,
    pub format: Option<String>,
}

/// A fully validated request, ready for the resolver.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedQuery {
    pub date: NaiveDate,
    pub position: GeoPosition,
    pub offset: DisplayOffset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Xml,
}

fn require<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, AppError> {
    value
        .as_deref()
        .ok_or_else(|| AppError::BadRequest(format!("missing required parameter `{name}`")))
}

fn parse_f64(raw: &str, name: &str) -> Result<f64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("parameter `{name}` is not a number: `{raw}`")))
}

fn validate_common(
    date: &Option<String>,
    lat: &Option<String>,
    lon: &Option<String>,
    offset: &Option<String>,
    elevation: &Option<String>,
) -> Result<ResolvedQuery, AppError> {
    let raw_date = require(date, "date")?;
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date `{raw_date}`: expected YYYY-MM-DD")))?;

    let lat = parse_f64(require(lat, "lat")?, "lat")?;
    let lon = parse_f64(require(lon, "lon")?, "lon")?;
    let elevation = match elevation.as_deref() {
        Some(raw) => parse_f64(raw, "elevation")?,
        None => 0.0,
    };
    let position = GeoPosition::new(lat, lon, elevation)?;

    let offset = match offset.as_deref() {
        Some(raw) => {
            // A literal `+` in a query string decodes to a space; take a
            // leading space as the plus it started out as.
            let repaired = raw.strip_prefix(' ').map(|rest| format!("+{rest}"));
            repaired.as_deref().unwrap_or(raw).parse()?
        }
        None => DisplayOffset::utc(),
    };

    Ok(ResolvedQuery {
        date,
        position,
        offset,
    })
}

impl EventsQuery {
    pub fn validate(&self) -> Result<ResolvedQuery, AppError> {
        validate_common(&self.date, &self.lat, &self.lon, &self.offset, &self.elevation)
    }
}

impl LegacyQuery {
    pub fn validate(&self) -> Result<(ResolvedQuery, u64, OutputFormat), AppError> {
        let resolved =
            validate_common(&self.date, &self.lat, &self.lon, &self.offset, &self.elevation)?;

        let days = match self.days.as_deref() {
            None => 1,
            Some(raw) => {
                let days: u64 = raw.parse().map_err(|_| {
                    AppError::BadRequest(format!("parameter `days` is not a number: `{raw}`"))
                })?;
                if !(1..=MAX_LEGACY_DAYS).contains(&days) {
                    return Err(AppError::BadRequest(format!(
                        "parameter `days` out of range: expected 1..={MAX_LEGACY_DAYS}, got {days}"
                    )));
                }
                days
            }
        };

        let format = match self.format.as_deref() {
            None | Some("json") => OutputFormat::Json,
            Some("xml") => OutputFormat::Xml,
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "unknown format `{other}`: expected `json` or `xml`"
                )))
            }
        };

        Ok((resolved, days, format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(date: &str, lat: &str, lon: &str) -> EventsQuery {
        EventsQuery {
            date: Some(date.into()),
            lat: Some(lat.into()),
            lon: Some(lon.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_query() {
        let resolved = query("2022-06-01", "59.91", "10.75").validate().unwrap();
        assert_eq!(resolved.position.latitude, 59.91);
        assert_eq!(resolved.position.elevation, 0.0);
        assert_eq!(resolved.offset, DisplayOffset::utc());
    }

    #[test]
    fn test_missing_date_rejected() {
        let q = EventsQuery {
            lat: Some("10".into()),
            lon: Some("10".into()),
            ..Default::default()
        };
        assert!(matches!(q.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_bad_date_and_coordinates_rejected() {
        assert!(query("01-06-2022", "10", "10").validate().is_err());
        assert!(query("2022-06-01", "abc", "10").validate().is_err());
        assert!(query("2022-06-01", "95", "10").validate().is_err());
        assert!(query("2022-06-01", "10", "181").validate().is_err());
    }

    #[test]
    fn test_offset_parsing_including_decoded_plus() {
        let mut q = query("2022-06-01", "10", "10");
        q.offset = Some("-05:30".into());
        assert_eq!(q.validate().unwrap().offset.total_minutes(), -330);

        // "+01:00" arrives as " 01:00" after urlencoded decoding.
        q.offset = Some(" 01:00".into());
        assert_eq!(q.validate().unwrap().offset.total_minutes(), 60);

        q.offset = Some("nonsense".into());
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_legacy_days_bounds() {
        let base = |days: Option<&str>, format: Option<&str>| LegacyQuery {
            date: Some("2022-06-01".into()),
            lat: Some("10".into()),
            lon: Some("10".into()),
            days: days.map(Into::into),
            format: format.map(Into::into),
            ..Default::default()
        };

        assert_eq!(base(None, None).validate().unwrap().1, 1);
        assert_eq!(base(Some("15"), None).validate().unwrap().1, 15);
        assert!(base(Some("0"), None).validate().is_err());
        assert!(base(Some("16"), None).validate().is_err());
        assert!(base(Some("-1"), None).validate().is_err());
    }

    #[test]
    fn test_legacy_format() {
        let base = |format: Option<&str>| LegacyQuery {
            date: Some("2022-06-01".into()),
            lat: Some("10".into()),
            lon: Some("10".into()),
            format: format.map(Into::into),
            ..Default::default()
        };

        assert_eq!(base(None).validate().unwrap().2, OutputFormat::Json);
        assert_eq!(base(Some("xml")).validate().unwrap().2, OutputFormat::Xml);
        assert!(base(Some("yaml")).validate().is_err());
    }
}
