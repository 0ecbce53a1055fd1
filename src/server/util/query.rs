//! Helpers for the `search` and `ordering` query parameters of list endpoints.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::{EntityTrait, Order, QueryOrder, Select};

/// One entry of an `ordering` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingField {
    pub field: String,
    pub descending: bool,
}

/// Parses a comma-separated `ordering` parameter.
///
/// A leading `-` sorts descending. Fields not in `allowed` are dropped.
///
/// # Arguments
/// - `raw` - Raw parameter value, e.g. `"-departure_time,id"`
/// - `allowed` - Field names the endpoint can sort by
///
/// # Returns
/// - `Vec<OrderingField>` - Recognised fields in request order
pub fn parse_ordering(raw: Option<&str>, allowed: &[&str]) -> Vec<OrderingField> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let (field, descending) = match part.strip_prefix('-') {
                Some(field) => (field, true),
                None => (part, false),
            };

            allowed.contains(&field).then(|| OrderingField {
                field: field.to_string(),
                descending,
            })
        })
        .collect()
}

/// Applies parsed ordering to a select, always finishing with `id` ascending.
///
/// `column` maps a field name to the column it sorts by; fields it maps to `None` are
/// skipped so callers can sort those in memory.
pub fn apply_ordering<E, F>(
    mut select: Select<E>,
    ordering: &[OrderingField],
    column: F,
    id: E::Column,
) -> Select<E>
where
    E: EntityTrait,
    F: Fn(&str) -> Option<E::Column>,
{
    for field in ordering {
        if let Some(col) = column(&field.field) {
            let order = if field.descending {
                Order::Desc
            } else {
                Order::Asc
            };
            select = select.order_by(col, order);
        }
    }

    select.order_by(id, Order::Asc)
}

/// Normalises a `search` parameter, treating blank input as absent.
pub fn search_term(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
}

/// Start and end (exclusive) of a UTC calendar day.
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    (start, start + chrono::Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_directions_and_drops_unknown_fields() {
        let fields = parse_ordering(Some("-distance, bogus,id"), &["distance", "id"]);

        assert_eq!(
            fields,
            vec![
                OrderingField {
                    field: "distance".to_string(),
                    descending: true
                },
                OrderingField {
                    field: "id".to_string(),
                    descending: false
                },
            ]
        );
    }

    #[test]
    fn missing_ordering_is_empty() {
        assert!(parse_ordering(None, &["id"]).is_empty());
        assert!(parse_ordering(Some(" , "), &["id"]).is_empty());
    }

    #[test]
    fn blank_search_is_absent() {
        assert_eq!(search_term(Some("   ")), None);
        assert_eq!(search_term(Some(" Kyiv ")), Some("Kyiv".to_string()));
    }

    #[test]
    fn day_bounds_cover_one_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let (start, end) = day_bounds(date);

        assert_eq!(start.to_rfc3339(), "2026-03-01T00:00:00+00:00");
        assert_eq!(end - start, chrono::Duration::days(1));
    }
}
