//! Date prefix extraction from frontmatter.

use chrono::NaiveDate;
use regex::Regex;
use serde_yaml::Value;
use std::sync::LazyLock;

use crate::document::{Document, DocumentError};

/// YAML 1.1 timestamp: `YYYY-MM-DD`, or `YYYY-M-D` followed by a time and optional zone.
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:([0-9]{4})-([0-9]{2})-([0-9]{2})|([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})(?:[Tt]|[ \t]+)[0-9]{1,2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]*)?(?:[ \t]*(?:Z|[-+][0-9]{1,2}(?::[0-9]{2})?))?)$",
    )
    .unwrap()
});

/// Characters of a plain string value kept as the prefix.
const PREFIX_LEN: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error(transparent)]
    Frontmatter(#[from] DocumentError),
    #[error("not a calendar date: {0}")]
    InvalidDate(String),
}

/// Date prefix for `doc`, from the first of `fields` holding a non-empty value.
///
/// Timestamp-shaped values are formatted `YYYY-MM-DD`; other strings and
/// numbers are cut to their first 10 characters. `Ok(None)` when there is no
/// frontmatter, no such field, or the value is not a scalar.
pub fn extract_date(doc: &Document, fields: &[String]) -> Result<Option<String>, DateError> {
    let Some(fm) = doc.frontmatter() else {
        return Ok(None);
    };
    let map = fm.fields()?;

    let value = fields
        .iter()
        .filter_map(|f| map.get(f.as_str()))
        .find(|v| is_set(v));

    match value {
        Some(Value::String(s)) => format_date(s).map(Some),
        Some(Value::Number(n)) => Ok(Some(truncate(&n.to_string()))),
        _ => Ok(None),
    }
}

/// Mirrors "truthy" for frontmatter values: empty, null, false and zero fall through.
fn is_set(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::Sequence(s) => !s.is_empty(),
        Value::Mapping(m) => !m.is_empty(),
        Value::Tagged(_) => true,
    }
}

fn format_date(s: &str) -> Result<String, DateError> {
    let Some(caps) = TIMESTAMP_RE.captures(s.trim()) else {
        return Ok(truncate(s));
    };
    let part = |a: usize, b: usize| {
        caps.get(a)
            .or_else(|| caps.get(b))
            .and_then(|m| m.as_str().parse::<u32>().ok())
    };
    let (year, month, day) = (part(1, 4), part(2, 5), part(3, 6));
    match (year, month, day) {
        (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y as i32, m, d)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .ok_or_else(|| DateError::InvalidDate(s.to_string())),
        _ => Err(DateError::InvalidDate(s.to_string())),
    }
}

fn truncate(s: &str) -> String {
    s.chars().take(PREFIX_LEN).collect()
}
