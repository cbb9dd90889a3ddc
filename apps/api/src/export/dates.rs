//! Date formatting shared by the normalizer and the templates.
//!
//! Unparsable input is never an error: the original text is returned unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// A stored date: either a native column value or whatever text the editor saved.
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    Native(NaiveDate),
    Text(String),
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue::Native(date)
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        DateValue::Text(text.to_string())
    }
}

impl From<String> for DateValue {
    fn from(text: String) -> Self {
        DateValue::Text(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `MM/YYYY`, shown on the rendered resume.
    Display,
    /// `YYYY-MM-DD`, stored in the render model.
    Canonical,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Display => "%m/%Y",
            DateStyle::Canonical => "%Y-%m-%d",
        }
    }
}

pub fn format_date(value: &DateValue, style: DateStyle) -> String {
    match value {
        DateValue::Native(date) => date.format(style.pattern()).to_string(),
        DateValue::Text(text) => match parse_date_text(text) {
            Some(date) => date.format(style.pattern()).to_string(),
            None => text.clone(),
        },
    }
}

/// Accepts full dates, timestamps and month-precision forms.
/// Month-precision input is pinned to the first of the month.
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    // Calendar date in the timestamp's own offset, not converted to UTC.
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDate::parse_from_str(&format!("01/{text}"), "%d/%m/%Y").ok()
}
