//! Parsing of `data-*` attribute overrides.
//!
//! Attribute lookup is abstracted as a closure so the same parsers run against
//! DOM elements in the browser and plain maps in tests.

use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttrError {
    #[error("{attr}: '{value}' is not a number")]
    InvalidNumber { attr: &'static str, value: String },
    #[error("{attr}: {value} is outside {min}..={max}")]
    OutOfRange {
        attr: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{attr}: unknown value '{value}'")]
    UnknownKeyword { attr: &'static str, value: String },
    #[error("{attr}: keyframe list needs at least two values")]
    TooFewKeyframes { attr: &'static str },
}

pub fn parse_f64(attr: &'static str, raw: &str) -> Result<f64, AttrError> {
    let v: f64 = raw.trim().parse().map_err(|_| AttrError::InvalidNumber {
        attr,
        value: raw.to_string(),
    })?;
    if !v.is_finite() {
        return Err(AttrError::InvalidNumber {
            attr,
            value: raw.to_string(),
        });
    }
    Ok(v)
}

pub fn parse_in_range(attr: &'static str, raw: &str, min: f64, max: f64) -> Result<f64, AttrError> {
    let v = parse_f64(attr, raw)?;
    if v < min || v > max {
        return Err(AttrError::OutOfRange {
            attr,
            value: v,
            min,
            max,
        });
    }
    Ok(v)
}

pub fn parse_bool(attr: &'static str, raw: &str) -> Result<bool, AttrError> {
    match raw.trim() {
        "" | "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(AttrError::UnknownKeyword {
            attr,
            value: other.to_string(),
        }),
    }
}

/// Comma-separated numbers, e.g. `"0, 25, 0"`.
pub fn parse_list(attr: &'static str, raw: &str) -> Result<SmallVec<[f64; 4]>, AttrError> {
    let values = raw
        .split(',')
        .map(|part| parse_f64(attr, part))
        .collect::<Result<SmallVec<[f64; 4]>, _>>()?;
    if values.len() < 2 {
        return Err(AttrError::TooFewKeyframes { attr });
    }
    Ok(values)
}
