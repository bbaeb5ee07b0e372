//! Request body validation.
//!
//! Bodies deserialize straight into typed request structs. A body that does
//! not fit is reported as a [`Violation`] naming the offending field, in the
//! `{"path": ..., "message": ...}` shape the storefront pages expect.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, error::Category};

/// One failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A JSON request body with its own 400 message.
pub trait RequestBody: DeserializeOwned {
    /// `message` of the 400 response when the body does not fit.
    const INVALID_MESSAGE: &'static str;
}

/// Why a body could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyError {
    /// Not JSON at all.
    Malformed(String),
    /// Valid JSON of the wrong shape.
    Invalid(Violation),
}

/// Deserialize a JSON body into `T`.
///
/// An empty body reads as `{}`, so a missing field is reported as such
/// rather than as a parse error.
///
/// # Errors
///
/// Returns `BodyError::Malformed` for broken JSON and `BodyError::Invalid`
/// naming the first field that does not fit.
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, BodyError> {
    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        bytes
    };

    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let inner = err.into_inner();
        match inner.classify() {
            Category::Data => BodyError::Invalid(violation(&path, &inner)),
            Category::Io | Category::Syntax | Category::Eof => {
                BodyError::Malformed(format!("Invalid JSON body: {inner}"))
            }
        }
    })?;
    deserializer
        .end()
        .map_err(|e| BodyError::Malformed(format!("Invalid JSON body: {e}")))?;

    Ok(value)
}

/// Turn a serde data error at `path` into a violation.
///
/// serde reports a missing field against its parent, so the field name is
/// lifted out of the message and appended to the path.
fn violation(path: &str, err: &serde_json::Error) -> Violation {
    let path = if path == "." { "" } else { path };
    let text = err.to_string();
    let message = text.split(" at line ").next().unwrap_or(&text);

    if let Some(field) = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'))
    {
        let path = if path.is_empty() {
            field.to_string()
        } else {
            format!("{path}.{field}")
        };
        return Violation::new(path, "Required");
    }

    Violation::new(path, message)
}

/// Parse the leading integer of a string, the way browsers coerce ids.
///
/// Leading whitespace and a sign are accepted and parsing stops at the first
/// non-digit, so `"12abc"` is 12. Returns `None` when no digits lead the
/// string or the value does not fit in an `i32`.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Coerce a path segment to an entity id.
#[must_use]
pub fn parse_id<T: From<i32>>(raw: &str) -> Option<T> {
    parse_leading_int(raw).map(T::from)
}

/// `deserialize_with` for ids that may arrive as a number or a numeric string.
///
/// # Errors
///
/// Fails for fractions, out-of-range numbers, strings without leading
/// digits and any other JSON type.
pub fn lenient_id<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<i32>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(T::from)
            .ok_or_else(|| D::Error::custom(format!("expected integer, received {n}"))),
        Value::String(s) => {
            parse_id(&s).ok_or_else(|| D::Error::custom("expected integer, received NaN"))
        }
        other => Err(D::Error::custom(format!(
            "expected integer, received {other}"
        ))),
    }
}
