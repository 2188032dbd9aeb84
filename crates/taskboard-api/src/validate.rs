//! Request-level validation. Everything here runs before the store is touched.

use taskboard_types::api::IdInput;

use crate::error::{AppError, AppResult, Entity};

/// Largest integer a JSON client can send as a float without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Parse an id from a path segment or query value.
///
/// Accepts decimal digits only (surrounding whitespace ignored) and rejects
/// zero, since ids start at 1.
pub fn parse_id(raw: &str, entity: Entity) -> AppResult<u64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidId(entity));
    }
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidId(entity)),
    }
}

/// Resolve an id sent in a JSON body. Integral floats such as `2.0` are accepted.
pub fn id_from_input(input: &IdInput, entity: Entity) -> AppResult<u64> {
    match input {
        IdInput::Text(text) => parse_id(text, entity),
        IdInput::Number(number) => {
            if let Some(id) = number.as_u64() {
                return if id > 0 { Ok(id) } else { Err(AppError::InvalidId(entity)) };
            }
            match number.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= 1.0 && f <= MAX_SAFE_INTEGER => Ok(f as u64),
                _ => Err(AppError::InvalidId(entity)),
            }
        }
    }
}

/// Optional body id: absent or `null` stays `None`.
pub fn optional_id(input: Option<&IdInput>, entity: Entity) -> AppResult<Option<u64>> {
    input.map(|i| id_from_input(i, entity)).transpose()
}

/// Trimmed, non-empty text, or `MissingField(message)`.
pub fn required_text(value: Option<String>, message: &'static str) -> AppResult<String> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(AppError::MissingField(message)),
    }
}
