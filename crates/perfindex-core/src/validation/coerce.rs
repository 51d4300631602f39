//! Boolean-flag coercion for `extracurricular`
//!
//! Accepted representations:
//! - boolean: unchanged
//! - integer: 0 or 1 only
//! - string (case-insensitive): true/1/yes and false/0/no
//!
//! Everything else is rejected. An absent value passes through as `None`;
//! the field validator reports it as missing.

use super::error::ValidationError;
use crate::record::{Field, RawValue};

const TRUE_WORDS: [&str; 3] = ["true", "1", "yes"];
const FALSE_WORDS: [&str; 3] = ["false", "0", "no"];

/// Coerce the raw `extracurricular` value into a canonical boolean
pub fn coerce_flag(value: Option<&RawValue>) -> Result<Option<bool>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let coerced = match value {
        RawValue::Bool(b) => *b,
        RawValue::Integer(0) => false,
        RawValue::Integer(1) => true,
        RawValue::Integer(_) => {
            return Err(ValidationError::range(
                Field::Extracurricular,
                "If provided as integer, must be 0 or 1",
            ))
        }
        RawValue::Text(text) => {
            let lowered = text.to_lowercase();
            if TRUE_WORDS.contains(&lowered.as_str()) {
                true
            } else if FALSE_WORDS.contains(&lowered.as_str()) {
                false
            } else {
                return Err(ValidationError::type_coercion(
                    Field::Extracurricular,
                    "Must be a boolean value (0, 1, True, False, Yes, No)",
                ));
            }
        }
        RawValue::Real(_) | RawValue::Other(_) => {
            return Err(ValidationError::type_coercion(
                Field::Extracurricular,
                "Invalid type",
            ))
        }
    };

    tracing::trace!(kind = value.kind(), coerced, "coerce_flag");
    Ok(Some(coerced))
}
