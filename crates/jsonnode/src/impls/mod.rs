#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "serde_json")]
mod serde_json;

#[cfg(feature = "serde_json")]
use crate::{Literal, Number};

/// Build a number literal from JSON number text produced by `serde_json`.
///
/// The text becomes the literal's content unchanged.
#[cfg(feature = "serde_json")]
pub(crate) fn number_from_text(content: String) -> Literal {
    let value = if let Ok(u) = content.parse::<u64>() {
        Number::PositiveInteger(u)
    } else if let Ok(i) = content.parse::<i64>() {
        Number::from(i)
    } else {
        match content.parse::<f64>() {
            // Out-of-range exponents parse to infinity; the content still renders as written
            Ok(f) => Number::Float(f),
            Err(_) => {
                tracing::error!(content, "serde_json produced a malformed number");
                unreachable!("serde_json only produces valid JSON numbers, got `{content}`")
            }
        }
    };
    Literal::number_with_content(value, content)
}
