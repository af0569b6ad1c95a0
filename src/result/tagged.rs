//! Tagged-object serde representation for `Result` (feature-gated)
//!
//! Serde's built-in form for `Result` is externally tagged (`{"Ok": ...}`).
//! Use this module with `#[serde(with = "tidemark::result::tagged")]` to get the
//! same shape [`RemoteData`](crate::RemoteData) uses instead:
//!
//! ```text
//! {"type": "Ok", "value": ...}
//! {"type": "Err", "error": ...}
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(Serialize, Deserialize)]
//! struct Response {
//!     #[serde(with = "tidemark::result::tagged")]
//!     outcome: Result<u32, String>,
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum Repr<T, E> {
    Ok { value: T },
    Err { error: E },
}

/// Serialize a `Result` as a tagged object.
pub fn serialize<T, E, S>(result: &Result<T, E>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    E: Serialize,
    S: Serializer,
{
    match result {
        Ok(value) => Repr::<&T, &E>::Ok { value }.serialize(serializer),
        Err(error) => Repr::<&T, &E>::Err { error }.serialize(serializer),
    }
}

/// Deserialize a `Result` from a tagged object.
pub fn deserialize<'de, T, E, D>(deserializer: D) -> Result<Result<T, E>, D::Error>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(match Repr::deserialize(deserializer)? {
        Repr::Ok { value } => Ok(value),
        Repr::Err { error } => Err(error),
    })
}
