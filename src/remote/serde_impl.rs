//! Serde support for [`RemoteData`] (feature-gated)
//!
//! The wire shape is a tagged object keyed on `"type"`:
//!
//! ```text
//! {"type": "NotAsked"}
//! {"type": "Loading"}
//! {"type": "Failure", "error": ...}
//! {"type": "Success", "value": ...}
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::RemoteData;

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum Repr<T, E> {
    NotAsked,
    Loading,
    Failure { error: E },
    Success { value: T },
}

impl<T, E> Serialize for RemoteData<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self.as_ref() {
            RemoteData::NotAsked => Repr::NotAsked,
            RemoteData::Loading => Repr::Loading,
            RemoteData::Failure(error) => Repr::Failure { error },
            RemoteData::Success(value) => Repr::Success { value },
        };
        repr.serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for RemoteData<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::NotAsked => RemoteData::NotAsked,
            Repr::Loading => RemoteData::Loading,
            Repr::Failure { error } => RemoteData::Failure(error),
            Repr::Success { value } => RemoteData::Success(value),
        })
    }
}
