use serde::{Deserialize, Deserializer};

/// Distinguishes an explicit `null` from an absent field.
///
/// Pair with `#[serde(default)]` on an `Option<Option<T>>` field: an absent
/// key stays `None`, `null` becomes `Some(None)` and a value becomes
/// `Some(Some(value))`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
