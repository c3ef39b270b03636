pub mod folder;
pub mod snippet;
pub mod tags;

pub use folder::Folder;
pub use snippet::{Content, Snippet};
pub use tags::Tag;

use serde::{Deserialize, Deserializer};

/// massCode sends `null` for unset strings and lists; treat it like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
