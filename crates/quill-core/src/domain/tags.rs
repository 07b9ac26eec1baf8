//! Tag codec - converts the tag list to and from its stored column form.
//!
//! Tags are persisted as a JSON string array in a nullable text column.
//! An absent tag list is stored as NULL; an empty list is stored as `"[]"`
//! so that decode gives back exactly what encode was handed.

use crate::error::CodecError;

/// Serialize a tag list for storage. `None` stays NULL.
pub fn encode(tags: Option<&[String]>) -> Option<String> {
    // A string array always serializes; the fallible cases live on decode.
    tags.map(|t| serde_json::json!(t).to_string())
}

/// Parse the stored column form back into a tag list.
///
/// Fails with [`CodecError`] when the stored text is not a JSON string
/// array; callers surface that as a client-visible error instead of
/// panicking.
pub fn decode(stored: Option<&str>) -> Result<Option<Vec<String>>, CodecError> {
    match stored {
        None => Ok(None),
        Some(s) => serde_json::from_str::<Vec<String>>(s)
            .map(Some)
            .map_err(|e| CodecError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn absent_round_trips_as_null() {
        assert_eq!(encode(None), None);
        assert_eq!(decode(None).unwrap(), None);
    }

    #[test]
    fn empty_list_round_trips() {
        let tags = strings(&[]);
        let stored = encode(Some(&tags));
        assert_eq!(stored.as_deref(), Some("[]"));
        assert_eq!(decode(stored.as_deref()).unwrap(), Some(tags));
    }

    #[test]
    fn single_element_round_trips() {
        let tags = strings(&["rust"]);
        let stored = encode(Some(&tags));
        assert_eq!(decode(stored.as_deref()).unwrap(), Some(tags));
    }

    #[test]
    fn order_and_values_survive_the_round_trip() {
        let tags = strings(&["zeta", "alpha", "alpha", "m"]);
        let stored = encode(Some(&tags));
        assert_eq!(decode(stored.as_deref()).unwrap(), Some(tags));
    }

    #[test]
    fn malformed_stored_text_is_an_error() {
        assert!(decode(Some("not json")).is_err());
        assert!(decode(Some("{\"a\":1}")).is_err());
        assert!(decode(Some("[1, 2]")).is_err());
    }
}
