// Typed views of loaded data documents

use std::fmt;
use std::marker::PhantomData;

use hashbrown::HashMap;
use serde::de::{DeserializeOwned, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use glyphswap_core::case::fold_case;

use crate::encoder::EncoderError;
use crate::loader::Document;

/// Deserialize a loaded document into a typed value.
pub fn parse_document<T: DeserializeOwned>(
    name: &'static str,
    document: Document,
) -> Result<T, EncoderError> {
    serde_json::from_value(document).map_err(|e| EncoderError::InvalidDocument {
        name,
        message: e.to_string(),
    })
}

/// Take the next document from an install batch.
pub fn next_document(
    documents: &mut impl Iterator<Item = Document>,
    name: &'static str,
) -> Result<Document, EncoderError> {
    documents.next().ok_or(EncoderError::MissingDocument(name))
}

/// Key/value entries in document order.
///
/// Accepts either a JSON object or an array of `[key, value]` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedEntries<V>(pub Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedEntries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = OrderedEntries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object or an array of [key, value] pairs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(OrderedEntries(entries))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(entry) = seq.next_element::<(String, V)>()? {
                    entries.push(entry);
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_any(EntriesVisitor(PhantomData))
    }
}

/// A dictionary from case-folded words to lists of entries.
pub type Dictionary<T> = HashMap<String, Vec<T>>;

/// Build a dictionary from `{word: [entry, ...]}` entries, folding the
/// keys. Entries of keys that fold together are appended in document order.
pub fn fold_entries<T>(entries: OrderedEntries<Vec<T>>) -> Dictionary<T> {
    let mut dictionary: Dictionary<T> = HashMap::with_capacity(entries.0.len());
    for (word, values) in entries.0 {
        dictionary.entry(fold_case(&word)).or_default().extend(values);
    }
    dictionary
}

/// Parse a `{word: [entry, ...]}` document into a folded dictionary.
pub fn parse_dictionary<T: DeserializeOwned>(
    name: &'static str,
    document: Document,
) -> Result<Dictionary<T>, EncoderError> {
    let entries: OrderedEntries<Vec<T>> = parse_document(name, document)?;
    Ok(fold_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_typed_document() {
        let table: OrderedEntries<Vec<String>> =
            parse_document("eng-kana", json!({"hello": ["ハロー"]})).unwrap();
        assert_eq!(
            table.0,
            vec![("hello".to_string(), vec!["ハロー".to_string()])]
        );
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        let err =
            parse_document::<OrderedEntries<Vec<String>>>("eng-kana", json!([1, 2])).unwrap_err();
        assert!(err.to_string().starts_with("invalid eng-kana document"));
    }

    #[test]
    fn next_document_reports_missing() {
        let mut docs = vec![json!({})].into_iter();
        assert!(next_document(&mut docs, "first").is_ok());
        let err = next_document(&mut docs, "second").unwrap_err();
        assert_eq!(err.to_string(), "missing data document: second");
    }

    #[test]
    fn ordered_entries_from_object_keep_order() {
        let entries: OrderedEntries<u32> =
            parse_document("t", json!({"zebra": 1, "apple": 2, "mango": 3})).unwrap();
        let keys: Vec<&str> = entries.0.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn ordered_entries_from_pairs() {
        let entries: OrderedEntries<Vec<String>> =
            parse_document("t", json!([["HELLO", ["həˈloʊ"]], ["world", ["wɝld"]]])).unwrap();
        assert_eq!(entries.0.len(), 2);
        assert_eq!(entries.0[0].0, "HELLO");
    }

    #[test]
    fn folded_keys_append() {
        let dictionary: Dictionary<String> = parse_dictionary(
            "t",
            json!([["Read", ["riːd"]], ["READ", ["rɛd"]], ["other", []]]),
        )
        .unwrap();
        assert_eq!(dictionary["read"], vec!["riːd".to_string(), "rɛd".to_string()]);
        assert!(dictionary.contains_key("other"));
    }
}
