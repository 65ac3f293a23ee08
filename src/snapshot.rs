use std::collections::BTreeMap;

use crate::{
    error::{BankError, BankResult},
    mark::Mark,
};

/// Encode a mark as an opaque URL-safe string (JSON then hex), the format
/// the authoring explorer shares and stores.
pub fn encode_mark(mark: &Mark) -> BankResult<String> {
    let json = serde_json::to_string(mark).map_err(|e| BankError::serde(e.to_string()))?;
    Ok(hex::encode(json))
}

/// Decode a shared snapshot string. Any malformed input is a
/// [`BankError::Decode`]; callers are expected to fall back rather than
/// fail hard.
pub fn decode_mark(encoded: &str) -> BankResult<Mark> {
    let bytes = hex::decode(encoded.trim())
        .map_err(|e| BankError::decode(format!("not a hex payload: {e}")))?;
    let json = String::from_utf8(bytes)
        .map_err(|_| BankError::decode("snapshot payload is not utf-8"))?;
    serde_json::from_str(&json).map_err(|e| BankError::decode(format!("malformed mark: {e}")))
}

/// Key-value persistence for named snapshots. The core never talks to a
/// browser store; the rendering layer injects an implementation.
pub trait SnapshotStore {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&mut self, name: &str, encoded: String);
    fn delete(&mut self, name: &str);
    fn names(&self) -> Vec<String>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>, // stable iteration order for names()
}

impl SnapshotStore for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }

    fn set(&mut self, name: &str, encoded: String) {
        self.entries.insert(name.to_string(), encoded);
    }

    fn delete(&mut self, name: &str) {
        self.entries.remove(name);
    }

    fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::Year,
        mark::{Blob, ChartSpec, ExtendMode},
    };

    fn sample_mark() -> Mark {
        Mark {
            blobs: vec![Blob::new("sink", 80.0), Blob::new("carbon", 100.0)],
            limits: vec![0, 2],
            labels: vec!["carbon".to_string()],
            chart: Some(ChartSpec {
                min_year: Year(1900),
                max_year: Year(2100),
                stop_at: Some(Year(2030)),
                extend: Some(ExtendMode::Reduce),
                steady: Some(5),
                label_years: vec![Year(2017)],
            }),
            next: None,
        }
    }

    #[test]
    fn roundtrip_preserves_every_field() {
        let mark = sample_mark();
        let decoded = decode_mark(&encode_mark(&mark).unwrap()).unwrap();
        assert_eq!(decoded, mark);
    }

    #[test]
    fn encoded_payload_is_url_safe() {
        let encoded = encode_mark(&sample_mark()).unwrap();
        assert!(encoded.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn decode_rejects_non_hex_input() {
        assert!(matches!(
            decode_mark("definitely not hex"),
            Err(BankError::Decode(_))
        ));
    }

    #[test]
    fn decode_rejects_hex_of_garbage_json() {
        let encoded = hex::encode("{\"blobs\": 12}");
        assert!(matches!(decode_mark(&encoded), Err(BankError::Decode(_))));
    }

    #[test]
    fn memory_store_crud() {
        let mut store = MemoryStore::default();
        store.set("a", "1".to_string());
        store.set("b", "2".to_string());
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert_eq!(store.names(), vec!["a".to_string(), "b".to_string()]);
        store.delete("a");
        assert!(store.get("a").is_none());
    }
}
