use crate::models::ErrorRecord;
use serde::{Deserialize, Serialize};

/// Session-storage key holding the error trail (JSON array, newest last).
pub(crate) const ERRORS_KEY: &str = "admin_errors";

/// At most this many error records are kept; the oldest is evicted first.
pub(crate) const MAX_ERROR_RECORDS: usize = 10;

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

pub(crate) fn load_json_from_session<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let storage = session_storage()?;
    let json = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_session<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(key, &json);
        }
    }
}

/// Append to a capped, chronologically ordered buffer.
pub(crate) fn append_capped<T>(mut items: Vec<T>, item: T, max: usize) -> Vec<T> {
    items.push(item);
    if items.len() > max {
        let excess = items.len() - max;
        items.drain(..excess);
    }
    items
}

pub(crate) fn load_error_records() -> Vec<ErrorRecord> {
    load_json_from_session::<Vec<ErrorRecord>>(ERRORS_KEY).unwrap_or_default()
}

/// Record an error in the session trail, evicting the oldest past the cap.
pub(crate) fn record_error(record: ErrorRecord) {
    let next = append_capped(load_error_records(), record, MAX_ERROR_RECORDS);
    save_json_to_session(ERRORS_KEY, &next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_capped_under_cap_keeps_order() {
        let items = append_capped(vec![1, 2], 3, 10);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_append_capped_evicts_oldest_first() {
        let mut items: Vec<u32> = Vec::new();
        for i in 0..11 {
            items = append_capped(items, i, 10);
        }
        assert_eq!(items.len(), 10);
        assert_eq!(items.first(), Some(&1));
        assert_eq!(items.last(), Some(&10));
    }

    #[test]
    fn test_append_capped_recovers_from_oversized_input() {
        // A buffer written by an older page may exceed the cap.
        let oversized: Vec<u32> = (0..15).collect();
        let items = append_capped(oversized, 15, 10);
        assert_eq!(items, (6..16).collect::<Vec<u32>>());
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear_error_records() {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(ERRORS_KEY);
        }
    }

    fn rec(n: usize) -> ErrorRecord {
        ErrorRecord {
            timestamp: format!("2024-01-01T00:00:{n:02}.000Z"),
            message: format!("error {n}"),
            url: "http://localhost/admin".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_record_error_roundtrip() {
        clear_error_records();
        assert!(load_error_records().is_empty());

        record_error(rec(1));
        let loaded = load_error_records();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].message, "error 1");

        clear_error_records();
    }

    #[wasm_bindgen_test]
    fn test_error_trail_never_exceeds_cap() {
        clear_error_records();

        for n in 0..11 {
            record_error(rec(n));
        }

        let loaded = load_error_records();
        assert_eq!(loaded.len(), MAX_ERROR_RECORDS);
        assert_eq!(loaded[0].message, "error 1");
        assert_eq!(loaded[9].message, "error 10");

        clear_error_records();
    }
}
