//! The minibuffer: a short web view under the buffer, scripted by the core.

use shellport_common::CallbackId;

#[derive(Debug)]
pub struct Minibuffer {
    window_id: String,
    callback_count: u64,
    height: u32,
}

impl Minibuffer {
    pub fn new(window_id: impl Into<String>, height: u32) -> Self {
        Self {
            window_id: window_id.into(),
            callback_count: 0,
            height,
        }
    }

    pub fn window_id(&self) -> &str {
        &self.window_id
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    /// Allocate the id for the next evaluation. Ids start at 1.
    pub fn next_callback(&mut self) -> CallbackId {
        self.callback_count += 1;
        CallbackId(self.callback_count)
    }

    pub fn callback_count(&self) -> u64 {
        self.callback_count
    }
}

/// Decode a script result as returned by the engine.
///
/// `None` for null, undefined and empty results: those are never reported.
/// Text that is not JSON is passed on as a string.
pub fn decode_script_result(raw: &str) -> Option<serde_json::Value> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "undefined" {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Null) => None,
        Ok(value) => Some(value),
        Err(_) => Some(serde_json::Value::String(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn callback_ids_increase_per_minibuffer() {
        let mut first = Minibuffer::new("w1", 20);
        let mut second = Minibuffer::new("w2", 20);
        assert_eq!(first.next_callback(), CallbackId(1));
        assert_eq!(first.next_callback(), CallbackId(2));
        assert_eq!(second.next_callback(), CallbackId(1));
        assert_eq!(first.callback_count(), 2);
    }

    #[test]
    fn null_results_are_dropped() {
        assert_eq!(decode_script_result("null"), None);
        assert_eq!(decode_script_result(""), None);
        assert_eq!(decode_script_result("undefined"), None);
    }

    #[test]
    fn results_decode_as_json() {
        assert_eq!(decode_script_result("42"), Some(json!(42)));
        assert_eq!(decode_script_result(r#""hi""#), Some(json!("hi")));
        assert_eq!(decode_script_result(r#"{"a":[1]}"#), Some(json!({"a": [1]})));
        assert_eq!(decode_script_result("false"), Some(json!(false)));
        assert_eq!(decode_script_result("bare text"), Some(json!("bare text")));
    }

    #[test]
    fn height_is_adjustable() {
        let mut minibuffer = Minibuffer::new("w1", 20);
        minibuffer.set_height(64);
        assert_eq!(minibuffer.height(), 64);
        assert_eq!(minibuffer.window_id(), "w1");
    }
}
