//! Console output for submitted records.
//!
//! In the browser the record is written once with `console.log` as a JS
//! object so it can be expanded in devtools. Native builds (tests) go
//! through the `log` facade instead.

use farm_core::record::SubmittedRecord;

/// Log a submitted record. Serialization failures are logged, never raised.
pub fn log_submission(record: &SubmittedRecord) {
    let json = match record.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize {} record: {}", record.metric_type, e);
            return;
        }
    };
    console_log_json(&record.log_prefix(), &json);
}

#[cfg(target_arch = "wasm32")]
fn console_log_json(prefix: &str, json: &str) {
    use wasm_bindgen::JsValue;

    let payload = js_sys::JSON::parse(json).unwrap_or_else(|_| JsValue::from_str(json));
    web_sys::console::log_2(&JsValue::from_str(prefix), &payload);
}

#[cfg(not(target_arch = "wasm32"))]
fn console_log_json(prefix: &str, json: &str) {
    log::info!("{} {}", prefix, json);
}
