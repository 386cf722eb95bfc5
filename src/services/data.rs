//! Data Access Service
//!
//! Reads whole collections from the clinic's realtime database, either through
//! the JS SDK bridge on the hosting page or the database's REST endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;
use crate::error::DataError;
use crate::models::AppointmentRecord;

/// Collection the admin view lists
pub const APPOINTMENTS_COLLECTION: &str = "appointments";

/// Characters escaped in a collection path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Retrieves every record of a named collection
///
/// Futures are not `Send` (browser fetches), but sources themselves are
/// shareable so views can hold them in reactive closures.
#[async_trait(?Send)]
pub trait DataSource: Send + Sync {
    async fn get_all_data(&self, collection: &str) -> Result<Vec<Value>, DataError>;
}

/// Shared handle passed to views
pub type SharedDataSource = Arc<dyn DataSource>;

/// Pick the data source for this deployment
pub fn data_source_for(config: &SiteConfig) -> SharedDataSource {
    match config.database_url() {
        Some(url) => {
            tracing::info!(url, "using realtime database REST source");
            Arc::new(RealtimeDbSource::new(url))
        }
        None => {
            tracing::info!("using JS data bridge");
            Arc::new(JsBridgeSource)
        }
    }
}

/// Fetch and decode the appointments collection
///
/// All-or-nothing: one undecodable record fails the whole fetch.
pub async fn fetch_appointments(source: &dyn DataSource) -> Result<Vec<AppointmentRecord>, DataError> {
    let raw = source.get_all_data(APPOINTMENTS_COLLECTION).await?;
    raw.into_iter()
        .map(|value| serde_json::from_value(value).map_err(DataError::from))
        .collect()
}

/// Normalize a collection snapshot into a list of record objects
///
/// `null` is an empty collection; keyed objects and arrays get their key or
/// index as `id` when the record carries none.
pub fn normalize_snapshot(snapshot: Value) -> Result<Vec<Value>, DataError> {
    match snapshot {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .filter(|(_, value)| !value.is_null())
            .map(|(index, value)| with_id(value, index.to_string()))
            .collect()),
        Value::Object(entries) => Ok(entries
            .into_iter()
            .map(|(key, value)| with_id(value, key))
            .collect()),
        other => Err(DataError::Decode(format!("expected a collection, got {}", other))),
    }
}

fn with_id(value: Value, key: String) -> Value {
    match value {
        Value::Object(mut fields) => {
            fields.entry("id").or_insert(Value::String(key));
            Value::Object(fields)
        }
        other => other,
    }
}

// ========================
// JS SDK bridge
// ========================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "clinicData"], js_name = getAllData)]
    async fn bridge_get_all_data(collection: &str) -> Result<JsValue, JsValue>;
}

/// Calls `window.clinicData.getAllData(collection)` provided by the hosting page
#[derive(Debug, Clone, Copy, Default)]
pub struct JsBridgeSource;

#[async_trait(?Send)]
impl DataSource for JsBridgeSource {
    async fn get_all_data(&self, collection: &str) -> Result<Vec<Value>, DataError> {
        let result = bridge_get_all_data(collection)
            .await
            .map_err(|e| DataError::Service(js_error_message(&e)))?;
        let snapshot: Value =
            serde_wasm_bindgen::from_value(result).map_err(|e| DataError::Decode(e.to_string()))?;
        normalize_snapshot(snapshot)
    }
}

/// `message` of a rejected promise's value, else its string form
fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

// ========================
// REST endpoint
// ========================

/// `GET {base}/{collection}.json` against the Realtime Database REST API
#[derive(Debug, Clone)]
pub struct RealtimeDbSource {
    base_url: String,
}

impl RealtimeDbSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}.json", self.base_url, utf8_percent_encode(collection, PATH_SEGMENT))
    }
}

#[async_trait(?Send)]
impl DataSource for RealtimeDbSource {
    async fn get_all_data(&self, collection: &str) -> Result<Vec<Value>, DataError> {
        let url = self.collection_url(collection);
        tracing::debug!(%url, "fetching collection");

        let response = reqwest::get(&url).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = rest_error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(DataError::Status { status: status.as_u16(), message });
        }

        let snapshot: Value = response.json().await?;
        normalize_snapshot(snapshot)
    }
}

/// The REST API reports failures as `{"error": "..."}`
fn rest_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// Canned source that records which collections were requested
    struct FakeSource {
        result: Result<Vec<Value>, DataError>,
        requested: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(result: Result<Vec<Value>, DataError>) -> Self {
            Self { result, requested: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl DataSource for FakeSource {
        async fn get_all_data(&self, collection: &str) -> Result<Vec<Value>, DataError> {
            self.requested.lock().unwrap().push(collection.to_string());
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_fetch_decodes_records_in_order() {
        let source = FakeSource::new(Ok(vec![
            json!({ "id": "b", "patientFullName": "Jane Doe" }),
            json!({ "id": "a", "checkedIn": true }),
        ]));

        let records = fetch_appointments(&source).await.expect("fetch failed");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "b");
        assert_eq!(records[0].patient_full_name.as_deref(), Some("Jane Doe"));
        assert!(records[1].is_checked_in());
        assert_eq!(*source.requested.lock().unwrap(), vec!["appointments"]);
    }

    #[tokio::test]
    async fn test_fetch_empty_collection() {
        let source = FakeSource::new(Ok(Vec::new()));
        assert!(fetch_appointments(&source).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_propagates_source_error() {
        let source = FakeSource::new(Err(DataError::Service("network down".into())));
        let err = fetch_appointments(&source).await.unwrap_err();
        assert_eq!(err, DataError::Service("network down".into()));
    }

    #[tokio::test]
    async fn test_one_bad_record_fails_whole_fetch() {
        let source = FakeSource::new(Ok(vec![json!({ "id": "ok" }), json!({ "patientFullName": "no id" })]));
        let err = fetch_appointments(&source).await.unwrap_err();
        assert!(matches!(err, DataError::Decode(ref msg) if msg.contains("id")), "got {:?}", err);
    }

    #[test]
    fn test_normalize_null_is_empty() {
        assert!(normalize_snapshot(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_keyed_object() {
        let records = normalize_snapshot(json!({
            "-Nx1": { "patientFullName": "Jane" },
            "-Nx2": { "id": "explicit", "status": "done" }
        }))
        .unwrap();

        assert_eq!(records[0]["id"], "-Nx1");
        assert_eq!(records[1]["id"], "explicit");
    }

    #[test]
    fn test_normalize_sparse_array() {
        let records = normalize_snapshot(json!([null, { "status": "a" }, { "id": "x" }])).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["id"], "1");
        assert_eq!(records[1]["id"], "x");
    }

    #[test]
    fn test_normalize_rejects_scalars() {
        assert!(matches!(normalize_snapshot(json!("nope")), Err(DataError::Decode(_))));
    }

    #[test]
    fn test_collection_url() {
        let source = RealtimeDbSource::new("https://demo.firebaseio.com/");
        assert_eq!(source.collection_url("appointments"), "https://demo.firebaseio.com/appointments.json");
        assert_eq!(source.collection_url("a b/c"), "https://demo.firebaseio.com/a%20b%2Fc.json");
    }

    #[test]
    fn test_rest_error_message() {
        assert_eq!(rest_error_message(r#"{"error":"Permission denied"}"#).as_deref(), Some("Permission denied"));
        assert_eq!(rest_error_message("<html>"), None);
    }
}
