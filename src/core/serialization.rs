//! Canonical saved-calculation payloads and serialization helpers.
//!
//! These types define the stable serde payload an external document store
//! persists verbatim: the raw form fields as entered, the full computed
//! report, and save metadata. The crate performs no I/O; building, storing,
//! and quota-limiting records is the surrounding application's job.
//!
//! # Examples
//! ```rust
//! use payoffkit::core::serialization::{from_json, to_json_pretty, CalculationRecord};
//! use payoffkit::engine::analyze_form;
//! use payoffkit::instruments::{CalculationForm, PositionForm};
//!
//! let form = CalculationForm {
//!     stock_price: "100".to_string(),
//!     positions: vec![PositionForm {
//!         id: "1".to_string(),
//!         option_type: "buyCall".to_string(),
//!         contracts: "1".to_string(),
//!         strike_price: "100".to_string(),
//!         option_price: "5".to_string(),
//!     }],
//! };
//! let results = analyze_form(&form).unwrap();
//!
//! let record = CalculationRecord {
//!     id: None,
//!     user_id: "user-42".to_string(),
//!     stock_price: form.stock_price.clone(),
//!     positions: form.positions.clone(),
//!     results,
//!     created_at: "2026-08-06T09:30:00Z".to_string(),
//!     calculation_notes: Some("covered call study".to_string()),
//! };
//!
//! let json = to_json_pretty(&record).expect("json serialization");
//! let decoded: CalculationRecord = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, record);
//! ```

use serde::de::DeserializeOwned;

use crate::engine::StrategyReport;
use crate::instruments::PositionForm;

/// Persisted calculator session.
///
/// Stores the raw form fields (not the parsed legs) so a loaded record
/// repopulates the form exactly as the user left it, alongside the report
/// computed from them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    /// Store-assigned document id, absent until first save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning user.
    pub user_id: String,
    /// Raw stock price field.
    pub stock_price: String,
    /// Raw position rows.
    pub positions: Vec<PositionForm>,
    /// Report computed from the fields above.
    pub results: StrategyReport,
    /// RFC 3339 timestamp, stamped by the store on save.
    pub created_at: String,
    /// Optional free-text note attached at save time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_notes: Option<String>,
}

/// Serialize a value to compact JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serialize a value to pretty-printed JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserialize a value from JSON.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}

/// Serialize a value to MessagePack bytes.
pub fn to_msgpack<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, rmp_serde::encode::Error> {
    rmp_serde::to_vec_named(value)
}

/// Deserialize a value from MessagePack bytes.
pub fn from_msgpack<T: DeserializeOwned>(payload: &[u8]) -> Result<T, rmp_serde::decode::Error> {
    rmp_serde::from_slice(payload)
}
