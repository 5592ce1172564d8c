//! Frontend Models
//!
//! Data structures matching the AS400 web API payloads.

use serde::{Deserialize, Serialize};

/// Part master record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Part number, the immutable business key (1..=99999)
    pub id: u32,
    /// Display name
    pub name: String,
}

/// Response body of `GET /api/parts`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PartListResponse {
    pub items: Vec<Part>,
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// One table row of `GET /api/tables` (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableInfo {
    pub table_name: String,
    pub table_type: String,
    pub table_text: String,
}

/// Response body of `GET /api/tables`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableListResponse {
    pub tables: Vec<TableInfo>,
}
