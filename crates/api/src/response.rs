//! Success-response envelope.
//!
//! Resource handlers return `Json(DataResponse { data })` rather than the
//! payload directly, so every success body has the same `{ "data": ... }`
//! shape the error envelope mirrors with `{ "error", "code" }`. Typed
//! instead of `json!` so a payload that stops serializing fails at compile
//! time.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
