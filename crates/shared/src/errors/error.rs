use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub status: u16,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub errors: BTreeMap<String, String>,
}
