//! Toast notification item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A transient message; `duration_ms` is already clamped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastItem {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
    pub duration_ms: u64,
    pub created_at: DateTime<Utc>,
}
