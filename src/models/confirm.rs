//! Confirmation dialog request

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Please confirm";
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmVariant {
    #[default]
    Default,
    Danger,
}

/// What a call site asks for; everything but the message is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: Option<String>,
    pub message: String,
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
    pub variant: Option<ConfirmVariant>,
}

impl ConfirmOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_label = Some(confirm.into());
        self.cancel_label = Some(cancel.into());
        self
    }

    pub fn danger(mut self) -> Self {
        self.variant = Some(ConfirmVariant::Danger);
        self
    }
}

/// The normalized request a dialog renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub variant: ConfirmVariant,
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

impl From<ConfirmOptions> for ConfirmRequest {
    fn from(options: ConfirmOptions) -> Self {
        Self {
            title: text_or(options.title.as_deref(), DEFAULT_TITLE),
            message: options.message.trim().to_string(),
            confirm_label: text_or(options.confirm_label.as_deref(), DEFAULT_CONFIRM_LABEL),
            cancel_label: text_or(options.cancel_label.as_deref(), DEFAULT_CANCEL_LABEL),
            variant: options.variant.unwrap_or_default(),
        }
    }
}
