//! HTTP transport seam
//!
//! The client talks to the network only through [`HttpTransport`], which
//! keeps the session and decoding logic independent of `reqwest`.

use async_trait::async_trait;
use reqwest::{
    header::CONTENT_TYPE,
    multipart::{Form, Part},
    Client,
};
use std::time::Duration;

use super::request::{ApiRequest, RequestBody};
use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
};

/// Status and undecoded body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform one exchange. Only failures to obtain a response are errors;
    /// every HTTP status comes back as a [`RawResponse`].
    async fn execute(&self, request: ApiRequest) -> AppResult<RawResponse>;
}

/// `reqwest`-backed transport rooted at a base URL
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Wrap an already configured `reqwest` client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn multipart(fields: Vec<(String, String)>, files: Vec<super::request::FilePart>) -> AppResult<Form> {
        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name, value);
        }
        for file in files {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(|e| AppError::Validation(format!("Invalid content type: {}", e)))?;
            form = form.part(file.field, part);
        }
        Ok(form)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> AppResult<RawResponse> {
        let url = self.url(&request.path);
        let content_type = request.body.content_type();

        let mut builder = self.client.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(pairs) => builder.form(&pairs),
            RequestBody::Multipart { fields, files } => builder.multipart(Self::multipart(fields, files)?),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::warn!("{} {} failed: {}", request.method, url, e);
            AppError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))?;

        tracing::debug!("{} {} -> {}", request.method, url, status);

        Ok(RawResponse { status, body })
    }
}
