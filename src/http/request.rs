//! Request description shared by the client and the transports

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::session::Scope,
};

/// Header carrying the session token
pub const TOKEN_HEADER: &str = "token";

/// A binary part of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// JSON-shaped request without a body (still sent as `application/json`)
    Empty,
    Json(Value),
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
    /// `multipart/form-data`
    Multipart {
        fields: Vec<(String, String)>,
        files: Vec<FilePart>,
    },
}

impl RequestBody {
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Empty | RequestBody::Json(_) => Some("application/json"),
            RequestBody::Form(_) => Some("application/x-www-form-urlencoded"),
            // The transport adds the boundary parameter itself
            RequestBody::Multipart { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Explicit scope; inferred from `path` when unset
    pub scope: Option<Scope>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            scope: None,
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Scope the client will use: explicit first, otherwise from the path
    pub fn effective_scope(&self) -> Scope {
        self.scope.unwrap_or_else(|| Scope::for_path(&self.path))
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Send this token instead of the session's (may be empty)
    pub fn token(self, token: impl Into<String>) -> Self {
        self.header(TOKEN_HEADER, token)
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Add query parameters from a serializable struct; `None` fields are
    /// expected to be skipped by the struct's serializer
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> AppResult<Self> {
        self.query.extend(flatten(serde_json::to_value(params)?)?);
        Ok(self)
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> AppResult<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn form<B: Serialize + ?Sized>(mut self, body: &B) -> AppResult<Self> {
        self.body = RequestBody::Form(flatten(serde_json::to_value(body)?)?);
        Ok(self)
    }

    pub fn multipart(mut self, fields: Vec<(String, String)>, files: Vec<FilePart>) -> Self {
        self.body = RequestBody::Multipart { fields, files };
        self
    }
}

/// Turn a flat JSON object into string pairs, dropping nulls
fn flatten(value: Value) -> AppResult<Vec<(String, String)>> {
    let Value::Object(map) = value else {
        return Err(AppError::Internal(
            "Query and form parameters must serialize to an object".to_string(),
        ));
    };

    map.into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| match v {
            Value::String(s) => Ok((k, s)),
            Value::Number(n) => Ok((k, n.to_string())),
            Value::Bool(b) => Ok((k, b.to_string())),
            _ => Err(AppError::Internal(format!("Parameter {} is not a scalar", k))),
        })
        .collect()
}
