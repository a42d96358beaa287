//! Login and registration endpoints

use crate::{
    error::AppResult,
    http::{ApiClient, ApiRequest},
    models::{
        session::Scope,
        user::{AdminLoginBody, AdminLoginResponse, LoginResponse, ReaderLoginBody, RegisterRequest},
    },
};

/// Log a reader in with their card code
pub async fn login(client: &ApiClient, code: &str, password: &str) -> AppResult<LoginResponse> {
    let request = ApiRequest::post("/api/auth/login")
        .scope(Scope::Reader)
        .json(&ReaderLoginBody { code, password })?;
    client.send(request).await
}

/// Register a reader account; the backend logs the new reader in
pub async fn register(client: &ApiClient, payload: &RegisterRequest) -> AppResult<LoginResponse> {
    let request = ApiRequest::post("/api/auth/register")
        .scope(Scope::Reader)
        .json(payload)?;
    client.send(request).await
}

/// Log an administrator in
pub async fn admin_login(client: &ApiClient, username: &str, password: &str) -> AppResult<AdminLoginResponse> {
    let request = ApiRequest::post("/admin/auth/login")
        .scope(Scope::Admin)
        .json(&AdminLoginBody { username, password })?;
    client.send(request).await
}
