//! Book cover uploads

use crate::{
    error::{AppError, AppResult},
    http::{ApiClient, ApiRequest, FilePart},
    models::session::Scope,
};

/// Largest cover the backend accepts
pub const MAX_COVER_BYTES: usize = 5 * 1024 * 1024;

const FILE_FIELD: &str = "file";

/// Upload a cover image and return the URL it is served from
pub async fn upload_book_cover(
    client: &ApiClient,
    file_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> AppResult<String> {
    if bytes.is_empty() {
        return Err(AppError::Validation("Please choose an image file".to_string()));
    }
    if bytes.len() > MAX_COVER_BYTES {
        return Err(AppError::Validation(
            "Image is too large, the limit is 5MB".to_string(),
        ));
    }
    if !content_type.trim().to_ascii_lowercase().starts_with("image/") {
        return Err(AppError::Validation("Only image files are supported".to_string()));
    }

    let file = FilePart {
        field: FILE_FIELD.to_string(),
        file_name: file_name.to_string(),
        content_type: content_type.trim().to_string(),
        bytes,
    };
    let request = ApiRequest::post("/admin/upload/book-cover")
        .scope(Scope::Admin)
        .multipart(Vec::new(), vec![file]);

    let url: String = client.send(request).await?;
    tracing::info!("Uploaded cover {} to {}", file_name, url);
    Ok(url)
}
