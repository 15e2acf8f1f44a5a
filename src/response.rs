use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub status_message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful (200 OK) response with data.
    pub fn ok(data: T) -> Self {
        Self::success(StatusCode::OK, data)
    }

    /// Creates a successful response with a specific status code and data.
    pub fn success(status: StatusCode, data: T) -> Self {
        ApiResponse {
            status_code: status.as_u16(),
            status_message: status.canonical_reason().unwrap_or("Success").to_string(),
            data: Some(data),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(self);

        (status, body).into_response()
    }
}

/// A CSV document served as a file download.
#[derive(Debug)]
pub struct CsvDownload {
    pub filename: String,
    pub body: String,
}

impl CsvDownload {
    pub const DEFAULT_FILENAME: &'static str = "student_analytics.csv";

    pub fn new(body: String) -> Self {
        CsvDownload {
            filename: Self::DEFAULT_FILENAME.to_string(),
            body,
        }
    }
}

impl IntoResponse for CsvDownload {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.filename);
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.body,
        )
            .into_response()
    }
}
