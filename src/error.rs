use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 区分校验失败和存储失败：前者是客户端问题 (400)，后者是服务端问题 (500)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("fields missing")]
    FieldsMissing,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    ExcelRead(#[from] calamine::XlsxError),

    #[error("{0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("{0}")]
    Storage(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::FieldsMissing => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(json!({ "status": "error", "message": self.to_string() })),
        )
            .into_response()
    }
}
