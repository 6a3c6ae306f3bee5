use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 下载当前 Excel 文件。无副作用，不加写锁
pub async fn download_excel(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if !state.excel_path.exists() {
        tracing::debug!("--- 下载请求: 文件尚未生成");
        return (StatusCode::NOT_FOUND, "file not found").into_response();
    }

    match tokio::fs::read(&state.excel_path).await {
        Ok(bytes) => {
            tracing::info!("<<< 下载 Excel, {} 字节", bytes.len());
            let file_name = state
                .excel_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("redata.xlsx");
            let headers = [
                (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", file_name),
                ),
            ];
            (StatusCode::OK, headers, bytes).into_response()
        }
        Err(e) => {
            tracing::error!("!!! 读取 Excel 失败: {}", e);
            AppError::from(e).into_response()
        }
    }
}
