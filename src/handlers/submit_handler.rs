use crate::error::AppError;
use crate::models::record::{Record, SubmitPayload};
use crate::services::excel_service;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Local;
use serde_json::json;
use std::sync::Arc;

/// 接收表单 JSON 并追加到 Excel 文件
pub async fn submit_data(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitPayload>,
) -> impl IntoResponse {
    // 三个字段缺一不可
    let (Some(specialty), Some(text), Some(relation)) =
        (payload.specialty, payload.text, payload.relation)
    else {
        tracing::warn!("--- 提交被拒绝: 必填字段缺失");
        return AppError::FieldsMissing.into_response();
    };

    tracing::info!(">>> 收到表单提交: specialty={}", specialty);

    let record = Record {
        // 服务端本地时间，秒级精度
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        specialty,
        text,
        relation,
    };

    // 串行化"读全量-重写全量"，避免并发提交丢行
    let _guard = state.write_lock.lock().await;
    match excel_service::append_record(&state.excel_path, &record) {
        Ok(count) => {
            tracing::info!("<<< 已写入 Excel, 当前共 {} 行", count);
            (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
        }
        Err(e) => {
            tracing::error!("!!! 写入 Excel 失败: {}", e);
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex;

    fn test_state(dir: &tempfile::TempDir) -> Arc<AppState> {
        Arc::new(AppState {
            excel_path: dir.path().join("redata.xlsx"),
            write_lock: Mutex::new(()),
        })
    }

    fn full_payload() -> SubmitPayload {
        SubmitPayload {
            specialty: Some("cardiology".to_string()),
            text: Some("chest pain".to_string()),
            relation: Some("symptom".to_string()),
        }
    }

    #[tokio::test]
    async fn test_valid_submit_appends_row() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let resp = submit_data(State(state.clone()), Json(full_payload()))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let records = excel_service::load_records(&state.excel_path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].specialty, "cardiology");
        assert_eq!(records[0].text, "chest pain");
        assert_eq!(records[0].relation, "symptom");
        assert!(!records[0].timestamp.is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let payload = SubmitPayload {
            specialty: Some("cardiology".to_string()),
            text: None,
            relation: None,
        };
        let resp = submit_data(State(state.clone()), Json(payload))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "fields missing");

        // 文件不应被创建
        assert!(!state.excel_path.exists());
    }

    #[tokio::test]
    async fn test_sequential_submits_keep_order() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let mut first = full_payload();
        first.text = Some("first".to_string());
        let mut second = full_payload();
        second.text = Some("second".to_string());

        submit_data(State(state.clone()), Json(first)).await.into_response();
        submit_data(State(state.clone()), Json(second)).await.into_response();

        let records = excel_service::load_records(&state.excel_path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "first");
        assert_eq!(records[1].text, "second");
        assert!(records[0].timestamp <= records[1].timestamp);
    }
}
