//! # 헬스체크 라우트 컨트롤러
//!
//! 로드밸런서/컨테이너 헬스체크용 상태 확인 엔드포인트.

use axum::http::StatusCode;
use axum::response::Response;

use crate::types::{json_response, HealthResponse};

/// 서버 상태 확인
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "시스템 (System)",
    responses(
        (status = 200, description = "정상 동작 중", body = HealthResponse)
    )
)]
pub async fn health() -> Response {
    json_response(
        StatusCode::OK,
        &HealthResponse {
            status: "ok".to_string(),
        },
    )
}
