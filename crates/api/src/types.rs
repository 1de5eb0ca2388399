//! # DTO (Data Transfer Object) 계층
//!
//! 쿼리 파라미터와 JSON 응답 본문 구조체.
//! 응답 본문 형식은 외부 계약에 고정되어 있으므로 내부 도메인 모델과 분리한다.

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================
//  요청 DTO
// ============================================================

/// `GET /api/v1/saju` 쿼리 파라미터.
///
/// 모든 필드를 Option 으로 받아, 검증 실패를 프레임워크 기본 응답이 아니라
/// 계약된 400 JSON 본문으로 돌려준다.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SajuQuery {
    /// 생년월일 "YYYYMMDD" (필수)
    pub birthday: Option<String>,
    /// SOLAR(기본) 또는 LUNAR, 대소문자 무관
    pub birthday_type: Option<String>,
    /// 음력일 때만 의미 있는 윤달 여부 ("true" 만 참)
    pub is_leap: Option<String>,
    /// 2시간 단위 시간 코드 ("00".."24", 시간 모름은 "99")
    pub time_code: Option<String>,
    /// 자유형 "HH:MM" 시각. timeCode 가 해석되지 않을 때만 사용
    pub time: Option<String>,
    /// 성별. 접수만 하고 계산에는 쓰지 않는다
    pub gender: Option<String>,
}

// ============================================================
//  응답 DTO
// ============================================================

/// 성공 응답 본문
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SajuResult {
    /// "계유년 임오월 병인일[ 무자시]" 형식의 사주 텍스트
    #[schema(example = "계유년 임오월 병인일 무자시")]
    pub result: String,
}

/// 실패 응답 본문
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// 오류 분류 코드 (bad_request | calc_failed | exception)
    #[schema(example = "bad_request")]
    pub error: String,
    /// 사람이 읽을 수 있는 설명
    #[schema(example = "birthday must be YYYYMMDD")]
    pub message: String,
}

/// 헬스체크 응답 본문
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

// ============================================================
//  응답 직렬화
// ============================================================

/// 본문을 한 번 직렬화해 `Content-Type`(charset 포함)과 `Content-Length` 를
/// 명시적으로 싣는다. 모든 응답이 이 경로를 지난다.
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let bytes = serde_json::to_vec(body).unwrap_or_else(|_| b"{}".to_vec());
    let built = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
        .header(header::CONTENT_LENGTH, bytes.len())
        .body(Body::from(bytes));
    match built {
        Ok(response) => response,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
