//! # API 통합 오류 처리
//!
//! 하위 crate 의 오류를 HTTP 상태 코드와 계약된 JSON 본문으로 매핑한다.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use manse_core::saju::port::SajuError;

use crate::types::{json_response, ErrorBody};

/// API 계층 통합 오류 열거형
#[derive(Error, Debug)]
pub enum ApiError {
    /// 입력 검증 실패 (400, error = "bad_request")
    #[error("{0}")]
    BadRequest(String),

    /// 간지 텍스트 해석 실패 (500, error = "calc_failed")
    #[error("failed to parse pillars")]
    CalcFailed,

    /// 그 밖의 내부 오류 (500, error = "exception")
    #[error("{0}")]
    Exception(String),
}

impl ApiError {
    /// 응답 본문의 오류 분류 코드
    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::CalcFailed => "calc_failed",
            ApiError::Exception(_) => "exception",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::CalcFailed | ApiError::Exception(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `ApiError` 를 axum HTTP 응답으로 변환
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::error!("사주 계산 실패: {}", self);
        }

        let body = ErrorBody {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        json_response(self.status(), &body)
    }
}

/// 서비스 계층 오류를 API 분류로 변환
impl From<SajuError> for ApiError {
    fn from(err: SajuError) -> Self {
        match err {
            SajuError::UnparsablePillars => ApiError::CalcFailed,
            SajuError::Calendar(cause) => ApiError::Exception(cause.to_string()),
        }
    }
}
