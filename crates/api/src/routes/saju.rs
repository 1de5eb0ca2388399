//! # 사주 조회 라우트 컨트롤러
//!
//! `/api/v1/saju` GET 요청을 받아 입력을 검증하고 사주 포트를 호출한다.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;

use manse_core::calendar::entity::BirthDate;
use manse_core::saju::entity::SajuRequest;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{json_response, ErrorBody, SajuQuery, SajuResult};

/// 사주(연·월·일·시주) 조회
///
/// 시각 입력이 없거나 해석할 수 없으면 시주는 생략된다.
#[utoipa::path(
    get,
    path = "/api/v1/saju",
    tag = "사주 (Saju)",
    params(
        ("birthday" = String, Query, description = "생년월일 YYYYMMDD"),
        ("birthdayType" = Option<String>, Query, description = "SOLAR(기본) | LUNAR, 대소문자 무관"),
        ("isLeap" = Option<String>, Query, description = "음력 윤달 여부, \"true\" 만 참"),
        ("timeCode" = Option<String>, Query, description = "2시간 단위 시간 코드 00~24 (모름은 99)"),
        ("time" = Option<String>, Query, description = "HH:MM 시각, timeCode 가 없을 때 사용"),
        ("gender" = Option<String>, Query, description = "성별 (계산에 미사용)")
    ),
    responses(
        (status = 200, description = "사주 텍스트", body = SajuResult),
        (status = 400, description = "birthday 형식 오류", body = ErrorBody),
        (status = 500, description = "계산 실패", body = ErrorBody)
    )
)]
pub async fn get_saju(
    State(state): State<AppState>,
    Query(query): Query<SajuQuery>,
) -> Result<Response, ApiError> {
    let birth = parse_birth(&query)?;

    let request = SajuRequest {
        birth,
        time_code: query.time_code.clone(),
        time: query.time.clone(),
    };

    let reading = state.saju_port.reading(&request)?;

    Ok(json_response(
        StatusCode::OK,
        &SajuResult {
            result: reading.to_text(),
        },
    ))
}

/// # Logic
/// 1. birthday 가 ASCII 숫자 8자리인지 검사한다. 아니면 400.
/// 2. YYYY/MM/DD 로 나눈다.
/// 3. 양력은 `chrono` 로 실제 달력 검증까지 마치고,
///    음력은 윤달 여부와 함께 만세력 어댑터의 검증에 맡긴다.
fn parse_birth(query: &SajuQuery) -> Result<BirthDate, ApiError> {
    let birthday = query.birthday.as_deref().unwrap_or("");
    if birthday.len() != 8 || !birthday.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::BadRequest(
            "birthday must be YYYYMMDD".to_string(),
        ));
    }

    let year: i32 = birthday[..4].parse().unwrap_or_default();
    let month: u32 = birthday[4..6].parse().unwrap_or_default();
    let day: u32 = birthday[6..8].parse().unwrap_or_default();

    let lunar = query
        .birthday_type
        .as_deref()
        .is_some_and(|kind| kind.eq_ignore_ascii_case("LUNAR"));

    if lunar {
        let leap = query
            .is_leap
            .as_deref()
            .is_some_and(|flag| flag.eq_ignore_ascii_case("true"));
        return Ok(BirthDate::Lunar {
            year,
            month,
            day,
            leap,
        });
    }

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => Ok(BirthDate::Solar(date)),
        None => Err(ApiError::Exception(format!(
            "invalid solar date: {birthday}"
        ))),
    }
}
