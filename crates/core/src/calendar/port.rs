use super::entity::BirthDate;
use thiserror::Error;

/// # Summary
/// 만세력(음양력 변환) 어댑터에서 발생할 수 있는 오류.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("지원 범위를 벗어난 날짜입니다: {0}")]
    OutOfRange(String),
    #[error("유효하지 않은 날짜입니다: {0}")]
    InvalidDate(String),
}

/// # Summary
/// 만세력 조회 포트. 생년월일로부터 간지 텍스트
/// (예: "계유년 임오월 병인일")를 돌려준다.
///
/// # Invariants
/// - 순수 메모리 연산이므로 동기 인터페이스로 충분하다 (`Send + Sync`).
/// - 반환 텍스트는 연/월/일 각각 "<천간><지지>년|월|일" 토큰을 포함해야 하며,
///   그 뒤에 부가 설명이 붙을 수 있다.
pub trait CalendarPort: Send + Sync {
    /// 생년월일의 간지 텍스트 조회
    fn pillar_text(&self, birth: &BirthDate) -> Result<String, CalendarError>;
}
