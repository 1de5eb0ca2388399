use thiserror::Error;

use super::entity::{SajuReading, SajuRequest};
use crate::calendar::port::CalendarError;

/// # Summary
/// 사주 계산 과정에서 발생할 수 있는 오류.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SajuError {
    /// 만세력이 돌려준 간지 텍스트에서 연/월/일주를 추출하지 못함.
    /// 어댑터 출력 형식이 계약과 다르다는 뜻이다.
    #[error("간지 텍스트에서 연/월/일주를 추출하지 못했습니다")]
    UnparsablePillars,
    /// 만세력 어댑터 오류
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// # Summary
/// 사주 계산 포트. 검증된 요청을 받아 연/월/일주와 (가능하면) 시주를 계산한다.
///
/// # Invariants
/// - 요청 단위로 완결되는 무상태 연산이다. 재시도/취소 없음.
pub trait SajuPort: Send + Sync {
    /// 사주 네 기둥 계산
    fn reading(&self, request: &SajuRequest) -> Result<SajuReading, SajuError>;
}
