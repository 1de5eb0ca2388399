//! # `manse-calendar` - 만세력 어댑터
//!
//! 테이블 기반 음양력 변환으로 `CalendarPort` 를 구현한다.
//! 지원 범위는 음력 1900년 1월 1일(양력 1900-01-31)부터 음력 2049년 말까지.
//!
//! ## 아키텍처 책임
//! - 양력/음력(윤달 포함) 입력을 적일 + 음력 날짜로 정규화
//! - 연/월/일주 간지 계산과 간지 텍스트 렌더링
//! - 범위 밖·비실재 날짜를 `CalendarError` 로 보고

pub mod julian;
pub mod lunisolar;
pub mod table;

use manse_core::calendar::entity::BirthDate;
use manse_core::calendar::port::{CalendarError, CalendarPort};

use crate::lunisolar::{LunarDate, ManseDate};

/// 테이블 기반 만세력. 상태가 없으므로 값 복사로 공유한다.
#[derive(Debug, Default, Clone, Copy)]
pub struct LunisolarCalendar;

impl LunisolarCalendar {
    pub fn new() -> Self {
        Self
    }
}

impl CalendarPort for LunisolarCalendar {
    fn pillar_text(&self, birth: &BirthDate) -> Result<String, CalendarError> {
        let date = match *birth {
            BirthDate::Solar(solar) => ManseDate::from_solar(solar)?,
            BirthDate::Lunar {
                year,
                month,
                day,
                leap,
            } => ManseDate::from_lunar(LunarDate {
                year,
                month,
                day,
                leap,
            })?,
        };
        tracing::debug!("만세력 변환: {:?} -> {:?}", birth, date.lunar());
        Ok(date.pillar_text())
    }
}
