//! 사주 계산 서비스.

use std::sync::Arc;

use manse_core::calendar::port::CalendarPort;
use manse_core::saju::entity::{SajuReading, SajuRequest};
use manse_core::saju::port::{SajuError, SajuPort};

use crate::bucket::resolve_bucket;
use crate::pillars::{hour_pillar, parse_pillars};

/// # Summary
/// `SajuService` 는 만세력 포트와 파서/시주 계산을 묶는 `SajuPort` 구현체다.
pub struct SajuService {
    calendar: Arc<dyn CalendarPort>,
}

impl SajuService {
    pub fn new(calendar: Arc<dyn CalendarPort>) -> Self {
        Self { calendar }
    }
}

impl SajuPort for SajuService {
    /// # Logic
    /// 1. 만세력 포트에서 간지 텍스트를 받는다.
    /// 2. 연/월/일주를 추출한다. 실패하면 `UnparsablePillars`.
    /// 3. 시간 코드 → 자유형 시각 순서로 버킷을 결정한다.
    /// 4. 버킷과 일간이 모두 있으면 시주를 붙이고, 아니면 생략한다.
    fn reading(&self, request: &SajuRequest) -> Result<SajuReading, SajuError> {
        let text = self.calendar.pillar_text(&request.birth)?;

        let parsed = parse_pillars(&text).ok_or_else(|| {
            tracing::error!("간지 텍스트 파싱 실패: {text:?}");
            SajuError::UnparsablePillars
        })?;

        let bucket = resolve_bucket(request.time_code.as_deref(), request.time.as_deref());
        let hour = match (parsed.day_stem, bucket) {
            (Some(stem), Some(bucket)) => Some(hour_pillar(stem, bucket)),
            _ => None,
        };

        Ok(SajuReading {
            year: parsed.year,
            month: parsed.month,
            day: parsed.day,
            hour,
        })
    }
}
