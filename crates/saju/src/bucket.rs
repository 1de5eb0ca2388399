//! 시각 입력 → 12지시 버킷 결정.

use std::sync::LazyLock;

use regex::Regex;

use manse_core::saju::entity::HourBucket;

use crate::tables::TIME_CODES;

static HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("고정 패턴"));

/// 각 버킷의 [시작, 끝] 분(minute-of-day) 구간. 0번(자시)만 자정을 감싼다.
const WINDOWS: [(u32, u32); 12] = [
    (23 * 60 + 30, 60 + 29),
    (60 + 30, 3 * 60 + 29),
    (3 * 60 + 30, 5 * 60 + 29),
    (5 * 60 + 30, 7 * 60 + 29),
    (7 * 60 + 30, 9 * 60 + 29),
    (9 * 60 + 30, 11 * 60 + 29),
    (11 * 60 + 30, 13 * 60 + 29),
    (13 * 60 + 30, 15 * 60 + 29),
    (15 * 60 + 30, 17 * 60 + 29),
    (17 * 60 + 30, 19 * 60 + 29),
    (19 * 60 + 30, 21 * 60 + 29),
    (21 * 60 + 30, 23 * 60 + 29),
];

/// 시간 코드("00","02",…,"22","24")를 버킷으로 변환한다.
/// 인식되지 않는 코드(예: 시간 모름 "99")는 `None`.
pub fn bucket_from_code(code: &str) -> Option<HourBucket> {
    TIME_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .and_then(|&(_, index)| HourBucket::new(index))
}

/// "HH:MM" 시각을 버킷으로 변환한다. 해석할 수 없으면 `None`.
pub fn bucket_from_hhmm(text: &str) -> Option<HourBucket> {
    let caps = HHMM.captures(text)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    // 23:30~23:59 는 구간 스캔 전에 자시로 확정한다
    if hour == 23 && minute >= 30 {
        return HourBucket::new(0);
    }

    let current = hour * 60 + minute;
    for (index, &(start, end)) in WINDOWS.iter().enumerate() {
        let hit = if start <= end {
            (start..=end).contains(&current)
        } else {
            // 자정을 감싸는 자시 구간
            current >= start || current <= end
        };
        if hit {
            return HourBucket::new(index as u32);
        }
    }

    // 00:00~01:29 잔여 구간은 자시
    if current <= 89 {
        return HourBucket::new(0);
    }
    None
}

/// 시간 코드가 우선이고, 코드가 해석되지 않을 때만 자유형 시각을 쓴다.
pub fn resolve_bucket(time_code: Option<&str>, time: Option<&str>) -> Option<HourBucket> {
    time_code
        .and_then(bucket_from_code)
        .or_else(|| time.and_then(bucket_from_hhmm))
}
