use chrono::NaiveDate;

/// 생년월일 입력.
///
/// 양력은 `chrono` 로 달력 검증을 마친 날짜를 담고,
/// 음력은 윤달 여부까지 포함해 만세력 어댑터가 검증한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthDate {
    /// 양력 날짜
    Solar(NaiveDate),
    /// 음력 날짜. `leap` 가 true 면 윤달.
    Lunar {
        year: i32,
        month: u32,
        day: u32,
        leap: bool,
    },
}
