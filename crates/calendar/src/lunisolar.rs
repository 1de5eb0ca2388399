//! 양력↔음력 변환과 간지(연·월·일주) 계산.
//!
//! 변환은 [`crate::table`] 의 연도 테이블을 기준 적일부터 누적해 수행한다.
//! 간지 규칙:
//! - 연주: 음력 연도 기준 60갑자 순환 (서기 4년 = 갑자년)
//! - 월주: 월지는 1월=인 부터 순환, 월간은 연간에 따른 시작 천간 규칙(오호둔).
//!   윤달은 본달과 같은 월주를 쓴다.
//! - 일주: 적일의 60갑자 순환

use chrono::{Datelike, NaiveDate};

use manse_core::calendar::port::CalendarError;
use manse_core::saju::entity::{Branch, Pillar, Stem};

use crate::julian::{jdn_from_gregorian, sexagenary_day};
use crate::table;

/// 음력 날짜
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub leap: bool,
}

/// 특정 생일의 만세력 상태. 적일과 음력 날짜를 함께 보관한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManseDate {
    jdn: i64,
    lunar: LunarDate,
}

impl ManseDate {
    /// 양력 날짜로부터 만세력 상태를 만든다.
    pub fn from_solar(date: NaiveDate) -> Result<Self, CalendarError> {
        let jdn = jdn_from_gregorian(date.year(), date.month(), date.day());
        let mut offset = jdn - table::BASE_JDN;
        if offset < 0 {
            return Err(CalendarError::OutOfRange(date.to_string()));
        }

        let mut year = table::BASE_YEAR;
        loop {
            if year > table::MAX_YEAR {
                return Err(CalendarError::OutOfRange(date.to_string()));
            }
            let days = i64::from(table::year_days(year));
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }

        // 윤달은 본달 바로 뒤에 끼워 넣고 월 번호를 올리지 않는다
        let leap_month = table::leap_month(year);
        let mut month = 1;
        let mut leap = false;
        loop {
            let days = i64::from(if leap {
                table::leap_month_days(year)
            } else {
                table::month_days(year, month)
            });
            if offset < days {
                break;
            }
            offset -= days;
            if !leap && month == leap_month {
                leap = true;
            } else {
                leap = false;
                month += 1;
            }
        }

        Ok(Self {
            jdn,
            lunar: LunarDate {
                year,
                month,
                day: (offset + 1) as u32,
                leap,
            },
        })
    }

    /// 음력 날짜로부터 만세력 상태를 만든다.
    ///
    /// # Logic
    /// 1. 연도가 테이블 범위 안인지, 월/일/윤달 여부가 실제 달력과 맞는지 검증.
    /// 2. 기준 적일부터 연 단위, 월 단위로 일수를 누적해 적일을 구한다.
    pub fn from_lunar(lunar: LunarDate) -> Result<Self, CalendarError> {
        if !table::supported(lunar.year) {
            return Err(CalendarError::OutOfRange(format!("음력 {}년", lunar.year)));
        }
        if lunar.month < 1 || lunar.month > 12 {
            return Err(CalendarError::InvalidDate(format!(
                "음력 월 {}",
                lunar.month
            )));
        }
        let leap_month = table::leap_month(lunar.year);
        if lunar.leap && leap_month != lunar.month {
            return Err(CalendarError::InvalidDate(format!(
                "음력 {}년에는 윤{}월이 없습니다",
                lunar.year, lunar.month
            )));
        }
        let max_day = if lunar.leap {
            table::leap_month_days(lunar.year)
        } else {
            table::month_days(lunar.year, lunar.month)
        };
        if lunar.day < 1 || lunar.day > max_day {
            return Err(CalendarError::InvalidDate(format!(
                "음력 {}년 {}월 {}일",
                lunar.year, lunar.month, lunar.day
            )));
        }

        let mut jdn = table::BASE_JDN;
        for year in table::BASE_YEAR..lunar.year {
            jdn += i64::from(table::year_days(year));
        }
        for month in 1..lunar.month {
            jdn += i64::from(table::month_days(lunar.year, month));
            if month == leap_month {
                jdn += i64::from(table::leap_month_days(lunar.year));
            }
        }
        if lunar.leap {
            jdn += i64::from(table::month_days(lunar.year, lunar.month));
        }
        jdn += i64::from(lunar.day) - 1;

        Ok(Self { jdn, lunar })
    }

    pub fn lunar(&self) -> LunarDate {
        self.lunar
    }

    pub fn jdn(&self) -> i64 {
        self.jdn
    }

    /// 연주. 음력 연도 기준 (갑자 = 서기 4년).
    pub fn year_pillar(&self) -> Pillar {
        Pillar::from_sexagenary((self.lunar.year - 4).rem_euclid(60) as u32)
    }

    /// 월주. 갑·기년은 1월이 병인, 을·경년은 무인 … 의 시작 천간 규칙.
    pub fn month_pillar(&self) -> Pillar {
        let year_stem = self.year_pillar().stem.index();
        let stem = (year_stem % 5) * 2 + 2 + (self.lunar.month - 1);
        let branch = self.lunar.month + 1;
        Pillar::new(Stem::from_index(stem), Branch::from_index(branch))
    }

    /// 일주. 적일의 60갑자 순환.
    pub fn day_pillar(&self) -> Pillar {
        Pillar::from_sexagenary(sexagenary_day(self.jdn))
    }

    /// "계유년 임오월 병인일" 형식의 간지 텍스트.
    pub fn pillar_text(&self) -> String {
        format!(
            "{}년 {}월 {}일",
            self.year_pillar(),
            self.month_pillar(),
            self.day_pillar()
        )
    }
}
