use chrono::NaiveDate;

use manse_calendar::julian::jdn_from_gregorian;
use manse_calendar::lunisolar::{LunarDate, ManseDate};
use manse_calendar::LunisolarCalendar;
use manse_core::calendar::entity::BirthDate;
use manse_core::calendar::port::{CalendarError, CalendarPort};

fn solar(year: i32, month: u32, day: u32) -> ManseDate {
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    ManseDate::from_solar(date).unwrap()
}

#[test]
fn solar_to_lunar_anchors() {
    // 설날(음력 1월 1일) 기준점
    for (solar_ymd, lunar_year) in [
        ((1984, 2, 2), 1984),
        ((1990, 1, 27), 1990),
        ((2017, 1, 28), 2017),
        ((2020, 1, 25), 2020),
    ] {
        let (y, m, d) = solar_ymd;
        assert_eq!(
            LunarDate {
                year: lunar_year,
                month: 1,
                day: 1,
                leap: false
            },
            solar(y, m, d).lunar(),
            "{y}-{m:02}-{d:02}"
        );
    }

    // 연말·연초 경계
    assert_eq!(
        LunarDate {
            year: 1999,
            month: 11,
            day: 25,
            leap: false
        },
        solar(2000, 1, 1).lunar()
    );
}

#[test]
fn leap_month_2017() {
    // 2017년 윤6월: 6월 29일 다음 날이 윤6월 1일, 윤6월은 30일
    assert_eq!(
        LunarDate {
            year: 2017,
            month: 6,
            day: 29,
            leap: false
        },
        solar(2017, 7, 22).lunar()
    );
    assert_eq!(
        LunarDate {
            year: 2017,
            month: 6,
            day: 1,
            leap: true
        },
        solar(2017, 7, 23).lunar()
    );
    assert_eq!(
        LunarDate {
            year: 2017,
            month: 7,
            day: 1,
            leap: false
        },
        solar(2017, 8, 22).lunar()
    );
}

#[test]
fn lunar_to_solar_round_trip() {
    for (lunar, solar_ymd) in [
        (
            LunarDate {
                year: 1999,
                month: 11,
                day: 25,
                leap: false,
            },
            (2000, 1, 1),
        ),
        (
            LunarDate {
                year: 2017,
                month: 6,
                day: 1,
                leap: false,
            },
            (2017, 6, 24),
        ),
        (
            LunarDate {
                year: 2017,
                month: 6,
                day: 1,
                leap: true,
            },
            (2017, 7, 23),
        ),
        (
            LunarDate {
                year: 1989,
                month: 12,
                day: 5,
                leap: false,
            },
            (1990, 1, 1),
        ),
    ] {
        let from_lunar = ManseDate::from_lunar(lunar).unwrap();
        let (y, m, d) = solar_ymd;
        assert_eq!(jdn_from_gregorian(y, m, d), from_lunar.jdn(), "{lunar:?}");
        assert_eq!(lunar, ManseDate::from_solar(
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        )
        .unwrap()
        .lunar());
    }
}

#[test]
fn pillar_text_anchors() {
    assert_eq!("기묘년 병자월 무오일", solar(2000, 1, 1).pillar_text());
    assert_eq!("기사년 정축월 병인일", solar(1990, 1, 1).pillar_text());
    // 윤6월은 본달(정미월)과 같은 월주를 쓴다
    assert_eq!("정유년 정미월 임오일", solar(2017, 6, 24).pillar_text());
    assert_eq!("정유년 정미월 신해일", solar(2017, 7, 23).pillar_text());
    // 갑자년 기준점
    assert_eq!("갑자", solar(1984, 2, 2).year_pillar().to_string());
    assert_eq!("갑자", solar(1949, 10, 1).day_pillar().to_string());
}

#[test]
fn out_of_range_dates() {
    let before_base = NaiveDate::from_ymd_opt(1900, 1, 30).unwrap();
    assert!(matches!(
        ManseDate::from_solar(before_base),
        Err(CalendarError::OutOfRange(_))
    ));

    let past_table = NaiveDate::from_ymd_opt(2050, 6, 1).unwrap();
    assert!(matches!(
        ManseDate::from_solar(past_table),
        Err(CalendarError::OutOfRange(_))
    ));

    assert!(matches!(
        ManseDate::from_lunar(LunarDate {
            year: 1899,
            month: 1,
            day: 1,
            leap: false
        }),
        Err(CalendarError::OutOfRange(_))
    ));
}

#[test]
fn invalid_lunar_dates() {
    // 2017년 6월(평달)은 29일까지
    assert!(matches!(
        ManseDate::from_lunar(LunarDate {
            year: 2017,
            month: 6,
            day: 30,
            leap: false
        }),
        Err(CalendarError::InvalidDate(_))
    ));
    // 2016년에는 윤6월이 없다
    assert!(matches!(
        ManseDate::from_lunar(LunarDate {
            year: 2016,
            month: 6,
            day: 1,
            leap: true
        }),
        Err(CalendarError::InvalidDate(_))
    ));
    assert!(matches!(
        ManseDate::from_lunar(LunarDate {
            year: 2000,
            month: 13,
            day: 1,
            leap: false
        }),
        Err(CalendarError::InvalidDate(_))
    ));
}

#[test]
fn port_returns_same_text_for_equivalent_inputs() {
    let calendar = LunisolarCalendar::new();

    let by_solar = calendar
        .pillar_text(&BirthDate::Solar(
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        ))
        .unwrap();
    let by_lunar = calendar
        .pillar_text(&BirthDate::Lunar {
            year: 1999,
            month: 11,
            day: 25,
            leap: false,
        })
        .unwrap();

    assert_eq!("기묘년 병자월 무오일", by_solar);
    assert_eq!(by_solar, by_lunar);
}
