//! 간지 텍스트 파서와 시주 계산.

use std::sync::LazyLock;

use regex::Regex;

use manse_core::saju::entity::{Branch, HourBucket, Pillar, Stem};

use crate::tables::HOUR_START;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([갑을병정무기경신임계][자축인묘진사오미신유술해])년").expect("고정 패턴")
});
static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([갑을병정무기경신임계][자축인묘진사오미신유술해])월").expect("고정 패턴")
});
static DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([갑을병정무기경신임계][자축인묘진사오미신유술해])일").expect("고정 패턴")
});
static DAY_STEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([갑을병정무기경신임계])[^\s]*일").expect("고정 패턴"));

/// 간지 텍스트에서 추출한 연/월/일주와, 별도 패턴으로 추출한 일간.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// 일간. 일주와 같은 텍스트에서 독립적으로 추출한다.
    pub day_stem: Option<Stem>,
}

fn capture_pillar(re: &Regex, text: &str) -> Option<Pillar> {
    let caps = re.captures(text)?;
    let mut glyphs = caps[1].chars();
    let stem = Stem::from_glyph(glyphs.next()?)?;
    let branch = Branch::from_glyph(glyphs.next()?)?;
    Some(Pillar::new(stem, branch))
}

/// 간지 텍스트("계유년 임오월 병인일 …")에서 연/월/일주를 추출한다.
///
/// 각 추출은 서로 독립이며, 연/월/일주 중 하나라도 없으면 `None`.
pub fn parse_pillars(text: &str) -> Option<ParsedPillars> {
    let year = capture_pillar(&YEAR_RE, text)?;
    let month = capture_pillar(&MONTH_RE, text)?;
    let day = capture_pillar(&DAY_RE, text)?;
    let day_stem = DAY_STEM_RE
        .captures(text)
        .and_then(|caps| caps[1].chars().next())
        .and_then(Stem::from_glyph);

    Some(ParsedPillars {
        year,
        month,
        day,
        day_stem,
    })
}

/// 일간과 12지시 버킷으로 시주를 만든다.
///
/// 시간(時干) 인덱스 = (일간별 시작 오프셋 + 버킷) mod 10, 시지 = 버킷 그대로.
pub fn hour_pillar(day_stem: Stem, bucket: HourBucket) -> Pillar {
    let start = HOUR_START[day_stem.index() as usize];
    Pillar::new(Stem::from_index(start + bucket.index()), bucket.branch())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(index: u32) -> HourBucket {
        HourBucket::new(index).unwrap()
    }

    #[test]
    fn parses_combined_pillar_text() {
        let parsed = parse_pillars("갑자년 을축월 병인일").unwrap();
        assert_eq!("갑자", parsed.year.to_string());
        assert_eq!("을축", parsed.month.to_string());
        assert_eq!("병인", parsed.day.to_string());
        assert_eq!(Some('병'), parsed.day_stem.map(Stem::glyph));
    }

    #[test]
    fn ignores_trailing_description() {
        let parsed = parse_pillars("계유년 임오월 병인일 (음력 5월 20일)").unwrap();
        assert_eq!("계유", parsed.year.to_string());
        assert_eq!("병인", parsed.day.to_string());
    }

    #[test]
    fn missing_pillar_fails() {
        assert!(parse_pillars("갑자년 병인일").is_none());
        assert!(parse_pillars("").is_none());
        assert!(parse_pillars("간지 없음").is_none());
    }

    #[test]
    fn hour_start_offsets_follow_pairing_rule() {
        for index in 0..10 {
            let offset = HOUR_START[index as usize];
            assert!(matches!(offset, 0 | 2 | 4 | 6 | 8), "천간 {index}");
            assert_eq!((index % 5) * 2, offset);
        }
    }

    #[test]
    fn hour_stem_stays_in_range() {
        for stem_index in 0..10 {
            for bucket_index in 0..12 {
                let pillar = hour_pillar(Stem::from_index(stem_index), bucket(bucket_index));
                assert!(pillar.stem.index() < 10);
                assert_eq!(bucket_index % 12, pillar.branch.index());
            }
        }
    }

    #[test]
    fn traditional_hour_pillars() {
        let byeong = Stem::from_glyph('병').unwrap();
        assert_eq!("무자", hour_pillar(byeong, bucket(0)).to_string());

        let gap = Stem::from_glyph('갑').unwrap();
        assert_eq!("갑자", hour_pillar(gap, bucket(0)).to_string());

        let gye = Stem::from_glyph('계').unwrap();
        assert_eq!("계해", hour_pillar(gye, bucket(11)).to_string());
    }
}
