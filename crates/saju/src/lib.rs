//! # `manse-saju` - 사주 계산 서비스
//!
//! 만세력 포트가 돌려준 간지 텍스트에서 연/월/일주를 추출하고,
//! 시각 입력을 12지시 버킷으로 해석해 시주를 계산한다.
//!
//! - [`bucket`]: 시간 코드/자유형 시각 → 12지시 버킷
//! - [`pillars`]: 간지 텍스트 파서와 시주 계산
//! - [`service`]: `SajuPort` 구현체
//! - [`tables`]: 고정 조회 테이블

pub mod bucket;
pub mod pillars;
pub mod service;
pub mod tables;
