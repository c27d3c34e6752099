#![doc = include_str!("../README.md")]
//!
//! # 모듈 구성
//!
//! - [`parser`]: 한 줄을 공백 기준으로 최대 4개 필드로 분리 (실패 없음)
//! - [`validate`]: 구조화된 사유와 함께 필드 검증, [`LogRecord`] 생성
//! - [`loader`]: 파일 단위 로딩, 첫 번째 검증 실패 시 전체 중단
//! - [`aggregate`]: 레벨별 카운트와 레벨 필터링 (순수 함수)
//! - [`render`]: 카운트 테이블과 상세 리포트 텍스트 생성
//! - [`error`]: 도메인 에러 타입
//!
//! [`LogRecord`]: logsift_core::LogRecord

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod parser;
pub mod render;
pub mod validate;

// --- 주요 타입 re-export ---

// 파서
pub use parser::{RawRecord, parse_line};

// 검증
pub use validate::validate;

// 로더
pub use loader::load_logs;

// 집계
pub use aggregate::{count_by_level, filter_by_level};

// 리포트
pub use render::{render_counts, render_details};

// 에러
pub use error::ReportError;
