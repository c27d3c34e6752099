//! 집계 — 레벨별 카운트와 레벨 필터링
//!
//! 이미 로딩된 레코드 목록 위에서 동작하는 순수 함수들입니다.
//! 레벨 비교는 항상 정규형(대문자) 기준이며, 입력 레코드는
//! 검증을 통과했다고 가정합니다.

use logsift_core::{LevelCounts, LogLevel, LogRecord};

/// 레벨별 레코드 수를 셉니다.
///
/// 결과의 순회 순서는 레코드를 앞에서부터 스캔하며 레벨을 처음 만난
/// 순서를 따릅니다. 빈 입력은 빈 카운트를 반환합니다.
/// 정규 집합에 없는 레벨을 가진 레코드는 집계에서 제외됩니다
/// (검증된 레코드에서는 발생하지 않음).
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts = LevelCounts::new();
    for record in records {
        if let Some(level) = record.canonical_level() {
            counts.increment(level);
        }
    }
    counts
}

/// 요청된 레벨의 레코드만 원래 순서대로 반환합니다.
///
/// 레코드의 레벨 토큰 대소문자와 무관하게 정규형으로 비교합니다.
/// 일치하는 레코드가 없으면 빈 목록입니다 (에러가 아님).
pub fn filter_by_level(records: &[LogRecord], level: LogLevel) -> Vec<LogRecord> {
    records
        .iter()
        .filter(|record| record.canonical_level() == Some(level))
        .cloned()
        .collect()
}
