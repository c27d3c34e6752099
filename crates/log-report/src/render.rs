//! 리포트 렌더링 — 카운트 테이블과 레벨별 상세 출력
//!
//! 렌더러는 순수 함수로 `String`을 반환합니다. 출력 스트림 선택과
//! 형식(텍스트/JSON) 전환은 CLI 레이어의 책임입니다.
//!
//! ERROR 행은 터미널 색상으로 강조됩니다. 정렬이 깨지지 않도록
//! 패딩을 먼저 적용한 뒤 색상을 입힙니다.

use colored::Colorize;

use logsift_core::{LevelCounts, LogLevel, LogRecord};

/// 레벨 컬럼 제목
const LEVEL_HEADER: &str = "Log level";

/// 카운트 컬럼 제목
const COUNT_HEADER: &str = "Count";

/// 빈 카운트에 대한 고정 메시지
pub const EMPTY_COUNTS_MESSAGE: &str = "No logs found.";

/// 레벨별 카운트를 2열 테이블로 렌더링합니다.
///
/// 컬럼 너비는 제목과 해당 열의 가장 넓은 셀 중 큰 값입니다.
/// 행 순서는 카운트의 순회 순서(first-seen)를 따릅니다.
/// 빈 카운트는 [`EMPTY_COUNTS_MESSAGE`]를 그대로 반환합니다.
pub fn render_counts(counts: &LevelCounts) -> String {
    if counts.is_empty() {
        return EMPTY_COUNTS_MESSAGE.to_owned();
    }

    let level_width = counts
        .iter()
        .map(|(level, _)| level.as_str().len())
        .chain([LEVEL_HEADER.len()])
        .max()
        .unwrap_or(LEVEL_HEADER.len());
    let count_width = counts
        .iter()
        .map(|(_, count)| count.to_string().len())
        .chain([COUNT_HEADER.len()])
        .max()
        .unwrap_or(COUNT_HEADER.len());

    let mut lines = Vec::with_capacity(counts.len() + 2);
    lines.push(format!(
        "{LEVEL_HEADER:<level_width$} | {COUNT_HEADER:>count_width$}"
    ));
    lines.push(format!(
        "{} | {}",
        "-".repeat(level_width),
        "-".repeat(count_width)
    ));

    for (level, count) in counts.iter() {
        let level_cell = format!("{:<level_width$}", level.as_str());
        let level_cell = if level == LogLevel::Error {
            level_cell.red().to_string()
        } else {
            level_cell
        };
        lines.push(format!("{level_cell} | {count:>count_width$}"));
    }

    lines.join("\n")
}

/// 필터링된 레코드의 상세 내역을 렌더링합니다.
///
/// 입력은 이미 [`crate::filter_by_level`]을 거친 목록입니다.
/// 비어 있으면 "로그 없음" 메시지, 아니면 레벨 헤더와 함께
/// 원래 순서대로 `date time level message` 한 줄씩 출력합니다.
pub fn render_details(records: &[LogRecord], level: LogLevel) -> String {
    if records.is_empty() {
        return format!("No logs for level '{level}'.");
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(format!("Log details for level '{level}':"));
    lines.extend(records.iter().map(ToString::to_string));
    lines.join("\n")
}
