//! 로그 로더 — 파일 단위 순차 로딩
//!
//! 파일을 한 줄씩 읽어 파싱과 검증을 거친 레코드 목록을 만듭니다.
//! 첫 번째 검증 실패가 전체 로딩을 중단시킵니다. "나쁜 줄을 건너뛰고
//! 계속" 모드는 의도적으로 제공하지 않습니다.
//!
//! 파일 핸들은 이 함수 호출 범위에 갇혀 있으며, 성공/검증 실패/I/O 에러
//! 어느 경로로 빠져나가든 함수 반환 시점에 해제됩니다.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use logsift_core::LogRecord;

use crate::error::ReportError;
use crate::parser::parse_line;
use crate::validate::validate;

/// 로그 파일을 로딩하여 파일 순서대로 레코드 목록을 반환합니다.
///
/// 경계 검사(경로 부재, 일반 파일 아님)는 읽기 시작 전에 수행됩니다.
/// 빈 줄은 에러 없이 스킵되며 라인 번호에는 포함됩니다.
/// 내용은 UTF-8로 해석되며, 디코딩 실패는 [`ReportError::Io`]로 전파됩니다.
pub fn load_logs(path: &Path) -> Result<Vec<LogRecord>, ReportError> {
    if !path.exists() {
        return Err(ReportError::PathNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_file() {
        return Err(ReportError::NotAFile {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;

        let Some(raw) = parse_line(&line) else {
            continue;
        };

        match validate(&raw) {
            Ok(record) => records.push(record),
            Err(reason) => {
                tracing::warn!(
                    line = line_number,
                    %reason,
                    path = %path.display(),
                    "load aborted on invalid log line"
                );
                return Err(ReportError::InvalidLine {
                    line: line_number,
                    reason,
                    raw: line.trim().to_owned(),
                });
            }
        }
    }

    tracing::debug!(
        records = records.len(),
        path = %path.display(),
        "log file loaded"
    );
    Ok(records)
}
