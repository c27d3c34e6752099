//! 레코드 검증 — 필드 존재, 날짜/시각 형식, 레벨 정규 집합
//!
//! [`RawRecord`]를 검사하여 통과하면 [`LogRecord`]를 생성합니다.
//! 검증은 레코드를 정규화하지 않습니다. `level` 필드는 원본 토큰
//! 그대로 보존되며, 대문자 변환은 집계/리포트 단계에서 수행됩니다.

use chrono::{NaiveDate, NaiveTime};

use logsift_core::{LogLevel, LogRecord, ValidationError};

use crate::parser::RawRecord;

/// 날짜 필드 형식 (`2024-01-05`)
const DATE_FORMAT: &str = "%Y-%m-%d";

/// 시각 필드 형식 (`13:45:02`, 24시간제)
const TIME_FORMAT: &str = "%H:%M:%S";

/// 원시 레코드를 검증하여 [`LogRecord`]를 생성합니다.
///
/// 실패 사유는 [`ValidationError`]로 반환됩니다:
/// - 필드 누락 또는 빈 값 → [`ValidationError::MissingField`]
/// - 날짜/시각 형식 위반 → [`ValidationError::BadTimestamp`]
/// - 정규 집합에 없는 레벨 → [`ValidationError::UnknownLevel`] (원본 토큰 포함)
pub fn validate(raw: &RawRecord) -> Result<LogRecord, ValidationError> {
    let (date, time, level, message) = match (&raw.date, &raw.time, &raw.level, &raw.message) {
        (Some(date), Some(time), Some(level), Some(message))
            if !date.is_empty() && !time.is_empty() && !level.is_empty() && !message.is_empty() =>
        {
            (date, time, level, message)
        }
        _ => return Err(ValidationError::MissingField),
    };

    if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err()
        || NaiveTime::parse_from_str(time, TIME_FORMAT).is_err()
    {
        return Err(ValidationError::BadTimestamp);
    }

    if LogLevel::from_str_loose(level).is_none() {
        return Err(ValidationError::UnknownLevel {
            value: level.clone(),
        });
    }

    Ok(LogRecord {
        date: date.clone(),
        time: time.clone(),
        level: level.clone(),
        message: message.clone(),
    })
}
