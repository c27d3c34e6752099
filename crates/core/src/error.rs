//! 에러 타입 — 라인 검증 실패 사유
//!
//! [`ValidationError`]는 한 줄의 로그가 거부된 구조화된 사유를 표현합니다.
//! 원본 구현의 "빈 문자열이면 성공" 방식 대신, 검증 결과는
//! `Result<LogRecord, ValidationError>`로 전달됩니다.

/// 라인 검증 실패 사유
///
/// `Display` 문자열이 사용자에게 그대로 노출되므로 문구를 변경할 때는
/// 로더의 에러 메시지 형식도 함께 확인해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// 4개 필드 중 하나 이상이 없거나 비어 있음
    #[error("invalid log line format")]
    MissingField,

    /// 날짜가 `YYYY-MM-DD`, 또는 시각이 `HH:MM:SS` 형식이 아님
    #[error("invalid date or time format")]
    BadTimestamp,

    /// 레벨 토큰이 정규 집합에 없음 (원본 토큰을 그대로 포함)
    #[error("invalid log level: {value}")]
    UnknownLevel {
        /// 대문자 변환 전의 원본 토큰
        value: String,
    },
}
