//! 라인 파서 — 공백 기준 구조적 분리
//!
//! 한 줄을 `<date> <time> <level> <message...>` 형태의 최대 4개 필드로
//! 분리합니다. 이 단계는 순수하게 구조적이며 절대 실패하지 않습니다.
//! 내용 검증은 [`crate::validate`]의 책임입니다.
//!
//! # 사용 예시
//! ```
//! use logsift_report::parser::parse_line;
//!
//! let raw = parse_line("2024-01-05 13:45:02 ERROR Disk write failed").unwrap();
//! assert_eq!(raw.level.as_deref(), Some("ERROR"));
//! assert_eq!(raw.message.as_deref(), Some("Disk write failed"));
//! ```

/// 구조적으로 분리된 원시 레코드
///
/// 토큰이 4개 미만이면 뒤쪽 필드가 `None`으로 남습니다.
/// 검증 전 단계의 값이므로 어떤 필드도 신뢰할 수 없습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// 첫 번째 토큰
    pub date: Option<String>,
    /// 두 번째 토큰
    pub time: Option<String>,
    /// 세 번째 토큰
    pub level: Option<String>,
    /// 세 번째 토큰 이후의 나머지 전체 (내부 공백 보존)
    pub message: Option<String>,
}

/// 한 줄을 [`RawRecord`]로 분리합니다.
///
/// - 빈 줄 또는 공백만 있는 줄은 `None` (스킵 대상)
/// - 앞 3개 토큰은 공백 기준으로 잘라내고, 나머지 전체가 메시지
/// - 각 토큰 끝의 줄바꿈 문자(`\r`, `\n`)는 제거
pub fn parse_line(line: &str) -> Option<RawRecord> {
    if line.trim().is_empty() {
        return None;
    }

    let mut rest = line;
    let mut tokens: [Option<String>; 3] = [None, None, None];

    for slot in &mut tokens {
        rest = rest.trim_start_matches(char::is_whitespace);
        if rest.is_empty() {
            break;
        }
        let end = rest
            .find(char::is_whitespace)
            .unwrap_or(rest.len());
        *slot = Some(strip_line_endings(&rest[..end]).to_owned());
        rest = &rest[end..];
    }

    let remainder = rest.trim_start_matches(char::is_whitespace);
    let message = if remainder.is_empty() {
        None
    } else {
        Some(strip_line_endings(remainder).to_owned())
    };

    let [date, time, level] = tokens;
    Some(RawRecord {
        date,
        time,
        level,
        message,
    })
}

/// 토큰 끝의 줄바꿈 문자를 제거합니다.
fn strip_line_endings(token: &str) -> &str {
    token.trim_end_matches(['\r', '\n'])
}
