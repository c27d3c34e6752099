//! 도메인 타입 — 로그 레코드와 레벨별 카운트
//!
//! 파이프라인 전 단계가 공유하는 데이터 구조를 정의합니다.
//! 레코드는 검증을 통과한 시점에 생성되며 이후 변경되지 않습니다.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 로그 레벨
///
/// 정규 집합은 `{DEBUG, INFO, WARNING, ERROR}`입니다.
/// 비교와 해시가 가능하며, `Display`는 항상 대문자 정규형을 출력합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// 디버그용 상세 로그
    Debug,
    /// 정보성 로그
    Info,
    /// 경고
    Warning,
    /// 에러
    Error,
}

impl LogLevel {
    /// 문자열에서 로그 레벨을 파싱합니다.
    ///
    /// 대소문자를 구분하지 않습니다. 정규 집합에 없는 값은 `None`입니다.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARNING" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            _ => None,
        }
    }

    /// 대문자 정규형 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 로그 레코드
///
/// 검증을 통과한 한 줄의 로그를 나타냅니다.
/// `level`은 원본 토큰을 그대로 보존합니다 (정규화는 소비 지점에서 수행).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// 날짜 (`YYYY-MM-DD`)
    pub date: String,
    /// 시각 (`HH:MM:SS`)
    pub time: String,
    /// 로그 레벨 원본 토큰
    pub level: String,
    /// 메시지 (내부 공백 보존)
    pub message: String,
}

impl LogRecord {
    /// 레벨을 정규형으로 변환합니다.
    ///
    /// 검증을 통과한 레코드의 레벨은 항상 정규 집합에 속하므로,
    /// 변환 실패는 레코드 생성 경로의 버그입니다.
    pub fn canonical_level(&self) -> Option<LogLevel> {
        LogLevel::from_str_loose(&self.level)
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.time, self.level, self.message,
        )
    }
}

/// 레벨별 카운트 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCountEntry {
    /// 정규형 로그 레벨
    pub level: LogLevel,
    /// 레코드 수
    pub count: u64,
}

/// 레벨별 로그 카운트
///
/// 레벨 → 카운트 매핑입니다. 순회 순서는 레코드를 앞에서부터 스캔하며
/// 처음 만난 순서(first-seen)를 따릅니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelCounts {
    entries: Vec<LevelCountEntry>,
}

impl LevelCounts {
    /// 빈 카운트를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 레벨의 카운트를 1 증가시킵니다.
    ///
    /// 처음 보는 레벨은 끝에 추가되어 first-seen 순서를 유지합니다.
    pub fn increment(&mut self, level: LogLevel) {
        match self.entries.iter_mut().find(|e| e.level == level) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(LevelCountEntry { level, count: 1 }),
        }
    }

    /// 특정 레벨의 카운트를 반환합니다. 없으면 0입니다.
    pub fn get(&self, level: LogLevel) -> u64 {
        self.entries
            .iter()
            .find(|e| e.level == level)
            .map_or(0, |e| e.count)
    }

    /// first-seen 순서로 (레벨, 카운트)를 순회합니다.
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, u64)> + '_ {
        self.entries.iter().map(|e| (e.level, e.count))
    }

    /// 카운트가 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 서로 다른 레벨의 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 전체 레코드 수를 반환합니다.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}
