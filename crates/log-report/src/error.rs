//! 리포트 파이프라인 에러 타입
//!
//! [`ReportError`]는 파일 로딩 경계에서 발생하는 모든 실패를 표현합니다.
//! 실패 종류별로 변형(variant)이 분리되어 있어 상위 레이어(CLI)가
//! 메시지 문자열 파싱 없이 종료 코드를 결정할 수 있습니다.

use logsift_core::ValidationError;

/// 리포트 파이프라인 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// 경로가 존재하지 않음 (읽기 시작 전에 검출)
    #[error("path does not exist: {path}")]
    PathNotFound {
        /// 요청된 경로
        path: String,
    },

    /// 경로가 일반 파일이 아님 (디렉토리 등)
    #[error("path is not a regular file: {path}")]
    NotAFile {
        /// 요청된 경로
        path: String,
    },

    /// 검증 실패 — 한 줄이 전체 로딩을 중단시킴
    #[error("invalid log line at line {line}: {reason} - {raw}")]
    InvalidLine {
        /// 1부터 시작하는 라인 번호
        line: usize,
        /// 구조화된 실패 사유
        reason: ValidationError,
        /// 앞뒤 공백이 제거된 원본 라인
        raw: String,
    },

    /// 그 외 읽기 실패 (권한, 인코딩 등)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
