//! 설정 에러 타입.

use std::path::PathBuf;
use thiserror::Error;

/// 종목 목록 설정 에러.
///
/// 모두 치명적이며 네트워크 호출 전에 실행을 중단시킵니다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 읽기 실패 (없음, 권한 등)
    #[error("설정 파일을 읽을 수 없습니다 ({path}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 형식 오류 (JSON/TOML 파싱 실패, 필수 필드 누락, 알 수 없는 카테고리)
    #[error("설정 파일 형식 오류 ({path}): {message}")]
    Malformed { path: PathBuf, message: String },

    /// 값 검증 실패
    #[error("설정 검증 실패: {0}")]
    Invalid(String),
}

/// 설정 작업을 위한 Result 타입.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        ConfigError::Malformed {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
