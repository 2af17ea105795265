//! 에러 타입 정의.

use std::fmt;
use std::path::PathBuf;

use quotefeed_core::ConfigError;

/// Collector 에러 타입
///
/// 종목별 조회 실패는 여기 포함되지 않습니다 (경고로 기록 후 계속 진행).
#[derive(Debug)]
pub enum CollectorError {
    /// 종목 목록 설정 에러
    Config(ConfigError),
    /// 실행 옵션 에러 (base url, max items 등)
    InvalidOption(String),
    /// 이전 피드 파일을 해석할 수 없음
    PreviousFeed { path: PathBuf, message: String },
    /// 모든 종목 조회 실패
    NoQuotes { attempted: usize },
    /// XML 생성 에러
    Xml(String),
    /// 파일 입출력 에러
    Io(std::io::Error),
}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {}", e),
            Self::InvalidOption(msg) => write!(f, "Invalid option: {}", msg),
            Self::PreviousFeed { path, message } => write!(
                f,
                "Previous feed could not be read ({}): {}",
                path.display(),
                message
            ),
            Self::NoQuotes { attempted } => write!(
                f,
                "No quotes fetched: all {} instruments failed",
                attempted
            ),
            Self::Xml(msg) => write!(f, "XML error: {}", msg),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CollectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CollectorError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for CollectorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<quick_xml::Error> for CollectorError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for CollectorError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Xml(err.to_string())
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, CollectorError>;
