//! 시세 제공자 에러 타입.

use thiserror::Error;

/// 시세 조회 관련 에러.
///
/// 모두 종목 단위로 복구되며 (해당 종목만 피드에서 제외) 실행을 중단시키지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    NetworkError(String),

    /// API 에러 응답
    #[error("API error for {symbol}: {message}")]
    ApiError { symbol: String, message: String },

    /// 응답 파싱 에러
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 심볼을 찾을 수 없음
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// 조회 기간 내 데이터 없음
    #[error("No data: {0}")]
    NoData(String),
}

impl ProviderError {
    /// 다음 실행에서 성공할 가능성이 있는 일시적 에러인지 확인.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::NetworkError(_) | ProviderError::ApiError { .. }
        )
    }

    /// 통계/로그용 짧은 분류명.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NetworkError(_) => "network",
            ProviderError::ApiError { .. } => "api",
            ProviderError::ParseError(_) => "parse",
            ProviderError::SymbolNotFound(_) => "symbol_not_found",
            ProviderError::NoData(_) => "no_data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        assert!(ProviderError::NetworkError("timeout".into()).is_retryable());
        assert!(!ProviderError::SymbolNotFound("XYZ".into()).is_retryable());
        assert!(!ProviderError::NoData("AAPL".into()).is_retryable());
    }

    #[test]
    fn test_error_kind() {
        let err = ProviderError::ApiError {
            symbol: "AAPL".into(),
            message: "500".into(),
        };
        assert_eq!(err.kind(), "api");
        assert_eq!(err.to_string(), "API error for AAPL: 500");
    }
}
