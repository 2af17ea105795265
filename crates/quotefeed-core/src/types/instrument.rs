//! 추적 대상 종목 정의.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Category;

/// 피드에 포함할 종목 하나.
///
/// 실행마다 설정 파일에서 한 번 로드되며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Instrument {
    /// 표시 이름 (예: "S&P 500")
    pub name: String,
    /// 데이터 제공자 심볼 (예: "^GSPC", "AAPL", "BTC-USD")
    pub symbol: String,
    /// 카테고리
    pub category: Category,
}

impl Instrument {
    /// 새 종목을 생성합니다.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            category,
        }
    }

    /// 지수 종목을 생성합니다.
    pub fn index(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::new(name, symbol, Category::Index)
    }

    /// 주식 종목을 생성합니다.
    pub fn stock(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::new(name, symbol, Category::Stock)
    }

    /// 암호화폐 종목을 생성합니다.
    pub fn crypto(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::new(name, symbol, Category::Crypto)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}
