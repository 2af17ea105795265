//! 종목 카테고리 정의.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 종목 카테고리.
///
/// 선언 순서가 곧 피드 섹션 순서입니다 (지수 → 주식 → 암호화폐).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 주가 지수
    Index,
    /// 개별 주식
    Stock,
    /// 암호화폐 (24시간 거래)
    Crypto,
}

impl Category {
    /// 피드 섹션 순서대로 나열한 전체 카테고리.
    pub const ALL: [Category; 3] = [Category::Index, Category::Stock, Category::Crypto];

    /// 장 운영 시간이 있는 시장의 등락 집계에 포함되는지 여부.
    ///
    /// 암호화폐는 쉬지 않고 거래되므로 거래일 비교에서 제외합니다.
    pub fn counts_toward_market_change(&self) -> bool {
        matches!(self, Category::Index | Category::Stock)
    }

    /// 피드 섹션 제목.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Index => "Index",
            Category::Stock => "Stock",
            Category::Crypto => "Crypto",
        }
    }

    /// 설정 파일에서 쓰는 소문자 식별자.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Index => "index",
            Category::Stock => "stock",
            Category::Crypto => "crypto",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// 설정 식별자와 섹션 제목 모두 허용합니다 (대소문자 무시).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "index" => Ok(Category::Index),
            "stock" => Ok(Category::Stock),
            "crypto" => Ok(Category::Crypto),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
