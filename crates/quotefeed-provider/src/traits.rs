//! 시세 제공자 인터페이스.

use async_trait::async_trait;
use quotefeed_core::Quote;

use crate::ProviderError;

/// 심볼별 최신 일봉을 조회하는 제공자.
///
/// 읽기 전용이며 한 번의 실행에서 종목당 한 번 호출됩니다.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// 제공자 이름 (로그용).
    fn name(&self) -> &str;

    /// 가장 최근 거래일의 일봉을 조회합니다.
    ///
    /// # 인자
    /// * `symbol` - 제공자 형식의 심볼 (예: "^GSPC", "AAPL", "BTC-USD")
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, ProviderError>;
}
