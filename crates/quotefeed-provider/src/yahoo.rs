//! Yahoo Finance 시세 제공자.
//!
//! Yahoo Finance 차트 API에서 최근 일봉 구간을 조회한 뒤 가장 마지막 봉을
//! 최신 시세로 사용합니다.
//!
//! # 심볼 형식
//!
//! 모든 심볼은 Yahoo Finance 형식이어야 합니다:
//! - 지수: "^GSPC", "^IXIC", "^KS11"
//! - 주식: "AAPL", "005930.KS"
//! - 암호화폐: "BTC-USD"
//!
//! # 거래일
//!
//! 일봉 타임스탬프는 장 시작 시각(UTC)이므로, 응답 메타데이터의 GMT 오프셋을
//! 더해 거래소 현지 날짜로 변환합니다. 아시아 시장 일봉이 UTC 기준 전날로
//! 찍히는 문제를 막기 위함입니다.

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use quotefeed_core::Quote;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::{ProviderError, QuoteProvider};

/// 기본 조회 구간 (주말/휴장일을 고려하여 여유 있게).
pub const DEFAULT_HISTORY_RANGE: &str = "10d";

/// 일봉 간격.
const DAILY_INTERVAL: &str = "1d";

/// Yahoo Finance 기반 시세 제공자.
pub struct YahooQuoteProvider {
    connector: yahoo::YahooConnector,
    range: String,
}

impl YahooQuoteProvider {
    /// 기본 조회 구간으로 제공자를 생성합니다.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_range(DEFAULT_HISTORY_RANGE)
    }

    /// 조회 구간을 지정하여 제공자를 생성합니다 (예: "5d", "1mo").
    pub fn with_range(range: impl Into<String>) -> Result<Self, ProviderError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| {
            ProviderError::NetworkError(format!("Yahoo Finance 연결 실패: {}", e))
        })?;

        Ok(Self {
            connector,
            range: range.into(),
        })
    }

    /// 조회 구간.
    pub fn range(&self) -> &str {
        &self.range
    }
}

/// Yahoo 일봉 하나를 시세로 변환합니다.
///
/// 종가가 0이거나 유효하지 않은 봉(휴장일에 채워진 빈 봉 등), 등락률을 표현할 수
/// 없는 봉은 None을 반환합니다.
pub(crate) fn bar_to_quote(
    timestamp: i64,
    gmt_offset_secs: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
) -> Option<Quote> {
    let close = to_price(close)?;
    if close.is_zero() {
        return None;
    }

    let as_of_date = local_trade_date(timestamp, gmt_offset_secs)?;

    Quote::from_ohlcv(
        as_of_date,
        to_price(open).unwrap_or_default(),
        to_price(high).unwrap_or_default(),
        to_price(low).unwrap_or_default(),
        close,
        volume,
    )
}

/// 타임스탬프를 거래소 현지 날짜로 변환합니다.
pub(crate) fn local_trade_date(timestamp: i64, gmt_offset_secs: i64) -> Option<NaiveDate> {
    Utc.timestamp_opt(timestamp + gmt_offset_secs, 0)
        .single()
        .map(|dt| dt.date_naive())
}

fn to_price(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64_retain(value)
}

#[async_trait]
impl QuoteProvider for YahooQuoteProvider {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn latest_quote(&self, symbol: &str) -> Result<Quote, ProviderError> {
        debug!(
            symbol = symbol,
            interval = DAILY_INTERVAL,
            range = %self.range,
            "Yahoo Finance API 호출"
        );

        let response = self
            .connector
            .get_quote_range(symbol, DAILY_INTERVAL, &self.range)
            .await
            .map_err(|e| ProviderError::ApiError {
                symbol: symbol.to_string(),
                message: e.to_string(),
            })?;

        let quotes = response
            .quotes()
            .map_err(|e| ProviderError::ParseError(format!("Quote 파싱 오류 ({}): {}", symbol, e)))?;

        let gmt_offset = match response.metadata() {
            Ok(meta) => meta.gmtoffset as i64,
            Err(e) => {
                warn!(symbol = symbol, error = %e, "메타데이터 조회 실패, UTC 날짜 사용");
                0
            }
        };

        // 시간순 마지막 유효 봉
        let mut bars = quotes;
        bars.sort_by_key(|q| q.timestamp);
        let quote = bars
            .iter()
            .rev()
            .find_map(|q| {
                bar_to_quote(
                    q.timestamp as i64,
                    gmt_offset,
                    q.open,
                    q.high,
                    q.low,
                    q.close,
                    q.volume as u64,
                )
            })
            .ok_or_else(|| ProviderError::NoData(format!("{} 최근 {} 일봉 없음", symbol, self.range)))?;

        debug!(
            symbol = symbol,
            bars = bars.len(),
            as_of = %quote.as_of_date,
            "Yahoo Finance 일봉 수신"
        );

        Ok(quote)
    }
}
