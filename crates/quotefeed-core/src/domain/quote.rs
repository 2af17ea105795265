//! 일봉 시세 데이터.
//!
//! - `Quote` - 한 종목의 하루치 OHLCV와 장중 등락률
//! - `Snapshot` - 종목과 조회된 시세의 묶음

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Category, Instrument, Percentage, Price};

/// 한 종목의 하루치 시세.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// 시가
    pub open: Price,
    /// 종가
    pub close: Price,
    /// 고가
    pub high: Price,
    /// 저가
    pub low: Price,
    /// 거래량
    pub volume: u64,
    /// 장중 등락률 (시가 대비 종가, %)
    pub change_percent: Percentage,
    /// 거래일 (거래소 현지 날짜)
    pub as_of_date: NaiveDate,
}

impl Quote {
    /// OHLCV로부터 시세를 생성합니다. 등락률은 시가 대비 종가로 계산합니다.
    ///
    /// 등락률을 `Decimal` 범위로 표현할 수 없으면 None을 반환합니다.
    pub fn from_ohlcv(
        as_of_date: NaiveDate,
        open: Price,
        high: Price,
        low: Price,
        close: Price,
        volume: u64,
    ) -> Option<Self> {
        Some(Self {
            open,
            close,
            high,
            low,
            volume,
            change_percent: intraday_change_percent(open, close)?,
            as_of_date,
        })
    }

    /// 상승(보합 포함) 여부.
    pub fn is_advancing(&self) -> bool {
        self.change_percent >= Decimal::ZERO
    }
}

/// 시가 대비 종가 등락률 (%). 시가가 0이면 0을 반환합니다.
///
/// 0에 가까운 시가처럼 결과가 범위를 넘으면 None.
pub fn intraday_change_percent(open: Price, close: Price) -> Option<Percentage> {
    if open.is_zero() {
        return Some(Decimal::ZERO);
    }
    close
        .checked_sub(open)?
        .checked_div(open)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// 종목과 해당 종목의 최신 시세.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub instrument: Instrument,
    pub quote: Quote,
}

impl Snapshot {
    pub fn new(instrument: Instrument, quote: Quote) -> Self {
        Self { instrument, quote }
    }

    pub fn category(&self) -> Category {
        self.instrument.category
    }

    pub fn symbol(&self) -> &str {
        &self.instrument.symbol
    }
}
