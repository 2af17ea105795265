//! 장 마감 등락 요약.
//!
//! 지수와 주식 시세만 집계합니다. 암호화폐는 24시간 거래되어 "거래일"
//! 단위 비교를 왜곡하므로 어떤 경우에도 집계에 들어가지 않습니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Snapshot;
use crate::types::{format_change_percent, Percentage};

/// 지수+주식 시세의 등락 요약.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarketSummary {
    /// 상승(보합 포함) 종목 수
    pub advancing: usize,
    /// 하락 종목 수
    pub declining: usize,
    /// 평균 등락률 (집계 대상이 없으면 None)
    pub average_change: Option<Percentage>,
}

impl MarketSummary {
    /// 시세 목록에서 요약을 계산합니다.
    pub fn from_snapshots<'a, I>(snapshots: I) -> Self
    where
        I: IntoIterator<Item = &'a Snapshot>,
    {
        let mut summary = Self::default();
        let mut changes = Vec::new();

        for snapshot in snapshots
            .into_iter()
            .filter(|s| s.category().counts_toward_market_change())
        {
            if snapshot.quote.is_advancing() {
                summary.advancing += 1;
            } else {
                summary.declining += 1;
            }
            changes.push(snapshot.quote.change_percent);
        }

        summary.average_change = average(&changes);
        summary
    }

    /// 집계에 포함된 종목 수.
    pub fn counted(&self) -> usize {
        self.advancing + self.declining
    }
}

/// 평균. 합계가 `Decimal` 범위를 넘으면 항목별로 나눈 뒤 더합니다.
fn average(values: &[Percentage]) -> Option<Percentage> {
    if values.is_empty() {
        return None;
    }
    let count = Decimal::from(values.len());

    match values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
    {
        Some(total) => total.checked_div(count),
        None => values
            .iter()
            .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v / count)),
    }
}

impl fmt::Display for MarketSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average_change {
            Some(avg) => write!(
                f,
                "Avg {} | Up {} / Down {}",
                format_change_percent(avg),
                self.advancing,
                self.declining
            ),
            None => write!(f, "No index/stock quotes"),
        }
    }
}
