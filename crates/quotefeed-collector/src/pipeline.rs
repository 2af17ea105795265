//! 피드 생성 파이프라인.
//!
//! 종목 목록 로드 → 이전 피드 읽기 → 종목별 시세 조회 → 문서 생성 → 저장.
//! 설정/이전 피드 에러는 네트워크 호출 전에 실행을 중단시킵니다.

use std::time::Instant;

use chrono::{DateTime, Utc};
use quotefeed_core::{InstrumentList, Snapshot};
use quotefeed_provider::QuoteProvider;

use crate::error::CollectorError;
use crate::feed::{build_feed, read_previous_feed, write_feed, FeedDocument};
use crate::{CollectionStats, CollectorConfig, FetchConfig, Result};

/// 한 번의 실행 결과
#[derive(Debug, Clone)]
pub struct RunReport {
    pub stats: CollectionStats,
    pub document: FeedDocument,
}

/// 종목별 최신 시세를 순차 조회합니다.
///
/// 실패한 종목은 경고로 기록하고 건너뜁니다. 결과는 설정 순서를 따릅니다.
pub async fn fetch_snapshots<P>(
    provider: &P,
    instruments: &InstrumentList,
    fetch: &FetchConfig,
    stats: &mut CollectionStats,
) -> Vec<Snapshot>
where
    P: QuoteProvider + ?Sized,
{
    let mut snapshots = Vec::with_capacity(instruments.len());

    for (idx, instrument) in instruments.instruments().iter().enumerate() {
        stats.total += 1;

        if idx > 0 && !fetch.request_delay().is_zero() {
            tokio::time::sleep(fetch.request_delay()).await;
        }

        tracing::debug!(
            symbol = %instrument.symbol,
            provider = provider.name(),
            progress = format!("{}/{}", idx + 1, instruments.len()),
            "조회 시작"
        );

        match provider.latest_quote(&instrument.symbol).await {
            Ok(quote) => {
                stats.success += 1;
                tracing::info!(
                    symbol = %instrument.symbol,
                    category = %instrument.category,
                    as_of = %quote.as_of_date,
                    "조회 완료"
                );
                snapshots.push(Snapshot::new(instrument.clone(), quote));
            }
            Err(e) => {
                tracing::warn!(
                    symbol = %instrument.symbol,
                    kind = e.kind(),
                    error = %e,
                    "조회 실패, 피드에서 제외"
                );
                stats.record_failure(&instrument.symbol, e.kind(), e.to_string());
            }
        }
    }

    snapshots
}

/// 파이프라인 전체 실행.
///
/// `now`는 실행 시각으로, 채널 제목 날짜와 게시 시각, 수동 모드 식별자에 쓰입니다.
pub async fn run<P>(config: &CollectorConfig, provider: &P, now: DateTime<Utc>) -> Result<RunReport>
where
    P: QuoteProvider + ?Sized,
{
    let start = Instant::now();
    let mut stats = CollectionStats::new();

    config.validate()?;

    let instruments = InstrumentList::load(&config.instruments_path)?;
    tracing::info!(
        path = %config.instruments_path.display(),
        count = instruments.len(),
        mode = ?config.feed.mode,
        "종목 목록 로드 완료"
    );

    let previous = read_previous_feed(&config.output_path)?;

    let snapshots = fetch_snapshots(provider, &instruments, &config.fetch, &mut stats).await;
    if snapshots.is_empty() {
        stats.elapsed = start.elapsed();
        tracing::error!(attempted = stats.total, "조회된 시세가 없습니다");
        return Err(CollectorError::NoQuotes {
            attempted: stats.total,
        });
    }

    let document = build_feed(&snapshots, previous, &config.feed, now);
    stats.new_items = document.new_item_count();
    stats.retained_items = document.retained.len();

    write_feed(&config.output_path, &document)?;

    stats.elapsed = start.elapsed();
    Ok(RunReport { stats, document })
}
