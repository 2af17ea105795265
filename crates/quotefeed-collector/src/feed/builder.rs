//! 피드 문서 생성.
//!
//! (종목 시세, 이전 피드 항목, 실행 시각, 실행 모드)만으로 문서를 만듭니다.
//! 파일/네트워크 접근은 없습니다.

use chrono::{DateTime, Utc};
use quick_xml::escape::escape;
use quotefeed_core::{
    format_change_percent, format_price, format_volume, Category, MarketSummary, Snapshot,
};
use uuid::Uuid;

use super::merge::retain_previous;
use super::model::{ChannelMeta, FeedDocument, FeedItem, FeedSection};
use crate::config::{FeedOptions, RunMode};

/// 항목 식별자.
///
/// - 일반 모드: `{symbol}-{거래일}` (같은 거래일 재실행 시 동일)
/// - 수동 모드: `{symbol}-{거래일}-manual-{실행시각}-{난수}` (매 실행 고유)
pub fn item_guid(snapshot: &Snapshot, mode: RunMode, now: DateTime<Utc>) -> String {
    let base = format!("{}-{}", snapshot.symbol(), snapshot.quote.as_of_date);
    match mode {
        RunMode::Normal => base,
        RunMode::Manual => {
            let nonce = Uuid::new_v4().simple().to_string();
            format!(
                "{}-manual-{}-{}",
                base,
                now.format("%Y%m%d%H%M%S"),
                &nonce[..8]
            )
        }
    }
}

/// 종목 시세 하나를 피드 항목으로 만듭니다.
pub fn build_item(snapshot: &Snapshot, options: &FeedOptions, now: DateTime<Utc>) -> FeedItem {
    let quote = &snapshot.quote;
    let change = format_change_percent(quote.change_percent);

    FeedItem {
        guid: item_guid(snapshot, options.mode, now),
        title: format!("{} | {} | {}", snapshot.instrument, quote.as_of_date, change),
        link: options.item_link(),
        description: render_description(snapshot, now),
        pub_date: Some(now),
        category: Some(snapshot.category().label().to_string()),
    }
}

/// 항목 본문 (HTML 조각).
fn render_description(snapshot: &Snapshot, now: DateTime<Utc>) -> String {
    let quote = &snapshot.quote;
    let mut html = String::new();

    html.push_str(&format!(
        "<p><strong>{}</strong> | {} | {}</p>",
        escape(snapshot.instrument.to_string().as_str()),
        snapshot.category().label(),
        quote.as_of_date
    ));
    html.push_str("<table border='1' cellpadding='6' cellspacing='0'>");
    html.push_str(
        "<tr><th>Change%</th><th>Open</th><th>Close</th><th>High</th><th>Low</th><th>Volume</th></tr>",
    );
    html.push_str(&format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        format_change_percent(quote.change_percent),
        format_price(quote.open),
        format_price(quote.close),
        format_price(quote.high),
        format_price(quote.low),
        format_volume(quote.volume)
    ));
    html.push_str("</table>");
    html.push_str(&format!(
        "<p>Generated (UTC): {}</p>",
        now.format("%Y-%m-%d %H:%M:%S")
    ));
    html
}

/// 채널 제목: `{제목} | {실행일} | {지수+주식 등락 요약}`.
pub fn channel_title(options: &FeedOptions, summary: &MarketSummary, now: DateTime<Utc>) -> String {
    format!("{} | {} | {}", options.title, now.format("%Y-%m-%d"), summary)
}

/// 카테고리별 섹션을 고정 순서(지수 → 주식 → 암호화폐)로 구성합니다.
///
/// 섹션 안에서는 입력(설정 파일) 순서를 유지하며, 빈 섹션은 생략합니다.
pub fn build_sections(
    snapshots: &[Snapshot],
    options: &FeedOptions,
    now: DateTime<Utc>,
) -> Vec<FeedSection> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let items: Vec<FeedItem> = snapshots
                .iter()
                .filter(|s| s.category() == category)
                .map(|s| build_item(s, options, now))
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(FeedSection { category, items })
            }
        })
        .collect()
}

/// 피드 문서를 생성합니다.
///
/// 이전 피드 항목은 실행 모드에 따라 거래일 중복 제거 후 유지됩니다.
pub fn build_feed(
    snapshots: &[Snapshot],
    previous: Vec<FeedItem>,
    options: &FeedOptions,
    now: DateTime<Utc>,
) -> FeedDocument {
    let summary = MarketSummary::from_snapshots(snapshots);
    let sections = build_sections(snapshots, options, now);

    let new_guids: Vec<&str> = sections
        .iter()
        .flat_map(|s| s.items.iter().map(|i| i.guid.as_str()))
        .collect();
    let new_count = new_guids.len();
    let capacity = options.max_items.saturating_sub(new_count);
    let retained = retain_previous(previous, &new_guids, options.mode, capacity);

    FeedDocument {
        channel: ChannelMeta {
            title: channel_title(options, &summary, now),
            link: options.channel_link(),
            description: options.description.clone(),
            language: options.language.clone(),
            last_build_date: now,
        },
        sections,
        retained,
    }
}
