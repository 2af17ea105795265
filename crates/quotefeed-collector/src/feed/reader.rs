//! 이전 피드 파일 읽기.
//!
//! 직전 실행이 쓴 RSS 파일이 파이프라인의 유일한 입력 상태입니다.
//! 채널의 `<item>`만 읽고 나머지 요소는 무시합니다. `<item>` 사이에 다른
//! 채널 요소가 끼어 있어도 읽을 수 있도록 quick-xml의 `overlapped-lists`
//! 기능을 사용합니다.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::model::FeedItem;
use crate::error::CollectorError;
use crate::Result;

#[derive(Debug, Deserialize)]
struct RawRss {
    channel: RawChannel,
}

#[derive(Debug, Deserialize)]
struct RawChannel {
    #[serde(rename = "item", default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    guid: Option<RawGuid>,
    #[serde(rename = "pubDate", default)]
    pub_date: Option<String>,
    /// 여러 개일 수 있으며 비어 있지 않은 첫 값만 사용
    #[serde(rename = "category", default)]
    categories: Vec<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawGuid {
    #[serde(rename = "$text", default)]
    value: String,
}

impl From<RawItem> for FeedItem {
    fn from(raw: RawItem) -> Self {
        FeedItem {
            guid: raw.guid.map(|g| g.value.trim().to_string()).unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            link: raw.link.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            pub_date: raw.pub_date.as_deref().and_then(parse_pub_date),
            category: raw
                .categories
                .into_iter()
                .map(|c| c.trim().to_string())
                .find(|c| !c.is_empty()),
        }
    }
}

/// RFC 2822 게시 시각 해석. 해석할 수 없으면 None.
pub fn parse_pub_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// RSS 문자열에서 항목을 읽습니다.
pub fn parse_rss_items(xml: &str) -> std::result::Result<Vec<FeedItem>, quick_xml::DeError> {
    let rss: RawRss = quick_xml::de::from_str(xml)?;
    Ok(rss.channel.items.into_iter().map(FeedItem::from).collect())
}

/// 이전 피드 파일을 읽습니다.
///
/// 파일이 없으면 빈 목록을 반환합니다 (첫 실행). 파일이 있지만 해석할 수 없으면
/// 기존 이력을 덮어쓰지 않도록 에러를 반환합니다.
pub fn read_previous_feed(path: &Path) -> Result<Vec<FeedItem>> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "이전 피드 없음, 새로 생성합니다");
        return Ok(Vec::new());
    }

    let xml = std::fs::read_to_string(path)?;
    let items = parse_rss_items(&xml).map_err(|e| CollectorError::PreviousFeed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::info!(path = %path.display(), items = items.len(), "이전 피드 로드 완료");
    Ok(items)
}
