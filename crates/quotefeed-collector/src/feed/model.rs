//! RSS 피드 문서 모델.

use chrono::{DateTime, Utc};
use quotefeed_core::Category;

/// 피드 항목 하나.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// 고유 식별자 (`<guid isPermaLink="false">`)
    pub guid: String,
    pub title: String,
    pub link: String,
    /// HTML 조각 (XML에는 이스케이프되어 기록됨)
    pub description: String,
    /// 게시 시각 (이전 피드에서 해석 불가한 값은 None)
    pub pub_date: Option<DateTime<Utc>>,
    /// 섹션 이름 (`<category>`)
    pub category: Option<String>,
}

/// 카테고리 섹션.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSection {
    pub category: Category,
    pub items: Vec<FeedItem>,
}

/// 채널 메타데이터.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMeta {
    /// 날짜와 등락 요약을 포함한 제목
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub last_build_date: DateTime<Utc>,
}

/// 한 번의 실행으로 만들어지는 피드 문서.
///
/// 항목 순서: 이번 실행 섹션(지수 → 주식 → 암호화폐) 다음 이전 피드에서 유지한 항목.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    pub channel: ChannelMeta,
    /// 비어 있지 않은 섹션만, 고정 순서로
    pub sections: Vec<FeedSection>,
    /// 이전 피드에서 유지한 항목 (게시 시각 내림차순)
    pub retained: Vec<FeedItem>,
}

impl FeedDocument {
    /// 이번 실행에서 생성한 항목.
    pub fn new_items(&self) -> impl Iterator<Item = &FeedItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// 문서 순서대로 모든 항목.
    pub fn items(&self) -> impl Iterator<Item = &FeedItem> {
        self.new_items().chain(self.retained.iter())
    }

    pub fn new_item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn item_count(&self) -> usize {
        self.new_item_count() + self.retained.len()
    }

    /// 섹션 카테고리 순서.
    pub fn section_order(&self) -> Vec<Category> {
        self.sections.iter().map(|s| s.category).collect()
    }

    /// 카테고리 섹션 조회.
    pub fn section(&self, category: Category) -> Option<&FeedSection> {
        self.sections.iter().find(|s| s.category == category)
    }
}
