//! RSS 피드 생성 모듈.
//!
//! - `builder` - 시세로부터 문서 생성 (섹션, 제목, 식별자)
//! - `merge` - 이전 피드 항목 병합 및 거래일 중복 제거
//! - `reader` - 이전 피드 파일 읽기
//! - `writer` - RSS 2.0 직렬화 및 저장

pub mod builder;
pub mod merge;
pub mod model;
pub mod reader;
pub mod writer;

pub use builder::{build_feed, build_item, channel_title, item_guid};
pub use merge::retain_previous;
pub use model::{ChannelMeta, FeedDocument, FeedItem, FeedSection};
pub use reader::{parse_rss_items, read_previous_feed};
pub use writer::{render_rss, write_feed};
