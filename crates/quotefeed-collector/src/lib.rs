//! 일봉 시세를 RSS 피드로 만드는 수집기.
//!
//! 이 crate는 스케줄러가 하루 한 번 실행하는 바이너리를 제공합니다:
//! - 종목 목록 로드 및 검증
//! - 종목별 최신 일봉 조회 (실패 종목은 경고 후 제외)
//! - 카테고리별 섹션 구성 (지수 → 주식 → 암호화폐) 및 등락 요약
//! - 이전 피드와 병합(거래일 중복 제거) 후 RSS 2.0 파일 저장

pub mod config;
pub mod error;
pub mod feed;
pub mod pipeline;
pub mod stats;

pub use config::{CollectorConfig, FeedOptions, FetchConfig, RunMode};
pub use error::{CollectorError, Result};
pub use feed::{FeedDocument, FeedItem, FeedSection};
pub use pipeline::{run, RunReport};
pub use stats::{CollectionStats, FetchWarning};
