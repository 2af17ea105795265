//! 실행 설정 모듈.
//!
//! 경로와 실행 모드는 CLI 인자로, 조회 옵션과 피드 메타데이터는 환경변수로
//! 받습니다 (`.env` 파일 지원).

use std::path::PathBuf;
use std::time::Duration;

use quotefeed_provider::yahoo::DEFAULT_HISTORY_RANGE;

use crate::error::CollectorError;
use crate::Result;

/// 기본 종목 목록 파일
pub const DEFAULT_INSTRUMENTS_PATH: &str = "stock_list.json";
/// 기본 출력 파일
pub const DEFAULT_OUTPUT_PATH: &str = "feed.xml";
/// 피드에 유지할 최대 항목 수 기본값
pub const DEFAULT_MAX_ITEMS: usize = 200;

/// 실행 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// 스케줄 실행: 항목 식별자가 심볼+거래일로 고정되어 같은 날 재실행해도 중복되지 않음
    #[default]
    Normal,
    /// 수동 실행: 매번 새 식별자를 발급하여 구독자에게 새 항목으로 노출
    Manual,
}

impl RunMode {
    pub fn from_manual_flag(manual: bool) -> Self {
        if manual {
            RunMode::Manual
        } else {
            RunMode::Normal
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, RunMode::Manual)
    }
}

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 종목 목록 파일 경로
    pub instruments_path: PathBuf,
    /// 출력 RSS 파일 경로 (이전 피드 입력이기도 함)
    pub output_path: PathBuf,
    /// 피드 생성 옵션
    pub feed: FeedOptions,
    /// 시세 조회 옵션
    pub fetch: FetchConfig,
}

/// 피드 생성 옵션
#[derive(Debug, Clone)]
pub struct FeedOptions {
    /// 공개 URL (채널/항목 링크 생성용)
    pub base_url: String,
    /// 채널 제목 접두어
    pub title: String,
    /// 채널 설명
    pub description: String,
    /// 채널 언어 코드
    pub language: String,
    /// 피드에 유지할 최대 항목 수
    pub max_items: usize,
    /// 실행 모드
    pub mode: RunMode,
}

/// 시세 조회 옵션
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// 요청 간 딜레이 (밀리초)
    pub request_delay_ms: u64,
    /// Yahoo 조회 구간 (예: "10d")
    pub history_range: String,
}

impl FeedOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            title: "Market Daily OHLC Feed".to_string(),
            description: "Daily OHLCV updates for selected indexes, stocks and cryptocurrencies"
                .to_string(),
            language: "en-us".to_string(),
            max_items: DEFAULT_MAX_ITEMS,
            mode: RunMode::Normal,
        }
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// 끝의 `/`를 제거한 공개 URL.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// 채널 링크 (`{base_url}/`).
    pub fn channel_link(&self) -> String {
        format!("{}/", self.base_url_trimmed())
    }

    /// 항목 링크 (`{base_url}/feed.xml`).
    pub fn item_link(&self) -> String {
        format!("{}/feed.xml", self.base_url_trimmed())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: 300,
            history_range: DEFAULT_HISTORY_RANGE.to_string(),
        }
    }
}

impl FetchConfig {
    /// 요청 간 딜레이를 Duration으로 반환
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl CollectorConfig {
    pub fn new(
        instruments_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        feed: FeedOptions,
    ) -> Self {
        Self {
            instruments_path: instruments_path.into(),
            output_path: output_path.into(),
            feed,
            fetch: FetchConfig::default(),
        }
    }

    /// 환경변수로 조회 옵션과 피드 메타데이터를 덮어씁니다.
    ///
    /// - `QUOTEFEED_REQUEST_DELAY_MS`
    /// - `QUOTEFEED_HISTORY_RANGE`
    /// - `QUOTEFEED_FEED_TITLE`
    /// - `QUOTEFEED_FEED_LANGUAGE`
    ///
    /// `.env` 파일은 호출 전에 `dotenvy`로 로드되어 있어야 합니다.
    pub fn with_env_overrides(mut self) -> Self {
        self.fetch.request_delay_ms =
            env_var_parse("QUOTEFEED_REQUEST_DELAY_MS", self.fetch.request_delay_ms);
        if let Some(range) = env_var_non_empty("QUOTEFEED_HISTORY_RANGE") {
            self.fetch.history_range = range;
        }
        if let Some(title) = env_var_non_empty("QUOTEFEED_FEED_TITLE") {
            self.feed.title = title;
        }
        if let Some(language) = env_var_non_empty("QUOTEFEED_FEED_LANGUAGE") {
            self.feed.language = language;
        }
        self
    }

    /// 실행 전 옵션 검증.
    pub fn validate(&self) -> Result<()> {
        let base_url = self.feed.base_url_trimmed();
        if base_url.is_empty() {
            return Err(CollectorError::InvalidOption(
                "--base-url가 비어 있습니다".to_string(),
            ));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CollectorError::InvalidOption(format!(
                "--base-url은 http(s) URL이어야 합니다: {}",
                base_url
            )));
        }
        if self.feed.max_items == 0 {
            return Err(CollectorError::InvalidOption(
                "--max-items는 1 이상이어야 합니다".to_string(),
            ));
        }
        if self.fetch.history_range.trim().is_empty() {
            return Err(CollectorError::InvalidOption(
                "QUOTEFEED_HISTORY_RANGE가 비어 있습니다".to_string(),
            ));
        }
        Ok(())
    }
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_var_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> CollectorConfig {
        CollectorConfig::new("stock_list.json", "feed.xml", FeedOptions::new(base_url))
    }

    #[test]
    fn test_links_strip_trailing_slash() {
        let options = FeedOptions::new("https://example.github.io/stock-rss/");
        assert_eq!(options.channel_link(), "https://example.github.io/stock-rss/");
        assert_eq!(
            options.item_link(),
            "https://example.github.io/stock-rss/feed.xml"
        );
    }

    #[test]
    fn test_validate_base_url() {
        assert!(config("https://example.github.io/stock-rss").validate().is_ok());
        assert!(matches!(
            config("  ").validate(),
            Err(CollectorError::InvalidOption(_))
        ));
        assert!(matches!(
            config("example.github.io").validate(),
            Err(CollectorError::InvalidOption(_))
        ));
    }

    #[test]
    fn test_validate_max_items() {
        let mut cfg = config("https://example.com");
        cfg.feed = cfg.feed.with_max_items(0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_env_overrides_read_process_env() {
        std::env::set_var("QUOTEFEED_HISTORY_RANGE", "5d");
        std::env::set_var("QUOTEFEED_REQUEST_DELAY_MS", "not-a-number");

        let cfg = config("https://example.com").with_env_overrides();
        assert_eq!(cfg.fetch.history_range, "5d");
        assert_eq!(cfg.fetch.request_delay_ms, 300);

        std::env::remove_var("QUOTEFEED_HISTORY_RANGE");
        std::env::remove_var("QUOTEFEED_REQUEST_DELAY_MS");
    }

    #[test]
    fn test_run_mode_from_flag() {
        assert_eq!(RunMode::from_manual_flag(true), RunMode::Manual);
        assert_eq!(RunMode::from_manual_flag(false), RunMode::Normal);
        assert!(!RunMode::default().is_manual());
    }
}
