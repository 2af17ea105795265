//! 파이프라인 통합 테스트
//!
//! 시뮬레이션 제공자로 설정 로드부터 피드 파일 저장까지 실행합니다.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use quotefeed_collector::feed::parse_rss_items;
use quotefeed_collector::{
    pipeline, CollectorConfig, CollectorError, FeedItem, FeedOptions, RunMode,
};
use quotefeed_core::{Category, Quote};
use quotefeed_provider::{ProviderError, SimulatedQuoteProvider};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

const BASE_URL: &str = "https://example.github.io/stock-rss";

const ONE_PER_CATEGORY: &str = r#"[
    {"name": "Bitcoin", "symbol": "BTC-USD", "category": "crypto"},
    {"name": "Apple", "symbol": "AAPL", "category": "stock"},
    {"name": "S&P 500", "symbol": "^GSPC", "category": "index"}
]"#;

fn run_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 21, 5, 0).unwrap()
}

fn trade_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn quote(open: Decimal, close: Decimal) -> Quote {
    Quote::from_ohlcv(
        trade_date(),
        open,
        open.max(close) + dec!(1),
        open.min(close) - dec!(1),
        close,
        1_000_000,
    )
    .unwrap()
}

fn full_provider() -> SimulatedQuoteProvider {
    SimulatedQuoteProvider::new()
        .with_quote("^GSPC", quote(dec!(5100), dec!(5151)))
        .with_quote("AAPL", quote(dec!(170), dec!(168.3)))
        .with_quote("BTC-USD", quote(dec!(60000), dec!(66000)))
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(instruments_json: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stock_list.json"), instruments_json).unwrap();
        Self { dir }
    }

    fn output(&self) -> PathBuf {
        self.dir.path().join("feed.xml")
    }

    fn config(&self, mode: RunMode) -> CollectorConfig {
        let feed = FeedOptions::new(BASE_URL).with_mode(mode);
        let mut config =
            CollectorConfig::new(self.dir.path().join("stock_list.json"), self.output(), feed);
        config.fetch.request_delay_ms = 0;
        config
    }

    fn written_items(&self) -> Vec<FeedItem> {
        read_items(&self.output())
    }
}

fn read_items(path: &Path) -> Vec<FeedItem> {
    let xml = std::fs::read_to_string(path).unwrap();
    parse_rss_items(&xml).unwrap()
}

fn guids(items: &[FeedItem]) -> Vec<String> {
    items.iter().map(|i| i.guid.clone()).collect()
}

#[tokio::test]
async fn test_one_instrument_per_category() {
    let ws = Workspace::new(ONE_PER_CATEGORY);
    let provider = full_provider();

    let report = pipeline::run(&ws.config(RunMode::Normal), &provider, run_time())
        .await
        .unwrap();

    let doc = &report.document;
    assert_eq!(
        doc.section_order(),
        vec![Category::Index, Category::Stock, Category::Crypto]
    );
    assert!(doc.sections.iter().all(|s| s.items.len() == 1));
    assert!(doc.channel.title.contains("2024-03-15"));
    // 지수 +1.00%, 주식 -1.00% → 평균 0, 암호화폐 +10%는 제외
    assert!(
        doc.channel.title.ends_with("Avg +0.00% | Up 1 / Down 1"),
        "{}",
        doc.channel.title
    );

    assert_eq!(report.stats.success, 3);
    assert!(report.stats.warnings.is_empty());

    let written = ws.written_items();
    assert_eq!(
        guids(&written),
        vec!["^GSPC-2024-03-15", "AAPL-2024-03-15", "BTC-USD-2024-03-15"]
    );
    let categories: Vec<Option<&str>> = written.iter().map(|i| i.category.as_deref()).collect();
    assert_eq!(categories, vec![Some("Index"), Some("Stock"), Some("Crypto")]);
}

#[tokio::test]
async fn test_sections_ignore_config_order() {
    let ws = Workspace::new(
        r#"[
            {"name": "Ethereum", "symbol": "ETH-USD", "category": "crypto"},
            {"name": "Nvidia", "symbol": "NVDA", "category": "stock"},
            {"name": "Bitcoin", "symbol": "BTC-USD", "category": "crypto"},
            {"name": "Nasdaq", "symbol": "^IXIC", "category": "index"}
        ]"#,
    );
    let provider = SimulatedQuoteProvider::new()
        .with_quote("ETH-USD", quote(dec!(3000), dec!(3100)))
        .with_quote("NVDA", quote(dec!(900), dec!(880)))
        .with_quote("BTC-USD", quote(dec!(60000), dec!(61000)))
        .with_quote("^IXIC", quote(dec!(16000), dec!(16100)));

    let report = pipeline::run(&ws.config(RunMode::Normal), &provider, run_time())
        .await
        .unwrap();

    assert_eq!(
        report.document.section_order(),
        vec![Category::Index, Category::Stock, Category::Crypto]
    );
    let crypto = report.document.section(Category::Crypto).unwrap();
    let crypto_guids: Vec<&str> = crypto.items.iter().map(|i| i.guid.as_str()).collect();
    assert_eq!(crypto_guids, vec!["ETH-USD-2024-03-15", "BTC-USD-2024-03-15"]);

    // 조회는 설정 순서대로
    assert_eq!(
        provider.requested_symbols(),
        vec!["ETH-USD", "NVDA", "BTC-USD", "^IXIC"]
    );
}

#[tokio::test]
async fn test_partial_failure_still_succeeds() {
    let ws = Workspace::new(ONE_PER_CATEGORY);
    let provider = SimulatedQuoteProvider::new()
        .with_quote("^GSPC", quote(dec!(5100), dec!(5151)))
        .with_failure("AAPL", ProviderError::NetworkError("connection reset".into()))
        .with_quote("BTC-USD", quote(dec!(60000), dec!(66000)));

    let report = pipeline::run(&ws.config(RunMode::Normal), &provider, run_time())
        .await
        .unwrap();

    assert_eq!(report.document.new_item_count(), 2);
    assert_eq!(report.stats.success, 2);
    assert_eq!(report.stats.errors, 1);
    assert_eq!(report.stats.warnings.len(), 1);
    assert_eq!(report.stats.warnings[0].symbol, "AAPL");
    assert_eq!(report.stats.warnings[0].kind, "network");
    assert_eq!(ws.written_items().len(), 2);
}

#[tokio::test]
async fn test_total_failure_is_fatal() {
    let ws = Workspace::new(ONE_PER_CATEGORY);
    let provider = SimulatedQuoteProvider::new()
        .with_failure("^GSPC", ProviderError::NoData("^GSPC".into()));

    let result = pipeline::run(&ws.config(RunMode::Normal), &provider, run_time()).await;

    assert!(matches!(result, Err(CollectorError::NoQuotes { attempted: 3 })));
    assert!(!ws.output().exists(), "실패 시 피드를 쓰지 않아야 함");
}

#[tokio::test]
async fn test_write_failure_is_fatal() {
    let ws = Workspace::new(ONE_PER_CATEGORY);
    // 출력 경로의 상위 경로가 디렉터리가 아닌 일반 파일
    let blocker = ws.dir.path().join("public");
    std::fs::write(&blocker, "not a directory").unwrap();

    let mut config = ws.config(RunMode::Normal);
    config.output_path = blocker.join("feed.xml");
    let provider = full_provider();

    let result = pipeline::run(&config, &provider, run_time()).await;

    assert!(matches!(result, Err(CollectorError::Io(_))));
    assert_eq!(provider.requested_symbols().len(), 3);
}

#[tokio::test]
async fn test_config_error_aborts_before_fetch() {
    let ws = Workspace::new(r#"[{"name": "Gold", "symbol": "GC=F", "category": "commodity"}]"#);
    let provider = full_provider();

    let result = pipeline::run(&ws.config(RunMode::Normal), &provider, run_time()).await;

    assert!(matches!(result, Err(CollectorError::Config(_))));
    assert!(provider.requested_symbols().is_empty());
}

#[tokio::test]
async fn test_unreadable_previous_feed_aborts_before_fetch() {
    let ws = Workspace::new(ONE_PER_CATEGORY);
    std::fs::write(ws.output(), "<rss><channel><item>").unwrap();
    let provider = full_provider();

    let result = pipeline::run(&ws.config(RunMode::Normal), &provider, run_time()).await;

    assert!(matches!(result, Err(CollectorError::PreviousFeed { .. })));
    assert!(provider.requested_symbols().is_empty());
    assert_eq!(
        std::fs::read_to_string(ws.output()).unwrap(),
        "<rss><channel><item>"
    );
}

#[tokio::test]
async fn test_normal_rerun_same_day_is_idempotent() {
    let ws = Workspace::new(ONE_PER_CATEGORY);
    let provider = full_provider();
    let config = ws.config(RunMode::Normal);

    let first = pipeline::run(&config, &provider, run_time()).await.unwrap();
    let second = pipeline::run(&config, &provider, run_time() + Duration::hours(1))
        .await
        .unwrap();

    let first_guids: HashSet<String> = first.document.new_items().map(|i| i.guid.clone()).collect();
    let second_guids: HashSet<String> =
        second.document.new_items().map(|i| i.guid.clone()).collect();
    assert_eq!(first_guids, second_guids);
    assert!(second.document.retained.is_empty());

    let written = ws.written_items();
    let unique: HashSet<String> = guids(&written).into_iter().collect();
    assert_eq!(written.len(), 3);
    assert_eq!(unique.len(), written.len(), "중복 항목이 없어야 함");
    assert_eq!(
        written[0].pub_date,
        Some(run_time() + Duration::hours(1)),
        "재실행 항목이 기존 항목을 대체"
    );
}

#[tokio::test]
async fn test_manual_rerun_creates_new_identifiers() {
    let ws = Workspace::new(ONE_PER_CATEGORY);
    let provider = full_provider();
    let config = ws.config(RunMode::Manual);

    let first = pipeline::run(&config, &provider, run_time()).await.unwrap();
    let second = pipeline::run(&config, &provider, run_time()).await.unwrap();

    let first_aapl = &first.document.section(Category::Stock).unwrap().items[0].guid;
    let second_aapl = &second.document.section(Category::Stock).unwrap().items[0].guid;
    assert!(first_aapl.starts_with("AAPL-2024-03-15-manual-"));
    assert_ne!(first_aapl, second_aapl);

    // 수동 모드는 중복 검사를 건너뛰므로 이전 항목이 모두 남음
    assert_eq!(second.document.retained.len(), 3);
    assert_eq!(ws.written_items().len(), 6);
}

#[tokio::test]
async fn test_new_trading_day_appends_and_caps() {
    let ws = Workspace::new(ONE_PER_CATEGORY);
    let provider = full_provider();

    pipeline::run(&ws.config(RunMode::Normal), &provider, run_time())
        .await
        .unwrap();

    let next_day = trade_date().succ_opt().unwrap();
    let next_quote = |open: Decimal, close: Decimal| {
        let mut q = quote(open, close);
        q.as_of_date = next_day;
        q
    };
    let provider = SimulatedQuoteProvider::new()
        .with_quote("^GSPC", next_quote(dec!(5151), dec!(5160)))
        .with_quote("AAPL", next_quote(dec!(168), dec!(170)))
        .with_quote("BTC-USD", next_quote(dec!(66000), dec!(65000)));

    let mut config = ws.config(RunMode::Normal);
    config.feed = config.feed.with_max_items(4);
    let report = pipeline::run(&config, &provider, run_time() + Duration::days(1))
        .await
        .unwrap();

    assert_eq!(report.document.new_item_count(), 3);
    assert_eq!(report.document.retained.len(), 1);
    assert_eq!(report.stats.items_written(), 4);

    let written = guids(&ws.written_items());
    assert_eq!(
        written,
        vec![
            "^GSPC-2024-03-16",
            "AAPL-2024-03-16",
            "BTC-USD-2024-03-16",
            "^GSPC-2024-03-15",
        ]
    );
}
