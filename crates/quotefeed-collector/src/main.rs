//! 일봉 시세 RSS 피드 생성 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 스케줄 실행 (같은 거래일 재실행 시 항목 중복 없음)
//! quotefeed --base-url https://example.github.io/stock-rss
//!
//! # 수동 실행 (새 식별자로 구독자에게 강제 노출)
//! quotefeed --base-url https://example.github.io/stock-rss --manual
//!
//! # 경로 지정
//! quotefeed --config config/instruments.toml --output public/feed.xml \
//!     --base-url https://example.github.io/stock-rss
//! ```

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use quotefeed_collector::{pipeline, CollectorConfig, FeedOptions, RunMode};
use quotefeed_core::logging::{init_logging, LogConfig, LogFormat};
use quotefeed_provider::YahooQuoteProvider;

#[derive(Parser)]
#[command(name = "quotefeed")]
#[command(about = "Daily OHLCV quotes to RSS feed generator", long_about = None)]
#[command(version)]
struct Cli {
    /// 공개 URL (채널/항목 링크 생성용)
    #[arg(long)]
    base_url: String,

    /// 수동 실행: 새 항목 식별자를 발급하여 구독자에게 강제 노출
    #[arg(long, default_value = "false")]
    manual: bool,

    /// 종목 목록 파일 (JSON 또는 TOML)
    #[arg(long, default_value = "stock_list.json")]
    config: String,

    /// 출력 RSS 파일 (이전 피드로도 사용)
    #[arg(long, default_value = "feed.xml")]
    output: String,

    /// 피드에 유지할 최대 항목 수
    #[arg(long, default_value_t = 200)]
    max_items: usize,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 로그 형식 (pretty, json, compact). 기본: LOG_FORMAT 환경변수 또는 compact
    #[arg(long)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    // 로깅 초기화
    let filter = format!(
        "quotefeed={0},quotefeed_collector={0},quotefeed_provider={0},quotefeed_core={0}",
        cli.log_level
    );
    let log_config = match cli.log_format {
        Some(format) => LogConfig::new(filter).with_format(format),
        None => LogConfig::new(filter).with_format_from_env(),
    };
    init_logging(log_config).map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

    let mode = RunMode::from_manual_flag(cli.manual);
    tracing::info!(mode = ?mode, "QuoteFeed 시작");

    // 설정 로드
    let feed = FeedOptions::new(cli.base_url)
        .with_mode(mode)
        .with_max_items(cli.max_items);
    let config = CollectorConfig::new(cli.config, cli.output, feed).with_env_overrides();
    config.validate().context("실행 옵션 검증 실패")?;
    tracing::debug!(
        config = %config.instruments_path.display(),
        output = %config.output_path.display(),
        range = %config.fetch.history_range,
        "설정 로드 완료"
    );

    let provider = YahooQuoteProvider::with_range(config.fetch.history_range.clone())
        .context("Yahoo Finance 제공자 초기화 실패")?;

    let report = pipeline::run(&config, &provider, Utc::now())
        .await
        .context("피드 생성 실패")?;
    report.stats.log_summary("피드 생성");

    tracing::info!(
        output = %config.output_path.display(),
        items = report.document.item_count(),
        title = %report.document.channel.title,
        "QuoteFeed 종료"
    );

    Ok(())
}
