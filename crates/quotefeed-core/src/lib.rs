//! # QuoteFeed Core
//!
//! 시세 피드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 종목 및 카테고리 정의
//! - 일봉 시세(OHLCV) 구조체
//! - 종목 목록 설정 로더
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
