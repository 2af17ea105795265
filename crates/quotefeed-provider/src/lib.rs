//! 시세 데이터 제공자.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - `QuoteProvider` trait: 심볼별 최신 일봉 조회 인터페이스
//! - Yahoo Finance 제공자
//! - 시뮬레이션 제공자 (테스트 및 오프라인 실행용)

pub mod error;
pub mod simulated;
pub mod traits;
pub mod yahoo;

pub use error::*;
pub use simulated::SimulatedQuoteProvider;
pub use traits::*;
pub use yahoo::YahooQuoteProvider;
