//! 시뮬레이션 시세 제공자.
//!
//! 네트워크 없이 미리 등록한 시세를 반환합니다. 파이프라인 테스트와
//! 오프라인 실행에 사용합니다.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use quotefeed_core::Quote;

use crate::{ProviderError, QuoteProvider};

/// 심볼별로 고정된 응답을 돌려주는 제공자.
#[derive(Default)]
pub struct SimulatedQuoteProvider {
    responses: HashMap<String, Result<Quote, ProviderError>>,
    requests: Mutex<Vec<String>>,
}

impl SimulatedQuoteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// 심볼에 대한 시세를 등록합니다.
    pub fn with_quote(mut self, symbol: impl Into<String>, quote: Quote) -> Self {
        self.responses.insert(symbol.into(), Ok(quote));
        self
    }

    /// 심볼 조회가 지정한 에러로 실패하도록 등록합니다.
    pub fn with_failure(mut self, symbol: impl Into<String>, error: ProviderError) -> Self {
        self.responses.insert(symbol.into(), Err(error));
        self
    }

    /// 지금까지 요청된 심볼 (요청 순서대로).
    pub fn requested_symbols(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl QuoteProvider for SimulatedQuoteProvider {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn latest_quote(&self, symbol: &str) -> Result<Quote, ProviderError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(symbol.to_string());
        }

        match self.responses.get(symbol) {
            Some(response) => response.clone(),
            None => Err(ProviderError::SymbolNotFound(symbol.to_string())),
        }
    }
}
