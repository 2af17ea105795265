//! 수집 통계 구조체.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 종목 조회 실패 기록
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchWarning {
    /// 실패한 심볼
    pub symbol: String,
    /// 에러 분류 (network, api, no_data ...)
    pub kind: String,
    /// 에러 메시지
    pub message: String,
}

/// 수집 작업 통계
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionStats {
    /// 총 시도 횟수
    pub total: usize,
    /// 성공 횟수
    pub success: usize,
    /// 에러 횟수
    pub errors: usize,
    /// 빈 데이터 (조회 성공, 일봉 없음)
    pub empty: usize,
    /// 이번 실행에서 생성한 항목 수
    pub new_items: usize,
    /// 이전 피드에서 유지한 항목 수
    pub retained_items: usize,
    /// 실패 종목 목록 (경고)
    pub warnings: Vec<FetchWarning>,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl CollectionStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 실패 종목 기록
    pub fn record_failure(&mut self, symbol: &str, kind: &str, message: impl Into<String>) {
        if kind == "no_data" {
            self.empty += 1;
        } else {
            self.errors += 1;
        }
        self.warnings.push(FetchWarning {
            symbol: symbol.to_string(),
            kind: kind.to_string(),
            message: message.into(),
        });
    }

    /// 성공률 계산 (%)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }

    /// 피드에 기록된 총 항목 수
    pub fn items_written(&self) -> usize {
        self.new_items + self.retained_items
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            total = self.total,
            success = self.success,
            errors = self.errors,
            empty = self.empty,
            new_items = self.new_items,
            retained_items = self.retained_items,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "수집 완료"
        );

        if !self.warnings.is_empty() {
            let skipped: Vec<&str> = self.warnings.iter().map(|w| w.symbol.as_str()).collect();
            tracing::warn!(skipped = ?skipped, "일부 종목이 피드에서 제외되었습니다");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_failure() {
        let mut stats = CollectionStats::new();
        stats.total = 3;
        stats.success = 1;
        stats.record_failure("XYZ", "symbol_not_found", "Symbol not found: XYZ");
        stats.record_failure("ABC", "no_data", "No data: ABC");

        assert_eq!(stats.errors, 1);
        assert_eq!(stats.empty, 1);
        assert_eq!(stats.warnings.len(), 2);
        assert_eq!(stats.warnings[0].symbol, "XYZ");
    }

    #[test]
    fn test_success_rate() {
        let mut stats = CollectionStats::new();
        assert_eq!(stats.success_rate(), 0.0);
        stats.total = 4;
        stats.success = 3;
        assert!((stats.success_rate() - 75.0).abs() < f64::EPSILON);
    }
}
