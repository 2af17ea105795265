//! 이전 피드 항목 병합 (거래일 중복 제거).

use std::cmp::Reverse;

use super::model::FeedItem;
use crate::config::RunMode;

/// 이전 피드 항목 중 유지할 항목을 고릅니다.
///
/// - 식별자가 없는 항목은 버립니다.
/// - 일반 모드: 이번 실행 항목과 식별자가 같은 항목(같은 종목+거래일)은 버립니다.
/// - 수동 모드: 중복 검사 없이 모두 유지합니다.
/// - 게시 시각 내림차순으로 정렬하며 (시각 없는 항목은 마지막), `capacity`개까지 남깁니다.
pub fn retain_previous(
    previous: Vec<FeedItem>,
    new_guids: &[&str],
    mode: RunMode,
    capacity: usize,
) -> Vec<FeedItem> {
    let mut retained: Vec<FeedItem> = previous
        .into_iter()
        .filter(|item| !item.guid.trim().is_empty())
        .filter(|item| mode.is_manual() || !new_guids.contains(&item.guid.as_str()))
        .collect();

    // 안정 정렬: 같은 시각이면 기존 순서 유지
    retained.sort_by_key(|item| Reverse(item.pub_date));
    retained.truncate(capacity);
    retained
}
