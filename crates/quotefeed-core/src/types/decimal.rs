//! 가격/등락률 표시를 위한 Decimal 유틸리티.

use rust_decimal::{Decimal, RoundingStrategy};

/// 금융 정밀도를 위한 가격 타입.
pub type Price = Decimal;

/// 퍼센트 타입 (1.25 = 1.25%).
pub type Percentage = Decimal;

/// 표시용 소수점 자릿수.
pub const DISPLAY_DP: u32 = 2;

/// 표시용 반올림 (0.005 → 0.01).
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// 가격을 소수점 둘째 자리까지 표시합니다 (예: "5123.40").
pub fn format_price(price: Price) -> String {
    format!("{:.2}", round_display(price))
}

/// 등락률을 부호와 함께 표시합니다 (예: "+1.25%", "-0.40%").
///
/// 반올림 결과가 0이면 "+0.00%"로 표시합니다.
pub fn format_change_percent(pct: Percentage) -> String {
    let rounded = round_display(pct);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("{:.2}%", rounded)
    } else {
        format!("+{:.2}%", rounded.abs())
    }
}

/// 거래량을 세 자리마다 쉼표로 구분합니다 (예: "1,234,567").
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
