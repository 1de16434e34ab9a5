#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

use std::fmt::Display;

#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBER: &str = "メンバー";
    pub const PAID: &str = "支払額";
    pub const OWED: &str = "負担額";
    pub const BALANCE: &str = "収支";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const BALANCES: &str = "収支一覧";
    pub const SETTLEMENTS: &str = "清算方法";
    pub const TOTAL_EXPENSES: &str = "総支出";
    pub const ALL_SETTLED: &str = "全員の清算が完了しています";
    pub const NO_BILLS_FOUND: &str = "この旅行には清算対象の請求がありません";
    pub const AMOUNT_OVERFLOW: &str = "金額が大きすぎて計算できません";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "清算の計算に失敗しました";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const OWED: &str = "Owed";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const BALANCES: &str = "Balances";
    pub const SETTLEMENTS: &str = "Settlements";
    pub const TOTAL_EXPENSES: &str = "Total expenses";
    pub const ALL_SETTLED: &str = "Everyone is settled up";
    pub const NO_BILLS_FOUND: &str = "No bills found for this trip";
    pub const AMOUNT_OVERFLOW: &str = "Amounts are too large to settle";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Settlement calculation failed";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const OWED: &str = "Owed";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const BALANCES: &str = "Balances";
    pub const SETTLEMENTS: &str = "Settlements";
    pub const TOTAL_EXPENSES: &str = "Total expenses";
    pub const ALL_SETTLED: &str = "Everyone is settled up";
    pub const NO_BILLS_FOUND: &str = "No bills found for this trip";
    pub const AMOUNT_OVERFLOW: &str = "Amounts are too large to settle";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Settlement calculation failed";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn trip_not_found(trip: impl Display) -> String {
    format!("旅行 '{trip}' が見つかりません")
}

#[cfg(feature = "ja")]
pub fn invalid_record(detail: impl Display) -> String {
    format!("旅行データに不正な記録があります: {detail}")
}

#[cfg(feature = "ja")]
pub fn transaction_summary(total: usize, naive: usize, saved: usize) -> String {
    format!("送金 {total} 件 (最適化なしでは {naive} 件、{saved} 件削減)")
}

#[cfg(feature = "ja")]
pub fn unattributed_items(count: usize) -> String {
    format!("消費者のいない品目 {count} 件は清算から除外されています")
}

#[cfg(feature = "ja")]
pub fn residual_imbalance(amount: impl Display) -> String {
    format!("端数 {amount} は清算されずに残ります")
}

#[cfg(feature = "en")]
pub fn trip_not_found(trip: impl Display) -> String {
    format!("Trip '{trip}' was not found")
}

#[cfg(feature = "en")]
pub fn invalid_record(detail: impl Display) -> String {
    format!("Trip data contains an invalid record: {detail}")
}

#[cfg(feature = "en")]
pub fn transaction_summary(total: usize, naive: usize, saved: usize) -> String {
    format!("{total} transfers ({naive} without optimisation, {saved} saved)")
}

#[cfg(feature = "en")]
pub fn unattributed_items(count: usize) -> String {
    format!("{count} item(s) without consumers were left out of the settlement")
}

#[cfg(feature = "en")]
pub fn residual_imbalance(amount: impl Display) -> String {
    format!("A rounding remainder of {amount} stays unsettled")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn trip_not_found(trip: impl Display) -> String {
    format!("Trip '{trip}' was not found")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn invalid_record(detail: impl Display) -> String {
    format!("Trip data contains an invalid record: {detail}")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn transaction_summary(total: usize, naive: usize, saved: usize) -> String {
    format!("{total} transfers ({naive} without optimisation, {saved} saved)")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn unattributed_items(count: usize) -> String {
    format!("{count} item(s) without consumers were left out of the settlement")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn residual_imbalance(amount: impl Display) -> String {
    format!("A rounding remainder of {amount} stays unsettled")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "ja"))]
    #[test]
    fn english_strings_without_ja_feature() {
        assert_eq!(MEMBER, "Member");
        assert_eq!(trip_not_found("alps"), "Trip 'alps' was not found");
    }

    #[cfg(feature = "ja")]
    #[test]
    fn japanese_strings_with_ja_feature() {
        assert_eq!(MEMBER, "メンバー");
        assert_eq!(trip_not_found("alps"), "旅行 'alps' が見つかりません");
    }
}
