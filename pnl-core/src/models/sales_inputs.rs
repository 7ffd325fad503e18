use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw sales figures supplied by the caller.
///
/// `operating_days` is bounded to [20, 31] by the caller; the engine does
/// not re-validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesInputs {
    /// Sales value per weekday of trading.
    pub weekday_sales: Decimal,
    /// Sales value per weekend day of trading.
    pub weekend_sales: Decimal,
    /// Trading days in the month.
    pub operating_days: u32,
}
