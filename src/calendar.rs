/* Fixed-epoch millisecond arithmetic (UTC, every day is 86 400 000 ms). */

pub const MS_PER_DAY: i64 = 86_400_000;

/// Milliseconds since 1970-01-01T00:00:00Z.
pub type EpochMillis = i64;

/// 2020-02-01T00:00:00Z
pub const FEB_1_2020: EpochMillis = 1_580_515_200_000;
/// 2020-04-03T00:00:00Z
pub const APR_3_2020: EpochMillis = 1_585_872_000_000;

pub fn add_days(t: EpochMillis, days: i64) -> EpochMillis {
    t + days * MS_PER_DAY
}
