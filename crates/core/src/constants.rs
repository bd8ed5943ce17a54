use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Smallest display-worthy exchange rate
pub const MIN_RATE: Decimal = dec!(0.00000001);

/// Decimal precision for rate display
pub const RATE_DECIMAL_PRECISION: u32 = 8;

/// Decimal precision for rates below the display floor
pub const SUB_MIN_RATE_PRECISION: u32 = 17;

/// Maximum 32-bit Unix time, used as the "no value" datetime sentinel
pub const NEVER_TIMESTAMP_SECS: i64 = 4_294_967_295;

/// Smallest units per coin (groth for BEAM, satoshi for BTC)
pub const UNITS_PER_COIN: u64 = 100_000_000;

/// Decimal places of the smallest coin unit
pub const COIN_DECIMAL_PLACES: u32 = 8;

/// Target block interval, used to project heights onto wall-clock time
pub const SECONDS_PER_BLOCK: u64 = 60;

/// Maximum length of a transaction comment
pub const MAX_COMMENT_LENGTH: usize = 1024;
