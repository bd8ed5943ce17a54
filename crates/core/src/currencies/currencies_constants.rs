//! Static currency data: icon-font glyphs and fee floors.

/// Icon-font glyph for BEAM (private-use area).
pub const SYMBOL_BEAM: char = '\u{EAFB}';

/// Icon-font glyph for BTC (Unicode bitcoin sign).
pub const SYMBOL_BTC: char = '\u{20BF}';

/// Icon-font glyph for LTC (stroked L).
pub const SYMBOL_LTC: char = '\u{0141}';

/// Icon-font glyph for QTUM (private-use area).
pub const SYMBOL_QTUM: char = '\u{EAFD}';

/// Minimum BEAM transaction fee, in groth.
pub const MIN_FEE_BEAM: u64 = 100;

/// Minimum swap-coin fee rates, in smallest units per kB.
pub const MIN_FEE_RATE_BTC: u64 = 1_000;
pub const MIN_FEE_RATE_LTC: u64 = 1_000;
pub const MIN_FEE_RATE_QTUM: u64 = 1_000;

/// Default BEAM transaction fee, in groth.
pub const DEFAULT_FEE_BEAM: u64 = 100;

/// Default swap-coin fee rates, in smallest units per kB.
pub const DEFAULT_FEE_RATE_BTC: u64 = 90_000;
pub const DEFAULT_FEE_RATE_LTC: u64 = 90_000;
pub const DEFAULT_FEE_RATE_QTUM: u64 = 90_000;
