//! Token amount scaling.

use alloy::primitives::U256;

/// Number of decimals the sample token uses.
pub const TOKEN_DECIMALS: u8 = 18;

/// Scales a whole-token amount into base units (`whole * 10^18`).
pub fn to_base_units(whole: u64) -> U256 {
    U256::from(whole) * U256::from(10).pow(U256::from(TOKEN_DECIMALS))
}
