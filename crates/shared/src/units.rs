//! Whole-token <-> base-unit conversion.
//!
//! Amounts travel on chain as fixed-point integers with 18 fractional
//! digits. Conversion must stay in exact integer arithmetic: multiplying an
//! f64 by 10^18 loses precision for large amounts.

use alloy_primitives::{
    utils::{format_units, parse_units, ParseUnits, UnitsError},
    U256,
};
use thiserror::Error;

/// Fractional digits of the token's base-unit representation.
pub const TOKEN_DECIMALS: u8 = 18;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("amount is not a valid decimal: {0}")]
    Parse(#[from] UnitsError),
    #[error("amount must be positive")]
    NotPositive,
}

/// Convert a whole-token decimal string ("5", "1.5") to base units.
pub fn to_base_units(amount: &str) -> Result<U256, AmountError> {
    let raw = match parse_units(amount.trim(), TOKEN_DECIMALS)? {
        ParseUnits::U256(raw) => raw,
        ParseUnits::I256(_) => return Err(AmountError::NotPositive),
    };
    if raw.is_zero() {
        return Err(AmountError::NotPositive);
    }
    Ok(raw)
}

/// Render base units as a whole-token decimal string with trailing
/// fractional zeros trimmed ("5", "1.5").
pub fn from_base_units(raw: U256) -> Result<String, AmountError> {
    let formatted = format_units(raw, TOKEN_DECIMALS)?;
    Ok(trim_fraction(&formatted))
}

fn trim_fraction(formatted: &str) -> String {
    match formatted.split_once('.') {
        None => formatted.to_string(),
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            }
        }
    }
}
