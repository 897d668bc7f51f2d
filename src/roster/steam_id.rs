//! SteamID32 to SteamID64 conversion.
//!
//! Challengermode reports Steam accounts in the SteamID3 textual form `[U:<universe>:<account>]`
//! while FACEIT keys players by their 64-bit SteamID. The 64-bit id packs the universe into bits
//! 56-63, the account type into bits 52-55, the instance into bits 32-51 and the account number
//! into the lower 32 bits.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account type of regular user accounts, `U` in the textual form.
const ACCOUNT_TYPE_INDIVIDUAL: u64 = 1;
/// Instance used by individual accounts (desktop).
const INSTANCE_DESKTOP: u64 = 1;

const UNIVERSE_SHIFT: u32 = 56;
const ACCOUNT_TYPE_SHIFT: u32 = 52;
const INSTANCE_SHIFT: u32 = 32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid SteamID32 {input:?}: {reason}")]
pub struct FormatError {
    pub input: String,
    pub reason: &'static str,
}

impl FormatError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Canonical 64-bit Steam account id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SteamId64(pub u64);

impl SteamId64 {
    /// Packs a universe and account number of an individual account into a 64-bit id.
    pub fn from_parts(universe: u8, account_number: u32) -> Self {
        Self(
            (universe as u64) << UNIVERSE_SHIFT
                | ACCOUNT_TYPE_INDIVIDUAL << ACCOUNT_TYPE_SHIFT
                | INSTANCE_DESKTOP << INSTANCE_SHIFT
                | account_number as u64,
        )
    }

    pub fn profile_url(&self) -> String {
        format!("https://steamcommunity.com/profiles/{}", self.0)
    }
}

impl fmt::Display for SteamId64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SteamId64 {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(SteamId64)
    }
}

/// Converts a SteamID32 such as `[U:1:1075413651]` into its canonical 64-bit id.
///
/// The universe is packed from the parsed value instead of adding the fixed
/// `76561197960265728` offset, so both mappings only agree for universe 1.
///
/// # Arguments
/// - `account_id` - Game account id in the `[U:<universe>:<account>]` textual form
///
/// # Returns
/// - `Ok(SteamId64)` - The packed 64-bit Steam id
/// - `Err(FormatError)` - The input is not in the bracketed form or a component is out of range
pub fn to_canonical_id(account_id: &str) -> Result<SteamId64, FormatError> {
    let inner = account_id
        .strip_prefix("[U:")
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| FormatError::new(account_id, "expected [U:<universe>:<account>]"))?;

    let (universe, account_number) = inner
        .split_once(':')
        .ok_or_else(|| FormatError::new(account_id, "missing universe or account number"))?;

    let universe = parse_digits::<u8>(universe)
        .ok_or_else(|| FormatError::new(account_id, "universe is not an 8-bit unsigned integer"))?;
    let account_number = parse_digits::<u32>(account_number).ok_or_else(|| {
        FormatError::new(account_id, "account number is not a 32-bit unsigned integer")
    })?;

    Ok(SteamId64::from_parts(universe, account_number))
}

/// Parses a non-empty string of ASCII digits, rejecting signs and whitespace accepted by `parse`.
fn parse_digits<T: FromStr>(value: &str) -> Option<T> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    value.parse().ok()
}
