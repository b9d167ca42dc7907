mod brasil_api;
mod cep_error;

pub use brasil_api::{BrasilApiLookup, DEFAULT_BASE_URL};
pub use cep_error::CepError;

use serde::{Deserialize, Deserializer};

/// Address fields a postal-code lookup can fill in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "null_as_empty")]
    pub cep: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub neighborhood: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub street: String,
}

// BrasilAPI sends `null` for streets and neighborhoods of city-wide CEPs.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub trait AddressLookup: Send + Sync {
    /// `cep` is already normalized to eight digits.
    fn lookup(&self, cep: &str) -> Result<Address, CepError>;
}

/// Strips everything but digits and requires exactly eight of them.
pub fn normalize_cep(input: &str) -> Result<String, CepError> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 8 {
        return Err(CepError::InvalidLength(digits.len()));
    }
    Ok(digits)
}

/// Formats partial input as `NNNNN-NNN`, dropping anything past eight digits.
pub fn mask_cep(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(8).collect();
    if digits.len() > 5 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits
    }
}
