//! Deserialisers pinning a boolean to one value, for telling apart Slack's
//! success and error envelopes.

use serde::de::{Deserialize, Deserializer, Error};

fn exactly<'a, D>(deserializer: D, expected: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    let b = bool::deserialize(deserializer)?;
    if b == expected {
        Ok(b)
    } else {
        Err(Error::custom(format!("invalid bool: {}", b)))
    }
}

pub fn only_true<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    exactly(deserializer, true)
}

pub fn only_false<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    exactly(deserializer, false)
}
