use std::fmt;
use std::str::FromStr;

use cosmwasm_std::{Uint128, Uint256};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CodecError;
use crate::wire::{wire_enum, wire_record, CheckExtra};

fn is_decimal_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Arbitrary-precision unsigned integer, kept as the decimal string it
/// travels as. Leading zeros are preserved.
#[derive(Serialize, JsonSchema, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn new(digits: impl Into<String>) -> Result<Self, CodecError> {
        let digits = digits.into();
        if is_decimal_digits(&digits) {
            Ok(Amount(digits))
        } else {
            Err(CodecError::violation(
                "",
                format!("`{digits}` is not a decimal digit string"),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Amount {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::new(s)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Amount(value.to_string())
    }
}

impl From<Uint128> for Amount {
    fn from(value: Uint128) -> Self {
        Amount(value.to_string())
    }
}

impl From<Uint256> for Amount {
    fn from(value: Uint256) -> Self {
        Amount(value.to_string())
    }
}

impl TryFrom<&Amount> for Uint128 {
    type Error = CodecError;

    fn try_from(amount: &Amount) -> Result<Self, Self::Error> {
        Uint128::from_str(&amount.0).map_err(|_| {
            CodecError::violation("", format!("`{amount}` does not fit in Uint128"))
        })
    }
}

impl TryFrom<&Amount> for Uint256 {
    type Error = CodecError;

    fn try_from(amount: &Amount) -> Result<Self, Self::Error> {
        Uint256::from_str(&amount.0).map_err(|_| {
            CodecError::violation("", format!("`{amount}` does not fit in Uint256"))
        })
    }
}

impl CheckExtra for Amount {
    fn check_extra(&self, _path: &str) -> Result<(), CodecError> {
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let digits = String::deserialize(deserializer)?;
        Amount::new(digits).map_err(|err| serde::de::Error::custom(err.reason()))
    }
}

wire_record! {
    pub struct Coin {
        "amount" => amount: Amount,
        "denom" => denom: String,
    }
}

impl Coin {
    pub fn new(amount: impl Into<Amount>, denom: impl Into<String>) -> Self {
        Coin {
            amount: amount.into(),
            denom: denom.into(),
            extra: Default::default(),
        }
    }
}

impl From<cosmwasm_std::Coin> for Coin {
    fn from(coin: cosmwasm_std::Coin) -> Self {
        Coin::new(coin.amount, coin.denom)
    }
}

impl TryFrom<&Coin> for cosmwasm_std::Coin {
    type Error = CodecError;

    fn try_from(coin: &Coin) -> Result<Self, Self::Error> {
        Ok(cosmwasm_std::Coin {
            denom: coin.denom.clone(),
            amount: Uint128::try_from(&coin.amount)?,
        })
    }
}

wire_enum! {
    /// Which chain of an interchain pool holds an asset.
    pub enum PoolSide {
        Source => "SOURCE",
        Destination => "DESTINATION",
    }
}

wire_enum! {
    /// `Left` swaps a known input amount, `Right` targets a known output amount.
    pub enum SwapMsgType {
        Left => "LEFT",
        Right => "RIGHT",
    }
}

wire_record! {
    pub struct PoolAsset {
        "balance" => balance: Coin,
        "decimal" => decimal: u32,
        "side" => side: PoolSide,
        "weight" => weight: u32,
    }
}

wire_record! {
    pub struct DepositAsset {
        "balance" => balance: Coin,
        "sender" => sender: String,
    }
}
