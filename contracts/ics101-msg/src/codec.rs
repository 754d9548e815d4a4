use cosmwasm_std::Binary;
use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::CodecError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::wire::{child, CheckExtra};

/// A top-level message accepted by the contract.
pub trait Message: Serialize + DeserializeOwned + CheckExtra {
    const NAME: &'static str;

    /// Short label for logs: the union tag, or the message name.
    fn label(&self) -> &'static str {
        Self::NAME
    }
}

impl Message for InstantiateMsg {
    const NAME: &'static str = "InstantiateMsg";
}

impl Message for ExecuteMsg {
    const NAME: &'static str = "ExecuteMsg";

    fn label(&self) -> &'static str {
        self.tag()
    }
}

impl Message for QueryMsg {
    const NAME: &'static str = "QueryMsg";

    fn label(&self) -> &'static str {
        self.tag()
    }
}

/// Deserializes `value` as the part of a message found at `at`, reporting
/// failures with the full path to the offending value.
pub(crate) fn from_value<T: DeserializeOwned>(value: Value, at: &str) -> Result<T, CodecError> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path();
        let path = if path.iter().next().is_none() {
            at.to_string()
        } else if at.is_empty() {
            path.to_string()
        } else {
            child(at, &path.to_string())
        };
        CodecError::violation(path, err.into_inner().to_string())
    })
}

/// Wire form of `msg`. Unions become `{Tag: {...}}`; undeclared fields held
/// by any record are written back unchanged.
pub fn encode<M: Message>(msg: &M) -> Result<Value, CodecError> {
    msg.check_extra("")?;
    serde_json::to_value(msg).map_err(|err| CodecError::violation("", err.to_string()))
}

pub fn decode<M: Message>(value: Value) -> Result<M, CodecError> {
    match from_value::<M>(value, "") {
        Ok(msg) => {
            trace!("decoded {} {}", M::NAME, msg.label());
            Ok(msg)
        }
        Err(err) => {
            debug!("rejected {}: {}", M::NAME, err);
            Err(err)
        }
    }
}

pub fn to_binary<M: Message>(msg: &M) -> Result<Binary, CodecError> {
    msg.check_extra("")?;
    serde_json::to_vec(msg)
        .map(Binary::from)
        .map_err(|err| CodecError::violation("", err.to_string()))
}

pub fn from_slice<M: Message>(data: &[u8]) -> Result<M, CodecError> {
    let value: Value = serde_json::from_slice(data)
        .map_err(|err| CodecError::violation("", format!("invalid JSON: {err}")))?;
    decode(value)
}
