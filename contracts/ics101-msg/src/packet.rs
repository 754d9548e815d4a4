use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary, StdResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::asset::{Coin, SwapMsgType};
use crate::codec::from_value;
use crate::error::CodecError;
use crate::msg::{
    ExecuteMsg, MsgCancelMultiAssetDepositRequest, MsgCancelPoolRequest,
    MsgMakeMultiAssetDepositRequest, MsgMakePoolRequest, MsgMultiAssetWithdrawRequest,
    MsgSingleAssetDepositRequest, MsgSwapRequest, MsgTakeMultiAssetDepositRequest,
    MsgTakePoolRequest,
};
use crate::wire::{child, wire_enum, wire_record, CheckExtra};

wire_enum! {
    pub enum SwapMessageType {
        Unspecified => "Unspecified",
        MakePool => "MakePool",
        TakePool => "TakePool",
        CancelPool => "CancelPool",
        SingleAssetDeposit => "SingleAssetDeposit",
        MakeMultiDeposit => "MakeMultiDeposit",
        TakeMultiDeposit => "TakeMultiDeposit",
        CancelMultiDeposit => "CancelMultiDeposit",
        MultiWithdraw => "MultiWithdraw",
        LeftSwap => "LeftSwap",
        RightSwap => "RightSwap",
    }
}

wire_record! {
    /// Balances computed by the sending chain, applied as-is by the receiver.
    pub struct StateChange {
        #[serde(skip_serializing_if = "Option::is_none")]
        "in_tokens" => in_tokens: Option<Vec<Coin>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "out_tokens" => out_tokens: Option<Vec<Coin>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "pool_tokens" => pool_tokens: Option<Vec<Coin>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "pool_id" => pool_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "multi_deposit_order_id" => multi_deposit_order_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "source_chain_id" => source_chain_id: Option<String>,
    }
}

wire_record! {
    /// Packet relayed to the counterparty chain of a pool. `data` holds the
    /// bare request record selected by `type`.
    pub struct InterchainSwapPacketData {
        "type" => message_type: SwapMessageType,
        "data" => data: Binary,
        #[serde(skip_serializing_if = "Option::is_none")]
        "state_change" => state_change: Option<Binary>,
    }
}

const DATA: &str = "data";
const STATE_CHANGE: &str = "state_change";

fn to_payload<T: Serialize + CheckExtra>(record: &T, path: &str) -> Result<Binary, CodecError> {
    record.check_extra(path)?;
    serde_json::to_vec(record)
        .map(Binary::from)
        .map_err(|err| CodecError::violation(path, err.to_string()))
}

fn from_payload<T: DeserializeOwned>(raw: &Binary, path: &str) -> Result<T, CodecError> {
    let value: Value = serde_json::from_slice(raw.as_slice())
        .map_err(|err| CodecError::violation(path, format!("invalid JSON: {err}")))?;
    from_value(value, path)
}

impl InterchainSwapPacketData {
    pub fn wrap(msg: &ExecuteMsg, state_change: Option<&StateChange>) -> Result<Self, CodecError> {
        let (message_type, data) = match msg {
            ExecuteMsg::MakePool(req) => (SwapMessageType::MakePool, to_payload(req, DATA)?),
            ExecuteMsg::TakePool(req) => (SwapMessageType::TakePool, to_payload(req, DATA)?),
            ExecuteMsg::CancelPool(req) => (SwapMessageType::CancelPool, to_payload(req, DATA)?),
            ExecuteMsg::SingleAssetDeposit(req) => {
                (SwapMessageType::SingleAssetDeposit, to_payload(req, DATA)?)
            }
            ExecuteMsg::MakeMultiAssetDeposit(req) => {
                (SwapMessageType::MakeMultiDeposit, to_payload(req, DATA)?)
            }
            ExecuteMsg::TakeMultiAssetDeposit(req) => {
                (SwapMessageType::TakeMultiDeposit, to_payload(req, DATA)?)
            }
            ExecuteMsg::CancelMultiAssetDeposit(req) => {
                (SwapMessageType::CancelMultiDeposit, to_payload(req, DATA)?)
            }
            ExecuteMsg::MultiAssetWithdraw(req) => {
                (SwapMessageType::MultiWithdraw, to_payload(req, DATA)?)
            }
            ExecuteMsg::Swap(req) => {
                let message_type = match req.swap_type {
                    SwapMsgType::Left => SwapMessageType::LeftSwap,
                    SwapMsgType::Right => SwapMessageType::RightSwap,
                };
                (message_type, to_payload(req, DATA)?)
            }
            ExecuteMsg::RemovePool(_) => {
                return Err(CodecError::violation(
                    msg.tag(),
                    "pool removal is local and has no packet form",
                ));
            }
        };

        Ok(InterchainSwapPacketData {
            message_type,
            data,
            state_change: state_change
                .map(|change| to_payload(change, STATE_CHANGE))
                .transpose()?,
            extra: Default::default(),
        })
    }

    /// The request carried in `data`, decoded according to `type`.
    pub fn request(&self) -> Result<ExecuteMsg, CodecError> {
        let path = DATA;
        let msg = match self.message_type {
            SwapMessageType::Unspecified => {
                return Err(CodecError::violation(
                    "type",
                    "packet does not carry a request",
                ));
            }
            SwapMessageType::MakePool => {
                ExecuteMsg::MakePool(from_payload::<MsgMakePoolRequest>(&self.data, path)?)
            }
            SwapMessageType::TakePool => {
                ExecuteMsg::TakePool(from_payload::<MsgTakePoolRequest>(&self.data, path)?)
            }
            SwapMessageType::CancelPool => {
                ExecuteMsg::CancelPool(from_payload::<MsgCancelPoolRequest>(&self.data, path)?)
            }
            SwapMessageType::SingleAssetDeposit => ExecuteMsg::SingleAssetDeposit(
                from_payload::<MsgSingleAssetDepositRequest>(&self.data, path)?,
            ),
            SwapMessageType::MakeMultiDeposit => ExecuteMsg::MakeMultiAssetDeposit(
                from_payload::<MsgMakeMultiAssetDepositRequest>(&self.data, path)?,
            ),
            SwapMessageType::TakeMultiDeposit => ExecuteMsg::TakeMultiAssetDeposit(
                from_payload::<MsgTakeMultiAssetDepositRequest>(&self.data, path)?,
            ),
            SwapMessageType::CancelMultiDeposit => ExecuteMsg::CancelMultiAssetDeposit(
                from_payload::<MsgCancelMultiAssetDepositRequest>(&self.data, path)?,
            ),
            SwapMessageType::MultiWithdraw => ExecuteMsg::MultiAssetWithdraw(
                from_payload::<MsgMultiAssetWithdrawRequest>(&self.data, path)?,
            ),
            SwapMessageType::LeftSwap | SwapMessageType::RightSwap => {
                let req = from_payload::<MsgSwapRequest>(&self.data, path)?;
                let expected = match self.message_type {
                    SwapMessageType::LeftSwap => SwapMsgType::Left,
                    _ => SwapMsgType::Right,
                };
                if req.swap_type != expected {
                    return Err(CodecError::violation(
                        child(path, "swapType"),
                        format!(
                            "{} packet carries a {} swap",
                            self.message_type, req.swap_type
                        ),
                    ));
                }
                ExecuteMsg::Swap(req)
            }
        };
        Ok(msg)
    }

    pub fn state_change(&self) -> Result<Option<StateChange>, CodecError> {
        self.state_change
            .as_ref()
            .map(|raw| from_payload::<StateChange>(raw, STATE_CHANGE))
            .transpose()
    }
}

/// Acknowledgement written back for a received packet.
#[cw_serde]
pub enum PacketAck {
    Result(Binary),
    Error(String),
}

impl PacketAck {
    pub fn success() -> Self {
        PacketAck::Result(Binary::from(b"1".to_vec()))
    }

    pub fn fail(err: impl Into<String>) -> Self {
        PacketAck::Error(err.into())
    }

    pub fn to_binary(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }

    /// Tries to get the error from an ACK. Returns `None` on success.
    ///
    /// Bytes that do not parse as an ack were written by the host chain
    /// rather than the counterparty contract (for example when a packet
    /// field is an empty string), and come back base64 encoded:
    ///
    /// ```json
    /// "eyJlcnJvciI6IkVtcHR5IGF0dHJpYnV0ZSB2YWx1ZSJ9"
    /// ```
    pub fn error_of(ack: &Binary) -> Option<String> {
        let ack: PacketAck = from_json(ack).unwrap_or_else(|_| PacketAck::Error(ack.to_base64()));
        match ack {
            PacketAck::Error(err) => Some(err),
            PacketAck::Result(_) => None,
        }
    }
}
