use crate::asset::{Amount, Coin, DepositAsset, PoolAsset, SwapMsgType};
use crate::wire::{wire_record, wire_union};

wire_record! {
    pub struct InstantiateMsg {
        "token_code_id" => token_code_id: u64,
    }
}

wire_record! {
    /// Opens a pool on the source chain; the counterparty creator takes it.
    pub struct MsgMakePoolRequest {
        "sourcePort" => source_port: String,
        "sourceChannel" => source_channel: String,
        "counterpartyChannel" => counterparty_channel: String,
        "creator" => creator: String,
        "counterpartyCreator" => counterparty_creator: String,
        "liquidity" => liquidity: Vec<PoolAsset>,
        "sourceChainId" => source_chain_id: String,
        "destinationChainId" => destination_chain_id: String,
        "swapFee" => swap_fee: u32,
        "timeoutHeight" => timeout_height: u64,
        "timeoutTimestamp" => timeout_timestamp: u64,
    }
}

wire_record! {
    pub struct MsgTakePoolRequest {
        "creator" => creator: String,
        "counterCreator" => counter_creator: String,
        "poolId" => pool_id: String,
        "timeoutHeight" => timeout_height: u64,
        "timeoutTimestamp" => timeout_timestamp: u64,
    }
}

wire_record! {
    pub struct MsgCancelPoolRequest {
        "poolId" => pool_id: String,
        "timeoutHeight" => timeout_height: u64,
        "timeoutTimestamp" => timeout_timestamp: u64,
    }
}

wire_record! {
    pub struct MsgSingleAssetDepositRequest {
        "poolId" => pool_id: String,
        "sender" => sender: String,
        "token" => token: Coin,
        "timeoutHeight" => timeout_height: u64,
        "timeoutTimestamp" => timeout_timestamp: u64,
    }
}

wire_record! {
    /// First leg of a two-sided deposit; creates an order the counterparty
    /// completes with `TakeMultiAssetDeposit`.
    pub struct MsgMakeMultiAssetDepositRequest {
        "poolId" => pool_id: String,
        "chainId" => chain_id: String,
        "deposits" => deposits: Vec<DepositAsset>,
        "timeoutHeight" => timeout_height: u64,
        "timeoutTimestamp" => timeout_timestamp: u64,
    }
}

wire_record! {
    pub struct MsgCancelMultiAssetDepositRequest {
        "poolId" => pool_id: String,
        "orderId" => order_id: String,
        "timeoutHeight" => timeout_height: u64,
        "timeoutTimestamp" => timeout_timestamp: u64,
    }
}

wire_record! {
    pub struct MsgTakeMultiAssetDepositRequest {
        "sender" => sender: String,
        "poolId" => pool_id: String,
        "orderId" => order_id: String,
        "timeoutHeight" => timeout_height: u64,
        "timeoutTimestamp" => timeout_timestamp: u64,
    }
}

wire_record! {
    pub struct MsgMultiAssetWithdrawRequest {
        "poolId" => pool_id: String,
        "receiver" => receiver: String,
        "counterpartyReceiver" => counterparty_receiver: String,
        "poolToken" => pool_token: Coin,
        "timeoutHeight" => timeout_height: u64,
        "timeoutTimestamp" => timeout_timestamp: u64,
    }
}

wire_record! {
    pub struct MsgSwapRequest {
        "swapType" => swap_type: SwapMsgType,
        "sender" => sender: String,
        "poolId" => pool_id: String,
        "tokenIn" => token_in: Coin,
        "tokenOut" => token_out: Coin,
        /// Tolerated price deviation in basis points.
        "slippage" => slippage: u64,
        "recipient" => recipient: String,
        "timeoutHeight" => timeout_height: u64,
        "timeoutTimestamp" => timeout_timestamp: u64,
    }
}

wire_record! {
    pub struct MsgRemovePoolRequest {
        "poolId" => pool_id: String,
    }
}

wire_union! {
    pub enum ExecuteMsg {
        MakePool(MsgMakePoolRequest),
        TakePool(MsgTakePoolRequest),
        CancelPool(MsgCancelPoolRequest),
        SingleAssetDeposit(MsgSingleAssetDepositRequest),
        MakeMultiAssetDeposit(MsgMakeMultiAssetDepositRequest),
        CancelMultiAssetDeposit(MsgCancelMultiAssetDepositRequest),
        TakeMultiAssetDeposit(MsgTakeMultiAssetDepositRequest),
        MultiAssetWithdraw(MsgMultiAssetWithdrawRequest),
        Swap(MsgSwapRequest),
        RemovePool(MsgRemovePoolRequest),
    }
}

wire_record! {
    /// Cursor-based paging shared by the list queries.
    pub struct PageQuery {
        #[serde(skip_serializing_if = "Option::is_none")]
        "limit" => limit: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "start_after" => start_after: Option<String>,
    }
}

wire_record! {
    pub struct OrderQuery {
        "pool_id" => pool_id: String,
        "order_id" => order_id: String,
    }
}

wire_record! {
    pub struct ConfigQuery {}
}

wire_record! {
    /// Single-pool lookup, used by `PoolAddressByToken` and `InterchainPool`.
    pub struct PoolQuery {
        "pool_id" => pool_id: String,
    }
}

wire_record! {
    pub struct SwapQuery {
        "pool_id" => pool_id: String,
        "token_in" => token_in: Coin,
        "token_out" => token_out: Coin,
    }
}

wire_record! {
    pub struct ActiveOrdersQuery {
        "source_maker" => source_maker: String,
        "destination_taker" => destination_taker: String,
        "pool_id" => pool_id: String,
    }
}

wire_record! {
    pub struct RateQuery {
        "amount" => amount: Amount,
        "pool_id" => pool_id: String,
    }
}

wire_union! {
    pub enum QueryMsg {
        OrderList(PageQuery),
        Order(OrderQuery),
        Config(ConfigQuery),
        PoolTokenList(PageQuery),
        PoolAddressByToken(PoolQuery),
        InterchainPool(PoolQuery),
        InterchainPoolList(PageQuery),
        /// Output amount for a known input.
        LeftSwap(SwapQuery),
        /// Input amount needed for a known output.
        RightSwap(SwapQuery),
        QueryActiveOrders(ActiveOrdersQuery),
        Rate(RateQuery),
    }
}
