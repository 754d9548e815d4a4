use serde_json::{json, Value};

use crate::asset::{Amount, Coin, DepositAsset, PoolAsset, PoolSide, SwapMsgType};
use crate::msg::{
    ActiveOrdersQuery, ConfigQuery, ExecuteMsg, MsgCancelMultiAssetDepositRequest,
    MsgCancelPoolRequest, MsgMakeMultiAssetDepositRequest, MsgMakePoolRequest,
    MsgMultiAssetWithdrawRequest, MsgRemovePoolRequest, MsgSingleAssetDepositRequest,
    MsgSwapRequest, MsgTakeMultiAssetDepositRequest, MsgTakePoolRequest, OrderQuery, PageQuery,
    PoolQuery, QueryMsg, RateQuery, SwapQuery,
};

pub fn make_pool_json() -> Value {
    json!({
        "MakePool": {
            "creator": "addr1",
            "counterpartyCreator": "addr2",
            "sourceChainId": "chainA",
            "destinationChainId": "chainB",
            "sourceChannel": "channel-0",
            "counterpartyChannel": "channel-1",
            "sourcePort": "ics100",
            "liquidity": [{
                "balance": {"amount": "1000", "denom": "uatom"},
                "decimal": 6,
                "side": "SOURCE",
                "weight": 50
            }],
            "swapFee": 3,
            "timeoutHeight": 100,
            "timeoutTimestamp": 0
        }
    })
}

pub fn make_pool_msg() -> ExecuteMsg {
    ExecuteMsg::MakePool(MsgMakePoolRequest {
        source_port: "ics100".to_string(),
        source_channel: "channel-0".to_string(),
        counterparty_channel: "channel-1".to_string(),
        creator: "addr1".to_string(),
        counterparty_creator: "addr2".to_string(),
        liquidity: vec![PoolAsset {
            balance: Coin::new(1000u128, "uatom"),
            decimal: 6,
            side: PoolSide::Source,
            weight: 50,
            extra: Default::default(),
        }],
        source_chain_id: "chainA".to_string(),
        destination_chain_id: "chainB".to_string(),
        swap_fee: 3,
        timeout_height: 100,
        timeout_timestamp: 0,
        extra: Default::default(),
    })
}

pub fn swap_msg(swap_type: SwapMsgType) -> ExecuteMsg {
    ExecuteMsg::Swap(MsgSwapRequest {
        swap_type,
        sender: "addr1".to_string(),
        pool_id: "pool-1".to_string(),
        token_in: Coin::new(Amount::from(250u128), "uatom"),
        token_out: Coin::new(Amount::from(240u128), "uosmo"),
        slippage: 100,
        recipient: "addr2".to_string(),
        timeout_height: 200,
        timeout_timestamp: 1_700_000_600,
        extra: Default::default(),
    })
}

fn page(limit: Option<u32>, start_after: Option<&str>) -> PageQuery {
    PageQuery {
        limit,
        start_after: start_after.map(str::to_string),
        extra: Default::default(),
    }
}

fn pool(pool_id: &str) -> PoolQuery {
    PoolQuery {
        pool_id: pool_id.to_string(),
        extra: Default::default(),
    }
}

fn swap_query() -> SwapQuery {
    SwapQuery {
        pool_id: "pool-1".to_string(),
        token_in: Coin::new(1u128, "uatom"),
        token_out: Coin::new(2u128, "uosmo"),
        extra: Default::default(),
    }
}

/// One message per `ExecuteMsg` tag, in declaration order.
pub fn execute_msgs() -> Vec<ExecuteMsg> {
    vec![
        make_pool_msg(),
        ExecuteMsg::TakePool(MsgTakePoolRequest {
            creator: "addr2".to_string(),
            counter_creator: "addr1".to_string(),
            pool_id: "pool-1".to_string(),
            timeout_height: 110,
            timeout_timestamp: 0,
            extra: Default::default(),
        }),
        ExecuteMsg::CancelPool(MsgCancelPoolRequest {
            pool_id: "pool-1".to_string(),
            timeout_height: 0,
            timeout_timestamp: 1_700_000_100,
            extra: Default::default(),
        }),
        ExecuteMsg::SingleAssetDeposit(MsgSingleAssetDepositRequest {
            pool_id: "pool-1".to_string(),
            sender: "addr1".to_string(),
            token: Coin::new(300u128, "uatom"),
            timeout_height: 120,
            timeout_timestamp: 0,
            extra: Default::default(),
        }),
        ExecuteMsg::MakeMultiAssetDeposit(MsgMakeMultiAssetDepositRequest {
            pool_id: "pool-1".to_string(),
            chain_id: "chainA".to_string(),
            deposits: vec![
                DepositAsset {
                    balance: Coin::new(500u128, "uatom"),
                    sender: "addr1".to_string(),
                    extra: Default::default(),
                },
                DepositAsset {
                    balance: Coin::new(800u128, "uosmo"),
                    sender: "addr2".to_string(),
                    extra: Default::default(),
                },
            ],
            timeout_height: 10,
            timeout_timestamp: 1_700_000_000,
            extra: Default::default(),
        }),
        ExecuteMsg::CancelMultiAssetDeposit(MsgCancelMultiAssetDepositRequest {
            pool_id: "pool-1".to_string(),
            order_id: "order-7".to_string(),
            timeout_height: 130,
            timeout_timestamp: 0,
            extra: Default::default(),
        }),
        ExecuteMsg::TakeMultiAssetDeposit(MsgTakeMultiAssetDepositRequest {
            sender: "addr2".to_string(),
            pool_id: "pool-1".to_string(),
            order_id: "order-7".to_string(),
            timeout_height: 140,
            timeout_timestamp: 0,
            extra: Default::default(),
        }),
        ExecuteMsg::MultiAssetWithdraw(MsgMultiAssetWithdrawRequest {
            pool_id: "pool-1".to_string(),
            receiver: "addr1".to_string(),
            counterparty_receiver: "addr2".to_string(),
            pool_token: Coin::new(
                Amount::new("99999999999999999999999999999999999999999").unwrap(),
                "pool-1",
            ),
            timeout_height: 0,
            timeout_timestamp: 0,
            extra: Default::default(),
        }),
        swap_msg(SwapMsgType::Right),
        ExecuteMsg::RemovePool(MsgRemovePoolRequest {
            pool_id: "pool-1".to_string(),
            extra: Default::default(),
        }),
    ]
}

/// One message per `QueryMsg` tag, in declaration order.
pub fn query_msgs() -> Vec<QueryMsg> {
    vec![
        QueryMsg::OrderList(page(None, None)),
        QueryMsg::Order(OrderQuery {
            pool_id: "pool-1".to_string(),
            order_id: "order-7".to_string(),
            extra: Default::default(),
        }),
        QueryMsg::Config(ConfigQuery {
            extra: Default::default(),
        }),
        QueryMsg::PoolTokenList(page(Some(5), None)),
        QueryMsg::PoolAddressByToken(pool("pool-1")),
        QueryMsg::InterchainPool(pool("pool-2")),
        QueryMsg::InterchainPoolList(page(Some(30), Some("pool-9"))),
        QueryMsg::LeftSwap(swap_query()),
        QueryMsg::RightSwap(swap_query()),
        QueryMsg::QueryActiveOrders(ActiveOrdersQuery {
            source_maker: "addr1".to_string(),
            destination_taker: "addr2".to_string(),
            pool_id: "pool-1".to_string(),
            extra: Default::default(),
        }),
        QueryMsg::Rate(RateQuery {
            amount: Amount::new("1000000").unwrap(),
            pool_id: "pool-1".to_string(),
            extra: Default::default(),
        }),
    ]
}
