use super::*;

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Account that initialized the contract. Only it may withdraw.
    pub owner: AccountAddress,
    /// The highest accepted bid, zero before the first one.
    pub highest_bid: Amount,
    /// Sender of the highest accepted bid.
    pub highest_bidder: Option<Address>,
    /// Sum of all accepted bids minus everything withdrawn.
    pub custodied_balance: Amount,
    pub phantom_data: PhantomData<S>,
}

/// The part of the state to be viewed using `concordium-client contract invoke`
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct ViewableState {
    pub owner: AccountAddress,
    pub highest_bid: Amount,
    pub highest_bidder: Option<Address>,
    pub custodied_balance: Amount,
}
