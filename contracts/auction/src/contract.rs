use super::*;

/// Initialize the auction with no bids. The initializing account becomes the owner.
#[init(contract = "Auction")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    _state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let owner = ctx.init_origin();

    // Initialising state
    let state = State::new(owner);

    Ok(state)
}

/// Place a bid with the attached amount.
/// The amount is kept by the contract, the previous highest bidder is not refunded.
///
/// It rejects if:
/// - The amount is not strictly greater than the highest bid.
/// - Custodied balance would overflow.
/// - Fails to log `BidPlaced` event.
#[receive(
    contract = "Auction",
    name = "bidHigher",
    mutable,
    payable,
    enable_logger
)]
fn bid_higher<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let bidder = ctx.sender();

    host.state_mut().place_bid(bidder, amount)?;

    // Event for the accepted bid.
    logger.log(&AuctionEvent::bid_placed(bidder, amount))?;

    Ok(())
}

/// Transfer everything the contract holds to the owner.
///
/// It rejects if:
/// - Sender is other than the owner.
/// - Fails to log `Withdrawal` event.
/// - The transfer to the owner fails.
#[receive(contract = "Auction", name = "withdraw", mutable, enable_logger)]
fn withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let state = host.state_mut();
    let owner = state.owner;

    // Custody is emptied before the transfer is invoked
    let amount = state.drain(&ctx.sender())?;

    // Event for withdrawal.
    logger.log(&AuctionEvent::withdrawal(owner, amount))?;

    if amount > Amount::zero() {
        host.invoke_transfer(&owner, amount)?;
    }

    Ok(())
}

/// View function that returns the highest bid.
#[receive(contract = "Auction", name = "getLastBid", return_value = "Amount")]
fn get_last_bid<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Amount> {
    Ok(host.state().highest_bid)
}

/// View function that returns the sender of the highest bid, if any.
#[receive(
    contract = "Auction",
    name = "getHigestBidder",
    return_value = "Option<Address>"
)]
fn get_highest_bidder<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Option<Address>> {
    Ok(host.state().highest_bidder)
}

/// View function that returns the whole auction state.
#[receive(contract = "Auction", name = "view", return_value = "ViewableState")]
fn view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<ViewableState> {
    Ok(host.state().view())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([0u8; 32]);
    const ALICE: AccountAddress = AccountAddress([1u8; 32]);
    const BOB: AccountAddress = AccountAddress([2u8; 32]);
    const CONTRACT: ContractAddress = ContractAddress {
        index: 3,
        subindex: 0,
    };

    fn new_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(OWNER);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect("Initialization should pass");

        TestHost::new(state, state_builder)
    }

    fn new_ctx<'a>(sender: Address) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_owner(OWNER);
        ctx.set_sender(sender);
        ctx
    }

    fn place_bid(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        amount: u64,
        logger: &mut TestLogger,
    ) -> ContractResult<()> {
        let ctx = new_ctx(sender);
        bid_higher(&ctx, host, Amount::from_micro_ccd(amount), logger)
    }

    /// Test that initialization sets the owner and leaves the auction empty.
    #[concordium_test]
    fn test_init() {
        let host = new_host();

        claim_eq!(host.state().owner, OWNER, "Owner should be the init origin");
        claim_eq!(host.state().highest_bid, Amount::zero());
        claim_eq!(host.state().highest_bidder, None);
        claim_eq!(host.state().custodied_balance, Amount::zero());
    }

    /// Bid 2 is accepted, bid 1 afterwards is rejected and changes nothing.
    #[concordium_test]
    fn test_bid_too_low() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        let result = place_bid(&mut host, Address::Account(OWNER), 2, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        let before = host.state().view();

        let result = place_bid(&mut host, Address::Account(ALICE), 1, &mut logger);
        claim_eq!(result, Err(CustomContractError::BidTooLow));

        claim_eq!(host.state().view(), before, "State should remain intact");
        claim_eq!(host.state().highest_bid, Amount::from_micro_ccd(2));
        claim_eq!(logger.logs.len(), 1, "Only the accepted bid should be logged");
    }

    /// A bid equal to the highest one is not enough.
    #[concordium_test]
    fn test_equal_bid() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(
            place_bid(&mut host, Address::Account(ALICE), 0, &mut logger),
            Err(CustomContractError::BidTooLow),
            "Bidding zero on a fresh auction should fail"
        );
        claim_eq!(
            place_bid(&mut host, Address::Account(ALICE), 5, &mut logger),
            Ok(())
        );
        claim_eq!(
            place_bid(&mut host, Address::Account(BOB), 5, &mut logger),
            Err(CustomContractError::BidTooLow)
        );
        claim_eq!(host.state().highest_bidder, Some(Address::Account(ALICE)));
        claim_eq!(logger.logs.len(), 1);
    }

    /// The first bid of 1 beats the initial zero and is logged.
    #[concordium_test]
    fn test_first_bid_logged() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        let result = place_bid(&mut host, Address::Account(BOB), 1, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        let ctx = new_ctx(Address::Account(ALICE));
        let bidder: ReceiveResult<Option<Address>> = get_highest_bidder(&ctx, &host);
        claim_eq!(bidder, Ok(Some(Address::Account(BOB))));

        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&AuctionEvent::bid_placed(
                Address::Account(BOB),
                Amount::from_micro_ccd(1)
            )),
            "Incorrect event emitted"
        );
    }

    /// Getters follow a sequence of increasing bids from different senders.
    #[concordium_test]
    fn test_getters() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        let bids = [
            (Address::Account(OWNER), 1),
            (Address::Account(ALICE), 2),
            (Address::Contract(CONTRACT), 3),
            (Address::Account(BOB), 10),
        ];
        for (sender, amount) in bids.iter() {
            let result = place_bid(&mut host, *sender, *amount, &mut logger);
            claim!(result.is_ok(), "Increasing bids should be accepted");
        }

        let ctx = new_ctx(Address::Account(ALICE));
        let last_bid: ReceiveResult<Amount> = get_last_bid(&ctx, &host);
        let bidder: ReceiveResult<Option<Address>> = get_highest_bidder(&ctx, &host);
        claim_eq!(last_bid, Ok(Amount::from_micro_ccd(10)));
        claim_eq!(bidder, Ok(Some(Address::Account(BOB))));

        // One event per accepted bid, in order
        claim_eq!(logger.logs.len(), bids.len());
        for ((sender, amount), log) in bids.iter().zip(logger.logs.iter()) {
            claim_eq!(
                *log,
                to_bytes(&AuctionEvent::bid_placed(
                    *sender,
                    Amount::from_micro_ccd(*amount)
                ))
            );
        }

        let viewed: ReceiveResult<ViewableState> = view(&ctx, &host);
        claim_eq!(
            viewed,
            Ok(ViewableState {
                owner: OWNER,
                highest_bid: Amount::from_micro_ccd(10),
                highest_bidder: Some(Address::Account(BOB)),
                custodied_balance: Amount::from_micro_ccd(16),
            })
        );
    }

    /// Only the owner is allowed to withdraw.
    #[concordium_test]
    fn test_withdraw_not_owner() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        claim_eq!(
            place_bid(&mut host, Address::Account(ALICE), 7, &mut logger),
            Ok(())
        );
        host.set_self_balance(Amount::from_micro_ccd(7));

        for sender in [Address::Account(ALICE), Address::Contract(CONTRACT)].iter() {
            let ctx = new_ctx(*sender);
            let result: ContractResult<()> = withdraw(&ctx, &mut host, &mut logger);
            claim_eq!(result, Err(CustomContractError::NotOwner));
        }

        claim_eq!(host.state().custodied_balance, Amount::from_micro_ccd(7));
        claim!(host.get_transfers().is_empty(), "Nothing should be transferred");
        claim_eq!(logger.logs.len(), 1, "Only the bid should be logged");
    }

    /// Owner receives everything held, custody resets to zero.
    #[concordium_test]
    fn test_withdraw_owner() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        claim_eq!(
            place_bid(&mut host, Address::Account(ALICE), 111, &mut logger),
            Ok(())
        );
        host.set_self_balance(Amount::from_micro_ccd(111));

        let ctx = new_ctx(Address::Account(OWNER));
        let result: ContractResult<()> = withdraw(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim!(
            host.transfer_occurred(&OWNER, Amount::from_micro_ccd(111)),
            "Owner should receive the custodied balance"
        );
        claim_eq!(host.get_transfers().len(), 1, "Exactly one transfer expected");
        claim_eq!(host.state().custodied_balance, Amount::zero());

        // The standing bid survives the withdrawal
        claim_eq!(host.state().highest_bid, Amount::from_micro_ccd(111));
        claim_eq!(host.state().highest_bidder, Some(Address::Account(ALICE)));

        claim_eq!(logger.logs.len(), 2);
        claim_eq!(
            logger.logs[1],
            to_bytes(&AuctionEvent::withdrawal(
                OWNER,
                Amount::from_micro_ccd(111)
            )),
            "Incorrect event emitted"
        );
    }

    /// Custody accumulates every accepted bid, not just the highest.
    #[concordium_test]
    fn test_withdraw_accumulated() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        claim_eq!(
            place_bid(&mut host, Address::Account(ALICE), 1, &mut logger),
            Ok(())
        );
        claim_eq!(
            place_bid(&mut host, Address::Account(BOB), 2, &mut logger),
            Ok(())
        );
        host.set_self_balance(Amount::from_micro_ccd(3));

        let ctx = new_ctx(Address::Account(OWNER));
        let result: ContractResult<()> = withdraw(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim!(host.transfer_occurred(&OWNER, Amount::from_micro_ccd(3)));
    }

    /// Withdrawing an empty custody succeeds without a transfer.
    #[concordium_test]
    fn test_withdraw_empty() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        let ctx = new_ctx(Address::Account(OWNER));
        let result: ContractResult<()> = withdraw(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim!(host.get_transfers().is_empty(), "Nothing should be transferred");
        claim_eq!(
            logger.logs,
            vec![to_bytes(&AuctionEvent::withdrawal(OWNER, Amount::zero()))]
        );
    }

    /// A second withdrawal right after the first one has nothing left to send.
    #[concordium_test]
    fn test_withdraw_twice() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        claim_eq!(
            place_bid(&mut host, Address::Account(ALICE), 50, &mut logger),
            Ok(())
        );
        host.set_self_balance(Amount::from_micro_ccd(50));

        let ctx = new_ctx(Address::Account(OWNER));
        let first: ContractResult<()> = withdraw(&ctx, &mut host, &mut logger);
        let second: ContractResult<()> = withdraw(&ctx, &mut host, &mut logger);
        claim!(first.is_ok() && second.is_ok(), "Results in rejection");

        claim_eq!(
            host.get_transfers(),
            vec![(OWNER, Amount::from_micro_ccd(50))],
            "Funds must be sent only once"
        );
    }
}
