use super::*;

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a new state with no bids and nothing in custody.
    pub fn new(owner: AccountAddress) -> Self {
        Self {
            owner,
            highest_bid: Amount::zero(),
            highest_bidder: None,
            custodied_balance: Amount::zero(),
            phantom_data: PhantomData,
        }
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        address.matches_account(&self.owner)
    }

    /// Accept `amount` from `bidder` as the new highest bid and keep it in custody.
    ///
    /// Nothing is modified unless every check passes.
    pub fn place_bid(&mut self, bidder: Address, amount: Amount) -> ContractResult<()> {
        // Ties are rejected, so the first bid must be above zero
        ensure!(amount > self.highest_bid, CustomContractError::BidTooLow);

        let custodied_balance = self
            .custodied_balance
            .micro_ccd
            .checked_add(amount.micro_ccd)
            .ok_or(CustomContractError::AmountOverflow)?;

        self.highest_bid = amount;
        self.highest_bidder = Some(bidder);
        self.custodied_balance = Amount::from_micro_ccd(custodied_balance);

        Ok(())
    }

    /// Empty the custody on behalf of `sender` and return the amount that MUST be
    /// transferred to the owner.
    ///
    /// The balance is zeroed here, before any transfer is invoked. The standing
    /// highest bid is left untouched.
    pub fn drain(&mut self, sender: &Address) -> ContractResult<Amount> {
        ensure!(self.is_owner(sender), CustomContractError::NotOwner);

        let amount = self.custodied_balance;
        self.custodied_balance = Amount::zero();

        Ok(amount)
    }

    pub fn view(&self) -> ViewableState {
        ViewableState {
            owner: self.owner,
            highest_bid: self.highest_bid,
            highest_bidder: self.highest_bidder,
            custodied_balance: self.custodied_balance,
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([0u8; 32]);
    const ALICE: Address = Address::Account(AccountAddress([1u8; 32]));
    const BOB: Address = Address::Account(AccountAddress([2u8; 32]));
    const CONTRACT: Address = Address::Contract(ContractAddress {
        index: 7,
        subindex: 0,
    });

    fn fresh_state() -> State<TestStateApi> {
        State::new(OWNER)
    }

    #[concordium_test]
    fn test_new_state_is_empty() {
        let state = fresh_state();

        claim_eq!(
            state.view(),
            ViewableState {
                owner: OWNER,
                highest_bid: Amount::zero(),
                highest_bidder: None,
                custodied_balance: Amount::zero(),
            }
        );
    }

    #[concordium_test]
    fn test_increasing_bids() {
        let mut state = fresh_state();

        let bids = [(ALICE, 1), (BOB, 2), (CONTRACT, 5), (ALICE, 40)];
        for (bidder, amount) in bids.iter() {
            let result = state.place_bid(*bidder, Amount::from_micro_ccd(*amount));
            claim_eq!(result, Ok(()), "Increasing bids should be accepted");
        }

        claim_eq!(state.highest_bid, Amount::from_micro_ccd(40));
        claim_eq!(state.highest_bidder, Some(ALICE));
        claim_eq!(
            state.custodied_balance,
            Amount::from_micro_ccd(48),
            "Every accepted bid stays in custody"
        );
    }

    #[concordium_test]
    fn test_zero_first_bid() {
        let mut state = fresh_state();

        let result = state.place_bid(ALICE, Amount::zero());

        claim_eq!(result, Err(CustomContractError::BidTooLow));
        claim_eq!(state.view(), fresh_state().view(), "State should remain intact");
    }

    #[concordium_test]
    fn test_low_and_equal_bids() {
        let mut state = fresh_state();
        claim_eq!(state.place_bid(ALICE, Amount::from_micro_ccd(2)), Ok(()));
        let before = state.view();

        claim_eq!(
            state.place_bid(BOB, Amount::from_micro_ccd(1)),
            Err(CustomContractError::BidTooLow)
        );
        claim_eq!(
            state.place_bid(BOB, Amount::from_micro_ccd(2)),
            Err(CustomContractError::BidTooLow)
        );
        claim_eq!(state.view(), before, "Rejected bids must not change the state");
    }

    #[concordium_test]
    fn test_custody_overflow() {
        let mut state = fresh_state();
        state.custodied_balance = Amount::from_micro_ccd(u64::MAX);
        let before = state.view();

        let result = state.place_bid(ALICE, Amount::from_micro_ccd(1));

        claim_eq!(result, Err(CustomContractError::AmountOverflow));
        claim_eq!(state.view(), before, "Overflowing bid must not change the state");
    }

    #[concordium_test]
    fn test_drain_by_owner() {
        let mut state = fresh_state();
        claim_eq!(state.place_bid(ALICE, Amount::from_micro_ccd(111)), Ok(()));

        let result = state.drain(&Address::Account(OWNER));

        claim_eq!(result, Ok(Amount::from_micro_ccd(111)));
        claim_eq!(state.custodied_balance, Amount::zero());
        claim_eq!(
            state.highest_bid,
            Amount::from_micro_ccd(111),
            "Draining does not reset the standing bid"
        );
        claim_eq!(state.highest_bidder, Some(ALICE));
    }

    #[concordium_test]
    fn test_drain_by_others() {
        let mut state = fresh_state();
        claim_eq!(state.place_bid(ALICE, Amount::from_micro_ccd(3)), Ok(()));

        claim_eq!(state.drain(&ALICE), Err(CustomContractError::NotOwner));
        claim_eq!(state.drain(&CONTRACT), Err(CustomContractError::NotOwner));
        claim_eq!(state.custodied_balance, Amount::from_micro_ccd(3));
    }

    #[concordium_test]
    fn test_bid_after_drain() {
        let mut state = fresh_state();
        claim_eq!(state.place_bid(ALICE, Amount::from_micro_ccd(10)), Ok(()));
        claim_eq!(
            state.drain(&Address::Account(OWNER)),
            Ok(Amount::from_micro_ccd(10))
        );

        // The bar stays at the last accepted bid even though custody is empty
        claim_eq!(
            state.place_bid(BOB, Amount::from_micro_ccd(10)),
            Err(CustomContractError::BidTooLow)
        );
        claim_eq!(state.place_bid(BOB, Amount::from_micro_ccd(11)), Ok(()));
        claim_eq!(state.custodied_balance, Amount::from_micro_ccd(11));
    }
}
