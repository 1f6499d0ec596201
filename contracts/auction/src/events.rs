use super::*;

/// An untagged event of an accepted bid.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct BidPlacedEvent {
    /// Sender of the bid.
    pub bidder: Address,
    /// Amount attached to the bid.
    pub amount: Amount,
}

/// An untagged event of the owner draining the contract.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct WithdrawalEvent {
    /// Account that received the funds.
    pub owner: AccountAddress,
    /// Amount transferred out.
    pub amount: Amount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum AuctionEvent {
    /// Bid placed
    BidPlaced(BidPlacedEvent),
    /// Custodied balance withdrawn
    Withdrawal(WithdrawalEvent),
}

impl AuctionEvent {
    pub fn bid_placed(bidder: Address, amount: Amount) -> Self {
        Self::BidPlaced(BidPlacedEvent { bidder, amount })
    }

    pub fn withdrawal(owner: AccountAddress, amount: Amount) -> Self {
        Self::Withdrawal(WithdrawalEvent { owner, amount })
    }
}

impl Serial for AuctionEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            AuctionEvent::BidPlaced(event) => {
                out.write_u8(BID_PLACED_TAG)?;
                event.serial(out)
            }
            AuctionEvent::Withdrawal(event) => {
                out.write_u8(WITHDRAWAL_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for AuctionEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            BID_PLACED_TAG => BidPlacedEvent::deserial(source).map(AuctionEvent::BidPlaced),
            WITHDRAWAL_TAG => WithdrawalEvent::deserial(source).map(AuctionEvent::Withdrawal),
            _ => Err(ParseError::default()),
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);

    #[concordium_test]
    fn test_bid_placed_layout() {
        let bytes = to_bytes(&AuctionEvent::bid_placed(
            Address::Account(ACCOUNT_0),
            Amount::from_micro_ccd(1),
        ));

        claim_eq!(bytes[0], BID_PLACED_TAG, "Event must start with its tag");
        claim_eq!(
            &bytes[1..],
            &to_bytes(&BidPlacedEvent {
                bidder: Address::Account(ACCOUNT_0),
                amount: Amount::from_micro_ccd(1),
            })[..],
            "Tag must be followed by the event body"
        );
    }

    #[concordium_test]
    fn test_unknown_tag() {
        let mut bytes = to_bytes(&AuctionEvent::withdrawal(
            ACCOUNT_0,
            Amount::from_micro_ccd(111),
        ));
        bytes[0] = 0;

        let result: ParseResult<AuctionEvent> = from_bytes(&bytes);
        claim!(result.is_err(), "Unknown tag should not parse");
    }
}
