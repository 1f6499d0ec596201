/// Tag for the BidPlaced event.
pub const BID_PLACED_TAG: u8 = u8::MAX - 11;

/// Tag for the Withdrawal event.
pub const WITHDRAWAL_TAG: u8 = u8::MAX - 14;

/// Revert reason of a bid that does not beat the highest bid.
pub const BID_TOO_LOW_REASON: &str = "Auction__BidTooLow";

/// Revert reason of an owner-only call made by someone else.
pub const NOT_OWNER_REASON: &str = "Ownable: caller is not the owner";
