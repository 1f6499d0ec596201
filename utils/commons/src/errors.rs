use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Bid does not exceed the highest bid (Error code: -4).
    BidTooLow,
    /// Only the contract owner has access (Error code: -5).
    NotOwner,
    /// Custodied amount does not fit into an `Amount` (Error code: -6).
    AmountOverflow,
    /// Failed to invoke a transfer (Error code: -7).
    InvokeTransferError,
}

impl CustomContractError {
    /// Human readable revert reason shown to callers and off-chain tooling.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::ParseParams => "Failed parsing the parameter",
            Self::LogFull => "Log is full",
            Self::LogMalformed => "Log is malformed",
            Self::BidTooLow => BID_TOO_LOW_REASON,
            Self::NotOwner => NOT_OWNER_REASON,
            Self::AmountOverflow => "Amount overflow",
            Self::InvokeTransferError => "Transfer failed",
        }
    }
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_reasons() {
        claim_eq!(CustomContractError::BidTooLow.reason(), "Auction__BidTooLow");
        claim_eq!(
            CustomContractError::NotOwner.reason(),
            "Ownable: caller is not the owner"
        );
    }

    #[concordium_test]
    fn test_conversions() {
        claim_eq!(
            CustomContractError::from(LogError::Full),
            CustomContractError::LogFull
        );
        claim_eq!(
            CustomContractError::from(LogError::Malformed),
            CustomContractError::LogMalformed
        );
        claim_eq!(
            CustomContractError::from(TransferError::AmountTooLarge),
            CustomContractError::InvokeTransferError
        );
        claim_eq!(
            CustomContractError::from(ParseError::default()),
            CustomContractError::ParseParams
        );
    }

    #[concordium_test]
    fn test_reject_codes() {
        let bid_too_low: Reject = CustomContractError::BidTooLow.into();
        let not_owner: Reject = CustomContractError::NotOwner.into();

        claim_eq!(bid_too_low.error_code.get(), -4);
        claim_eq!(not_owner.error_code.get(), -5);
    }
}
