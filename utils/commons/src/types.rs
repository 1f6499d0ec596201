use super::*;

/// Errors are rejected as-is, there is no token standard wrapping them.
pub type ContractError = CustomContractError;

pub type ContractResult<A> = Result<A, ContractError>;
