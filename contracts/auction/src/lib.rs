//! An always-open English auction holding a single custodied balance.
//!
//! # Description
//! Anyone may call `bidHigher` with an amount strictly greater than the
//! current highest bid. The amount stays in the contract: outbid parties are
//! not refunded and the auction never closes. The account that initialized
//! the instance is its owner and may `withdraw` everything held at any time,
//! including while a bid is standing.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, structs::*};
use commons::*;
use concordium_std::*;
use marker::PhantomData;

mod contract;
mod events;
mod impls;
mod structs;
