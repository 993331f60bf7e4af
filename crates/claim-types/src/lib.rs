//! Common types for the community claim signing system.
//!
//! This crate defines the frozen EIP-712 schemas, the domain binding, and
//! the typed-data document shared by every payload builder, so that
//! off-chain signers and the on-chain verifier agree on one structure.

/// EIP-712 domain binding for the claim contract.
pub mod domain;
/// The two frozen message schemas.
pub mod message;
/// The typed-data document handed to an external signer.
pub mod typed_data;
/// Hashing, conversion, and formatting utilities.
pub mod utils;

// Re-export the core types for convenient access
pub use domain::{Eip712Domain, CLAIM_DOMAIN_NAME, CLAIM_DOMAIN_VERSION};
pub use message::{ClaimWithSignature, SetAllocations, TypedMessage};
pub use typed_data::{TypedData, TypedDataField};
pub use utils::{parse_address, parse_bytes32, with_0x_prefix, without_0x_prefix};
