//! Utility functions shared across the claim crates.
//!
//! This module provides the low-level EIP-712 hashing helpers together with
//! hex parsing and formatting used when values arrive as strings.

pub mod conversion;
pub mod eip712;
pub mod formatting;

pub use conversion::{parse_address, parse_bytes32};
pub use eip712::{
	compute_domain_hash, compute_final_digest, hash_bytes32_array, Eip712AbiEncoder, DOMAIN_TYPE,
};
pub use formatting::{with_0x_prefix, without_0x_prefix};
