//! Signing payload construction for the community claim protocol.
//!
//! Each supported operation has its own narrowly typed builder that maps
//! message fields plus chain context to a fully specified typed-data
//! document, with zero ambiguity about field order, types, or domain
//! values. The builders are pure: identical inputs always produce
//! structurally identical documents, and nothing here performs I/O, key
//! handling, or signature submission.

use thiserror::Error;

pub mod permit_claim;
pub mod set_allocations;

pub use permit_claim::permit_claim_typed_data;
pub use set_allocations::set_allocations_typed_data;

/// Errors that can occur while constructing a signing payload.
#[derive(Debug, Error)]
pub enum PayloadError {
	/// Error that occurs when the supplied chain id is not a positive integer.
	#[error("Invalid chain id: {0}")]
	InvalidChainId(u64),
}
