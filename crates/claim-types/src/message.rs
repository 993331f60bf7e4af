//! The two frozen message schemas accepted by the claim contract.
//!
//! Field order within a schema is part of its identity: reordering fields
//! changes the struct hash, so the layouts below must stay in lockstep with
//! the layouts the verifying contract declares. Each operation gets its own
//! narrowly typed struct rather than one loosely typed "any schema" shape.

use crate::typed_data::TypedDataField;
use crate::utils::eip712::{hash_bytes32_array, Eip712AbiEncoder};
use alloy_primitives::{keccak256, Address, B256, U256};
use serde::{Deserialize, Serialize};

/// A message struct that can be the primary type of a claim signature.
///
/// Implemented only by the two frozen schemas. The document machinery in
/// [`crate::typed_data`] is generic over this seam, so a new operation means
/// a new struct and impl here, never a runtime-assembled schema.
pub trait TypedMessage {
	/// Name of the top-level schema this message conforms to.
	const PRIMARY_TYPE: &'static str;

	/// Canonical EIP-712 encode-type string for the schema.
	const ENCODE_TYPE: &'static str;

	/// Ordered field list of the schema, exactly as the contract declares it.
	fn type_fields() -> Vec<TypedDataField>;

	/// EIP-712 hashStruct of this message instance.
	fn struct_hash(&self) -> B256;
}

/// Permission for `claim_to` to execute a claim on behalf of `user` until
/// `deadline` (Unix seconds). Signed by `user`, submitted by anyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimWithSignature {
	/// Token owner granting the permission.
	pub user: Address,
	/// Address permitted to execute the claim.
	pub claim_to: Address,
	/// Timestamp after which the permission is void.
	pub deadline: U256,
}

impl TypedMessage for ClaimWithSignature {
	const PRIMARY_TYPE: &'static str = "ClaimWithSignature";
	const ENCODE_TYPE: &'static str =
		"ClaimWithSignature(address user,address claimTo,uint256 deadline)";

	fn type_fields() -> Vec<TypedDataField> {
		vec![
			TypedDataField::new("user", "address"),
			TypedDataField::new("claimTo", "address"),
			TypedDataField::new("deadline", "uint256"),
		]
	}

	fn struct_hash(&self) -> B256 {
		let mut enc = Eip712AbiEncoder::new();
		enc.push_b256(&keccak256(Self::ENCODE_TYPE.as_bytes()));
		enc.push_address(&self.user);
		enc.push_address(&self.claim_to);
		enc.push_u256(self.deadline);
		keccak256(enc.finish())
	}
}

/// Packed per-recipient allocation data bound to a one-time nonce.
///
/// Each `packed_data` element encodes one recipient's allocation in the
/// contract's packed binary layout; the encoding is opaque here. Nonce
/// uniqueness is enforced by the verifying contract, not by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAllocations {
	/// Ordered packed allocation words, one per recipient.
	pub packed_data: Vec<B256>,
	/// Replay-protecting nonce.
	pub nonce: B256,
}

impl TypedMessage for SetAllocations {
	const PRIMARY_TYPE: &'static str = "SetAllocations";
	const ENCODE_TYPE: &'static str = "SetAllocations(bytes32[] packedData,bytes32 nonce)";

	fn type_fields() -> Vec<TypedDataField> {
		vec![
			TypedDataField::new("packedData", "bytes32[]"),
			TypedDataField::new("nonce", "bytes32"),
		]
	}

	fn struct_hash(&self) -> B256 {
		let mut enc = Eip712AbiEncoder::new();
		enc.push_b256(&keccak256(Self::ENCODE_TYPE.as_bytes()));
		enc.push_b256(&hash_bytes32_array(&self.packed_data));
		enc.push_b256(&self.nonce);
		keccak256(enc.finish())
	}
}
