//! The self-describing typed-data document handed to an external signer.
//!
//! A document serializes to the standard `{ types, primaryType, domain,
//! message }` shape, so any compliant signing facility computes the
//! canonical EIP-712 hash from it without further interpretation. Documents
//! are constructed fresh per call and never mutated.

use crate::domain::Eip712Domain;
use crate::message::TypedMessage;
use crate::utils::eip712::compute_final_digest;
use alloy_primitives::B256;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// One named, typed field of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDataField {
	/// The name of the field.
	pub name: String,
	/// The declared Solidity type (e.g. "address", "uint256", "bytes32[]").
	#[serde(rename = "type")]
	pub type_name: String,
}

impl TypedDataField {
	pub fn new(name: &str, type_name: &str) -> Self {
		Self {
			name: name.to_string(),
			type_name: type_name.to_string(),
		}
	}
}

/// A complete typed-data document for one message instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedData<M: TypedMessage> {
	/// Domain binding the signature to one deployment.
	pub domain: Eip712Domain,
	/// The message carried verbatim from the caller.
	pub message: M,
}

impl<M: TypedMessage> TypedData<M> {
	pub fn new(domain: Eip712Domain, message: M) -> Self {
		Self { domain, message }
	}

	/// Name of the top-level schema `message` conforms to.
	pub fn primary_type(&self) -> &'static str {
		M::PRIMARY_TYPE
	}

	/// Schema map carrying only the primary type's ordered field list.
	pub fn types(&self) -> BTreeMap<String, Vec<TypedDataField>> {
		let mut types = BTreeMap::new();
		types.insert(M::PRIMARY_TYPE.to_string(), M::type_fields());
		types
	}

	/// The canonical digest a wallet signs:
	/// keccak256(0x1901 || domainSeparator || hashStruct(message)).
	pub fn signing_hash(&self) -> B256 {
		compute_final_digest(&self.domain.separator(), &self.message.struct_hash())
	}
}

impl<M: TypedMessage + Serialize> Serialize for TypedData<M> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut state = serializer.serialize_struct("TypedData", 4)?;
		state.serialize_field("types", &self.types())?;
		state.serialize_field("primaryType", M::PRIMARY_TYPE)?;
		state.serialize_field("domain", &self.domain)?;
		state.serialize_field("message", &self.message)?;
		state.end()
	}
}
