//! Allocation-setting signing payload.
//!
//! Builds the typed-data document an administrator signs to set packed
//! per-recipient allocation data under a replay-protecting nonce.

use alloy_primitives::Address;
use claim_types::{Eip712Domain, SetAllocations, TypedData};
use tracing::debug;

use crate::PayloadError;

/// Builds the typed-data document for setting allocations.
///
/// `packed_data` order is preserved exactly as supplied; order is part of
/// the signed content. Whether the nonce was already consumed is known only
/// to the verifying contract and is not checked here.
pub fn set_allocations_typed_data(
	message: SetAllocations,
	chain_id: u64,
	claim_contract: Address,
) -> Result<TypedData<SetAllocations>, PayloadError> {
	if chain_id == 0 {
		return Err(PayloadError::InvalidChainId(chain_id));
	}

	let domain = Eip712Domain::for_claim_contract(chain_id, claim_contract);
	let typed_data = TypedData::new(domain, message);
	debug!(
		chain_id,
		verifying_contract = %claim_contract,
		allocations = typed_data.message.packed_data.len(),
		digest = %typed_data.signing_hash(),
		"built set allocations typed data"
	);
	Ok(typed_data)
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::B256;

	fn message() -> SetAllocations {
		SetAllocations {
			packed_data: vec![B256::repeat_byte(0x01), B256::repeat_byte(0x02)],
			nonce: B256::repeat_byte(0x03),
		}
	}

	fn contract() -> Address {
		"0xdddddddddddddddddddddddddddddddddddd4444"
			.parse()
			.unwrap()
	}

	#[test]
	fn test_set_allocations_document() {
		let doc = set_allocations_typed_data(message(), 1, contract()).unwrap();

		assert_eq!(doc.primary_type(), "SetAllocations");
		assert_eq!(doc.domain.name, "ZoraTokenCommunityClaim");
		assert_eq!(doc.domain.version, "1");
		assert_eq!(doc.domain.chain_id, 1);
		assert_eq!(doc.domain.verifying_contract, contract());
		assert_eq!(
			doc.message.packed_data,
			vec![B256::repeat_byte(0x01), B256::repeat_byte(0x02)]
		);
		assert_eq!(doc.message.nonce, B256::repeat_byte(0x03));
	}

	#[test]
	fn test_set_allocations_deterministic() {
		let first = set_allocations_typed_data(message(), 1, contract()).unwrap();
		let second = set_allocations_typed_data(message(), 1, contract()).unwrap();
		assert_eq!(first, second);
		assert_eq!(first.signing_hash(), second.signing_hash());
	}

	#[test]
	fn test_set_allocations_rejects_zero_chain_id() {
		let err = set_allocations_typed_data(message(), 0, contract()).unwrap_err();
		assert!(matches!(err, PayloadError::InvalidChainId(0)));
	}

	#[test]
	fn test_packed_data_order_preserved() {
		let mut reordered = message();
		reordered.packed_data.reverse();

		let forward = set_allocations_typed_data(message(), 1, contract()).unwrap();
		let reversed = set_allocations_typed_data(reordered, 1, contract()).unwrap();
		assert_eq!(
			forward.message.packed_data,
			vec![B256::repeat_byte(0x01), B256::repeat_byte(0x02)]
		);
		assert_ne!(forward.signing_hash(), reversed.signing_hash());
	}

	#[test]
	fn test_empty_packed_data_accepted() {
		let empty = SetAllocations {
			packed_data: Vec::new(),
			nonce: B256::repeat_byte(0x03),
		};
		let doc = set_allocations_typed_data(empty, 1, contract()).unwrap();
		assert!(doc.message.packed_data.is_empty());
	}

	#[test]
	fn test_serialized_shape() {
		let doc = set_allocations_typed_data(message(), 1, contract()).unwrap();
		let value = serde_json::to_value(&doc).unwrap();

		assert_eq!(value["primaryType"], "SetAllocations");
		assert_eq!(value["types"].as_object().unwrap().len(), 1);
		assert_eq!(value["types"]["SetAllocations"][0]["name"], "packedData");
		assert_eq!(value["types"]["SetAllocations"][0]["type"], "bytes32[]");
		assert_eq!(value["types"]["SetAllocations"][1]["name"], "nonce");
		assert_eq!(value["types"]["SetAllocations"][1]["type"], "bytes32");
		assert_eq!(
			value["message"]["packedData"],
			serde_json::to_value(message().packed_data).unwrap()
		);
	}
}
