//! Claim-permit signing payload.
//!
//! Builds the typed-data document a token holder signs to let a third
//! party execute their claim before a deadline.

use alloy_primitives::Address;
use claim_types::{ClaimWithSignature, Eip712Domain, TypedData};
use tracing::debug;

use crate::PayloadError;

/// Builds the typed-data document for a claim permit.
///
/// The message is carried verbatim, with no transformation or
/// normalization. `chain_id` and `claim_contract` must identify the
/// deployment the signature will be submitted to; whether they actually do
/// is checked by the verifying contract, not here.
pub fn permit_claim_typed_data(
	message: ClaimWithSignature,
	chain_id: u64,
	claim_contract: Address,
) -> Result<TypedData<ClaimWithSignature>, PayloadError> {
	if chain_id == 0 {
		return Err(PayloadError::InvalidChainId(chain_id));
	}

	let domain = Eip712Domain::for_claim_contract(chain_id, claim_contract);
	let typed_data = TypedData::new(domain, message);
	debug!(
		chain_id,
		verifying_contract = %claim_contract,
		digest = %typed_data.signing_hash(),
		"built claim permit typed data"
	);
	Ok(typed_data)
}
