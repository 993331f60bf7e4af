//! EIP-712 domain binding for the claim contract.
//!
//! The domain scopes every signature to one protocol deployment. `name` and
//! `version` are protocol constants shared by both operations; `chainId` and
//! `verifyingContract` vary per call and must match the contract the
//! signature will be submitted to. A signature built against a different
//! chain or contract hashes differently and is rejected by the verifier.

use crate::utils::eip712::compute_domain_hash;
use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

/// Domain name fixed by the claim contract.
pub const CLAIM_DOMAIN_NAME: &str = "ZoraTokenCommunityClaim";

/// Domain version fixed by the claim contract.
pub const CLAIM_DOMAIN_VERSION: &str = "1";

/// EIP-712 domain for one claim contract deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712Domain {
	/// Human-readable name of the signing domain.
	pub name: String,
	/// Major version of the signing domain.
	pub version: String,
	/// EIP-155 chain id the signature is valid on.
	pub chain_id: u64,
	/// Address of the contract that will verify the signature.
	pub verifying_contract: Address,
}

impl Eip712Domain {
	/// Domain for the claim contract deployed at `verifying_contract` on
	/// `chain_id`, with the protocol's fixed name and version.
	pub fn for_claim_contract(chain_id: u64, verifying_contract: Address) -> Self {
		Self {
			name: CLAIM_DOMAIN_NAME.to_string(),
			version: CLAIM_DOMAIN_VERSION.to_string(),
			chain_id,
			verifying_contract,
		}
	}

	/// EIP-712 domain separator for this domain.
	pub fn separator(&self) -> B256 {
		compute_domain_hash(
			&self.name,
			&self.version,
			self.chain_id,
			&self.verifying_contract,
		)
	}
}
