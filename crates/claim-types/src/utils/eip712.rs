//! EIP-712 primitives shared across the claim crates.
//!
//! These helpers provide:
//! - Domain hash computation (name, version, chainId, verifyingContract)
//! - Final digest computation (0x1901 || domainHash || structHash)
//! - Array hashing for `bytes32[]` fields
//! - A minimal ABI encoder for the static field types the claim schemas use

use alloy_primitives::{keccak256, Address, B256, U256};

/// EIP-712 domain type used by the claim contract.
pub const DOMAIN_TYPE: &str =
	"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Compute the EIP-712 domain hash
/// (keccak256(abi.encode(typeHash, nameHash, versionHash, chainId, verifyingContract))).
pub fn compute_domain_hash(
	name: &str,
	version: &str,
	chain_id: u64,
	verifying_contract: &Address,
) -> B256 {
	let domain_type_hash = keccak256(DOMAIN_TYPE.as_bytes());
	let name_hash = keccak256(name.as_bytes());
	let version_hash = keccak256(version.as_bytes());
	let mut enc = Eip712AbiEncoder::new();
	enc.push_b256(&domain_type_hash);
	enc.push_b256(&name_hash);
	enc.push_b256(&version_hash);
	enc.push_u256(U256::from(chain_id));
	enc.push_address(verifying_contract);
	keccak256(enc.finish())
}

/// Compute the final EIP-712 digest: keccak256(0x1901 || domainHash || structHash).
pub fn compute_final_digest(domain_hash: &B256, struct_hash: &B256) -> B256 {
	let mut out = Vec::with_capacity(2 + 32 + 32);
	out.push(0x19);
	out.push(0x01);
	out.extend_from_slice(domain_hash.as_slice());
	out.extend_from_slice(struct_hash.as_slice());
	keccak256(out)
}

/// Hash a `bytes32[]` value: keccak256 of the elements concatenated in the
/// order supplied. Element order is part of the signed content.
pub fn hash_bytes32_array(values: &[B256]) -> B256 {
	let mut buf = Vec::with_capacity(values.len() * 32);
	for value in values {
		buf.extend_from_slice(value.as_slice());
	}
	keccak256(buf)
}

/// Minimal ABI encoder for static types used in EIP-712 struct hashing.
pub struct Eip712AbiEncoder {
	buf: Vec<u8>,
}

impl Default for Eip712AbiEncoder {
	fn default() -> Self {
		Self::new()
	}
}

impl Eip712AbiEncoder {
	pub fn new() -> Self {
		Self { buf: Vec::new() }
	}

	pub fn push_b256(&mut self, v: &B256) {
		self.buf.extend_from_slice(v.as_slice());
	}

	pub fn push_address(&mut self, addr: &Address) {
		let mut word = [0u8; 32];
		word[12..].copy_from_slice(addr.as_slice());
		self.buf.extend_from_slice(&word);
	}

	pub fn push_u256(&mut self, v: U256) {
		let word: [u8; 32] = v.to_be_bytes::<32>();
		self.buf.extend_from_slice(&word);
	}

	pub fn finish(self) -> Vec<u8> {
		self.buf
	}
}
