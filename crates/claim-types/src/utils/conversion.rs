//! Fail-fast parsing of caller-supplied hex values.
//!
//! Wrong-length input is rejected rather than coerced or truncated, since a
//! silently adjusted value would change the signed payload without the
//! caller's knowledge.

use super::formatting::without_0x_prefix;
use alloy_primitives::{hex, Address, B256};

/// Parses a 20-byte account address from a hex string, with or without the
/// "0x" prefix.
pub fn parse_address(value: &str) -> Result<Address, String> {
	let bytes = hex::decode(without_0x_prefix(value))
		.map_err(|e| format!("Invalid hex address {}: {}", value, e))?;
	if bytes.len() != 20 {
		return Err(format!(
			"Expected 20-byte address, got {} bytes",
			bytes.len()
		));
	}
	let mut arr = [0u8; 20];
	arr.copy_from_slice(&bytes);
	Ok(Address::from(arr))
}

/// Parses a 32-byte value (a packed allocation word or a nonce) from a hex
/// string, with or without the "0x" prefix.
pub fn parse_bytes32(value: &str) -> Result<B256, String> {
	let bytes = hex::decode(without_0x_prefix(value))
		.map_err(|e| format!("Invalid hex value {}: {}", value, e))?;
	if bytes.len() != 32 {
		return Err(format!("Expected 32-byte value, got {} bytes", bytes.len()));
	}
	Ok(B256::from_slice(&bytes))
}
