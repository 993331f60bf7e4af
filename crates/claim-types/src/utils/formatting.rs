//! Hex string prefix management.

/// Adds "0x" prefix to a hex string if it doesn't already have one.
pub fn with_0x_prefix(hex_str: &str) -> String {
	if hex_str.to_lowercase().starts_with("0x") {
		hex_str.to_string()
	} else {
		format!("0x{}", hex_str)
	}
}

/// Removes "0x" prefix from a hex string if present.
pub fn without_0x_prefix(hex_str: &str) -> &str {
	hex_str
		.strip_prefix("0x")
		.or_else(|| hex_str.strip_prefix("0X"))
		.unwrap_or(hex_str)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_with_0x_prefix() {
		assert_eq!(
			with_0x_prefix("5fbdb2315678afecb367f032d93f642f64180aa3"),
			"0x5fbdb2315678afecb367f032d93f642f64180aa3"
		);
		assert_eq!(
			with_0x_prefix("0x5fbdb2315678afecb367f032d93f642f64180aa3"),
			"0x5fbdb2315678afecb367f032d93f642f64180aa3"
		);
	}

	#[test]
	fn test_without_0x_prefix() {
		assert_eq!(
			without_0x_prefix("0x5fbdb2315678afecb367f032d93f642f64180aa3"),
			"5fbdb2315678afecb367f032d93f642f64180aa3"
		);
		assert_eq!(
			without_0x_prefix("5fbdb2315678afecb367f032d93f642f64180aa3"),
			"5fbdb2315678afecb367f032d93f642f64180aa3"
		);
		assert_eq!(
			without_0x_prefix("0X5FBDB2315678AFECB367F032D93F642F64180AA3"),
			"5FBDB2315678AFECB367F032D93F642F64180AA3"
		);
	}
}
