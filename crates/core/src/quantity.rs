/// Quantity used whenever the typed quantity text cannot be read.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Read a quantity from free-form field text.
///
/// Anything that is not a non-negative integer, including the empty string,
/// falls back to [`DEFAULT_QUANTITY`]. The text is taken verbatim.
#[must_use]
pub fn parse_quantity(text: &str) -> u32 {
	text.parse::<u32>().unwrap_or(DEFAULT_QUANTITY)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numeric_text_is_parsed() {
		assert_eq!(parse_quantity("2"), 2);
		assert_eq!(parse_quantity("0"), 0);
		assert_eq!(parse_quantity("120"), 120);
	}

	#[test]
	fn unreadable_text_falls_back_to_default() {
		for text in ["", "abc", "-3", "2.5", " 4", "99999999999"] {
			assert_eq!(parse_quantity(text), DEFAULT_QUANTITY, "input {text:?}");
		}
	}
}
