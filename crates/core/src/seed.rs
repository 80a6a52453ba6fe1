use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Pre-populated entry given as `NAME[:QTY]` on the command line or in
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
	pub name: String,
	/// Quantity text, replayed verbatim through the add dialog.
	pub quantity: String,
}

/// Reasons a `NAME[:QTY]` entry cannot become a [`Seed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
	#[error("item entry `{0}` has an empty name")]
	EmptyName(String),
	#[error("item entry `{entry}` has an invalid quantity `{quantity}`")]
	InvalidQuantity { entry: String, quantity: String },
}

impl Seed {
	pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			quantity: quantity.into(),
		}
	}
}

impl FromStr for Seed {
	type Err = SeedError;

	fn from_str(entry: &str) -> Result<Self, Self::Err> {
		let (name, quantity) = match entry.rsplit_once(':') {
			Some((name, quantity)) => (name.trim(), quantity.trim()),
			None => (entry.trim(), ""),
		};

		if name.is_empty() {
			return Err(SeedError::EmptyName(entry.to_string()));
		}
		if !quantity.is_empty() && quantity.parse::<u32>().is_err() {
			return Err(SeedError::InvalidQuantity {
				entry: entry.to_string(),
				quantity: quantity.to_string(),
			});
		}

		Ok(Self::new(name, quantity))
	}
}

impl fmt::Display for Seed {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.quantity.is_empty() {
			f.write_str(&self.name)
		} else {
			write!(f, "{}:{}", self.name, self.quantity)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_name_and_quantity() {
		let seed: Seed = "Milk:2".parse().expect("seed");
		assert_eq!(seed, Seed::new("Milk", "2"));
	}

	#[test]
	fn quantity_is_optional() {
		let seed: Seed = "Bread".parse().expect("seed");
		assert_eq!(seed, Seed::new("Bread", ""));
		assert_eq!(seed.to_string(), "Bread");
	}

	#[test]
	fn last_colon_separates_quantity() {
		let seed: Seed = "Tea: green:3".parse().expect("seed");
		assert_eq!(seed.name, "Tea: green");
		assert_eq!(seed.quantity, "3");
	}

	#[test]
	fn rejects_empty_name() {
		assert_eq!(
			":4".parse::<Seed>(),
			Err(SeedError::EmptyName(":4".to_string()))
		);
	}

	#[test]
	fn rejects_unreadable_quantity() {
		let err = "Eggs:lots".parse::<Seed>().expect_err("invalid quantity");
		assert!(matches!(err, SeedError::InvalidQuantity { .. }));
		assert_eq!(
			err.to_string(),
			"item entry `Eggs:lots` has an invalid quantity `lots`"
		);
	}
}
