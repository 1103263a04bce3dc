use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How signed narrowing reads (`i16`, `i8`) decide whether a 32-bit value fits.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Narrowing {
	/// The value must lie inside the narrow type's range.
	#[default]
	Strict,
	/// Every 32-bit value is accepted and truncated to the narrow width
	/// (two's complement). Kept for callers written against older cursors
	/// whose signed range check never rejected anything.
	Permissive,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
	pub narrowing: Narrowing,
	/// Skip a run of leading spaces before a hex number
	pub hex_trim_spaces: bool,
	/// Skip a single leading `0x` before a hex number
	pub hex_prefix: bool,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			narrowing: Narrowing::Strict,
			hex_trim_spaces: true,
			hex_prefix: true,
		}
	}
}

impl Options {
	/// Parses options from a TOML document. Missing keys keep their defaults.
	pub fn from_toml_str(s: &str) -> Result<Self> {
		toml::from_str(s).context("parsing cursor options")
	}
}
