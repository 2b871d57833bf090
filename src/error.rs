/*!
# Argot: Errors.

This is the obligatory error enum. Definition-time, parse-time, and
access-time failures all land here, each carrying enough context (the
offending token, option identifier, or target type) to say something
useful to the user.
*/

use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Error!
pub enum ArgotError {
	/// # Duplicate Flag Spelling.
	///
	/// Two definitions declared the same literal flag.
	#[error("Duplicate flag: {0}")]
	DuplicateFlag(String),

	/// # Reserved Flag Spelling.
	///
	/// A definition declared the flag stop (`--`) as one of its spellings.
	/// The stop is handled before any lookup, so it could never match.
	#[error("Reserved flag: {0}")]
	ReservedFlag(String),

	/// # Unexpected Option.
	///
	/// A flag-shaped argument matched none of the declared spellings.
	#[error("Unexpected option: {0}")]
	UnexpectedOption(String),

	/// # Option Lacks Argument.
	///
	/// A flag requiring value(s) ran out of arguments, or was interrupted by
	/// another declared flag.
	#[error("Option {option} ({flag}) requires an argument.")]
	OptionLacksArgument {
		/// # Option Identifier.
		option: String,

		/// # Flag As Typed.
		flag: String,
	},

	/// # Conversion Failed.
	#[error("Unable to convert {raw:?} to {target}: {reason}")]
	ConversionFailed {
		/// # Raw Value.
		raw: String,

		/// # Target Type Name.
		target: &'static str,

		/// # Underlying Reason.
		reason: String,
	},

	/// # Index Out of Bounds.
	#[error("Index out of bounds: {0}")]
	IndexOutOfBounds(usize),

	/// # No Value Available.
	///
	/// A typed accessor was called on an occurrence with no captured value
	/// and no default was supplied.
	#[error("No value available for option {option} (occurrence {index}).")]
	NoValueAvailable {
		/// # Option Identifier.
		option: String,

		/// # Occurrence Index.
		index: usize,
	},

	/// # Invalid UTF-8.
	///
	/// Only raised by [`Parser::parse_os`](crate::Parser::parse_os) and
	/// [`Parser::parse_env`](crate::Parser::parse_env); the lossy rendering
	/// of the argument is included.
	#[error("Invalid UTF-8: {0}")]
	InvalidUtf8(String),
}

impl ArgotError {
	#[must_use]
	/// # Exit code.
	///
	/// Every variant is a failure, so this is always `1`. It is provided
	/// for symmetry with binaries that want to `std::process::exit` on
	/// error.
	pub const fn exit_code(&self) -> i32 { 1 }

	#[must_use]
	/// # As String Slice.
	///
	/// Return the general category of the error, sans context.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::DuplicateFlag(_) => "Duplicate flag.",
			Self::ReservedFlag(_) => "Reserved flag.",
			Self::UnexpectedOption(_) => "Unexpected option.",
			Self::OptionLacksArgument { .. } => "Option lacks argument.",
			Self::ConversionFailed { .. } => "Conversion failed.",
			Self::IndexOutOfBounds(_) => "Index out of bounds.",
			Self::NoValueAvailable { .. } => "No value available.",
			Self::InvalidUtf8(_) => "Invalid UTF-8.",
		}
	}
}
