/*!
# Argot: Flag Definitions.
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Arity.
///
/// The number of value arguments each occurrence of a flag consumes.
pub enum Arity {
	/// # No Values (Switch).
	None,

	/// # Exactly N Values.
	///
	/// `Count(0)` is treated the same as [`Arity::None`].
	Count(usize),

	/// # Zero or One Value.
	///
	/// Whether or not a given occurrence has a value depends on what follows
	/// it; values are never taken from a token matching another declared
	/// flag.
	Optional,
}

impl Arity {
	#[must_use]
	/// # Required Values.
	///
	/// Return the number of values that _must_ follow each occurrence.
	pub const fn required(self) -> usize {
		match self {
			Self::Count(n) => n,
			Self::None | Self::Optional => 0,
		}
	}

	#[must_use]
	/// # Takes a Value?
	///
	/// True if an occurrence can capture anything at all.
	pub const fn takes_value(self) -> bool {
		matches!(self, Self::Optional | Self::Count(1..))
	}

	#[must_use]
	/// # Accepts Inline Value?
	///
	/// `--key=val` shorthand is only recognized for flags taking exactly one
	/// (possibly optional) value.
	pub(crate) const fn accepts_inline(self) -> bool {
		matches!(self, Self::Optional | Self::Count(1))
	}
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Flag Kind.
///
/// A rough classification of argument shapes:
/// * A single `-` followed by one ASCII alphanumeric is a short flag;
/// * Two `--` followed by an ASCII alphanumeric is a long flag;
/// * Everything else is `None`.
///
/// Note that `-abc` is classified as short too; it just won't match any
/// declared spelling.
pub enum FlagKind {
	/// # Not a Flag.
	None,

	/// # Short (`-k`).
	Short,

	/// # Long (`--key`).
	Long,
}

impl From<&str> for FlagKind {
	fn from(src: &str) -> Self {
		match src.as_bytes() {
			[b'-', b'-', b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', ..] => Self::Long,
			[b'-', b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', ..] => Self::Short,
			_ => Self::None,
		}
	}
}

impl FlagKind {
	#[must_use]
	/// # Is Flag?
	pub const fn is_flag(self) -> bool { ! matches!(self, Self::None) }
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Flag Definition.
///
/// This holds everything the parser needs to know about a single option:
/// the identifier results are stored under, the literal spellings that
/// trigger it, a human-readable description, and its [`Arity`].
///
/// Spellings are matched literally; nothing is trimmed or normalized. A
/// definition with no spellings is allowed, but can never be triggered.
///
/// ## Examples
///
/// ```
/// use argot::{Arity, Flag};
///
/// let verbose = Flag::switch("verbose", ["-v", "--verbose"], "Be verbose.");
/// assert_eq!(verbose.arity(), Arity::None);
///
/// let output = Flag::option("output", ["-o", "--output"], "Output file.");
/// assert_eq!(output.arity(), Arity::Count(1));
/// ```
pub struct Flag {
	/// # Identifier.
	id: String,

	/// # Spellings.
	flags: Vec<String>,

	/// # Description.
	help: String,

	/// # Arity.
	arity: Arity,
}

impl fmt::Display for Flag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut iter = self.flags.iter();
		if let Some(first) = iter.next() {
			f.write_str(first)?;
			for next in iter {
				f.write_str(", ")?;
				f.write_str(next)?;
			}
		}
		Ok(())
	}
}

impl Flag {
	/// # New.
	///
	/// Create a new definition with an arbitrary [`Arity`].
	pub fn new<I, S>(id: &str, flags: I, help: &str, arity: Arity) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		Self {
			id: id.to_owned(),
			flags: flags.into_iter().map(Into::into).collect(),
			help: help.to_owned(),
			arity,
		}
	}

	/// # New Switch.
	///
	/// Shorthand for a definition with [`Arity::None`].
	pub fn switch<I, S>(id: &str, flags: I, help: &str) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		Self::new(id, flags, help, Arity::None)
	}

	/// # New Option.
	///
	/// Shorthand for a definition requiring exactly one value.
	pub fn option<I, S>(id: &str, flags: I, help: &str) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		Self::new(id, flags, help, Arity::Count(1))
	}

	/// # New Optional.
	///
	/// Shorthand for a definition with [`Arity::Optional`].
	pub fn optional<I, S>(id: &str, flags: I, help: &str) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		Self::new(id, flags, help, Arity::Optional)
	}
}

impl Flag {
	#[must_use]
	/// # Identifier.
	pub fn id(&self) -> &str { &self.id }

	#[must_use]
	/// # Spellings.
	pub fn flags(&self) -> &[String] { &self.flags }

	#[must_use]
	/// # Description.
	pub fn help(&self) -> &str { &self.help }

	#[must_use]
	/// # Arity.
	pub const fn arity(&self) -> Arity { self.arity }
}
