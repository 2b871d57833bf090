/*!
# Argot: Parse Results.
*/

use crate::{
	ArgotError,
	convert,
	FromArg,
};
use std::{
	collections::BTreeMap,
	ops::Index,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Occurrence.
///
/// A single matched instance of an option, along with whatever value(s) it
/// captured.
///
/// Switches never capture anything; options with [`Arity::Optional`](crate::Arity::Optional)
/// capture at most one value; options with [`Arity::Count`](crate::Arity::Count)
/// capture exactly `n`.
pub struct Occurrence {
	/// # Option Identifier.
	option: String,

	/// # Flag As Typed.
	flag: String,

	/// # Argv Position.
	slot: usize,

	/// # Occurrence Index (Per-Option).
	index: usize,

	/// # Values.
	values: Vec<String>,

	/// # Value Argv Positions.
	///
	/// This runs parallel to `values`.
	value_slots: Vec<usize>,
}

impl Occurrence {
	/// # New.
	pub(crate) fn new(option: &str, flag: &str, slot: usize, index: usize) -> Self {
		Self {
			option: option.to_owned(),
			flag: flag.to_owned(),
			slot,
			index,
			values: Vec::new(),
			value_slots: Vec::new(),
		}
	}

	/// # Push Value.
	///
	/// `slot` is the value's own position in the argument list, which only
	/// matches the flag's for the `--key=val` form.
	pub(crate) fn push(&mut self, slot: usize, value: String) {
		self.values.push(value);
		self.value_slots.push(slot);
	}
}

impl Occurrence {
	#[must_use]
	/// # Option Identifier.
	pub fn option(&self) -> &str { &self.option }

	#[must_use]
	/// # Flag.
	///
	/// Return the flag exactly as it appeared on the command line, e.g.
	/// `--output` or `-o`.
	pub fn flag(&self) -> &str { &self.flag }

	#[must_use]
	/// # Argv Slot.
	///
	/// Return the position of the flag within the original argument list,
	/// counting the program name as `0`.
	pub const fn slot(&self) -> usize { self.slot }

	#[must_use]
	/// # Index.
	///
	/// Return the position of this occurrence among all occurrences of the
	/// same option.
	pub const fn index(&self) -> usize { self.index }

	#[must_use]
	/// # Argument.
	///
	/// Return the (first) captured value, if any.
	pub fn arg(&self) -> Option<&str> { self.values.first().map(String::as_str) }

	#[must_use]
	/// # Values.
	///
	/// Return all captured values.
	pub fn values(&self) -> &[String] { &self.values }

	#[must_use]
	/// # Value Slot.
	///
	/// Return the position within the original argument list that the `k`th
	/// captured value came from, counting the program name as `0`. Inline
	/// `--key=val` values share the flag's own slot.
	pub fn value_slot(&self, k: usize) -> Option<usize> {
		self.value_slots.get(k).copied()
	}

	#[must_use]
	/// # Value Slots.
	pub fn value_slots(&self) -> &[usize] { &self.value_slots }

	/// # As Value.
	///
	/// Convert the (first) captured value to `T`.
	///
	/// ## Errors
	///
	/// This will return an error if there is no value, or it cannot be
	/// converted.
	pub fn as_value<T: FromArg>(&self) -> Result<T, ArgotError> {
		let raw = self.arg().ok_or_else(|| ArgotError::NoValueAvailable {
			option: self.option.clone(),
			index: self.index,
		})?;
		convert(raw)
	}

	/// # As Value (or Default).
	///
	/// Same as [`Occurrence::as_value`], except `default` is returned when
	/// there is no value to convert.
	///
	/// ## Errors
	///
	/// This will return an error if a value exists but cannot be converted.
	pub fn as_value_or<T: FromArg>(&self, default: T) -> Result<T, ArgotError> {
		self.arg().map_or(Ok(default), convert)
	}

	/// # All As.
	///
	/// Convert each captured value to `T`, in order.
	///
	/// ## Errors
	///
	/// This will return the first conversion error encountered, if any.
	pub fn all_as<T: FromArg>(&self) -> Result<Vec<T>, ArgotError> {
		self.values.iter().map(|v| convert(v)).collect()
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Option Result.
///
/// This is a borrowed view over every [`Occurrence`] of a given option. It
/// is returned by [`ParseResult::option`] and is simply empty if the option
/// never appeared.
pub struct OptionResult<'a> {
	/// # Option Identifier.
	id: &'a str,

	/// # Occurrences.
	all: &'a [Occurrence],
}

impl Index<usize> for OptionResult<'_> {
	type Output = Occurrence;

	/// # Index.
	///
	/// ## Panics
	///
	/// This will panic if `idx` is out of range, the same as a slice would.
	/// Use [`OptionResult::get`] for a checked alternative.
	fn index(&self, idx: usize) -> &Self::Output { &self.all[idx] }
}

impl<'a> IntoIterator for OptionResult<'a> {
	type Item = &'a Occurrence;
	type IntoIter = std::slice::Iter<'a, Occurrence>;

	fn into_iter(self) -> Self::IntoIter { self.all.iter() }
}

impl<'a> OptionResult<'a> {
	#[must_use]
	/// # Identifier.
	pub const fn id(&self) -> &'a str { self.id }

	#[must_use]
	/// # Count.
	///
	/// Return the number of occurrences.
	pub const fn count(&self) -> usize { self.all.len() }

	#[must_use]
	/// # Is Present?
	///
	/// True if the option occurred at least once.
	pub const fn is_present(&self) -> bool { ! self.all.is_empty() }

	/// # Get.
	///
	/// Return the occurrence at `idx`.
	///
	/// ## Errors
	///
	/// This will return an error if `idx` is out of range.
	pub fn get(&self, idx: usize) -> Result<&'a Occurrence, ArgotError> {
		self.all.get(idx).ok_or(ArgotError::IndexOutOfBounds(idx))
	}

	#[must_use]
	/// # Occurrences.
	pub const fn as_slice(&self) -> &'a [Occurrence] { self.all }

	/// # Iterate.
	pub fn iter(&self) -> std::slice::Iter<'a, Occurrence> { self.all.iter() }

	/// # As Value.
	///
	/// Convert the first occurrence's value to `T`.
	///
	/// ## Errors
	///
	/// This will return an error if the option is absent, its first
	/// occurrence has no value, or the value cannot be converted.
	pub fn as_value<T: FromArg>(&self) -> Result<T, ArgotError> {
		match self.all.first() {
			Some(o) => o.as_value(),
			None => Err(ArgotError::NoValueAvailable {
				option: self.id.to_owned(),
				index: 0,
			}),
		}
	}

	/// # As Value (or Default).
	///
	/// Same as [`OptionResult::as_value`], except `default` is returned when
	/// the option is absent or its first occurrence has no value.
	///
	/// ## Errors
	///
	/// This will return an error if a value exists but cannot be converted.
	pub fn as_value_or<T: FromArg>(&self, default: T) -> Result<T, ArgotError> {
		match self.all.first() {
			Some(o) => o.as_value_or(default),
			None => Ok(default),
		}
	}

	/// # All As.
	///
	/// Convert the value of every occurrence to `T`, in order. (For
	/// multi-value occurrences, only the first value is considered; use
	/// [`Occurrence::all_as`] to get the rest.)
	///
	/// ## Errors
	///
	/// This will return an error for the first occurrence lacking a value or
	/// failing conversion.
	pub fn all_as<T: FromArg>(&self) -> Result<Vec<T>, ArgotError> {
		self.as_slice().iter().map(Occurrence::as_value).collect()
	}
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Parse Result.
///
/// This holds everything a [`Parser`](crate::Parser) found: the
/// occurrences of each option that appeared at least once, keyed by
/// identifier, and the positional arguments in their original order.
///
/// Results are read-only once built; all accessors borrow.
///
/// ## Examples
///
/// ```
/// use argot::{Flag, Parser};
///
/// let parser = Parser::new(vec![
///     Flag::switch("verbose", ["-v", "--verbose"], "Be verbose."),
///     Flag::option("output", ["-o", "--output"], "Output file."),
/// ]).unwrap();
///
/// let args = parser.parse(["app", "foo", "-v", "--output", "out.txt", "bar"])
///     .unwrap();
///
/// assert!(args.has_option("verbose"));
/// assert_eq!(args.option("output").as_value::<String>().unwrap(), "out.txt");
/// assert_eq!(args.count(), 2);
/// assert_eq!(args.positional(), &["foo", "bar"]);
/// ```
pub struct ParseResult {
	/// # Options.
	options: BTreeMap<String, Vec<Occurrence>>,

	/// # Positional Arguments.
	pos: Vec<String>,
}

impl Index<usize> for ParseResult {
	type Output = str;

	/// # Index.
	///
	/// ## Panics
	///
	/// This will panic if `idx` is out of range, the same as a slice would.
	/// Use [`ParseResult::get`] for a checked alternative.
	fn index(&self, idx: usize) -> &Self::Output { &self.pos[idx] }
}

impl ParseResult {
	/// # From Parts.
	pub(crate) const fn new(
		options: BTreeMap<String, Vec<Occurrence>>,
		pos: Vec<String>,
	) -> Self {
		Self { options, pos }
	}
}

impl ParseResult {
	#[must_use]
	/// # Has Option?
	///
	/// True if the option occurred at least once.
	pub fn has_option(&self, id: &str) -> bool {
		self.options.get(id).is_some_and(|v| ! v.is_empty())
	}

	#[must_use]
	/// # Option.
	///
	/// Return the occurrences of an option. If the option never appeared,
	/// the result is empty.
	pub fn option<'a>(&'a self, id: &'a str) -> OptionResult<'a> {
		match self.options.get_key_value(id) {
			Some((k, all)) => OptionResult { id: k.as_str(), all },
			None => OptionResult { id, all: &[] },
		}
	}

	/// # Options.
	///
	/// Iterate over every option that occurred (alphabetically by
	/// identifier).
	pub fn options(&self) -> impl Iterator<Item=OptionResult<'_>> {
		self.options.iter()
			.map(|(k, all)| OptionResult { id: k.as_str(), all })
	}

	#[must_use]
	/// # Count.
	///
	/// Return the number of positional arguments.
	pub fn count(&self) -> usize { self.pos.len() }

	#[must_use]
	/// # Positional Arguments.
	pub fn positional(&self) -> &[String] { &self.pos }

	#[must_use]
	/// # Into Positional Arguments.
	pub fn into_positional(self) -> Vec<String> { self.pos }

	/// # Get Positional.
	///
	/// ## Errors
	///
	/// This will return an error if `idx` is out of range.
	pub fn get(&self, idx: usize) -> Result<&str, ArgotError> {
		self.pos.get(idx)
			.map(String::as_str)
			.ok_or(ArgotError::IndexOutOfBounds(idx))
	}

	/// # Positional As.
	///
	/// Convert the positional argument at `idx` to `T`.
	///
	/// ## Errors
	///
	/// This will return an error if `idx` is out of range or the value cannot
	/// be converted.
	pub fn as_value<T: FromArg>(&self, idx: usize) -> Result<T, ArgotError> {
		self.get(idx).and_then(convert)
	}

	/// # All Positional As.
	///
	/// Convert every positional argument to `T`, in order.
	///
	/// ## Errors
	///
	/// This will return the first conversion error encountered, if any.
	pub fn all_as<T: FromArg>(&self) -> Result<Vec<T>, ArgotError> {
		self.pos.iter().map(|v| convert(v)).collect()
	}
}
