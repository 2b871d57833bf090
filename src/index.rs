/*!
# Argot: Flag Index.
*/

use crate::{
	Arity,
	ArgotError,
	Flag,
	FLAG_STOP,
};
use std::collections::BTreeMap;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Index Entry.
struct Entry {
	/// # Definition Position.
	pos: usize,

	/// # Definition Arity.
	arity: Arity,
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Index Hit.
///
/// The result of a successful [`FlagIndex::find`].
pub(crate) struct Hit<'a> {
	/// # Definition Position.
	pub(crate) pos: usize,

	/// # Definition Arity.
	pub(crate) arity: Arity,

	/// # Inline Value.
	///
	/// For `--key=val` matches, this is the `val` part.
	pub(crate) inline: Option<&'a str>,
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Flag Index.
///
/// This maps every declared spelling back to the position of the [`Flag`]
/// that owns it. It is built once and never changed afterwards.
pub struct FlagIndex {
	/// # Spellings.
	map: BTreeMap<String, Entry>,
}

impl FlagIndex {
	/// # New.
	///
	/// Index all of the spellings in `flags`.
	///
	/// ## Errors
	///
	/// This will return an error if any spelling is used more than once,
	/// whether within a single definition or across several, or if a
	/// spelling is the flag stop (`--`).
	pub fn new(flags: &[Flag]) -> Result<Self, ArgotError> {
		let mut map = BTreeMap::new();
		for (pos, flag) in flags.iter().enumerate() {
			let entry = Entry { pos, arity: flag.arity() };
			for spelling in flag.flags() {
				if spelling == FLAG_STOP {
					return Err(ArgotError::ReservedFlag(spelling.clone()));
				}
				if map.insert(spelling.clone(), entry).is_some() {
					return Err(ArgotError::DuplicateFlag(spelling.clone()));
				}
			}
		}

		tracing::debug!(spellings = map.len(), definitions = flags.len(), "indexed flags");
		Ok(Self { map })
	}

	#[must_use]
	/// # Get.
	///
	/// Return the definition position for an exact spelling, if any.
	pub fn get(&self, spelling: &str) -> Option<usize> {
		self.map.get(spelling).map(|e| e.pos)
	}

	#[must_use]
	/// # Contains?
	pub fn contains(&self, spelling: &str) -> bool { self.map.contains_key(spelling) }

	#[must_use]
	/// # Length.
	///
	/// Return the total number of indexed spellings.
	pub fn len(&self) -> usize { self.map.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.map.is_empty() }

	/// # Spellings.
	///
	/// Iterate over the indexed spellings (alphabetically) and their
	/// definition positions.
	pub fn iter(&self) -> impl Iterator<Item=(&str, usize)> {
		self.map.iter().map(|(k, e)| (k.as_str(), e.pos))
	}

	/// # Find.
	///
	/// Match a raw argument against the index. Exact matches win; failing
	/// that, a long `--key=val` argument matches if `--key` is declared and
	/// takes a single value.
	pub(crate) fn find<'a>(&self, raw: &'a str) -> Option<Hit<'a>> {
		if let Some(e) = self.map.get(raw) {
			return Some(Hit { pos: e.pos, arity: e.arity, inline: None });
		}

		// Long keys could have a value gumming up the works.
		if raw.starts_with("--") {
			let (k, v) = raw.split_once('=')?;
			let e = self.map.get(k)?;
			if e.arity.accepts_inline() {
				return Some(Hit { pos: e.pos, arity: e.arity, inline: Some(v) });
			}
		}

		None
	}
}



#[cfg(test)]
mod test {
	use super::*;

	fn flags() -> Vec<Flag> {
		vec![
			Flag::switch("verbose", ["-v", "--verbose"], "Be verbose."),
			Flag::option("output", ["-o", "--output"], "Output file."),
			Flag::optional("delim", ["-d", "--delim"], "Delimiter."),
			Flag::new("pair", ["--pair"], "Two things.", Arity::Count(2)),
		]
	}

	#[test]
	fn t_new() {
		let flags = flags();
		let index = FlagIndex::new(&flags).expect("FlagIndex::new failed.");
		assert_eq!(index.len(), 7);
		assert!(! index.is_empty());

		// Every spelling should point back to its owner.
		for (pos, flag) in flags.iter().enumerate() {
			for spelling in flag.flags() {
				assert_eq!(index.get(spelling), Some(pos), "Bug: {spelling} resolved wrong.");
			}
		}

		// Iteration is alphabetical by spelling.
		assert_eq!(
			index.iter().collect::<Vec<_>>(),
			[
				("--delim", 2), ("--output", 1), ("--pair", 3), ("--verbose", 0),
				("-d", 2), ("-o", 1), ("-v", 0),
			],
		);

		assert_eq!(index.get("-h"), None);
		assert!(index.contains("--pair"));
		assert!(! index.contains("--pair=1"));
	}

	#[test]
	fn t_duplicate() {
		let mut flags = flags();
		flags.push(Flag::switch("help", ["-h", "-v"], "Help."));
		assert_eq!(
			FlagIndex::new(&flags),
			Err(ArgotError::DuplicateFlag("-v".to_owned())),
		);

		// Repeats within a single definition count too.
		assert!(FlagIndex::new(&[Flag::switch("x", ["-x", "-x"], "X.")]).is_err());
	}

	#[test]
	fn t_reserved() {
		assert_eq!(
			FlagIndex::new(&[Flag::switch("stop", ["-s", "--"], "Stop.")]),
			Err(ArgotError::ReservedFlag("--".to_owned())),
		);

		// Lookalikes are fine.
		let index = FlagIndex::new(&[Flag::switch("stop", ["---", "--s"], "Stop.")])
			.expect("FlagIndex::new failed.");
		assert!(index.contains("---"));
	}

	#[test]
	fn t_empty() {
		// Nothing at all.
		let index = FlagIndex::new(&[]).expect("FlagIndex::new failed.");
		assert!(index.is_empty());

		// A definition without spellings is accepted, but inert.
		let index = FlagIndex::new(&[Flag::switch("ghost", Vec::<&str>::new(), "Boo.")])
			.expect("FlagIndex::new failed.");
		assert!(index.is_empty());
		assert_eq!(index.iter().next(), None);
	}

	#[test]
	fn t_find() {
		let index = FlagIndex::new(&flags()).expect("FlagIndex::new failed.");

		assert_eq!(
			index.find("-v"),
			Some(Hit { pos: 0, arity: Arity::None, inline: None }),
		);
		assert_eq!(
			index.find("--output=foo.txt"),
			Some(Hit { pos: 1, arity: Arity::Count(1), inline: Some("foo.txt") }),
		);
		assert_eq!(
			index.find("--delim="),
			Some(Hit { pos: 2, arity: Arity::Optional, inline: Some("") }),
		);

		// Switches and multi-value flags don't do inline.
		assert_eq!(index.find("--verbose=1"), None);
		assert_eq!(index.find("--pair=1"), None);

		// Short keys don't either.
		assert_eq!(index.find("-o=foo"), None);
		assert_eq!(index.find("-ofoo"), None);

		assert_eq!(index.find("--nope=1"), None);
		assert_eq!(index.find("bar"), None);
	}
}
