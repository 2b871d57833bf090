/*!
# Argot: Parser.

This module contains the [`Parser`] handle (the definitions plus their
index) and the single-pass scanner that turns an argument list into a
[`ParseResult`].
*/

use crate::{
	ArgotError,
	Arity,
	Flag,
	FlagIndex,
	FlagKind,
	Occurrence,
	ParseResult,
};
use std::{
	collections::BTreeMap,
	ffi::OsString,
};



/// # Flag Stop.
///
/// Everything after this is positional.
pub const FLAG_STOP: &str = "--";



#[derive(Debug, Clone)]
/// # Parser.
///
/// A `Parser` holds a table of [`Flag`] definitions and an index of their
/// spellings. Once built, it is read-only and can be used to parse any
/// number of argument lists, from any number of threads.
///
/// ## Rules
///
/// Arguments are processed left to right, skipping the first (program
/// name) entry:
/// * Everything following `--` is positional, and the `--` itself is dropped;
/// * Arguments matching a declared spelling are recorded as an [`Occurrence`] of its option;
/// * Arguments beginning with `-` or `--` and an ASCII alphanumeric that _don't_ match are an error;
/// * Everything else is positional;
///
/// Flags taking values consume the arguments that follow them, but never
/// another declared flag. If a required value runs into one (or runs off
/// the end), an error is returned; an optional value is simply left empty.
///
/// A `--` following a flag still waiting on a value does not cancel the
/// wait; the next argument, whatever it looks like, becomes the value. This
/// is useful for passing values like `-`.
///
/// Long flags taking a single value also accept the `--key=val` shorthand.
///
/// ## Examples
///
/// ```
/// use argot::{Flag, Parser};
///
/// let parser = Parser::new(vec![
///     Flag::switch("help", ["-h", "--help"], "Print help."),
///     Flag::option("delim", ["-d", "--delim"], "Delimiter (default: ,)."),
///     Flag::option("num", ["-n", "--num"], "A number."),
/// ]).unwrap();
///
/// let args = parser.parse([
///     "test", "3.141", "foo", "-h", "bar", "300", "-n", "100", "-d", "--", "-",
/// ]).unwrap();
///
/// assert!(args.has_option("help"));
/// assert_eq!(args.option("delim").as_value_or(",".to_owned()).unwrap(), "-");
/// assert_eq!(args.option("num").as_value::<i32>().unwrap(), 100);
/// assert_eq!(args.as_value::<f64>(0).unwrap().to_string(), "3.141");
/// assert_eq!(args.as_value::<i32>(3).unwrap(), 300);
/// ```
pub struct Parser {
	/// # Definitions.
	flags: Vec<Flag>,

	/// # Spelling Index.
	index: FlagIndex,
}

impl Parser {
	/// # New.
	///
	/// ## Errors
	///
	/// This will return an error if any spelling is declared more than once,
	/// or if the flag stop (`--`) is declared as a spelling.
	pub fn new(flags: Vec<Flag>) -> Result<Self, ArgotError> {
		let index = FlagIndex::new(&flags)?;
		Ok(Self { flags, index })
	}

	#[must_use]
	/// # Definitions.
	pub fn flags(&self) -> &[Flag] { &self.flags }

	#[must_use]
	/// # Index.
	pub const fn index(&self) -> &FlagIndex { &self.index }
}

impl Parser {
	/// # Parse.
	///
	/// Parse an argument list. The first entry is assumed to be the program
	/// name and is ignored.
	///
	/// ## Errors
	///
	/// This will return an error if an unknown flag is encountered or a flag
	/// is missing a required value. Nothing is returned in either case.
	pub fn parse<I, S>(&self, args: I) -> Result<ParseResult, ArgotError>
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let mut scan = Scanner::new(self);
		for (slot, arg) in args.into_iter().enumerate().skip(1) {
			scan.push(slot, arg.as_ref())?;
		}
		scan.finish()
	}

	/// # Parse OS Strings.
	///
	/// Same as [`Parser::parse`], but for raw [`OsString`]s. Every argument
	/// must be valid UTF-8, including the program name.
	///
	/// ## Errors
	///
	/// In addition to the errors [`Parser::parse`] can return, this will
	/// fail if any argument is not valid UTF-8.
	pub fn parse_os<I>(&self, args: I) -> Result<ParseResult, ArgotError>
	where I: IntoIterator<Item=OsString> {
		let args = args.into_iter()
			.map(|a| a.into_string().map_err(|e|
				ArgotError::InvalidUtf8(e.to_string_lossy().into_owned())
			))
			.collect::<Result<Vec<String>, ArgotError>>()?;
		self.parse(args)
	}

	/// # Parse Environment.
	///
	/// Parse [`std::env::args_os`].
	///
	/// ## Errors
	///
	/// See [`Parser::parse_os`].
	pub fn parse_env(&self) -> Result<ParseResult, ArgotError> {
		self.parse_os(std::env::args_os())
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Scanner State.
enum State {
	/// # Looking for Flags.
	Scanning,

	/// # Past the Flag Stop.
	Stopped,
}



#[derive(Debug, Clone, Copy)]
/// # Pending Values.
///
/// A flag still waiting on one or more values.
struct Pending {
	/// # Definition Position.
	pos: usize,

	/// # Values Still Needed.
	remaining: usize,

	/// # Optional?
	optional: bool,
}



/// # Scanner.
///
/// This holds the working state for a single parse. It is fed one argument
/// at a time and handed over to a [`ParseResult`] at the end.
struct Scanner<'a> {
	/// # Parser.
	parser: &'a Parser,

	/// # State.
	state: State,

	/// # Options.
	options: BTreeMap<String, Vec<Occurrence>>,

	/// # Positional Arguments.
	pos: Vec<String>,

	/// # Pending Values.
	pending: Option<Pending>,
}

impl<'a> Scanner<'a> {
	/// # New.
	const fn new(parser: &'a Parser) -> Self {
		Self {
			parser,
			state: State::Scanning,
			options: BTreeMap::new(),
			pos: Vec::new(),
			pending: None,
		}
	}

	/// # Push Argument.
	fn push(&mut self, slot: usize, arg: &str) -> Result<(), ArgotError> {
		// The stop is only meaningful once.
		if self.state == State::Scanning && arg == FLAG_STOP {
			tracing::trace!(slot, "flag stop");
			self.state = State::Stopped;
			return Ok(());
		}

		if self.state == State::Stopped {
			if self.pending.is_some() { self.push_value(slot, arg); }
			else {
				tracing::trace!(slot, arg, "positional (stopped)");
				self.pos.push(arg.to_owned());
			}
			return Ok(());
		}

		// Is this a flag?
		if let Some(hit) = self.parser.index.find(arg) {
			self.close_pending()?;

			let flag = &self.parser.flags[hit.pos];
			let list = self.options.entry(flag.id().to_owned()).or_default();
			let key = hit.inline.map_or(arg, |v| &arg[..arg.len() - v.len() - 1]);
			let mut occ = Occurrence::new(flag.id(), key, slot, list.len());
			tracing::trace!(slot, arg, option = flag.id(), "flag");

			// Inline values satisfy the (single) value immediately.
			if let Some(v) = hit.inline { occ.push(slot, v.to_owned()); }
			else {
				self.pending = match hit.arity {
					Arity::None | Arity::Count(0) => None,
					Arity::Count(n) => Some(Pending { pos: hit.pos, remaining: n, optional: false }),
					Arity::Optional => Some(Pending { pos: hit.pos, remaining: 1, optional: true }),
				};
			}

			list.push(occ);
			return Ok(());
		}

		// Values are next in line.
		if self.pending.is_some() {
			self.push_value(slot, arg);
			return Ok(());
		}

		// Unknown flags are a problem.
		if FlagKind::from(arg).is_flag() {
			return Err(ArgotError::UnexpectedOption(arg.to_owned()));
		}

		tracing::trace!(slot, arg, "positional");
		self.pos.push(arg.to_owned());
		Ok(())
	}

	/// # Push Value.
	///
	/// Add a value to the most recent occurrence of the pending option.
	fn push_value(&mut self, slot: usize, arg: &str) {
		let Some(mut p) = self.pending.take() else { return; };
		let flag = &self.parser.flags[p.pos];
		if let Some(occ) = self.options.get_mut(flag.id()).and_then(|v| v.last_mut()) {
			tracing::trace!(slot, arg, option = flag.id(), "value");
			occ.push(slot, arg.to_owned());
		}

		p.remaining -= 1;
		if 0 < p.remaining { self.pending = Some(p); }
	}

	/// # Close Pending.
	///
	/// Optional values can go without; required ones cannot.
	fn close_pending(&mut self) -> Result<(), ArgotError> {
		match self.pending.take() {
			Some(p) if ! p.optional => {
				let flag = &self.parser.flags[p.pos];
				let key = self.options.get(flag.id())
					.and_then(|v| v.last())
					.map_or_else(String::new, |o| o.flag().to_owned());
				Err(ArgotError::OptionLacksArgument {
					option: flag.id().to_owned(),
					flag: key,
				})
			},
			_ => Ok(()),
		}
	}

	/// # Finish.
	fn finish(mut self) -> Result<ParseResult, ArgotError> {
		self.close_pending()?;
		tracing::debug!(
			options = self.options.len(),
			positional = self.pos.len(),
			stopped = self.state == State::Stopped,
			"parsed arguments",
		);
		Ok(ParseResult::new(self.options, self.pos))
	}
}
