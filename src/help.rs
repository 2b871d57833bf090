/*!
# Argot: Help.

A bare-bones listing of the declared options, suitable for dropping into a
usage screen.
*/

use crate::Parser;
use std::fmt;



impl fmt::Display for Parser {
	/// # Help Listing.
	///
	/// Each option gets two lines: its spellings, indented four spaces, then
	/// its description, indented eight. Options without any spellings are
	/// left out since nobody could use them anyway.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::{Flag, Parser};
	///
	/// let parser = Parser::new(vec![
	///     Flag::switch("help", ["-h", "--help"], "Print help."),
	///     Flag::option("output", ["-o", "--output"], "Output file."),
	/// ]).unwrap();
	///
	/// assert_eq!(
	///     parser.to_string(),
	///     "    -h, --help\n        Print help.\n    -o, --output\n        Output file.\n",
	/// );
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for flag in self.flags().iter().filter(|x| ! x.flags().is_empty()) {
			writeln!(f, "    {flag}")?;
			writeln!(f, "        {}", flag.help())?;
		}
		Ok(())
	}
}
