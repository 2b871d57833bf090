/*!
# Argot

This crate provides a small, single-pass CLI argument parser called
[`Parser`]. It sits between the standard library's barebones
[`std::env::args`] helper and full-service crates like
[clap](https://crates.io/crates/clap).

You declare your options upfront (their identifiers, spellings, help text,
and [`Arity`]) and [`Parser`] splits an argument list into option
occurrences and positional arguments in one left-to-right pass. It handles
repeated options, options interleaved with positional arguments, optional
values, and the end-of-command (`--`) separator.

What you _do_ with the results is up to you, although the [`ParseResult`]
accessors will happily convert values to any type implementing [`FromArg`]
along the way.

There are no subcommands, no mutually-exclusive groups, no validators. If
you need those, use [clap](https://crates.io/crates/clap) instead. Haha.



## Example

```
use argot::{Flag, Parser};
use std::path::PathBuf;

let parser = Parser::new(vec![
    Flag::switch("help", ["-h", "--help"], "Print help."),
    Flag::switch("verbose", ["-v", "--verbose"], "Be verbose."),
    Flag::option("threads", ["-j", "--threads"], "Number of threads."),
    Flag::optional("color", ["--color"], "Colorize output (auto|always|never)."),
]).expect("Flags are unique.");

let args = parser.parse([
    "app", "-v", "/foo/bar", "--threads", "4", "--color", "/bar/baz",
]).unwrap();

if args.has_option("help") {
    println!("Usage: app [OPTIONS] <PATH(S)>…\n\n{parser}");
    return;
}

let verbose = args.option("verbose").is_present();
let threads: usize = args.option("threads").as_value_or(1).unwrap();
let color: String = args.option("color").as_value_or("auto".to_owned()).unwrap();
let paths: Vec<PathBuf> = args.all_as().unwrap();

assert!(verbose);
assert_eq!(threads, 4);
assert_eq!(color, "/bar/baz");
assert_eq!(paths, [PathBuf::from("/foo/bar")]);
```

Note the `--color` above: optional values take whatever follows unless it
is another declared flag, so it is usually a good idea to use the
`--key=val` form for those.



## Logging

Parsing emits [`tracing`](https://crates.io/crates/tracing) events at the
`trace` and `debug` levels. Nothing is printed unless you install a
subscriber.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod convert;
mod error;
mod flag;
mod help;
mod index;
mod parser;
mod results;

pub use convert::{
	convert,
	FromArg,
	InvalidBool,
};
pub use error::ArgotError;
pub use flag::{
	Arity,
	Flag,
	FlagKind,
};
pub use index::FlagIndex;
pub use parser::{
	FLAG_STOP,
	Parser,
};
pub use results::{
	Occurrence,
	OptionResult,
	ParseResult,
};
