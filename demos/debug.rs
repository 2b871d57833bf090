/*!
# Argot: Debug

This example parses whatever arguments are fed to it against a handful of
declared options and displays the results.

Try something like:
cargo run --example debug -- -v foo --output out.txt -n -n 3 -- --verbose
*/

use argot::{
	Arity,
	Flag,
	Parser,
};



fn main() {
	let parser = match Parser::new(vec![
		Flag::switch("help", ["-h", "--help"], "Print help."),
		Flag::switch("verbose", ["-v", "--verbose"], "Be verbose."),
		Flag::option("output", ["-o", "--output"], "Output file."),
		Flag::optional("number", ["-n", "--number"], "A number, maybe."),
		Flag::new("point", ["-p", "--point"], "X and Y coordinates.", Arity::Count(2)),
	]) {
		Ok(p) => p,
		Err(e) => {
			println!("\x1b[1;91mError:\x1b[0m {e}");
			std::process::exit(e.exit_code());
		},
	};

	let args = match parser.parse_env() {
		Ok(a) => a,
		Err(e) => {
			println!("\x1b[1;91mError:\x1b[0m {e}");
			std::process::exit(e.exit_code());
		},
	};

	if args.has_option("help") {
		println!("Usage: debug [OPTIONS] [ARGS]…\n\n{parser}");
		return;
	}

	println!("\x1b[2mOPTIONS:\x1b[0m");
	let mut any = false;
	for opt in args.options() {
		any = true;
		for occ in opt {
			println!(
				"  {} #{} ({} @ {}): {:?}",
				opt.id(),
				occ.index(),
				occ.flag(),
				occ.slot(),
				occ.values(),
			);
		}
	}
	if ! any { println!("  \x1b[91mNone\x1b[0m"); }

	println!("");
	println!("\x1b[2mPOSITIONAL:\x1b[0m");
	for (k, v) in args.positional().iter().enumerate() {
		println!("  {k}: {v}");
	}
	if args.count() == 0 { println!("  \x1b[91mNone\x1b[0m"); }

	println!("");
}
