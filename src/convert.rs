/*!
# Argot: Conversions.

Raw arguments are kept as strings until somebody asks for something more
specific. The [`FromArg`] trait handles the "something more specific" part;
implementations are provided for the usual primitives, and downstream crates
can implement it for their own types.
*/

use crate::ArgotError;
use std::{
	ffi::OsString,
	fmt,
	num::{
		NonZeroI8,
		NonZeroI16,
		NonZeroI32,
		NonZeroI64,
		NonZeroI128,
		NonZeroIsize,
		NonZeroU8,
		NonZeroU16,
		NonZeroU32,
		NonZeroU64,
		NonZeroU128,
		NonZeroUsize,
	},
	path::PathBuf,
};



/// # From Argument.
///
/// Convert a raw argument string into `Self`.
///
/// The accessors on [`Occurrence`](crate::Occurrence),
/// [`OptionResult`](crate::OptionResult), and
/// [`ParseResult`](crate::ParseResult) pick the implementation based on the
/// type asked for; the shape of the string itself plays no part.
///
/// Numeric implementations require the _entire_ string to be a valid literal
/// for the type; trailing garbage is an error, not a truncation.
///
/// ## Examples
///
/// ```
/// use argot::FromArg;
///
/// #[derive(Debug, Eq, PartialEq)]
/// struct Words(Vec<String>);
///
/// impl FromArg for Words {
///     type Err = std::convert::Infallible;
///
///     fn from_arg(raw: &str) -> Result<Self, Self::Err> {
///         if raw.is_empty() { Ok(Self(Vec::new())) }
///         else { Ok(Self(raw.split(',').map(String::from).collect())) }
///     }
/// }
///
/// assert_eq!(
///     argot::convert::<Words>("a,b,c").unwrap(),
///     Words(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]),
/// );
/// ```
pub trait FromArg: Sized {
	/// # Error Type.
	type Err: fmt::Display;

	/// # From Argument.
	///
	/// ## Errors
	///
	/// Return an error if `raw` cannot be represented as `Self`.
	fn from_arg(raw: &str) -> Result<Self, Self::Err>;
}

/// # Helper: Delegate to `FromStr`.
macro_rules! from_str {
	($($ty:ty),+ $(,)?) => ($(
		impl FromArg for $ty {
			type Err = <$ty as std::str::FromStr>::Err;

			#[inline]
			fn from_arg(raw: &str) -> Result<Self, Self::Err> { raw.parse() }
		}
	)+);
}

from_str!(
	u8, u16, u32, u64, u128, usize,
	i8, i16, i32, i64, i128, isize,
	f32, f64,
	char,
	NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
	NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
);

impl FromArg for String {
	type Err = std::convert::Infallible;

	#[inline]
	fn from_arg(raw: &str) -> Result<Self, Self::Err> { Ok(raw.to_owned()) }
}

impl FromArg for PathBuf {
	type Err = std::convert::Infallible;

	#[inline]
	fn from_arg(raw: &str) -> Result<Self, Self::Err> { Ok(Self::from(raw)) }
}

impl FromArg for OsString {
	type Err = std::convert::Infallible;

	#[inline]
	fn from_arg(raw: &str) -> Result<Self, Self::Err> { Ok(Self::from(raw)) }
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Invalid Boolean.
pub struct InvalidBool;

impl fmt::Display for InvalidBool {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("expected one of true/false, yes/no, on/off, 1/0")
	}
}

impl FromArg for bool {
	type Err = InvalidBool;

	fn from_arg(raw: &str) -> Result<Self, Self::Err> {
		for (t, f) in [("true", "false"), ("yes", "no"), ("on", "off"), ("1", "0")] {
			if raw.eq_ignore_ascii_case(t) { return Ok(true); }
			if raw.eq_ignore_ascii_case(f) { return Ok(false); }
		}
		Err(InvalidBool)
	}
}



/// # Convert.
///
/// Convert a raw argument to `T` using its [`FromArg`] implementation,
/// wrapping any failure in an [`ArgotError::ConversionFailed`] with the raw
/// value and target type name.
///
/// ## Examples
///
/// ```
/// assert_eq!(argot::convert::<i32>("100"), Ok(100));
/// assert!(argot::convert::<i32>("100abc").is_err());
/// ```
///
/// ## Errors
///
/// This will return an error if the conversion fails.
pub fn convert<T: FromArg>(raw: &str) -> Result<T, ArgotError> {
	T::from_arg(raw).map_err(|e| ArgotError::ConversionFailed {
		raw: raw.to_owned(),
		target: std::any::type_name::<T>(),
		reason: e.to_string(),
	})
}
