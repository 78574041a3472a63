//! Testing and assertion macros

/// Asserts that the string representation of an expression matches a wildcard pattern.
///
/// Handy for paths and generated names whose exact value depends on the
/// environment or on random input.
///
/// # Example
/// ```
/// use blobcheck_core::assert_wildcard;
/// let name = "0f3a9c.bin";
/// assert_wildcard!(name, "*.bin");
/// ```
#[macro_export]
macro_rules! assert_wildcard {
	($expression:expr, $wildcard:expr) => {
		let expression = format!("{}", $expression);
		if !wildmatch::WildMatch::new($wildcard).matches(&expression) {
			panic!(
				"assertion failed: expression \"{expression:?}\" does not match wildcard \"{}\"",
				$wildcard
			)
		}
	};
}
