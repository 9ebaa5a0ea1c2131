use crate::store::FormStore;

/// Escape a string for embedding in a double-quoted HTML attribute.
///
/// Escapes `&`, `<`, `>`, `"`, `'` in that order; `&` must go first so the
/// later replacements are not double-escaped.
///
/// # Examples
///
/// ```
/// use formbind::escape_attribute;
///
/// let input = r#"a"b & <c>"#;
/// assert_eq!(escape_attribute(input), "a&quot;b &amp; &lt;c&gt;");
/// ```
pub fn escape_attribute(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

impl FormStore {
	/// Render an input as a `name="..." value="..."` attribute pair.
	///
	/// Both the name and the value are escaped; the caller decides the
	/// output sink. Undeclared names follow the permissive lookup policy
	/// and render an empty value.
	///
	/// # Examples
	///
	/// ```
	/// use formbind::FormStore;
	///
	/// let mut store = FormStore::new();
	/// store.declare_with_initial("q", r#"say "hi""#);
	///
	/// assert_eq!(
	///     store.render_name_value("q"),
	///     r#"name="q" value="say &quot;hi&quot;""#
	/// );
	/// ```
	pub fn render_name_value(&self, name: &str) -> String {
		format!(
			r#"name="{}" value="{}""#,
			escape_attribute(name),
			escape_attribute(self.get_or_default(name))
		)
	}

	/// Render an input as an attribute pair with the value coerced to an
	/// integer.
	///
	/// The value goes through [`get_int`](Self::get_int) and is embedded
	/// unescaped, since an integer never needs escaping. The name is still
	/// escaped.
	pub fn render_name_int_value(&self, name: &str) -> String {
		format!(
			r#"name="{}" value="{}""#,
			escape_attribute(name),
			self.get_int(name)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("plain", "plain")]
	#[case(r#"a"b"#, "a&quot;b")]
	#[case("<script>", "&lt;script&gt;")]
	#[case("a&b", "a&amp;b")]
	#[case("it's", "it&#x27;s")]
	fn test_escape_attribute(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_attribute(input), expected);
	}

	#[rstest]
	fn test_escape_attribute_does_not_double_escape_entities() {
		// '&' is escaped first, so pre-existing entities re-escape their
		// ampersand exactly once.
		assert_eq!(escape_attribute("&quot;"), "&amp;quot;");
	}

	#[rstest]
	fn test_render_name_value_escapes_value() {
		let mut store = FormStore::new();
		store.declare_with_initial("q", r#""><script>"#);

		insta::assert_snapshot!(
			store.render_name_value("q"),
			@r#"name="q" value="&quot;&gt;&lt;script&gt;""#
		);
	}

	#[rstest]
	fn test_render_name_value_escapes_name() {
		let mut store = FormStore::new();
		store.declare_with_initial(r#"q"x"#, "v");

		insta::assert_snapshot!(
			store.render_name_value(r#"q"x"#),
			@r#"name="q&quot;x" value="v""#
		);
	}

	#[rstest]
	fn test_render_name_value_undeclared_is_empty() {
		let store = FormStore::new();

		insta::assert_snapshot!(
			store.render_name_value("missing"),
			@r#"name="missing" value="""#
		);
	}

	#[rstest]
	fn test_render_name_int_value_coerces() {
		let mut store = FormStore::new();
		store.declare_with_initial("width", "42px");

		insta::assert_snapshot!(
			store.render_name_int_value("width"),
			@r#"name="width" value="42""#
		);
	}
}
