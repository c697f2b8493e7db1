//! Rendering helpers

use std::borrow::Cow;

fn entity(c: char) -> Option<&'static str> {
	match c {
		'&' => Some("&amp;"),
		'<' => Some("&lt;"),
		'>' => Some("&gt;"),
		'"' => Some("&quot;"),
		'\'' => Some("&#x27;"),
		_ => None,
	}
}

/// Escape text for use in element content and quoted attribute values
///
/// Runs of safe characters are copied as slices; input with nothing to
/// escape is returned borrowed.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	let Some(first) = s.find(|c: char| entity(c).is_some()) else {
		return Cow::Borrowed(s);
	};

	let mut escaped = String::with_capacity(s.len() + 16);
	escaped.push_str(&s[..first]);
	let mut copied = first;
	for (index, c) in s[first..].char_indices().map(|(i, c)| (i + first, c)) {
		if let Some(replacement) = entity(c) {
			escaped.push_str(&s[copied..index]);
			escaped.push_str(replacement);
			copied = index + c.len_utf8();
		}
	}
	escaped.push_str(&s[copied..]);
	Cow::Owned(escaped)
}

/// Boolean attributes used by the auth forms.
pub const BOOLEAN_ATTRS: &[&str] = &["disabled", "hidden", "required", "selected"];

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("نام کاربری", "نام کاربری")]
	#[case("a & b", "a &amp; b")]
	#[case("<script>", "&lt;script&gt;")]
	#[case("\"x\" 'y'", "&quot;x&quot; &#x27;y&#x27;")]
	fn test_html_escape(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(html_escape(input), expected);
	}

	#[rstest]
	fn test_html_escape_borrows_clean_input() {
		assert!(matches!(html_escape("Crypton"), Cow::Borrowed(_)));
	}
}
