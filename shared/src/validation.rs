use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Symbols a password may contain. At least one is required, and no symbol
/// outside this set is accepted.
pub const PASSWORD_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

// Exactly one "@" with non-whitespace on both sides and a "." in the domain part.
static EMAIL_PATTERN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern failed to compile"));

/// The inputs of the registration form. Each field has one fixed validation
/// rule and one wire name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
	FirstName,
	LastName,
	Email,
	Password,
}

impl Field {
	/// The name the field carries on the wire and in input element names.
	pub fn name(&self) -> &'static str {
		match self {
			Self::FirstName => "ad",
			Self::LastName => "soyad",
			Self::Email => "email",
			Self::Password => "password",
		}
	}

	pub fn is_valid(&self, value: &str) -> bool {
		match self {
			Self::FirstName | Self::LastName => name_is_valid(value),
			Self::Email => email_is_valid(value),
			Self::Password => password_is_valid(value),
		}
	}
}

pub fn name_is_valid(value: &str) -> bool {
	value.trim().chars().count() >= NAME_MIN_LENGTH
}

pub fn email_is_valid(value: &str) -> bool {
	EMAIL_PATTERN.is_match(value)
}

/// A password passes when it's long enough, stays within ASCII letters,
/// digits, and [`PASSWORD_SYMBOLS`], and contains at least one character of
/// each required kind.
pub fn password_is_valid(value: &str) -> bool {
	let mut length = 0;
	let mut has_lowercase = false;
	let mut has_uppercase = false;
	let mut has_digit = false;
	let mut has_symbol = false;

	for c in value.chars() {
		if c.is_ascii_lowercase() {
			has_lowercase = true;
		} else if c.is_ascii_uppercase() {
			has_uppercase = true;
		} else if c.is_ascii_digit() {
			has_digit = true;
		} else if PASSWORD_SYMBOLS.contains(&c) {
			has_symbol = true;
		} else {
			return false;
		}
		length += 1;
	}

	length >= PASSWORD_MIN_LENGTH && has_lowercase && has_uppercase && has_digit && has_symbol
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_names_are_rejected() {
		assert!(!name_is_valid(""));
		assert!(!name_is_valid("ab"));
		assert!(!name_is_valid("  ab  "));
	}

	#[test]
	fn names_of_three_or_more_trimmed_characters_are_accepted() {
		assert!(name_is_valid("abc"));
		assert!(name_is_valid("  abc  "));
		assert!(name_is_valid("a b")); // three characters after trimming
		assert!(name_is_valid("Çağla")); // counted by characters, not bytes
	}

	#[test]
	fn email_requires_one_at_sign_and_a_dotted_domain() {
		assert!(email_is_valid("a@b.co"));
		assert!(email_is_valid("first.last@example.com"));
		assert!(!email_is_valid("a@b"));
		assert!(!email_is_valid("a.com"));
		assert!(!email_is_valid("@b.com"));
		assert!(!email_is_valid("a@b@c.co"));
		assert!(!email_is_valid("a b@c.co"));
		assert!(!email_is_valid(""));
	}

	#[test]
	fn password_requires_all_character_kinds() {
		assert!(password_is_valid("Aa1!aaaa"));
		assert!(password_is_valid("G@2tUvWx"));
		assert!(!password_is_valid("aaaaaaaa")); // no uppercase, digit, or symbol
		assert!(!password_is_valid("AAAA1!AA")); // no lowercase
		assert!(!password_is_valid("Aaaa!aaa")); // no digit
		assert!(!password_is_valid("Aa1aaaaa")); // no symbol
	}

	#[test]
	fn password_requires_minimum_length() {
		assert!(!password_is_valid("Aa1!aaa")); // seven characters
		assert!(password_is_valid("Aa1!aaaa"));
	}

	#[test]
	fn password_rejects_characters_outside_the_allowed_set() {
		assert!(!password_is_valid("Aa1#aaaa"));
		assert!(!password_is_valid("Aa1! aaa"));
		assert!(!password_is_valid("Aa1!aaaü"));
	}

	#[test]
	fn fields_dispatch_to_their_own_rule() {
		assert!(Field::FirstName.is_valid("abc"));
		assert!(!Field::LastName.is_valid("ab"));
		assert!(Field::Email.is_valid("a@b.co"));
		assert!(!Field::Email.is_valid("a@b"));
		assert!(Field::Password.is_valid("Aa1!aaaa"));
		assert!(!Field::Password.is_valid("aaaaaaaa"));
	}

	#[test]
	fn field_names_match_the_wire_keys() {
		assert_eq!(Field::FirstName.name(), "ad");
		assert_eq!(Field::LastName.name(), "soyad");
		assert_eq!(Field::Email.name(), "email");
		assert_eq!(Field::Password.name(), "password");
	}
}
