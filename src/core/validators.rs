use regex::Regex;
use std::sync::LazyLock;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Fails when the value is blank after trimming.
pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Fails only on the empty string; whitespace counts as a value.
pub fn present(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn email(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if is_valid_email(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

/// Permissive `local@domain.tld` check on the trimmed value.
pub fn is_valid_email(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && EMAIL_PATTERN.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, present, required};
    use rstest::rstest;

    #[rstest]
    #[case("a@b.co", true)]
    #[case("  ada@example.org  ", true)]
    #[case("first.last+tag@sub.example.io", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("plainaddress", false)]
    #[case("a@bco", false)]
    #[case("a.b@co", false)]
    #[case("@b.co", false)]
    #[case("a@.co", false)]
    #[case("a@b.", false)]
    #[case("a b@c.de", false)]
    #[case("a@@b.co", false)]
    fn email_pattern(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(value), expected, "value: {value:?}");
    }

    #[test]
    fn required_trims_but_present_does_not() {
        assert!(required("x")(" \t").is_err());
        assert!(present("x")(" \t").is_ok());
        assert_eq!(present("missing")(""), Err("missing".to_string()));
    }
}
