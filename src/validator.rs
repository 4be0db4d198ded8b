use super::*;

/// Checks language tags against BCP47 (RFC 5646) and the IANA subtag
/// registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
  /// Accept tags carrying a private-use (`x-`) section.
  pub allow_private_use: bool,
}

impl Validator {
  pub fn is_valid(&self, tag: &str) -> bool {
    let Ok(parsed) = language_tags::LanguageTag::parse(tag) else {
      return false;
    };

    if parsed.private_use().is_some() && !self.allow_private_use {
      return false;
    }

    parsed.validate().is_ok()
  }

  pub fn parse(&self, tag: &str) -> Option<LanguageTag> {
    self.is_valid(tag).then(|| LanguageTag::new(tag))
  }
}

/// Validates a tag with the default profile (private use rejected).
pub fn is_valid_bcp47(tag: &str) -> bool {
  Validator::default().is_valid(tag)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_common_tags() {
    for tag in ["en", "en-US", "fr-CA", "zh-Hant-TW", "es-419", "de-CH-1901"] {
      assert!(is_valid_bcp47(tag), "{tag} should be valid");
    }
  }

  #[test]
  fn accepts_registered_extensions() {
    assert!(is_valid_bcp47("de-DE-u-co-phonebk"));
  }

  #[test]
  fn rejects_malformed_tags() {
    for tag in ["", "ca-US1", "i-yolo", "en_US", "en US", "en-US-"] {
      assert!(!is_valid_bcp47(tag), "{tag} should be invalid");
    }
  }

  #[test]
  fn rejects_private_use_by_default() {
    assert!(!is_valid_bcp47("fr-x-million-made-man"));
    assert!(!is_valid_bcp47("en-US-x-twain"));
  }

  #[test]
  fn accepts_private_use_when_allowed() {
    let validator = Validator {
      allow_private_use: true,
    };

    assert!(validator.is_valid("fr-x-million-made-man"));
    assert!(validator.is_valid("en-US-x-twain"));
    assert!(!validator.is_valid("fr-x-waytoolongsubtag"));
  }

  #[test]
  fn rejects_repeated_variants() {
    assert!(is_valid_bcp47("sl-rozaj-biske"));
    assert!(!is_valid_bcp47("sl-rozaj-rozaj"));
    assert!(!is_valid_bcp47("de-1901-1901"));
  }

  #[test]
  fn parse_preserves_case() {
    assert_eq!(
      Validator::default().parse("en-GB").map(|tag| tag.to_string()),
      Some("en-GB".to_string())
    );
  }
}
