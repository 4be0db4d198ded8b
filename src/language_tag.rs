use super::*;

/// A BCP47 language tag as written in the document.
///
/// The original casing is kept for display, while equality and hashing
/// ignore ASCII case so `en-GB` and `EN-gb` name the same language.
#[derive(Debug, Clone, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub(crate) fn new(tag: &str) -> Self {
    Self(tag.to_string())
  }

  #[must_use]
  pub fn to_lowercase(&self) -> Self {
    Self(self.0.to_ascii_lowercase())
  }
}

impl Display for LanguageTag {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl Hash for LanguageTag {
  fn hash<H: Hasher>(&self, state: &mut H) {
    for byte in self.0.bytes() {
      state.write_u8(byte.to_ascii_lowercase());
    }
  }
}

impl PartialEq for LanguageTag {
  fn eq(&self, other: &Self) -> bool {
    self.0.eq_ignore_ascii_case(&other.0)
  }
}

impl PartialEq<str> for LanguageTag {
  fn eq(&self, other: &str) -> bool {
    self.0.eq_ignore_ascii_case(other)
  }
}

impl PartialEq<&str> for LanguageTag {
  fn eq(&self, other: &&str) -> bool {
    self.0.eq_ignore_ascii_case(other)
  }
}
