#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOptions {
  pub allow_private_use: bool,
  pub check_hreflang: bool,
  pub default_locale: String,
  pub sort_by_weight: bool,
  pub visual_aid_stylesheet: Option<String>,
  pub with_weights: bool,
}

impl Default for AuditOptions {
  fn default() -> Self {
    Self {
      allow_private_use: false,
      check_hreflang: false,
      default_locale: "en-US".to_string(),
      sort_by_weight: false,
      visual_aid_stylesheet: None,
      with_weights: false,
    }
  }
}

impl AuditOptions {
  #[must_use]
  pub fn builder() -> AuditOptionsBuilder {
    AuditOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct AuditOptionsBuilder {
  inner: AuditOptions,
}

impl AuditOptionsBuilder {
  #[must_use]
  pub fn allow_private_use(self, allow_private_use: bool) -> Self {
    Self {
      inner: AuditOptions {
        allow_private_use,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> AuditOptions {
    self.inner
  }

  #[must_use]
  pub fn check_hreflang(self, check_hreflang: bool) -> Self {
    Self {
      inner: AuditOptions {
        check_hreflang,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn default_locale(self, default_locale: impl Into<String>) -> Self {
    Self {
      inner: AuditOptions {
        default_locale: default_locale.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn sort_by_weight(self, sort_by_weight: bool) -> Self {
    Self {
      inner: AuditOptions {
        sort_by_weight,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn visual_aid_stylesheet(
    self,
    visual_aid_stylesheet: Option<String>,
  ) -> Self {
    Self {
      inner: AuditOptions {
        visual_aid_stylesheet,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn with_weights(self, with_weights: bool) -> Self {
    Self {
      inner: AuditOptions {
        with_weights,
        ..self.inner
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builder_starts_from_defaults() {
    assert_eq!(AuditOptions::builder().build(), AuditOptions::default());
  }

  #[test]
  fn builder_overrides_only_named_fields() {
    let options = AuditOptions::builder()
      .with_weights(true)
      .default_locale("fr-CA")
      .build();

    assert!(options.with_weights);
    assert_eq!(options.default_locale, "fr-CA");
    assert!(!options.sort_by_weight);
    assert!(!options.allow_private_use);
  }
}
