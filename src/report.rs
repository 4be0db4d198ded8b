use super::*;

/// What an audit found, alongside the diagnostics sent to the reporter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
  pub primary_language: Option<LanguageTag>,
  pub secondary_languages: Vec<LanguageWeight>,
  pub hreflangs: Vec<LanguageTag>,
}

impl Display for Report {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.primary_language {
      Some(tag) => writeln!(f, "primary language: {tag}")?,
      None => writeln!(f, "primary language: none")?,
    }

    writeln!(
      f,
      "secondary languages: {}",
      format_percentage(&self.secondary_languages)
    )?;

    write!(
      f,
      "hreflangs: {}",
      self
        .hreflangs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_one_line_per_finding() {
    let report = Report {
      primary_language: Some(LanguageTag::new("en")),
      secondary_languages: vec![
        LanguageWeight {
          tag: LanguageTag::new("de"),
          ratio: Some(0.438),
        },
        LanguageWeight {
          tag: LanguageTag::new("ca"),
          ratio: Some(0.375),
        },
      ],
      hreflangs: vec![LanguageTag::new("fr-ca")],
    };

    assert_eq!(
      report.to_string(),
      "primary language: en\nsecondary languages: de (43.8%), ca (37.5%)\nhreflangs: fr-ca"
    );
  }

  #[test]
  fn empty_report_says_none() {
    assert_eq!(
      Report::default().to_string(),
      "primary language: none\nsecondary languages: \nhreflangs: "
    );
  }
}
