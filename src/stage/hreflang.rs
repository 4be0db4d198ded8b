use super::*;

pub struct HreflangStage;

impl Stage for HreflangStage {
  fn name(&self) -> &'static str {
    "hreflang"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if !context.options.check_hreflang {
      return Ok(());
    }

    let validator = context.validator();

    context.report.hreflangs = enumerate_hreflangs(
      context.document,
      Scope::Document,
      &validator,
      context.reporter,
    )?;

    Ok(())
  }
}

/// Lists the distinct valid `hreflang` values of `<link>` and `<a>`
/// elements, lowercased, in the order they first appear.
pub fn enumerate_hreflangs(
  document: &Document,
  scope: Scope,
  validator: &Validator,
  reporter: &mut dyn Reporter,
) -> Result<Vec<LanguageTag>> {
  let mut hreflangs: Vec<LanguageTag> = Vec::new();

  for node in document.select(scope, "link[hreflang], a[hreflang]")? {
    let Some(tag) = find_tag_for_link(document, node, validator, reporter)
    else {
      continue;
    };

    if !hreflangs.contains(&tag) {
      hreflangs.push(tag.to_lowercase());
    }
  }

  reporter.report(Diagnostic::info(format!(
    "hreflangs found: {}",
    hreflangs
      .iter()
      .map(ToString::to_string)
      .collect::<Vec<String>>()
      .join(", ")
  )));

  Ok(hreflangs)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lists_distinct_hreflangs_lowercased() {
    let document = Document::parse(
      r#"<html><head>
        <link rel="alternate" hreflang="en-GB" href="/en-gb">
        <link rel="alternate" hreflang="fr " href="/fr">
      </head><body>
        <a hreflang="de" href="/de">Deutsch</a>
        <a hreflang="EN-gb" href="/en-gb">English</a>
        <a href="/nowhere">Plain</a>
      </body></html>"#,
    );

    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let hreflangs = enumerate_hreflangs(
      &document,
      Scope::Document,
      &Validator::default(),
      &mut diagnostics,
    )
    .unwrap();

    assert_eq!(
      hreflangs
        .iter()
        .map(|tag| tag.to_string())
        .collect::<Vec<_>>(),
      vec!["en-gb", "de"]
    );

    assert_eq!(
      diagnostics
        .iter()
        .map(|diagnostic| (diagnostic.severity, diagnostic.message.as_str()))
        .collect::<Vec<_>>(),
      vec![
        (
          Severity::Error,
          "There is a space in 'fr ' therefore it isn't a valid BCP47 language tag for link:"
        ),
        (Severity::Info, "hreflangs found: en-gb, de"),
      ]
    );
  }

  #[test]
  fn scope_limits_the_scan() {
    let document = Document::parse(
      r#"<html><head><link rel="alternate" hreflang="fr" href="/fr"></head>
      <body><a hreflang="de" href="/de">Deutsch</a></body></html>"#,
    );

    let hreflangs = enumerate_hreflangs(
      &document,
      Scope::Body,
      &Validator::default(),
      &mut Vec::<Diagnostic>::new(),
    )
    .unwrap();

    assert_eq!(hreflangs, vec![LanguageTag::new("de")]);
  }
}
