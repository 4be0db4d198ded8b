use {super::*, std::cmp::Ordering};

/// Which part of the document to scan for secondary languages and how to
/// present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryLanguageQuery {
  pub scope: Scope,
  pub sort_by_weight: bool,
  pub with_weights: bool,
}

impl SecondaryLanguageQuery {
  pub(crate) fn from_options(options: &AuditOptions) -> Self {
    Self {
      scope: Scope::Body,
      sort_by_weight: options.sort_by_weight,
      with_weights: options.with_weights,
    }
  }
}

pub struct SecondaryLanguagesStage;

impl Stage for SecondaryLanguagesStage {
  fn name(&self) -> &'static str {
    "secondary-languages"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let validator = context.validator();

    context.report.secondary_languages = enumerate_secondary_languages(
      context.document,
      SecondaryLanguageQuery::from_options(context.options),
      &validator,
      context.reporter,
    )?;

    Ok(())
  }
}

/// Lists the distinct valid `lang` values under the query scope in the order
/// they first appear, optionally weighted by the share of body text each one
/// covers.
pub fn enumerate_secondary_languages(
  document: &Document,
  query: SecondaryLanguageQuery,
  validator: &Validator,
  reporter: &mut dyn Reporter,
) -> Result<Vec<LanguageWeight>> {
  let mut languages: Vec<(LanguageTag, Vec<NodeId>)> = Vec::new();

  for node in document.select(query.scope, "[lang]")? {
    let Some(tag) = find_tag_for_element(document, node, validator, reporter)
    else {
      continue;
    };

    match languages.iter_mut().find(|(seen, _)| *seen == tag) {
      Some((_, nodes)) => nodes.push(node),
      None => languages.push((tag, vec![node])),
    }
  }

  let body = document.body_element().ok_or(Error::MissingElement("body"))?;

  let reference = if query.with_weights {
    Some(visible_text(body)).filter(|text| !text.is_empty())
  } else {
    None
  };

  if query.with_weights && reference.is_none() {
    reporter.report(Diagnostic::warning(
      "Can't compute language weights: BODY has no visible text.",
    ));
  }

  let mut weights = Vec::with_capacity(languages.len());

  for (tag, nodes) in languages {
    let ratio = match reference.as_deref() {
      Some(reference) => Some(share_of(document, body, &nodes, reference)?),
      None => None,
    };

    weights.push(LanguageWeight { tag, ratio });
  }

  if query.sort_by_weight && reference.is_some() {
    weights.sort_by(|a, b| {
      b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal)
    });
  }

  reporter.report(Diagnostic::info(format!(
    "Other languages found: {}",
    format_percentage(&weights)
  )));

  Ok(weights)
}

/// Body text covered by the outermost of `nodes`, so nested elements
/// carrying the same tag are not counted twice. An element enclosing
/// `<body>` covers all of it; one outside `<body>` covers none.
fn share_of(
  document: &Document,
  body: NodeRef<'_, Node>,
  nodes: &[NodeId],
  reference: &str,
) -> Result<f64> {
  let mut length = 0;

  for node in nodes {
    let node = document.get(*node).ok_or(Error::UnknownNode)?;

    if node.ancestors().any(|ancestor| nodes.contains(&ancestor.id())) {
      continue;
    }

    if node == body || body.ancestors().any(|ancestor| ancestor == node) {
      return weight_of_length(reference.chars().count(), reference);
    }

    if node.ancestors().any(|ancestor| ancestor == body) {
      length += visible_text(node).chars().count();
    }
  }

  weight_of_length(length, reference)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn enumerate(
    markup: &str,
    with_weights: bool,
    sort_by_weight: bool,
  ) -> (Vec<LanguageWeight>, Vec<Diagnostic>) {
    let document = Document::parse(markup);

    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let weights = enumerate_secondary_languages(
      &document,
      SecondaryLanguageQuery {
        scope: Scope::Body,
        sort_by_weight,
        with_weights,
      },
      &Validator::default(),
      &mut diagnostics,
    )
    .unwrap();

    (weights, diagnostics)
  }

  fn summary(diagnostics: &[Diagnostic]) -> &str {
    diagnostics.last().unwrap().message.as_str()
  }

  #[test]
  fn lists_valid_tags_in_first_seen_order() {
    let (weights, diagnostics) = enumerate(
      r#"<html lang="en"><body lang="en">
        <p lang="en">One</p>
        <p lang="ca">Two</p>
        <p lang="IT">Three</p>
        <p lang="es">Four</p>
        <p lang="it">Five</p>
        <p lang="fr-x-million-made-man">Six</p>
        <p lang="ca-US1">Seven</p>
        <p lang="i-yolo">Eight</p>
      </body></html>"#,
      false,
      false,
    );

    assert_eq!(
      weights
        .iter()
        .map(|weight| weight.tag.to_string())
        .collect::<Vec<_>>(),
      vec!["en", "ca", "IT", "es"]
    );

    assert_eq!(summary(&diagnostics), "Other languages found: en, ca, IT, es");

    assert_eq!(
      diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.severity == Severity::Error)
        .count(),
      3
    );
  }

  #[test]
  fn body_itself_is_not_scanned() {
    let (weights, diagnostics) = enumerate(
      r#"<html><body lang="fr"><p>Bonjour</p></body></html>"#,
      false,
      false,
    );

    assert!(weights.is_empty());
    assert_eq!(summary(&diagnostics), "Other languages found: ");
  }

  #[test]
  fn weights_are_reported_as_percentages() {
    let (weights, diagnostics) = enumerate(
      r#"<html><body><p lang="en">abcdefghij</p><p lang="de">abcde</p><p>abcde</p></body></html>"#,
      true,
      false,
    );

    assert_eq!(
      weights.iter().map(|weight| weight.ratio).collect::<Vec<_>>(),
      vec![Some(0.5), Some(0.25)]
    );

    assert_eq!(
      summary(&diagnostics),
      "Other languages found: en (50%), de (25%)"
    );
  }

  #[test]
  fn weights_can_be_sorted() {
    let (weights, _) = enumerate(
      r#"<html><body><p lang="de">abc</p><p lang="en">abcdefg</p><p lang="fr">abc</p></body></html>"#,
      true,
      true,
    );

    assert_eq!(
      weights
        .iter()
        .map(|weight| weight.tag.to_string())
        .collect::<Vec<_>>(),
      vec!["en", "de", "fr"]
    );
  }

  #[test]
  fn nested_elements_with_same_tag_count_once() {
    let (weights, _) = enumerate(
      r#"<html><body><div lang="en">abcd<span lang="en">efgh</span></div><p>ijkl</p></body></html>"#,
      true,
      false,
    );

    assert_eq!(weights[0].ratio, Some(0.667));
  }

  #[test]
  fn nested_foreign_text_counts_toward_both() {
    let (weights, _) = enumerate(
      r#"<html><body><div lang="en">abcd<span lang="fr">efgh</span></div></body></html>"#,
      true,
      false,
    );

    assert_eq!(
      weights.iter().map(|weight| weight.ratio).collect::<Vec<_>>(),
      vec![Some(1.0), Some(0.5)]
    );
  }

  #[test]
  fn weights_only_count_body_text() {
    let document = Document::parse(
      r#"<html lang="en"><head><title lang="fr">A long document title here</title></head><body><p lang="de">x</p><p>yy</p></body></html>"#,
    );

    let weights = enumerate_secondary_languages(
      &document,
      SecondaryLanguageQuery {
        scope: Scope::Document,
        sort_by_weight: false,
        with_weights: true,
      },
      &Validator::default(),
      &mut Vec::<Diagnostic>::new(),
    )
    .unwrap();

    assert_eq!(
      weights
        .iter()
        .map(|weight| (weight.tag.to_string(), weight.ratio))
        .collect::<Vec<_>>(),
      vec![
        ("en".to_string(), Some(1.0)),
        ("fr".to_string(), Some(0.0)),
        ("de".to_string(), Some(0.333)),
      ]
    );
  }

  #[test]
  fn empty_body_skips_weights() {
    let (weights, diagnostics) = enumerate(
      r#"<html><body><img lang="en" src="a.png"></body></html>"#,
      true,
      false,
    );

    assert_eq!(weights[0].ratio, None);
    assert_eq!(
      diagnostics
        .iter()
        .map(|diagnostic| diagnostic.message.as_str())
        .collect::<Vec<_>>(),
      vec![
        "Can't compute language weights: BODY has no visible text.",
        "Other languages found: en",
      ]
    );
  }
}
