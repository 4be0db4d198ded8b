use super::*;

pub struct PrimaryLanguageStage;

impl Stage for PrimaryLanguageStage {
  fn name(&self) -> &'static str {
    "primary-language"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let validator = context.validator();

    context.report.primary_language = infer_primary_language(
      context.document,
      &validator,
      &context.options.default_locale,
      context.reporter,
    );

    Ok(())
  }
}

/// Decides which language applies to the whole document from the `lang` of
/// `<html>` and `<body>`. `<body>` wins when both are set.
pub fn infer_primary_language(
  document: &Document,
  validator: &Validator,
  default_locale: &str,
  reporter: &mut dyn Reporter,
) -> Option<LanguageTag> {
  let mut tag_of = |node: Option<NodeRef<'_, Node>>| {
    node.and_then(|node| {
      find_tag_for_element(document, node.id(), validator, &mut *reporter)
    })
  };

  let html = tag_of(document.html_element());
  let body = tag_of(document.body_element());

  match (html, body) {
    (Some(html), Some(body)) if html == body => {
      reporter.report(Diagnostic::info(format!("Main lang is '{html}'.")));
      Some(html)
    }
    (Some(html), Some(body)) => {
      reporter.report(Diagnostic::warning(format!(
        "HTML and BODY langs don't match. HTML is '{html}' while BODY is '{body}'. Main lang will be '{body}'."
      )));
      Some(body)
    }
    (Some(html), None) => {
      reporter.report(Diagnostic::info(format!("Main lang is '{html}'.")));
      Some(html)
    }
    (None, Some(body)) => {
      reporter.report(Diagnostic::warning(format!(
        "Main lang is '{body}' but only set on BODY. Elements such as <title> consequently don't inherit a specified lang and could inherit the navigator's default."
      )));
      Some(body)
    }
    (None, None) => {
      reporter.report(Diagnostic::warning(format!(
        "No lang is set, it will default to the navigator's: {default_locale}."
      )));
      None
    }
  }
}
