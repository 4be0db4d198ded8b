use super::*;

const XML_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Reads and validates the `lang` attribute of an element.
pub fn find_tag_for_element(
  document: &Document,
  node: NodeId,
  validator: &Validator,
  reporter: &mut dyn Reporter,
) -> Option<LanguageTag> {
  find_tag(document, node, "lang", "element", validator, reporter)
}

/// Reads and validates the `hreflang` attribute of a link.
pub fn find_tag_for_link(
  document: &Document,
  node: NodeId,
  validator: &Validator,
  reporter: &mut dyn Reporter,
) -> Option<LanguageTag> {
  find_tag(document, node, "hreflang", "link", validator, reporter)
}

/// Checks `xml:lang` against `lang`, or copies `xml:lang` into a missing
/// `lang`.
pub fn reconcile_xml_lang(
  document: &mut Document,
  node: NodeId,
  reporter: &mut dyn Reporter,
) -> Result {
  let Some(snapshot) = document.snapshot(node) else {
    return Err(Error::UnknownNode);
  };

  let Some(xml_lang) = snapshot.xml_lang else {
    return Ok(());
  };

  let xml_lang = xml_lang.trim_matches(XML_WHITESPACE);

  match snapshot.lang {
    Some(lang) => {
      if !xml_lang.eq_ignore_ascii_case(&lang) {
        reporter.report(
          Diagnostic::error("Langs don't match for element:")
            .with_element(document.offender(node)),
        );
      }
    }
    None => {
      tracing::debug!(xml_lang, "copying xml:lang into lang");
      document.set_attr(node, "lang", xml_lang)?;
    }
  }

  Ok(())
}

fn find_tag(
  document: &Document,
  node: NodeId,
  attribute: &str,
  subject: &str,
  validator: &Validator,
  reporter: &mut dyn Reporter,
) -> Option<LanguageTag> {
  let value = document.attr(node, attribute).unwrap_or_default();

  if value.trim().is_empty() {
    reporter.report(
      Diagnostic::info(format!("There is no {attribute} attribute for:"))
        .with_element(document.offender(node)),
    );

    return None;
  }

  if value.chars().any(char::is_whitespace) {
    reporter.report(
      Diagnostic::error(format!(
        "There is a space in '{value}' therefore it isn't a valid BCP47 language tag for {subject}:"
      ))
      .with_element(document.offender(node)),
    );

    return None;
  }

  let tag = validator.parse(value);

  if tag.is_none() {
    reporter.report(
      Diagnostic::error(format!(
        "'{value}' isn't a valid BCP47 language tag for {subject}:"
      ))
      .with_element(document.offender(node)),
    );
  }

  tag
}
