use super::*;

pub struct XmlLangStage;

impl Stage for XmlLangStage {
  fn name(&self) -> &'static str {
    "xml-lang"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    audit_xml_lang(context.document, context.reporter)
  }
}

/// Reconciles `xml:lang` with `lang` on every element, in document order.
pub fn audit_xml_lang(
  document: &mut Document,
  reporter: &mut dyn Reporter,
) -> Result {
  let candidates = document
    .elements()
    .filter(|node| {
      node
        .value()
        .as_element()
        .is_some_and(|element| element.attr("xml:lang").is_some())
    })
    .map(|node| node.id())
    .collect::<Vec<NodeId>>();

  tracing::debug!(count = candidates.len(), "elements carrying xml:lang");

  for node in candidates {
    reconcile_xml_lang(document, node, reporter)?;
  }

  Ok(())
}
