use {super::*, scraper::node::Text};

const DEFAULT_STYLES: &str = r#"
*[lang] {
  box-sizing: border-box;
  border: 1px solid crimson;
  padding: 5px;
  position: relative;
}
*[lang]::before {
  content: attr(lang);
  display: inline-block;
  font-family: sans-serif;
  font-weight: bold;
  background-color: crimson;
  color: white;
  padding: 5px 10px;
  margin-right: 10px;
  position: relative;
  top: -5px;
  left: -5px;
}
"#;

const INPUT_ID: &str = "langChecker-aid-input";

const LABEL_ID: &str = "langChecker-aid-label";

const LABEL_STYLE: &str =
  "position: fixed; top: 10px; right: 10px; z-index: 10; font-family: sans-serif;";

const STYLESHEET_ID: &str = "langChecker-visual-aid";

/// A checkbox in the page that outlines every `[lang]` element when ticked.
pub struct VisualAid<'a> {
  document: &'a mut Document,
  stylesheet: Option<String>,
}

impl<'a> VisualAid<'a> {
  fn create_element(tag: &str, attributes: &[(&str, &str)]) -> Node {
    Node::Element(Element::new(
      QualName::new(None, ns!(html), LocalName::from(tag)),
      attributes
        .iter()
        .map(|(name, value)| Attribute {
          name: QualName::new(None, ns!(), LocalName::from(*name)),
          value: StrTendril::from(*value),
        })
        .collect(),
    ))
  }

  fn create_text(text: &str) -> Node {
    Node::Text(Text {
      text: StrTendril::from(text),
    })
  }

  fn find(&self, id: &str) -> Option<NodeId> {
    self
      .document
      .elements()
      .find(|node| {
        node
          .value()
          .as_element()
          .is_some_and(|element| element.id() == Some(id))
      })
      .map(|node| node.id())
  }

  /// Inserts the label and checkbox as the first child of `<body>`.
  pub fn install(&mut self) -> Result {
    if self.is_installed() {
      return Ok(());
    }

    let body = self
      .document
      .body_element()
      .ok_or(Error::MissingElement("body"))?
      .id();

    let mut body = self
      .document
      .tree_mut()
      .get_mut(body)
      .ok_or(Error::UnknownNode)?;

    let mut label = body.prepend(Self::create_element(
      "label",
      &[("id", LABEL_ID), ("style", LABEL_STYLE)],
    ));

    label.append(Self::create_element(
      "input",
      &[("type", "checkbox"), ("id", INPUT_ID), ("name", INPUT_ID)],
    ));

    label.append(Self::create_text("\nEnable visual aid"));

    Ok(())
  }

  pub fn is_enabled(&self) -> bool {
    self.find(STYLESHEET_ID).is_some()
  }

  pub fn is_installed(&self) -> bool {
    self.find(LABEL_ID).is_some()
  }

  pub fn new(document: &'a mut Document, stylesheet: Option<String>) -> Self {
    Self {
      document,
      stylesheet,
    }
  }

  /// Whether an element id belongs to the visual aid's own markup.
  pub fn owns_id(id: &str) -> bool {
    matches!(id, INPUT_ID | LABEL_ID | STYLESHEET_ID)
  }

  /// Reacts to the checkbox changing state by adding or removing the
  /// stylesheet.
  pub fn set_enabled(&mut self, enabled: bool) -> Result {
    if enabled == self.is_enabled() {
      return Ok(());
    }

    if enabled {
      self.add_stylesheet()?;
    } else if let Some(stylesheet) = self.find(STYLESHEET_ID) {
      self.document.remove(stylesheet)?;
    }

    if let Some(input) = self.find(INPUT_ID) {
      if enabled {
        self.document.set_attr(input, "checked", "")?;
      } else {
        self.document.remove_attr(input, "checked")?;
      }
    }

    tracing::debug!(enabled, "toggled visual aid");

    Ok(())
  }

  fn add_stylesheet(&mut self) -> Result {
    let head = self
      .document
      .head_element()
      .ok_or(Error::MissingElement("head"))?
      .id();

    let stylesheet = self.stylesheet.clone();

    let mut head = self
      .document
      .tree_mut()
      .get_mut(head)
      .ok_or(Error::UnknownNode)?;

    match stylesheet {
      Some(href) => {
        head.append(Self::create_element(
          "link",
          &[
            ("type", "text/css"),
            ("id", STYLESHEET_ID),
            ("href", href.as_str()),
            ("rel", "stylesheet"),
          ],
        ));
      }
      None => {
        head
          .append(Self::create_element(
            "style",
            &[("type", "text/css"), ("id", STYLESHEET_ID)],
          ))
          .append(Self::create_text(DEFAULT_STYLES));
      }
    }

    Ok(())
  }
}
