use super::*;

/// Where a scan starts. The scope root itself is never part of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
  Body,
  Document,
  Element(NodeId),
}

/// The language attributes of one element, read in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSnapshot {
  pub node: NodeId,
  pub lang: Option<String>,
  pub xml_lang: Option<String>,
}

pub struct Document {
  html: Html,
}

impl Document {
  pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
    self
      .html
      .tree
      .get(node)?
      .value()
      .as_element()?
      .attr(name)
  }

  pub fn body_element(&self) -> Option<NodeRef<'_, Node>> {
    Self::child_element(self.html_element()?, "body")
  }

  fn child_element<'a>(
    parent: NodeRef<'a, Node>,
    name: &str,
  ) -> Option<NodeRef<'a, Node>> {
    parent.children().find(
      |child| matches!(child.value(), Node::Element(el) if el.name() == name),
    )
  }

  /// Every element of the document, in document order.
  pub fn elements(&self) -> impl Iterator<Item = NodeRef<'_, Node>> {
    self
      .html
      .tree
      .root()
      .descendants()
      .filter(|node| node.value().is_element())
  }

  pub fn get(&self, node: NodeId) -> Option<NodeRef<'_, Node>> {
    self.html.tree.get(node)
  }

  pub fn head_element(&self) -> Option<NodeRef<'_, Node>> {
    Self::child_element(self.html_element()?, "head")
  }

  pub fn html(&self) -> String {
    self.html.html()
  }

  pub fn html_element(&self) -> Option<NodeRef<'_, Node>> {
    Self::child_element(self.html.tree.root(), "html")
  }

  /// Renders the start tag of `node` for use in diagnostics.
  pub fn offender(&self, node: NodeId) -> Offender {
    let tag = self
      .html
      .tree
      .get(node)
      .and_then(|node| node.value().as_element())
      .map(Self::start_tag)
      .unwrap_or_default();

    Offender { node, tag }
  }

  pub fn parse(markup: &str) -> Self {
    Self {
      html: Html::parse_document(markup),
    }
  }

  pub fn remove(&mut self, node: NodeId) -> Result {
    self
      .html
      .tree
      .get_mut(node)
      .ok_or(Error::UnknownNode)?
      .detach();

    Ok(())
  }

  pub fn scope_root(&self, scope: Scope) -> Result<NodeRef<'_, Node>> {
    match scope {
      Scope::Body => self.body_element().ok_or(Error::MissingElement("body")),
      Scope::Document => Ok(self.html.tree.root()),
      Scope::Element(node) => self.get(node).ok_or(Error::UnknownNode),
    }
  }

  /// Elements under the scope root matching a CSS selector, in document
  /// order.
  pub fn select(&self, scope: Scope, selector: &str) -> Result<Vec<NodeId>> {
    let selector = Selector::parse(selector)
      .map_err(|_| Error::InvalidSelector(selector.to_string()))?;

    Ok(
      self
        .scope_root(scope)?
        .descendants()
        .skip(1)
        .filter(|node| {
          ElementRef::wrap(*node)
            .is_some_and(|element| selector.matches(&element))
        })
        .map(|node| node.id())
        .collect(),
    )
  }

  pub fn remove_attr(&mut self, node: NodeId, name: &str) -> Result {
    self.rewrite_attrs(node, name, None)
  }

  /// Sets an attribute, replacing any previous value.
  pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) -> Result {
    self.rewrite_attrs(node, name, Some(value))
  }

  pub fn snapshot(&self, node: NodeId) -> Option<ElementSnapshot> {
    let element = self.html.tree.get(node)?.value().as_element()?;

    Some(ElementSnapshot {
      node,
      lang: element.attr("lang").map(str::to_string),
      xml_lang: element.attr("xml:lang").map(str::to_string),
    })
  }

  pub(crate) fn tree_mut(&mut self) -> &mut Tree<Node> {
    &mut self.html.tree
  }

  fn attribute(name: &str, value: &str) -> Attribute {
    Attribute {
      name: QualName::new(None, ns!(), LocalName::from(name)),
      value: StrTendril::from(value),
    }
  }

  fn rewrite_attrs(
    &mut self,
    node: NodeId,
    name: &str,
    value: Option<&str>,
  ) -> Result {
    let mut node = self.html.tree.get_mut(node).ok_or(Error::UnknownNode)?;

    let Node::Element(element) = node.value() else {
      return Err(Error::UnknownNode);
    };

    let mut attributes = element
      .attrs()
      .filter(|(key, _)| *key != name)
      .map(|(key, value)| Self::attribute(key, value))
      .collect::<Vec<Attribute>>();

    if let Some(value) = value {
      attributes.push(Self::attribute(name, value));
    }

    *element = Element::new(element.name.clone(), attributes);

    Ok(())
  }

  fn start_tag(element: &Element) -> String {
    let mut tag = format!("<{}", element.name());

    for (name, value) in element.attrs() {
      tag.push_str(&format!(" {name}=\"{}\"", value.replace('"', "&quot;")));
    }

    tag.push('>');

    tag
  }
}
