use super::*;

/// Copies `node` and its descendants without comments (including CDATA
/// sections and processing instructions the HTML parser turns into
/// comments) and without whitespace-only text.
pub fn clean(node: NodeRef<'_, Node>) -> Tree<Node> {
  rebuild(node, |child| match child.value() {
    Node::Comment(_) | Node::ProcessingInstruction(_) | Node::Doctype(_) => {
      false
    }
    Node::Text(text) => !text.trim().is_empty(),
    _ => true,
  })
}

/// Copies `node` and its descendants without `script` or `style` elements
/// and without the visual aid's own markup.
pub fn sanitize(node: NodeRef<'_, Node>) -> Tree<Node> {
  rebuild(node, |child| match child.value() {
    Node::Element(element) => {
      !matches!(element.name(), "script" | "style")
        && !element.id().is_some_and(VisualAid::owns_id)
    }
    _ => true,
  })
}

/// The text a reader actually sees inside `node`.
///
/// The source tree is never modified; the cleaned copies are dropped once
/// the text has been collected.
pub fn visible_text(node: NodeRef<'_, Node>) -> String {
  let cleaned = clean(node);

  let sanitized = sanitize(cleaned.root());

  sanitized
    .root()
    .descendants()
    .filter_map(|node| match node.value() {
      Node::Text(text) => Some(&**text),
      _ => None,
    })
    .collect()
}

fn rebuild<F>(node: NodeRef<'_, Node>, keep: F) -> Tree<Node>
where
  F: Fn(NodeRef<'_, Node>) -> bool,
{
  fn copy_children<F>(
    source: NodeRef<'_, Node>,
    target: &mut ego_tree::NodeMut<'_, Node>,
    keep: &F,
  ) where
    F: Fn(NodeRef<'_, Node>) -> bool,
  {
    for child in source.children().filter(|child| keep(*child)) {
      let mut copy = target.append(child.value().clone());
      copy_children(child, &mut copy, keep);
    }
  }

  let mut tree = Tree::new(node.value().clone());

  copy_children(node, &mut tree.root_mut(), &keep);

  tree
}
