use super::*;

/// A language and the share of the reference text it covers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageWeight {
  pub tag: LanguageTag,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ratio: Option<f64>,
}

impl LanguageWeight {
  /// The ratio as a percentage with at most one decimal.
  pub fn percentage(&self) -> Option<f64> {
    self.ratio.map(|ratio| (ratio * 1000.0).round() / 10.0)
  }
}

impl Display for LanguageWeight {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.percentage() {
      Some(percentage) => write!(f, "{} ({percentage}%)", self.tag),
      None => write!(f, "{}", self.tag),
    }
  }
}

/// Share of `reference` covered by the visible text of `node`, rounded to
/// three decimals (half away from zero).
pub fn compute_weight(node: NodeRef<'_, Node>, reference: &str) -> Result<f64> {
  weight_of_length(visible_text(node).chars().count(), reference)
}

pub(crate) fn weight_of_length(length: usize, reference: &str) -> Result<f64> {
  let total = reference.chars().count();

  if total == 0 {
    return Err(Error::EmptyReferenceText);
  }

  Ok(round(length as f64 / total as f64))
}

/// Joins weights the way they are logged: `en (26.4%), ca (10%)`.
pub fn format_percentage(weights: &[LanguageWeight]) -> String {
  weights
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<String>>()
    .join(", ")
}

fn round(ratio: f64) -> f64 {
  (ratio * 1000.0).round() / 1000.0
}
