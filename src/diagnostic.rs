use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Info,
  Warning,
  Error,
}

/// The element a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offender {
  #[serde(skip)]
  pub node: NodeId,
  pub tag: String,
}

impl Display for Offender {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.tag)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
  pub severity: Severity,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub element: Option<Offender>,
}

impl Diagnostic {
  pub fn error(message: impl Into<String>) -> Self {
    Self::new(Severity::Error, message)
  }

  pub fn info(message: impl Into<String>) -> Self {
    Self::new(Severity::Info, message)
  }

  fn new(severity: Severity, message: impl Into<String>) -> Self {
    Self {
      severity,
      message: message.into(),
      element: None,
    }
  }

  pub fn warning(message: impl Into<String>) -> Self {
    Self::new(Severity::Warning, message)
  }

  #[must_use]
  pub fn with_element(self, element: Offender) -> Self {
    Self {
      element: Some(element),
      ..self
    }
  }
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.element {
      Some(element) => write!(f, "{} {element}", self.message),
      None => f.write_str(&self.message),
    }
  }
}

/// Receives the diagnostics produced while auditing a document.
pub trait Reporter {
  fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
  fn report(&mut self, diagnostic: Diagnostic) {
    self.push(diagnostic);
  }
}

/// Forwards diagnostics to `tracing` at the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
  fn report(&mut self, diagnostic: Diagnostic) {
    let element = diagnostic
      .element
      .as_ref()
      .map(|element| element.tag.as_str());

    match diagnostic.severity {
      Severity::Info => {
        tracing::info!(element, "{}", diagnostic.message);
      }
      Severity::Warning => {
        tracing::warn!(element, "{}", diagnostic.message);
      }
      Severity::Error => {
        tracing::error!(element, "{}", diagnostic.message);
      }
    }
  }
}
