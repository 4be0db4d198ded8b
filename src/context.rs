use super::*;

pub(crate) struct Context<'a> {
  pub(crate) document: &'a mut Document,
  pub(crate) options: &'a AuditOptions,
  pub(crate) report: Report,
  pub(crate) reporter: &'a mut dyn Reporter,
}

impl<'a> Context<'a> {
  pub(crate) fn into_report(self) -> Report {
    self.report
  }

  pub(crate) fn new(
    document: &'a mut Document,
    options: &'a AuditOptions,
    reporter: &'a mut dyn Reporter,
  ) -> Self {
    Self {
      document,
      options,
      report: Report::default(),
      reporter,
    }
  }

  pub(crate) fn validator(&self) -> Validator {
    Validator {
      allow_private_use: self.options.allow_private_use,
    }
  }
}
