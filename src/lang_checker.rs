use super::*;

/// Audits the language metadata of one parsed document.
pub struct LangChecker {
  base_url: Option<Url>,
  document: Document,
  options: AuditOptions,
}

impl LangChecker {
  pub fn audit(&mut self, reporter: &mut dyn Reporter) -> Result<Report> {
    let context = Context::new(&mut self.document, &self.options, reporter);

    let context = Pipeline::with_default_stages(context).run()?;

    Ok(context.into_report())
  }

  pub fn audit_xml_lang(&mut self, reporter: &mut dyn Reporter) -> Result {
    audit_xml_lang(&mut self.document, reporter)
  }

  pub fn document(&self) -> &Document {
    &self.document
  }

  pub fn enumerate_hreflangs(
    &self,
    scope: Scope,
    reporter: &mut dyn Reporter,
  ) -> Result<Vec<LanguageTag>> {
    enumerate_hreflangs(&self.document, scope, &self.validator(), reporter)
  }

  pub fn enumerate_secondary_languages(
    &self,
    query: SecondaryLanguageQuery,
    reporter: &mut dyn Reporter,
  ) -> Result<Vec<LanguageWeight>> {
    enumerate_secondary_languages(
      &self.document,
      query,
      &self.validator(),
      reporter,
    )
  }

  pub fn html(&self) -> String {
    self.document.html()
  }

  pub fn infer_primary_language(
    &self,
    reporter: &mut dyn Reporter,
  ) -> Option<LanguageTag> {
    infer_primary_language(
      &self.document,
      &self.validator(),
      &self.options.default_locale,
      reporter,
    )
  }

  /// Parses `html`. A custom visual aid stylesheet is resolved against
  /// `base_url` when one is given.
  pub fn new(
    html: &str,
    base_url: Option<&str>,
    options: AuditOptions,
  ) -> Result<Self> {
    let base_url = base_url.map(Url::parse).transpose()?;

    Ok(Self {
      base_url,
      document: Document::parse(html),
      options,
    })
  }

  pub fn visual_aid(&mut self) -> Result<VisualAid<'_>> {
    let stylesheet = match (&self.options.visual_aid_stylesheet, &self.base_url)
    {
      (Some(href), Some(base_url)) => Some(
        base_url
          .join(href)
          .map_err(|source| Error::InvalidStylesheetUrl {
            url: href.clone(),
            source,
          })?
          .to_string(),
      ),
      (stylesheet, _) => stylesheet.clone(),
    };

    Ok(VisualAid::new(&mut self.document, stylesheet))
  }

  fn validator(&self) -> Validator {
    Validator {
      allow_private_use: self.options.allow_private_use,
    }
  }
}
