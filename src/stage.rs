use super::*;

mod hreflang;
mod primary_language;
mod secondary_languages;
mod xml_lang;

pub use {
  hreflang::{HreflangStage, enumerate_hreflangs},
  primary_language::{PrimaryLanguageStage, infer_primary_language},
  secondary_languages::{
    SecondaryLanguageQuery, SecondaryLanguagesStage,
    enumerate_secondary_languages,
  },
  xml_lang::{XmlLangStage, audit_xml_lang},
};

pub(crate) trait Stage {
  fn name(&self) -> &'static str;

  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
