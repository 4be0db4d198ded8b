use {
  context::Context,
  ego_tree::{NodeId, NodeRef, Tree},
  html5ever::{
    Attribute, LocalName, QualName, namespace_url, ns, tendril::StrTendril,
  },
  pipeline::Pipeline,
  scraper::{ElementRef, Html, Node, Selector, node::Element},
  serde::Serialize,
  stage::{
    HreflangStage, PrimaryLanguageStage, SecondaryLanguagesStage, Stage,
    XmlLangStage,
  },
  std::{
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
  },
  url::Url,
  weight::weight_of_length,
};

pub use crate::{
  attribute::{find_tag_for_element, find_tag_for_link, reconcile_xml_lang},
  diagnostic::{Diagnostic, Offender, Reporter, Severity, TracingReporter},
  document::{Document, ElementSnapshot, Scope},
  error::Error,
  lang_checker::LangChecker,
  language_tag::LanguageTag,
  options::{AuditOptions, AuditOptionsBuilder},
  report::Report,
  sanitize::{clean, sanitize, visible_text},
  stage::{
    SecondaryLanguageQuery, audit_xml_lang, enumerate_hreflangs,
    enumerate_secondary_languages, infer_primary_language,
  },
  validator::{Validator, is_valid_bcp47},
  visual_aid::VisualAid,
  weight::{LanguageWeight, compute_weight, format_percentage},
};

mod attribute;
mod context;
mod diagnostic;
mod document;
mod error;
mod lang_checker;
mod language_tag;
mod options;
mod pipeline;
mod report;
mod sanitize;
mod stage;
mod validator;
mod visual_aid;
mod weight;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
