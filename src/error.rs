#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("cannot compute a weight against an empty reference text")]
  EmptyReferenceText,
  #[error("invalid base url: {source}")]
  InvalidBaseUrl {
    #[from]
    source: url::ParseError,
  },
  #[error("invalid stylesheet url `{url}`: {source}")]
  InvalidStylesheetUrl {
    url: String,
    source: url::ParseError,
  },
  #[error("invalid selector: {0}")]
  InvalidSelector(String),
  #[error("document has no <{0}> element")]
  MissingElement(&'static str),
  #[error("node does not belong to this document")]
  UnknownNode,
}
