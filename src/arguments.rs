use super::*;

const FALLBACK_LOCALE: &str = "en-US";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
  Json,
  #[default]
  Text,
}

#[derive(Serialize)]
struct Output<'a> {
  report: &'a Report,
  diagnostics: &'a [Diagnostic],
}

#[derive(Parser)]
#[command(name = "lang-checker")]
#[command(
  about = "Audit the language metadata of HTML and XHTML documents",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    help = "Accept private-use subtags such as `x-klingon`"
  )]
  allow_private_use: bool,
  #[arg(
    long,
    value_name = "PATH",
    help = "Write the document with the visual aid installed to PATH"
  )]
  annotate: Option<PathBuf>,
  #[arg(
    long,
    value_name = "URL",
    help = "Base URL used to resolve a relative --stylesheet"
  )]
  base_url: Option<String>,
  #[arg(long, value_enum, default_value_t = Format::Text)]
  format: Format,
  #[arg(
    long,
    requires = "annotate",
    help = "Enable the visual aid in the annotated document"
  )]
  highlight: bool,
  #[arg(long, help = "Also check `hreflang` on links and anchors")]
  hreflang: bool,
  #[arg(value_name = "FILE", help = "Path to the HTML file to audit")]
  input: PathBuf,
  #[arg(
    long,
    env = "LANG",
    value_name = "LOCALE",
    help = "Locale a browser would fall back to when no lang is set"
  )]
  locale: Option<String>,
  #[arg(long, help = "Sort secondary languages by weight")]
  sort: bool,
  #[arg(
    long,
    value_name = "URL",
    help = "Stylesheet linked by the visual aid instead of the inline styles"
  )]
  stylesheet: Option<String>,
  #[arg(short, long, help = "Log pipeline progress")]
  pub(crate) verbose: bool,
  #[arg(long, help = "Compute the weight of each secondary language")]
  weights: bool,
}

impl Arguments {
  fn options(&self) -> AuditOptions {
    AuditOptions::builder()
      .allow_private_use(self.allow_private_use)
      .check_hreflang(self.hreflang)
      .default_locale(normalize_locale(self.locale.as_deref()))
      .sort_by_weight(self.sort)
      .visual_aid_stylesheet(self.stylesheet.clone())
      .with_weights(self.weights)
      .build()
  }

  /// Audits the input and returns whether any error was reported.
  pub(crate) fn run(self) -> Result<bool> {
    let html = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let mut checker =
      LangChecker::new(&html, self.base_url.as_deref(), self.options())
        .context("failed to create language checker")?;

    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let report = checker
      .audit(&mut diagnostics)
      .context("failed to audit document")?;

    println!("{}", render(self.format, &report, &diagnostics)?);

    if let Some(path) = &self.annotate {
      let mut aid = checker
        .visual_aid()
        .context("failed to prepare visual aid")?;

      aid.install().context("failed to install visual aid")?;

      if self.highlight {
        aid.set_enabled(true).context("failed to enable visual aid")?;
      }

      fs::write(path, checker.html()).with_context(|| {
        format!("failed to write annotated document to `{}`", path.display())
      })?;
    }

    Ok(
      diagnostics
        .iter()
        .any(|diagnostic| diagnostic.severity == Severity::Error),
    )
  }
}

/// What goes to stdout. In text mode the diagnostics are replayed through
/// `tracing` and the report itself is printed regardless of the log filter.
fn render(
  format: Format,
  report: &Report,
  diagnostics: &[Diagnostic],
) -> Result<String> {
  match format {
    Format::Json => Ok(serde_json::to_string_pretty(&Output {
      report,
      diagnostics,
    })?),
    Format::Text => {
      let mut reporter = TracingReporter;

      for diagnostic in diagnostics {
        reporter.report(diagnostic.clone());
      }

      Ok(report.to_string())
    }
  }
}

/// Turns a POSIX locale such as `en_US.UTF-8` into a language tag.
fn normalize_locale(locale: Option<&str>) -> String {
  let Some(locale) = locale else {
    return FALLBACK_LOCALE.to_string();
  };

  let locale = locale
    .split(['.', '@'])
    .next()
    .unwrap_or_default()
    .trim();

  if locale.is_empty() || locale == "C" || locale == "POSIX" {
    return FALLBACK_LOCALE.to_string();
  }

  locale.replace('_', "-")
}
