use {
  anyhow::Context,
  arguments::Arguments,
  clap::{Parser, ValueEnum},
  lang_checker::{
    AuditOptions, Diagnostic, LangChecker, Report, Reporter, Severity,
    TracingReporter,
  },
  serde::Serialize,
  std::{fs, path::PathBuf, process},
  tracing_subscriber::EnvFilter,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn init_logging(verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    EnvFilter::new(if verbose {
      "lang_checker=debug"
    } else {
      "lang_checker=info"
    })
  });

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
}

fn main() {
  let arguments = Arguments::parse();

  init_logging(arguments.verbose);

  match arguments.run() {
    Ok(true) => process::exit(2),
    Ok(false) => {}
    Err(error) => {
      eprintln!("error: {error:#}");
      process::exit(1);
    }
  }
}
