use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use codespan_reporting::{
    diagnostic::{Diagnostic, Label, Severity},
    files::SimpleFiles,
    term::{
        self,
        termcolor::{ColorChoice, StandardStream},
    },
};
use dbcase::{
    check,
    mapping::{InvalidLine, MappingFile, Mismatch, ParseError},
    NameRewriter, NamingConvention,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(disable_help_subcommand = true)]
enum Args {
    /// Rewrite identifiers given as arguments, or read from stdin one per line.
    Rewrite(RewriteArgs),
    /// Check that every `Source = EXPECTED` line in the given files holds.
    Check(CheckArgs),
}

#[derive(clap::Args)]
struct RewriteArgs {
    names: Vec<String>,
    #[command(flatten)]
    opts: CommonOpts,
}

#[derive(clap::Args)]
struct CheckArgs {
    #[arg(required = true)]
    files: Vec<PathBuf>,
    #[command(flatten)]
    opts: CommonOpts,
}

#[derive(clap::Args)]
struct CommonOpts {
    /// Naming convention to rewrite to.
    #[arg(long, env = "DBCASE_CONVENTION", default_value = "upper-snake")]
    convention: Convention,
    /// Disable colored diagnostics.
    #[arg(long)]
    no_color: bool,
}

impl CommonOpts {
    fn convention(&self) -> NamingConvention {
        self.convention.into()
    }

    fn color_choice(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else {
            ColorChoice::Auto
        }
    }
}

#[derive(Copy, Clone, clap::ValueEnum)]
enum Convention {
    #[value(name = "none")]
    None,
    #[value(name = "upper-snake", aliases(["upper_snake", "UPPER_SNAKE_CASE"]))]
    UpperSnake,
    #[value(name = "snake", aliases(["snake_case"]))]
    Snake,
    #[value(name = "upper", aliases(["UPPERCASE"]))]
    Upper,
    #[value(name = "lower", aliases(["lowercase"]))]
    Lower,
}

impl From<Convention> for NamingConvention {
    fn from(convention: Convention) -> Self {
        match convention {
            Convention::None => NamingConvention::None,
            Convention::UpperSnake => NamingConvention::UpperSnakeCase,
            Convention::Snake => NamingConvention::SnakeCase,
            Convention::Upper => NamingConvention::UpperCase,
            Convention::Lower => NamingConvention::LowerCase,
        }
    }
}

type FileId = usize;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    match args {
        Args::Rewrite(args) => rewrite(args)?,
        Args::Check(args) => {
            let convention = args.opts.convention();
            tracing::info!(%convention, files = args.files.len(), "checking mapping files");
            Checker::new(convention, args.opts.color_choice()).check(&args.files)?;
        }
    }
    Ok(())
}

fn rewrite(args: RewriteArgs) -> Result<(), Box<dyn Error>> {
    let names = if args.names.is_empty() {
        tracing::debug!("reading identifiers from stdin");
        let lines = io::stdin()
            .lock()
            .lines()
            .filter(|line| !matches!(line, Ok(line) if line.trim().is_empty()))
            .collect::<io::Result<Vec<_>>>()?;
        if lines.is_empty() {
            return Ok(());
        }
        lines
    } else {
        args.names
    };

    let rewritten = match args.opts.convention().rewrite_all(&names) {
        Ok(rewritten) => rewritten,
        Err(err) => {
            let mut emitter = Emitter::new(args.opts.color_choice());
            emitter.emit(&SimpleFiles::new(), Diagnostic::error().with_message(err.to_string()))?;
            emitter.abort_if_errors();
            return Err(err.into());
        }
    };
    let stdout = &mut io::stdout().lock();
    for name in rewritten {
        writeln!(stdout, "{name}")?;
    }
    Ok(())
}

/// Writes diagnostics to stderr and remembers whether any were errors.
struct Emitter {
    writer: StandardStream,
    config: codespan_reporting::term::Config,
    has_errors: bool,
}

impl Emitter {
    fn new(color: ColorChoice) -> Self {
        Self {
            writer: StandardStream::stderr(color),
            config: codespan_reporting::term::Config::default(),
            has_errors: false,
        }
    }

    fn abort_if_errors(&self) {
        if self.has_errors {
            std::process::exit(1);
        }
    }

    fn emit(
        &mut self,
        files: &SimpleFiles<String, String>,
        diagnostic: Diagnostic<FileId>,
    ) -> Result<(), codespan_reporting::files::Error> {
        self.has_errors |= diagnostic.severity >= Severity::Error;
        term::emit(&mut self.writer.lock(), &self.config, files, &diagnostic)
    }
}

struct Checker {
    rewriter: Box<dyn NameRewriter + Send + Sync>,
    convention: NamingConvention,
    files: SimpleFiles<String, String>,
    emitter: Emitter,
}

impl Checker {
    fn new(convention: NamingConvention, color: ColorChoice) -> Self {
        Self {
            rewriter: convention.rewriter(),
            convention,
            files: SimpleFiles::new(),
            emitter: Emitter::new(color),
        }
    }

    fn check(&mut self, paths: &[PathBuf]) -> Result<(), Box<dyn Error>> {
        check::not_empty_slice(paths, "files")?;
        let mapping_files = paths
            .iter()
            .map(|path| MappingFile::read(path))
            .collect::<io::Result<Vec<_>>>()?;

        for file in &mapping_files {
            let file_id = self
                .files
                .add(file.path.display().to_string(), file.content().to_string());
            self.report_invalid_lines(file_id, file)?;
            self.report_mismatches(file_id, file)?;
        }
        self.abort_if_errors();

        tracing::info!(files = mapping_files.len(), "all mappings hold");
        Ok(())
    }

    fn report_invalid_lines(
        &mut self,
        file_id: FileId,
        file: &MappingFile,
    ) -> Result<(), codespan_reporting::files::Error> {
        for line in file.invalid() {
            let diagnostic = invalid_line_diagnostic(file_id, line);
            self.emit_diagnostic(diagnostic)?;
        }
        Ok(())
    }

    fn report_mismatches(
        &mut self,
        file_id: FileId,
        file: &MappingFile,
    ) -> Result<(), codespan_reporting::files::Error> {
        let diagnostics: Vec<_> = file
            .mismatches(&*self.rewriter)
            .map(|mismatch| mismatch_diagnostic(file_id, mismatch, self.convention))
            .collect();
        tracing::debug!(path = %file.path.display(), mismatches = diagnostics.len());
        for diagnostic in diagnostics {
            self.emit_diagnostic(diagnostic)?;
        }
        Ok(())
    }

    fn abort_if_errors(&self) {
        self.emitter.abort_if_errors();
    }

    fn emit_diagnostic(
        &mut self,
        diagnostic: Diagnostic<FileId>,
    ) -> Result<(), codespan_reporting::files::Error> {
        self.emitter.emit(&self.files, diagnostic)
    }
}

fn invalid_line_diagnostic(file_id: FileId, line: InvalidLine) -> Diagnostic<FileId> {
    let label = Label::primary(file_id, line.span.clone());
    match line.error {
        ParseError::Malformed => Diagnostic::error()
            .with_message(line.error.to_string())
            .with_labels(vec![label])
            .with_notes(vec![
                "line must map an identifier to its rewrite, e.g., `UserId1 = USER_ID_1`"
                    .to_string(),
            ]),
        ParseError::Duplicate { ref first } => Diagnostic::error()
            .with_message(line.error.to_string())
            .with_labels(vec![
                label,
                Label::secondary(file_id, first.clone()).with_message("first mapped here"),
            ]),
    }
}

fn mismatch_diagnostic(
    file_id: FileId,
    mismatch: Mismatch<'_>,
    convention: NamingConvention,
) -> Diagnostic<FileId> {
    let mapping = mismatch.mapping;
    Diagnostic::error()
        .with_message(format!(
            "`{}` doesn't rewrite to `{}` under {convention}",
            mapping.source, mapping.expected
        ))
        .with_labels(vec![
            Label::primary(file_id, mapping.expected_span())
                .with_message(format!("rewrites to `{}`", mismatch.actual)),
            Label::secondary(file_id, mapping.source_span()),
        ])
}
