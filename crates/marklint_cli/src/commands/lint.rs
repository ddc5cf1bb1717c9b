//! Lint command implementation

use std::io::Read;
use std::path::{Path, PathBuf};

use marklint_core::file_finder::discover_files;
use marklint_core::{
    CacheManager, LintRecord, Linter, ResolvedConfig, STDIN_FILE_ID, fix_files, lint_files,
};
use miette::{IntoDiagnostic, Result};
use parking_lot::Mutex;
use tracing::{info, warn};

use crate::cli::{Cli, OutputFormat};
use crate::output::{Summary, output_records};

pub fn run_lint(
    cli: &Cli,
    paths: &[PathBuf],
    format: OutputFormat,
    fix: bool,
    stdin: bool,
) -> Result<bool> {
    let cwd = std::env::current_dir().into_diagnostic()?;
    let config = ResolvedConfig::load(cli.config.as_deref(), &cwd).into_diagnostic()?;

    if stdin {
        return run_stdin(&config, format, fix);
    }

    let (files, missing) = discover_files(paths, &config);

    if fix {
        let mut fixed = 0;
        for (path, outcome) in fix_files(&files, &config) {
            match outcome {
                Ok(outcome) if outcome.changed() => {
                    info!("Fixed {} ({})", path.display(), outcome.applied.join(", "));
                    fixed += 1;
                }
                Ok(_) => {}
                Err(e) => warn!("Failed to fix {}: {}", path.display(), e),
            }
        }
        info!("Fixed {} file(s)", fixed);
    }

    let cache_dir = config.base_dir().unwrap_or(cwd.as_path()).to_path_buf();
    let cache = Mutex::new(open_cache(&cache_dir, cli.no_cache));

    let (results, lint_failures) = lint_files(&files, &config, &cache);
    let failures: Vec<_> = missing.into_iter().chain(lint_failures).collect();

    let records: Vec<LintRecord> = results.iter().flat_map(|r| r.records()).collect();
    let summary = Summary {
        files: results.len(),
        cached: results.iter().filter(|r| r.from_cache).count(),
    };
    let has_errors = output_records(&records, format, summary)?;

    if !failures.is_empty() {
        for (path, error) in &failures {
            eprintln!("{}: {}", path.display(), error);
        }
        return Err(miette::miette!("{} file(s) failed to lint", failures.len()));
    }

    Ok(has_errors)
}

fn run_stdin(config: &ResolvedConfig, format: OutputFormat, fix: bool) -> Result<bool> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .into_diagnostic()?;

    let linter = Linter::from_config(&config.effective_options(Path::new(STDIN_FILE_ID)));

    if fix {
        let outcome = linter.fix(&source);
        print!("{}", outcome.output);
        let remaining = linter.lint(&outcome.output).into_diagnostic()?;
        return Ok(remaining
            .iter()
            .any(|v| v.severity == marklint_core::Severity::Error));
    }

    let violations = linter.lint(&source).into_diagnostic()?;
    let records = LintRecord::from_stdin(&violations);
    output_records(&records, format, Summary { files: 1, cached: 0 })
}

fn open_cache(dir: &Path, disabled: bool) -> CacheManager {
    let mut cache = CacheManager::new(dir);
    if disabled {
        cache.disable();
    }
    if let Err(e) = cache.load() {
        warn!("Failed to load cache: {}", e);
    }
    cache
}
