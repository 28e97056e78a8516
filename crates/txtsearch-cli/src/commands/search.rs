//! Search command - list or copy the files that contain any of the words.

use anyhow::Context;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use txtsearch_core::{copy_files, prepare_output_dir, search, OutputDirPolicy, SearchRequest};

/// Validated inputs for one run.
#[derive(Debug, Clone)]
pub struct SearchArgs {
    pub words: Vec<String>,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub case_sensitive: bool,
    pub output_policy: OutputDirPolicy,
}

/// Run the search command.
pub fn run(args: SearchArgs) -> anyhow::Result<()> {
    debug!(
        input = %args.input.display(),
        words = args.words.len(),
        case_sensitive = args.case_sensitive,
        "Starting search"
    );

    let request = SearchRequest::new(args.input, args.words, args.case_sensitive)?;
    let result = search(&request)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(
        out,
        "total: {}  match: {}",
        result.total_count,
        result.match_count()
    )?;

    match args.output {
        Some(dir) => {
            out.flush()?;
            prepare_output_dir(&dir, args.output_policy)?;
            let copied = copy_files(&result.matched_paths, &dir)
                .with_context(|| format!("copying matches to {}", dir.display()))?;
            writeln!(out, "copied {} matched files to {}", copied, dir.display())?;
        }
        None => {
            for path in result.matches() {
                writeln!(out, "{}", path.display())?;
            }
        }
    }

    Ok(())
}
