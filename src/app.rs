use crate::cli::Args;
use crate::classify::classify_entry;
use crate::config::Config;
use crate::git::{HistoryWalker, Repository};
use crate::parser::JavaParser;
use crate::report::ReportWriter;
use anyhow::{Context, Result};
use git2::Oid;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// One mining run: repository handle, parser, config and output path are
/// held together for the lifetime of the run.
pub struct App {
    repo: Repository,
    parser: JavaParser,
    config: Config,
    start: Oid,
    output: PathBuf,
    cancel: Arc<AtomicBool>,
}

impl App {
    pub fn new(args: Args) -> Result<Self> {
        Self::with_config(args, crate::config::load())
    }

    pub fn with_config(args: Args, config: Config) -> Result<Self> {
        // clap guarantees the positionals on the mining path
        let repo_path = args.repository.context("repository path is required")?;
        let commit = args.commit.context("commit is required")?;
        let output = args.output.context("output path is required")?;

        let repo = Repository::open(&repo_path)?;
        let start = repo
            .resolve_commit(&commit)
            .with_context(|| format!("could not resolve commit {commit}"))?;
        repo.checkout(start)
            .with_context(|| format!("could not check out {commit}"))?;

        Ok(Self {
            repo,
            parser: JavaParser::new(),
            config,
            start,
            output,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Shared flag that stops the walk between commit pairs when raised.
    /// Coarse-grained only: an in-flight pair always completes.
    #[allow(dead_code)]
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Walk the history and write the change table. Pairs are processed
    /// strictly sequentially; every record of a pair is written before
    /// the next pair's diff is computed.
    pub fn run(&self) -> Result<()> {
        let walker = HistoryWalker::new(&self.repo, self.start)?;
        let mut report = ReportWriter::create(&self.output)
            .with_context(|| format!("could not create {}", self.output.display()))?;

        let bar = if self.config.progress {
            ProgressBar::new(walker.pair_count() as u64)
        } else {
            ProgressBar::hidden()
        };

        for step in walker {
            if self.cancel.load(Ordering::Relaxed) {
                info!("cancelled, stopping before the next commit pair");
                break;
            }

            let step = step?;
            let commit_id = step.current.to_string();
            debug!(commit = %commit_id, entries = step.entries.len(), "classifying pair");

            for entry in &step.entries {
                trace!(
                    path = entry.display_path(),
                    kind = entry.kind.as_str(),
                    "file entry"
                );
                let changes = classify_entry(
                    &self.parser,
                    entry,
                    &self.config.source_extension,
                    || {
                        let path = entry.old_path.as_deref().unwrap_or_default();
                        self.repo.blob_content(step.previous, path)
                    },
                    || {
                        let path = entry.new_path.as_deref().unwrap_or_default();
                        self.repo.blob_content(step.current, path)
                    },
                )?;

                for change in changes {
                    report.record(&commit_id, &change.qualified_name, change.change)?;
                }
            }

            bar.inc(1);
        }

        bar.finish_and_clear();
        report.finish()?;
        Ok(())
    }
}
