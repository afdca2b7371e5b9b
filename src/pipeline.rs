//! Documentation run: catalog → problem pages → navigation → README badges.
//!
//! The catalog and ledger are loaded once when the pipeline is built; each
//! stage then reads from them. Stages do not depend on each other's output,
//! but they always run in this order.

use crate::api::{Catalog, ProblemSource, lookup_slug};
use crate::config::DocsConfig;
use crate::error::{DocsResult, SiteError, SiteResult};
use crate::ledger::{Ledger, LedgerRow};
use crate::nav;
use crate::render::PageRenderer;
use crate::solutions::SolutionStore;
use crate::summary::{self, Progress};

/// Entries kept in smoke-test mode.
pub const SMOKE_LIMIT: usize = 2;

/// What a completed run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub catalog_entries: usize,
    pub pages_written: usize,
    pub solved: u32,
    pub num_total: u32,
}

/// One documentation run over a loaded catalog and ledger.
pub struct Pipeline<'a> {
    source: &'a dyn ProblemSource,
    config: &'a DocsConfig,
    catalog: Catalog,
    ledger: Ledger,
    store: SolutionStore,
}

impl<'a> Pipeline<'a> {
    /// Fetch the catalog and prepare a run. `smoke` keeps only the first
    /// [`SMOKE_LIMIT`] catalog entries and ledger rows.
    pub fn new(
        source: &'a dyn ProblemSource,
        config: &'a DocsConfig,
        mut ledger: Ledger,
        smoke: bool,
    ) -> DocsResult<Self> {
        let mut catalog = source.fetch_catalog()?;
        if smoke {
            catalog.truncate(SMOKE_LIMIT);
            ledger.truncate(SMOKE_LIMIT);
            tracing::info!(limit = SMOKE_LIMIT, "smoke mode: catalog truncated");
        }

        // Ledger rows are positional; they only line up with ids on a dense catalog.
        for (position, entry) in catalog.gaps().take(5) {
            tracing::warn!(
                position,
                frontend_id = entry.frontend_id,
                "catalog id does not match its position; ledger row lookup uses id - 1"
            );
        }

        Ok(Self {
            source,
            config,
            catalog,
            ledger,
            store: SolutionStore::new(&config.solutions_dir),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run every stage in order.
    pub fn run(&self) -> DocsResult<RunReport> {
        let pages_written = self.write_problems()?;
        self.write_navigation()?;
        let progress = self.write_summary()?;
        Ok(RunReport {
            catalog_entries: self.catalog.len(),
            pages_written,
            solved: progress.num_solved(),
            num_total: progress.num_total,
        })
    }

    /// Render one page per catalog entry. Returns the number of pages written.
    pub fn write_problems(&self) -> DocsResult<usize> {
        let problems_dir = &self.config.problems_dir;
        std::fs::create_dir_all(problems_dir).map_err(|e| SiteError::io(problems_dir, e))?;

        let renderer = PageRenderer::new(&self.store, problems_dir, &self.config.base_url);
        let empty = LedgerRow::default();
        let mut written = 0;

        for entry in &self.catalog.entries {
            let slug = lookup_slug(&entry.title_slug);
            if slug != entry.title_slug {
                tracing::debug!(from = %entry.title_slug, to = slug, "using renamed slug");
            }
            let question = self.source.fetch_question(slug)?;

            let position = (entry.frontend_id as usize).saturating_sub(1);
            let row = self.ledger.row(position).unwrap_or_else(|| {
                tracing::debug!(frontend_id = entry.frontend_id, "no ledger row");
                &empty
            });

            renderer.write(entry, &question, row)?;
            written += 1;
        }

        tracing::info!(pages = written, dir = %problems_dir.display(), "wrote problem pages");
        Ok(written)
    }

    /// Append the catalog's navigation block to the MkDocs config.
    pub fn write_navigation(&self) -> SiteResult<()> {
        nav::append_nav(&self.config.mkdocs_file, &self.catalog)
    }

    /// Recount solved problems and rewrite the README badges.
    pub fn write_summary(&self) -> SiteResult<Progress> {
        let progress = Progress::scan(&self.catalog, &self.store)?;
        summary::update_readme(&self.config.readme_file, &progress)?;
        Ok(progress)
    }
}
