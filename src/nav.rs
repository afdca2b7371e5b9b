//! MkDocs navigation: a `Problems` section appended to `mkdocs.yml`.

use std::io::Write;
use std::path::Path;

use crate::api::Catalog;
use crate::error::{SiteError, SiteResult};

/// The nav block for every catalog entry, in catalog order.
pub fn nav_block(catalog: &Catalog) -> String {
    let mut out = String::from("  - Problems:\n");
    for entry in &catalog.entries {
        out.push_str(&format!(
            "      - \"{}. {}\": problems/{}.md\n",
            entry.frontend_id,
            entry.title,
            entry.padded_id()
        ));
    }
    out
}

/// Append the nav block to the config file, creating it if needed.
pub fn append_nav(mkdocs_file: &Path, catalog: &Catalog) -> SiteResult<()> {
    let block = nav_block(catalog);
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(mkdocs_file)
        .map_err(|e| SiteError::io(mkdocs_file, e))?;
    file.write_all(block.as_bytes())
        .map_err(|e| SiteError::io(mkdocs_file, e))?;
    tracing::info!(
        path = %mkdocs_file.display(),
        entries = catalog.len(),
        "appended navigation"
    );
    Ok(())
}
