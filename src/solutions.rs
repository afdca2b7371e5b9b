//! Read-only access to solution sources on disk.
//!
//! Layout: `<root>/<entry starting with NNNN>/NNNN[-k].<ext>`, where `NNNN` is
//! the zero-padded problem id and `-k` marks approach `k` (omitted for the
//! first approach). A problem counts as solved as soon as any entry under the
//! root starts with its padded id.

use std::path::{Path, PathBuf};

use crate::error::{SiteError, SiteResult};

/// Languages that get a tab on a problem page, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Cpp,
    Java,
    Python,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Cpp, Language::Java, Language::Python];

    /// Source file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Python => "py",
        }
    }

    /// Code fence info string.
    pub fn fence(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Python => "python",
        }
    }

    /// Tab label.
    pub fn tab(&self) -> &'static str {
        match self {
            Self::Cpp => "C++",
            Self::Java => "Java",
            Self::Python => "Python",
        }
    }
}

/// One solution file's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub language: Language,
    pub code: String,
}

/// Solution directory lookups keyed by padded problem id.
#[derive(Debug, Clone)]
pub struct SolutionStore {
    root: PathBuf,
}

impl SolutionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// First entry (by name) under the root whose name starts with `padded_id`.
    ///
    /// A missing root means nothing is solved yet.
    pub fn problem_dir(&self, padded_id: &str) -> SiteResult<Option<PathBuf>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SiteError::io(&self.root, e)),
        };
        let mut matches: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(padded_id))
            .map(|e| e.path())
            .collect();
        matches.sort();
        Ok(matches.into_iter().next())
    }

    pub fn is_solved(&self, padded_id: &str) -> SiteResult<bool> {
        Ok(self.problem_dir(padded_id)?.is_some())
    }

    /// Snippets for one approach (1-based), in [`Language::ALL`] order.
    pub fn snippets(
        &self,
        problem_dir: &Path,
        padded_id: &str,
        approach: usize,
    ) -> SiteResult<Vec<Snippet>> {
        let mut snippets = Vec::new();
        for language in Language::ALL {
            let path = snippet_path(problem_dir, padded_id, approach, language);
            if !path.is_file() {
                continue;
            }
            let code = std::fs::read_to_string(&path).map_err(|e| SiteError::io(&path, e))?;
            snippets.push(Snippet { language, code });
        }
        Ok(snippets)
    }
}

/// Conventional path of one snippet file.
pub fn snippet_path(
    problem_dir: &Path,
    padded_id: &str,
    approach: usize,
    language: Language,
) -> PathBuf {
    let suffix = if approach == 1 {
        String::new()
    } else {
        format!("-{approach}")
    };
    problem_dir.join(format!("{padded_id}{suffix}.{}", language.extension()))
}
