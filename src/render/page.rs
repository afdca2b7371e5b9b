//! Problem page rendering.
//!
//! A page is a header (title, difficulty badge, tag badges) followed, for
//! solved problems only, by per-approach complexity blocks and tabbed code.

use std::path::{Path, PathBuf};

use crate::api::{CatalogEntry, Question};
use crate::error::{SiteError, SiteResult};
use crate::ledger::LedgerRow;
use crate::render::badges::{Sentiment, difficulty_badge, tag_badges};
use crate::solutions::{Snippet, SolutionStore};

/// Indent applied to every line inside a content tab.
const TAB_INDENT: &str = "    ";

/// `# [<number>. <title>](<link>)`, plus the sentiment token if any.
pub fn display_title(number: u32, title: &str, link: &str, sentiment: Option<Sentiment>) -> String {
    let mut line = format!("# [{number}. {title}]({link})");
    if let Some(s) = sentiment {
        line.push(' ');
        line.push_str(s.token());
    }
    line
}

/// Title, difficulty and tag lines, each followed by a blank line.
pub fn render_header(entry: &CatalogEntry, question: &Question, link: &str) -> String {
    let title = display_title(
        entry.frontend_id,
        &question.title,
        link,
        Sentiment::from_votes(question.likes, question.dislikes),
    );
    format!(
        "{title}\n\n{}\n\n{}\n\n",
        difficulty_badge(question.difficulty),
        tag_badges(&question.topic_tags).join(" ")
    )
}

/// Checked time/space lines followed by a blank line.
pub fn complexity_block(time: Option<&str>, space: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(t) = time {
        out.push_str(&format!("- [x] **Time:** {t}\n"));
    }
    if let Some(s) = space {
        out.push_str(&format!("- [x] **Space:** {s}\n"));
    }
    out.push('\n');
    out
}

/// One content tab per snippet, with the source indented into the tab.
pub fn code_tabs(snippets: &[Snippet]) -> String {
    let mut out = String::new();
    for snippet in snippets {
        out.push_str(&format!("=== \"{}\"\n\n", snippet.language.tab()));
        out.push_str(&format!("{TAB_INDENT}```{}\n", snippet.language.fence()));
        for line in snippet.code.split_inclusive('\n') {
            out.push_str(TAB_INDENT);
            out.push_str(line);
        }
        out.push('\n');
        out.push_str(&format!("{TAB_INDENT}```\n\n"));
    }
    out
}

/// Renders and writes problem pages.
pub struct PageRenderer<'a> {
    store: &'a SolutionStore,
    problems_dir: PathBuf,
    base_url: String,
}

impl<'a> PageRenderer<'a> {
    pub fn new(store: &'a SolutionStore, problems_dir: impl Into<PathBuf>, base_url: &str) -> Self {
        Self {
            store,
            problems_dir: problems_dir.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Problem link on the site, built from the catalog slug.
    pub fn problem_link(&self, entry: &CatalogEntry) -> String {
        format!("{}/problems/{}", self.base_url, entry.title_slug)
    }

    /// Output path for a problem's page.
    pub fn page_path(&self, entry: &CatalogEntry) -> PathBuf {
        self.problems_dir.join(format!("{}.md", entry.padded_id()))
    }

    /// Full page text. Unsolved problems get the header only.
    pub fn render(
        &self,
        entry: &CatalogEntry,
        question: &Question,
        row: &LedgerRow,
    ) -> SiteResult<String> {
        let mut page = render_header(entry, question, &self.problem_link(entry));

        let padded = entry.padded_id();
        let Some(dir) = self.store.problem_dir(&padded)? else {
            return Ok(page);
        };

        if row.has_multiple_approaches() {
            let approaches = row
                .approach_labels
                .iter()
                .zip(&row.time_complexities)
                .zip(&row.space_complexities);
            for (index, ((label, time), space)) in approaches.enumerate() {
                let approach = index + 1;
                page.push_str(&format!("## Approach {approach}: {label}\n\n"));
                page.push_str(&complexity_block(Some(time), Some(space)));
                page.push_str(&code_tabs(&self.store.snippets(&dir, &padded, approach)?));
            }
        } else {
            page.push_str(&complexity_block(
                row.time_complexities.first().map(String::as_str),
                row.space_complexities.first().map(String::as_str),
            ));
            page.push_str(&code_tabs(&self.store.snippets(&dir, &padded, 1)?));
        }

        Ok(page)
    }

    /// Render and overwrite the page file. Returns the written path.
    pub fn write(
        &self,
        entry: &CatalogEntry,
        question: &Question,
        row: &LedgerRow,
    ) -> SiteResult<PathBuf> {
        let page = self.render(entry, question, row)?;
        let path = self.page_path(entry);
        write_file(&path, &page)?;
        tracing::debug!(path = %path.display(), bytes = page.len(), "wrote problem page");
        Ok(path)
    }
}

fn write_file(path: &Path, contents: &str) -> SiteResult<()> {
    std::fs::write(path, contents).map_err(|e| SiteError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Difficulty;
    use crate::solutions::Language;

    fn entry() -> CatalogEntry {
        CatalogEntry {
            frontend_id: 1,
            title_slug: "two-sum".into(),
            title: "Two Sum".into(),
            difficulty: Difficulty::Easy,
        }
    }

    fn question(likes: u64, dislikes: u64) -> Question {
        Question {
            title: "Two Sum".into(),
            difficulty: Difficulty::Easy,
            likes,
            dislikes,
            topic_tags: vec!["Array".into(), "Unlisted".into()],
        }
    }

    #[test]
    fn title_with_and_without_sentiment() {
        assert_eq!(
            display_title(1, "Two Sum", "https://leetcode.com/problems/two-sum", None),
            "# [1. Two Sum](https://leetcode.com/problems/two-sum)"
        );
        assert_eq!(
            display_title(1, "Two Sum", "l", Some(Sentiment::Positive)),
            "# [1. Two Sum](l) :thumbsup:"
        );
    }

    #[test]
    fn header_layout() {
        let header = render_header(&entry(), &question(0, 0), "l");
        assert_eq!(
            header,
            "# [1. Two Sum](l)\n\n\
             ![](https://img.shields.io/badge/-Easy-00a690.svg?style=for-the-badge)\n\n\
             ![](https://img.shields.io/badge/-Array-1f6feb.svg?style=flat-square)\n\n"
        );
    }

    #[test]
    fn complexity_block_skips_missing_lines() {
        assert_eq!(
            complexity_block(Some("O(n)"), Some("O(1)")),
            "- [x] **Time:** O(n)\n- [x] **Space:** O(1)\n\n"
        );
        assert_eq!(complexity_block(None, None), "\n");
    }

    #[test]
    fn code_tabs_indent_every_line() {
        let snippets = vec![Snippet {
            language: Language::Python,
            code: "def f():\n    return 1\n\n".into(),
        }];
        assert_eq!(
            code_tabs(&snippets),
            "=== \"Python\"\n\n    ```python\n    def f():\n        return 1\n    \n\n    ```\n\n"
        );
    }

    #[test]
    fn code_tabs_without_trailing_newline() {
        let snippets = vec![Snippet {
            language: Language::Cpp,
            code: "int x;".into(),
        }];
        assert_eq!(
            code_tabs(&snippets),
            "=== \"C++\"\n\n    ```cpp\n    int x;\n    ```\n\n"
        );
    }

    #[test]
    fn unsolved_problem_renders_header_only() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = SolutionStore::new(tmp.path().join("solutions"));
        let renderer = PageRenderer::new(&store, tmp.path(), "https://leetcode.com/");
        let row = LedgerRow::from_cells("O(n)", "O(n)", "Hash map");

        let page = renderer.render(&entry(), &question(9, 1), &row).unwrap();
        assert!(page.starts_with(
            "# [1. Two Sum](https://leetcode.com/problems/two-sum) :thumbsup:\n\n"
        ));
        assert!(!page.contains("**Time:**"));
        assert!(!page.contains("==="));
    }

    #[test]
    fn single_approach_uses_first_entries() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("solutions/0001. Two Sum");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("0001.py"), "pass\n").unwrap();
        let store = SolutionStore::new(tmp.path().join("solutions"));
        let renderer = PageRenderer::new(&store, tmp.path(), "https://leetcode.com");
        let row = LedgerRow::from_cells("O(n)", "O(n)", "Hash map");

        let page = renderer.render(&entry(), &question(1, 1), &row).unwrap();
        assert!(page.ends_with(
            "- [x] **Time:** O(n)\n- [x] **Space:** O(n)\n\n\
             === \"Python\"\n\n    ```python\n    pass\n\n    ```\n\n"
        ));
        assert!(!page.contains("## Approach"));
    }
}
