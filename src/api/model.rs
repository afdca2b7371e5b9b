//! Core data types for problem metadata.
//!
//! The wire shapes (`Raw*`) mirror the site's JSON; the public types are what
//! the rest of the crate renders from.

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};

/// Problem difficulty. Closed: anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in summary order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Map the catalog's numeric level (1, 2, 3).
    pub fn from_level(level: u8) -> ApiResult<Self> {
        match level {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            other => Err(ApiError::UnknownDifficulty {
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ApiError;

    fn from_str(s: &str) -> ApiResult<Self> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            other => Err(ApiError::UnknownDifficulty {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problem as listed in the bulk catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Site-facing problem number (1-based).
    pub frontend_id: u32,
    pub title_slug: String,
    pub title: String,
    pub difficulty: Difficulty,
}

impl CatalogEntry {
    /// Zero-padded 4-digit key used for page and snippet file names.
    pub fn padded_id(&self) -> String {
        format!("{:04}", self.frontend_id)
    }
}

/// The full problem catalog, sorted by `frontend_id`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Total problem count as reported by the site.
    pub num_total: u32,
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from unordered entries.
    pub fn new(num_total: u32, mut entries: Vec<CatalogEntry>) -> Self {
        entries.sort_by_key(|e| e.frontend_id);
        Self { num_total, entries }
    }

    /// Keep only the first `n` entries. `num_total` is left untouched.
    pub fn truncate(&mut self, n: usize) {
        self.entries.truncate(n);
    }

    /// Entries whose id does not match their position (`position + 1`).
    pub fn gaps(&self) -> impl Iterator<Item = (usize, &CatalogEntry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(pos, e)| e.frontend_id as usize != pos + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extended metadata for a single problem.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
    #[serde(default, deserialize_with = "tag_names")]
    pub topic_tags: Vec<String>,
}

#[derive(Deserialize)]
struct RawTag {
    name: String,
}

fn tag_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tags: Option<Vec<RawTag>> = Option::deserialize(deserializer)?;
    Ok(tags
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.name)
        .collect())
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RawCatalog {
    pub num_total: u32,
    pub stat_status_pairs: Vec<RawPair>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPair {
    pub stat: RawStat,
    pub difficulty: RawLevel,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStat {
    pub frontend_question_id: u32,
    #[serde(rename = "question__title_slug")]
    pub title_slug: String,
    #[serde(rename = "question__title")]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLevel {
    pub level: u8,
}

impl RawCatalog {
    pub(crate) fn into_catalog(self) -> ApiResult<Catalog> {
        let entries = self
            .stat_status_pairs
            .into_iter()
            .map(|pair| -> ApiResult<CatalogEntry> {
                Ok(CatalogEntry {
                    frontend_id: pair.stat.frontend_question_id,
                    title_slug: pair.stat.title_slug,
                    title: pair.stat.title,
                    difficulty: Difficulty::from_level(pair.difficulty.level)?,
                })
            })
            .collect::<ApiResult<Vec<_>>>()?;
        Ok(Catalog::new(self.num_total, entries))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawQuestionResponse {
    pub data: RawQuestionData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawQuestionData {
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_from_level() {
        assert_eq!(Difficulty::from_level(1).unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(2).unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::from_level(3).unwrap(), Difficulty::Hard);
        assert!(matches!(
            Difficulty::from_level(4),
            Err(ApiError::UnknownDifficulty { .. })
        ));
    }

    #[test]
    fn difficulty_parse_rejects_unknown() {
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("Extreme".parse::<Difficulty>().is_err());
        assert!("easy".parse::<Difficulty>().is_err());
    }

    #[test]
    fn raw_catalog_sorted_by_frontend_id() {
        let json = r#"{
            "num_total": 3,
            "stat_status_pairs": [
                {"stat": {"frontend_question_id": 3, "question__title_slug": "c", "question__title": "C"}, "difficulty": {"level": 3}},
                {"stat": {"frontend_question_id": 1, "question__title_slug": "a", "question__title": "A"}, "difficulty": {"level": 1}},
                {"stat": {"frontend_question_id": 2, "question__title_slug": "b", "question__title": "B"}, "difficulty": {"level": 2}}
            ]
        }"#;
        let raw: RawCatalog = serde_json::from_str(json).unwrap();
        let catalog = raw.into_catalog().unwrap();
        let ids: Vec<u32> = catalog.entries.iter().map(|e| e.frontend_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.entries[2].difficulty, Difficulty::Hard);
        assert_eq!(catalog.gaps().count(), 0);
    }

    #[test]
    fn catalog_gaps_detected() {
        let entry = |id| CatalogEntry {
            frontend_id: id,
            title_slug: format!("p{id}"),
            title: format!("P{id}"),
            difficulty: Difficulty::Easy,
        };
        let catalog = Catalog::new(3, vec![entry(1), entry(3), entry(4)]);
        let gaps: Vec<u32> = catalog.gaps().map(|(_, e)| e.frontend_id).collect();
        assert_eq!(gaps, vec![3, 4]);
    }

    #[test]
    fn question_decodes_graphql_shape() {
        let json = r#"{"data": {"question": {
            "title": "Two Sum", "difficulty": "Easy", "likes": 10, "dislikes": 2,
            "topicTags": [{"name": "Array"}, {"name": "Hash Table"}]
        }}}"#;
        let resp: RawQuestionResponse = serde_json::from_str(json).unwrap();
        let q = resp.data.question.unwrap();
        assert_eq!(q.title, "Two Sum");
        assert_eq!(q.difficulty, Difficulty::Easy);
        assert_eq!(q.topic_tags, vec!["Array", "Hash Table"]);
    }

    #[test]
    fn null_question_decodes_to_none() {
        let resp: RawQuestionResponse =
            serde_json::from_str(r#"{"data": {"question": null}}"#).unwrap();
        assert!(resp.data.question.is_none());
    }

    #[test]
    fn padded_id_is_four_digits() {
        let e = CatalogEntry {
            frontend_id: 7,
            title_slug: "x".into(),
            title: "X".into(),
            difficulty: Difficulty::Easy,
        };
        assert_eq!(e.padded_id(), "0007");
    }
}
