//! Badge and indicator strings shared by problem pages.

use crate::api::Difficulty;

/// Vote-based indicator appended to a page title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Indicator for a like/dislike split. `None` for no votes or a
    /// like ratio in `[0.5, 0.8]`.
    pub fn from_votes(likes: u64, dislikes: u64) -> Option<Self> {
        let votes = likes + dislikes;
        if votes == 0 {
            return None;
        }
        let ratio = likes as f64 / votes as f64;
        if ratio > 0.8 {
            Some(Self::Positive)
        } else if ratio < 0.5 {
            Some(Self::Negative)
        } else {
            None
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Positive => ":thumbsup:",
            Self::Negative => ":thumbsdown:",
        }
    }
}

/// Badge color for a difficulty.
pub fn difficulty_color(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "00a690",
        Difficulty::Medium => "ffaf00",
        Difficulty::Hard => "ff284b",
    }
}

/// Large difficulty badge shown under the title.
pub fn difficulty_badge(difficulty: Difficulty) -> String {
    format!(
        "![](https://img.shields.io/badge/-{difficulty}-{}.svg?style=for-the-badge)",
        difficulty_color(difficulty)
    )
}

/// Topic tags that get a badge. Tags not listed here are left off the page.
const TAG_COLORS: &[(&str, &str)] = &[
    ("Array", "1f6feb"),
    ("Backtracking", "8957e5"),
    ("Binary Indexed Tree", "2ea043"),
    ("Binary Search", "0969da"),
    ("Binary Search Tree", "1a7f37"),
    ("Binary Tree", "2da44e"),
    ("Bit Manipulation", "6e7781"),
    ("Brainteaser", "bf8700"),
    ("Breadth-First Search", "0550ae"),
    ("Bucket Sort", "9a6700"),
    ("Combinatorics", "cf222e"),
    ("Counting", "7d4e00"),
    ("Counting Sort", "953800"),
    ("Data Stream", "0a3069"),
    ("Database", "57606a"),
    ("Depth-First Search", "033d8b"),
    ("Design", "a475f9"),
    ("Divide and Conquer", "8250df"),
    ("Doubly-Linked List", "bc4c00"),
    ("Dynamic Programming", "cf222e"),
    ("Enumeration", "6639ba"),
    ("Game Theory", "bf3989"),
    ("Geometry", "116329"),
    ("Graph", "0550ae"),
    ("Greedy", "fb8f44"),
    ("Hash Function", "4d2d00"),
    ("Hash Table", "218bff"),
    ("Heap (Priority Queue)", "e16f24"),
    ("Interactive", "a40e26"),
    ("Iterator", "512a97"),
    ("Line Sweep", "3e1f79"),
    ("Linked List", "fa4549"),
    ("Math", "d4a72c"),
    ("Matrix", "54aeff"),
    ("Memoization", "c297ff"),
    ("Merge Sort", "7d4e00"),
    ("Minimum Spanning Tree", "044f1e"),
    ("Monotonic Queue", "ff8182"),
    ("Monotonic Stack", "ff8182"),
    ("Number Theory", "b08800"),
    ("Ordered Set", "4ac26b"),
    ("Prefix Sum", "1b7c83"),
    ("Probability and Statistics", "75501d"),
    ("Queue", "a0111f"),
    ("Quickselect", "cd3425"),
    ("Randomized", "8c959f"),
    ("Recursion", "6f42c1"),
    ("Rolling Hash", "3192aa"),
    ("Segment Tree", "19a974"),
    ("Shortest Path", "0366d6"),
    ("Simulation", "424a53"),
    ("Sliding Window", "00a3bf"),
    ("Sorting", "d1242f"),
    ("Stack", "e85aad"),
    ("String", "e34c26"),
    ("String Matching", "b35900"),
    ("Topological Sort", "005cc5"),
    ("Tree", "28a745"),
    ("Trie", "7057ff"),
    ("Two Pointers", "f66a0a"),
    ("Union Find", "5319e7"),
];

/// Color for a topic tag, if it is on the allow-list.
pub fn tag_color(tag: &str) -> Option<&'static str> {
    TAG_COLORS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, color)| *color)
}

/// One small badge per allow-listed tag, in input order.
pub fn tag_badges(tags: &[String]) -> Vec<String> {
    tags.iter()
        .filter_map(|tag| {
            // shields.io reads a single dash as a field separator.
            tag_color(tag).map(|color| {
                format!(
                    "![](https://img.shields.io/badge/-{}-{color}.svg?style=flat-square)",
                    tag.replace('-', "--")
                )
            })
        })
        .collect()
}
