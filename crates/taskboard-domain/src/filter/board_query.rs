use serde::{Deserialize, Serialize};

use super::title::TitleMatcher;
use crate::board::Board;

/// Trait for filtering boards in a listing.
pub trait BoardFilter {
    fn matches(&self, board: &Board) -> bool;
}

/// Keeps boards whose title matches.
pub struct TitleFilter {
    matcher: TitleMatcher,
}

impl TitleFilter {
    pub fn new(matcher: TitleMatcher) -> Self {
        Self { matcher }
    }
}

impl BoardFilter for TitleFilter {
    fn matches(&self, board: &Board) -> bool {
        self.matcher.is_match(&board.title)
    }
}

/// Keeps boards whose starred flag equals the wanted value.
pub struct StarredFilter {
    is_starred: bool,
}

impl StarredFilter {
    pub fn new(is_starred: bool) -> Self {
        Self { is_starred }
    }
}

impl BoardFilter for StarredFilter {
    fn matches(&self, board: &Board) -> bool {
        board.is_starred == self.is_starred
    }
}

/// Parameters for the board listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardQuery {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_starred: Option<bool>,
}

impl BoardQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn starred(mut self, is_starred: bool) -> Self {
        self.is_starred = Some(is_starred);
        self
    }

    /// Builds a query from URL-style search parameters. Unknown keys are
    /// ignored, missing keys fall back to the defaults.
    pub fn from_params<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut query = Self::default();
        for (key, value) in params {
            match key {
                "title" => query.title = value.to_string(),
                "isStarred" => query.is_starred = value.parse().ok(),
                _ => {}
            }
        }
        query
    }

    fn filters(&self) -> Vec<Box<dyn BoardFilter>> {
        let mut filters: Vec<Box<dyn BoardFilter>> = Vec::new();
        if let Some(matcher) = TitleMatcher::new(&self.title) {
            filters.push(Box::new(TitleFilter::new(matcher)));
        }
        if let Some(is_starred) = self.is_starred {
            filters.push(Box::new(StarredFilter::new(is_starred)));
        }
        filters
    }

    /// Title first, then starred. Input order is preserved.
    pub fn apply(&self, boards: Vec<Board>) -> Vec<Board> {
        let filters = self.filters();
        if filters.is_empty() {
            return boards;
        }
        boards
            .into_iter()
            .filter(|board| filters.iter().all(|f| f.matches(board)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_board;
    use crate::templates::empty_board;

    fn boards() -> Vec<Board> {
        let mut marketing = empty_board();
        marketing.id = Some("b2".to_string());
        marketing.title = "Marketing".to_string();
        marketing.is_starred = true;
        vec![demo_board(), marketing]
    }

    #[test]
    fn test_title_filter() {
        let result = BoardQuery::new().with_title("robot").apply(boards());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Robot dev proj");
    }

    #[test]
    fn test_starred_filter_only_when_set() {
        assert_eq!(BoardQuery::new().apply(boards()).len(), 2);

        let starred = BoardQuery::new().starred(true).apply(boards());
        assert_eq!(starred.len(), 1);
        assert_eq!(starred[0].title, "Marketing");

        let unstarred = BoardQuery::new().starred(false).apply(boards());
        assert_eq!(unstarred.len(), 1);
        assert_eq!(unstarred[0].title, "Robot dev proj");
    }

    #[test]
    fn test_filters_combine() {
        let result = BoardQuery::new()
            .with_title("robot")
            .starred(true)
            .apply(boards());
        assert!(result.is_empty());
    }

    #[test]
    fn test_from_params() {
        let query = BoardQuery::from_params([("title", "mark"), ("isStarred", "true"), ("x", "y")]);
        assert_eq!(query.title, "mark");
        assert_eq!(query.is_starred, Some(true));

        let query = BoardQuery::from_params([("isStarred", "")]);
        assert_eq!(query, BoardQuery::default());
    }
}
