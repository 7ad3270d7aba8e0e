use regex::{Regex, RegexBuilder};

/// Case-insensitive title matcher.
///
/// The query is compiled as a regular expression so `^Help` or `logo|icon`
/// work as users expect. Text that is not a valid pattern is matched as a
/// literal substring instead.
#[derive(Debug, Clone)]
pub struct TitleMatcher {
    query: String,
    regex: Regex,
}

impl TitleMatcher {
    /// Returns `None` for an empty query, which matches everything.
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        let regex = RegexBuilder::new(query)
            .case_insensitive(true)
            .build()
            .or_else(|_| {
                RegexBuilder::new(&regex::escape(query))
                    .case_insensitive(true)
                    .build()
            })
            .ok()?;
        Some(Self {
            query: query.to_string(),
            regex,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_match(&self, title: &str) -> bool {
        self.regex.is_match(title)
    }
}
