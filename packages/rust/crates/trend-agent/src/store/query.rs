use serde::Deserialize;
use trend_types::{Category, EnrichedTool};

/// Category label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Catalog filter. Blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ToolQuery {
    /// Category label, case-insensitive; `All` matches everything.
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive substring of name, summary or description.
    #[serde(default)]
    pub search: Option<String>,
}

impl ToolQuery {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category(mut self, label: impl Into<String>) -> Self {
        self.category = Some(label.into());
        self
    }

    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Compile into a predicate; the filter strings are normalized once.
    pub(crate) fn matcher(&self) -> ToolMatcher {
        let category = match non_blank(self.category.as_deref()) {
            None => CategoryFilter::Any,
            Some(label) if label.eq_ignore_ascii_case(ALL_CATEGORIES) => CategoryFilter::Any,
            Some(label) => match Category::from_label(label) {
                Some(category) => CategoryFilter::Only(category),
                None => CategoryFilter::Unknown,
            },
        };
        ToolMatcher {
            category,
            search: non_blank(self.search.as_deref()).map(str::to_lowercase),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

enum CategoryFilter {
    Any,
    Only(Category),
    /// A label outside the closed set matches nothing.
    Unknown,
}

pub(crate) struct ToolMatcher {
    category: CategoryFilter,
    search: Option<String>,
}

impl ToolMatcher {
    pub(crate) fn matches(&self, tool: &EnrichedTool) -> bool {
        let category_ok = match self.category {
            CategoryFilter::Any => true,
            CategoryFilter::Only(category) => tool.classification.category == category,
            CategoryFilter::Unknown => false,
        };
        category_ok
            && self.search.as_deref().is_none_or(|needle| {
                [
                    tool.name.as_str(),
                    tool.classification.summary.as_str(),
                    tool.description.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
            })
    }
}
