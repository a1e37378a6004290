use std::fmt;
use std::str::FromStr;

use super::{Category, Color};
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn accepts(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorFilter {
    #[default]
    All,
    Only(Color),
}

impl ColorFilter {
    pub fn accepts(&self, color: Color) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == color,
        }
    }
}

impl fmt::Display for ColorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(color) => fmt::Display::fmt(color, f),
        }
    }
}

impl FromStr for ColorFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// What the inventory view is narrowed to. Working memory only, never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub color: ColorFilter,
    pub search: String,
}

impl FilterCriteria {
    /// Overwrite the fields present in `update`, keep the rest.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(search) = update.search {
            self.search = search;
        }
    }
}

/// Partial filter change. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub category: Option<CategoryFilter>,
    pub color: Option<ColorFilter>,
    pub search: Option<String>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = Some(category);
        self
    }

    pub fn color(mut self, color: ColorFilter) -> Self {
        self.color = Some(color);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}
