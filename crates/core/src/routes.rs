//! Page routing: which page names are recognized, which resource each one
//! reads, and which containers it writes into.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Page served when the path has no terminal segment.
pub const DEFAULT_PAGE: &str = "index.html";

// ---------------------------------------------------------------------------
// Container identifiers
// ---------------------------------------------------------------------------

pub const NEWS_TARGET: &str = "news-content";
pub const LEADS_TARGET: &str = "leads-content";
pub const FELLOWS_TARGET: &str = "fellows-content";
pub const ALUMNI_TARGET: &str = "alumni-content";
pub const PROJECTS_TARGET: &str = "projects-content";
pub const RESEARCH_TARGET: &str = "research-content";
pub const OPPORTUNITIES_TARGET: &str = "opportunities-content";

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// A named JSON document in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    News,
    People,
    Projects,
    Research,
    Opportunities,
}

impl Resource {
    pub fn file_name(self) -> &'static str {
        match self {
            Resource::News => "news.json",
            Resource::People => "people.json",
            Resource::Projects => "projects.json",
            Resource::Research => "research.json",
            Resource::Opportunities => "opportunities.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// ---------------------------------------------------------------------------
// Page routes
// ---------------------------------------------------------------------------

/// A recognized page and the single loader operation it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRoute {
    Index,
    About,
    People,
    Projects,
    Research,
    Opportunities,
}

impl PageRoute {
    pub const ALL: [PageRoute; 6] = [
        PageRoute::Index,
        PageRoute::About,
        PageRoute::People,
        PageRoute::Projects,
        PageRoute::Research,
        PageRoute::Opportunities,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            PageRoute::Index => "index.html",
            PageRoute::About => "about.html",
            PageRoute::People => "people.html",
            PageRoute::Projects => "projects.html",
            PageRoute::Research => "research.html",
            PageRoute::Opportunities => "opportunities.html",
        }
    }

    /// The resource this page's operation reads.
    pub fn resource(self) -> Resource {
        match self {
            PageRoute::Index | PageRoute::About => Resource::News,
            PageRoute::People => Resource::People,
            PageRoute::Projects => Resource::Projects,
            PageRoute::Research => Resource::Research,
            PageRoute::Opportunities => Resource::Opportunities,
        }
    }

    /// Match a page file name exactly (case-sensitive).
    pub fn from_file_name(name: &str) -> Option<Self> {
        PageRoute::ALL.into_iter().find(|p| p.file_name() == name)
    }

    /// Resolve the route for a URL path from its terminal segment.
    ///
    /// An empty terminal segment (`""`, `"/"`, `"/team/"`) means the home
    /// page.
    pub fn from_path(path: &str) -> Option<Self> {
        page_name(path).parse().ok()
    }
}

impl fmt::Display for PageRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for PageRoute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_file_name(s).ok_or_else(|| CoreError::UnrecognizedPage(s.to_string()))
    }
}

/// Terminal segment of a URL path, defaulting to [`DEFAULT_PAGE`].
///
/// Query strings and fragments are not stripped; callers pass a bare path.
pub fn page_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => DEFAULT_PAGE,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
