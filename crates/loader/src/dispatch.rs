//! Page-ready dispatch: pick the one operation a page path triggers.

use cisl_core::routes::{
    page_name, PageRoute, ALUMNI_TARGET, FELLOWS_TARGET, LEADS_TARGET, NEWS_TARGET, OPPORTUNITIES_TARGET,
    PROJECTS_TARGET, RESEARCH_TARGET,
};

use crate::loader::ContentOps;
use crate::page::Page;

/// Run the operation for the page at `path`, if the page is recognized.
///
/// Only the terminal path segment matters; an empty one means the home
/// page. Returns the matched route, or `None` when nothing ran.
pub async fn dispatch(
    ops: &dyn ContentOps,
    page: &mut (dyn Page + Send),
    path: &str,
) -> Option<PageRoute> {
    let route = match page_name(path).parse::<PageRoute>() {
        Ok(route) => route,
        Err(e) => {
            tracing::debug!(path, error = %e, "No content for page");
            return None;
        }
    };
    tracing::debug!(path, %route, resource = %route.resource(), "Loading page content");

    match route {
        PageRoute::Index | PageRoute::About => ops.render_news(page, NEWS_TARGET).await,
        PageRoute::People => {
            ops.render_people(page, LEADS_TARGET, FELLOWS_TARGET, ALUMNI_TARGET)
                .await
        }
        PageRoute::Projects => ops.render_projects(page, PROJECTS_TARGET).await,
        PageRoute::Research => ops.render_research(page, RESEARCH_TARGET).await,
        PageRoute::Opportunities => ops.render_opportunities(page, OPPORTUNITIES_TARGET).await,
    }

    Some(route)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
