//! Fetch-and-render operations, one per page section.
//!
//! Every operation follows the same shape: resolve the container, fetch one
//! resource, render its records in resource order, and assign the markup.
//! A missing container or an unavailable resource leaves the page as it was.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use cisl_core::markup;
use cisl_core::models::{
    NewsItem, OpportunityRecord, PeopleDirectory, ProjectRecord, ResearchArea,
};
use cisl_core::routes::Resource;

use crate::error::LoadError;
use crate::page::Page;
use crate::source::ResourceSource;

/// The section rendering operations a page can trigger.
#[async_trait]
pub trait ContentOps: Send + Sync {
    async fn render_news(&self, page: &mut (dyn Page + Send), target_id: &str);

    async fn render_people(
        &self,
        page: &mut (dyn Page + Send),
        leads_id: &str,
        fellows_id: &str,
        alumni_id: &str,
    );

    async fn render_projects(&self, page: &mut (dyn Page + Send), target_id: &str);

    async fn render_research(&self, page: &mut (dyn Page + Send), target_id: &str);

    async fn render_opportunities(&self, page: &mut (dyn Page + Send), target_id: &str);
}

// ---------------------------------------------------------------------------
// ContentLoader
// ---------------------------------------------------------------------------

/// Renders JSON resources from a [`ResourceSource`] into a page.
///
/// Stateless apart from its source; cheap to clone and share between
/// requests.
#[derive(Clone)]
pub struct ContentLoader {
    source: Arc<dyn ResourceSource>,
}

impl ContentLoader {
    pub fn new(source: impl ResourceSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Fetch and parse a resource as JSON.
    ///
    /// Any failure (transport, status, parse) is logged with the resource
    /// name and turned into `None`. Callers treat `None` as "nothing to
    /// render".
    pub async fn fetch_resource(&self, name: &str) -> Option<serde_json::Value> {
        match self.try_fetch(name).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(resource = name, error = %e, "Error loading resource");
                None
            }
        }
    }

    /// Fetch a resource and deserialize it into `T`.
    ///
    /// A body that parses as JSON but does not match `T` counts as
    /// malformed and is absorbed the same way as a failed fetch.
    pub async fn fetch_records<T: DeserializeOwned>(&self, resource: Resource) -> Option<T> {
        let name = resource.file_name();
        let value = self.fetch_resource(name).await?;
        match serde_json::from_value(value) {
            Ok(records) => Some(records),
            Err(source) => {
                let e = LoadError::Parse {
                    resource: name.to_string(),
                    source,
                };
                tracing::error!(resource = name, error = %e, "Error loading resource");
                None
            }
        }
    }

    async fn try_fetch(&self, name: &str) -> Result<serde_json::Value, LoadError> {
        let body = self.source.read(name).await?;
        serde_json::from_slice(&body).map_err(|source| LoadError::Parse {
            resource: name.to_string(),
            source,
        })
    }

    /// Fetch a list resource and assign its rendered markup to one container.
    async fn render_list<T, F>(
        &self,
        page: &mut (dyn Page + Send),
        target_id: &str,
        resource: Resource,
        render: F,
    ) where
        T: DeserializeOwned + Send,
        F: FnOnce(&[T]) -> String + Send,
    {
        if !page.has_container(target_id) {
            tracing::debug!(target_id, %resource, "Container not found, skipping");
            return;
        }

        let Some(records) = self.fetch_records::<Vec<T>>(resource).await else {
            return;
        };

        tracing::debug!(target_id, %resource, count = records.len(), "Rendering section");
        page.set_content(target_id, &render(&records));
    }
}

#[async_trait]
impl ContentOps for ContentLoader {
    async fn render_news(&self, page: &mut (dyn Page + Send), target_id: &str) {
        self.render_list::<NewsItem, _>(page, target_id, Resource::News, markup::render_news_list)
            .await;
    }

    async fn render_people(
        &self,
        page: &mut (dyn Page + Send),
        leads_id: &str,
        fellows_id: &str,
        alumni_id: &str,
    ) {
        let Some(people) = self.fetch_records::<PeopleDirectory>(Resource::People).await else {
            return;
        };

        if let Some(leads) = &people.leads {
            if page.has_container(leads_id) {
                page.set_content(leads_id, &markup::render_person_list(leads, true));
            }
        }

        if let Some(fellows) = &people.fellows {
            if page.has_container(fellows_id) {
                page.set_content(fellows_id, &markup::render_person_list(fellows, false));
            }
        }

        // Alumni stay hidden unless there is someone to show.
        if let Some(alumni) = people.alumni.as_deref().filter(|a| !a.is_empty()) {
            if page.has_container(alumni_id) {
                page.set_content(alumni_id, &markup::render_person_list(alumni, false));
                page.reveal_parent(alumni_id);
            }
        }
    }

    async fn render_projects(&self, page: &mut (dyn Page + Send), target_id: &str) {
        self.render_list::<ProjectRecord, _>(
            page,
            target_id,
            Resource::Projects,
            markup::render_project_list,
        )
        .await;
    }

    async fn render_research(&self, page: &mut (dyn Page + Send), target_id: &str) {
        self.render_list::<ResearchArea, _>(
            page,
            target_id,
            Resource::Research,
            markup::render_research_list,
        )
        .await;
    }

    async fn render_opportunities(&self, page: &mut (dyn Page + Send), target_id: &str) {
        self.render_list::<OpportunityRecord, _>(
            page,
            target_id,
            Resource::Opportunities,
            markup::render_opportunity_list,
        )
        .await;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
