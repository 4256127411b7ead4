//! Test doubles for the source and page boundaries.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::error::LoadError;
use crate::page::Page;
use crate::source::ResourceSource;

/// Serves fixed bodies by name; anything else is a 404.
#[derive(Default)]
pub struct MemorySource {
    bodies: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn with(mut self, name: &str, body: &str) -> Self {
        self.bodies.insert(name.to_string(), body.as_bytes().to_vec());
        self
    }
}

#[async_trait]
impl ResourceSource for MemorySource {
    async fn read(&self, name: &str) -> Result<Vec<u8>, LoadError> {
        self.bodies.get(name).cloned().ok_or_else(|| LoadError::Status {
            resource: name.to_string(),
            status: 404,
        })
    }
}

/// A page made of named containers with initial content.
#[derive(Debug, Default)]
pub struct MemoryPage {
    pub content: HashMap<String, String>,
    pub revealed: HashSet<String>,
}

impl MemoryPage {
    pub fn with_containers(ids: &[&str]) -> Self {
        Self {
            content: ids
                .iter()
                .map(|id| (id.to_string(), "initial".to_string()))
                .collect(),
            revealed: HashSet::new(),
        }
    }

    pub fn content_of(&self, id: &str) -> &str {
        self.content.get(id).map_or("", String::as_str)
    }
}

impl Page for MemoryPage {
    fn has_container(&self, id: &str) -> bool {
        self.content.contains_key(id)
    }

    fn set_content(&mut self, id: &str, html: &str) {
        if let Some(slot) = self.content.get_mut(id) {
            *slot = html.to_string();
        }
    }

    fn reveal_parent(&mut self, id: &str) {
        if self.content.contains_key(id) {
            self.revealed.insert(id.to_string());
        }
    }
}
