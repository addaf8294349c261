use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Final set of text artifacts ready for materialization.
///
/// This is the output of the derivers. It contains no business logic, only
/// data, in the order the artifacts were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBundle {
    pub(crate) files: Vec<GeneratedFile>,
}

impl OutputBundle {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn add_file(&mut self, path: impl Into<RelativePath>, content: String) {
        self.files.push(GeneratedFile {
            path: path.into(),
            content,
        });
    }

    pub fn with_file(mut self, path: impl Into<RelativePath>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    /// Every path is unique and every artifact non-empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file.path.as_str()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
            if file.content.trim().is_empty() {
                return Err(DomainError::EmptyArtifact {
                    path: file.path.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    /// Content stored under `path`.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path.as_str() == path)
            .map(|f| f.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: RelativePath,
    pub content: String,
}

impl GeneratedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
