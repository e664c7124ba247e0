use std::collections::BTreeSet;

use crate::attribute::{EnumView, MethodEnum, ProjectAttribute};

/// Identity of one parameter in the full API document, regardless of
/// project membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEntry {
    pub id: u32,
    pub name: String,
}

/// Everything one generation run works from: the project's attributes (in
/// table order), the method enums, and the identities of the full API.
#[derive(Debug, Clone, Default)]
pub struct AttributeSet {
    pub project: String,
    pub attributes: Vec<ProjectAttribute>,
    pub method_enums: Vec<MethodEnum>,
    pub api: Vec<ApiEntry>,
}

impl AttributeSet {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }

    /// Number of parameters in the whole API document.
    pub fn api_total(&self) -> usize {
        self.api.len()
    }

    pub fn project_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn max_id(&self) -> u32 {
        self.attributes.iter().map(|a| a.id).max().unwrap_or(0)
    }

    pub fn writable_count(&self) -> usize {
        self.attributes.iter().filter(|a| a.writable).count()
    }

    pub fn max_string_len(&self) -> usize {
        self.attributes
            .iter()
            .map(ProjectAttribute::string_max)
            .max()
            .unwrap_or(0)
    }

    pub fn max_array_size(&self) -> usize {
        self.attributes
            .iter()
            .map(|a| a.array_size)
            .max()
            .unwrap_or(0)
    }

    pub fn max_name_len(&self) -> usize {
        self.attributes
            .iter()
            .map(|a| a.name.len())
            .max()
            .unwrap_or(0)
    }

    /// Table index of the first attribute carrying `id`.
    pub fn index_of_id(&self, id: u32) -> Option<usize> {
        self.attributes.iter().position(|a| a.id == id)
    }

    /// Id slots below the API parameter count that no parameter uses.
    pub fn available_ids(&self) -> Vec<u32> {
        let used: BTreeSet<u32> = self.api.iter().map(|entry| entry.id).collect();
        (0..self.api_total())
            .filter_map(|slot| u32::try_from(slot).ok())
            .filter(|slot| !used.contains(slot))
            .collect()
    }

    /// Attribute enumerations first, then method enumerations.
    pub fn enum_views(&self) -> impl Iterator<Item = EnumView<'_>> {
        self.attributes
            .iter()
            .filter_map(ProjectAttribute::enum_view)
            .chain(self.method_enums.iter().map(MethodEnum::view))
    }
}
