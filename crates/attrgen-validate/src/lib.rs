//! Duplicate checks over the project subset and the full API surface.
//!
//! Schema authoring errors are reported, not enforced: the generator logs
//! the first failing key space and carries on.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use attrgen_model::AttributeSet;

/// The four key spaces checked, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySpace {
    ProjectIds,
    ApiIds,
    ProjectNames,
    ApiNames,
}

impl KeySpace {
    pub const ALL: [Self; 4] = [
        Self::ProjectIds,
        Self::ApiIds,
        Self::ProjectNames,
        Self::ApiNames,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectIds => "Duplicate attribute ID in Project",
            Self::ApiIds => "Duplicate attribute ID in API",
            Self::ProjectNames => "Duplicate Attribute Name",
            Self::ApiNames => "Duplicate Attribute Name in API",
        }
    }
}

impl fmt::Display for KeySpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value that occurs more than once, with the names of the entries
/// carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub value: String,
    pub count: usize,
    pub names: Vec<String>,
}

/// The first key space found to contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateFinding {
    pub key_space: KeySpace,
    pub duplicates: Vec<Duplicate>,
}

/// Find the first key space with a repeated value.
pub fn find_duplicates(set: &AttributeSet) -> Option<DuplicateFinding> {
    KeySpace::ALL.into_iter().find_map(|key_space| {
        let keyed = keyed_entries(set, key_space);
        let duplicates = repeated(&keyed);
        (!duplicates.is_empty()).then_some(DuplicateFinding {
            key_space,
            duplicates,
        })
    })
}

/// Log any duplicates and return whether the set is clean.
pub fn check_duplicates(set: &AttributeSet) -> bool {
    let Some(finding) = find_duplicates(set) else {
        debug!(project = %set.project, "no duplicate ids or names");
        return true;
    };
    warn!(project = %set.project, "{}", finding.key_space);
    for duplicate in &finding.duplicates {
        warn!(
            value = %duplicate.value,
            count = duplicate.count,
            names = %duplicate.names.join(", "),
            "duplicate {}",
            duplicate.value
        );
    }
    false
}

/// `(key, name)` pairs for one key space, in document order.
fn keyed_entries(set: &AttributeSet, key_space: KeySpace) -> Vec<(String, &str)> {
    match key_space {
        KeySpace::ProjectIds => set
            .attributes
            .iter()
            .map(|a| (a.id.to_string(), a.name.as_str()))
            .collect(),
        KeySpace::ApiIds => set
            .api
            .iter()
            .map(|e| (e.id.to_string(), e.name.as_str()))
            .collect(),
        KeySpace::ProjectNames => set
            .attributes
            .iter()
            .map(|a| (a.name.clone(), a.name.as_str()))
            .collect(),
        KeySpace::ApiNames => set
            .api
            .iter()
            .map(|e| (e.name.clone(), e.name.as_str()))
            .collect(),
    }
}

/// Values seen more than once, in order of first occurrence.
fn repeated(keyed: &[(String, &str)]) -> Vec<Duplicate> {
    let mut seen: BTreeMap<&str, Duplicate> = BTreeMap::new();
    let mut order: Vec<&str> = Vec::new();
    for (key, name) in keyed {
        let entry = seen.entry(key.as_str()).or_insert_with(|| {
            order.push(key.as_str());
            Duplicate {
                value: key.clone(),
                count: 0,
                names: Vec::new(),
            }
        });
        entry.count += 1;
        if !entry.names.iter().any(|n| n == *name) {
            entry.names.push((*name).to_string());
        }
    }
    order
        .into_iter()
        .filter_map(|key| seen.remove(key))
        .filter(|entry| entry.count > 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrgen_model::{ApiEntry, ProjectAttribute};

    fn set(attributes: &[(u32, &str)], api: &[(u32, &str)]) -> AttributeSet {
        let mut set = AttributeSet::new("MG100");
        set.attributes = attributes
            .iter()
            .map(|(id, name)| ProjectAttribute::new(*id, *name, "uint8_t", "0"))
            .collect();
        set.api = api
            .iter()
            .map(|(id, name)| ApiEntry {
                id: *id,
                name: (*name).to_string(),
            })
            .collect();
        set
    }

    #[test]
    fn clean_set_passes() {
        let set = set(&[(1, "a"), (2, "b")], &[(1, "a"), (2, "b"), (3, "c")]);
        assert_eq!(find_duplicates(&set), None);
        assert!(check_duplicates(&set));
    }

    #[test]
    fn project_id_duplicates_name_both_attributes() {
        let set = set(&[(7, "alpha"), (7, "beta")], &[(7, "alpha"), (7, "beta")]);
        let finding = find_duplicates(&set).unwrap();
        assert_eq!(finding.key_space, KeySpace::ProjectIds);
        assert_eq!(finding.duplicates.len(), 1);
        assert_eq!(finding.duplicates[0].value, "7");
        assert_eq!(finding.duplicates[0].names, vec!["alpha", "beta"]);
        assert!(!check_duplicates(&set));
    }

    #[test]
    fn api_duplicates_are_found_outside_the_project() {
        let set = set(&[(1, "a")], &[(1, "a"), (2, "b"), (2, "c")]);
        let finding = find_duplicates(&set).unwrap();
        assert_eq!(finding.key_space, KeySpace::ApiIds);
        assert_eq!(finding.duplicates[0].names, vec!["b", "c"]);
    }

    #[test]
    fn name_duplicates_are_checked_after_ids() {
        let set = set(&[(1, "a"), (2, "a")], &[(1, "a"), (2, "a")]);
        let finding = find_duplicates(&set).unwrap();
        assert_eq!(finding.key_space, KeySpace::ProjectNames);
        assert_eq!(finding.duplicates[0].count, 2);
    }

    #[test]
    fn duplicates_follow_first_occurrence_not_key_order() {
        let set = set(
            &[(9, "x"), (3, "y"), (9, "z"), (3, "w"), (3, "y")],
            &[(9, "x"), (3, "y")],
        );
        let finding = find_duplicates(&set).unwrap();
        let values: Vec<_> = finding.duplicates.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(values, vec!["9", "3"]);
        assert_eq!(finding.duplicates[1].count, 3);
        assert_eq!(finding.duplicates[1].names, vec!["y", "w"]);
    }
}
