//! Partition item indexes by a categorical value.

use std::collections::HashMap;

use serde::Serialize;

/// Label of the single group used when nothing is grouped.
pub const ALL_GROUP: &str = "All";

/// Items sharing one grouping value, in original row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub label: String,
    pub indexes: Vec<usize>,
}

/// Groups in first-seen order of their label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Groups {
    groups: Vec<Group>,
    by_label: HashMap<String, usize>,
}

impl Groups {
    /// One group labeled "All" holding `0..len`.
    pub fn all(len: usize) -> Self {
        let mut groups = Self::default();
        groups.by_label.insert(ALL_GROUP.to_string(), 0);
        groups.groups.push(Group {
            label: ALL_GROUP.to_string(),
            indexes: (0..len).collect(),
        });
        groups
    }

    fn push(&mut self, label: &str, index: usize) {
        match self.by_label.get(label) {
            Some(&slot) => self.groups[slot].indexes.push(index),
            None => {
                self.by_label.insert(label.to_string(), self.groups.len());
                self.groups.push(Group {
                    label: label.to_string(),
                    indexes: vec![index],
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&Group> {
        self.by_label.get(label).map(|&slot| &self.groups[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a Groups {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for Groups {
    type Item = Group;
    type IntoIter = std::vec::IntoIter<Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Group the positions of `values` by value.
///
/// Single pass. Groups appear in the order their value is first seen and
/// keep ascending indexes.
pub fn group_indexes<I>(values: I) -> Groups
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut groups = Groups::default();
    for (index, value) in values.into_iter().enumerate() {
        groups.push(value.as_ref(), index);
    }
    groups
}
