// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normalized record tree
//!
//! A parsed record keeps its raw property list and a map of named child
//! slots. Every slot holds exactly one [`Node`] shape, so consumers match on
//! the shape instead of probing for fields.

use indexmap::IndexMap;

use crate::property::{Property, PropertyArray};

/// Named child slots, in the order they were first attached
pub type Children = IndexMap<String, Node>;

/// Records indexed by their declared identifier
pub type IdIndex = IndexMap<String, Record>;

/// One parsed record
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub name: String,
    pub properties: Vec<Property>,
    pub children: Children,
}

/// Shape of a named slot in the normalized tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A single non-array value
    Scalar(Property),
    /// A typed array surfaced directly on the parent
    Array(PropertyArray),
    /// A nested record: its property list plus its own named children
    Mapping(Record),
    /// Children of the objects container, keyed by identifier
    IdIndexed(IdIndex),
}

impl Node {
    /// Wrap a bare property value, keeping arrays distinct from scalars
    pub fn from_property(property: Property) -> Self {
        match property {
            Property::Array(array) => Node::Array(array),
            other => Node::Scalar(other),
        }
    }

    pub fn as_scalar(&self) -> Option<&Property> {
        match self {
            Node::Scalar(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Record> {
        match self {
            Node::Mapping(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_id_indexed(&self) -> Option<&IdIndex> {
        match self {
            Node::IdIndexed(index) => Some(index),
            _ => None,
        }
    }

    /// Plain numeric array, whether bare or wrapped in a one-property record
    pub fn as_array(&self) -> Option<&PropertyArray> {
        match self {
            Node::Array(a) => Some(a),
            Node::Mapping(record) => match record.properties.as_slice() {
                [Property::Array(a)] => Some(a),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Record {
    pub fn new(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            properties,
            children: Children::new(),
        }
    }

    #[inline]
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Follow a path of slot names through nested mappings.
    ///
    /// An empty path yields `None`; every intermediate slot must be a mapping.
    pub fn lookup(&self, path: &[&str]) -> Option<&Node> {
        let (last, parents) = path.split_last()?;
        let mut record = self;
        for name in parents {
            record = record.child(name)?.as_mapping()?;
        }
        record.child(last)
    }

    /// Key under which this record is filed inside an id-indexed slot
    pub fn id_key(&self) -> Option<String> {
        self.properties.first().map(ToString::to_string)
    }
}

/// A fully decoded container
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Container format version from the header
    pub version: u32,
    /// Whether record offsets and lengths are 64-bit
    pub is64: bool,
    /// Top-level records by name; a later record replaces an earlier namesake
    pub records: IndexMap<String, Record>,
}

impl Document {
    #[inline]
    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Resolve `root.path[0].path[1]...` starting from a top-level record
    pub fn lookup(&self, root: &str, path: &[&str]) -> Option<&Node> {
        self.record(root)?.lookup(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_mappings() {
        let mut table = Record::new("Properties70", vec![]);
        table
            .children
            .insert("UpAxis".into(), Node::Scalar(Property::I32(2)));
        let mut settings = Record::new("GlobalSettings", vec![]);
        settings
            .children
            .insert("Properties70".into(), Node::Mapping(table));

        assert_eq!(
            settings.lookup(&["Properties70", "UpAxis"]),
            Some(&Node::Scalar(Property::I32(2)))
        );
        assert!(settings.lookup(&["Properties70", "Missing"]).is_none());
        assert!(settings.lookup(&["Properties70", "UpAxis", "Deeper"]).is_none());
        assert!(settings.lookup(&[]).is_none());
    }

    #[test]
    fn array_through_wrapper() {
        let array = PropertyArray::F64(vec![0.0, 1.0, 2.0]);
        let mut wrapper = Record::new("Vertices", vec![Property::Array(array.clone())]);
        wrapper
            .children
            .insert("Extra".into(), Node::Scalar(Property::Bool(true)));

        assert_eq!(Node::Array(array.clone()).as_array(), Some(&array));
        assert_eq!(Node::Mapping(wrapper).as_array(), Some(&array));
        assert!(Node::Scalar(Property::I32(1)).as_array().is_none());
    }

    #[test]
    fn from_property_splits_arrays() {
        assert!(matches!(
            Node::from_property(Property::Array(PropertyArray::I32(vec![]))),
            Node::Array(_)
        ));
        assert!(matches!(
            Node::from_property(Property::F64(1.0)),
            Node::Scalar(_)
        ));
    }
}
