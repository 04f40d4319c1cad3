// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Node Normalizer
//!
//! Structural rules applied when a completed child record is attached to its
//! parent. Rules are tried in priority order and the first match applies
//! exclusively:
//!
//! 1. [`Rule::IdIndexed`]: children of `Objects` are filed under
//!    `parent[child.name][id]`, where `id` is the child's first property.
//! 2. [`Rule::PropertyEntry`]: a `P` row inside a `Properties70` table stores
//!    `parent[row[0]] = row[4]` (5+ properties) or `row[3]` (exactly 4).
//! 3. [`Rule::SingleProperty`]: a child with one property and no children of
//!    its own collapses to that value.
//! 4. [`Rule::General`]: the child becomes a nested mapping holding its
//!    property list and its own normalized children.
//!
//! Rule 3 judges by shape alone, so a record that legitimately carries one
//! value and one that wraps a single array look the same.

use crate::property::Property;
use crate::tree::{IdIndex, Node, Record};

/// Name of the container whose children are indexed by identifier
pub const OBJECTS: &str = "Objects";
/// Name of a key/value property table
pub const PROPERTY_TABLE: &str = "Properties70";
/// Name of one row inside a property table
pub const PROPERTY_ENTRY: &str = "P";

/// Normalization rule chosen for a child record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    IdIndexed,
    PropertyEntry,
    SingleProperty,
    General,
}

/// Pick the first rule that applies to `child` under a parent named `parent_name`.
pub fn select_rule(parent_name: &str, child: &Record) -> Rule {
    match (parent_name, child.name.as_str()) {
        (OBJECTS, _) => Rule::IdIndexed,
        (PROPERTY_TABLE, PROPERTY_ENTRY) => Rule::PropertyEntry,
        _ if child.properties.len() == 1 && child.children.is_empty() => Rule::SingleProperty,
        _ => Rule::General,
    }
}

/// Attach a completed child record to its parent.
pub fn attach(parent: &mut Record, child: Record) {
    match select_rule(&parent.name, &child) {
        Rule::IdIndexed => attach_indexed(parent, child),
        Rule::PropertyEntry => attach_property_entry(parent, child),
        Rule::SingleProperty => attach_single(parent, child),
        Rule::General => attach_general(parent, child),
    }
}

fn attach_indexed(parent: &mut Record, child: Record) {
    let Some(id) = child.id_key() else {
        tracing::debug!(name = %child.name, "Dropping object record without identifier");
        return;
    };

    match parent.children.get_mut(&child.name) {
        Some(Node::IdIndexed(index)) => {
            index.insert(id, child);
        }
        _ => {
            let name = child.name.clone();
            let mut index = IdIndex::new();
            index.insert(id, child);
            parent.children.insert(name, Node::IdIndexed(index));
        }
    }
}

fn attach_property_entry(parent: &mut Record, child: Record) {
    let mut row = child.properties;
    let Some(key) = row.first().map(ToString::to_string) else {
        return;
    };
    // Rows are (name, type, subtype, flags, value...)
    let value = match row.len() {
        n if n >= 5 => row.swap_remove(4),
        4 => row.swap_remove(3),
        _ => return,
    };
    parent.children.insert(key, Node::from_property(value));
}

fn attach_single(parent: &mut Record, child: Record) {
    if let Some(value) = child.properties.into_iter().next() {
        parent.children.insert(child.name, Node::from_property(value));
    }
}

fn attach_general(parent: &mut Record, child: Record) {
    // Property-less namesakes merge their children into the existing mapping
    if child.properties.is_empty() {
        match parent.children.get_mut(&child.name) {
            Some(Node::Mapping(existing)) => {
                existing.children.extend(child.children);
                return;
            }
            Some(slot) if matches!(slot, Node::Array(_)) => {
                // Wrap the collapsed array so it stays reachable through `as_array`
                let mut wrapper = Record::new(child.name, Vec::with_capacity(1));
                wrapper.children = child.children;
                if let Node::Array(array) = std::mem::replace(slot, Node::Mapping(wrapper)) {
                    if let Node::Mapping(wrapper) = slot {
                        wrapper.properties.push(Property::Array(array));
                    }
                }
                return;
            }
            _ => {}
        }
    }
    parent.children.insert(child.name.clone(), Node::Mapping(child));
}
