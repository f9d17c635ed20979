//! Parent/child association by tag value.
//!
//! Records carry no parent pointers. A record belongs to module `M` when one
//! of its `@module` tags names `M`, and is a method of entity `E` when one of
//! its `@methodOf` tags has `E` as description. Names that match nothing are
//! dropped silently.

use super::tags;
use crate::record::AnnotationRecord;
use std::collections::HashMap;

/// `@ngdoc module`
pub fn is_module_declaration(record: &AnnotationRecord) -> bool {
    record.has(tags::is_module_kind)
}

pub fn is_method_record(record: &AnnotationRecord) -> bool {
    record.has(tags::is_method_kind)
}

pub fn belongs_to_module(record: &AnnotationRecord, module: &str) -> bool {
    record
        .tags
        .iter()
        .filter(|t| tags::is_module(t))
        .any(|t| t.name.as_deref() == Some(module))
}

pub fn is_method_of(record: &AnnotationRecord, entity: &str) -> bool {
    record
        .tags
        .iter()
        .filter(|t| tags::is_method_of(t))
        .any(|t| t.description.as_deref() == Some(entity))
}

/// Name-indexed join over a record list.
///
/// Answers the same questions as [`belongs_to_module`] / [`is_method_of`]
/// without a full scan per lookup. Each bucket holds record positions in
/// input order, so filtered results keep the input ordering.
#[derive(Debug, Default)]
pub struct RecordIndex<'a> {
    by_module: HashMap<&'a str, Vec<usize>>,
    by_owner: HashMap<&'a str, Vec<usize>>,
}

impl<'a> RecordIndex<'a> {
    pub fn build(records: &'a [AnnotationRecord]) -> Self {
        let mut index = RecordIndex::default();
        for (pos, record) in records.iter().enumerate() {
            for tag in &record.tags {
                if tags::is_module(tag) {
                    if let Some(name) = tag.name.as_deref() {
                        push_once(index.by_module.entry(name).or_default(), pos);
                    }
                } else if tags::is_method_of(tag) {
                    if let Some(owner) = tag.description.as_deref() {
                        push_once(index.by_owner.entry(owner).or_default(), pos);
                    }
                }
            }
        }
        index
    }

    /// Positions of records referencing `module` via `@module`.
    pub fn module_members(&self, module: &str) -> &[usize] {
        self.by_module.get(module).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Positions of records referencing `entity` via `@methodOf`.
    pub fn methods_of(&self, entity: &str) -> &[usize] {
        self.by_owner.get(entity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every referenced module name with its referencing records, unordered.
    pub fn module_refs(&self) -> impl Iterator<Item = (&'a str, &[usize])> + '_ {
        self.by_module.iter().map(|(name, pos)| (*name, pos.as_slice()))
    }

    /// Every `@methodOf` owner name with its referencing records, unordered.
    pub fn owner_refs(&self) -> impl Iterator<Item = (&'a str, &[usize])> + '_ {
        self.by_owner.iter().map(|(name, pos)| (*name, pos.as_slice()))
    }
}

// A record may repeat the same reference; it still counts once.
fn push_once(bucket: &mut Vec<usize>, pos: usize) {
    if bucket.last() != Some(&pos) {
        bucket.push(pos);
    }
}
