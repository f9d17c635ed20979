//! Mapper: rebuilds the Module → Entity → Method tree from flat records.
//!
//! Every operation is a pure function of the record list: modules, entities
//! and methods come out in the order their qualifying records appear.

pub mod binding;
pub mod resolve;
pub mod tags;
pub mod types;

use crate::error::MapError;
use crate::model::{Attribute, BaseEntity, Entity, Method, Module, ReturnType};
use crate::record::{AnnotationRecord, Tag};
use resolve::RecordIndex;
use tracing::{debug, trace};

/// How an entity kind turns its `@param` tags into attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeStrategy {
    Plain,
    /// Plain, then the binding operator is moved out of the description.
    Binding,
}

/// Kinds with non-default attribute extraction. Anything else is plain.
const ATTRIBUTE_STRATEGIES: &[(&str, AttributeStrategy)] =
    &[("component", AttributeStrategy::Binding)];

pub fn attribute_strategy(kind: &str) -> AttributeStrategy {
    ATTRIBUTE_STRATEGIES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, strategy)| *strategy)
        .unwrap_or(AttributeStrategy::Plain)
}

/// Build the complete documentation tree.
pub fn map(records: &[AnnotationRecord]) -> Result<Vec<Module>, MapError> {
    let index = RecordIndex::build(records);
    let mut modules = get_modules(records)?;

    for module in &mut modules {
        let members = index
            .module_members(&module.name)
            .iter()
            .map(|&pos| &records[pos])
            .filter(|r| !resolve::is_module_declaration(r));
        module.entities = members.map(to_entity).collect::<Result<_, _>>()?;

        for entity in &mut module.entities {
            let methods = index
                .methods_of(&entity.name)
                .iter()
                .map(|&pos| &records[pos])
                .filter(|r| resolve::is_method_record(r));
            entity.methods = methods.map(to_method).collect::<Result<_, _>>()?;
        }
        debug!(
            module = %module.name,
            entities = module.entities.len(),
            "mapped module"
        );
    }

    trace_dangling(&index, &modules);
    Ok(modules)
}

fn trace_dangling(index: &RecordIndex<'_>, modules: &[Module]) {
    for (name, positions) in index.module_refs() {
        if !modules.iter().any(|m| m.name == name) {
            trace!(
                module = name,
                records = positions.len(),
                "dangling @module reference dropped"
            );
        }
    }
    for (owner, positions) in index.owner_refs() {
        let known = modules
            .iter()
            .flat_map(|m| &m.entities)
            .any(|e| e.name == owner);
        if !known {
            trace!(
                entity = owner,
                records = positions.len(),
                "dangling @methodOf reference dropped"
            );
        }
    }
}

/// All `@ngdoc module` records, as modules without entities.
pub fn get_modules(records: &[AnnotationRecord]) -> Result<Vec<Module>, MapError> {
    records
        .iter()
        .filter(|r| resolve::is_module_declaration(r))
        .map(|r| to_base(r, "module").map(Module::from))
        .collect()
}

/// Entities of `module`, without methods.
pub fn get_entities(records: &[AnnotationRecord], module: &Module) -> Result<Vec<Entity>, MapError> {
    records
        .iter()
        .filter(|r| resolve::belongs_to_module(r, &module.name))
        .filter(|r| !resolve::is_module_declaration(r))
        .map(to_entity)
        .collect()
}

/// Methods of `entity`. A `@methodOf` reference only counts on a record that
/// is itself method-shaped.
pub fn get_methods(records: &[AnnotationRecord], entity: &Entity) -> Result<Vec<Method>, MapError> {
    records
        .iter()
        .filter(|r| resolve::is_method_of(r, &entity.name))
        .filter(|r| resolve::is_method_record(r))
        .map(to_method)
        .collect()
}

/// Name, description and deprecation shared by every documented item.
pub fn to_base(record: &AnnotationRecord, kind: &'static str) -> Result<BaseEntity, MapError> {
    let name = record
        .find(tags::is_name)
        .and_then(|t| t.name.clone())
        .ok_or_else(|| MapError::MissingRequiredTag {
            kind,
            tag: "name",
            context: record.context(),
        })?;

    Ok(BaseEntity {
        name,
        description: record
            .find(tags::is_description)
            .and_then(|t| t.description.clone()),
        // A bare `@deprecated` still marks the item, with an empty reason.
        deprecated: record
            .find(tags::is_deprecated)
            .map(|t| t.description.clone().unwrap_or_default()),
    })
}

fn to_entity(record: &AnnotationRecord) -> Result<Entity, MapError> {
    let base = to_base(record, "entity")?;
    let kind = record
        .find(tags::is_kind)
        .and_then(|t| t.description.clone())
        .unwrap_or_default();

    let attributes = match attribute_strategy(&kind) {
        AttributeStrategy::Plain => attributes(record).collect(),
        AttributeStrategy::Binding => attributes(record).map(binding::extract_binding).collect(),
    };

    let requires = record
        .tags
        .iter()
        .filter(|t| tags::is_requires(t))
        .filter_map(|t| t.name.clone())
        .collect();

    Ok(Entity {
        name: base.name,
        description: base.description,
        deprecated: base.deprecated,
        kind,
        attributes,
        requires,
        methods: Vec::new(),
    })
}

fn to_method(record: &AnnotationRecord) -> Result<Method, MapError> {
    let mut method = Method::from(to_base(record, "method")?);
    method.returns = record.find(tags::is_returns).map(to_return);
    method.params = attributes(record).collect();
    Ok(method)
}

fn to_return(tag: &Tag) -> ReturnType {
    ReturnType {
        name: tag
            .description
            .as_deref()
            .map(binding::strip_leading_breaks)
            .unwrap_or_default(),
        ty: types::normalize(tag.ty.as_ref()).name,
    }
}

fn attributes(record: &AnnotationRecord) -> impl Iterator<Item = Attribute> + '_ {
    record
        .tags
        .iter()
        .filter(|t| tags::is_param(t))
        .map(to_attribute)
}

/// Plain attribute from a `@param` tag.
pub fn to_attribute(tag: &Tag) -> Attribute {
    let ty = types::normalize(tag.ty.as_ref());
    Attribute {
        name: tag.name.clone().unwrap_or_default(),
        description: tag.description.as_deref().map(binding::strip_leading_breaks),
        optional: ty.optional,
        ty: ty.name,
        default_value: tag.default.clone(),
        binding: None,
    }
}
