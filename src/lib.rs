//! yadop: documentation models from ngdoc-annotated JavaScript.
//!
//! The pipeline has three stages:
//!
//! - [`processor`] finds source files and turns each `/** */` comment into an
//!   [`AnnotationRecord`] (via [`parser`]).
//! - [`mapper`] rebuilds the Module → Entity → Method tree from the flat,
//!   unordered record list by matching tag values.
//! - [`render`] turns the tree into JSON or markdown.

pub mod error;
pub mod mapper;
pub mod model;
pub mod parser;
pub mod processor;
pub mod record;
pub mod render;

pub use error::MapError;
pub use mapper::map;
pub use model::{Attribute, Entity, Method, Module, ReturnType};
pub use processor::{Configuration, Processor};
pub use record::{AnnotationRecord, Tag, TypeExpression};
