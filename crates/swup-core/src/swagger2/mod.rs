//! Swagger 2.0 output document.

pub mod operation;
pub mod schema;
pub mod spec;

pub use operation::{Operation, Parameter, Response};
pub use schema::{Definition, Items, Property, SchemaRef};
pub use spec::{SwaggerDoc, Tag};
