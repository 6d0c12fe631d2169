//! Swagger 1.2 documents: the root resource listing and the per-controller
//! API declarations it points at.

pub mod declaration;
pub mod listing;
pub mod model;

pub use declaration::{ApiDeclaration, Endpoint, Operation, Parameter, ResponseMessage};
pub use listing::{ApiReference, ResourceListing};
pub use model::{Model, ModelItems, ModelProperty};
