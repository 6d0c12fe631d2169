pub mod config;
pub mod convert;
pub mod error;
pub mod origin;
pub mod parse;
pub mod render;
pub mod swagger12;
pub mod swagger2;

pub use convert::{
    Conversion, DeclarationResolver, Resolution, SkippedReference, convert, convert_value,
};
pub use origin::SourceOrigin;
