//! Resolves the versioned `FRAUNHOFER_materials_pbr` extension block on glTF materials
//! into renderer PBR materials, dispatching on the declared material model and binding
//! textures as independent asynchronous loads.

mod bind;
mod error;
mod payload;
mod resolve;
mod values;


pub use error::MaterialsPbrError;
pub use payload::EXTENSION_NAME;
pub use resolve::{MaterialsPbrExtension, SchemaRevision};
