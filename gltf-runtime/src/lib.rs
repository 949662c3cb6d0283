pub mod diagnostics;
pub mod extensions;
pub mod material;
pub mod runtime;
pub mod scene;
pub mod texture;

pub use diagnostics::{BufferedDiagnostics, DiagnosticSink, LogDiagnostics};
pub use extensions::{ExtensionError, ExtensionRegistry, LoaderExtension};
pub use material::pbr::{BumpTexture, PbrMaterial, SharedMaterial, SideOrientation};
pub use runtime::{GltfRuntime, MaterialId, MaterialRecord};
pub use scene::Scene;
pub use texture::{LoadTexture, Texture, TextureId, TextureLoadError};
