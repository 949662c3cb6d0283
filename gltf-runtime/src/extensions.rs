use crate::material::pbr::SharedMaterial;
use crate::runtime::{GltfRuntime, MaterialId};
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};

/// Error from an extension that claimed a material but could not resolve it.
#[derive(Debug)]
pub struct ExtensionError(Box<dyn std::error::Error + Send + Sync>);

impl ExtensionError {
	pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
		Self(Box::new(err))
	}

	pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
		&*self.0
	}
}

impl Display for ExtensionError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl std::error::Error for ExtensionError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.0.source()
	}
}

/// A vendor extension hooked into material loading.
pub trait LoaderExtension {
	fn name(&self) -> &str;

	/// `None` means the extension is not present on this material and other extensions
	/// should be tried. `Some` means the extension claims the material: `Ok` carries the
	/// resolved material, `Err` a resolution failure. Textures may still be loading when
	/// this returns.
	fn load_material(&self, runtime: &GltfRuntime, id: &MaterialId) -> Option<Result<SharedMaterial, ExtensionError>>;
}

#[derive(Default)]
pub struct ExtensionRegistry {
	extensions: SmallVec<[Box<dyn LoaderExtension>; 2]>,
}

impl ExtensionRegistry {
	pub fn register(&mut self, extension: Box<dyn LoaderExtension>) {
		self.extensions.push(extension);
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.extensions.iter().map(|extension| extension.name())
	}

	/// Offers the material to every registered extension in registration order. The first
	/// extension that claims it decides the outcome; `None` if no extension applies.
	pub fn load_material(&self, runtime: &GltfRuntime, id: &MaterialId) -> Option<Result<SharedMaterial, ExtensionError>> {
		self.extensions.iter().find_map(|extension| extension.load_material(runtime, id))
	}
}
