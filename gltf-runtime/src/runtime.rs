use crate::diagnostics::{DiagnosticSink, LogDiagnostics};
use crate::scene::Scene;
use crate::texture::{LoadTexture, Texture, TextureId, TextureLoadError};
use futures::executor::LocalSpawner;
use futures::future::LocalBoxFuture;
use futures::task::{LocalSpawnExt, SpawnError};
use rustc_hash::FxHashMap;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(pub String);

impl MaterialId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for MaterialId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for MaterialId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

/// A material as produced by the file parser: the base-schema fields reduced to a name,
/// plus the vendor extension blocks keyed by extension name. Both the map and any entry
/// in it may be absent.
#[derive(Clone, Debug, Default)]
pub struct MaterialRecord {
	pub name: Option<String>,
	pub extensions: Option<FxHashMap<String, Value>>,
}

impl MaterialRecord {
	/// Raw payload of the named extension block, or `None` when the record has no
	/// extensions map or the map has no such entry. Absence is a normal outcome.
	pub fn extension(&self, name: &str) -> Option<&Value> {
		self.extensions.as_ref()?.get(name)
	}
}

/// Loader-side state handed through to extensions: the owning scene, the parsed material
/// records, the texture loader and the diagnostics sink, plus the spawner that texture
/// completions run on. Single-threaded; completions interleave only at await points.
pub struct GltfRuntime {
	pub scene: Arc<Scene>,
	materials: FxHashMap<MaterialId, MaterialRecord>,
	texture_loader: Arc<dyn LoadTexture>,
	diagnostics: Arc<dyn DiagnosticSink>,
	spawner: LocalSpawner,
}

impl GltfRuntime {
	pub fn new(texture_loader: Arc<dyn LoadTexture>, spawner: LocalSpawner) -> Self {
		Self {
			scene: Arc::new(Scene::default()),
			materials: FxHashMap::default(),
			texture_loader,
			diagnostics: Arc::new(LogDiagnostics),
			spawner,
		}
	}

	pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
		self.diagnostics = diagnostics;
		self
	}

	pub fn insert_material(&mut self, id: MaterialId, record: MaterialRecord) {
		self.materials.insert(id, record);
	}

	pub fn material(&self, id: &MaterialId) -> Option<&MaterialRecord> {
		self.materials.get(id)
	}

	pub fn diagnostics(&self) -> &Arc<dyn DiagnosticSink> {
		&self.diagnostics
	}

	pub fn load_texture(&self, texture: &TextureId) -> LocalBoxFuture<'static, Result<Texture, TextureLoadError>> {
		self.texture_loader.load_texture(self, texture)
	}

	pub fn spawn(&self, future: impl Future<Output = ()> + 'static) -> Result<(), SpawnError> {
		self.spawner.spawn_local(future)
	}
}
