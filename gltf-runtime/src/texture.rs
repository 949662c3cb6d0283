use crate::runtime::GltfRuntime;
use futures::future::LocalBoxFuture;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub String);

impl TextureId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for TextureId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for TextureId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

/// Handle to a loaded texture, produced by the runtime's [`LoadTexture`] implementation.
/// Opaque to material resolution, which only stores it into material slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
	pub source: TextureId,
}

#[derive(Debug, Error)]
pub enum TextureLoadError {
	#[error("texture '{0}' does not exist")]
	UnknownTexture(TextureId),
	#[error("texture '{texture}' failed to load: {reason}")]
	LoadFailed { texture: TextureId, reason: String },
}

/// Asynchronous texture loading primitive. The returned future resolves exactly once,
/// with either the loaded texture or an error, at an arbitrary later time.
pub trait LoadTexture {
	fn load_texture(
		&self,
		runtime: &GltfRuntime,
		texture: &TextureId,
	) -> LocalBoxFuture<'static, Result<Texture, TextureLoadError>>;
}
