use gltf_runtime::{GltfRuntime, MaterialId, PbrMaterial, SharedMaterial, Texture, TextureId};
use std::future::Future;

/// Issues one asynchronous texture load and fires it off on the runtime's spawner.
/// The load failing or the spawner having shut down costs only this one slot; the
/// containing material resolution has already returned.
pub(crate) fn bind_texture(
	runtime: &GltfRuntime,
	material_id: &MaterialId,
	texture_id: &TextureId,
	material: &SharedMaterial,
	apply: impl FnOnce(&mut PbrMaterial, Texture) + 'static,
) {
	let future = texture_bind(runtime, material_id, texture_id, material.clone(), apply);
	if let Err(err) = runtime.spawn(future) {
		runtime.diagnostics().error(&format!(
			"PBR material texture load could not be scheduled. material=\"{material_id}\", texture=\"{texture_id}\": {err}"
		));
	}
}

/// One independently awaitable bind: the texture load followed by the slot mutation.
/// Kept separate from spawning so a batching or cancellation layer can hold the future
/// instead.
fn texture_bind(
	runtime: &GltfRuntime,
	material_id: &MaterialId,
	texture_id: &TextureId,
	material: SharedMaterial,
	apply: impl FnOnce(&mut PbrMaterial, Texture) + 'static,
) -> impl Future<Output = ()> + 'static {
	let load = runtime.load_texture(texture_id);
	let diagnostics = runtime.diagnostics().clone();
	let material_id = material_id.clone();
	let texture_id = texture_id.clone();
	async move {
		match load.await {
			Ok(texture) => apply(&mut material.lock(), texture),
			Err(err) => diagnostics.error(&format!(
				"PBR material texture failed to load. material=\"{material_id}\", texture=\"{texture_id}\": {err}"
			)),
		}
	}
}
