use crate::bind::bind_texture;
use crate::error::MaterialsPbrError;
use crate::payload::{EXTENSION_NAME, MODEL_METAL_ROUGHNESS, MODEL_SPECULAR_GLOSSINESS, parse_payload};
use crate::values::{
	CommonValues, FieldReader, MetalRoughnessValues, SpecularGlossinessValues, WorkflowValues,
};
use gltf_runtime::{
	BumpTexture, ExtensionError, ExtensionRegistry, GltfRuntime, LoaderExtension, MaterialId, PbrMaterial,
	SharedMaterial, SideOrientation,
};
use serde_json::Value;

/// Revisions of the extension schema seen in the wild. Earlier files only declared the
/// specular-glossiness model; the metal-roughness workflow arrived in a later revision.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SchemaRevision {
	SpecularGlossinessOnly,
	#[default]
	MetalRoughness,
}

impl SchemaRevision {
	fn supports_metal_roughness(self) -> bool {
		match self {
			SchemaRevision::SpecularGlossinessOnly => false,
			SchemaRevision::MetalRoughness => true,
		}
	}
}

pub struct MaterialsPbrExtension {
	schema: SchemaRevision,
}

impl Default for MaterialsPbrExtension {
	fn default() -> Self {
		Self::new()
	}
}

impl MaterialsPbrExtension {
	pub fn new() -> Self {
		Self::with_schema(SchemaRevision::default())
	}

	pub fn with_schema(schema: SchemaRevision) -> Self {
		Self { schema }
	}

	/// Advertises this extension to the loader's registry.
	pub fn register(registry: &mut ExtensionRegistry) {
		registry.register(Box::new(Self::new()));
	}

	#[profiling::function]
	fn resolve(&self, runtime: &GltfRuntime, id: &MaterialId, payload: &Value) -> Result<SharedMaterial, MaterialsPbrError> {
		let payload = match parse_payload(payload) {
			Ok(payload) => payload,
			Err(source) => {
				let err = MaterialsPbrError::InvalidPayload {
					extension: EXTENSION_NAME,
					material: id.clone(),
					source,
				};
				runtime.diagnostics().error(&err.to_string());
				return Err(err);
			}
		};

		let reader = FieldReader::new(&payload.values, id, runtime.diagnostics().as_ref());
		let values = match payload.material_model.as_deref() {
			Some(MODEL_SPECULAR_GLOSSINESS) => {
				WorkflowValues::SpecularGlossiness(SpecularGlossinessValues::read(&reader))
			}
			Some(MODEL_METAL_ROUGHNESS) if self.schema.supports_metal_roughness() => {
				WorkflowValues::MetalRoughness(MetalRoughnessValues::read(&reader))
			}
			model => {
				let err = MaterialsPbrError::UnsupportedMaterialModel {
					extension: EXTENSION_NAME,
					material: id.clone(),
					model: model.unwrap_or_default().to_owned(),
				};
				runtime.diagnostics().error(&err.to_string());
				return Err(err);
			}
		};

		Ok(resolve_material(runtime, id, values))
	}
}

impl LoaderExtension for MaterialsPbrExtension {
	fn name(&self) -> &str {
		EXTENSION_NAME
	}

	fn load_material(&self, runtime: &GltfRuntime, id: &MaterialId) -> Option<Result<SharedMaterial, ExtensionError>> {
		let payload = runtime.material(id)?.extension(EXTENSION_NAME)?;
		Some(self.resolve(runtime, id, payload).map_err(ExtensionError::new))
	}
}

/// Allocates the target material and applies the workflow's fields, then the fields
/// shared by both workflows. Returns synchronously; texture slots fill in later.
fn resolve_material(runtime: &GltfRuntime, id: &MaterialId, values: WorkflowValues) -> SharedMaterial {
	let material = PbrMaterial::new(id.clone(), &runtime.scene);
	// the source convention winds faces the other way around than the engine default
	material.lock().side_orientation = SideOrientation::CounterClockwise;

	match &values {
		WorkflowValues::SpecularGlossiness(values) => apply_specular_glossiness(runtime, id, &material, values),
		WorkflowValues::MetalRoughness(values) => apply_metal_roughness(runtime, id, &material, values),
	}
	apply_common_properties(runtime, id, &material, values.common());
	material
}

fn apply_specular_glossiness(
	runtime: &GltfRuntime,
	id: &MaterialId,
	material: &SharedMaterial,
	values: &SpecularGlossinessValues,
) {
	{
		let mut material = material.lock();
		if let Some((rgb, alpha)) = values.diffuse_factor {
			material.albedo_color = rgb;
			material.alpha = alpha;
		}
		if let Some(rgb) = values.specular_factor {
			material.reflectivity_color = rgb;
		}
		// glossiness always lands, 1 when the file omits it
		material.micro_surface = values.glossiness_factor.unwrap_or(1.);
	}

	if let Some(texture_id) = &values.diffuse_texture {
		bind_texture(runtime, id, texture_id, material, |material, texture| {
			material.albedo_texture = Some(texture);
			material.use_alpha_from_albedo_texture = true;
		});
	}
	if let Some(texture_id) = &values.specular_glossiness_texture {
		bind_texture(runtime, id, texture_id, material, |material, texture| {
			material.reflectivity_texture = Some(texture);
			material.use_micro_surface_from_reflectivity_map_alpha = true;
		});
	}
}

fn apply_metal_roughness(
	runtime: &GltfRuntime,
	id: &MaterialId,
	material: &SharedMaterial,
	values: &MetalRoughnessValues,
) {
	{
		let mut material = material.lock();
		if let Some((rgb, alpha)) = values.base_color_factor {
			material.albedo_color = rgb;
			material.alpha = alpha;
		}
		if let Some(metallic) = values.metallic_factor {
			material.metallic = Some(metallic);
		}
		if let Some(roughness) = values.roughness_factor {
			material.roughness = Some(roughness);
		}
	}

	if let Some(texture_id) = &values.base_color_texture {
		bind_texture(runtime, id, texture_id, material, |material, texture| {
			material.albedo_texture = Some(texture);
			material.use_alpha_from_albedo_texture = true;
		});
	}
	if let Some(texture_id) = &values.metallic_roughness_texture {
		bind_texture(runtime, id, texture_id, material, |material, texture| {
			material.metallic_texture = Some(texture);
			// roughness sits in the green channel here, not in alpha
			material.use_roughness_from_metallic_texture_alpha = false;
			material.use_roughness_from_metallic_texture_green = true;
		});
	}
}

/// Properties shared by both workflows. Every write is a direct assignment, so applying
/// the same values twice ends in the same state.
pub(crate) fn apply_common_properties(
	runtime: &GltfRuntime,
	id: &MaterialId,
	material: &SharedMaterial,
	values: &CommonValues,
) {
	{
		let mut material = material.lock();
		material.use_emissive_as_illumination = true;
		if let Some(rgb) = values.emission_factor {
			material.emissive_color = rgb;
		}
	}

	if let Some(texture_id) = &values.normal_texture {
		let level = values.normal_scale.unwrap_or(1.);
		bind_texture(runtime, id, texture_id, material, move |material, texture| {
			material.bump_texture = Some(BumpTexture { texture, level });
		});
	}
	if let Some(texture_id) = &values.occlusion_texture {
		let strength = values.occlusion_strength;
		bind_texture(runtime, id, texture_id, material, move |material, texture| {
			material.ambient_texture = Some(texture);
			if let Some(strength) = strength {
				material.ambient_texture_strength = strength;
			}
		});
	}
	if let Some(texture_id) = &values.emission_texture {
		bind_texture(runtime, id, texture_id, material, |material, texture| {
			material.emissive_texture = Some(texture);
		});
	}
}
