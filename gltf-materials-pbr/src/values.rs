use crate::payload::{EXTENSION_NAME, FieldMap};
use glam::Vec3;
use gltf_runtime::{DiagnosticSink, MaterialId, TextureId};

/// Fields shared by both material models. Applied by the common-property merger after
/// the workflow-specific fields.
#[derive(Debug)]
pub(crate) struct CommonValues {
	pub normal_texture: Option<TextureId>,
	pub normal_scale: Option<f32>,
	pub occlusion_texture: Option<TextureId>,
	pub occlusion_strength: Option<f32>,
	pub emission_factor: Option<Vec3>,
	pub emission_texture: Option<TextureId>,
}

#[derive(Debug)]
pub(crate) struct SpecularGlossinessValues {
	pub diffuse_factor: Option<(Vec3, f32)>,
	pub diffuse_texture: Option<TextureId>,
	pub specular_factor: Option<Vec3>,
	pub glossiness_factor: Option<f32>,
	pub specular_glossiness_texture: Option<TextureId>,
	pub common: CommonValues,
}

#[derive(Debug)]
pub(crate) struct MetalRoughnessValues {
	pub base_color_factor: Option<(Vec3, f32)>,
	pub base_color_texture: Option<TextureId>,
	pub metallic_factor: Option<f32>,
	pub roughness_factor: Option<f32>,
	pub metallic_roughness_texture: Option<TextureId>,
	pub common: CommonValues,
}

/// One workflow's worth of narrowed values, selected by the payload discriminator.
#[derive(Debug)]
pub(crate) enum WorkflowValues {
	SpecularGlossiness(SpecularGlossinessValues),
	MetalRoughness(MetalRoughnessValues),
}

impl WorkflowValues {
	pub fn common(&self) -> &CommonValues {
		match self {
			WorkflowValues::SpecularGlossiness(values) => &values.common,
			WorkflowValues::MetalRoughness(values) => &values.common,
		}
	}
}

/// Narrows the untyped field map one field at a time. A field of the wrong shape is
/// reported as a warning and skipped, leaving the rest of the payload usable.
pub(crate) struct FieldReader<'a> {
	fields: &'a FieldMap,
	material: &'a MaterialId,
	diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> FieldReader<'a> {
	pub fn new(fields: &'a FieldMap, material: &'a MaterialId, diagnostics: &'a dyn DiagnosticSink) -> Self {
		Self {
			fields,
			material,
			diagnostics,
		}
	}

	fn skip(&self, field: &str, expected: &str) {
		self.diagnostics.warning(&format!(
			"{EXTENSION_NAME} of material '{}': field '{field}' is not {expected}, skipping",
			self.material
		));
	}

	pub fn number(&self, field: &str) -> Option<f32> {
		let value = self.fields.get(field)?;
		match value.as_f64() {
			Some(number) => Some(number as f32),
			None => {
				self.skip(field, "a number");
				None
			}
		}
	}

	pub fn texture(&self, field: &str) -> Option<TextureId> {
		let value = self.fields.get(field)?;
		match value.as_str() {
			Some(id) => Some(TextureId::new(id)),
			None => {
				self.skip(field, "a texture id string");
				None
			}
		}
	}

	fn numbers<const N: usize>(&self, field: &str) -> Option<[f32; N]> {
		let value = self.fields.get(field)?;
		let array = match value.as_array() {
			Some(array) if array.len() == N => array,
			_ => {
				self.skip(field, &format!("an array of {} numbers", N));
				return None;
			}
		};
		let mut out = [0.; N];
		for (slot, value) in out.iter_mut().zip(array) {
			match value.as_f64() {
				Some(number) => *slot = number as f32,
				None => {
					self.skip(field, &format!("an array of {} numbers", N));
					return None;
				}
			}
		}
		Some(out)
	}

	pub fn rgb(&self, field: &str) -> Option<Vec3> {
		self.numbers::<3>(field).map(Vec3::from)
	}

	pub fn rgba(&self, field: &str) -> Option<(Vec3, f32)> {
		self.numbers::<4>(field).map(|[r, g, b, a]| (Vec3::new(r, g, b), a))
	}
}

impl CommonValues {
	pub fn read(reader: &FieldReader) -> Self {
		Self {
			normal_texture: reader.texture("normalTexture"),
			normal_scale: reader.number("normalScale"),
			occlusion_texture: reader.texture("occlusionTexture"),
			occlusion_strength: reader.number("occlusionStrength"),
			emission_factor: reader.rgb("emissionFactor"),
			emission_texture: reader.texture("emissionTexture"),
		}
	}
}

impl SpecularGlossinessValues {
	pub fn read(reader: &FieldReader) -> Self {
		Self {
			diffuse_factor: reader.rgba("diffuseFactor"),
			diffuse_texture: reader.texture("diffuseTexture"),
			specular_factor: reader.rgb("specularFactor"),
			glossiness_factor: reader.number("glossinessFactor"),
			specular_glossiness_texture: reader.texture("specularGlossinessTexture"),
			common: CommonValues::read(reader),
		}
	}
}

impl MetalRoughnessValues {
	pub fn read(reader: &FieldReader) -> Self {
		Self {
			base_color_factor: reader.rgba("baseColorFactor"),
			base_color_texture: reader.texture("baseColorTexture"),
			metallic_factor: reader.number("metallicFactor"),
			roughness_factor: reader.number("roughnessFactor"),
			metallic_roughness_texture: reader.texture("metallicRoughnessTexture"),
			common: CommonValues::read(reader),
		}
	}
}
