use crate::runtime::MaterialId;
use crate::scene::Scene;
use crate::texture::Texture;
use glam::Vec3;
use parking_lot::Mutex;
use std::sync::Arc;

/// A material is exclusively owned by the resolving call during the synchronous phase,
/// then becomes a shared mutation target for the pending texture completions.
pub type SharedMaterial = Arc<Mutex<PbrMaterial>>;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SideOrientation {
	#[default]
	Clockwise,
	CounterClockwise,
}

/// A bump texture and its intensity level as one slot, so the level can never be
/// applied to a texture that is not set yet.
#[derive(Clone, Debug, PartialEq)]
pub struct BumpTexture {
	pub texture: Texture,
	pub level: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PbrMaterial {
	pub id: MaterialId,
	pub side_orientation: SideOrientation,

	pub albedo_color: Vec3,
	pub alpha: f32,
	pub albedo_texture: Option<Texture>,
	pub use_alpha_from_albedo_texture: bool,

	pub reflectivity_color: Vec3,
	pub reflectivity_texture: Option<Texture>,
	pub use_micro_surface_from_reflectivity_map_alpha: bool,
	pub micro_surface: f32,

	pub metallic: Option<f32>,
	pub roughness: Option<f32>,
	pub metallic_texture: Option<Texture>,
	pub use_roughness_from_metallic_texture_alpha: bool,
	pub use_roughness_from_metallic_texture_green: bool,

	pub bump_texture: Option<BumpTexture>,

	pub ambient_texture: Option<Texture>,
	pub ambient_texture_strength: f32,

	pub emissive_color: Vec3,
	pub emissive_texture: Option<Texture>,
	pub use_emissive_as_illumination: bool,
}

impl PbrMaterial {
	/// Creates a material with engine defaults and registers it with the scene.
	pub fn new(id: MaterialId, scene: &Scene) -> SharedMaterial {
		let material = Arc::new(Mutex::new(Self {
			id,
			side_orientation: SideOrientation::default(),
			albedo_color: Vec3::ONE,
			alpha: 1.,
			albedo_texture: None,
			use_alpha_from_albedo_texture: false,
			reflectivity_color: Vec3::ONE,
			reflectivity_texture: None,
			use_micro_surface_from_reflectivity_map_alpha: false,
			micro_surface: 0.9,
			metallic: None,
			roughness: None,
			metallic_texture: None,
			use_roughness_from_metallic_texture_alpha: true,
			use_roughness_from_metallic_texture_green: false,
			bump_texture: None,
			ambient_texture: None,
			ambient_texture_strength: 1.,
			emissive_color: Vec3::ZERO,
			emissive_texture: None,
			use_emissive_as_illumination: false,
		}));
		scene.add_material(material.clone());
		material
	}
}
