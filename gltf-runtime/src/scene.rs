use crate::material::pbr::SharedMaterial;
use crate::runtime::MaterialId;
use parking_lot::Mutex;

/// Owns the materials produced during loading. Materials register themselves on
/// construction and live for as long as the scene does.
#[derive(Default)]
pub struct Scene {
	materials: Mutex<Vec<SharedMaterial>>,
}

impl Scene {
	pub(crate) fn add_material(&self, material: SharedMaterial) {
		self.materials.lock().push(material);
	}

	pub fn materials(&self) -> Vec<SharedMaterial> {
		self.materials.lock().clone()
	}

	pub fn material(&self, id: &MaterialId) -> Option<SharedMaterial> {
		self.materials.lock().iter().find(|material| material.lock().id == *id).cloned()
	}
}
