use gltf_runtime::MaterialId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterialsPbrError {
	#[error("{extension} of material '{material}' specifies an unsupported material model '{model}'")]
	UnsupportedMaterialModel {
		extension: &'static str,
		material: MaterialId,
		model: String,
	},
	#[error("{extension} of material '{material}' carries a malformed extension block: {source}")]
	InvalidPayload {
		extension: &'static str,
		material: MaterialId,
		source: serde_json::Error,
	},
}
