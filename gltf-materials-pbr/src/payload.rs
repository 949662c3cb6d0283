use serde::Deserialize;
use serde_json::{Map, Value};

pub const EXTENSION_NAME: &str = "FRAUNHOFER_materials_pbr";

pub(crate) const MODEL_SPECULAR_GLOSSINESS: &str = "PBR_specular_glossiness";
pub(crate) const MODEL_METAL_ROUGHNESS: &str = "PBR_metal_roughness";

/// Untyped field map of the extension block. Presence is the only validity signal;
/// every field is narrowed individually at the workflow boundary.
pub(crate) type FieldMap = Map<String, Value>;

/// The extension block as it appears in the file: a declared material model plus the
/// field map. Either part may be absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPayload {
	#[serde(default)]
	pub material_model: Option<String>,
	#[serde(default)]
	pub values: FieldMap,
}

pub(crate) fn parse_payload(payload: &Value) -> Result<RawPayload, serde_json::Error> {
	RawPayload::deserialize(payload)
}
