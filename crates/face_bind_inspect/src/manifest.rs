use std::future::Future;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use face_bind::{BlendShapeSource, MeshResolver};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeshManifestDto {
    pub blend_shapes: Vec<Option<String>>,
    #[serde(default)]
    pub weight_slots: Option<usize>,
}

/// Blend shape names of one mesh, in morph target order.
#[derive(Debug, Clone)]
pub struct MeshManifest {
    pub names: Vec<Option<String>>,
    pub weight_slots: usize,
}

impl MeshManifest {
    pub fn from_slice(src: &[u8]) -> anyhow::Result<MeshManifest> {
        let dto = serde_json::from_slice::<MeshManifestDto>(src)?;
        let weight_slots = dto.weight_slots.unwrap_or(dto.blend_shapes.len());
        Ok(Self {
            names: dto.blend_shapes,
            weight_slots,
        })
    }
}

impl BlendShapeSource for MeshManifest {
    fn blend_shape_names(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.names.iter().map(|n| n.as_deref())
    }

    fn weight_slot_count(&self) -> usize {
        self.weight_slots
    }
}

/// Loads manifests from disk.
#[derive(Debug, Default)]
pub struct ManifestFiles {
    pub weight_slots: Option<usize>,
}

impl MeshResolver for ManifestFiles {
    type Reference = Path;
    type Handle = PathBuf;
    type Loaded = MeshManifest;

    fn resolve_mesh(&self, reference: &Path) -> Option<PathBuf> {
        reference.is_file().then(|| reference.to_owned())
    }

    fn await_asset_load(&self, handle: &PathBuf) -> impl Future<Output = Option<MeshManifest>> {
        let path = handle.clone();
        let weight_slots = self.weight_slots;
        async move {
            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!("failed to read {}: {}", path.display(), err);
                    return None;
                }
            };
            match MeshManifest::from_slice(&bytes) {
                Ok(mut manifest) => {
                    if let Some(weight_slots) = weight_slots {
                        manifest.weight_slots = weight_slots;
                    }
                    Some(manifest)
                }
                Err(err) => {
                    warn!("invalid manifest {}: {}", path.display(), err);
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_nulls() {
        let manifest = MeshManifest::from_slice(br#"{"blendShapes": ["JawOpen", null, "EyeWideLeft"]}"#).unwrap();
        let names: Vec<_> = manifest.blend_shape_names().collect();
        assert_eq!(names, [Some("JawOpen"), None, Some("EyeWideLeft")]);
        assert_eq!(manifest.weight_slot_count(), 3);
    }

    #[test]
    fn explicit_weight_slots() {
        let manifest = MeshManifest::from_slice(br#"{"blendShapes": ["JawOpen"], "weightSlots": 0}"#).unwrap();
        assert_eq!(manifest.weight_slot_count(), 0);
    }

    #[test]
    fn rejects_malformed_manifest() {
        assert!(MeshManifest::from_slice(br#"{"shapes": []}"#).is_err());
    }
}
