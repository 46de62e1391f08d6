//! Resolving bindings against the blend shapes a mesh actually has.

use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

use crate::bindings::{Binding, ShapeRef};
use crate::classify::{Convention, ConventionSignatures};
use crate::expression::AvatarExpression;

/// Exact-match lookup from blend shape name to morph target slot.
#[derive(Clone, Debug, Default)]
pub struct BlendShapeIndex {
    slots: HashMap<String, usize>,
}

impl BlendShapeIndex {
    /// Builds the index from a mesh's morph target names in slot order.
    /// Missing names are skipped; a repeated name keeps its last slot.
    pub fn from_names<'a>(names: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        let mut slots = HashMap::new();
        for (slot, name) in names.into_iter().enumerate() {
            if let Some(name) = name {
                slots.insert(name.to_owned(), slot);
            }
        }
        Self { slots }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Why a binding did not produce a link.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum SkipReason {
    Ignored,
    Todo,
    Unavailable,
    MissingShape,
    #[serde(rename_all = "camelCase")]
    OutOfRange { slot: usize, weight_slots: usize },
}

/// Finds the weight slot `shape` refers to, or why there is none.
pub fn explain(shape: &ShapeRef, index: &BlendShapeIndex, weight_slots: usize) -> Result<usize, SkipReason> {
    let name = match shape {
        ShapeRef::Shape(shape) => shape.name(),
        ShapeRef::Ignore => return Err(SkipReason::Ignored),
        ShapeRef::Todo => return Err(SkipReason::Todo),
        ShapeRef::Unavailable => return Err(SkipReason::Unavailable),
    };
    let slot = index.get(&name).ok_or(SkipReason::MissingShape)?;
    if slot >= weight_slots {
        return Err(SkipReason::OutOfRange { slot, weight_slots });
    }
    Ok(slot)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBinding {
    pub expression: AvatarExpression,
    pub slot: usize,
}

/// Resolves each binding in order, dropping the ones the mesh cannot satisfy.
///
/// Every returned slot is below `weight_slots`. Bindings that share an
/// expression each produce their own entry.
pub fn resolve(bindings: &[Binding], index: &BlendShapeIndex, weight_slots: usize) -> Vec<ResolvedBinding> {
    bindings
        .iter()
        .filter_map(|binding| match explain(&binding.shape, index, weight_slots) {
            Ok(slot) => Some(ResolvedBinding {
                expression: binding.expression,
                slot,
            }),
            Err(reason) => {
                trace!(expression = ?binding.expression, ?reason, "skipping binding");
                None
            }
        })
        .collect()
}

/// Blend shape names and weight slot count of a loaded mesh.
pub trait BlendShapeSource {
    /// Morph target names in slot order. Unnamed targets are `None`.
    fn blend_shape_names(&self) -> impl Iterator<Item = Option<&str>> + '_;

    /// Number of runtime weight slots on the destination renderer.
    fn weight_slot_count(&self) -> usize;
}

/// Snapshot of one mesh's blend shapes, taken once per pass.
#[derive(Clone, Debug, Default)]
pub struct MeshBlendShapes {
    pub index: BlendShapeIndex,
    pub weight_slots: usize,
}

impl MeshBlendShapes {
    pub fn new<'a>(names: impl IntoIterator<Item = Option<&'a str>>, weight_slots: usize) -> Self {
        Self {
            index: BlendShapeIndex::from_names(names),
            weight_slots,
        }
    }

    pub fn from_source(source: &impl BlendShapeSource) -> Self {
        Self::new(source.blend_shape_names(), source.weight_slot_count())
    }

    pub fn signatures(&self) -> ConventionSignatures {
        ConventionSignatures::detect(self.index.names())
    }

    pub fn convention(&self) -> Convention {
        self.signatures().convention()
    }

    pub fn explain(&self, shape: &ShapeRef) -> Result<usize, SkipReason> {
        explain(shape, &self.index, self.weight_slots)
    }

    pub fn resolve(&self, bindings: &[Binding]) -> Vec<ResolvedBinding> {
        resolve(bindings, &self.index, self.weight_slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::build_bindings;
    use crate::vocabulary::unified;

    fn mesh(names: &[&str], weight_slots: usize) -> MeshBlendShapes {
        MeshBlendShapes::new(names.iter().map(|n| Some(*n)), weight_slots)
    }

    #[test]
    fn index_skips_missing_names() {
        let index = BlendShapeIndex::from_names([Some("A"), None, Some("C")]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("A"), Some(0));
        assert_eq!(index.get("C"), Some(2));
    }

    #[test]
    fn index_lookup_is_exact() {
        let index = BlendShapeIndex::from_names([Some("JawOpen")]);
        assert_eq!(index.get("jawopen"), None);
    }

    #[test]
    fn index_of_unnamed_slots_is_empty() {
        let index = BlendShapeIndex::from_names([None::<&str>, None]);
        assert!(index.is_empty());
        assert!(!BlendShapeIndex::from_names([Some("JawOpen")]).is_empty());
    }

    #[test]
    fn sentinels_never_resolve() {
        // A mesh that happens to name its shapes after the sentinels.
        let mesh = mesh(&["Ignore", "Todo", "Unavailable"], 3);
        assert_eq!(mesh.explain(&ShapeRef::Ignore), Err(SkipReason::Ignored));
        assert_eq!(mesh.explain(&ShapeRef::Todo), Err(SkipReason::Todo));
        assert_eq!(mesh.explain(&ShapeRef::Unavailable), Err(SkipReason::Unavailable));
    }

    #[test]
    fn out_of_range_slots_are_skipped() {
        let mesh = mesh(&["MouthRaiserLower"], 0);
        assert_eq!(
            mesh.explain(&ShapeRef::center(unified::MOUTH_RAISER_LOWER)),
            Err(SkipReason::OutOfRange {
                slot: 0,
                weight_slots: 0
            })
        );
        assert!(mesh.resolve(build_bindings(Convention::UnifiedExpressions)).is_empty());
    }

    #[test]
    fn frown_left_scenario() {
        let mesh = mesh(&["MouthRaiserLowerLeft", "BrowDownLeft", "BrowInnerUpLeft"], 3);
        assert_eq!(mesh.convention(), Convention::UnifiedExpressions);

        let resolved = mesh.resolve(build_bindings(mesh.convention()));
        let frown: Vec<_> = resolved
            .iter()
            .filter(|r| r.expression == AvatarExpression::FrownLeft)
            .map(|r| r.slot)
            .collect();
        assert_eq!(frown, [1, 2]);
    }

    #[test]
    fn resolved_slots_stay_in_bounds() {
        let names: Vec<String> = unified::ALL
            .iter()
            .flat_map(|e| [e.left(), e.right(), e.center().to_owned()])
            .collect();
        let weight_slots = names.len() / 2;
        let mesh = MeshBlendShapes::new(names.iter().map(|n| Some(n.as_str())), weight_slots);

        let resolved = mesh.resolve(build_bindings(Convention::UnifiedExpressions));
        assert!(!resolved.is_empty());
        assert!(resolved.iter().all(|r| r.slot < weight_slots));
    }
}
