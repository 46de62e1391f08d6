//! The eye and expression binding passes.

use std::fmt::Debug;
use std::future::Future;

use serde::Serialize;
use tracing::debug;

use crate::bindings::{build_bindings, ShapeRef, EYE_BINDINGS};
use crate::classify::{Convention, ConventionSignatures};
use crate::driver::{ExpressionDriver, EyeLinearDriver, LinkRange};
use crate::error::PassError;
use crate::resolve::{BlendShapeSource, MeshBlendShapes};

/// Locates and loads the mesh a pass binds against.
pub trait MeshResolver {
    type Reference: ?Sized;
    type Handle: Debug;
    type Loaded: BlendShapeSource;

    fn resolve_mesh(&self, reference: &Self::Reference) -> Option<Self::Handle>;

    /// Waits for the mesh asset behind `handle`. `None` means it failed to load.
    fn await_asset_load(&self, handle: &Self::Handle) -> impl Future<Output = Option<Self::Loaded>>;
}

/// Where a pass stores the drivers it builds.
pub trait DriverHost {
    /// The eye driver for the target, created empty if there is none.
    fn eye_driver(&mut self) -> &mut EyeLinearDriver;

    /// Drops any existing expression driver and returns a fresh one.
    fn replace_expression_driver(&mut self) -> &mut ExpressionDriver;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum PassOutcome {
    /// The reference did not name a mesh.
    NoTarget,
    /// The detected convention is not handled by this pass.
    Skipped { convention: Convention },
    Bound { convention: Convention, links: usize },
}

/// Links each eye's targets to that eye's side of the matching shapes.
///
/// Only a mesh with no known convention is skipped. ARKit meshes still run,
/// and bind nothing because the eye table uses Unified Expressions names.
pub fn bind_eye_linear_driver(mesh: &MeshBlendShapes, host: &mut impl DriverHost) -> PassOutcome {
    let signatures = mesh.signatures();
    let convention = signatures.convention();
    if signatures.is_empty() {
        debug!("no known blend shape convention, skipping eye driver");
        return PassOutcome::Skipped { convention };
    }

    let driver = host.eye_driver();
    driver.ensure_eye_entries();

    let mut links = 0;
    for eye in driver.eyes.iter_mut() {
        for binding in EYE_BINDINGS {
            let shape = ShapeRef::sided(binding.element, eye.side);
            if let Ok(slot) = mesh.explain(&shape) {
                eye.force_link(binding.target, slot);
                links += 1;
            }
        }
    }

    debug!(?convention, links, "bound eye driver");
    PassOutcome::Bound { convention, links }
}

/// Replaces the expression driver and links every resolvable channel.
///
/// Skipped only for a mesh with the ARKit signature and no Unified Expressions
/// signature. A mesh with neither still binds against the Unified Expressions
/// table.
pub fn bind_expression_driver(mesh: &MeshBlendShapes, host: &mut impl DriverHost) -> PassOutcome {
    let signatures = mesh.signatures();
    let convention = signatures.convention();
    if !signatures.contains(ConventionSignatures::UNIFIED_EXPRESSIONS)
        && signatures.contains(ConventionSignatures::ARKIT)
    {
        debug!(?convention, "skipping expression driver");
        return PassOutcome::Skipped { convention };
    }

    let driver = host.replace_expression_driver();
    let resolved = mesh.resolve(build_bindings(Convention::UnifiedExpressions));
    for binding in &resolved {
        driver.force_link(binding.slot, binding.expression, LinkRange::UNIT);
    }

    debug!(?convention, links = resolved.len(), "bound expression driver");
    PassOutcome::Bound {
        convention,
        links: resolved.len(),
    }
}

/// Resolves and loads the target mesh. `Ok(None)` when there is no target.
pub async fn load_blend_shapes<R: MeshResolver>(
    resolver: &R,
    reference: &R::Reference,
) -> Result<Option<MeshBlendShapes>, PassError> {
    let Some(handle) = resolver.resolve_mesh(reference) else {
        return Ok(None);
    };
    let Some(loaded) = resolver.await_asset_load(&handle).await else {
        return Err(PassError::MeshLoad {
            mesh: format!("{handle:?}"),
        });
    };
    Ok(Some(MeshBlendShapes::from_source(&loaded)))
}

pub async fn apply_eye_linear_driver<R: MeshResolver>(
    resolver: &R,
    reference: &R::Reference,
    host: &mut impl DriverHost,
) -> Result<PassOutcome, PassError> {
    match load_blend_shapes(resolver, reference).await? {
        Some(mesh) => Ok(bind_eye_linear_driver(&mesh, host)),
        None => Ok(PassOutcome::NoTarget),
    }
}

pub async fn apply_avatar_expression_driver<R: MeshResolver>(
    resolver: &R,
    reference: &R::Reference,
    host: &mut impl DriverHost,
) -> Result<PassOutcome, PassError> {
    match load_blend_shapes(resolver, reference).await? {
        Some(mesh) => Ok(bind_expression_driver(&mesh, host)),
        None => Ok(PassOutcome::NoTarget),
    }
}
