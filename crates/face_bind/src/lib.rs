//! Maps an avatar mesh's blend shapes onto canonical face tracking channels.
//!
//! A mesh's blend shape names are first classified into a naming convention.
//! The convention selects a binding table, and each binding is then resolved
//! against the shapes the mesh actually has. Bindings the mesh cannot satisfy
//! are skipped rather than reported as errors.

pub mod bindings;
pub mod classify;
pub mod driver;
pub mod error;
pub mod expression;
pub mod pass;
pub mod resolve;
pub mod vocabulary;

pub use bindings::{build_bindings, Binding, EyeBinding, ShapeName, ShapeRef, EYE_BINDINGS};
pub use classify::{classify, Convention, ConventionSignatures};
pub use driver::{ExpressionDriver, ExpressionLink, EyeEntry, EyeLinearDriver, LinkRange};
pub use error::PassError;
pub use expression::{AvatarExpression, EyeTarget};
pub use pass::{
    apply_avatar_expression_driver, apply_eye_linear_driver, bind_expression_driver, bind_eye_linear_driver,
    load_blend_shapes, DriverHost, MeshResolver, PassOutcome,
};
pub use resolve::{explain, resolve, BlendShapeIndex, BlendShapeSource, MeshBlendShapes, ResolvedBinding, SkipReason};
pub use vocabulary::{unified, CanonicalElement, ConventionElementKind, Side};
