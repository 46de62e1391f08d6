use bevy::prelude::Component;

use face_bind::{ExpressionDriver, EyeLinearDriver};

/// Requests blend shape binding for an entity with a `Handle<Mesh>` and
/// `MeshMorphWeights`. Removed once the request has been handled.
#[derive(Debug, Default, Component)]
pub struct BindFaceExpressions;

#[derive(Debug, Default, Component)]
pub struct AvatarEyeDriver(pub EyeLinearDriver);

#[derive(Debug, Default, Component)]
pub struct AvatarExpressionDriver(pub ExpressionDriver);
