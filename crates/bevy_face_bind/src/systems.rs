use bevy::asset::{AssetServer, Assets, Handle, LoadState};
use bevy::log::{debug, error};
use bevy::prelude::{Commands, Entity, Mesh, Query, Res, With};
use bevy::render::mesh::morph::MeshMorphWeights;

use face_bind::{
    bind_expression_driver, bind_eye_linear_driver, DriverHost, ExpressionDriver, EyeLinearDriver, MeshBlendShapes,
};

use crate::components::{AvatarExpressionDriver, AvatarEyeDriver, BindFaceExpressions};

struct EntityDrivers<'a> {
    eyes: &'a mut EyeLinearDriver,
    expression: Option<ExpressionDriver>,
}

impl DriverHost for EntityDrivers<'_> {
    fn eye_driver(&mut self) -> &mut EyeLinearDriver {
        &mut *self.eyes
    }

    fn replace_expression_driver(&mut self) -> &mut ExpressionDriver {
        self.expression.insert(ExpressionDriver::new())
    }
}

/// Binds eye and expression drivers for every requesting entity whose mesh
/// has finished loading.
pub fn bind_face_expressions(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    meshes: Res<Assets<Mesh>>,
    mut targets: Query<
        (Entity, &Handle<Mesh>, &MeshMorphWeights, Option<&mut AvatarEyeDriver>),
        With<BindFaceExpressions>,
    >,
) {
    for (entity, handle, weights, eye_driver) in &mut targets {
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
            error!("failed to load blend shape mesh {:?}: {}", handle, err);
            commands.entity(entity).remove::<BindFaceExpressions>();
            continue;
        }

        let Some(mesh) = meshes.get(handle) else {
            continue;
        };
        commands.entity(entity).remove::<BindFaceExpressions>();

        let names = mesh.morph_target_names().unwrap_or_default();
        let blend_shapes = MeshBlendShapes::new(names.iter().map(|n| Some(n.as_str())), weights.weights().len());

        let mut new_eyes = None;
        let eyes = match eye_driver {
            Some(driver) => &mut driver.into_inner().0,
            None => &mut new_eyes.insert(AvatarEyeDriver::default()).0,
        };

        let mut drivers = EntityDrivers {
            eyes,
            expression: None,
        };
        let eye_outcome = bind_eye_linear_driver(&blend_shapes, &mut drivers);
        let expression_outcome = bind_expression_driver(&blend_shapes, &mut drivers);
        debug!(
            "bound face drivers for {:?}: eyes {:?}, expressions {:?}",
            entity, eye_outcome, expression_outcome
        );

        let expression = drivers.expression;
        let mut entity_commands = commands.entity(entity);
        if let Some(eyes) = new_eyes.filter(|e| !e.0.eyes.is_empty()) {
            entity_commands.insert(eyes);
        }
        if let Some(expression) = expression {
            entity_commands.insert(AvatarExpressionDriver(expression));
        }
    }
}
