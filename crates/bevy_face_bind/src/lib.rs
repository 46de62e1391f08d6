use bevy::app::{App, Plugin, Update};

pub use crate::components::{AvatarExpressionDriver, AvatarEyeDriver, BindFaceExpressions};
pub use crate::systems::bind_face_expressions;

mod components;
mod systems;

pub struct FaceBindPlugin;

impl Plugin for FaceBindPlugin {
    fn name(&self) -> &str {
        "FaceBind"
    }

    fn build(&self, app: &mut App) {
        app.add_systems(Update, bind_face_expressions);
    }
}
