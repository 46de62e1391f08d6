use bevy::prelude::*;
use bevy::render::mesh::morph::MeshMorphWeights;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

use bevy_face_bind::{AvatarExpressionDriver, AvatarEyeDriver, BindFaceExpressions, FaceBindPlugin};
use face_bind::{AvatarExpression, EyeTarget, Side};

fn app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .init_asset::<Mesh>()
        .add_plugins(FaceBindPlugin);
    app
}

fn face_mesh(app: &mut App, names: &[&str]) -> Handle<Mesh> {
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.set_morph_target_names(names.iter().map(|n| n.to_string()).collect());
    app.world_mut().resource_mut::<Assets<Mesh>>().add(mesh)
}

fn spawn_face(app: &mut App, mesh: Handle<Mesh>, weight_slots: usize) -> Entity {
    let weights = MeshMorphWeights::new(vec![0.0; weight_slots]).unwrap();
    app.world_mut().spawn((mesh, weights, BindFaceExpressions)).id()
}

#[test]
fn binds_loaded_mesh() {
    let mut app = app();
    let mesh = face_mesh(&mut app, &["MouthRaiserLowerLeft", "JawOpen", "EyeClosedLeft", "EyeClosedRight"]);
    let entity = spawn_face(&mut app, mesh, 4);

    app.update();

    let world = app.world();
    assert!(world.get::<BindFaceExpressions>(entity).is_none());

    let expression = &world.get::<AvatarExpressionDriver>(entity).unwrap().0;
    assert_eq!(expression.links_for(AvatarExpression::JawOpen).map(|l| l.slot).collect::<Vec<_>>(), [1]);
    assert_eq!(expression.links_for(AvatarExpression::LipRaiseLowerLeft).count(), 1);

    let eyes = &world.get::<AvatarEyeDriver>(entity).unwrap().0;
    assert_eq!(eyes.eyes.len(), 2);
    for eye in &eyes.eyes {
        let expected = match eye.side {
            Side::Left => 2,
            Side::Right => 3,
        };
        assert_eq!(eye.target(EyeTarget::OpenClose), Some(expected));
    }
}

#[test]
fn reuses_existing_eye_driver() {
    let mut app = app();
    let mesh = face_mesh(&mut app, &["MouthRaiserLower", "EyeWideLeft"]);
    let entity = spawn_face(&mut app, mesh, 2);
    app.update();

    app.world_mut().entity_mut(entity).insert(BindFaceExpressions);
    app.update();

    let eyes = &app.world().get::<AvatarEyeDriver>(entity).unwrap().0;
    assert_eq!(eyes.eyes.len(), 2);
}

#[test]
fn waits_for_mesh() {
    let mut app = app();
    let entity = spawn_face(&mut app, Handle::<Mesh>::default(), 0);

    app.update();

    let world = app.world();
    assert!(world.get::<BindFaceExpressions>(entity).is_some());
    assert!(world.get::<AvatarExpressionDriver>(entity).is_none());
}

#[test]
fn unknown_convention_gets_no_eye_driver() {
    let mut app = app();
    let mesh = face_mesh(&mut app, &["Blink"]);
    let entity = spawn_face(&mut app, mesh, 1);

    app.update();

    let world = app.world();
    assert!(world.get::<AvatarEyeDriver>(entity).is_none());
    assert!(world.get::<AvatarExpressionDriver>(entity).unwrap().0.is_empty());
}
