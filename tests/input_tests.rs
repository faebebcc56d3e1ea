//! Tests for re-throwing dice from the keyboard

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use dicedrop::dice3d::{handle_input, DemoConfig, DemoVariant, DiceType, Die, ThrowRng};

fn input_app(variant: DemoVariant) -> (App, Entity) {
    let mut app = App::new();
    app.insert_resource(DemoConfig::for_variant(variant))
        .insert_resource(ThrowRng::new(Some(9)))
        .init_resource::<ButtonInput<KeyCode>>()
        .add_systems(Update, handle_input);

    let die = app
        .world_mut()
        .spawn((
            Die {
                die_type: DiceType::D8,
                spawn_point: Vec3::new(1.0, 0.0, -1.0),
            },
            Transform::from_xyz(4.0, -2.0, 3.0),
            Velocity {
                linvel: Vec3::new(5.0, -3.0, 1.0),
                angvel: Vec3::ZERO,
            },
            ExternalImpulse::default(),
        ))
        .id();
    (app, die)
}

#[test]
fn space_rethrows_dice_from_spawn_point() {
    let (mut app, die) = input_app(DemoVariant::Set);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);

    app.update();

    let world = app.world();
    assert_eq!(
        world.get::<Transform>(die).expect("die").translation,
        Vec3::new(1.0, 0.0, -1.0)
    );

    let velocity = world.get::<Velocity>(die).expect("die");
    assert_eq!(velocity.linvel, Vec3::ZERO);
    for axis in velocity.angvel.to_array() {
        assert!(axis.abs() >= 25.0 && axis.abs() < 50.0);
    }

    let impulse = world.get::<ExternalImpulse>(die).expect("die");
    for axis in impulse.impulse.to_array() {
        assert!(axis.abs() >= 25.0 && axis.abs() < 50.0);
    }
}

#[test]
fn dice_are_left_alone_without_space() {
    let (mut app, die) = input_app(DemoVariant::Single);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyR);

    app.update();

    let world = app.world();
    assert_eq!(
        world.get::<Transform>(die).expect("die").translation,
        Vec3::new(4.0, -2.0, 3.0)
    );
    assert_eq!(
        world.get::<Velocity>(die).expect("die").linvel,
        Vec3::new(5.0, -3.0, 1.0)
    );
}
