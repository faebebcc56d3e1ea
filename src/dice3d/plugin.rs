use bevy::prelude::*;

use crate::dice3d::systems::*;
use crate::dice3d::types::*;

/// Scene, physics wiring, die loading and view sizing for the dice drop demo.
///
/// Insert a [`DemoConfig`] before adding the plugin to override the defaults.
/// The physics and rendering plugins themselves are added by the app.
pub struct DiceDemoPlugin;

impl Plugin for DiceDemoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemoConfig>();

        let seed = app.world().resource::<DemoConfig>().seed;
        if !app.world().contains_resource::<ThrowRng>() {
            app.insert_resource(ThrowRng::new(seed));
        }

        app.init_resource::<ViewFrame>()
            .init_resource::<DiceAssets>()
            .init_state::<DemoPhase>()
            .add_systems(
                Startup,
                (setup, size_view_to_primary_window, request_dice_assets).chain(),
            )
            .add_systems(
                Update,
                (
                    apply_gravity,
                    fit_view_to_window,
                    spawn_dice_when_loaded.run_if(in_state(DemoPhase::Loading)),
                    handle_input.run_if(in_state(DemoPhase::Running)),
                    toggle_collider_debug,
                ),
            )
            .add_systems(OnEnter(DemoPhase::Running), announce_running)
            .add_systems(OnEnter(DemoPhase::Failed), announce_failed);
    }
}

fn announce_running(dice: Query<&Die>) {
    info!("Dice dropped: {} bodies in the box", dice.iter().count());
}

fn announce_failed(config: Res<DemoConfig>) {
    warn!(
        "No dice could be loaded from '{}'; rendering the empty box",
        config.asset_root
    );
}
