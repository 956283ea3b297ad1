//! Scene setup and the per-frame simulation schedule.
//!
//! Two scenes share the same host runtime:
//! - [`Scene::Explore`] scrolls the camera directly with the arrow keys.
//! - [`Scene::Walk`] spawns the player with a [`WalkController`] and the
//!   camera follows it.
//!
//! [`setup_scene`] inserts every resource the simulation systems need, so a
//! bare `World` is ready to tick afterwards. Nothing here touches raylib
//! handles; the binary adds input polling and rendering around it.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::{Color, Vector2};

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::walkcontroller::WalkController;
use crate::components::zindex::ZIndex;
use crate::resources::animationstore::AnimationStore;
use crate::resources::camera2d::{Camera2DRes, CameraPan};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::camera::{camera_follow_system, camera_pan_system};
use crate::systems::movement::movement;
use crate::systems::walkcontroller::walk_controller_system;

/// Player sprite size in pixels.
const PLAYER_WIDTH: f32 = 32.0;
const PLAYER_HEIGHT: f32 = 64.0;
/// Player hitbox, relative to the sprite centre.
const PLAYER_HITBOX: (f32, f32) = (30.0, 40.0);
const PLAYER_HITBOX_OFFSET: (f32, f32) = (-16.0, -8.0);
const PLAYER_Z: i32 = 10;

/// Which demo runs.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Scene {
    /// Scroll the map with the camera.
    Explore,
    /// Walk the player around the map.
    #[default]
    Walk,
}

impl Scene {
    /// Lines of the fixed help box.
    pub fn help_lines(&self) -> &'static [&'static str] {
        match self {
            Scene::Explore => &["Arrow keys to scroll", "Press \"D\" to show hitboxes"],
            Scene::Walk => &["Arrow keys to move", "Press \"D\" to show hitboxes"],
        }
    }
}

/// Insert resources for `scene` and spawn its entities.
///
/// Returns the player entity for [`Scene::Walk`].
pub fn setup_scene(
    world: &mut World,
    scene: Scene,
    config: &GameConfig,
    animations: AnimationStore,
) -> Option<Entity> {
    let bounds = config.world_bounds();
    let (screen_w, screen_h) = config.window_size();

    world.insert_resource(scene);
    world.insert_resource(bounds);
    world.insert_resource(ScreenSize {
        w: screen_w as i32,
        h: screen_h as i32,
    });
    world.init_resource::<WorldTime>();
    world.init_resource::<InputState>();

    info!(
        "Setting up {:?} scene on a {}x{} px map",
        scene,
        bounds.width(),
        bounds.height()
    );

    match scene {
        Scene::Explore => {
            world.insert_resource(animations);
            world.insert_resource(CameraPan {
                speed: config.camera_pan_speed,
            });
            world.insert_resource(Camera2DRes::centered(
                Vector2 { x: 0.0, y: 0.0 },
                screen_w as f32,
                screen_h as f32,
            ));
            None
        }
        Scene::Walk => {
            world.remove_resource::<CameraPan>();
            let controller = WalkController::new(config.player_speed);
            for facing_key in [
                &controller.animations.walk_left,
                &controller.animations.walk_right,
                &controller.animations.walk_front,
                &controller.animations.walk_back,
            ] {
                if animations.get(facing_key).is_none() {
                    warn!("Animation '{}' is not defined; walking will not animate", facing_key);
                }
            }
            world.insert_resource(animations);

            let start = bounds.center();
            world.insert_resource(Camera2DRes::centered(start, screen_w as f32, screen_h as f32));
            Some(spawn_player(world, start, controller))
        }
    }
}

/// Spawn the walking player at `position`.
pub fn spawn_player(world: &mut World, position: Vector2, controller: WalkController) -> Entity {
    let idle_frame = controller.animations.idle_front.clone();
    let walk_key = controller.animations.walk_front.clone();
    world
        .spawn((
            MapPosition::new(position.x, position.y),
            RigidBody::new(),
            Animation::new(walk_key),
            Sprite::new(idle_frame, PLAYER_WIDTH, PLAYER_HEIGHT)
                .with_origin(Vector2 {
                    x: PLAYER_WIDTH * 0.5,
                    y: PLAYER_HEIGHT * 0.5,
                })
                .with_tint(Color::new(236, 112, 140, 255)),
            BoxCollider::new(PLAYER_HITBOX.0, PLAYER_HITBOX.1).with_offset(Vector2 {
                x: PLAYER_HITBOX_OFFSET.0,
                y: PLAYER_HITBOX_OFFSET.1,
            }),
            ZIndex(PLAYER_Z),
            CameraTarget,
            controller,
        ))
        .id()
}

/// Add the frame simulation in its required order: controller, movement,
/// camera, then animation playback.
///
/// Input polling is left to the caller and must run before these.
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            walk_controller_system,
            movement,
            camera_follow_system,
            camera_pan_system.run_if(resource_exists::<CameraPan>),
            animation,
        )
            .chain(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lines() {
        assert_eq!(Scene::Walk.help_lines()[0], "Arrow keys to move");
        assert_eq!(Scene::Explore.help_lines()[0], "Arrow keys to scroll");
        assert!(Scene::Walk.help_lines()[1].contains("\"D\""));
    }

    #[test]
    fn test_setup_walk_spawns_player_in_centre() {
        let mut world = World::new();
        let config = GameConfig::new();
        let store = AnimationStore::walk_defaults(&WalkController::default().animations);
        let player = setup_scene(&mut world, Scene::Walk, &config, store).unwrap();

        let pos = world.get::<MapPosition>(player).unwrap();
        assert_eq!(pos.pos, config.world_bounds().center());
        let sprite = world.get::<Sprite>(player).unwrap();
        assert_eq!(sprite.frame_key, "idle-front");
        assert!(world.get::<CameraTarget>(player).is_some());
        assert_eq!(world.get::<WalkController>(player).unwrap().speed, 175.0);
        assert!(!world.contains_resource::<CameraPan>());
        assert_eq!(*world.resource::<Scene>(), Scene::Walk);
    }

    #[test]
    fn test_setup_explore_has_no_player() {
        let mut world = World::new();
        let config = GameConfig::new();
        let player = setup_scene(&mut world, Scene::Explore, &config, AnimationStore::new());
        assert!(player.is_none());
        assert!(world.contains_resource::<CameraPan>());
        let mut q = world.query::<&WalkController>();
        assert_eq!(q.iter(&world).count(), 0);
    }
}
