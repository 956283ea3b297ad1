//! Tilewalk main entry point.
//!
//! A top-down walking demo written in Rust using:
//! - **raylib** for windowing, input, and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the animation definitions
//! 2. Initialize the raylib window and the ECS world
//! 3. Register the debug observer and set up the selected scene
//! 4. Run the main loop:
//!    - Update time and input, drive the walk controller
//!    - Integrate movement, move the camera, advance animations
//!    - Render the map, sprites, help box, and debug overlay
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scene walk
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;

use tilewalk::components::walkcontroller::WalkController;
use tilewalk::events::switchdebug::switch_debug_observer;
use tilewalk::game::{self, Scene};
use tilewalk::resources::animationstore::AnimationStore;
use tilewalk::resources::camera2d::Camera2DRes;
use tilewalk::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use tilewalk::resources::input::InputState;
use tilewalk::resources::worldtime::WorldTime;
use tilewalk::systems::input::update_input_state;
use tilewalk::systems::render::{render_pass, render_ui};
use tilewalk::systems::time::update_world_time;
use tilewalk::systems::walkcontroller::walk_controller_system;

/// Walk a character around a top-down map.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Scene to start in.
    #[arg(long, value_enum, default_value_t = Scene::Walk)]
    scene: Scene,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// JSON file with animation definitions. Built-in walk animations are
    /// used when omitted.
    #[arg(long, value_name = "PATH")]
    animations: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration & assets ---------------
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("Using default configuration: {}", e);
    }

    let animations = match &cli.animations {
        Some(path) => match AnimationStore::load_from_file(path) {
            Ok(store) => store,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => AnimationStore::walk_defaults(&WalkController::default().animations),
    };

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("tilewalk")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_non_send_resource(rl);

    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observer is registered before any system triggers events.
    world.flush();

    game::setup_scene(&mut world, cli.scene, &config, animations);
    world.insert_resource(config);
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state.before(walk_controller_system));
    game::add_simulation_systems(&mut update);

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<RaylibHandle>()
        .window_should_close()
    {
        let dt = world.non_send_resource::<RaylibHandle>().get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();

        draw_frame(&mut world, &thread);
    }
    log::info!("Bye!");
}

/// Take the raylib handle out of the world for the duration of the frame so
/// the renderers can borrow the world mutably.
fn draw_frame(world: &mut World, thread: &RaylibThread) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    {
        let camera = world.resource::<Camera2DRes>().0;
        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::RAYWHITE);
        {
            let mut d2 = d.begin_mode2D(camera);
            render_pass(world, &mut d2);
        }
        render_ui(world, &mut d);
    }
    world.insert_non_send_resource(rl);
}
