use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::game::Scene;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldbounds::WorldBounds;

const GROUND_LIGHT: Color = Color::new(120, 168, 96, 255);
const GROUND_DARK: Color = Color::new(104, 150, 84, 255);
const COLLIDER_COLOR: Color = Color::new(243, 134, 48, 255);

/// We render inside raylib's drawing scopes and query the ECS World.
/// For culling we compute the world-rect visible by the camera using
/// Camera2D::screen_to_world and then do AABB intersection.
pub fn render_pass(
    world: &mut World,
    d2: &mut RaylibMode2D<RaylibDrawHandle>, // drawing in 2D camera space
) {
    let cam = world.resource::<Camera2DRes>().0;
    let screen = *world.resource::<ScreenSize>();

    // Visible world-rectangle from the screen corners.
    let tl = d2.get_screen_to_world2D(Vector2 { x: 0.0, y: 0.0 }, cam);
    let br = d2.get_screen_to_world2D(
        Vector2 {
            x: screen.w as f32,
            y: screen.h as f32,
        },
        cam,
    );
    let view_min = Vector2 {
        x: tl.x.min(br.x),
        y: tl.y.min(br.y),
    };
    let view_max = Vector2 {
        x: tl.x.max(br.x),
        y: tl.y.max(br.y),
    };

    if let Some(bounds) = world.get_resource::<WorldBounds>().copied() {
        draw_ground(d2, &bounds, view_min, view_max);
    }

    // Collect, cull, sort by z, then draw.
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, Option<&ZIndex>)>();
        q.iter(world)
            .filter_map(|(s, p, z)| {
                let min = Vector2 {
                    x: p.pos.x - s.origin.x,
                    y: p.pos.y - s.origin.y,
                };
                let max = Vector2 {
                    x: min.x + s.width,
                    y: min.y + s.height,
                };
                let overlap = !(max.x < view_min.x
                    || min.x > view_max.x
                    || max.y < view_min.y
                    || min.y > view_max.y);
                if overlap {
                    Some((s.clone(), *p, z.copied().unwrap_or_default()))
                } else {
                    None
                }
            })
            .collect()
    };

    to_draw.sort_by_key(|(_, _, z)| *z);

    for (sprite, pos, _z) in to_draw.iter() {
        draw_placeholder_sprite(d2, sprite, pos.pos);
    }

    if world.contains_resource::<DebugMode>() {
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        for (collider, position) in colliders.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, COLLIDER_COLOR);
        }
        let mut positions = world.query::<&MapPosition>();
        for position in positions.iter(world) {
            // small cross on the pivot
            d2.draw_line(
                position.pos.x as i32 - 5,
                position.pos.y as i32,
                position.pos.x as i32 + 5,
                position.pos.y as i32,
                Color::GREEN,
            );
            d2.draw_line(
                position.pos.x as i32,
                position.pos.y as i32 - 5,
                position.pos.x as i32,
                position.pos.y as i32 + 5,
                Color::GREEN,
            );
        }
    }
}

/// Checkerboard of map tiles intersecting the view, plus the map border.
fn draw_ground(
    d2: &mut RaylibMode2D<RaylibDrawHandle>,
    bounds: &WorldBounds,
    view_min: Vector2,
    view_max: Vector2,
) {
    if bounds.tile_size == 0 {
        return;
    }
    let tile = bounds.tile_size as f32;
    let first_x = (view_min.x / tile).floor().max(0.0) as u32;
    let first_y = (view_min.y / tile).floor().max(0.0) as u32;
    let last_x = ((view_max.x / tile).ceil().max(0.0) as u32).min(bounds.tiles_x);
    let last_y = ((view_max.y / tile).ceil().max(0.0) as u32).min(bounds.tiles_y);

    for ty in first_y..last_y {
        for tx in first_x..last_x {
            let color = if (tx + ty) % 2 == 0 {
                GROUND_LIGHT
            } else {
                GROUND_DARK
            };
            d2.draw_rectangle(
                (tx as f32 * tile) as i32,
                (ty as f32 * tile) as i32,
                bounds.tile_size as i32,
                bounds.tile_size as i32,
                color,
            );
        }
    }
    d2.draw_rectangle_lines(
        0,
        0,
        bounds.width() as i32,
        bounds.height() as i32,
        Color::DARKGRAY,
    );
}

/// Without atlas textures every sprite is a tinted box labelled with its frame key.
fn draw_placeholder_sprite(d2: &mut RaylibMode2D<RaylibDrawHandle>, sprite: &Sprite, pos: Vector2) {
    let x = (pos.x - sprite.origin.x) as i32;
    let y = (pos.y - sprite.origin.y) as i32;
    let w = sprite.width as i32;
    let h = sprite.height as i32;
    d2.draw_rectangle(x, y, w, h, sprite.tint);
    d2.draw_rectangle_lines(x, y, w, h, Color::BLACK);
    d2.draw_text(&sprite.frame_key, x, y - 12, 10, Color::BLACK);
}

/// Screen-space overlay: help box and, in debug mode, diagnostics.
pub fn render_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    let scene = world.get_resource::<Scene>().copied().unwrap_or(Scene::Walk);
    let lines = scene.help_lines();

    let font_size = 18;
    // monospace-ish estimate, the default font is close enough
    let box_w = lines
        .iter()
        .map(|line| line.len() as i32 * font_size * 3 / 5)
        .max()
        .unwrap_or(0)
        + 40;
    let box_h = lines.len() as i32 * (font_size + 4) + 20;
    d.draw_rectangle(16, 16, box_w, box_h, Color::WHITE);
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, 36, 26 + i as i32 * (font_size + 4), font_size, Color::BLACK);
    }

    if world.contains_resource::<DebugMode>() {
        let screen = *world.resource::<ScreenSize>();
        let cam = world.resource::<Camera2DRes>().0;

        let text = debug_status_line(world, d.get_fps());
        d.draw_text(&text, 10, screen.h - 30, 10, Color::BLACK);

        let cam_text = format!(
            "Camera pos: ({:.1}, {:.1}) Zoom: {:.2}",
            cam.target.x, cam.target.y, cam.zoom
        );
        d.draw_text(&cam_text, 10, screen.h - 15, 10, Color::BLACK);
    }
}

/// First debug overlay line: frame rate and live entity count.
pub fn debug_status_line(world: &World, fps: u32) -> String {
    let entity_count = world.iter_entities().count();
    format!("DEBUG MODE | FPS: {} | Entities: {}", fps, entity_count)
}
