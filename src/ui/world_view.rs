//! World rendering through the egui painter.
//!
//! Tiles and actors are flat shapes; a textured renderer would be
//! overkill for a dialogue demo.

use egui::{Color32, Rect, Stroke};
use glam::{Vec2, Vec3};
use hecs::World;

use super::style::colors;
use crate::camera::Camera;
use crate::components::{Position, Sprite, TriggerZone};
use crate::constants::CAMERA_ZOOM;
use crate::grid::{Grid, TileType};

pub fn draw_world(
    ctx: &egui::Context,
    world: &World,
    grid: &Grid,
    camera: &Camera,
    show_zones: bool,
) {
    puffin::profile_function!();
    let painter = ctx.layer_painter(egui::LayerId::background());

    for y in 0..grid.height as i32 {
        for x in 0..grid.width as i32 {
            let Some(tile) = grid.get(x, y) else {
                continue;
            };
            let color = match tile {
                TileType::Wall => colors::WALL,
                // subtle checker so motion is readable on a bare floor
                TileType::Floor if (x + y) % 2 == 0 => colors::FLOOR,
                TileType::Floor => colors::FLOOR_ALT,
            };
            painter.rect_filled(tile_rect(camera, x, y), 0.0, color);
        }
    }

    if show_zones {
        for (_, zone) in world.query::<&TriggerZone>().iter() {
            let rect = Rect::from_min_max(
                tile_rect(camera, zone.min_x, zone.min_y).min,
                tile_rect(camera, zone.max_x, zone.max_y).max,
            );
            painter.rect_filled(rect, 0.0, colors::ZONE_FILL);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, colors::ZONE_BORDER));
        }
    }

    for (_, (pos, sprite)) in world.query::<(&Position, &Sprite)>().iter() {
        let rect = tile_rect(camera, pos.x, pos.y).shrink(CAMERA_ZOOM * 0.15);
        painter.rect_filled(rect, CAMERA_ZOOM * 0.2, sprite_color(sprite.color));
    }
}

fn tile_rect(camera: &Camera, x: i32, y: i32) -> Rect {
    let min = camera.world_to_screen(Vec2::new(x as f32, y as f32));
    Rect::from_min_size(
        egui::pos2(min.x, min.y),
        egui::vec2(CAMERA_ZOOM, CAMERA_ZOOM),
    )
}

fn sprite_color(color: Vec3) -> Color32 {
    Color32::from_rgb(
        (color.x.clamp(0.0, 1.0) * 255.0) as u8,
        (color.y.clamp(0.0, 1.0) * 255.0) as u8,
        (color.z.clamp(0.0, 1.0) * 255.0) as u8,
    )
}
