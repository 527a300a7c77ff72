use macroquad::color::Color;
use macroquad::shapes::draw_rectangle;
use macroquad::text::{draw_text, measure_text};
use macroquad::window::clear_background;
use rand::Rng;

use crate::car::Car;
use crate::config::Rgb;
use crate::game::Game;

const SCORE_FONT: u16 = 24;
const BANNER_FONT: u16 = 36;
const MARKER_WIDTH: f32 = 6.0;

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Self::from_rgba(r, g, b, 255)
    }
}

pub fn draw<R: Rng>(game: &Game<R>) {
    let config = game.config();
    let palette = game.palette();
    let (width, height) = (config.width as f32, config.height as f32);
    let (left, right) = (config.track_left(), config.track_right());

    clear_background(palette.background.into());

    draw_rectangle(0.0, 0.0, left, height, palette.grass.into());
    draw_rectangle(right, 0.0, width - right, height, palette.grass.into());
    draw_rectangle(left, 0.0, right - left, height, palette.road.into());

    let marker_length = config.lane_marker_length as f32;
    for (x, y) in game.markers().iter() {
        draw_rectangle(
            x - MARKER_WIDTH / 2.0,
            *y,
            MARKER_WIDTH,
            marker_length,
            palette.lane_marker.into(),
        );
    }

    for obstacle in game.obstacles() {
        draw_car(obstacle);
    }
    draw_car(game.player());

    let text = palette.text.into();
    // draw_text positions by baseline
    draw_text(
        &format!("Score: {:.1}", game.score()),
        10.0,
        10.0 + f32::from(SCORE_FONT) * 0.75,
        f32::from(SCORE_FONT),
        text,
    );

    if game.is_game_over() {
        draw_centered("Crash!", BANNER_FONT, width / 2.0, height / 2.0 - 20.0, text);
        draw_centered(
            "Press Enter to restart",
            SCORE_FONT,
            width / 2.0,
            height / 2.0 + 20.0,
            text,
        );
    }
}

fn draw_car(car: &Car) {
    let rect = car.rect();
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, car.color.into());
}

fn draw_centered(text: &str, font_size: u16, cx: f32, cy: f32, color: Color) {
    let size = measure_text(text, None, font_size, 1.0);
    let x = cx - size.width / 2.0;
    let y = cy - size.height / 2.0 + size.offset_y;
    draw_text(text, x, y, f32::from(font_size), color);
}
