//! Frame composition: turns a `GameState` into canvas calls
//!
//! Draw order, back to front: sky, clouds, water, shark, ocean floor,
//! creatures, orca, joystick, HUD, flash, game-over overlay. The shark is
//! painted before the floor so it reads as swimming behind the terrain.

use glam::{IVec2, Vec2};

use super::colors;
use super::font::{self, GLYPH_HEIGHT};
use super::{Canvas, Color};
use crate::assets::Sprite;
use crate::consts::*;
use crate::sim::{EntityKind, GamePhase, GameState, Rect, VirtualJoystick};

const HUD_SCALE: i32 = 3;
const HUD_MARGIN: i32 = 10;

/// Presentation switches that do not affect the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    pub show_joystick: bool,
    pub flash_effects: bool,
    /// Frames per second to print under the score, if enabled
    pub fps: Option<f32>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_joystick: true,
            flash_effects: true,
            fps: None,
        }
    }
}

fn sprite_for(kind: EntityKind) -> Sprite {
    match kind {
        EntityKind::Fish => Sprite::Fish,
        EntityKind::Crab => Sprite::Crab,
        EntityKind::Seagull => Sprite::Seagull,
        EntityKind::Orca => Sprite::Orca,
    }
}

fn top_left(rect: &Rect) -> IVec2 {
    IVec2::new(rect.x, rect.y)
}

/// Ocean floor outline: one point per column, closed along the bottom edge
pub fn terrain_outline(state: &GameState) -> Vec<Vec2> {
    let heights = state.terrain.heights();
    let mut points = Vec::with_capacity(heights.len() + 2);
    points.extend(
        heights
            .iter()
            .enumerate()
            .map(|(x, &h)| Vec2::new(x as f32, h as f32)),
    );
    points.push(Vec2::new(WIDTH as f32, HEIGHT as f32));
    points.push(Vec2::new(0.0, HEIGHT as f32));
    points
}

fn circle(center: Vec2, radius: f32) -> Rect {
    let r = radius.round() as i32;
    Rect::new(center.x.round() as i32 - r, center.y.round() as i32 - r, 2 * r, 2 * r)
}

fn draw_centered<C: Canvas + ?Sized>(canvas: &mut C, text: &str, y: i32, scale: i32, color: Color) {
    let x = (WIDTH - font::text_width(text, scale)) / 2;
    font::draw_text(canvas, text, IVec2::new(x, y), scale, color);
}

fn draw_hud<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, fps: Option<f32>) {
    let score = format!("SCORE: {}", state.score);
    font::draw_text(
        canvas,
        &score,
        IVec2::new(HUD_MARGIN, HUD_MARGIN),
        HUD_SCALE,
        colors::SCORE_TEXT,
    );

    let time = format!("TIME: {}", state.clock.display_seconds());
    let x = WIDTH - HUD_MARGIN - font::text_width(&time, HUD_SCALE);
    font::draw_text(
        canvas,
        &time,
        IVec2::new(x, HUD_MARGIN),
        HUD_SCALE,
        colors::TIME_TEXT,
    );

    if let Some(fps) = fps {
        let y = HUD_MARGIN * 2 + GLYPH_HEIGHT * HUD_SCALE;
        font::draw_text(
            canvas,
            &format!("FPS: {}", fps.round() as u32),
            IVec2::new(HUD_MARGIN, y),
            2,
            colors::FPS_TEXT,
        );
    }
}

fn draw_game_over<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    canvas.fill_rect(GameState::viewport(), colors::GAME_OVER_SHADE);

    let mid = HEIGHT / 2;
    draw_centered(canvas, "GAME OVER", mid - 90, 6, colors::GAME_OVER_TEXT);
    draw_centered(
        canvas,
        &format!("FINAL SCORE {}", state.score),
        mid - 10,
        3,
        colors::GAME_OVER_TEXT,
    );
    draw_centered(
        canvas,
        "PRESS Y TO PLAY AGAIN OR N TO QUIT",
        mid + 40,
        2,
        colors::PROMPT_TEXT,
    );

    // Touch players have no Y key
    let button = GameState::play_again_button();
    canvas.fill_rect(button, colors::BUTTON);
    let label_y = button.y + (button.h - GLYPH_HEIGHT * HUD_SCALE) / 2;
    draw_centered(canvas, "PLAY AGAIN", label_y, HUD_SCALE, colors::BUTTON_TEXT);
}

/// Draw one complete frame
pub fn draw_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    state: &GameState,
    joystick: &VirtualJoystick,
    options: &SceneOptions,
) {
    canvas.clear(colors::AIR);

    for cloud in &state.clouds {
        canvas.fill_ellipse(cloud.rect, colors::CLOUD);
    }

    canvas.fill_rect(
        Rect::new(0, SURFACE_Y, WIDTH, HEIGHT - SURFACE_Y),
        colors::WATER,
    );

    canvas.blit(Sprite::Shark, top_left(&state.shark.rect), false);

    canvas.fill_polygon(&terrain_outline(state), colors::TERRAIN);

    for creature in &state.creatures {
        canvas.blit(sprite_for(creature.kind), top_left(&creature.rect), false);
    }

    if state.orca.active {
        // Art faces right
        canvas.blit(
            Sprite::Orca,
            top_left(&state.orca.rect),
            state.orca.direction < 0,
        );
    }

    if options.show_joystick {
        canvas.fill_ellipse(
            circle(joystick.center, JOYSTICK_BASE_RADIUS),
            colors::JOYSTICK_BASE,
        );
        canvas.fill_ellipse(
            circle(joystick.stick, JOYSTICK_STICK_RADIUS),
            colors::JOYSTICK_STICK,
        );
    }

    draw_hud(canvas, state, options.fps);

    let flash = state.flash.filter(|_| options.flash_effects);
    if let Some(opacity) = flash.map(|f| f.opacity()).filter(|&o| o > 0.0) {
        canvas.fill_rect(GameState::viewport(), colors::FLASH.faded(opacity));
    }

    if state.phase == GamePhase::GameOver {
        draw_game_over(canvas, state);
    }
}
