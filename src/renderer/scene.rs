//! Frame building: turns the post-tick game state into a draw list
//!
//! Reads `GameState` only. Backends upload `Frame::vertices` as a triangle
//! list and draw `Frame::hud` text on top.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{Cat, GamePhase, GameState, Pipe, Rect};

/// Segments used for round shapes
const ROUND_SEGMENTS: u32 = 24;
/// Height of the lip drawn at each pipe mouth
const PIPE_RIM_HEIGHT: f32 = 8.0;
/// Height of the dirt band at the top of the ground
const DIRT_HEIGHT: f32 = 6.0;
const CLOUD_COUNT: u32 = 4;

/// A line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    /// Baseline start in playfield coordinates
    pub pos: Vec2,
    /// Font size in pixels
    pub size: f32,
    pub bold: bool,
}

/// Everything needed to present one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub hud: Vec<TextItem>,
}

/// Build the draw list for the current state
pub fn build_frame(state: &GameState) -> Frame {
    let config = state.config();
    let (w, h) = (config.width, config.height);
    let mut frame = Frame::default();
    let v = &mut frame.vertices;

    v.extend(shapes::rect(&Rect::new(0.0, 0.0, w, h), colors::SKY));
    clouds(v, state.time_ticks(), w);

    for pipe in state.pipes() {
        pipe_vertices(v, pipe, h);
    }

    let ground_y = config.ground_y();
    v.extend(shapes::rect(
        &Rect::new(0.0, ground_y, w, config.ground_height),
        colors::GROUND,
    ));
    v.extend(shapes::rect(&Rect::new(0.0, ground_y, w, DIRT_HEIGHT), colors::DIRT));

    cat_vertices(v, state.cat());

    frame.hud.push(TextItem {
        text: state.score().to_string(),
        pos: Vec2::new(w / 2.0 - 10.0, 60.0),
        size: 32.0,
        bold: true,
    });

    match state.phase() {
        GamePhase::GameOver => game_over_panel(&mut frame, state),
        GamePhase::Idle => start_panel(&mut frame, w, h),
        GamePhase::Running => {}
    }

    frame
}

/// Four drifting clouds; purely cosmetic, driven by the tick counter
fn clouds(v: &mut Vec<Vertex>, ticks: u64, width: f32) {
    let drift = (ticks / 6) as f32 % width;
    for i in 0..CLOUD_COUNT {
        let cx = i as f32 * 140.0 + drift;
        let cy = 60.0 + (i % 2) as f32 * 30.0;
        let puffs = [
            Rect::new((cx + 20.0) % width, cy, 60.0, 30.0),
            Rect::new((cx + 40.0) % width, cy - 6.0, 60.0, 36.0),
            Rect::new(cx % width, cy + 4.0, 50.0, 26.0),
        ];
        for puff in &puffs {
            v.extend(shapes::ellipse(puff, colors::CLOUD, ROUND_SEGMENTS));
        }
    }
}

fn pipe_vertices(v: &mut Vec<Vertex>, pipe: &Pipe, playfield_height: f32) {
    v.extend(shapes::rect(&pipe.top_block(), colors::PIPE));
    v.extend(shapes::rect(&pipe.bottom_block(playfield_height), colors::PIPE));

    let rim_top = Rect::new(pipe.x, pipe.gap_top - PIPE_RIM_HEIGHT, pipe.width, PIPE_RIM_HEIGHT);
    let rim_bottom = Rect::new(pipe.x, pipe.gap_bottom(), pipe.width, PIPE_RIM_HEIGHT);
    v.extend(shapes::rect(&rim_top, colors::PIPE_RIM));
    v.extend(shapes::rect(&rim_bottom, colors::PIPE_RIM));
}

/// Round body, triangle ears, eyes, nose and whiskers
fn cat_vertices(v: &mut Vec<Vertex>, cat: &Cat) {
    let c = cat.pos();
    let s = cat.size;

    v.extend(shapes::ellipse(&cat.bounds(), colors::CAT_BODY, ROUND_SEGMENTS));

    let ear = s / 3.0;
    let top = c.y - s / 2.0;
    for side in [-1.0, 1.0] {
        let ear_x = c.x + side * s / 4.0;
        v.extend(shapes::triangle(
            Vec2::new(ear_x - ear / 2.0, top),
            Vec2::new(ear_x + ear / 2.0, top),
            Vec2::new(ear_x, top - ear),
            colors::CAT_EARS,
        ));
    }

    let eye = s / 8.0;
    let eye_y = c.y - s / 10.0;
    for eye_x in [c.x - s / 6.0, c.x + s / 12.0] {
        let bounds = Rect::new(eye_x - eye / 2.0, eye_y - eye / 2.0, eye, eye);
        v.extend(shapes::ellipse(&bounds, colors::BLACK, ROUND_SEGMENTS / 2));
    }

    let nose = s / 10.0;
    let nose_bounds = Rect::new(c.x - nose / 2.0, c.y + s / 20.0, nose, nose);
    v.extend(shapes::ellipse(&nose_bounds, colors::CAT_NOSE, ROUND_SEGMENTS / 2));

    let whisker_y = c.y + s / 8.0;
    v.extend(shapes::line(
        Vec2::new(c.x - s / 2.0 + 6.0, whisker_y),
        Vec2::new(c.x - s / 8.0, whisker_y),
        2.0,
        colors::BLACK,
    ));
    v.extend(shapes::line(
        Vec2::new(c.x + s / 8.0, whisker_y),
        Vec2::new(c.x + s / 2.0 - 6.0, whisker_y),
        2.0,
        colors::BLACK,
    ));
}

fn game_over_panel(frame: &mut Frame, state: &GameState) {
    let config = state.config();
    let (w, h) = (config.width, config.height);
    frame.vertices.extend(shapes::rect(
        &Rect::new(40.0, h / 2.0 - 70.0, w - 80.0, 140.0),
        colors::OVERLAY_DARK,
    ));

    let lines = [
        ("Game Over".to_string(), Vec2::new(w / 2.0 - 80.0, h / 2.0 - 18.0), 28.0, true),
        (
            format!("Score: {}", state.score()),
            Vec2::new(w / 2.0 - 50.0, h / 2.0 + 8.0),
            18.0,
            false,
        ),
        (
            format!("High: {}", state.high_score()),
            Vec2::new(w / 2.0 - 50.0, h / 2.0 + 32.0),
            18.0,
            false,
        ),
        (
            "Click or press SPACE to restart".to_string(),
            Vec2::new(w / 2.0 - 150.0, h / 2.0 + 66.0),
            18.0,
            false,
        ),
    ];
    for (text, pos, size, bold) in lines {
        frame.hud.push(TextItem {
            text,
            pos,
            size,
            bold,
        });
    }
}

fn start_panel(frame: &mut Frame, w: f32, h: f32) {
    frame.vertices.extend(shapes::rect(
        &Rect::new(24.0, h / 2.0 - 70.0, w - 48.0, 140.0),
        colors::OVERLAY_LIGHT,
    ));
    frame.hud.push(TextItem {
        text: "Click or press SPACE to flap".to_string(),
        pos: Vec2::new(w / 2.0 - 140.0, h / 2.0 - 8.0),
        size: 22.0,
        bold: true,
    });
    frame.hud.push(TextItem {
        text: "Try to fly the cat through the gaps!".to_string(),
        pos: Vec2::new(w / 2.0 - 120.0, h / 2.0 + 18.0),
        size: 14.0,
        bold: false,
    });
}
