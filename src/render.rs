use crate::config::{
    ARENA_HEIGHT, ARENA_WIDTH, ROBOT_BODY_HEIGHT, ROBOT_BODY_WIDTH, ROBOT_EYE_DIAMETER,
    ROBOT_EYE_OFFSET, TARGET_DIAMETER, UI_PANEL_WIDTH,
};
use crate::journal::{LogEntry, LogLevel};
use crate::locale::LocaleBook;
use crate::model::Pose;
use crate::types::Target;
use crate::utils;
use macroquad::prelude::*;

const ELLIPSE_SEGMENTS: usize = 32;
const PANEL_PADDING: f32 = 10.0;
const PANEL_FONT_SIZE: f32 = 16.0;
const LOG_LINE_HEIGHT: f32 = 16.0;

// Handles rendering the simulation state using macroquad
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    /// Draws one frame. `alpha` is the fraction of the current tick already
    /// elapsed; the robot is drawn between its previous and current pose so
    /// motion stays smooth when the frame rate outruns the tick rate.
    pub fn draw_frame(
        &self,
        prev_pose: Pose,
        pose: Pose,
        target: Target,
        alpha: f64,
        entries: &[LogEntry],
        locale: &LocaleBook,
    ) {
        clear_background(WHITE);

        let shown = utils::lerp_point(prev_pose.position(), pose.position(), alpha);
        let direction = utils::angle_lerp(prev_pose.direction, pose.direction, alpha);

        Self::draw_arena_border();
        Self::draw_target(target);
        Self::draw_robot(shown.x as f32, shown.y as f32, direction as f32);
        self.draw_ui_panel(pose, target, entries, locale);
    }

    fn draw_arena_border() {
        draw_rectangle_lines(
            0.0,
            0.0,
            ARENA_WIDTH as f32,
            ARENA_HEIGHT as f32,
            2.0,
            LIGHTGRAY,
        );
    }

    // Green dot with a black outline, exactly where the user clicked
    fn draw_target(target: Target) {
        let radius = TARGET_DIAMETER / 2.0;
        draw_circle(target.x as f32, target.y as f32, radius, GREEN);
        draw_circle_lines(target.x as f32, target.y as f32, radius, 1.0, BLACK);
    }

    // Magenta ellipse body rotated to the heading, with a white "eye"
    // ahead of the center
    fn draw_robot(x: f32, y: f32, direction: f32) {
        let center = Vec2::new(x, y);
        Self::fill_ellipse(
            center,
            ROBOT_BODY_WIDTH / 2.0,
            ROBOT_BODY_HEIGHT / 2.0,
            direction,
            MAGENTA,
        );
        Self::stroke_ellipse(
            center,
            ROBOT_BODY_WIDTH / 2.0,
            ROBOT_BODY_HEIGHT / 2.0,
            direction,
            BLACK,
        );

        let eye_center = center + Self::rotated(Vec2::new(ROBOT_EYE_OFFSET, 0.0), direction);
        let eye_radius = ROBOT_EYE_DIAMETER / 2.0;
        draw_circle(eye_center.x, eye_center.y, eye_radius, WHITE);
        draw_circle_lines(eye_center.x, eye_center.y, eye_radius, 1.0, BLACK);
    }

    fn rotated(v: Vec2, angle: f32) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    }

    fn ellipse_point(center: Vec2, rx: f32, ry: f32, rotation: f32, t: f32) -> Vec2 {
        center + Self::rotated(Vec2::new(rx * t.cos(), ry * t.sin()), rotation)
    }

    fn fill_ellipse(center: Vec2, rx: f32, ry: f32, rotation: f32, color: Color) {
        let step = std::f32::consts::TAU / ELLIPSE_SEGMENTS as f32;
        for i in 0..ELLIPSE_SEGMENTS {
            let a = Self::ellipse_point(center, rx, ry, rotation, step * i as f32);
            let b = Self::ellipse_point(center, rx, ry, rotation, step * (i + 1) as f32);
            draw_triangle(center, a, b, color);
        }
    }

    fn stroke_ellipse(center: Vec2, rx: f32, ry: f32, rotation: f32, color: Color) {
        let step = std::f32::consts::TAU / ELLIPSE_SEGMENTS as f32;
        for i in 0..ELLIPSE_SEGMENTS {
            let a = Self::ellipse_point(center, rx, ry, rotation, step * i as f32);
            let b = Self::ellipse_point(center, rx, ry, rotation, step * (i + 1) as f32);
            draw_line(a.x, a.y, b.x, b.y, 1.0, color);
        }
    }

    fn draw_ui_panel(
        &self,
        pose: Pose,
        target: Target,
        entries: &[LogEntry],
        locale: &LocaleBook,
    ) {
        let panel_x = ARENA_WIDTH as f32;
        let panel_width = UI_PANEL_WIDTH as f32;
        let padding = PANEL_PADDING;
        let mut y = 26.0;

        // Panel background (dark indigo)
        draw_rectangle(
            panel_x,
            0.0,
            panel_width,
            screen_height(),
            Color::from_rgba(20, 20, 50, 255),
        );

        draw_text(
            locale.get("panel.title"),
            panel_x + padding,
            y,
            22.0,
            GOLD,
        );
        y += 30.0;

        // Coordinates readout
        draw_text(
            locale.get("panel.position"),
            panel_x + padding,
            y,
            PANEL_FONT_SIZE,
            SKYBLUE,
        );
        y += LOG_LINE_HEIGHT;
        let heading_deg = pose.direction.to_degrees();
        draw_text(
            &format!("x {:8.2}  y {:8.2}", pose.x, pose.y),
            panel_x + padding,
            y,
            PANEL_FONT_SIZE,
            WHITE,
        );
        y += LOG_LINE_HEIGHT;
        draw_text(
            &format!("dir {:6.1}°", heading_deg),
            panel_x + padding,
            y,
            PANEL_FONT_SIZE,
            WHITE,
        );
        y += LOG_LINE_HEIGHT + 4.0;

        draw_text(
            locale.get("panel.target"),
            panel_x + padding,
            y,
            PANEL_FONT_SIZE,
            SKYBLUE,
        );
        y += LOG_LINE_HEIGHT;
        draw_text(
            &format!("x {:8}  y {:8}", target.x, target.y),
            panel_x + padding,
            y,
            PANEL_FONT_SIZE,
            WHITE,
        );
        y += LOG_LINE_HEIGHT + 8.0;

        // Journal tail, oldest at the top of the block
        draw_text(
            locale.get("panel.log"),
            panel_x + padding,
            y,
            PANEL_FONT_SIZE,
            SKYBLUE,
        );
        y += LOG_LINE_HEIGHT;
        draw_line(
            panel_x + padding,
            y - LOG_LINE_HEIGHT / 2.0,
            panel_x + panel_width - padding,
            y - LOG_LINE_HEIGHT / 2.0,
            1.0,
            Color::from_rgba(40, 40, 90, 255),
        );

        let lines_that_fit = ((screen_height() - y) / LOG_LINE_HEIGHT).max(0.0) as usize;
        let skip = entries.len().saturating_sub(lines_that_fit);
        for entry in &entries[skip..] {
            draw_text(
                &format!("{:5} {}", entry.level().as_str(), entry.message()),
                panel_x + padding,
                y,
                PANEL_FONT_SIZE,
                Self::level_color(entry.level()),
            );
            y += LOG_LINE_HEIGHT;
        }
    }

    fn level_color(level: LogLevel) -> Color {
        match level {
            LogLevel::Trace => GRAY,
            LogLevel::Debug => LIGHTGRAY,
            LogLevel::Info => WHITE,
            LogLevel::Warning => YELLOW,
            LogLevel::Error => RED,
            LogLevel::Fatal => MAGENTA,
        }
    }

    pub fn window_should_close() -> bool {
        is_key_down(KeyCode::Escape) || is_quit_requested()
    }
}
