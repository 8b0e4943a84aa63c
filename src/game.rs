use crate::config;
use crate::journal::{JournalSource, LogEntry};
use crate::locale::LocaleBook;
use crate::model::{ArcMotionModel, Pose, RobotModel};
use crate::render::Renderer;
use crate::types::Target;
use crate::watch::Listener;
use log::info;
use macroquad::prelude::{
    MouseButton, get_frame_time, is_mouse_button_pressed, mouse_position, next_frame,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// What the renderer draws: the model state as of the last change
/// notification.
#[derive(Clone, Copy)]
struct ModelView {
    prev_pose: Pose,
    pose: Pose,
    target: Target,
}

/// The Game struct wires the model, the journal and the window together:
/// fixed-timestep ticks drive the model, mouse clicks move the target, and
/// change notifications refresh the cached state the renderer reads.
pub struct Game {
    pub model: Arc<RobotModel>,
    pub journal: Arc<JournalSource>,
    locale: LocaleBook,
    time_accumulator: f32,
    view: ModelView,
    journal_cache: Vec<LogEntry>,
    pose_dirty: Arc<AtomicBool>,
    journal_dirty: Arc<AtomicBool>,
    // Handles kept for the lifetime of the game; dropping them would not
    // unregister, so symmetry with unsubscribe is preserved explicitly.
    model_listener: Listener,
    journal_listener: Listener,
}

impl Game {
    pub fn new(journal_capacity: usize, locale: LocaleBook) -> Self {
        let model = Arc::new(RobotModel::new(Box::new(ArcMotionModel::new())));
        let journal = Arc::new(JournalSource::new(journal_capacity));

        let pose_dirty = Arc::new(AtomicBool::new(false));
        let journal_dirty = Arc::new(AtomicBool::new(false));

        let model_listener: Listener = {
            let flag = Arc::clone(&pose_dirty);
            Arc::new(move || flag.store(true, Ordering::Release))
        };
        let journal_listener: Listener = {
            let flag = Arc::clone(&journal_dirty);
            Arc::new(move || flag.store(true, Ordering::Release))
        };
        model.subscribe(&model_listener);
        journal.subscribe(&journal_listener);

        journal.debug(locale.get("log.started"));

        let view = ModelView {
            prev_pose: model.prev_pose(),
            pose: model.pose(),
            target: model.target(),
        };
        let journal_cache = journal.all();

        Game {
            model,
            journal,
            locale,
            time_accumulator: 0.0,
            view,
            journal_cache,
            pose_dirty,
            journal_dirty,
            model_listener,
            journal_listener,
        }
    }

    /// Run the main loop using the provided renderer.
    pub async fn run(&mut self, renderer: &mut Renderer) {
        info!("Starting main loop...");

        while !Renderer::window_should_close() {
            if is_mouse_button_pressed(MouseButton::Left) {
                let (mx, my) = mouse_position();
                self.apply_click(mx, my);
            }

            self.advance_ticks(get_frame_time());
            self.refresh_caches();

            let alpha = (self.time_accumulator / config::TICK_SECONDS).clamp(0.0, 1.0) as f64;
            renderer.draw_frame(
                self.view.prev_pose,
                self.view.pose,
                self.view.target,
                alpha,
                &self.journal_cache,
                &self.locale,
            );
            next_frame().await;
        }

        self.model.unsubscribe(&self.model_listener);
        self.journal.unsubscribe(&self.journal_listener);
        info!("Exiting simulation loop.");
    }

    /// Routes a click to the model when it lands inside the arena area,
    /// and records the target change in the journal.
    fn apply_click(&mut self, x: f32, y: f32) {
        if x < 0.0 || x >= config::ARENA_WIDTH as f32 || y < 0.0 || y >= config::ARENA_HEIGHT as f32
        {
            return;
        }
        self.model.set_target(x as i32, y as i32);
        self.journal.debug(self.locale.get("log.target_changed"));
    }

    /// Fixed simulation update loop: consume the elapsed frame time in
    /// whole ticks, carrying the remainder for render interpolation.
    fn advance_ticks(&mut self, frame_time: f32) {
        self.time_accumulator += frame_time;
        while self.time_accumulator >= config::TICK_SECONDS {
            self.time_accumulator -= config::TICK_SECONDS;
            self.model.tick(config::TICK_DURATION);
        }
    }

    /// Pulls fresh model/journal state, but only when a change notification
    /// has fired since the last frame.
    fn refresh_caches(&mut self) {
        if self.pose_dirty.swap(false, Ordering::AcqRel) {
            self.view = ModelView {
                prev_pose: self.model.prev_pose(),
                pose: self.model.pose(),
                target: self.model.target(),
            };
        }
        if self.journal_dirty.swap(false, Ordering::AcqRel) {
            self.journal_cache = self.journal.all();
        }
    }
}
