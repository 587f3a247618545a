//! Run lifecycle: start, per-frame update passes, and the terminal transition.

use super::motion::{advance_obstacles, MotionOutcome};
use super::physics::{apply_gravity, flap, rotation_for, GravityOutcome};
use super::scheduler::{FrameLoop, FramePass};
use super::spawner::ObstacleSpawner;
use super::types::{EndCause, Obstacle, Phase, Player, SimState, Tuning};
use crate::audio::{AudioError, AudioSink};
use crate::core::constants::{GAME_OVER_MESSAGE, SCORE_TITLE, START_MESSAGE};
use crate::core::{Rect, Viewport};
use rand::Rng;

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    /// Obstacle pairs passed this frame.
    pub scored: u32,
    /// Set on the frame a run ends.
    pub ended: Option<EndCause>,
}

/// Read-only view handed to the renderer each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub phase: Phase,
    pub viewport: Viewport,
    pub player: Rect,
    /// The sprite is hidden outside of Play.
    pub player_visible: bool,
    pub rotation_deg: f64,
    /// (top, bottom) barrier rectangles.
    pub obstacles: Vec<(Rect, Rect)>,
    pub score: u32,
    pub score_text: String,
    pub message: String,
}

/// One game session. Holds the only copy of the simulation state and the
/// handles for the per-frame passes.
pub struct Session {
    state: SimState,
    tuning: Tuning,
    viewport: Viewport,
    spawner: ObstacleSpawner,
    frame_loop: FrameLoop,
    audio: Box<dyn AudioSink>,
    message: String,
    frames_played: u64,
}

impl Session {
    pub fn new(tuning: Tuning, viewport: Viewport, audio: Box<dyn AudioSink>) -> Self {
        Self {
            state: SimState::new(&viewport),
            spawner: ObstacleSpawner::new(tuning.spawn_interval_frames),
            tuning,
            viewport,
            frame_loop: FrameLoop::new(),
            audio,
            message: START_MESSAGE.to_string(),
            frames_played: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.state.obstacles
    }

    pub fn end_cause(&self) -> Option<EndCause> {
        self.state.end_cause
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Frames the current (or last) run has been live for.
    pub fn frames_played(&self) -> u64 {
        self.frames_played
    }

    pub fn is_scheduled(&self, pass: FramePass) -> bool {
        self.frame_loop.is_scheduled(pass)
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }

    /// The single player action: start a run, or flap during one.
    pub fn handle_input(&mut self) {
        match self.state.phase {
            Phase::Start | Phase::End => self.start(),
            Phase::Play => flap(&mut self.state.player, self.tuning.flap_velocity),
        }
    }

    /// Reset the run and schedule the update passes.
    pub fn start(&mut self) {
        self.state.obstacles.clear();
        self.state.score = 0;
        self.state.player = Player::spawn(&self.viewport);
        self.state.end_cause = None;
        self.state.phase = Phase::Play;
        self.spawner.reset();
        self.frames_played = 0;
        self.message.clear();

        ignore_audio_failure(self.audio.play_background_loop(), "background loop");

        self.frame_loop.schedule_all();
        tracing::info!(
            width = self.viewport.width,
            height = self.viewport.height,
            "run started"
        );
    }

    /// Terminal transition. Stops every pass, including any still due this frame.
    pub fn end(&mut self, cause: EndCause) {
        if self.state.phase == Phase::End {
            return;
        }
        self.state.phase = Phase::End;
        self.state.end_cause = Some(cause);
        self.frame_loop.cancel_all();
        self.message = GAME_OVER_MESSAGE.to_string();

        ignore_audio_failure(self.audio.play_terminal_sound(), "terminal sound");
        ignore_audio_failure(self.audio.stop_background_loop(), "stop background loop");

        tracing::info!(
            score = self.state.score,
            frames = self.frames_played,
            ?cause,
            "run ended"
        );
    }

    /// Apply a new viewport size, pulling the player back inside if needed.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        let floor = viewport.floor();
        if self.state.player.y > floor {
            self.state.player.y = floor;
        }
        tracing::debug!(width = viewport.width, height = viewport.height, "viewport resized");
    }

    /// Run one frame of whatever passes are scheduled.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> FrameEvents {
        let mut events = FrameEvents::default();
        let due = self.frame_loop.take_due();
        if due.is_empty() {
            return events;
        }
        self.frames_played += 1;

        for handle in due {
            if !self.frame_loop.is_live(handle) || self.state.phase != Phase::Play {
                continue;
            }
            match handle.pass {
                FramePass::MoveObstacles => self.motion_pass(&mut events),
                FramePass::ApplyGravity => self.gravity_pass(&mut events),
                FramePass::SpawnObstacles => self.spawn_pass(rng),
            }
            if self.state.phase == Phase::Play {
                self.frame_loop.reschedule(handle);
            }
        }

        events
    }

    fn motion_pass(&mut self, events: &mut FrameEvents) {
        match advance_obstacles(&mut self.state, self.tuning.obstacle_speed) {
            MotionOutcome::Collision => {
                self.end(EndCause::Collision);
                events.ended = Some(EndCause::Collision);
            }
            MotionOutcome::Clear { scored } => {
                if scored > 0 {
                    tracing::debug!(score = self.state.score, "obstacle passed");
                }
                events.scored += scored;
            }
        }
    }

    fn gravity_pass(&mut self, events: &mut FrameEvents) {
        let outcome = apply_gravity(&mut self.state.player, self.tuning.gravity, &self.viewport);
        if outcome == GravityOutcome::Floor {
            self.end(EndCause::Floor);
            events.ended = Some(EndCause::Floor);
        }
    }

    fn spawn_pass<R: Rng>(&mut self, rng: &mut R) {
        if let Some(obstacle) = self.spawner.tick(&self.viewport, rng) {
            tracing::debug!(gap_top = obstacle.gap_top, x = obstacle.x, "obstacle spawned");
            self.state.obstacles.push(obstacle);
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let player = &self.state.player;
        FrameSnapshot {
            phase: self.state.phase,
            viewport: self.viewport,
            player: player.rect(),
            player_visible: self.state.phase == Phase::Play,
            rotation_deg: rotation_for(player.velocity),
            obstacles: self
                .state
                .obstacles
                .iter()
                .map(|o| (o.top_rect(), o.bottom_rect()))
                .collect(),
            score: self.state.score,
            score_text: format!("{}{}", SCORE_TITLE, self.state.score),
            message: self.message.clone(),
        }
    }
}

fn ignore_audio_failure(result: Result<(), AudioError>, what: &str) {
    if let Err(e) = result {
        tracing::debug!("ignoring {} failure: {}", what, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::core::constants::PLAYER_HEIGHT;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records calls and optionally fails every one of them.
    #[derive(Clone, Default)]
    struct RecordingAudio {
        calls: Rc<RefCell<Vec<&'static str>>>,
        fail: bool,
    }

    impl RecordingAudio {
        fn result(&self, name: &'static str) -> Result<(), AudioError> {
            self.calls.borrow_mut().push(name);
            if self.fail {
                Err(AudioError::Playback("autoplay blocked".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl AudioSink for RecordingAudio {
        fn play_background_loop(&mut self) -> Result<(), AudioError> {
            self.result("play_loop")
        }

        fn stop_background_loop(&mut self) -> Result<(), AudioError> {
            self.result("stop_loop")
        }

        fn play_terminal_sound(&mut self) -> Result<(), AudioError> {
            self.result("terminal")
        }
    }

    fn session() -> Session {
        Session::new(
            Tuning::default(),
            Viewport::new(800.0, 480.0),
            Box::new(SilentAudio),
        )
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_new_session_waits_at_start() {
        let s = session();
        assert_eq!(s.phase(), Phase::Start);
        assert_eq!(s.message(), START_MESSAGE);
        for pass in FramePass::ALL {
            assert!(!s.is_scheduled(pass));
        }
    }

    #[test]
    fn test_tick_before_start_does_nothing() {
        let mut s = session();
        let y = s.player().y;
        let events = s.tick(&mut rng());
        assert_eq!(events, FrameEvents::default());
        assert_eq!(s.player().y, y);
        assert_eq!(s.frames_played(), 0);
    }

    #[test]
    fn test_input_at_start_begins_run() {
        let mut s = session();
        s.handle_input();
        assert_eq!(s.phase(), Phase::Play);
        assert_eq!(s.score(), 0);
        assert_eq!(s.player().y, 216.0);
        assert_eq!(s.player().velocity, 0.0);
        assert!(s.message().is_empty());
        for pass in FramePass::ALL {
            assert!(s.is_scheduled(pass));
        }
    }

    #[test]
    fn test_input_during_play_flaps() {
        let mut s = session();
        s.handle_input();
        s.state_mut().player.velocity = 4.0;
        s.handle_input();
        assert_eq!(s.phase(), Phase::Play);
        assert_eq!(s.player().velocity, Tuning::default().flap_velocity);
    }

    #[test]
    fn test_velocity_grows_by_gravity_each_frame() {
        let mut s = session();
        s.start();
        let mut r = rng();
        let gravity = s.tuning().gravity;
        for _ in 0..20 {
            let before = s.player().velocity;
            s.tick(&mut r);
            assert!((s.player().velocity - before - gravity).abs() < 1e-9);
        }
    }

    #[test]
    fn test_floor_ends_run_and_cancels_passes() {
        let mut s = session();
        s.start();
        let mut r = rng();
        let mut ended = None;
        for _ in 0..200 {
            let events = s.tick(&mut r);
            if events.ended.is_some() {
                ended = events.ended;
            }
        }
        assert_eq!(ended, Some(EndCause::Floor));
        assert_eq!(s.phase(), Phase::End);
        assert_eq!(s.end_cause(), Some(EndCause::Floor));
        assert_eq!(s.player().y, 480.0 - PLAYER_HEIGHT);
        assert_eq!(s.message(), GAME_OVER_MESSAGE);
        for pass in FramePass::ALL {
            assert!(!s.is_scheduled(pass));
        }
    }

    #[test]
    fn test_collision_cancels_remaining_passes_in_same_frame() {
        let mut s = session();
        s.start();
        let player = *s.player();
        // Barrier right on top of the player, gap far below
        s.state_mut().obstacles.push(Obstacle {
            x: player.x + 1.0,
            width: 60.0,
            barrier_height: 432.0,
            gap_top: 400.0,
            gap_height: 60.0,
            scored: false,
        });
        let events = s.tick(&mut rng());
        assert_eq!(events.ended, Some(EndCause::Collision));
        // Gravity pass was due in the same frame but must not have run
        assert_eq!(s.player().y, player.y);
        assert_eq!(s.player().velocity, 0.0);
        assert!(s.frame_loop.is_idle());
    }

    #[test]
    fn test_frames_after_end_are_inert() {
        let mut s = session();
        s.start();
        s.end(EndCause::Collision);
        let snapshot = s.snapshot();
        let mut r = rng();
        for _ in 0..10 {
            assert_eq!(s.tick(&mut r), FrameEvents::default());
        }
        assert_eq!(s.snapshot(), snapshot);
    }

    #[test]
    fn test_end_is_idempotent() {
        let audio = RecordingAudio::default();
        let calls = audio.calls.clone();
        let mut s = Session::new(Tuning::default(), Viewport::default(), Box::new(audio));
        s.start();
        s.end(EndCause::Floor);
        s.end(EndCause::Collision);
        assert_eq!(s.end_cause(), Some(EndCause::Floor));
        assert_eq!(*calls.borrow(), vec!["play_loop", "terminal", "stop_loop"]);
    }

    #[test]
    fn test_audio_failures_do_not_affect_run() {
        let audio = RecordingAudio {
            fail: true,
            ..Default::default()
        };
        let mut s = Session::new(Tuning::default(), Viewport::default(), Box::new(audio));
        s.handle_input();
        assert_eq!(s.phase(), Phase::Play);
        s.tick(&mut rng());
        assert_eq!(s.phase(), Phase::Play);
        s.end(EndCause::Floor);
        assert_eq!(s.phase(), Phase::End);
    }

    #[test]
    fn test_restart_clears_previous_run() {
        let mut s = session();
        s.start();
        s.state_mut().score = 7;
        s.state_mut().obstacles.push(Obstacle {
            x: 500.0,
            width: 60.0,
            barrier_height: 432.0,
            gap_top: 100.0,
            gap_height: 168.0,
            scored: true,
        });
        s.end(EndCause::Collision);
        s.handle_input();
        assert_eq!(s.phase(), Phase::Play);
        assert_eq!(s.score(), 0);
        assert!(s.obstacles().is_empty());
        assert!(s.end_cause().is_none());
    }

    #[test]
    fn test_obstacles_spawn_on_interval() {
        let mut s = Session::new(
            Tuning {
                gravity: 0.0,
                ..Tuning::default()
            },
            Viewport::new(800.0, 480.0),
            Box::new(SilentAudio),
        );
        s.start();
        let mut r = rng();
        for _ in 0..120 {
            s.tick(&mut r);
        }
        assert!(s.obstacles().is_empty());
        s.tick(&mut r);
        assert_eq!(s.obstacles().len(), 1);
        assert_eq!(s.obstacles()[0].x, 800.0);
    }

    #[test]
    fn test_resize_reclamps_player() {
        let mut s = session();
        s.start();
        s.state_mut().player.y = 400.0;
        s.resize(Viewport::new(800.0, 300.0));
        assert_eq!(s.player().y, 300.0 - PLAYER_HEIGHT);
        assert_eq!(s.phase(), Phase::Play);

        s.resize(Viewport::new(800.0, 8.0));
        assert_eq!(s.player().y, 0.0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut s = session();
        let idle = s.snapshot();
        assert!(!idle.player_visible);
        assert_eq!(idle.message, START_MESSAGE);

        s.start();
        s.state_mut().score = 3;
        s.state_mut().player.velocity = 2.0;
        let snap = s.snapshot();
        assert!(snap.player_visible);
        assert_eq!(snap.score_text, "Score: 3");
        assert_eq!(snap.rotation_deg, 6.0);
        assert_eq!(snap.player, s.player().rect());
    }
}
