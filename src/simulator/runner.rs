//! Runs the real `Session` headlessly under the autopilot.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::audio::SilentAudio;
use crate::game::{Phase, Session};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let pilot = Autopilot::default();
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(run_idx))),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &pilot, &mut rng);
        tracing::debug!(
            run = run_idx + 1,
            score = stats.score,
            frames = stats.frames,
            cause = ?stats.end_cause,
            "simulated run finished"
        );
        runs.push(stats);
    }

    SimReport::from_runs(runs)
}

/// Play one run from start until it ends or hits the frame cap.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, pilot: &Autopilot, rng: &mut R) -> RunStats {
    let mut session = Session::new(config.tuning, config.viewport, Box::new(SilentAudio));
    session.start();

    while session.phase() == Phase::Play && session.frames_played() < config.max_frames_per_run {
        if pilot.should_flap(&session) {
            session.handle_input();
        }
        session.tick(rng);
    }

    RunStats {
        score: session.score(),
        frames: session.frames_played(),
        end_cause: session.end_cause(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::EndCause;

    #[test]
    fn test_same_seed_same_report() {
        let config = SimConfig::quick(7);
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.runs, b.runs);
    }

    #[test]
    fn test_run_count_matches_config() {
        let report = run_simulation(&SimConfig::quick(11));
        assert_eq!(report.num_runs, 5);
        assert_eq!(report.runs.len(), 5);
    }

    #[test]
    fn test_max_seed_wraps_for_later_runs() {
        let config = SimConfig {
            num_runs: 2,
            seed: Some(u64::MAX),
            max_frames_per_run: 10,
            ..SimConfig::default()
        };
        let report = run_simulation(&config);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs.len(), 2);
    }

    #[test]
    fn test_frame_cap_cuts_run_short() {
        let config = SimConfig {
            max_frames_per_run: 10,
            ..SimConfig::quick(3)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stats = simulate_single_run(&config, &Autopilot::default(), &mut rng);
        assert_eq!(stats.frames, 10);
        assert!(stats.end_cause.is_none());
    }

    #[test]
    fn test_autopilot_outlives_free_fall() {
        // Falling from 45% height hits the floor in about 51 frames
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let stats = simulate_single_run(&SimConfig::quick(5), &Autopilot::default(), &mut rng);
        assert!(stats.frames > 100);
        assert_ne!(stats.end_cause, Some(EndCause::Floor));
    }
}
