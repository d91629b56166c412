use crate::constants::{IDLE_SPIN_STEP, IDLE_SPIN_THRESHOLD, IDLE_SPIN_WRAP};
use crate::state::SceneState;
use crate::timeline::{Stage, Timeline};

/// What a single [`Scheduler::tick`] did to the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    pub stage: Option<Stage>,
    pub idle_spin: bool,
}

/// Picks the active timeline entry for a progress value and applies it.
///
/// Must run exactly once per rendered frame, before the frame reads the
/// scene, since the idle spin accumulates per tick.
#[derive(Clone, Debug)]
pub struct Scheduler {
    timeline: Timeline,
    idle_step: f32,
}

impl Scheduler {
    pub fn new(timeline: Timeline) -> Self {
        Self::with_idle_step(timeline, IDLE_SPIN_STEP)
    }

    pub fn with_idle_step(timeline: Timeline, idle_step: f32) -> Self {
        Self {
            timeline,
            idle_step,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Evaluate the timeline once against `progress`.
    ///
    /// At most one entry runs (the first whose closed range contains
    /// `progress`). Independently, once progress reaches the idle threshold
    /// the box keeps turning by a fixed step on x and y every tick.
    pub fn tick(&self, scene: &mut SceneState, progress: f32) -> Tick {
        let stage = self.timeline.find(progress).map(|entry| {
            entry.run(scene, progress);
            entry.stage
        });

        let idle_spin = progress >= IDLE_SPIN_THRESHOLD;
        if idle_spin {
            scene.idle_spin = advance_spin(scene.idle_spin, self.idle_step);
            scene.cube.rotation.x = advance_spin(scene.cube.rotation.x, self.idle_step);
            scene.cube.rotation.y = advance_spin(scene.cube.rotation.y, self.idle_step);
        }

        Tick { stage, idle_spin }
    }
}

/// Add `step`, first folding `angle` by whole turns if it has grown past
/// [`IDLE_SPIN_WRAP`], so the step never rounds away.
#[inline]
fn advance_spin(angle: f32, step: f32) -> f32 {
    let angle = if angle >= IDLE_SPIN_WRAP {
        angle.rem_euclid(IDLE_SPIN_WRAP)
    } else {
        angle
    };
    angle + step
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Timeline::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_step_is_configurable() {
        let s = Scheduler::with_idle_step(Timeline::standard(), 0.5);
        let mut scene = SceneState::default();
        s.tick(&mut scene, 150.0);
        let first = scene.cube.rotation;
        s.tick(&mut scene, 150.0);
        assert!((scene.cube.rotation.x - first.x - 0.5).abs() < 1e-6);
        assert!((scene.cube.rotation.y - first.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn default_installs_standard_timeline() {
        let s = Scheduler::default();
        let stages: Vec<Stage> = s.timeline().entries().iter().map(|e| e.stage).collect();
        assert_eq!(
            stages,
            [Stage::Intro, Stage::Rotation, Stage::CameraMove, Stage::FinalSpin]
        );
    }

    #[test]
    fn huge_idle_angles_keep_advancing() {
        let s = Scheduler::default();
        let mut scene = SceneState::default();
        scene.idle_spin = 300_000.0;
        scene.cube.rotation.x = 300_000.0;
        scene.cube.rotation.y = 300_000.0;

        s.tick(&mut scene, 120.0);
        let folded = 300_000.0f32.rem_euclid(IDLE_SPIN_WRAP);
        assert!(scene.cube.rotation.x < IDLE_SPIN_WRAP + IDLE_SPIN_STEP);
        assert!((scene.cube.rotation.x - folded - IDLE_SPIN_STEP).abs() < 1e-3);
        assert!((scene.cube.rotation.y - folded - IDLE_SPIN_STEP).abs() < 1e-3);
        assert!((scene.idle_spin - folded - IDLE_SPIN_STEP).abs() < 1e-3);

        let before = scene.cube.rotation.x;
        s.tick(&mut scene, 120.0);
        assert!(scene.cube.rotation.x > before);
    }

    #[test]
    fn idle_angle_folds_by_whole_turns() {
        let s = Scheduler::default();
        let mut scene = SceneState::default();
        scene.cube.rotation.x = IDLE_SPIN_WRAP + 0.5;
        s.tick(&mut scene, 120.0);
        let x = scene.cube.rotation.x;
        assert!(x < 1.0);
        // Same orientation as the unfolded angle
        let unfolded = 0.5 + IDLE_SPIN_STEP;
        assert!((x.sin() - unfolded.sin()).abs() < 1e-3);
        assert!((x.cos() - unfolded.cos()).abs() < 1e-3);
    }

    /// After reaching the bottom and scrolling back, the final spin is its
    /// fixed-origin formula plus the idle spin accumulated so far, rather
    /// than the bare formula.
    #[test]
    fn final_spin_adds_accumulated_idle_spin_after_scrolling_back() {
        let s = Scheduler::default();
        let mut scene = SceneState::default();
        for _ in 0..5 {
            s.tick(&mut scene, 100.0);
        }
        assert!((scene.idle_spin - 5.0 * IDLE_SPIN_STEP).abs() < 1e-6);

        let mut fresh = SceneState::default();
        s.tick(&mut fresh, 90.0);
        s.tick(&mut scene, 90.0);
        let offset = scene.cube.rotation.x - fresh.cube.rotation.x;
        assert!((offset - scene.idle_spin).abs() < 1e-4);
    }

    #[test]
    fn below_threshold_never_spins() {
        let s = Scheduler::default();
        let mut scene = SceneState::default();
        let t = s.tick(&mut scene, 99.99);
        assert_eq!(t.stage, Some(Stage::FinalSpin));
        assert!(!t.idle_spin);
    }
}
