//! The fixed scroll timeline, expressed as a table of ranges and stage functions.
//!
//! Each stage is a plain function of the scene and a normalized `alpha`
//! (0 at the range start, 1 at its end). Stages only ever assign absolute
//! values computed from constants, so calling one twice with the same alpha
//! leaves the scene unchanged.

use crate::constants::*;
use crate::error::TimelineError;
use crate::interp::{lerp, lerp_vec3, scale_percent};
use crate::state::SceneState;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Intro,
    Rotation,
    CameraMove,
    FinalSpin,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Intro => "intro",
            Stage::Rotation => "rotation",
            Stage::CameraMove => "camera-move",
            Stage::FinalSpin => "final-spin",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed scroll-percent interval `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: f32,
    pub end: f32,
}

impl ScrollRange {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    const fn from_pair(pair: (f32, f32)) -> Self {
        Self::new(pair.0, pair.1)
    }

    /// Inclusive on both ends. NaN is never contained.
    #[inline]
    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.start && progress <= self.end
    }

    #[inline]
    pub fn alpha(&self, progress: f32) -> f32 {
        scale_percent(self.start, self.end, progress)
    }
}

pub type StageFn = fn(&mut SceneState, f32);

#[derive(Clone, Copy)]
pub struct TimelineEntry {
    pub stage: Stage,
    pub range: ScrollRange,
    pub apply: StageFn,
}

impl TimelineEntry {
    /// Run this entry's stage for the given raw progress.
    #[inline]
    pub fn run(&self, scene: &mut SceneState, progress: f32) {
        (self.apply)(scene, self.range.alpha(progress));
    }
}

impl fmt::Debug for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimelineEntry")
            .field("stage", &self.stage)
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

pub const STANDARD_TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        stage: Stage::Intro,
        range: ScrollRange::from_pair(INTRO_RANGE),
        apply: intro,
    },
    TimelineEntry {
        stage: Stage::Rotation,
        range: ScrollRange::from_pair(ROTATION_RANGE),
        apply: rotation,
    },
    TimelineEntry {
        stage: Stage::CameraMove,
        range: ScrollRange::from_pair(CAMERA_MOVE_RANGE),
        apply: camera_move,
    },
    TimelineEntry {
        stage: Stage::FinalSpin,
        range: ScrollRange::from_pair(FINAL_SPIN_RANGE),
        apply: final_spin,
    },
];

/// Box and torus slide past each other along z while the camera holds still.
pub fn intro(scene: &mut SceneState, alpha: f32) {
    scene.cube.position.z = lerp(BOX_Z_START, BOX_Z_END, alpha);
    scene.torus.position.z = lerp(TORUS_Z_START, TORUS_Z_END, alpha);
    scene.reset_camera();
}

pub fn rotation(scene: &mut SceneState, alpha: f32) {
    scene.reset_camera();
    scene.cube.rotation.z = lerp(BOX_ROTATION_START, BOX_ROTATION_END, alpha);
}

pub fn camera_move(scene: &mut SceneState, alpha: f32) {
    scene.camera.look_at(scene.cube.position);
    scene.camera.eye = lerp_vec3(CAMERA_DEFAULT_EYE, CAMERA_MOVE_EYE_END, alpha);
}

/// Recomputed from the initial rotation every call, so x/y left behind by
/// earlier stages is ignored. Only the accumulated idle spin carries over.
pub fn final_spin(scene: &mut SceneState, alpha: f32) {
    let idle = scene.idle_spin;
    scene.cube.rotation.x = lerp(BOX_INITIAL_ROTATION.x, FINAL_SPIN_END, alpha) + idle;
    scene.cube.rotation.y = lerp(BOX_INITIAL_ROTATION.y, FINAL_SPIN_END, alpha) + idle;
}

/// Validated, ordered set of timeline entries.
#[derive(Clone, Debug)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Build a timeline from `entries`, which must be finite, non-empty
    /// ranges sorted by start. Neighbours may share an endpoint; the earlier
    /// entry then wins at that value.
    pub fn new(entries: Vec<TimelineEntry>) -> Result<Self, TimelineError> {
        if entries.is_empty() {
            return Err(TimelineError::Empty);
        }
        let mut previous: Option<ScrollRange> = None;
        for (index, entry) in entries.iter().enumerate() {
            let ScrollRange { start, end } = entry.range;
            if !start.is_finite() || !end.is_finite() {
                return Err(TimelineError::NonFinite { index });
            }
            if start > end {
                return Err(TimelineError::Inverted { index, start, end });
            }
            if start == end {
                return Err(TimelineError::ZeroWidth { index, start });
            }
            if let Some(prev) = previous {
                if start < prev.start {
                    return Err(TimelineError::OutOfOrder {
                        index,
                        start,
                        previous: prev.start,
                    });
                }
                if start < prev.end {
                    return Err(TimelineError::Overlap {
                        index,
                        start,
                        previous_end: prev.end,
                    });
                }
            }
            previous = Some(entry.range);
        }
        Ok(Self { entries })
    }

    pub fn standard() -> Self {
        Self {
            entries: STANDARD_TIMELINE.to_vec(),
        }
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// First entry whose closed range contains `progress`.
    pub fn find(&self, progress: f32) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.range.contains(progress))
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::standard()
    }
}
