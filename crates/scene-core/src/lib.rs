pub mod constants;
pub mod error;
pub mod input;
pub mod interp;
pub mod scheduler;
pub mod state;
pub mod timeline;

pub use error::TimelineError;
pub use input::{InputState, ScrollMetrics, Viewport};
pub use interp::{lerp, lerp_vec3, scale_percent};
pub use scheduler::{Scheduler, Tick};
pub use state::{Camera, SceneState, Transform};
pub use timeline::{ScrollRange, Stage, StageFn, Timeline, TimelineEntry, STANDARD_TIMELINE};
