use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    #[error("timeline has no entries")]
    Empty,
    #[error("entry {index} has a non-finite bound")]
    NonFinite { index: usize },
    #[error("entry {index} has zero width at {start}")]
    ZeroWidth { index: usize, start: f32 },
    #[error("entry {index} is inverted: start {start} > end {end}")]
    Inverted { index: usize, start: f32, end: f32 },
    #[error("entry {index} starts at {start}, before previous start {previous}")]
    OutOfOrder {
        index: usize,
        start: f32,
        previous: f32,
    },
    #[error("entry {index} starts at {start}, inside previous range ending at {previous_end}")]
    Overlap {
        index: usize,
        start: f32,
        previous_end: f32,
    },
}
