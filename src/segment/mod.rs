pub mod segmenter;
pub mod state;

pub use segmenter::Segmenter;
pub use state::{Region, SegmentState};
