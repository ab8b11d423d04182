pub mod swipe;

pub use swipe::{MoveVerdict, SwipeDir, SwipeTracker};
