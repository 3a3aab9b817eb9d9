mod clip;

pub use clip::{Clip, NewClip};
