pub mod clips;
pub mod recordings;
