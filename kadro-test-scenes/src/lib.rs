pub mod scene;

pub use scene::{scenes, BoxScene};
