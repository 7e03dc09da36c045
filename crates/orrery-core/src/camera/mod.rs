//! Camera rig and user orbit controls.

pub mod controls;
pub mod rig;

pub use controls::OrbitInput;
pub use rig::{CameraRig, CameraUniform};
