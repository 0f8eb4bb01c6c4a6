#![forbid(unsafe_op_in_unsafe_fn)]

pub mod click_open;
pub mod ray;
pub mod scene;

pub use click_open::{ClickOpenHandler, ClickTarget, UrlOpener};
pub use ray::Ray;
pub use scene::{Collider, ColliderId, Hit, Scene, Shape};
