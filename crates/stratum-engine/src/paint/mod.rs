//! Paint model shared by drawables and renderers.
//!
//! Only solid fills exist; geometry types remain in `coords`.

mod color;

pub use color::Color;
