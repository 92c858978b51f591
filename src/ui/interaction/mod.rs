//! Mouse interaction: clickable regions registered during rendering.

pub mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
