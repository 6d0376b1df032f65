//! ryecore: the runaway button's brains
//!
//! A proximity gate decides when the pointer is too close, a placement
//! solver picks where the button flees to, and [`Escaper`] runs the two on
//! every pointer or viewport update while the playground is mounted.

pub mod config;
pub mod error;
pub mod escape;
pub mod feed;
pub mod geometry;
pub mod placement;
pub mod proximity;
pub mod repaint;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use config::{EscapeConfig, PlaygroundSettings};
pub use error::{EscapeError, Unready};
pub use escape::{Escaper, Outcome};
pub use feed::{Feed, Subscription};
pub use geometry::{Point, Viewport};
pub use placement::solve;
pub use proximity::should_escape;
pub use repaint::{RepaintController, RepaintReason};
pub use theme::RyeTheme;
