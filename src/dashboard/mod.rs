//! Trend Dashboard
//!
//! Server-side rendering of the single-page dashboard:
//!
//! - **view**: Trigger flags → one of four mutually exclusive views
//! - **components**: Leptos components for tiles, cards and the page
//! - **render**: Server-side rendering of the components into a document
//! - **style**: Inline stylesheet
//!
//! ```text
//! ?viral=1 ──┐
//! ?early=1 ──┼─→ View ─→ select rows ─→ render_grid / render_detailed (capped)
//! ?all=1   ──┘
//! ```

pub mod components;
pub mod render;
pub mod style;
pub mod view;

pub use render::{
    render_dashboard, render_detailed, render_empty_page, render_grid, render_page, EMPTY_NOTICE,
};
pub use view::{Layout, Section, View, ViewTriggers};
