//! Browser platform adapter (WASM only).
//!
//! Thin replay layer: the chart itself is rendered by replaying the
//! pure draw-command frames from [`crate::chart::ChartState`] onto
//! Canvas2D contexts; the only DOM state written here is the tooltip
//! element and the canvas sizes.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod fetch;

#[cfg(target_arch = "wasm32")]
pub use app::App;
#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2DRenderer;
#[cfg(target_arch = "wasm32")]
pub use fetch::{fetch_records, FetchError};
