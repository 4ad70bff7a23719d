//! geovista view - rendering port, viewer state, and wiring
//!
//! Defines the `MapSurface` port the external map renderer implements, the
//! render coordinator that drives it, and the event-handling state machine
//! of the viewer. `MemorySurface` provides a recording surface for tests
//! and headless use.

pub mod app;
pub mod memory;
pub mod ports;
pub mod render;
pub mod state;

pub use app::Viewer;
pub use memory::MemorySurface;
pub use ports::{HeatPoint, HeatmapSettings, MapSurface, Marker};
pub use render::RenderCoordinator;
pub use state::{Transition, ViewerEvent, ViewerState};
