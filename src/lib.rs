//! Falagard look-and-feel engine
//!
//! Data-driven widget skinning: widget looks loaded from look-and-feel
//! definitions describe named areas, layered state imagery and
//! auto-generated child widgets. Widgets resolve them against their current
//! size and properties to fill a render cache and lay out their children.

pub mod config;
pub mod dump;
pub mod error;
pub mod falagard;
pub mod render;
pub mod widget;
pub mod xml;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use falagard::{WidgetLook, WidgetLookManager};
