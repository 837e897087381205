//! UI Components
//!
//! Reusable Leptos components for the demo dashboard.

pub mod chart;
pub mod counter;
pub mod drop_zone;
pub mod grid;
pub mod progress;
pub mod text_panel;
pub mod theme_panel;
pub mod toast;

pub use chart::ChartPanel;
pub use counter::CounterCard;
pub use drop_zone::DropZone;
pub use grid::InteractiveGrid;
pub use progress::ProgressPanel;
pub use text_panel::TextTransformer;
pub use theme_panel::ThemeControls;
pub use toast::Toast;
