mod booklet;
mod constants;
mod geometry;
mod imposition;
mod layout;
mod metrics;
mod options;
mod render;
mod stats;
mod text;
mod types;

pub use booklet::{booklet_bytes, generate_booklet, load_text, render_booklet};
pub use constants::*;
pub use geometry::PageGeometry;
pub use imposition::{
    BACK_COLUMN_ORDER, FRONT_COLUMN_ORDER, SheetSide, SlotAssignment, column_order, impose_side,
    physical_position,
};
pub use layout::*;
pub use metrics::{CourierMetrics, FontMetrics};
pub use options::*;
pub use render::*;
pub use stats::{BookletStatistics, calculate_statistics};
pub use text::*;
pub use types::*;
