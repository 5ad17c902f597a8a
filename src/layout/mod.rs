//! Layout engine
//!
//! Every panel is laid out in two explicit steps. First its boxes are
//! measured from representative strings (the widest plausible rendering of
//! each field, so the layout does not jitter as values change). Then the
//! anchors are derived from those boxes, the panel origin and the panel
//! width, in the order documented on each `compute`. Deriving anchors never
//! measures anything, so it is a pure function of its inputs.

pub mod date;
pub mod detail;
pub mod error;
pub mod header;
pub mod update_time;

pub use date::{DateBoxes, DateLayout};
pub use detail::{ColumnAnchors, ColumnBoxes, DetailBoxes, DetailLayout};
pub use error::ErrorLayout;
pub use header::{HeaderBoxes, HeaderLayout};
pub use update_time::UpdateTimeLayout;
