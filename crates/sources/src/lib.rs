//! sense-panel-sources: Metrics providers and assembly of the data each
//! panel needs.

mod collect;
mod static_source;

pub use collect::{collect_power, collect_rooms, power_query, room_query};
pub use static_source::{StaticEntry, StaticProvider};
