//! Game systems

pub mod turn_display;
