//! Stateless helpers for menu-driven front ends
//!
//! Independent of the mirroring machinery.

pub mod color;
pub mod numeric;
pub mod sets;
pub mod text;

pub use color::{desaturate, generate_color_from, ParseColorError};
pub use numeric::{
    decimal_points_for_range, decimal_points_for_value, increment_for_range, is_int, is_numeric,
};
pub use sets::{set_add, set_contains, set_intersection, set_remove};
pub use text::{
    cast_to_bool, escape_quotes, normalise_whitespace, pluralise, sanitise_json, unescape_quotes,
};
