//! Shared helpers: pagination windows, local filtering, date parsing,
//! and the astro heat-map color scale.

pub mod colors;
pub mod dates;
pub mod pagination;
