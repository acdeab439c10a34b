//! Reading tests - values, fills and sheet extents.

mod data_types;
mod dimensions;
mod fill_styles;
