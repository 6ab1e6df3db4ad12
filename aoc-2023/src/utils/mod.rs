pub mod lines;
pub mod range_map;
