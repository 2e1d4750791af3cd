pub mod analysis;
pub mod charts;
pub mod dataset;
pub mod output;
pub mod table;
