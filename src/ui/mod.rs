pub mod browse;
pub mod calendar;
pub mod charts;
pub mod panels;
pub mod stats;
