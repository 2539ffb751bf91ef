pub mod aggregator;
pub mod audit;
pub mod calendar;
pub mod holidays;
pub mod recorder;
pub mod rounding;
