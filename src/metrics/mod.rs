//! Metric descriptors, per-scrape sample collection and text exposition

pub mod catalog;
pub mod exposition;
pub mod sink;

pub use sink::MetricSink;
