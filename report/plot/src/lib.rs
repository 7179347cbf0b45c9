#![doc = include_str!("../README.md")]

mod error;
mod group;
mod shape;

pub use error::GroupError;
pub use group::{group, PlotGroup, PlotGroups, PlotTrace};
pub use shape::BenchmarkShape;
