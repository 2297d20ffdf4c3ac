pub mod catalog;
pub mod classifier;
pub mod mood;
pub mod priorities;
pub mod quiz;
pub mod recommendations;
pub mod routine;
pub mod weather;

pub use weather::{WeatherProvider, WeatherService};
