pub mod earthquake;
pub mod error;
pub mod magnitude;

pub use earthquake::{EarthquakeBuilder, EarthquakeSystem};
pub use error::Error;
pub use magnitude::{Magnitude, MAGNITUDE_UPPER_BOUND};
