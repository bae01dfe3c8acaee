mod measure;
mod point;
mod years;

pub use measure::Measure;
pub use point::DataPoint;
pub use years::YearRange;
