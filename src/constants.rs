/// An attribute must beat this information gain to be split on.
/// Gains at or below it are treated as rounding noise around zero.
pub const MIN_INFORMATION_GAIN: f64 = 1e-12;
