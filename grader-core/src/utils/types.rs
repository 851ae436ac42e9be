/// Alias to a scalar floating type.
///
/// NOTE: prefer `f64` as distances in homework inputs are compared against reference costs,
/// switching to `f32` leads to precision issues there.
pub type Float = f64;
