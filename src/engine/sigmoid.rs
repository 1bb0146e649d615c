/// Logistic function `1 / (1 + e^-x)`.
///
/// Branches on sign so `exp` is only ever called with a non-positive
/// argument and cannot overflow.
pub fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
