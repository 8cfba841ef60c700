/// Returns whether `value` lies in the half-open range `[min, max)`.
///
/// The lower bound is inclusive and the upper bound exclusive, so adjacent ranges never overlap.
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value < max
}
