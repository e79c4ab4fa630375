/// Behaviour of [`interpolate`] outside the input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Continue the line past the range.
    #[default]
    Extend,
    /// Pin to the nearest output bound.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Map `value` linearly from `input` onto `output`.
///
/// Either range may be descending. A degenerate input range yields the
/// start of the output range.
pub fn interpolate(value: f32, input: [f32; 2], output: [f32; 2], extrapolate: Extrapolate) -> f32 {
    let [in_start, in_end] = input;
    let [out_start, out_end] = output;
    let span = in_end - in_start;
    if span.abs() < f32::EPSILON {
        return out_start;
    }

    let fraction = (value - in_start) / span;
    if !(0.0..=1.0).contains(&fraction) {
        match extrapolate {
            Extrapolate::Clamp => {
                return if fraction < 0.0 { out_start } else { out_end };
            }
            Extrapolate::Identity => return value,
            Extrapolate::Extend => {}
        }
    }
    out_start + (out_end - out_start) * fraction
}
