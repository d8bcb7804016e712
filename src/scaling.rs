/// Scaled display quantity for one ingredient.
///
/// Whole results render without decimals; everything else keeps two decimal
/// digits. Only an exact `.00` tail is dropped, so `1.50` stays `1.50`.
pub fn scaled_quantity(base_quantity: f64, target_servings: u32, base_servings: u32) -> String {
    let base_servings = base_servings.max(1);
    let target_servings = target_servings.max(1);
    let scaled = base_quantity * f64::from(target_servings) / f64::from(base_servings);
    if scaled.fract() == 0.0 {
        format!("{}", scaled as i64)
    } else {
        format!("{scaled:.2}")
    }
}

/// Parses the servings input field. Empty or unparsable input falls back to
/// `base_servings`; anything below 1 is coerced up to 1.
pub fn parse_servings(input: &str, base_servings: u32) -> u32 {
    let value = input.trim().parse::<u32>().unwrap_or(base_servings);
    value.max(1)
}
