pub(super) fn parse_unit_interval_f32(raw: &str) -> std::result::Result<f32, String> {
    let value = raw
        .parse::<f32>()
        .map_err(|_| format!("invalid float value '{raw}'"))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(format!("value must be within [0.0, 1.0], got {value}"));
    }
    Ok(value)
}

pub(super) fn parse_heading_level(raw: &str) -> std::result::Result<u8, String> {
    let value = raw
        .parse::<u8>()
        .map_err(|_| format!("invalid integer value '{raw}'"))?;
    if !(1..=6).contains(&value) {
        return Err(format!("heading level must be within [1, 6], got {value}"));
    }
    Ok(value)
}
