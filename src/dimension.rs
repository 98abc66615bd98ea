//! Dimension-code rendering for the reserved "Dimensions" token.
//!
//! Projects a trimmed width/height pair plus a shape indicator into the short
//! code embedded in filenames, e.g. `100.4x47R12`. Shape parsing fails
//! softly: an indicator matching no rule simply produces no suffix.

/// Suffix codes appended after the numeric size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCodes {
    pub zero: String,
    pub round: String,
    pub ellipse: String,
    pub circle: String,
}

impl Default for ShapeCodes {
    fn default() -> Self {
        use crate::constants::dimension::*;
        Self {
            zero: ZERO_CODE.to_string(),
            round: ROUND_CODE.to_string(),
            ellipse: ELLIPSE_CODE.to_string(),
            circle: CIRCLE_CODE.to_string(),
        }
    }
}

/// Everything the codec needs besides the raw PDF size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionOptions {
    /// Trim removed from each edge; the rendered size shrinks by twice this
    pub trim: f64,
    /// Shape indicator as entered by the user ("R", "Y", a radius, "0", ...)
    pub shape: String,
    /// Render the round code without its numeric radius
    pub hide_numeric_radius: bool,
    pub codes: ShapeCodes,
}

/// Render the dimension code for a width/height pair.
pub fn render(
    width: f64,
    height: f64,
    trim: f64,
    shape: &str,
    hide_numeric_radius: bool,
    codes: &ShapeCodes,
) -> String {
    let w = round1(width - 2.0 * trim);
    let h = round1(height - 2.0 * trim);
    format!(
        "{}x{}{}",
        format_size(w),
        format_size(h),
        shape_suffix(shape, hide_numeric_radius, codes)
    )
}

/// [`render`] with the options bundle used by the pattern generator.
pub fn render_with(width: f64, height: f64, options: &DimensionOptions) -> String {
    render(
        width,
        height,
        options.trim,
        &options.shape,
        options.hide_numeric_radius,
        &options.codes,
    )
}

/// Half-up rounding to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One decimal place, with a trailing `.0` dropped (47.0 renders as "47").
fn format_size(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn shape_suffix(shape: &str, hide_numeric_radius: bool, codes: &ShapeCodes) -> String {
    let shape = shape.trim();
    if shape.eq_ignore_ascii_case("R") {
        return codes.circle.clone();
    }
    if shape.eq_ignore_ascii_case("Y") {
        return codes.ellipse.clone();
    }
    if let Ok(radius) = shape.parse::<u32>() {
        if radius > 0 {
            return if hide_numeric_radius {
                codes.round.clone()
            } else {
                format!("{}{}", codes.round, radius)
            };
        }
        return codes.zero.clone();
    }
    // Unparseable shape: no suffix, never an error
    String::new()
}
