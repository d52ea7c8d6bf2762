//! Token naming tables.

use blueprint_core::TypeStyle;

/// Named grayscale ramp. Colors outside this table fall through to the
/// hue-bucket heuristic.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("#000000", "black"),
    ("#ffffff", "white"),
    ("#f3f4f6", "gray-100"),
    ("#e5e7eb", "gray-200"),
    ("#d1d5db", "gray-300"),
    ("#9ca3af", "gray-400"),
    ("#6b7280", "gray-500"),
    ("#374151", "gray-600"),
    ("#1f2937", "gray-700"),
    ("#111827", "gray-800"),
    ("#0f172a", "gray-900"),
];

/// Name a color token. `index` is the color's position in the sorted
/// distinct-color list and disambiguates heuristic names.
pub(crate) fn color_name(hex: &str, index: usize) -> String {
    let hex = hex.to_lowercase();
    if let Some((_, name)) = NAMED_COLORS.iter().find(|(h, _)| *h == hex) {
        return (*name).to_string();
    }
    if hex.len() < 7 {
        return format!("color-{}", index + 1);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).unwrap_or(0)
    };
    let (r, g, b) = (channel(1..3), channel(3..5), channel(5..7));

    let suffix = index + 1;
    match (r > 200, g > 200, b > 200) {
        (true, false, false) if g < 100 && b < 100 => format!("red-{suffix}"),
        (false, true, false) if r < 100 && b < 100 => format!("green-{suffix}"),
        (false, false, true) if r < 100 && g < 100 => format!("blue-{suffix}"),
        (true, true, false) if b < 100 => format!("yellow-{suffix}"),
        (true, false, true) if g < 100 => format!("purple-{suffix}"),
        (false, true, true) if r < 100 => format!("cyan-{suffix}"),
        _ => format!("color-{suffix}"),
    }
}

/// Name a typography token by its pixel size. `index` disambiguates sizes
/// below the smallest named threshold.
pub(crate) fn typography_name(style: &TypeStyle, index: usize) -> String {
    let size = style.font_size;
    let name = if size >= 48.0 {
        "display"
    } else if size >= 36.0 {
        "heading-1"
    } else if size >= 30.0 {
        "heading-2"
    } else if size >= 24.0 {
        "heading-3"
    } else if size >= 20.0 {
        "heading-4"
    } else if size >= 18.0 {
        "heading-5"
    } else if size >= 16.0 {
        "heading-6"
    } else if size >= 14.0 {
        "body"
    } else if size >= 12.0 {
        "small"
    } else {
        return format!("text-{}", index + 1);
    };
    name.to_string()
}
