/// Distance label used on every page.
///
/// Under 1000 meters the value is printed as is with `m`; from 1000 on it is
/// shown in kilometers with exactly one decimal, rounded the way a browser's
/// `toFixed(1)` rounds the double `meters / 1000`: 1150 is `1.1 km` (1.15 sits
/// just below the midpoint in binary) and 1250 is `1.3 km` (an exact tie rounds
/// up). Missing distances print `-`.
pub fn format_distance(meters: Option<u32>) -> String {
    match meters {
        None => "-".to_string(),
        Some(meters) if meters < 1000 => format!("{meters} m"),
        Some(meters) => {
            let tenths = kilometer_tenths(meters);
            format!("{}.{} km", tenths / 10, tenths % 10)
        }
    }
}

// Only a decimal midpoint can round differently on the double than on the exact value.
fn kilometer_tenths(meters: u32) -> u32 {
    if meters % 100 != 50 {
        return (meters + 50) / 100;
    }
    let exact = f64::from(meters);
    let km = exact / 1000.0;
    // Sign of the division's rounding error, computed with a single rounding.
    if km.mul_add(1000.0, -exact) < 0.0 {
        meters / 100
    } else {
        meters / 100 + 1
    }
}
