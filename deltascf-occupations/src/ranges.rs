use crate::defaults::NO_BANDS;
use crate::vector::OccupationVector;
use itertools::Itertools;

/// Compact representation of an ascending list of band indices, e.g.
/// `[1, 2, 3, 5, 7, 8, 9]` becomes `"1–3,5,7–9"`. An empty list is written as
/// `"none"`.
pub fn compact_ranges(bands: &[usize]) -> String {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    for &band in bands.iter() {
        if let Some((_, end)) = runs.last_mut() {
            if band == *end + 1 {
                *end = band;
                continue;
            }
        }
        runs.push((band, band));
    }
    if runs.is_empty() {
        return String::from(NO_BANDS);
    }
    runs.iter()
        .map(|(start, end)| {
            if start == end {
                format!("{}", start)
            } else {
                format!("{}–{}", start, end)
            }
        })
        .join(",")
}

/// Summary of all bands of the channel that carry the occupation `value`.
pub fn summarize_bands(vector: &OccupationVector, value: f64) -> String {
    compact_ranges(&vector.bands_with(value))
}
