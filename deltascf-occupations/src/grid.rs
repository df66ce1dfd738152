use crate::vector::OccupationVector;
use itertools::Itertools;
use ndarray::Axis;

/// Lines of the occupation card for one channel. Each line holds `width`
/// space separated occupations, the last line holds the remainder.
///
/// Panics if `width` is zero.
pub fn grid_rows(vector: &OccupationVector, width: usize) -> impl Iterator<Item = String> + '_ {
    assert!(width > 0, "the row width has to be positive");
    vector
        .values()
        .axis_chunks_iter(Axis(0), width)
        .map(|row| row.iter().map(|f| format!("{}", *f as u8)).join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin::SpinChannel;

    #[test]
    fn remainder_in_last_row() {
        let vector = OccupationVector::ground_state(SpinChannel::Up, 23, 12).unwrap();
        let rows: Vec<String> = grid_rows(&vector, 10).collect();
        assert_eq!(rows.len(), 3);
        let tokens: Vec<usize> = rows.iter().map(|r| r.split(' ').count()).collect();
        assert_eq!(tokens, vec![10, 10, 3]);
        assert_eq!(rows[0], "1 1 1 1 1 1 1 1 1 1");
        assert_eq!(rows[1], "1 1 0 0 0 0 0 0 0 0");
        assert_eq!(rows[2], "0 0 0");
    }

    #[test]
    fn evenly_divisible() {
        let vector = OccupationVector::ground_state(SpinChannel::Up, 20, 0).unwrap();
        let rows: Vec<String> = grid_rows(&vector, 10).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.split(' ').count() == 10));
    }

    #[test]
    fn custom_width() {
        let vector = OccupationVector::ground_state(SpinChannel::Down, 5, 3).unwrap();
        let rows: Vec<String> = grid_rows(&vector, 4).collect();
        assert_eq!(rows, vec!["1 1 1 0", "0"]);
    }
}
