//! Circular rotation of ordered sequences
//!
//! `[1, 2, 3, 4, 5]` shifted by `3` becomes `[4, 5, 1, 2, 3]`; a negative
//! distance rotates the other way.

/// Normalize a signed rotation distance into `[0, len)`.
fn normalized_distance(len: usize, distance: isize) -> usize {
    if len == 0 {
        return 0;
    }
    distance.rem_euclid(len as isize) as usize
}

/// Return a copy of `sequence` rotated left by `distance` positions.
///
/// Negative distances rotate right. Distances whose magnitude exceeds the
/// length wrap around, so the function is total over all integers.
///
/// # Examples
///
/// ```
/// # use loop_layout::geometry::circular_shift;
/// assert_eq!(circular_shift(&[1, 2, 3, 4, 5], 3), vec![4, 5, 1, 2, 3]);
/// assert_eq!(circular_shift(&[1, 2, 3, 4, 5], -1), vec![5, 1, 2, 3, 4]);
/// ```
pub fn circular_shift<T: Clone>(sequence: &[T], distance: isize) -> Vec<T> {
    let mut out = Vec::with_capacity(sequence.len());
    circular_shift_into(sequence, distance, &mut out);
    out
}

/// Write `sequence` rotated left by `distance` into `out`, reusing its allocation.
///
/// Any previous contents of `out` are discarded.
pub fn circular_shift_into<T: Clone>(sequence: &[T], distance: isize, out: &mut Vec<T>) {
    out.clear();
    let split = normalized_distance(sequence.len(), distance);
    out.extend_from_slice(&sequence[split..]);
    out.extend_from_slice(&sequence[..split]);
}

/// Rotate `sequence` left by `distance` in place.
pub fn circular_shift_in_place<T>(sequence: &mut [T], distance: isize) {
    let split = normalized_distance(sequence.len(), distance);
    sequence.rotate_left(split);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_left_by_positive_distance() {
        assert_eq!(circular_shift(&[1, 2, 3, 4, 5], 3), vec![4, 5, 1, 2, 3]);
    }

    #[test]
    fn shifts_right_by_negative_distance() {
        assert_eq!(circular_shift(&[1, 2, 3, 4, 5], -2), vec![4, 5, 1, 2, 3]);
    }

    #[test]
    fn zero_distance_is_identity() {
        assert_eq!(circular_shift(&[1, 2, 3], 0), vec![1, 2, 3]);
    }

    #[test]
    fn full_length_distance_is_identity() {
        assert_eq!(circular_shift(&[1, 2, 3], 3), vec![1, 2, 3]);
        assert_eq!(circular_shift(&[1, 2, 3], -3), vec![1, 2, 3]);
    }

    #[test]
    fn distance_beyond_length_wraps() {
        assert_eq!(circular_shift(&[1, 2, 3], 7), vec![2, 3, 1]);
        assert_eq!(circular_shift(&[1, 2, 3], -7), vec![3, 1, 2]);
    }

    #[test]
    fn empty_sequence_stays_empty() {
        let empty: [u8; 0] = [];
        assert!(circular_shift(&empty, 5).is_empty());
    }

    #[test]
    fn into_reuses_buffer_and_discards_old_contents() {
        let mut out = vec![9, 9, 9, 9, 9, 9];
        circular_shift_into(&[1, 2, 3], 1, &mut out);
        assert_eq!(out, vec![2, 3, 1]);
    }

    #[test]
    fn in_place_matches_copying_variant() {
        let mut values = [1, 2, 3, 4, 5];
        circular_shift_in_place(&mut values, -1);
        assert_eq!(values.to_vec(), circular_shift(&[1, 2, 3, 4, 5], -1));
    }
}
