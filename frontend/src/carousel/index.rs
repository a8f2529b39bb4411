//! Index arithmetic for circular and clamped carousels.

/// Maps any signed index onto `[0, len)`. Returns 0 for an empty ring.
pub fn wrap_index(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as isize) as usize
}

/// Clamps a signed index into `[0, max]`.
pub fn clamp_index(index: isize, max: usize) -> usize {
    index.clamp(0, max as isize) as usize
}

/// Signed shortest distance around the ring from `from` to `to`.
///
/// Positive values lie to the right of `from`. When both directions are equally
/// long (even `len`) the positive distance wins.
pub fn circular_offset(from: usize, to: usize, len: usize) -> isize {
    if len == 0 {
        return 0;
    }
    let forward = wrap_index(to as isize - from as isize, len) as isize;
    if forward > len as isize / 2 {
        forward - len as isize
    } else {
        forward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_negative_values() {
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(-6, 5), 4);
        assert_eq!(wrap_index(5, 5), 0);
        assert_eq!(wrap_index(12, 5), 2);
    }

    #[test]
    fn wrap_on_empty_ring_is_zero() {
        assert_eq!(wrap_index(-3, 0), 0);
        assert_eq!(wrap_index(7, 0), 0);
    }

    #[test]
    fn clamp_keeps_index_in_window() {
        assert_eq!(clamp_index(-1, 4), 0);
        assert_eq!(clamp_index(2, 4), 2);
        assert_eq!(clamp_index(9, 4), 4);
    }

    #[test]
    fn offsets_take_the_short_way_round() {
        assert_eq!(circular_offset(3, 5, 7), 2);
        assert_eq!(circular_offset(3, 1, 7), -2);
        assert_eq!(circular_offset(3, 0, 7), -3);
        assert_eq!(circular_offset(0, 6, 7), -1);
        assert_eq!(circular_offset(6, 0, 7), 1);
        assert_eq!(circular_offset(0, 3, 6), 3);
        assert_eq!(circular_offset(2, 2, 4), 0);
    }
}
