// Wrap a lattice coordinate into the tiling period.
// Truncating remainder: a negative coordinate stays negative, and the hash
// treats it as its own lattice point rather than folding it to the positive side.
//
// Panics when `period == 0`; callers keep `octave <= period` at config time.
#[inline]
pub fn tile(coordinate: i32, period: i32) -> i32 {
    coordinate.wrapping_rem(period)
}
