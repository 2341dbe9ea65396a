// Lattice hash: maps an integer grid point and a seed to a pseudo-random float.
// Every step is 32-bit two's complement arithmetic; the wraparound is what
// scrambles the bits, so all operations go through `wrapping_*`.

pub const RAND_A: i32 = 134_775_813;
pub const RAND_B: i32 = 1_103_515_245;

// Returns the signed product as a float divided by u32::MAX,
// so the value lies in about [-0.5, 0.5]. Never clamped.
#[inline]
pub fn lattice_hash(seed: u32, x: i32, y: i32) -> f32 {
    // Seed is mixed in on its raw bit pattern
    let seed = seed as i32;

    let t1 = (x ^ y).wrapping_mul(RAND_A);
    let t2 = t1 ^ seed.wrapping_add(x);
    // Shift on the unsigned pattern so bits falling off the top are simply dropped
    let shifted = ((RAND_B.wrapping_mul(x) as u32) << 16) as i32;
    let t3 = (shifted ^ RAND_B.wrapping_mul(y)).wrapping_sub(RAND_A);

    t2.wrapping_mul(t3) as f32 / u32::MAX as f32
}
