use crate::core::data::complex::Complex;

/// The number of iterations a point survives before its orbit escapes.
/// `max_level` means the point did not escape within the cap and is presumed
/// to be in the set.
pub type EscapeLevel = u16;

/// Counts iterations of z ← z² + c from z = 0 until |z|² exceeds 4 or the
/// count reaches `max_level`. Testing the squared modulus avoids a square
/// root per iteration.
#[must_use]
pub fn escape_level(c: Complex, max_level: EscapeLevel) -> EscapeLevel {
    let mut z = Complex::ZERO;
    let mut level: EscapeLevel = 0;

    while z.magnitude_squared() <= 4.0 && level < max_level {
        z = z * z + c;
        level += 1;
    }

    level
}
