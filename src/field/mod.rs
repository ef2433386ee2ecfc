// src/field/mod.rs

//! Finite field arithmetic over GF(2^k).
//!
//! The field is the alphabet of the Reed-Solomon symbols. Multiplication and
//! exponentiation are table-driven: a logarithm and a (doubled) antilogarithm
//! table are generated once at construction from a fixed primitive polynomial
//! for the extension degree. Addition is carry-less (XOR).
//!
//! The module also fixes the bijection between field elements and k-bit
//! binary strings used to lay spectral-domain symbols onto qubits:
//! polynomial coefficients, most significant first.

use crate::core::QrsError;
use rand::Rng;

/// Primitive polynomials (including the leading term) for degrees 1 through 8.
/// Index `d - 1` holds the polynomial for GF(2^d).
const PRIMITIVE_POLYS: [u32; 8] = [
    0b11,        // x + 1
    0b111,       // x^2 + x + 1
    0b1011,      // x^3 + x + 1
    0b1_0011,    // x^4 + x + 1
    0b10_0101,   // x^5 + x^2 + 1
    0b100_0011,  // x^6 + x + 1
    0b1000_1001, // x^7 + x^3 + 1
    0x11D,       // x^8 + x^4 + x^3 + x^2 + 1
];

/// A binary extension field GF(2^k) with its generator tables.
///
/// All arithmetic goes through `&self` methods; elements are plain `u16`
/// values in `[0, 2^k)`. The primitive element is `alpha = x` (value 2 for
/// every supported degree above one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryField {
    degree: u32,
    order: usize,
    primitive_poly: u32,
    /// alpha^i for i in [0, 2*(order-1)); doubled so `mul` never reduces.
    exp: Vec<u16>,
    /// log[a] = i with alpha^i = a, for a in [1, order).
    log: Vec<u16>,
}

impl BinaryField {
    /// Constructs GF(2^k) for `1 <= k <= 8`.
    ///
    /// # Errors
    /// Returns `QrsError::ConfigurationError` for unsupported degrees.
    pub fn new(degree: u32) -> Result<Self, QrsError> {
        if degree == 0 || degree as usize > PRIMITIVE_POLYS.len() {
            return Err(QrsError::ConfigurationError {
                message: format!(
                    "field degree {} not supported (expected 1..={})",
                    degree,
                    PRIMITIVE_POLYS.len()
                ),
            });
        }
        let primitive_poly = PRIMITIVE_POLYS[degree as usize - 1];
        let order = 1usize << degree;
        let mut exp = vec![0u16; 2 * (order - 1)];
        let mut log = vec![0u16; order];

        // Generate the multiplicative group by repeated multiplication with
        // alpha = x, reducing by the primitive polynomial on overflow.
        let mut x: u32 = 1;
        for i in 0..order - 1 {
            exp[i] = x as u16;
            log[x as usize] = i as u16;
            x <<= 1;
            if x & (order as u32) != 0 {
                x ^= primitive_poly;
            }
        }
        for i in order - 1..2 * (order - 1) {
            exp[i] = exp[i - (order - 1)];
        }

        Ok(Self {
            degree,
            order,
            primitive_poly,
            exp,
            log,
        })
    }

    /// The extension degree k.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// The number of field elements, 2^k.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The primitive (generator) element alpha.
    pub fn primitive_element(&self) -> u16 {
        self.exp[usize::from(self.degree > 1)]
    }

    /// Field addition (characteristic 2, so identical to subtraction).
    #[inline]
    pub fn add(&self, a: u16, b: u16) -> u16 {
        a ^ b
    }

    /// Field multiplication via the log/antilog tables.
    #[inline]
    pub fn mul(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        let la = self.log[a as usize] as usize;
        let lb = self.log[b as usize] as usize;
        self.exp[la + lb]
    }

    /// Multiplicative inverse of a non-zero element.
    #[inline]
    pub fn inv(&self, a: u16) -> u16 {
        debug_assert!(a != 0, "zero has no multiplicative inverse");
        let group_order = self.order - 1;
        self.exp[(group_order - self.log[a as usize] as usize) % group_order]
    }

    /// alpha^e, with the exponent reduced modulo the group order.
    #[inline]
    pub fn alpha_pow(&self, e: usize) -> u16 {
        self.exp[e % (self.order - 1)]
    }

    /// a^e for an arbitrary element a.
    pub fn pow(&self, a: u16, e: usize) -> u16 {
        if a == 0 {
            return if e == 0 { 1 } else { 0 };
        }
        let la = self.log[a as usize] as usize;
        self.alpha_pow(la * e)
    }

    /// Draws a uniformly random field element from the given source.
    pub fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> u16 {
        rng.random_range(0..self.order as u16)
    }

    /// Draws a vector of `len` uniformly random field elements.
    pub fn random_vector<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Vec<u16> {
        (0..len).map(|_| self.random_element(rng)).collect()
    }

    /// Expands an element into its k polynomial coefficients, most
    /// significant first. This is the fixed element-to-binary bijection.
    pub fn element_bits(&self, e: u16) -> Vec<u8> {
        (0..self.degree)
            .rev()
            .map(|bit| ((e >> bit) & 1) as u8)
            .collect()
    }

    /// Inverse of [`element_bits`](Self::element_bits).
    pub fn element_from_bits(&self, bits: &[u8]) -> u16 {
        bits.iter().fold(0u16, |acc, &b| (acc << 1) | u16::from(b & 1))
    }

    // --- Polynomial helpers (big-endian coefficient order) ---

    /// Product of two polynomials with coefficients in the field.
    pub fn poly_mul(&self, a: &[u16], b: &[u16]) -> Vec<u16> {
        if a.is_empty() || b.is_empty() {
            return vec![0];
        }
        let mut out = vec![0u16; a.len() + b.len() - 1];
        for (i, &ai) in a.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in b.iter().enumerate() {
                if bj == 0 {
                    continue;
                }
                out[i + j] ^= self.mul(ai, bj);
            }
        }
        trim_leading_zeros(out)
    }

    /// Quotient and remainder of polynomial division over the field.
    pub fn poly_div_rem(&self, dividend: &[u16], divisor: &[u16]) -> (Vec<u16>, Vec<u16>) {
        debug_assert!(divisor.iter().any(|&c| c != 0), "division by zero polynomial");
        let a = trim_leading_zeros(dividend.to_vec());

        let n = a.len();
        let m = divisor.len();
        if n < m {
            return (vec![0], a);
        }

        let mut q = vec![0u16; n - m + 1];
        let mut r = a;
        let lead_inv = self.inv(divisor[0]);

        for i in 0..=n - m {
            let rc = r[i];
            if rc == 0 {
                continue;
            }
            let coef = self.mul(rc, lead_inv);
            q[i] = coef;
            for (j, &dc) in divisor.iter().enumerate() {
                r[i + j] ^= self.mul(coef, dc);
            }
        }

        let rem = if m == 1 {
            vec![0]
        } else {
            trim_leading_zeros(r[n - (m - 1)..].to_vec())
        };
        (trim_leading_zeros(q), rem)
    }
}

#[inline]
fn trim_leading_zeros(mut v: Vec<u16>) -> Vec<u16> {
    while v.len() > 1 && v[0] == 0 {
        v.remove(0);
    }
    v
}
