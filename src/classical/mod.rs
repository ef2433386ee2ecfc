// src/classical/mod.rs

//! The classical Reed-Solomon code and its spectral transform.
//!
//! `ReedSolomonCode` wraps the field arithmetic to define RS(n, k) over
//! GF(2^k): parameter derivation (`d = n - k + 1`, `t = (d - 1) / 2`),
//! random message generation, systematic encoding through the generator
//! polynomial, and the n-by-n spectral matrix used to move codewords into
//! the transform (frequency) domain.
//!
//! Classical decoding is deliberately absent; the quantum circuit performs
//! the transform-domain syndrome extraction instead.

use crate::core::QrsError;
use crate::field::BinaryField;
use rand::Rng;

/// The immutable n-by-n discrete transform matrix over the field.
///
/// Entry (i, j) is `alpha^(i*j)`, so the matrix is symmetric. It is built
/// once at code construction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectralMatrix {
    size: usize,
    entries: Vec<u16>,
}

impl SpectralMatrix {
    /// Entry (i, j). Indices must be below the matrix size.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u16 {
        self.entries[i * self.size + j]
    }

    /// The side length n.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Builds the spectral matrix from primitive-element powers.
fn build_spectral_matrix(field: &BinaryField, size: usize) -> SpectralMatrix {
    let mut entries = Vec::with_capacity(size * size);
    for i in 0..size {
        for j in 0..size {
            entries.push(field.alpha_pow(i * j));
        }
    }
    SpectralMatrix { size, entries }
}

/// A classical Reed-Solomon code RS(n, k) over GF(2^k), owning its field
/// and its spectral matrix.
#[derive(Debug, Clone)]
pub struct ReedSolomonCode {
    field: BinaryField,
    length: usize,
    dimension: usize,
    minimum_distance: usize,
    error_capacity: usize,
    generator_poly: Vec<u16>,
    spectral: SpectralMatrix,
}

impl ReedSolomonCode {
    /// Constructs RS(n, k) over GF(2^k).
    ///
    /// # Errors
    /// Returns `QrsError::ConfigurationError` when the parameters violate
    /// code well-formedness: `k` must be positive, below `n`, a supported
    /// field degree, and `n` must not exceed the field order minus one.
    pub fn new(n: usize, k: usize) -> Result<Self, QrsError> {
        if k == 0 {
            return Err(QrsError::ConfigurationError {
                message: "code dimension k must be positive".to_string(),
            });
        }
        if k >= n {
            return Err(QrsError::ConfigurationError {
                message: format!("code dimension k = {} must be below the length n = {}", k, n),
            });
        }
        let field = BinaryField::new(k as u32)?;
        if n > field.order() - 1 {
            return Err(QrsError::ConfigurationError {
                message: format!(
                    "code length n = {} exceeds the field order minus one ({})",
                    n,
                    field.order() - 1
                ),
            });
        }

        let minimum_distance = n - k + 1;
        let error_capacity = (minimum_distance - 1) / 2;
        let generator_poly = build_generator_poly(&field, n - k);
        let spectral = build_spectral_matrix(&field, n);

        Ok(Self {
            field,
            length: n,
            dimension: k,
            minimum_distance,
            error_capacity,
            generator_poly,
            spectral,
        })
    }

    /// The underlying field GF(2^k).
    pub fn field(&self) -> &BinaryField {
        &self.field
    }

    /// Codeword length n.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Message length k.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Minimum distance d = n - k + 1.
    pub fn minimum_distance(&self) -> usize {
        self.minimum_distance
    }

    /// Error-correcting capacity t = (d - 1) / 2.
    pub fn error_capacity(&self) -> usize {
        self.error_capacity
    }

    /// The code's spectral matrix.
    pub fn spectral_matrix(&self) -> &SpectralMatrix {
        &self.spectral
    }

    /// Draws a uniformly random message of k field elements.
    pub fn generate_message<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u16> {
        self.field.random_vector(self.dimension, rng)
    }

    /// Systematic encoding: the codeword is the message followed by the
    /// `n - k` parity symbols `message(x) * x^(n-k) mod g(x)`.
    ///
    /// # Errors
    /// Returns `QrsError::InvalidOperation` if the message length is not k.
    pub fn encode(&self, message: &[u16]) -> Result<Vec<u16>, QrsError> {
        if message.len() != self.dimension {
            return Err(QrsError::InvalidOperation {
                message: format!(
                    "message has {} symbols, expected k = {}",
                    message.len(),
                    self.dimension
                ),
            });
        }
        let parity_len = self.length - self.dimension;
        let mut dividend = message.to_vec();
        dividend.extend(std::iter::repeat_n(0u16, parity_len));
        let (_, remainder) = self.field.poly_div_rem(&dividend, &self.generator_poly);

        let mut codeword = message.to_vec();
        // Left-pad the remainder so the parity block is exactly n - k symbols.
        codeword.extend(std::iter::repeat_n(0u16, parity_len - remainder.len().min(parity_len)));
        codeword.extend_from_slice(&remainder[remainder.len().saturating_sub(parity_len)..]);
        Ok(codeword)
    }

    /// Maps a codeword into the spectral domain: the row-vector-times-matrix
    /// product over the field.
    ///
    /// # Errors
    /// Returns `QrsError::InvalidOperation` if the codeword length is not n.
    pub fn spectral_transform(&self, codeword: &[u16]) -> Result<Vec<u16>, QrsError> {
        if codeword.len() != self.length {
            return Err(QrsError::InvalidOperation {
                message: format!(
                    "codeword has {} symbols, expected n = {}",
                    codeword.len(),
                    self.length
                ),
            });
        }
        let mut image = vec![0u16; self.length];
        for (j, out) in image.iter_mut().enumerate() {
            let mut acc = 0u16;
            for (i, &c) in codeword.iter().enumerate() {
                acc = self.field.add(acc, self.field.mul(c, self.spectral.get(i, j)));
            }
            *out = acc;
        }
        Ok(image)
    }
}

/// g(x) = prod_{i=1..parity_len} (x - alpha^i), big-endian coefficients.
fn build_generator_poly(field: &BinaryField, parity_len: usize) -> Vec<u16> {
    let mut g = vec![1u16];
    for i in 1..=parity_len {
        // In characteristic 2, (x - alpha^i) == (x + alpha^i).
        g = field.poly_mul(&g, &[1, field.alpha_pow(i)]);
    }
    g
}
