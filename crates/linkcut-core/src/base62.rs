use crate::alphabet::Alphabet;

/// `u64::MAX` needs 11 base-62 digits.
const MAX_DIGITS: usize = 11;

/// Encodes integer ids into short codes using positional base-62 notation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base62Encoder {
    alphabet: Alphabet,
}

impl Base62Encoder {
    /// Creates an encoder over the given alphabet.
    pub const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Returns the alphabet this encoder maps digits through.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Encodes `id`, most significant digit first.
    ///
    /// Zero encodes to the single digit-0 symbol rather than an empty string.
    pub fn encode(&self, mut id: u64) -> String {
        if id == 0 {
            return self.alphabet.symbol_of(0).to_string();
        }

        let base = self.alphabet.base();
        let mut digits = Vec::with_capacity(MAX_DIGITS);
        while id > 0 {
            digits.push((id % base) as usize);
            id /= base;
        }

        digits
            .into_iter()
            .rev()
            .map(|digit| self.alphabet.symbol_of(digit))
            .collect()
    }
}

/// Encodes `id` with the [standard alphabet](Alphabet::STANDARD).
pub fn encode(id: u64) -> String {
    Base62Encoder::new(Alphabet::STANDARD).encode(id)
}
