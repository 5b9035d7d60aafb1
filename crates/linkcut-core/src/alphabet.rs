/// Number of symbols in a short-code alphabet.
pub const ALPHABET_SIZE: usize = 62;

const STANDARD_SYMBOLS: &[u8; ALPHABET_SIZE] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// An ordered set of 62 distinct printable ASCII symbols.
///
/// The position of a symbol is the base-62 digit it stands for. An alphabet
/// is a plain `Copy` value backed by a `'static` table, so it can be handed to
/// an encoder without any shared mutable state.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [u8; ALPHABET_SIZE],
}

impl Alphabet {
    /// The alphabet used for all generated short codes:
    /// `a`-`z` for digits 0-25, `A`-`Z` for 26-51 and `0`-`9` for 52-61.
    pub const STANDARD: Alphabet = Alphabet {
        symbols: STANDARD_SYMBOLS,
    };

    /// Returns the numeric base of this alphabet.
    pub const fn base(&self) -> u64 {
        ALPHABET_SIZE as u64
    }

    /// Returns the symbol for `digit`.
    ///
    /// `digit` must be in `0..62`; the encoder never produces anything else.
    pub fn symbol_of(&self, digit: usize) -> char {
        debug_assert!(digit < ALPHABET_SIZE, "digit {digit} out of range");
        char::from(self.symbols[digit])
    }

    /// Returns the digit a symbol stands for, or `None` if it is not part of
    /// the alphabet.
    pub fn digit_of(&self, symbol: char) -> Option<usize> {
        if !symbol.is_ascii() {
            return None;
        }
        self.symbols.iter().position(|&s| s == symbol as u8)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the table is ASCII by construction
        let symbols = std::str::from_utf8(self.symbols).unwrap_or_default();
        f.debug_tuple("Alphabet").field(&symbols).finish()
    }
}
