/// A trusted RSA root key.
///
/// Root keys certify the signing keys embedded in manifest tokens. They are
/// compiled into the firmware, which makes [`RootKey::new`] usable in a
/// `const` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootKey<'a> {
    kid: &'a str,
    modulus: &'a [u8],
    exponent: &'a [u8],
}

impl<'a> RootKey<'a> {
    /// Creates a [`RootKey`].
    ///
    /// `modulus` and `exponent` are big-endian unsigned integers.
    #[must_use]
    pub const fn new(kid: &'a str, modulus: &'a [u8], exponent: &'a [u8]) -> Self {
        Self {
            kid,
            modulus,
            exponent,
        }
    }

    /// Returns the key identifier.
    #[must_use]
    #[inline]
    pub const fn kid(&self) -> &'a str {
        self.kid
    }

    /// Returns the big-endian modulus.
    #[must_use]
    #[inline]
    pub const fn modulus(&self) -> &'a [u8] {
        self.modulus
    }

    /// Returns the big-endian public exponent.
    #[must_use]
    #[inline]
    pub const fn exponent(&self) -> &'a [u8] {
        self.exponent
    }
}

/// Finds the root key whose identifier is exactly `kid`.
#[must_use]
pub fn find_root_key<'k, 'a>(keys: &'k [RootKey<'a>], kid: &str) -> Option<&'k RootKey<'a>> {
    keys.iter().find(|key| key.kid.as_bytes() == kid.as_bytes())
}
