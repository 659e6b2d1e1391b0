use std::borrow::Cow;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::DecodeSliceError;

use serde::Deserialize;

use tracing::{debug, info};

use crate::crypto::{RSA_SCRATCH_SIZE, SHA256_SIZE, rsa_pkcs1_verify, sha256};
use crate::error::{Error, ErrorKind, Result};
use crate::keys::{RootKey, find_root_key};

/// Capacity of the decoded manifest token header.
pub const HEADER_CAPACITY: usize = 3072;
/// Capacity of the decoded manifest token payload.
pub const PAYLOAD_CAPACITY: usize = 1024;
/// Capacity of a decoded signature.
pub const SIGNATURE_CAPACITY: usize = 512;
/// Capacity of the decoded signing key certificate header.
pub const JWK_HEADER_CAPACITY: usize = 256;
/// Capacity of the decoded signing key certificate payload.
pub const JWK_PAYLOAD_CAPACITY: usize = 1024;
/// Capacity of the decoded signing key modulus.
pub const MODULUS_CAPACITY: usize = 512;
/// Capacity of the decoded signing key exponent.
pub const EXPONENT_CAPACITY: usize = 16;
/// Capacity of the buffer where base64url segments are mapped to the
/// standard alphabet before decoding.
pub const STAGING_CAPACITY: usize = 4096;
/// Capacity of the decoded manifest digest claim.
pub const DIGEST_CAPACITY: usize = 64;

const SUPPORTED_ALGORITHM: &str = "RS256";
const SUPPORTED_KEY_TYPE: &str = "RSA";

// Standard alphabet, with or without padding.
pub(crate) const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The caller provided buffers used by [`ManifestAuthenticator`].
///
/// Authentication performs no allocation besides the JSON fields that need
/// unescaping. The scratch is about 12 KiB, so it usually lives in a static
/// or on the heap.
pub struct JwsScratch {
    staging: [u8; STAGING_CAPACITY],
    header: [u8; HEADER_CAPACITY],
    payload: [u8; PAYLOAD_CAPACITY],
    signature: [u8; SIGNATURE_CAPACITY],
    jwk_header: [u8; JWK_HEADER_CAPACITY],
    jwk_payload: [u8; JWK_PAYLOAD_CAPACITY],
    jwk_signature: [u8; SIGNATURE_CAPACITY],
    modulus: [u8; MODULUS_CAPACITY],
    exponent: [u8; EXPONENT_CAPACITY],
    digest: [u8; DIGEST_CAPACITY],
    rsa: [u8; RSA_SCRATCH_SIZE],
}

impl Default for JwsScratch {
    fn default() -> Self {
        Self::new()
    }
}

impl JwsScratch {
    /// Creates a zeroed [`JwsScratch`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            staging: [0; STAGING_CAPACITY],
            header: [0; HEADER_CAPACITY],
            payload: [0; PAYLOAD_CAPACITY],
            signature: [0; SIGNATURE_CAPACITY],
            jwk_header: [0; JWK_HEADER_CAPACITY],
            jwk_payload: [0; JWK_PAYLOAD_CAPACITY],
            jwk_signature: [0; SIGNATURE_CAPACITY],
            modulus: [0; MODULUS_CAPACITY],
            exponent: [0; EXPONENT_CAPACITY],
            digest: [0; DIGEST_CAPACITY],
            rsa: [0; RSA_SCRATCH_SIZE],
        }
    }
}

/// The three segments of a compact JWS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactJws<'a> {
    header: &'a str,
    payload: &'a str,
    signature: &'a str,
    signing_input: &'a str,
}

impl<'a> CompactJws<'a> {
    /// Splits a `header.payload.signature` token.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MalformedToken`] unless the token contains
    /// exactly two dots and a non-empty signature.
    pub fn split(token: &'a str) -> Result<Self> {
        let mut dots = token.match_indices('.').map(|(index, _)| index);

        let (Some(first), Some(second), None) = (dots.next(), dots.next(), dots.next()) else {
            return Err(Error::new(
                ErrorKind::MalformedToken,
                "A compact token has exactly three segments.",
            ));
        };

        if second + 1 == token.len() {
            return Err(Error::new(
                ErrorKind::MalformedToken,
                "Missing token signature.",
            ));
        }

        Ok(Self {
            header: &token[..first],
            payload: &token[first + 1..second],
            signature: &token[second + 1..],
            signing_input: &token[..second],
        })
    }

    /// Returns the encoded header.
    #[must_use]
    #[inline]
    pub const fn header(&self) -> &'a str {
        self.header
    }

    /// Returns the encoded payload.
    #[must_use]
    #[inline]
    pub const fn payload(&self) -> &'a str {
        self.payload
    }

    /// Returns the encoded signature.
    #[must_use]
    #[inline]
    pub const fn signature(&self) -> &'a str {
        self.signature
    }

    /// Returns the signed bytes, `header.payload`.
    #[must_use]
    #[inline]
    pub const fn signing_input(&self) -> &'a str {
        self.signing_input
    }
}

/// Decodes a base64url segment into `output`, returning the decoded size.
///
/// The segment is mapped to the standard alphabet in `staging` first.
/// Padding is optional.
///
/// # Errors
///
/// Returns [`ErrorKind::OutOfMemory`] when `staging` or `output` is too
/// small and [`ErrorKind::MalformedToken`] when the segment is not valid
/// base64url.
pub fn decode_segment(segment: &str, staging: &mut [u8], output: &mut [u8]) -> Result<usize> {
    let staged = staging.get_mut(..segment.len()).ok_or_else(|| {
        Error::new(
            ErrorKind::OutOfMemory,
            format!("Segment of {} bytes exceeds the staging buffer.", segment.len()),
        )
    })?;

    for (staged, byte) in staged.iter_mut().zip(segment.bytes()) {
        *staged = match byte {
            b'-' => b'+',
            b'_' => b'/',
            byte => byte,
        };
    }

    LENIENT
        .decode_slice(&*staged, output)
        .map_err(|e| match e {
            DecodeSliceError::OutputSliceTooSmall => Error::new(
                ErrorKind::OutOfMemory,
                format!("Decoded segment exceeds {} bytes.", output.len()),
            ),
            DecodeSliceError::DecodeError(e) => {
                Error::new(ErrorKind::MalformedToken, format!("Invalid base64url: {e}"))
            }
        })
}

/// A signature verification primitive.
pub trait SignatureVerifier {
    /// Verifies `signature` over `message` with the given RSA public key.
    ///
    /// `scratch` holds at least [`RSA_SCRATCH_SIZE`] bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the signature does not verify.
    fn verify(
        &mut self,
        message: &[u8],
        signature: &[u8],
        modulus: &[u8],
        exponent: &[u8],
        scratch: &mut [u8],
    ) -> Result<()>;
}

/// RSA PKCS#1 v1.5 with SHA-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pkcs1Verifier;

impl SignatureVerifier for Pkcs1Verifier {
    fn verify(
        &mut self,
        message: &[u8],
        signature: &[u8],
        modulus: &[u8],
        exponent: &[u8],
        scratch: &mut [u8],
    ) -> Result<()> {
        rsa_pkcs1_verify(message, signature, modulus, exponent, scratch)
    }
}

#[derive(Deserialize)]
struct ManifestHeader<'a> {
    #[serde(borrow)]
    alg: Cow<'a, str>,
    #[serde(borrow)]
    sjwk: Cow<'a, str>,
}

#[derive(Deserialize)]
struct JwkHeader<'a> {
    #[serde(borrow)]
    kid: Cow<'a, str>,
}

#[derive(Deserialize)]
struct Jwk<'a> {
    #[serde(borrow)]
    kty: Cow<'a, str>,
    #[serde(borrow)]
    n: Cow<'a, str>,
    #[serde(borrow)]
    e: Cow<'a, str>,
    #[serde(borrow)]
    alg: Cow<'a, str>,
}

#[derive(Deserialize)]
struct ManifestClaims<'a> {
    #[serde(borrow)]
    sha256: Cow<'a, str>,
}

/// Authenticates update manifests against a set of trusted root keys.
///
/// A manifest token carries, in its header, a signing key certificate: a
/// nested token whose payload is the RSA signing key in JWK form, signed by
/// one of the root keys. Authentication succeeds only when:
///
/// 1. the certificate names a trusted root key,
/// 2. the root key verifies the certificate,
/// 3. the signing key verifies the manifest token,
/// 4. the manifest digests to the `sha256` claim of the token.
pub struct ManifestAuthenticator<'k, V = Pkcs1Verifier> {
    root_keys: &'k [RootKey<'k>],
    verifier: V,
}

impl<'k> ManifestAuthenticator<'k> {
    /// Creates a [`ManifestAuthenticator`] verifying RSA PKCS#1 v1.5
    /// signatures.
    #[must_use]
    #[inline]
    pub const fn new(root_keys: &'k [RootKey<'k>]) -> Self {
        Self::with_verifier(root_keys, Pkcs1Verifier)
    }
}

impl<'k, V: SignatureVerifier> ManifestAuthenticator<'k, V> {
    /// Creates a [`ManifestAuthenticator`] with a custom
    /// [`SignatureVerifier`].
    #[must_use]
    #[inline]
    pub const fn with_verifier(root_keys: &'k [RootKey<'k>], verifier: V) -> Self {
        Self {
            root_keys,
            verifier,
        }
    }

    /// Returns the trusted root keys.
    #[must_use]
    #[inline]
    pub const fn root_keys(&self) -> &'k [RootKey<'k>] {
        self.root_keys
    }

    /// Returns the [`SignatureVerifier`].
    #[must_use]
    #[inline]
    pub const fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Authenticates `manifest` against its signed `token`.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::MalformedToken`] when a token, a header or a claim
    ///   cannot be decoded
    /// - [`ErrorKind::OutOfMemory`] when a decoded segment exceeds its
    ///   scratch buffer
    /// - [`ErrorKind::WrongRootKey`] when no trusted root key matches the
    ///   certificate
    /// - [`ErrorKind::SigningKeyRejected`] when the certificate signature is
    ///   invalid
    /// - [`ErrorKind::ManifestRejected`] when the token signature is invalid
    /// - [`ErrorKind::DigestMismatch`] when the manifest does not match the
    ///   signed digest
    pub fn authenticate(
        &mut self,
        manifest: &[u8],
        token: &str,
        scratch: &mut JwsScratch,
    ) -> Result<()> {
        let JwsScratch {
            staging,
            header,
            payload,
            signature,
            jwk_header,
            jwk_payload,
            jwk_signature,
            modulus,
            exponent,
            digest,
            rsa,
        } = scratch;

        let token = CompactJws::split(token)?;
        let header_size = decode_segment(token.header, staging, header)?;
        let payload_size = decode_segment(token.payload, staging, payload)?;
        let signature_size = decode_segment(token.signature, staging, signature)?;

        let manifest_header: ManifestHeader<'_> = parse_json(&header[..header_size])?;
        check_algorithm(&manifest_header.alg)?;

        let certificate = CompactJws::split(&manifest_header.sjwk)?;
        let jwk_header_size = decode_segment(certificate.header, staging, jwk_header)?;
        let jwk_payload_size = decode_segment(certificate.payload, staging, jwk_payload)?;
        let jwk_signature_size = decode_segment(certificate.signature, staging, jwk_signature)?;

        let certificate_header: JwkHeader<'_> = parse_json(&jwk_header[..jwk_header_size])?;
        let root_key = find_root_key(self.root_keys, &certificate_header.kid).ok_or_else(|| {
            Error::new(
                ErrorKind::WrongRootKey,
                format!("Unknown root key `{}`.", certificate_header.kid),
            )
        })?;

        let jwk: Jwk<'_> = parse_json(&jwk_payload[..jwk_payload_size])?;
        if jwk.kty != SUPPORTED_KEY_TYPE {
            return Err(Error::new(
                ErrorKind::MalformedToken,
                format!("Unsupported key type `{}`.", jwk.kty),
            ));
        }
        check_algorithm(&jwk.alg)?;
        let modulus_size = decode_segment(&jwk.n, staging, modulus)?;
        let exponent_size = decode_segment(&jwk.e, staging, exponent)?;

        rsa.fill(0);
        self.verifier
            .verify(
                certificate.signing_input.as_bytes(),
                &jwk_signature[..jwk_signature_size],
                root_key.modulus(),
                root_key.exponent(),
                rsa,
            )
            .map_err(|e| {
                debug!("Signing key certificate: {e}");
                Error::new(
                    ErrorKind::SigningKeyRejected,
                    format!("Root key `{}` does not certify the signing key.", root_key.kid()),
                )
            })?;

        rsa.fill(0);
        self.verifier
            .verify(
                token.signing_input.as_bytes(),
                &signature[..signature_size],
                &modulus[..modulus_size],
                &exponent[..exponent_size],
                rsa,
            )
            .map_err(|e| {
                debug!("Manifest token: {e}");
                Error::new(ErrorKind::ManifestRejected, "Invalid manifest signature.")
            })?;

        let claims: ManifestClaims<'_> = parse_json(&payload[..payload_size])?;
        let digest_size = decode_segment(&claims.sha256, staging, digest).map_err(|e| {
            debug!("Manifest digest claim: {e}");
            Error::new(ErrorKind::DigestMismatch, "Undecodable manifest digest.")
        })?;

        if digest_size != SHA256_SIZE {
            return Err(Error::new(
                ErrorKind::DigestMismatch,
                format!("Manifest digest is {digest_size} bytes long, {SHA256_SIZE} expected."),
            ));
        }

        if digest[..SHA256_SIZE] != sha256(manifest) {
            return Err(Error::new(
                ErrorKind::DigestMismatch,
                "Manifest does not match its signed digest.",
            ));
        }

        info!("Manifest authenticated with root key `{}`", root_key.kid());
        Ok(())
    }
}

/// Authenticates `manifest` against its signed `token` with a heap
/// allocated [`JwsScratch`].
///
/// # Errors
///
/// Fails like [`ManifestAuthenticator::authenticate`].
pub fn authenticate_manifest(manifest: &[u8], token: &str, root_keys: &[RootKey<'_>]) -> Result<()> {
    let mut scratch = Box::new(JwsScratch::new());
    ManifestAuthenticator::new(root_keys).authenticate(manifest, token, &mut scratch)
}

fn parse_json<'de, T: Deserialize<'de>>(bytes: &'de [u8]) -> Result<T> {
    serde_json::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::MalformedToken, format!("Invalid token JSON: {e}")))
}

fn check_algorithm(alg: &str) -> Result<()> {
    if alg != SUPPORTED_ALGORITHM {
        return Err(Error::new(
            ErrorKind::MalformedToken,
            format!("Unsupported algorithm `{alg}`."),
        ));
    }
    Ok(())
}
