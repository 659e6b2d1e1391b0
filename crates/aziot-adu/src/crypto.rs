use core::ops::Range;

use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Pkcs1v15Sign, RsaPublicKey};

use sha2::{Digest, Sha256};

use tracing::debug;

use crate::error::{Error, ErrorKind, Result};

/// Size of a SHA-256 digest, in bytes.
pub const SHA256_SIZE: usize = 32;
/// Largest supported RSA modulus, in bytes.
pub const RSA_KEY_SIZE: usize = 384;
/// Minimum size of the scratch buffer handed to the RSA operations.
pub const RSA_SCRATCH_SIZE: usize = RSA_KEY_SIZE + SHA256_SIZE;

// Length of the DER header preceding the digest in a SHA-256 DigestInfo.
const DIGEST_INFO_HEADER_SIZE: usize = 19;

// 2.16.840.1.101.3.4.2.1
const SHA256_OID: [u8; 9] = [0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01];

const TAG_SEQUENCE: u8 = 0x30;
const TAG_OID: u8 = 0x06;
const TAG_OCTET_STRING: u8 = 0x04;
const DER_NULL: [u8; 2] = [0x05, 0x00];

// EMSA-PKCS1-v1_5 requires at least eight padding bytes.
const MIN_PADDING_SIZE: usize = 8;

/// Computes the SHA-256 digest of `input`.
#[must_use]
#[inline]
pub fn sha256(input: &[u8]) -> [u8; SHA256_SIZE] {
    Sha256::digest(input).into()
}

/// Verifies an RSA PKCS#1 v1.5 signature over the SHA-256 digest of
/// `message`.
///
/// The digest is computed into the tail of `scratch`, which must hold at
/// least [`RSA_SCRATCH_SIZE`] bytes.
///
/// # Errors
///
/// Returns [`ErrorKind::OutOfMemory`] when `scratch` is too small and
/// [`ErrorKind::Failed`] when the key cannot be imported or the signature
/// does not verify.
pub fn rsa_pkcs1_verify(
    message: &[u8],
    signature: &[u8],
    modulus: &[u8],
    exponent: &[u8],
    scratch: &mut [u8],
) -> Result<()> {
    check_scratch(scratch)?;
    let key = public_key(modulus, exponent)?;

    let digest = &mut scratch[RSA_KEY_SIZE..RSA_SCRATCH_SIZE];
    digest.copy_from_slice(&sha256(message));

    key.verify(Pkcs1v15Sign::new::<Sha256>(), digest, signature)
        .map_err(|e| {
            debug!("PKCS#1 v1.5 verification: {e}");
            Error::new(ErrorKind::Failed, "Invalid RSA signature.")
        })
}

/// Applies the RSA public operation to `signature` and strips the
/// EMSA-PKCS1-v1_5 padding.
///
/// The recovered block is written to the head of `scratch`. The returned
/// payload borrows from it and, for a SHA-256 signature, is a DER encoded
/// DigestInfo.
///
/// # Errors
///
/// Returns [`ErrorKind::OutOfMemory`] when `scratch` is smaller than
/// [`RSA_SCRATCH_SIZE`] and [`ErrorKind::Failed`] when the key is invalid,
/// the signature is out of range or the padding is malformed.
pub fn rsa_public_decrypt<'s>(
    signature: &[u8],
    modulus: &[u8],
    exponent: &[u8],
    scratch: &'s mut [u8],
) -> Result<&'s [u8]> {
    check_scratch(scratch)?;
    let payload = recover(signature, modulus, exponent, &mut scratch[..RSA_KEY_SIZE])?;
    Ok(&scratch[payload])
}

/// Verifies a SHA-256 RSA signature by comparing the digest found at a
/// fixed offset of the recovered block.
///
/// The DigestInfo header is assumed to have the usual 19 byte layout and is
/// not inspected. [`digest_info_verify`] parses it instead.
///
/// # Errors
///
/// Fails like [`rsa_public_decrypt`], and with [`ErrorKind::Failed`] when
/// the digests differ.
pub fn legacy_verify(
    message: &[u8],
    signature: &[u8],
    modulus: &[u8],
    exponent: &[u8],
    scratch: &mut [u8],
) -> Result<()> {
    check_scratch(scratch)?;
    let (block, tail) = scratch.split_at_mut(RSA_KEY_SIZE);
    let payload = recover(signature, modulus, exponent, block)?;

    let digest = &mut tail[..SHA256_SIZE];
    digest.copy_from_slice(&sha256(message));

    let recovered = block[payload]
        .get(DIGEST_INFO_HEADER_SIZE..DIGEST_INFO_HEADER_SIZE + SHA256_SIZE)
        .ok_or_else(|| Error::new(ErrorKind::Failed, "Recovered digest is too short."))?;

    if recovered != digest {
        return Err(Error::new(ErrorKind::Failed, "Recovered digest mismatch."));
    }
    Ok(())
}

/// Verifies a SHA-256 RSA signature by decoding the recovered DigestInfo.
///
/// # Errors
///
/// Fails like [`rsa_public_decrypt`], and with [`ErrorKind::Failed`] when
/// the DigestInfo is not a SHA-256 one or the digests differ.
pub fn digest_info_verify(
    message: &[u8],
    signature: &[u8],
    modulus: &[u8],
    exponent: &[u8],
    scratch: &mut [u8],
) -> Result<()> {
    let digest = sha256(message);
    let payload = rsa_public_decrypt(signature, modulus, exponent, scratch)?;

    let recovered = digest_info_sha256(payload)
        .ok_or_else(|| Error::new(ErrorKind::Failed, "Invalid SHA-256 DigestInfo."))?;

    if *recovered != digest {
        return Err(Error::new(ErrorKind::Failed, "Recovered digest mismatch."));
    }
    Ok(())
}

/// Extracts the digest of a DER encoded SHA-256 DigestInfo.
///
/// ```text
/// DigestInfo ::= SEQUENCE {
///     digestAlgorithm SEQUENCE { OID sha256, NULL OPTIONAL },
///     digest          OCTET STRING (SIZE (32))
/// }
/// ```
///
/// Only the short length form is accepted, which covers every valid
/// SHA-256 DigestInfo. Trailing bytes are rejected.
#[must_use]
pub fn digest_info_sha256(der: &[u8]) -> Option<&[u8; SHA256_SIZE]> {
    let (info, rest) = tlv(der, TAG_SEQUENCE)?;
    if !rest.is_empty() {
        return None;
    }

    let (algorithm, info) = tlv(info, TAG_SEQUENCE)?;
    let (oid, parameters) = tlv(algorithm, TAG_OID)?;
    if oid != SHA256_OID || !(parameters.is_empty() || parameters == DER_NULL) {
        return None;
    }

    let (digest, rest) = tlv(info, TAG_OCTET_STRING)?;
    if !rest.is_empty() {
        return None;
    }
    digest.try_into().ok()
}

// Splits a short form TLV into its value and the remaining input.
fn tlv(input: &[u8], tag: u8) -> Option<(&[u8], &[u8])> {
    let (&found, rest) = input.split_first()?;
    let (&length, rest) = rest.split_first()?;
    if found != tag || length & 0x80 != 0 {
        return None;
    }

    let length = usize::from(length);
    (rest.len() >= length).then(|| rest.split_at(length))
}

fn check_scratch(scratch: &[u8]) -> Result<()> {
    if scratch.len() < RSA_SCRATCH_SIZE {
        return Err(Error::new(
            ErrorKind::OutOfMemory,
            format!(
                "RSA scratch holds {} bytes, {RSA_SCRATCH_SIZE} are required.",
                scratch.len()
            ),
        ));
    }
    Ok(())
}

fn public_key(modulus: &[u8], exponent: &[u8]) -> Result<RsaPublicKey> {
    if modulus.len() > RSA_KEY_SIZE {
        return Err(Error::new(
            ErrorKind::Failed,
            format!("RSA modulus exceeds {RSA_KEY_SIZE} bytes."),
        ));
    }

    RsaPublicKey::new(
        BigUint::from_bytes_be(modulus),
        BigUint::from_bytes_be(exponent),
    )
    .map_err(|e| {
        debug!("RSA key import: {e}");
        Error::new(ErrorKind::Failed, "Invalid RSA public key.")
    })
}

// Writes the recovered EMSA-PKCS1-v1_5 block into `block` and returns the
// range of its payload.
fn recover(
    signature: &[u8],
    modulus: &[u8],
    exponent: &[u8],
    block: &mut [u8],
) -> Result<Range<usize>> {
    let key = public_key(modulus, exponent)?;
    let size = key.size();

    // 0x00 0x01, the padding and the separator.
    if size < MIN_PADDING_SIZE + 3 {
        return Err(Error::new(
            ErrorKind::Failed,
            format!("RSA modulus of {size} bytes cannot hold a PKCS#1 block."),
        ));
    }

    if signature.len() != size {
        return Err(Error::new(
            ErrorKind::Failed,
            format!("RSA signature is {} bytes long, {size} expected.", signature.len()),
        ));
    }

    let signature = BigUint::from_bytes_be(signature);
    if &signature >= key.n() {
        return Err(Error::new(ErrorKind::Failed, "RSA signature out of range."));
    }

    let recovered = signature.modpow(key.e(), key.n()).to_bytes_be();
    let block = &mut block[..size];
    block.fill(0);
    block[size - recovered.len()..].copy_from_slice(&recovered);

    // 0x00 0x01 0xff.. 0x00 payload
    if block[0] != 0x00 || block[1] != 0x01 {
        return Err(Error::new(ErrorKind::Failed, "Invalid PKCS#1 block type."));
    }

    let separator = block[2..]
        .iter()
        .position(|&byte| byte != 0xff)
        .map(|position| position + 2)
        .filter(|&separator| block[separator] == 0x00 && separator - 2 >= MIN_PADDING_SIZE)
        .ok_or_else(|| Error::new(ErrorKind::Failed, "Invalid PKCS#1 padding."))?;

    Ok(separator + 1..size)
}
