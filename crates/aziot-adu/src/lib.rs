//! `aziot-adu` authenticates device update manifests before any update
//! content is trusted.
//!
//! A manifest comes with a compact JWS token. The token header embeds a
//! signing key certificate, itself a compact JWS whose payload is the RSA
//! signing key and whose signature is produced by a root key compiled into
//! the device. The chain is checked in a fixed order:
//!
//! ```text
//! root key ──verifies──▶ signing key ──verifies──▶ token ──sha256──▶ manifest
//! ```
//!
//! and any broken link rejects the manifest. The kind of the returned
//! [`Error`] tells which link failed.
//!
//! ```ignore
//! use aziot_adu::{JwsScratch, ManifestAuthenticator, RootKey, UpdateManifest};
//!
//! const ROOT_KEYS: [RootKey<'static>; 1] =
//!     [RootKey::new("ADU.200703.R", &MODULUS, &[0x01, 0x00, 0x01])];
//!
//! let mut scratch = Box::new(JwsScratch::new());
//! let mut authenticator = ManifestAuthenticator::new(&ROOT_KEYS);
//!
//! let manifest = UpdateManifest::authenticated(&bytes, token, &mut authenticator, &mut scratch)?;
//! manifest.verify_file(file_id, &firmware)?;
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]

/// SHA-256 and RSA signature primitives.
pub mod crypto;
/// Errors.
pub mod error;
/// Compact JWS decoding and the manifest authentication chain.
pub mod jws;
/// Trusted root keys.
pub mod keys;
/// The update manifest model.
pub mod manifest;

#[cfg(test)]
mod fixtures;

pub use error::{Error, ErrorKind, Result};
pub use jws::{JwsScratch, ManifestAuthenticator, SignatureVerifier, authenticate_manifest};
pub use keys::RootKey;
pub use manifest::UpdateManifest;
