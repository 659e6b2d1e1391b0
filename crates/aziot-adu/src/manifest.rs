use std::collections::BTreeMap;

use base64::Engine as _;

use serde::Deserialize;

use tracing::info;

use crate::crypto::sha256;
use crate::error::{Error, ErrorKind, Result};
use crate::jws::{JwsScratch, LENIENT, ManifestAuthenticator, SignatureVerifier};

/// The identity of an update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateId {
    /// The update provider.
    pub provider: String,
    /// The update name.
    pub name: String,
    /// The update version.
    pub version: String,
}

/// An installation step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// The handler installing the step files.
    #[serde(default)]
    pub handler: Option<String>,
    /// Identifiers of the files installed by this step.
    #[serde(default)]
    pub files: Vec<String>,
    /// Handler specific properties.
    #[serde(default)]
    pub handler_properties: BTreeMap<String, serde_json::Value>,
}

/// The installation instructions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Instructions {
    /// The installation steps, in order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// The digests of an update file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hashes {
    /// The base64 SHA-256 digest.
    pub sha256: String,
}

/// An update file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// The file name.
    pub file_name: String,
    /// The file size.
    pub size_in_bytes: u64,
    /// The file digests.
    pub hashes: Hashes,
}

impl FileEntry {
    /// Checks downloaded content against this entry.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::FileMismatch`] when the size or the SHA-256
    /// digest differ, or when the recorded digest is not valid base64.
    pub fn verify(&self, content: &[u8]) -> Result<()> {
        if content.len() as u64 != self.size_in_bytes {
            return Err(Error::new(
                ErrorKind::FileMismatch,
                format!(
                    "`{}` is {} bytes long, {} expected.",
                    self.file_name,
                    content.len(),
                    self.size_in_bytes
                ),
            ));
        }

        let expected = LENIENT.decode(&self.hashes.sha256).map_err(|e| {
            Error::new(
                ErrorKind::FileMismatch,
                format!("`{}` has an invalid digest: {e}", self.file_name),
            )
        })?;

        if expected != sha256(content) {
            return Err(Error::new(
                ErrorKind::FileMismatch,
                format!("`{}` does not match its digest.", self.file_name),
            ));
        }
        Ok(())
    }
}

/// An update manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManifest {
    /// The manifest schema version.
    pub manifest_version: String,
    /// The update identity.
    pub update_id: UpdateId,
    /// The properties of the devices this update applies to.
    #[serde(default)]
    pub compatibility: Vec<BTreeMap<String, String>>,
    /// The installation instructions.
    #[serde(default)]
    pub instructions: Instructions,
    /// The update files, by identifier.
    #[serde(default)]
    pub files: BTreeMap<String, FileEntry>,
    /// The manifest creation date.
    pub created_date_time: String,
}

impl UpdateManifest {
    /// Parses a manifest without authenticating it.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Serialization`] when the manifest is not valid.
    pub fn from_slice(manifest: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(manifest)?)
    }

    /// Authenticates a manifest against its signed token, then parses it.
    ///
    /// # Errors
    ///
    /// Fails like [`ManifestAuthenticator::authenticate`] and
    /// [`UpdateManifest::from_slice`].
    pub fn authenticated<V: SignatureVerifier>(
        manifest: &[u8],
        token: &str,
        authenticator: &mut ManifestAuthenticator<'_, V>,
        scratch: &mut JwsScratch,
    ) -> Result<Self> {
        authenticator.authenticate(manifest, token, scratch)?;
        let manifest = Self::from_slice(manifest)?;

        info!(
            "Update {}/{} {} authenticated",
            manifest.update_id.provider, manifest.update_id.name, manifest.update_id.version
        );
        Ok(manifest)
    }

    /// Returns the file with the given identifier.
    #[must_use]
    #[inline]
    pub fn file(&self, id: &str) -> Option<&FileEntry> {
        self.files.get(id)
    }

    /// Checks downloaded content against the file with the given
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::FileMismatch`] when the manifest has no such
    /// file or the content does not match it.
    pub fn verify_file(&self, id: &str, content: &[u8]) -> Result<()> {
        self.file(id)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::FileMismatch,
                    format!("No file `{id}` in the manifest."),
                )
            })?
            .verify(content)
    }
}
