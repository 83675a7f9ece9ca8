//! The build manifest: a YAML document describing how to build, test,
//! and optionally publish and deploy a project inside a disposable
//! container environment.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A parsed build manifest.
///
/// Immutable after parse: the compiler in `drydock-build` only reads it.
/// The `publish`, `deploy`, and `notifications` slots are generic so an
/// executor can bind them to backend-owned configuration types; the
/// default [`Section`] keeps the raw YAML untouched for shape-only
/// parsing. Unknown top-level keys are ignored for forward compatibility.
///
/// # Examples
///
/// ```
/// use drydock_core::Manifest;
///
/// let manifest: Manifest = Manifest::parse(b"image: golang\nscript: [go test]\n").unwrap();
/// assert_eq!(manifest.image, "golang");
/// assert_eq!(manifest.script, vec!["go test"]);
/// assert!(manifest.deploy.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(
    deserialize = "P: DeserializeOwned, D: DeserializeOwned, N: DeserializeOwned"
))]
pub struct Manifest<P = Section, D = Section, N = Section> {
    /// Container image the build runs in. Opaque to the compiler;
    /// provisioning belongs to the executor.
    #[serde(default)]
    pub image: String,

    /// User-defined label for the build.
    #[serde(default)]
    pub name: String,

    /// Build and test commands, executed in listed order.
    #[serde(default)]
    pub script: Vec<String>,

    /// Environment of the build, as `KEY=VALUE` entries.
    #[serde(default)]
    pub env: Vec<String>,

    /// Auxiliary services (databases, queues) to link to the build
    /// environment. Surfaced for the executor; never consumed here.
    #[serde(default)]
    pub services: Vec<String>,

    /// Deploy phase configuration. `None` means no deploy phase.
    #[serde(default)]
    pub deploy: Option<D>,

    /// Publish phase configuration. `None` means no publish phase.
    #[serde(default)]
    pub publish: Option<P>,

    /// Notification configuration. Not part of script compilation;
    /// consumed by the executor once a run has finished.
    #[serde(default, rename = "notify")]
    pub notifications: Option<N>,
}

impl<P, D, N> Default for Manifest<P, D, N> {
    fn default() -> Self {
        Self {
            image: String::new(),
            name: String::new(),
            script: Vec::new(),
            env: Vec::new(),
            services: Vec::new(),
            deploy: None,
            publish: None,
            notifications: None,
        }
    }
}

impl<P, D, N> Manifest<P, D, N>
where
    P: DeserializeOwned,
    D: DeserializeOwned,
    N: DeserializeOwned,
{
    /// Parse a manifest from raw YAML bytes.
    ///
    /// # Errors
    ///
    /// [`Error::ManifestParse`](crate::Error::ManifestParse) if the bytes
    /// are not valid YAML for this schema. No usable manifest exists on
    /// error; the build must not proceed.
    pub fn parse(data: &[u8]) -> crate::Result<Self> {
        serde_yaml::from_slice(data).map_err(|e| crate::Error::ManifestParse { source: e })
    }

    /// Read a manifest file and parse it.
    ///
    /// # Errors
    ///
    /// - [`Error::ManifestRead`](crate::Error::ManifestRead) if the file
    ///   cannot be read
    /// - [`Error::ManifestParse`](crate::Error::ManifestParse) if its
    ///   contents are malformed
    pub fn load(path: &Path) -> crate::Result<Self> {
        tracing::debug!(path = %path.display(), "reading build manifest");
        let data = std::fs::read(path).map_err(|e| crate::Error::ManifestRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&data)
    }
}

/// A raw manifest section owned by an extension backend.
///
/// The core never interprets the contents: a publish, deploy, or notify
/// backend deserializes the section into its own configuration type.
/// A section left unbound contributes nothing to the compiled script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Section(pub serde_yaml::Value);
