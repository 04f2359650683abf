//! [`Sandbox`]: an isolated scratch directory for filesystem tests.

use std::sync::Arc;

use ks_fs::{AbsPath, Filesystem, MemFs, OsFs};
use tempfile::TempDir;

use crate::schema::{BLANK_SWAGGER, BLANK_SWAGGER_FILE};

/// A scratch directory on either an in-memory or a real filesystem.
///
/// The blank swagger fixture is seeded at [`Sandbox::swagger_source`], so every
/// sandbox can parse a spec straight away.
///
/// # Example
///
/// ```rust,no_run
/// use ks_test_utils::sandbox::Sandbox;
///
/// let sb = Sandbox::memory();
/// sb.mkdir("app/components");
/// sb.touch("app/components/app.jsonnet");
/// ```
pub struct Sandbox {
    fs: Arc<dyn Filesystem>,
    base: AbsPath,
    _temp: Option<TempDir>,
}

impl Sandbox {
    /// Sandbox on a fresh [`MemFs`], rooted at `/sandbox`.
    pub fn memory() -> Self {
        let base = AbsPath::new("/sandbox").unwrap();
        let fs: Arc<dyn Filesystem> = Arc::new(MemFs::new());
        fs.create_dir_all(&base).unwrap();
        Self::seeded(fs, base, None)
    }

    /// Sandbox in a temporary directory on the real disk.
    pub fn disk() -> Self {
        let temp = TempDir::new().expect("Sandbox::disk: failed to create temp dir");
        let base = AbsPath::new(temp.path()).unwrap();
        Self::seeded(Arc::new(OsFs::new()), base, Some(temp))
    }

    fn seeded(fs: Arc<dyn Filesystem>, base: AbsPath, temp: Option<TempDir>) -> Self {
        let sb = Self {
            fs,
            base,
            _temp: temp,
        };
        sb.fs
            .write_file(&sb.path(BLANK_SWAGGER_FILE), BLANK_SWAGGER.as_bytes())
            .unwrap();
        sb
    }

    /// Shared handle to the sandbox filesystem.
    pub fn fs(&self) -> Arc<dyn Filesystem> {
        Arc::clone(&self.fs)
    }

    /// The sandbox directory itself.
    pub fn base(&self) -> &AbsPath {
        &self.base
    }

    /// Absolute path of `rel` inside the sandbox.
    pub fn path(&self, rel: &str) -> AbsPath {
        self.base.join(rel)
    }

    /// `file:` descriptor of the seeded blank swagger document.
    pub fn swagger_source(&self) -> String {
        format!("file:{}", self.path(BLANK_SWAGGER_FILE))
    }

    /// Create `rel` and its parents.
    pub fn mkdir(&self, rel: &str) -> AbsPath {
        let path = self.path(rel);
        self.fs.create_dir_all(&path).unwrap();
        path
    }

    /// Create an empty file at `rel`; its parent must exist.
    pub fn touch(&self, rel: &str) -> AbsPath {
        let path = self.path(rel);
        self.fs.write_file(&path, b"").unwrap();
        path
    }

    pub fn assert_dir_exists(&self, rel: &str) {
        let path = self.path(rel);
        assert!(
            self.fs.dir_exists(&path).unwrap(),
            "expected directory {path} to exist"
        );
    }

    pub fn read(&self, rel: &str) -> Vec<u8> {
        self.fs.read_file(&self.path(rel)).unwrap()
    }
}
