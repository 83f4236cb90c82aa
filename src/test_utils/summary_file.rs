use std::{
    fs,
    path::{Path, PathBuf},
};

/// A summary payload written to a temporary file, removed on drop.
pub(crate) struct TestSummaryFile {
    path: PathBuf,
}

impl TestSummaryFile {
    /// Write `contents` to a file named after `test_name`.
    ///
    /// Use a name unique to the test so tests running in parallel do not share files.
    pub(crate) fn new(test_name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "gastos-{}-{test_name}.json",
            std::process::id()
        ));
        fs::write(&path, contents).expect("Could not write summary file");

        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TestSummaryFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
