//! Resolving history image file names to loadable URIs

use std::path::{Path, PathBuf};

/// Maps an image file name to a URI egui's loaders understand
pub trait ImageResolver {
    fn image_src(&self, filename: &str) -> Option<String>;
}

impl<F> ImageResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn image_src(&self, filename: &str) -> Option<String> {
        self(filename)
    }
}

/// Serves images from a directory as `file://` URIs
#[derive(Debug, Clone)]
pub struct DirectoryImages {
    dir: PathBuf,
}

impl DirectoryImages {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of `filename` if it exists inside the directory.
    ///
    /// Names containing path separators or `..` are rejected.
    pub fn path_of(&self, filename: &str) -> Option<PathBuf> {
        let name = Path::new(filename);
        if filename.is_empty() || name.components().count() != 1 || filename == ".." {
            return None;
        }
        let path = self.dir.join(name);
        path.is_file().then_some(path)
    }
}

impl ImageResolver for DirectoryImages {
    fn image_src(&self, filename: &str) -> Option<String> {
        self.path_of(filename)
            .map(|path| format!("file://{}", path.display()))
    }
}
