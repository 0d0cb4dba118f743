use std::{
    fs,
    path::{Path, PathBuf},
};

use tracer::{trace, Tracer};

use crate::domain::{
    models::{AuthenticatedUser, AvatarUrl},
    ports::outbound::AvatarProvider,
    AvatarError,
};

pub const DEFAULT_AVATAR_DIR: &str = "avatars";
pub const DEFAULT_AVATAR_PUBLIC_PATH: &str = "/avatars";

/// Looks for an uploaded image named after the user's unique id.
///
/// Any regular file in `directory` whose name starts with the unique id
/// matches (`<unique-id>*`, case-sensitive, not recursive). When several files
/// match, the lexically smallest name wins. The URL points at `public_path`,
/// where the directory is expected to be served.
///
/// Symlinks are followed, so a link to a directory is skipped like the
/// directory itself. Entries that vanish or fail mid-scan are ignored.
///
/// Uploaders must write files atomically (write then rename) so a scan never
/// sees a partial file.
#[derive(Debug, Clone)]
pub struct FileSystemAvatar {
    directory: PathBuf,
    public_path: String,
    tracer: Tracer,
}

impl FileSystemAvatar {
    pub fn new(directory: impl Into<PathBuf>, public_path: impl AsRef<str>) -> Self {
        Self {
            directory: directory.into(),
            public_path: public_path.as_ref().trim_end_matches('/').to_string(),
            tracer: Tracer::off(),
        }
    }

    /// Records why a scan failed, since the returned error carries no cause.
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn find_match(&self, prefix: &str) -> std::io::Result<Option<String>> {
        let mut best: Option<String> = None;

        for entry in fs::read_dir(&self.directory)? {
            let Ok(entry) = entry else {
                continue;
            };

            let Ok(file_name) = entry.file_name().into_string() else {
                continue;
            };

            if !file_name.starts_with(prefix) {
                continue;
            }

            // Follows symlinks; dangling links fail here and are skipped.
            match fs::metadata(entry.path()) {
                Ok(metadata) if !metadata.is_dir() => {}
                _ => continue,
            }

            if best.as_ref().map_or(true, |current| file_name < *current) {
                best = Some(file_name);
            }
        }

        Ok(best)
    }
}

impl Default for FileSystemAvatar {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_DIR, DEFAULT_AVATAR_PUBLIC_PATH)
    }
}

impl AvatarProvider for FileSystemAvatar {
    fn name(&self) -> &'static str {
        "file_system"
    }

    fn resolve(&self, user: &AuthenticatedUser) -> Result<AvatarUrl, AvatarError> {
        let unique_id = user.unique_id();

        match self.find_match(unique_id.as_str()) {
            Ok(Some(file_name)) => Ok(AvatarUrl::new(format!(
                "{}/{}",
                self.public_path, file_name
            ))),
            Ok(None) => Err(AvatarError::NoAvatarUrl),
            Err(err) => {
                tracing::warn!(
                    "Failed to scan avatar directory {} for user {}: {}",
                    self.directory.display(),
                    unique_id,
                    err
                );
                trace!(
                    self.tracer,
                    "avatar: file_system could not read {} for {}: {}",
                    self.directory.display(),
                    unique_id,
                    err
                );
                Err(AvatarError::NoAvatarUrl)
            }
        }
    }
}
