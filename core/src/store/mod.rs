//! Track store: the `conductor/` directory tree and the operations on it.
//!
//! Every call goes back to disk; the store keeps no document state in
//! memory. Mutating operations are serialized by a workspace lock.

pub mod context;
pub mod error;
pub mod plan;
pub mod templates;
pub mod track;

pub use context::{ContextFile, InitSeed};
pub use error::{Result, StoreError};
pub use track::{TrackMetadata, TrackStatus, validate_track_id};

use error::IoResultExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

pub const TRACKS_DIR: &str = "tracks";
pub const SPEC_FILE: &str = "spec.md";
pub const PLAN_FILE: &str = "plan.md";
pub const METADATA_FILE: &str = "metadata.json";
pub const DEFAULT_INITIAL_TASK: &str = "Task 1";

const STAGING_PREFIX: &str = ".staging-";

/// Files and directories created by [`TrackStore::initialize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub created: Vec<PathBuf>,
}

impl InitReport {
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskUpdate {
    Completed { count: usize },
    Unchanged,
}

pub struct TrackStore {
    root: PathBuf,
    initial_task: String,
    lock: Mutex<()>,
}

impl TrackStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            initial_task: DEFAULT_INITIAL_TASK.to_string(),
            lock: Mutex::new(()),
        }
    }

    pub fn with_initial_task(mut self, task: impl Into<String>) -> Self {
        let task = task.into();
        if !task.trim().is_empty() {
            self.initial_task = task;
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tracks_dir(&self) -> PathBuf {
        self.root.join(TRACKS_DIR)
    }

    pub fn track_dir(&self, id: &str) -> PathBuf {
        self.tracks_dir().join(id)
    }

    pub fn context_path(&self, file: ContextFile) -> PathBuf {
        self.root.join(file.file_name())
    }

    fn plan_path(&self, id: &str) -> PathBuf {
        self.track_dir(id).join(PLAN_FILE)
    }

    fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Creates the workspace directories and any missing context file.
    /// Existing files are never touched.
    pub fn initialize(&self, seed: &InitSeed) -> Result<InitReport> {
        let _guard = self.write_guard();
        let mut report = InitReport::default();

        for dir in [self.root.clone(), self.tracks_dir()] {
            if !dir.exists() {
                fs::create_dir_all(&dir).at(&dir)?;
                report.created.push(dir);
            }
        }

        for file in ContextFile::ALL {
            let path = self.context_path(file);
            if path.exists() {
                tracing::debug!(path = %path.display(), "Context file exists, keeping it");
                continue;
            }
            fs::write(&path, file.default_content(seed.for_file(file))).at(&path)?;
            report.created.push(path);
        }

        tracing::info!(
            root = %self.root.display(),
            created = report.created.len(),
            "Workspace initialized"
        );

        Ok(report)
    }

    /// Creates `tracks/<id>/` with its spec, plan and metadata, then adds
    /// the track to the index. The directory appears fully populated or
    /// not at all.
    pub fn create_track(&self, id: &str, title: &str) -> Result<PathBuf> {
        validate_track_id(id)?;
        let _guard = self.write_guard();

        let track_path = self.track_dir(id);
        if track_path.exists() {
            return Err(StoreError::AlreadyExists { id: id.to_string() });
        }

        let tracks_dir = self.tracks_dir();
        fs::create_dir_all(&tracks_dir).at(&tracks_dir)?;

        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&tracks_dir)
            .at(&tracks_dir)?;

        let metadata = TrackMetadata::new(id, title);
        let files = [
            (SPEC_FILE, templates::track_spec(title)),
            (PLAN_FILE, templates::track_plan(title, &self.initial_task)),
            (METADATA_FILE, metadata.to_json()?),
        ];
        for (name, content) in &files {
            let path = staging.path().join(name);
            fs::write(&path, content).at(&path)?;
        }

        let staged = staging.keep();
        if let Err(e) = fs::rename(&staged, &track_path) {
            if let Err(cleanup) = fs::remove_dir_all(&staged) {
                tracing::warn!(id, error = %cleanup, "Failed to remove staging directory");
            }
            return Err(StoreError::io(track_path, e));
        }

        if let Err(e) = self.append_index_entry(id, title) {
            tracing::warn!(id, error = %e, "Index update failed, removing new track");
            if let Err(cleanup) = fs::remove_dir_all(&track_path) {
                tracing::warn!(id, error = %cleanup, "Failed to remove track directory");
            }
            return Err(e);
        }

        tracing::info!(id, path = %track_path.display(), "Track created");
        Ok(track_path)
    }

    fn append_index_entry(&self, id: &str, title: &str) -> Result<()> {
        let index = self.context_path(ContextFile::Tracks);

        if !index.exists() {
            tracing::debug!(path = %index.display(), "Tracks index missing, recreating");
            fs::write(&index, ContextFile::Tracks.default_content(None)).at(&index)?;
        }

        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(&index)
            .at(&index)?;
        file.write_all(templates::index_entry(id, title).as_bytes())
            .at(&index)?;

        Ok(())
    }

    /// Concatenates every present context file as a `--- <name> ---` block.
    pub fn get_context(&self) -> Result<String> {
        let mut context = String::new();

        for file in ContextFile::ALL {
            let path = self.context_path(file);
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) if is_absent(&e) => continue,
                Err(e) => return Err(StoreError::io(path, e)),
            };
            context.push_str(&format!("\n--- {file} ---\n{content}\n"));
        }

        tracing::debug!(bytes = context.len(), "Context assembled");
        Ok(context)
    }

    pub fn read_plan(&self, id: &str) -> Result<String> {
        validate_track_id(id)?;
        let path = self.plan_path(id);
        read_existing(&path, id)
    }

    pub fn update_task(&self, id: &str, task: &str) -> Result<TaskUpdate> {
        validate_track_id(id)?;
        let _guard = self.write_guard();

        let path = self.plan_path(id);
        let content = read_existing(&path, id)?;

        let (updated, count) = plan::complete_task(&content, task);
        if count == 0 {
            tracing::debug!(id, task, "No pending task matched");
            return Ok(TaskUpdate::Unchanged);
        }

        fs::write(&path, updated).at(&path)?;
        tracing::info!(id, task, count, "Task completed");

        Ok(TaskUpdate::Completed { count })
    }

    /// Metadata of every track, oldest first. Directories without readable
    /// metadata are skipped. The directory name is authoritative for `id`.
    pub fn list_tracks(&self) -> Result<Vec<TrackMetadata>> {
        let tracks_dir = self.tracks_dir();
        if !tracks_dir.exists() {
            tracing::debug!("Tracks directory does not exist: {}", tracks_dir.display());
            return Ok(vec![]);
        }

        let mut tracks = vec![];
        for entry in fs::read_dir(&tracks_dir).at(&tracks_dir)? {
            let path = entry.at(&tracks_dir)?.path();
            if !path.is_dir() {
                continue;
            }

            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            if name.starts_with('.') {
                continue;
            }

            match read_metadata(&path.join(METADATA_FILE)) {
                Ok(mut meta) => {
                    if meta.id != name {
                        tracing::warn!(
                            "Track '{}' has metadata id '{}', using directory name",
                            name,
                            meta.id
                        );
                        meta.id = name.to_string();
                    }
                    tracks.push(meta);
                }
                Err(e) => tracing::warn!("Skipping track '{}': {}", name, e),
            }
        }

        tracks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(tracks)
    }
}

/// A path under a regular file reads as `NotADirectory`; both mean the
/// document is not there.
fn is_absent(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
    )
}

fn read_metadata(path: &Path) -> Result<TrackMetadata> {
    let raw = fs::read_to_string(path).at(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn read_existing(path: &Path, id: &str) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if is_absent(&e) => Err(StoreError::NotFound { id: id.to_string() }),
        Err(e) => Err(StoreError::io(path, e)),
    }
}
