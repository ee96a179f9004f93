use anyhow::{Context, Result};
use git2::{Commit, ErrorCode, Oid, Repository, Signature};
use log::{debug, info, warn};
use semver::Version;
use std::path::{Path, PathBuf};

use crate::arguments::GitMode;

/// Records a version bump in the git repository that contains the project.
pub struct GitTracker {
    pub repository: Repository,
}

impl GitTracker {
    /// Opens the repository containing `path`, searching parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let repository = Repository::discover(path)
            .with_context(|| format!("Failed to find git repository at {:?}", path))?;

        debug!("Opened repository at {:?}", repository.path());

        Ok(GitTracker { repository })
    }

    fn get_signature(&self) -> Result<Signature<'_>> {
        self.repository.signature()
            .context("Failed to get git signature. Please configure user.name and user.email in git config")
    }

    fn workdir(&self) -> Result<PathBuf> {
        let workdir = self.repository.workdir()
            .ok_or_else(|| anyhow::anyhow!("Repository at {:?} has no working directory", self.repository.path()))?;
        Ok(workdir.canonicalize()?)
    }

    /// Adds the given files to the index. Paths may be absolute or relative to
    /// the current directory but must lie inside the working tree.
    pub fn stage_files(&self, files: &[&Path]) -> Result<()> {
        let workdir = self.workdir()?;
        let mut index = self.repository.index()?;

        for file in files {
            let absolute = file.canonicalize()
                .with_context(|| format!("Failed to resolve {:?}", file))?;
            let relative = absolute.strip_prefix(&workdir)
                .with_context(|| format!("{:?} is outside the repository at {:?}", absolute, workdir))?;
            index.add_path(relative)?;
            debug!("Staged {:?}", relative);
        }

        index.write()?;
        Ok(())
    }

    /// The commit HEAD points at, or `None` on an unborn branch.
    fn head_commit(&self) -> Result<Option<Commit<'_>>> {
        match self.repository.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?)),
            Err(e) if e.code() == ErrorCode::UnbornBranch => Ok(None),
            Err(e) => Err(e).context("Failed to resolve HEAD"),
        }
    }

    /// Whether the index differs from the tree at HEAD.
    pub fn has_staged_changes(&self) -> Result<bool> {
        let index = self.repository.index()?;
        let head_tree = self.head_commit()?.map(|commit| commit.tree()).transpose()?;
        let diff = self.repository
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;
        Ok(diff.deltas().len() > 0)
    }

    /// Commits the current index on top of HEAD, or as the root commit of an
    /// unborn branch.
    pub fn create_commit(&self, message: &str) -> Result<Oid> {
        let sig = self.get_signature()?;
        let parent = self.head_commit()?;
        if parent.is_none() {
            warn!("HEAD is unborn, creating the initial commit");
        }

        let tree_id = self.repository.index()?.write_tree()?;
        let tree = self.repository.find_tree(tree_id)?;
        let parents: Vec<&Commit> = parent.iter().collect();

        let commit_id = self.repository
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .with_context(|| format!("Failed to commit '{}'", message))?;

        info!("Committed {}: {}", commit_id, message);
        Ok(commit_id)
    }

    pub fn tag_exists(&self, tag_name: &str) -> bool {
        self.repository
            .find_reference(&format!("refs/tags/{}", tag_name))
            .is_ok()
    }

    /// Checks everything the git step needs before any file is touched: a
    /// working tree, a signature, and for [`GitMode::CommitTag`] a free tag name.
    pub fn preflight(&self, mode: GitMode, version: &Version) -> Result<()> {
        if mode == GitMode::None {
            return Ok(());
        }
        self.workdir()?;
        self.get_signature()?;
        if mode == GitMode::CommitTag {
            self.ensure_tag_free(version)?;
        }
        Ok(())
    }

    fn ensure_tag_free(&self, version: &Version) -> Result<()> {
        let tag_name = release_tag(version);
        if self.tag_exists(&tag_name) {
            anyhow::bail!("Tag {} already exists", tag_name);
        }
        Ok(())
    }

    /// Creates an annotated tag on `commit_id`. Fails if the tag exists.
    pub fn create_tag(&self, tag_name: &str, commit_id: Oid) -> Result<Oid> {
        let sig = self.get_signature()?;
        let commit_obj = self.repository
            .find_object(commit_id, Some(git2::ObjectType::Commit))?;

        let tag_id = self.repository
            .tag(tag_name, &commit_obj, &sig, &format!("Release {}", tag_name), false)
            .with_context(|| format!("Failed to create tag {}", tag_name))?;

        info!("Created tag: {}", tag_name);
        Ok(tag_id)
    }

    pub fn get_tags(&self) -> Result<Vec<String>> {
        let names = self.repository.tag_names(None)?;
        Ok(names.iter().flatten().map(str::to_string).collect())
    }

    /// Commits `files` as the release of `version`, tagging it for
    /// [`GitMode::CommitTag`]. Returns the commit id, or `None` when nothing
    /// was recorded.
    pub fn execute_git_mode(&self, mode: GitMode, version: &Version, files: &[&Path]) -> Result<Option<Oid>> {
        if mode == GitMode::None {
            debug!("GitMode::None - skipping git operations");
            return Ok(None);
        }

        if mode == GitMode::CommitTag {
            self.ensure_tag_free(version)?;
        }

        self.stage_files(files)?;

        if !self.has_staged_changes()? {
            warn!("No changes to commit");
            return Ok(None);
        }

        let commit_id = self.create_commit(&format!("chore: bump version to {}", version))?;

        if mode == GitMode::CommitTag {
            self.create_tag(&release_tag(version), commit_id)?;
        }

        Ok(Some(commit_id))
    }
}

fn release_tag(version: &Version) -> String {
    format!("v{}", version)
}
