use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{Result, WaymarkError};

/// Path filter for the content walk: hidden components are skipped unless
/// requested, and exclude globs match the slash-joined relative path.
#[derive(Debug)]
pub struct ContentFilter {
    include_hidden: bool,
    exclude: GlobSet,
}

impl ContentFilter {
    pub fn new(exclude_globs: &[String], include_hidden: bool) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_globs {
            let trimmed = pattern.trim();
            if trimmed.is_empty() {
                continue;
            }
            let glob = Glob::new(trimmed).map_err(|err| {
                WaymarkError::Validation(format!("invalid content exclude glob '{trimmed}': {err}"))
            })?;
            builder.add(glob);
        }

        let exclude = builder.build().map_err(|err| {
            WaymarkError::Validation(format!("invalid content exclude globs: {err}"))
        })?;

        Ok(Self {
            include_hidden,
            exclude,
        })
    }

    fn allows_directory(&self, relative: &Path) -> bool {
        if relative.as_os_str().is_empty() {
            return true;
        }
        if !self.include_hidden && path_has_hidden_component(relative) {
            return false;
        }
        !self.exclude.is_match(relative_to_unix_path(relative))
    }

    fn allows_file(&self, relative: &Path) -> bool {
        if !self.include_hidden && path_has_hidden_component(relative) {
            return false;
        }
        if self.exclude.is_match(relative_to_unix_path(relative)) {
            return false;
        }
        relative
            .extension()
            .and_then(|x| x.to_str())
            .map(|x| matches!(x.to_ascii_lowercase().as_str(), "md" | "markdown"))
            .unwrap_or(false)
    }
}

/// Collects the relative paths of every markdown article under `root`,
/// sorted so per-article reports come out in a stable order.
pub fn collect_articles(root: &Path, filter: &ContentFilter) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(WaymarkError::NotFound(format!(
            "content root: {}",
            root.display()
        )));
    }

    let entries = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            if entry.path() == root {
                return true;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                return true;
            };
            if entry.file_type().is_dir() {
                filter.allows_directory(relative)
            } else {
                true
            }
        });

    let mut articles = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| WaymarkError::Validation(e.to_string()))?;
        if entry.file_type().is_dir() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| WaymarkError::Validation(e.to_string()))?;
        if filter.allows_file(relative) {
            articles.push(relative.to_path_buf());
        }
    }

    articles.sort();
    Ok(articles)
}

fn path_has_hidden_component(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(value) => value.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

fn relative_to_unix_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(value) => Some(value.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
