use crate::core::config::Config;
use crate::core::options::{FrontmatterKey, OptionsMap};
use anyhow::Context;
use console::style;
use slug::slugify;
use std::fs;
use std::path::{Path, PathBuf};

/// Target path for a note: `<notes_path>/<slug>.<ext>`, taking the slug
/// from the mapping (kebab of the title as fallback) and the extension
/// from the mapping or the configured default.
pub fn target_path(options: &OptionsMap, config: &Config) -> PathBuf {
    let stem = options
        .text(&FrontmatterKey::Slug)
        .map(str::to_string)
        .or_else(|| {
            options
                .text(&FrontmatterKey::Title)
                .map(slugify)
        })
        .unwrap_or_default();

    let ext = options
        .text(&FrontmatterKey::FileExtension)
        .unwrap_or(&config.default_file_ext);

    Path::new(&config.notes_path).join(format!("{}.{}", stem, ext))
}

/// Write `content` to `path` unless a file is already there.
///
/// An existing file only produces a conflict notice; nothing is written
/// and no error propagates. A failed write (permissions, missing
/// directory) is fatal and carries the path in its context. The write is
/// attempted exactly once.
pub fn create(path: &Path, content: &str) -> anyhow::Result<()> {
    if path.exists() {
        println!(
            "{}",
            style(format!(
                "{} already exists. Perhaps you meant to edit it instead?",
                path.display()
            ))
            .red()
            .bold()
        );
        return Ok(());
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to create note at {}", path.display()))?;

    println!("Created: {}", path.display());
    Ok(())
}
