use quill::core::config::Config;
use quill::core::frontmatter;
use quill::core::note;
use quill::core::options;
use quill::utils::cli::NewNoteArgs;
use std::fs;
use tempfile::TempDir;

fn config(notes_path: &str) -> Config {
    Config {
        notes_path: notes_path.to_string(),
        default_file_ext: "md".to_string(),
        default_date_format: "%Y-%m-%d".to_string(),
    }
}

fn args(title: &str) -> NewNoteArgs {
    NewNoteArgs {
        title_pos: Some(title.to_string()),
        title: None,
        slug: None,
        category: None,
        date: None,
        publish: None,
        private: false,
        tags: None,
        custom: vec![],
        interactive: false,
    }
}

#[test]
fn non_interactive_run_writes_rendered_frontmatter() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path().to_str().unwrap());

    let mut a = args("Weekly Review");
    a.category = Some("journal".to_string());
    a.date = Some("2023-04-01".to_string());
    a.private = true;
    a.custom = vec!["Mood:good".to_string()];

    let resolved = options::resolve(&a, &config);
    let expected = frontmatter::render(&resolved);
    let target = note::target_path(&resolved, &config);

    quill::commands::new::run(config, a).unwrap();

    assert_eq!(target, temp.path().join("weekly-review.md"));
    assert_eq!(fs::read_to_string(&target).unwrap(), expected);

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("---\n"));
    assert!(written.ends_with("---\n"));
    assert!(written.contains("Category: \"journal\""));
    assert!(written.contains("DateKey: \"2023-04-01\""));
    assert!(written.contains("Private: true"));
    assert!(written.contains("Slug: \"weekly-review\""));
    assert!(written.contains("Title: \"Weekly Review\""));
    assert!(written.contains("Mood: \"good\""));
    // Tags were never supplied, so the entry is a flagged comment.
    assert!(written.contains("# Tags: undefined"));
}

#[test]
fn second_run_does_not_clobber_the_first() {
    let temp = TempDir::new().unwrap();

    quill::commands::new::run(config(temp.path().to_str().unwrap()), args("Same Note")).unwrap();
    let target = temp.path().join("same-note.md");
    let first = fs::read_to_string(&target).unwrap();

    let mut a = args("Same Note");
    a.category = Some("changed".to_string());
    quill::commands::new::run(config(temp.path().to_str().unwrap()), a).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), first);
}

#[test]
fn missing_notes_directory_is_fatal() {
    let temp = TempDir::new().unwrap();
    let gone = temp.path().join("never-created");
    let result = quill::commands::new::run(config(gone.to_str().unwrap()), args("Orphan"));
    assert!(result.is_err());
}
