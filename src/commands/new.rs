use crate::core::config::Config;
use crate::core::frontmatter;
use crate::core::note;
use crate::core::options;
use crate::ui::prompts;
use crate::utils::cli::NewNoteArgs;

/// Resolve options, optionally enrich them interactively, render the
/// frontmatter and write the note.
pub fn run(config: Config, args: NewNoteArgs) -> anyhow::Result<()> {
    let mut options = options::resolve(&args, &config);

    if args.interactive {
        prompts::enrich(&mut options, &config)?;
    }

    let target = note::target_path(&options, &config);
    let content = frontmatter::render(&options);
    note::create(&target, &content)
}
