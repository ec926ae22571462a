use clap::Parser;

/// Scaffold a new note with a generated frontmatter header
#[derive(Parser, Debug)]
#[command(
    name = "quill",
    about = "Create a note file with frontmatter from flags or an interactive session",
    after_help = "USAGE:\n  quill \"TITLE\" [flags]\n  quill -i\n\nCustom fields: --custom key:value[,key:value...]"
)]
pub struct Args {
    /// Title of the note (positional)
    #[arg(value_name = "TITLE")]
    pub title_pos: Option<String>,

    /// Title of the note
    #[arg(short = 't', long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Slug for the note file and header (kebab of the title when omitted)
    #[arg(long = "slug", value_name = "SLUG")]
    pub slug: Option<String>,

    /// Category for the note
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Date for the note (validated against the configured format)
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<String>,

    /// Publish date for the note
    #[arg(long = "publish", value_name = "DATE")]
    pub publish: Option<String>,

    /// Mark the note private
    #[arg(short = 'p', long = "private")]
    pub private: bool,

    /// Comma separated tags
    #[arg(long = "tags", value_name = "TAGS")]
    pub tags: Option<String>,

    /// Extra header fields as key:value pairs
    #[arg(long = "custom", value_name = "KEY:VALUE", value_delimiter = ',')]
    pub custom: Vec<String>,

    /// Ask for every field interactively
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,
}

/// Arguments for one note creation, past the entry check.
#[derive(Debug)]
pub struct NewNoteArgs {
    pub title_pos: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub publish: Option<String>,
    pub private: bool,
    pub tags: Option<String>,
    pub custom: Vec<String>,
    pub interactive: bool,
}

#[derive(Debug)]
pub enum ValidatedArgs {
    New(NewNoteArgs),
    /// No title anywhere and not interactive; reported, never fatal.
    MissingTitle,
}

impl Args {
    pub fn validate(self) -> ValidatedArgs {
        if self.title_pos.is_none() && self.title.is_none() && !self.interactive {
            return ValidatedArgs::MissingTitle;
        }
        ValidatedArgs::New(NewNoteArgs {
            title_pos: self.title_pos,
            title: self.title,
            slug: self.slug,
            category: self.category,
            date: self.date,
            publish: self.publish,
            private: self.private,
            tags: self.tags,
            custom: self.custom,
            interactive: self.interactive,
        })
    }
}
