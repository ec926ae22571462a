use crate::core::config::Config;
use crate::utils::cli::NewNoteArgs;
use crate::utils::date;
use slug::slugify;

/// Frontmatter field names. The fixed set is closed; anything supplied via
/// `--custom` lands in `Custom` with its key taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterKey {
    Category,
    Date,
    PrivateKey,
    Publish,
    Slug,
    Tags,
    Title,
    FileExtension,
    Custom(String),
}

impl FrontmatterKey {
    /// Name as it appears in the rendered header. `Date` serializes as
    /// `DateKey`; `PrivateKey` gets special treatment in the renderer.
    pub fn render_name(&self) -> &str {
        match self {
            FrontmatterKey::Category => "Category",
            FrontmatterKey::Date => "DateKey",
            FrontmatterKey::PrivateKey => "PrivateKey",
            FrontmatterKey::Publish => "Publish",
            FrontmatterKey::Slug => "Slug",
            FrontmatterKey::Tags => "Tags",
            FrontmatterKey::Title => "Title",
            FrontmatterKey::FileExtension => "FileExtension",
            FrontmatterKey::Custom(name) => name,
        }
    }
}

/// Value of a single frontmatter field. `Absent` is an explicit state, not
/// a missing entry: the renderer turns it into a comment line instead of
/// dropping it silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Absent,
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl OptionValue {
    pub fn from_opt(value: Option<String>) -> Self {
        match value {
            Some(s) => OptionValue::Text(s),
            None => OptionValue::Absent,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Ordered field → value mapping. Insertion order is preserved because it
/// determines the order fields appear in the rendered header; `set` on an
/// existing key overwrites in place without moving it.
#[derive(Debug, Default)]
pub struct OptionsMap {
    entries: Vec<(FrontmatterKey, OptionValue)>,
}

impl OptionsMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: FrontmatterKey, value: OptionValue) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &FrontmatterKey) -> Option<&OptionValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Non-empty text value for a key, if any.
    pub fn text(&self, key: &FrontmatterKey) -> Option<&str> {
        self.get(key)
            .and_then(|v| v.as_text())
            .filter(|s| !s.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(FrontmatterKey, OptionValue)> {
        self.entries.iter()
    }
}

/// Merge CLI flags and computed defaults into the options mapping.
///
/// Missing title is not an error here; the top-level entry check rejects it
/// before this runs. Malformed `--date`/`--publish` values fall back to
/// today without comment.
pub fn resolve(args: &NewNoteArgs, config: &Config) -> OptionsMap {
    let today = date::today_iso();
    let title = args.title_pos.clone().or_else(|| args.title.clone());
    let slug = args
        .slug
        .clone()
        .or_else(|| title.as_deref().map(slugify));

    let mut options = OptionsMap::new();
    options.set(
        FrontmatterKey::Category,
        OptionValue::from_opt(args.category.clone()),
    );
    options.set(
        FrontmatterKey::Date,
        OptionValue::Text(resolve_date(args.date.as_deref(), config, &today)),
    );
    options.set(FrontmatterKey::Title, OptionValue::from_opt(title));
    options.set(FrontmatterKey::PrivateKey, OptionValue::Flag(args.private));
    options.set(
        FrontmatterKey::Publish,
        OptionValue::Text(resolve_date(args.publish.as_deref(), config, &today)),
    );
    options.set(FrontmatterKey::Slug, OptionValue::from_opt(slug));
    options.set(
        FrontmatterKey::Tags,
        OptionValue::from_opt(args.tags.clone()),
    );

    for entry in &args.custom {
        insert_custom(&mut options, entry);
    }

    options
}

fn resolve_date(flag: Option<&str>, config: &Config, today: &str) -> String {
    match flag {
        Some(input) if date::validate(input, &config.default_date_format) => input.to_string(),
        _ => today.to_string(),
    }
}

/// Split a `key:value` argument on the first colon. A bare key with no
/// colon is kept with an absent value so the renderer can still flag it.
fn insert_custom(options: &mut OptionsMap, entry: &str) {
    match entry.split_once(':') {
        Some((key, value)) => options.set(
            FrontmatterKey::Custom(key.to_string()),
            OptionValue::Text(value.to_string()),
        ),
        None => options.set(
            FrontmatterKey::Custom(entry.to_string()),
            OptionValue::Absent,
        ),
    }
}
