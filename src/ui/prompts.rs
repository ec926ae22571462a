use crate::core::config::Config;
use crate::core::options::{FrontmatterKey, OptionValue, OptionsMap};
use crate::utils::date;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Run the interactive question session and fold the answers back into the
/// mapping. One question per fixed frontmatter key, each defaulting to the
/// value already resolved (or a computed fallback); custom keys are never
/// touched. Answers are applied only after the whole session completes.
pub fn enrich(options: &mut OptionsMap, config: &Config) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let today = date::today(&config.default_date_format);

    let title: String = Input::with_theme(&theme)
        .with_prompt("What's the title for the note?")
        .default(text_default(options, &FrontmatterKey::Title))
        .allow_empty(true)
        .interact_text()?;

    let slug: String = Input::with_theme(&theme)
        .with_prompt("What's the slug for the note?")
        .default(
            options
                .text(&FrontmatterKey::Slug)
                .map(str::to_string)
                .unwrap_or_else(|| slug::slugify(&title)),
        )
        .allow_empty(true)
        .interact_text()?;

    let category: String = Input::with_theme(&theme)
        .with_prompt("What's the category for the note?")
        .default(text_default(options, &FrontmatterKey::Category))
        .allow_empty(true)
        .interact_text()?;

    let tags_raw: String = Input::with_theme(&theme)
        .with_prompt("Any tags for the note? (Comma separated)")
        .default(text_default(options, &FrontmatterKey::Tags))
        .allow_empty(true)
        .interact_text()?;
    let tags = split_tags(&tags_raw);

    let date = ask_date(&theme, "What is the date for the note?", config, &today)?;
    let publish = ask_date(&theme, "What is the publish date for the note?", config, &today)?;

    let private_idx = Select::with_theme(&theme)
        .with_prompt("Is the note private?")
        .items(&["No", "Yes"])
        .default(0)
        .interact()?;
    let private = private_idx == 1;

    let extension: String = Input::with_theme(&theme)
        .with_prompt("What's the file extension?")
        .default(
            options
                .text(&FrontmatterKey::FileExtension)
                .unwrap_or(&config.default_file_ext)
                .to_string(),
        )
        .interact_text()?;

    apply_answers(
        options,
        Answers {
            title,
            slug,
            category,
            tags,
            date,
            publish,
            private,
            extension,
        },
    );
    Ok(())
}

/// Final answers for the fixed question set.
pub struct Answers {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub tags: Vec<String>,
    pub date: String,
    pub publish: String,
    pub private: bool,
    pub extension: String,
}

/// Overwrite every fixed key with the session's answers. Update order
/// matches the resolver's field order semantics: existing keys keep their
/// position, FileExtension is appended as a new entry.
pub fn apply_answers(options: &mut OptionsMap, answers: Answers) {
    options.set(
        FrontmatterKey::Category,
        OptionValue::Text(answers.category),
    );
    options.set(FrontmatterKey::Date, OptionValue::Text(answers.date));
    options.set(
        FrontmatterKey::FileExtension,
        OptionValue::Text(answers.extension),
    );
    options.set(
        FrontmatterKey::PrivateKey,
        OptionValue::Flag(answers.private),
    );
    options.set(FrontmatterKey::Publish, OptionValue::Text(answers.publish));
    options.set(FrontmatterKey::Slug, OptionValue::Text(answers.slug));
    options.set(FrontmatterKey::Tags, OptionValue::List(answers.tags));
    options.set(FrontmatterKey::Title, OptionValue::Text(answers.title));
}

/// Split a comma separated tag line, trimming whitespace around each tag
/// and dropping empties.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn ask_date(
    theme: &ColorfulTheme,
    prompt: &str,
    config: &Config,
    today: &str,
) -> anyhow::Result<String> {
    let input: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .default(today.to_string())
        .interact_text()?;

    match date::reformat(&input, &config.default_date_format) {
        Some(canonical) => Ok(canonical),
        None => {
            // Invalid input never aborts the session; flag it and fall back.
            println!(
                "{}",
                style(format!(
                    "'{}' does not match {}; using {}",
                    input, config.default_date_format, today
                ))
                .dim()
            );
            Ok(today.to_string())
        }
    }
}

fn text_default(options: &OptionsMap, key: &FrontmatterKey) -> String {
    options.text(key).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_trimmed() {
        assert_eq!(split_tags("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_tag_segments_are_dropped() {
        assert_eq!(split_tags("a,,b, "), vec!["a", "b"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn answers_overwrite_fixed_keys_and_add_extension() {
        let mut options = OptionsMap::new();
        options.set(FrontmatterKey::Title, OptionValue::Text("old".to_string()));
        options.set(FrontmatterKey::PrivateKey, OptionValue::Flag(false));
        options.set(FrontmatterKey::Tags, OptionValue::Absent);

        apply_answers(
            &mut options,
            Answers {
                title: "new".to_string(),
                slug: "new".to_string(),
                category: "work".to_string(),
                tags: vec!["a".to_string()],
                date: "2023-04-01".to_string(),
                publish: "2023-04-02".to_string(),
                private: true,
                extension: "md".to_string(),
            },
        );

        assert_eq!(options.text(&FrontmatterKey::Title), Some("new"));
        assert_eq!(
            options.get(&FrontmatterKey::PrivateKey),
            Some(&OptionValue::Flag(true))
        );
        assert_eq!(
            options.get(&FrontmatterKey::Tags),
            Some(&OptionValue::List(vec!["a".to_string()]))
        );
        assert_eq!(options.text(&FrontmatterKey::FileExtension), Some("md"));
    }

    #[test]
    fn answers_leave_custom_keys_alone() {
        let mut options = OptionsMap::new();
        options.set(
            FrontmatterKey::Custom("Editor".to_string()),
            OptionValue::Text("vim".to_string()),
        );

        apply_answers(
            &mut options,
            Answers {
                title: "t".to_string(),
                slug: "t".to_string(),
                category: String::new(),
                tags: vec![],
                date: "2023-04-01".to_string(),
                publish: "2023-04-01".to_string(),
                private: false,
                extension: "md".to_string(),
            },
        );

        assert_eq!(
            options.get(&FrontmatterKey::Custom("Editor".to_string())),
            Some(&OptionValue::Text("vim".to_string()))
        );
    }
}
