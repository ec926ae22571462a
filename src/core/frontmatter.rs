use crate::core::options::{FrontmatterKey, OptionValue, OptionsMap};

const DELIMITER: &str = "---";

/// Serialize the options mapping into a frontmatter block, one line per
/// entry in mapping iteration order, wrapped in `---` delimiters.
///
/// `PrivateKey` renders under the name `Private` with an unquoted boolean;
/// text values are double-quoted; sequences render as `[ "a", "b" ]` style
/// inline lists; an absent value becomes a `# Key: undefined` comment so
/// the block stays valid while flagging the gap.
pub fn render(options: &OptionsMap) -> String {
    let mut out = String::new();
    out.push_str(DELIMITER);
    out.push('\n');
    for (key, value) in options.iter() {
        out.push_str(&render_line(key, value));
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push('\n');
    out
}

fn render_line(key: &FrontmatterKey, value: &OptionValue) -> String {
    if let FrontmatterKey::PrivateKey = key {
        // The render target's field is named Private, unlike the internal key.
        let flag = match value {
            OptionValue::Flag(b) => *b,
            _ => false,
        };
        return format!("Private: {}", flag);
    }

    let name = key.render_name();
    match value {
        OptionValue::Text(s) => format!("{}: \"{}\"", name, s),
        OptionValue::Flag(b) => format!("{}: {}", name, b),
        OptionValue::List(items) => {
            let quoted: Vec<String> = items.iter().map(|el| format!("\"{}\"", el)).collect();
            format!("{}: [{}]", name, quoted.join(", "))
        }
        OptionValue::Absent => format!("# {}: undefined", name),
    }
}
