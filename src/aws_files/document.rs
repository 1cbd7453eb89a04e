use ini::{Ini, ParseError, ParseOption};

/// INI text plus its parsed view.
///
/// Reads go through the parsed view. Writes edit only the affected line of the text, so
/// comments, nested sub-settings and key order elsewhere in the file stay as they were.
#[derive(Debug, Clone, Default)]
pub struct IniDocument {
    text: String,
    parsed: Ini,
}

impl IniDocument {
    pub fn parse(text: String) -> Result<Self, ParseError> {
        let parsed = Ini::load_from_str_opt(&text, parse_option())?;
        Ok(IniDocument { text, parsed })
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.parsed.sections().flatten()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.parsed.section(Some(section)).is_some()
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.parsed.get_from(Some(section), key)
    }

    /// Replaces `key` in `section`, adding the key or the whole section when missing.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.text = set_line(&self.text, section, key, value);
        self.parsed.with_section(Some(section)).set(key, value);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

// Values such as secret keys must be read byte for byte.
fn parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..Default::default()
    }
}

fn set_line(text: &str, section: &str, key: &str, value: &str) -> String {
    let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let entry = format!("{key} = {value}");
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();

    match lines.iter().position(|line| header_name(line) == Some(section)) {
        Some(header) => {
            let body = header + 1;
            let end = lines[body..]
                .iter()
                .position(|line| header_name(line).is_some())
                .map_or(lines.len(), |offset| body + offset);

            match (body..end).find(|&index| key_name(&lines[index]) == Some(key)) {
                Some(index) => lines[index] = entry,
                None => {
                    let at = (body..end)
                        .rev()
                        .find(|&index| !lines[index].trim().is_empty())
                        .map_or(body, |index| index + 1);
                    lines.insert(at, entry);
                }
            }
        }
        None => {
            if lines.last().is_some_and(|line| !line.trim().is_empty()) {
                lines.push(String::new());
            }
            lines.push(format!("[{section}]"));
            lines.push(entry);
        }
    }

    let mut edited = lines.join(newline);
    edited.push_str(newline);
    edited
}

fn header_name(line: &str) -> Option<&str> {
    let (name, _) = line.trim().strip_prefix('[')?.split_once(']')?;
    Some(name.trim())
}

// Indented lines are nested sub-settings of the key above them.
fn key_name(line: &str) -> Option<&str> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let line = line.trim();
    if line.starts_with('#') || line.starts_with(';') {
        return None;
    }
    line.split_once('=').map(|(key, _)| key.trim())
}
