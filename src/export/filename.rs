//! Filename generation and sanitization for exported Markdown files.
//!
//! Provides configurable filename templates with tags like `{name}`, `{date}`,
//! `{time}`, and sanitization to ensure filesystem-safe names that always end
//! in `.md`.

use deunicode::deunicode;

/// Extension forced onto every exported file.
pub const EXTENSION: &str = "md";

/// Default value for the `{name}` tag.
pub const DEFAULT_NAME: &str = "markdown-content";

/// Default template string.
pub const DEFAULT_TEMPLATE: &str = "{name}";

/// Minimum allowed value for name_max_length.
const MIN_NAME_MAX_LENGTH: usize = 1;

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Maximum filename length for most filesystems.
const MAX_FILENAME_LENGTH: usize = 255;

/// Default date format for {date} tag.
const DEFAULT_DATE_FORMAT: &str = "%Y%m%d";

/// Default time format for {time} tag.
const DEFAULT_TIME_FORMAT: &str = "%H%M%S";

/// Configuration for filename generation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum length for the `{name}` component (default: 100, minimum: 1).
    pub name_max_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name_max_length: 100,
        }
    }
}

impl Config {
    /// Creates a new Config, ensuring name_max_length is at least 1.
    pub fn new(name_max_length: usize) -> Self {
        Self {
            name_max_length: name_max_length.max(MIN_NAME_MAX_LENGTH),
        }
    }
}

/// Sanitizes a string for use in filenames.
///
/// Applies the following transformations in order:
/// 1. Unicode → ASCII transliteration
/// 2. Whitespace → hyphens, invalid filesystem characters removed
/// 3. Multiple hyphens collapsed to single
/// 4. Leading/trailing dots, spaces, hyphens trimmed
/// 5. Windows reserved names prefixed with `_`
/// 6. Empty results → `markdown-content` fallback
pub fn sanitize(input: &str) -> String {
    let ascii = deunicode(input);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;

    for c in ascii.chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        } else if INVALID_CHARS.contains(&c) {
            continue;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            result.push(c);
            last_was_hyphen = false;
        }
        // Anything else (brackets, punctuation, leftovers of deunicode) is dropped
    }

    let trimmed = trim_edges(&result);
    let final_name = handle_reserved_name(&trimmed);

    if final_name.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        final_name
    }
}

/// Sanitizes the `{name}` value with length truncation.
pub fn sanitize_name(input: &str, config: &Config) -> String {
    let sanitized = sanitize(input);
    truncate_to_length(&sanitized, config.name_max_length)
}

/// Validates that a final filename doesn't exceed filesystem limits.
pub fn validate_length(filename: &str) -> Result<(), FilenameError> {
    if filename.len() > MAX_FILENAME_LENGTH {
        Err(FilenameError::TooLong {
            length: filename.len(),
            max: MAX_FILENAME_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Append `.md` unless the name already ends with it (case-insensitive).
pub fn with_extension(name: &str) -> String {
    let suffix = format!(".{}", EXTENSION);
    if name.to_ascii_lowercase().ends_with(&suffix) && name.len() > suffix.len() {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    }
}

/// Generates a filename from a template and a name.
///
/// 1. Parses the template
/// 2. Renders it with the name and current datetime
/// 3. Sanitizes the result and adds the `.md` extension
/// 4. Validates the final length
pub fn generate(name: &str, template: &str, config: &Config) -> Result<String, GenerateError> {
    let parsed = Template::parse(template)?;
    let filename = parsed.filename(name, config);
    validate_length(&filename)?;
    Ok(filename)
}

/// Errors that can occur during filename generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Filename error: {0}")]
    Filename(#[from] FilenameError),
}

/// Errors that can occur during filename operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("Filename too long: {length} characters (max {max})")]
    TooLong { length: usize, max: usize },
}

/// Errors that can occur during template parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("Template cannot be empty")]
    Empty,
    #[error("Unclosed brace in template")]
    UnclosedBrace,
    #[error("Unmatched closing brace in template")]
    UnmatchedCloseBrace,
    #[error("Unknown template tag: {0}")]
    UnknownTag(String),
    #[error("Invalid format string: {0}")]
    InvalidFormat(String),
}

/// Trims leading and trailing dots, spaces, and hyphens.
fn trim_edges(s: &str) -> String {
    s.trim_matches(|c| c == '.' || c == ' ' || c == '-')
        .to_string()
}

/// Truncates a string to the specified length.
fn truncate_to_length(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Checks if a name is a Windows reserved name and prefixes it if so.
///
/// Handles both exact matches (CON) and names with extensions (CON.md).
fn handle_reserved_name(name: &str) -> String {
    let base_name = match name.find('.') {
        Some(pos) => &name[..pos],
        None => name,
    };

    let upper = base_name.to_uppercase();
    if WINDOWS_RESERVED.iter().any(|reserved| upper == *reserved) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text to include as-is.
    Literal(String),
    /// The export name.
    Name,
    /// Date tag with format string.
    Date(String),
    /// Time tag with format string.
    Time(String),
}

/// A parsed filename template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            segments: vec![Segment::Name],
        }
    }
}

impl Template {
    /// Parses a template string into segments.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        if template.is_empty() {
            return Err(TemplateError::Empty);
        }

        let mut segments = Vec::new();
        let mut chars = template.chars();
        let mut literal = String::new();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }

                    let mut tag_content = String::new();
                    let mut found_close = false;
                    for tc in chars.by_ref() {
                        match tc {
                            '}' => {
                                found_close = true;
                                break;
                            }
                            '{' => return Err(TemplateError::UnclosedBrace),
                            _ => tag_content.push(tc),
                        }
                    }
                    if !found_close {
                        return Err(TemplateError::UnclosedBrace);
                    }

                    segments.push(parse_tag(&tag_content)?);
                }
                '}' => return Err(TemplateError::UnmatchedCloseBrace),
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Returns the parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Renders the template with the given name, before sanitization.
    pub fn render(&self, name: &str, config: &Config) -> String {
        let now = chrono::Local::now();
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => result.push_str(s),
                Segment::Name => result.push_str(&sanitize_name(name, config)),
                Segment::Date(fmt) | Segment::Time(fmt) => {
                    result.push_str(&now.format(fmt).to_string());
                }
            }
        }

        result
    }

    /// Renders, sanitizes and adds the `.md` extension.
    pub fn filename(&self, name: &str, config: &Config) -> String {
        with_extension(&sanitize(&self.render(name, config)))
    }
}

/// Parses a tag content string (without braces) into a Segment.
fn parse_tag(content: &str) -> Result<Segment, TemplateError> {
    let (tag_name, format) = match content.split_once(':') {
        Some((name, fmt)) => (name, Some(fmt)),
        None => (content, None),
    };

    match tag_name {
        "name" => {
            if format.is_some() {
                return Err(TemplateError::InvalidFormat(
                    "name tag does not accept format".to_string(),
                ));
            }
            Ok(Segment::Name)
        }
        "date" => Ok(Segment::Date(checked_format(
            "date",
            format.unwrap_or(DEFAULT_DATE_FORMAT),
        )?)),
        "time" => Ok(Segment::Time(checked_format(
            "time",
            format.unwrap_or(DEFAULT_TIME_FORMAT),
        )?)),
        _ => Err(TemplateError::UnknownTag(tag_name.to_string())),
    }
}

fn checked_format(tag: &str, fmt: &str) -> Result<String, TemplateError> {
    if fmt.is_empty() {
        return Err(TemplateError::InvalidFormat(format!(
            "{} format cannot be empty",
            tag
        )));
    }
    validate_strftime_format(fmt)?;
    Ok(fmt.to_string())
}

/// Validates a strftime format string by checking it contains at least one valid specifier.
fn validate_strftime_format(fmt: &str) -> Result<(), TemplateError> {
    const VALID_SPECIFIERS: &[char] = &[
        'Y', 'y', 'm', 'd', 'H', 'M', 'S', 'f', 'j', 'U', 'W', 'w', 'a', 'A', 'b', 'B', 'C', 'e',
        'G', 'g', 'I', 'k', 'l', 'P', 'p', 'R', 'T', 's', 'u', 'V', 'z',
    ];

    let mut chars = fmt.chars().peekable();
    let mut found_specifier = false;

    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.next() {
                Some(next) if VALID_SPECIFIERS.contains(&next) => found_specifier = true,
                // chrono fails at format time on unknown specifiers
                Some('%') => {}
                Some(other) => {
                    return Err(TemplateError::InvalidFormat(format!(
                        "unknown specifier '%{}' in '{}'",
                        other, fmt
                    )))
                }
                None => {
                    return Err(TemplateError::InvalidFormat(format!(
                        "dangling '%' in '{}'",
                        fmt
                    )))
                }
            }
        }
    }

    if !found_specifier {
        return Err(TemplateError::InvalidFormat(format!(
            "format string '{}' contains no valid strftime specifiers",
            fmt
        )));
    }

    Ok(())
}
