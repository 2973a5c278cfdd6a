//! Integration tests for export filename generation

use litmd::export::filename::{
    generate, sanitize, with_extension, Config, Segment, Template, TemplateError,
};

#[test]
fn default_template_uses_the_name() {
    let name = generate("Release Notes", "{name}", &Config::default()).unwrap();
    assert_eq!(name, "Release-Notes.md");
}

#[test]
fn unicode_names_are_transliterated() {
    assert_eq!(sanitize("Café Menü"), "Cafe-Menu");
}

#[test]
fn date_tag_expands_to_todays_date() {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let name = generate("notes", "{name}_{date:%Y-%m-%d}", &Config::default()).unwrap();
    assert_eq!(name, format!("notes_{}.md", today));
}

#[test]
fn template_segments_are_parsed_in_order() {
    let template = Template::parse("{date:%Y}-{name}").unwrap();
    assert_eq!(
        template.segments(),
        &[
            Segment::Date("%Y".to_string()),
            Segment::Literal("-".to_string()),
            Segment::Name,
        ]
    );
}

#[test]
fn template_errors() {
    assert_eq!(Template::parse(""), Err(TemplateError::Empty));
    assert_eq!(Template::parse("{name"), Err(TemplateError::UnclosedBrace));
    assert_eq!(Template::parse("name}"), Err(TemplateError::UnmatchedCloseBrace));
    assert_eq!(
        Template::parse("{title}"),
        Err(TemplateError::UnknownTag("title".to_string()))
    );
}

#[test]
fn long_names_are_truncated() {
    let config = Config { name_max_length: 5 };
    let name = generate("abcdefghij", "{name}", &config).unwrap();
    assert_eq!(name, "abcde.md");
}

#[test]
fn extension_is_not_doubled() {
    assert_eq!(with_extension("notes.md"), "notes.md");
    assert_eq!(with_extension("notes.MD"), "notes.MD");
    assert_eq!(with_extension("notes"), "notes.md");
}
