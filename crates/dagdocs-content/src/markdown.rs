//! Markdown rendering with outline extraction.
//!
//! Headings get stable anchor IDs (an explicit `{#id}` wins, otherwise a slug
//! of the heading text, de-duplicated with `-1`, `-2`, ... suffixes). Levels
//! 2 to 4 are collected into the outline; the page title lives in frontmatter.

use std::collections::HashMap;

use dagdocs_routes::OutlineEntry;
use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

const OUTLINE_LEVELS: std::ops::RangeInclusive<u8> = 2..=4;

/// Heading whose events are buffered until its ID is known.
struct PendingHeading<'a> {
    level: HeadingLevel,
    id: Option<CowStr<'a>>,
    classes: Vec<CowStr<'a>>,
    attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    text: String,
    events: Vec<Event<'a>>,
}

/// Render `markdown` to HTML and collect its outline.
pub(crate) fn render(markdown: &str) -> (String, Vec<OutlineEntry>) {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let mut events = Vec::new();
    let mut outline = Vec::new();
    let mut id_counts = HashMap::new();
    let mut pending: Option<PendingHeading<'_>> = None;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                pending = Some(PendingHeading {
                    level,
                    id,
                    classes,
                    attrs,
                    text: String::new(),
                    events: Vec::new(),
                });
            }
            Event::End(TagEnd::Heading(end_level)) => {
                let Some(heading) = pending.take() else {
                    continue;
                };
                let text = heading.text.trim().to_owned();
                let anchor = match heading.id {
                    Some(id) => id.into_string(),
                    None => unique_id(&mut id_counts, &slugify(&text)),
                };

                let level = heading.level as u8;
                if OUTLINE_LEVELS.contains(&level) {
                    outline.push(OutlineEntry {
                        level,
                        text,
                        anchor: anchor.clone(),
                    });
                }

                events.push(Event::Start(Tag::Heading {
                    level: heading.level,
                    id: Some(CowStr::from(anchor)),
                    classes: heading.classes,
                    attrs: heading.attrs,
                }));
                events.extend(heading.events);
                events.push(Event::End(TagEnd::Heading(end_level)));
            }
            other => {
                if let Some(heading) = pending.as_mut() {
                    if let Event::Text(text) | Event::Code(text) = &other {
                        heading.text.push_str(text);
                    }
                    heading.events.push(other);
                } else {
                    events.push(other);
                }
            }
        }
    }

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, events.into_iter());
    (output, outline)
}

/// Return `base`, or `base-N` if it was already handed out.
fn unique_id(counts: &mut HashMap<String, usize>, base: &str) -> String {
    let count = counts.entry(base.to_owned()).or_default();
    let id = match *count {
        0 => base.to_owned(),
        n => format!("{base}-{n}"),
    };
    *count += 1;
    id
}

/// Convert heading text to a URL-safe anchor.
fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}
