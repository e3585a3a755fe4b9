use scraper::{Html, Selector};

/// Render instruction markup as plain text, one step per line.
///
/// List items and paragraphs become separate lines; anything else is
/// flattened to its text. Plain text input comes back trimmed.
pub fn instructions_to_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);

    let blocks: Vec<String> = match Selector::parse("li, p") {
        Ok(selector) => fragment
            .select(&selector)
            // Nested blocks are rendered by their parent
            .filter(|el| {
                !el.ancestors()
                    .filter_map(scraper::ElementRef::wrap)
                    .any(|a| matches!(a.value().name(), "li" | "p"))
            })
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .filter(|line| !line.is_empty())
            .collect(),
        Err(_) => Vec::new(),
    };

    if blocks.is_empty() {
        collapse_whitespace(&fragment.root_element().text().collect::<String>())
    } else {
        blocks.join("\n")
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
