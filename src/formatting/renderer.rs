use crate::formatting::formatter::format_with_renderer;
use crate::formatting::*;
use crate::language::Document;

/// We do the layout in two passes. First we convert the classified lines
/// into a Vec of "fragments" (Syntax tag, String pairs). Then second we apply
/// the specified renderer to each pair to result in an embellished String.
pub fn render(renderer: &dyn Render, document: &Document) -> String {
    // Pass 1: lay out lines as tagged fragments
    let fragments = format_with_renderer(document);

    // Pass 2: apply markup to fragments via style() and combine.
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output
}
