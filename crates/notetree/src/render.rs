//! Note content rendering.
//!
//! Formatting is delegated to pulldown-cmark. A note is shown raw while its body is
//! being edited and as HTML otherwise; [`NoteView`] carries that decision to the UI.
//! Fenced code blocks come out as `<pre><code class="language-xyz">`, which is the
//! hook an external syntax highlighter attaches to.

use pulldown_cmark::{html, Options, Parser};
use tracing::instrument;

pub trait Renderer {
    fn render(&self, content: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    #[instrument(level = "trace", skip(self, content))]
    fn render(&self, content: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(content, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

/// What the content pane shows for the active note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteView<'a> {
    /// Raw text for the editor.
    Raw(&'a str),
    /// Rendered HTML.
    Formatted(String),
}

impl<'a> NoteView<'a> {
    pub fn build<R: Renderer + ?Sized>(content: &'a str, editing: bool, renderer: &R) -> Self {
        if editing {
            NoteView::Raw(content)
        } else {
            NoteView::Formatted(renderer.render(content))
        }
    }
}
