use pulldown_cmark::{html, Event, Options, Parser};

use crate::extract::extract_answers;
use crate::model::Block;
use crate::segment::split_blocks;
use crate::transform::render_question;

/// Compiler facade. Owns the fixed Markdown options so every call converts
/// prose the same way; carries no other state, so one instance can serve any
/// number of documents concurrently.
pub struct Compiler {
    options: Options,
}

impl Compiler {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Compiler { options }
    }

    /// Compile a document to display HTML. With `reveal` set, correct
    /// answers are pre-filled and controls disabled (author preview and
    /// graded review); otherwise the form is blank and enabled.
    pub fn render_for_display(&self, source: &str, reveal: bool) -> String {
        let mut out = String::new();
        let mut number = 0u32;
        for block in split_blocks(source) {
            match block {
                Block::Prose(lines) => out.push_str(&self.markdown(&lines.join("\n"))),
                Block::Question(lines) => {
                    number += 1;
                    let substituted = render_question(&lines.join("\n"), number, reveal);
                    out.push_str(&self.markdown(&substituted));
                }
            }
        }
        out
    }

    /// Compile a document for authoring-time storage: the student-facing
    /// HTML (never revealing) plus the canonical answer key, in block order.
    pub fn render_and_extract(&self, source: &str) -> (String, Vec<String>) {
        let mut out = String::new();
        let mut answers: Vec<String> = Vec::new();
        let mut number = 0u32;
        for block in split_blocks(source) {
            match block {
                Block::Prose(lines) => out.push_str(&self.markdown(&lines.join("\n"))),
                Block::Question(lines) => {
                    number += 1;
                    let text = lines.join("\n");
                    out.push_str(&self.markdown(&render_question(&text, number, false)));
                    answers.extend(extract_answers(&text));
                }
            }
        }
        (out, answers)
    }

    // Prose conversion. Soft line breaks become hard breaks: authored exam
    // text treats every newline as a real line break.
    fn markdown(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.options).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            other => other,
        });
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
