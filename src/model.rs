/// A line containing this token opens a new question block. Inside question
/// text it stands for the question's 1-based number.
pub const QUESTION_MARKER: &str = "[!num]";

/// A maximal contiguous span of the authored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Ordinary Markdown prose between questions.
    Prose(Vec<String>),
    /// One exam question: the marker line plus every following line up to the
    /// next marker line or end of input.
    Question(Vec<String>),
}

impl Block {
    pub fn lines(&self) -> &[String] {
        match self {
            Block::Prose(lines) | Block::Question(lines) => lines,
        }
    }
}

/// One entry of a choice group, bare or inside a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: String,
    pub correct: bool,
}

/// An interactive element embedded in question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Text blank. `answer` is `Some` for `[T*answer]` (the canonical answer)
    /// and `None` for a bare `[T]`.
    Blank { answer: Option<String> },
    /// A `[*]` / `[ ]` option outside any dropdown group.
    Choice(ChoiceOption),
    /// A `[D]..[/D]` group, rendered as a single select control.
    Dropdown(Vec<ChoiceOption>),
    /// The question-number placeholder.
    Number,
}

/// Question text split into literal spans and widgets, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Widget(Widget),
}
