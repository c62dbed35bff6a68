use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{ChoiceOption, Segment, Widget};

/// One alternation covering every widget form. The dropdown span comes first
/// so options enclosed in `[D]..[/D]` are consumed with their group and never
/// re-match as bare options; `(?s)` lets a dropdown span line breaks.
static WIDGET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)(?P<dropdown>\[D\].*?\[/D\])|\[T\*(?P<answer>[^\]\n]*)\]|(?P<empty>\[T\])|\[(?P<mark>[* ])\](?P<label>[^\[\n]*)|(?P<num>\[!num\])",
    )
    .unwrap()
});

static OPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([* ])\]([^\[\n]*)").unwrap());

/// Split question text into literal spans and widgets in one left-to-right
/// scan. Matches never overlap, so text consumed by one widget cannot feed a
/// later one. Anything that matches no widget form (including unterminated
/// markers) stays literal.
pub fn scan(text: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut last = 0;

    for caps in WIDGET_RE.captures_iter(text) {
        let m = caps.get(0).expect("group 0 always present");
        if m.start() > last {
            segments.push(Segment::Text(text[last..m.start()].to_string()));
        }

        let widget = if let Some(span) = caps.name("dropdown") {
            Widget::Dropdown(scan_options(span.as_str()))
        } else if let Some(answer) = caps.name("answer") {
            Widget::Blank {
                answer: Some(answer.as_str().trim().to_string()),
            }
        } else if caps.name("empty").is_some() {
            Widget::Blank { answer: None }
        } else if let Some(mark) = caps.name("mark") {
            Widget::Choice(ChoiceOption {
                label: caps["label"].trim().to_string(),
                correct: mark.as_str() == "*",
            })
        } else {
            Widget::Number
        };
        segments.push(Segment::Widget(widget));
        last = m.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(text[last..].to_string()));
    }
    segments
}

fn scan_options(span: &str) -> Vec<ChoiceOption> {
    OPTION_RE
        .captures_iter(span)
        .map(|caps| ChoiceOption {
            label: caps[2].trim().to_string(),
            correct: &caps[1] == "*",
        })
        .collect()
}

/// Count correct-marked options anywhere in the block, dropdown interiors
/// included. The authoring convention decides radio vs checkbox for bare
/// options from this whole-block count.
pub fn correct_count(segments: &[Segment]) -> usize {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Widget(Widget::Choice(option)) => usize::from(option.correct),
            Segment::Widget(Widget::Dropdown(options)) => {
                options.iter().filter(|o| o.correct).count()
            }
            _ => 0,
        })
        .sum()
}
