use crate::model::{Segment, Widget};
use crate::widget;

/// Pull the canonical correct answers out of one question block's raw text.
///
/// Order is fixed: answer-bearing blank values first, then bare correct
/// option labels, then correct dropdown labels group by group, each category
/// in source order. Concatenated across a document's question blocks this
/// forms the answer key the grading comparison runs against.
///
/// Works on the raw text directly; no HTML is produced and no state is
/// touched, so re-running on the same input always yields the same list.
pub fn extract_answers(text: &str) -> Vec<String> {
    let segments = widget::scan(text);
    let mut answers: Vec<String> = Vec::new();

    for segment in &segments {
        if let Segment::Widget(Widget::Blank {
            answer: Some(answer),
        }) = segment
        {
            answers.push(answer.clone());
        }
    }
    for segment in &segments {
        if let Segment::Widget(Widget::Choice(option)) = segment {
            if option.correct {
                answers.push(option.label.clone());
            }
        }
    }
    for segment in &segments {
        if let Segment::Widget(Widget::Dropdown(options)) = segment {
            for option in options {
                if option.correct {
                    answers.push(option.label.clone());
                }
            }
        }
    }

    answers
}
