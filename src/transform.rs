use crate::model::{ChoiceOption, Segment, Widget};
use crate::widget;

/// Widest a dropdown is allowed to grow, in characters. Long labels scroll
/// inside the control instead of blowing up the layout.
const MAX_SELECT_WIDTH: usize = 20;

/// Rewrite one question block's text into form markup.
///
/// Widgets become inputs named after the question number; in reveal mode
/// the correct values are pre-filled and the controls disabled, in student
/// mode everything is empty and enabled. Surrounding prose is left as
/// Markdown for the caller to convert; the substituted control markup passes
/// through that conversion as raw inline HTML.
///
/// Output is deterministic: same text, number, and mode give byte-identical
/// markup.
pub fn render_question(text: &str, number: u32, reveal: bool) -> String {
    let segments = widget::scan(text);
    let multi = widget::correct_count(&segments) > 1;

    let mut out = String::new();
    for segment in &segments {
        match segment {
            Segment::Text(literal) => out.push_str(literal),
            Segment::Widget(Widget::Blank { answer }) => {
                push_blank(&mut out, answer.as_deref(), number, reveal)
            }
            Segment::Widget(Widget::Choice(option)) => {
                push_choice(&mut out, option, number, reveal, multi)
            }
            Segment::Widget(Widget::Dropdown(options)) => {
                push_dropdown(&mut out, options, number, reveal)
            }
            Segment::Widget(Widget::Number) => out.push_str(&number.to_string()),
        }
    }
    out
}

fn push_blank(out: &mut String, answer: Option<&str>, number: u32, reveal: bool) {
    match answer {
        // Answer-bearing blank in reveal mode: pre-filled and locked.
        Some(answer) if reveal => {
            out.push_str(&format!(
                "<input type=\"text\" class=\"blank\" value=\"{}\" disabled>",
                html_escape(answer)
            ));
        }
        // Student mode, and bare `[T]` blanks in either mode: empty, enabled.
        _ => {
            out.push_str(&format!(
                "<input type=\"text\" class=\"blank\" name=\"question_{}\" value=\"\">",
                number
            ));
        }
    }
}

fn push_choice(out: &mut String, option: &ChoiceOption, number: u32, reveal: bool, multi: bool) {
    let kind = if multi { "checkbox" } else { "radio" };
    let checked = if reveal && option.correct { " checked" } else { "" };
    let disabled = if reveal { " disabled" } else { "" };
    let label = html_escape(&option.label);

    out.push_str(&format!(
        "<label><input type=\"{}\" name=\"question_{}\" value=\"{}\"{}{}> {}</label>",
        kind, number, label, checked, disabled, label
    ));
}

fn push_dropdown(out: &mut String, options: &[ChoiceOption], number: u32, reveal: bool) {
    let longest = options
        .iter()
        .map(|o| o.label.chars().count())
        .max()
        .unwrap_or(0);
    let width = longest.min(MAX_SELECT_WIDTH);
    let disabled = if reveal { " disabled" } else { "" };

    out.push_str(&format!(
        "<select name=\"question_{}\" style=\"min-width: {}ch\"{}>",
        number, width, disabled
    ));
    for option in options {
        let selected = if reveal && option.correct { " selected" } else { "" };
        out.push_str(&format!(
            "<option{}>{}</option>",
            selected,
            html_escape(&option.label)
        ));
    }
    out.push_str("</select>");
}

/// Escape HTML special characters in authored text before it lands in
/// attribute values or element content.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
