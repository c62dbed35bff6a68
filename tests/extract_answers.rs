use std::fs;

use examform::extract::extract_answers;
use examform::{key, Compiler};

#[test]
fn blank_then_choice_in_order() {
    let doc = "[!num] The capital of France is [T*Paris].\nPick one:\n[*] Blue\n[ ] Green";
    let (_, answers) = Compiler::new().render_and_extract(doc);
    assert_eq!(answers, vec!["Paris".to_string(), "Blue".to_string()]);
}

#[test]
fn dropdown_correct_option_is_extracted() {
    let (_, answers) = Compiler::new().render_and_extract("[!num] Pick: [D][*] Red\n[ ] Blue[/D]");
    assert_eq!(answers, vec!["Red".to_string()]);
}

#[test]
fn extraction_order_is_blanks_then_choices_then_dropdowns() {
    // Source order inside each category, categories in a fixed order even
    // when the widgets are interleaved.
    let text = "[D][*] Red[/D] then [T*Paris] and\n[*] Blue";
    let answers = extract_answers(text);
    assert_eq!(
        answers,
        vec!["Paris".to_string(), "Blue".to_string(), "Red".to_string()]
    );
}

#[test]
fn incorrect_options_and_empty_blanks_yield_nothing() {
    let answers = extract_answers("Fill [T] then\n[ ] Green\n[D][ ] Blue[/D]");
    assert!(answers.is_empty());
}

#[test]
fn extraction_is_idempotent() {
    let text = "[T*alpha] and [T*beta]\n[*] gamma";
    assert_eq!(extract_answers(text), extract_answers(text));
}

#[test]
fn answers_concatenate_across_blocks_in_order() {
    let doc = "[!num] Agree?\n[*] Yes\n[ ] No\n[!num] Tea?\n[*] Green\n[ ] Black";
    let compiler = Compiler::new();
    let (html, answers) = compiler.render_and_extract(doc);

    assert_eq!(answers, vec!["Yes".to_string(), "Green".to_string()]);
    // Extraction never reveals: the HTML side stays in student mode.
    assert!(!html.contains("checked"));
    assert!(!html.contains("disabled"));
}

#[test]
fn empty_document_yields_empty_pair() {
    let (html, answers) = Compiler::new().render_and_extract("");
    assert_eq!(html, "");
    assert!(answers.is_empty());
}

#[test]
fn fixture_answer_key() {
    let doc = fs::read_to_string("tests/fixtures/sample_exam.md").expect("Cannot read fixture");
    let (_, answers) = Compiler::new().render_and_extract(&doc);
    assert_eq!(
        answers,
        vec![
            "Paris".to_string(),
            "1900".to_string(),
            "Blue".to_string(),
            "Red".to_string(),
            "Paris".to_string(),
        ]
    );
}

#[test]
fn answer_key_carries_source_hash() {
    let source = "[!num] The capital of France is [T*Paris].";
    let (_, answers) = Compiler::new().render_and_extract(source);
    let answer_key = key::build_answer_key(source, answers);

    assert_eq!(answer_key.answers, vec!["Paris".to_string()]);
    assert!(answer_key.source_hash.starts_with("sha256:"));
    assert_eq!(answer_key.source_hash.len(), "sha256:".len() + 64);
    // Same source, same hash.
    assert_eq!(answer_key.source_hash, key::compute_str_hash(source));

    let json = serde_json::to_string(&answer_key).unwrap();
    let parsed: key::AnswerKey = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.answers, answer_key.answers);
    assert_eq!(parsed.source_hash, answer_key.source_hash);
}
