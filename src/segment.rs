use crate::model::{Block, QUESTION_MARKER};

/// Partition an authored document into prose and question blocks.
///
/// A line containing the question marker opens a new question block, closing
/// whatever block was accumulating. A question block is closed only by
/// another marker line or end of input; blank lines and plain prose inside
/// it belong to the question, since options are often interleaved with
/// explanatory text. Every input line lands in exactly one block, in source
/// order.
pub fn split_blocks(source: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut in_question = false;

    for line in source.lines() {
        if line.contains(QUESTION_MARKER) {
            flush(&mut blocks, &mut current, in_question);
            in_question = true;
        }
        current.push(line.to_string());
    }
    flush(&mut blocks, &mut current, in_question);

    blocks
}

fn flush(blocks: &mut Vec<Block>, current: &mut Vec<String>, in_question: bool) {
    if current.is_empty() {
        return;
    }
    let lines = std::mem::take(current);
    blocks.push(if in_question {
        Block::Question(lines)
    } else {
        Block::Prose(lines)
    });
}
