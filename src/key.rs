use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Answer key persisted by the authoring workflow next to the compiled HTML.
/// The hash of the authored source lets graders detect that a stored key no
/// longer matches an edited exam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerKey {
    pub source_hash: String,
    pub answers: Vec<String>,
}

pub fn build_answer_key(source: &str, answers: Vec<String>) -> AnswerKey {
    AnswerKey {
        source_hash: compute_str_hash(source),
        answers,
    }
}

pub fn compute_str_hash(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let result = hasher.finalize();
    format!("sha256:{}", hex_encode(&result))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
