//! Compiles Markdown-authored exam questions into interactive HTML forms.
//!
//! Authored text is split into prose and question blocks; question blocks
//! carry inline widget markers (`[T*answer]` blanks, `[*]`/`[ ]` choice
//! options, `[D]..[/D]` dropdowns) that compile to form controls, in either
//! student mode (blank, enabled) or reveal mode (pre-filled, disabled).
//! [`compile::Compiler`] is the entry point; [`extract`] produces the
//! canonical answer key stored at authoring time.

pub mod cli;
pub mod compile;
pub mod extract;
pub mod key;
pub mod model;
pub mod segment;
pub mod transform;
pub mod widget;

pub use compile::Compiler;
