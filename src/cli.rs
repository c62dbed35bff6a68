use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "examform",
    version,
    about = "Compile Markdown exam questions into interactive HTML forms"
)]
pub struct Cli {
    /// Path to the authored exam Markdown file
    pub input: String,

    /// Pre-fill correct answers and disable inputs (author preview)
    #[arg(long)]
    pub reveal: bool,

    /// Write the extracted answer key (JSON) to this path
    #[arg(long, value_name = "path")]
    pub key: Option<String>,

    /// Write HTML here instead of stdout
    #[arg(long, value_name = "path")]
    pub out: Option<String>,
}
