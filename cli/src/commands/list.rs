//! LIST command - List notes, optionally filtered.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, Note, make_request, output, truncate};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show notes whose title or content contains this text (case-sensitive)
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Notes returned by the server.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NoteList(pub Vec<Note>);

impl HumanReadable for NoteList {
    fn print_human(&self) {
        println!("{}", "Notes".green().bold());
        println!("{}", "=".repeat(60));

        if self.0.is_empty() {
            println!("  {}", "(No notes)".dimmed());
            return;
        }

        for note in &self.0 {
            println!(
                "  {:>4}  {}  {}",
                note.id.to_string().yellow(),
                truncate(&note.title, 30).bold(),
                truncate(&note.content, 40).dimmed()
            );
        }
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let url = format!("{}/notes/", base_url);

    let mut request = client.get(&url);
    if let Some(query) = &args.query {
        request = request.query(&[("query", query)]);
    }

    let notes: NoteList = make_request(request).await?;

    output(&notes, human)
}
