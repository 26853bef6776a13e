//! CREATE command - Create a note.

use anyhow::{Result, bail};
use clap::Args;

use super::{Note, NoteRequest, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Note text
    pub content: String,

    /// Optional title; the server shows the start of the content when omitted
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    if args.content.is_empty() {
        bail!("note content must not be empty");
    }

    let url = format!("{}/notes/", base_url);
    let body = NoteRequest {
        title: args.title,
        content: args.content,
    };

    let note: Note = make_request(client.post(&url).json(&body)).await?;

    output(&note, human)
}
