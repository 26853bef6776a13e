//! UPDATE command - Replace a note's title and content.

use anyhow::Result;
use clap::Args;

use super::{Note, NoteRequest, make_request, output};

/// Arguments for the update command.
///
/// Both fields are replaced: leaving out --title clears the stored title.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID
    pub id: u64,

    /// New note text
    pub content: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let url = format!("{}/notes/{}", base_url, args.id);
    let body = NoteRequest {
        title: args.title,
        content: args.content,
    };

    let note: Note = make_request(client.put(&url).json(&body)).await?;

    output(&note, human)
}
