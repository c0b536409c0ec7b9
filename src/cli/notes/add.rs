//! Note add command.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use dialoguer::Password;
use tracing::info;

use crate::cli::{context, output};
use crate::core::domain::{NewAttachment, NewNote};
use crate::error::{Result, StoreError};

/// Arguments collected from `note add`.
pub struct AddArgs {
    pub title: String,
    pub content: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub encrypt: bool,
    pub attachments: Vec<PathBuf>,
}

/// Add a secure note.
pub fn execute(args: AddArgs) -> Result<()> {
    info!("Adding secure note: {}", args.title);
    let mut manager = context::open()?;

    let content = match args.content {
        Some(content) => content,
        None => read_content(args.encrypt)?,
    };

    let mut note = NewNote::new(args.title, content)
        .category(args.category)
        .encrypted(args.encrypt);
    for tag in args.tags {
        note = note.tag(tag);
    }
    for path in args.attachments {
        note = note.attach(read_attachment(&path)?);
    }

    let added = manager.add_secure_note(note)?;
    output::success(&format!("added note {}", output::id(added.id())));
    if added.is_encrypted() {
        output::dimmed("body encrypted");
    }
    Ok(())
}

/// Read the body from a pipe, or prompt for it.
fn read_content(hidden: bool) -> Result<String> {
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        return Ok(input.trim_end().to_string());
    }

    if hidden {
        Ok(Password::new().with_prompt("Note body").interact()?)
    } else {
        Ok(dialoguer::Input::<String>::new()
            .with_prompt("Note body")
            .allow_empty(true)
            .interact_text()?)
    }
}

fn read_attachment(path: &Path) -> Result<NewAttachment> {
    let data = fs::read(path).map_err(|e| StoreError::ReadFailed(path.display().to_string(), e))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(NewAttachment {
        kind: media_type(&name).to_string(),
        name,
        data,
    })
}

/// Media type guessed from the file extension.
fn media_type(name: &str) -> &'static str {
    let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type() {
        assert_eq!(media_type("scan.PDF"), "application/pdf");
        assert_eq!(media_type("photo.jpeg"), "image/jpeg");
        assert_eq!(media_type("key"), "application/octet-stream");
    }
}
