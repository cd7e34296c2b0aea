//! Wiki commands.

use std::io::Write;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use bkl_wiki::WikiClient;

use crate::config::ClientArgs;
use crate::error::CliError;
use crate::output::{write_json_line, write_line};

/// Backlog wiki utilities
#[derive(Debug, Parser)]
pub struct WikiCommand {
    #[command(subcommand)]
    pub action: WikiAction,
}

#[derive(Debug, Subcommand)]
pub enum WikiAction {
    /// List wiki pages with optional pattern
    List(PageSelection),

    /// Rename wiki page
    Rename {
        #[command(flatten)]
        target: PageId,
        #[command(flatten)]
        rename: RenameArgs,
    },

    /// Replace strings in the content of wiki page
    Replace {
        #[command(flatten)]
        target: PageId,
        #[command(flatten)]
        pairs: PairArgs,
    },

    /// List wiki pages and rename them with optional pattern
    RenameAll {
        #[command(flatten)]
        selection: PageSelection,
        #[command(flatten)]
        rename: RenameArgs,
    },

    /// List wiki pages and replace strings in the content with optional pattern
    ReplaceAll {
        #[command(flatten)]
        selection: PageSelection,
        #[command(flatten)]
        pairs: PairArgs,
    },
}

/// Pages of a project, optionally filtered by name.
#[derive(Debug, Clone, Args)]
pub struct PageSelection {
    /// Set backlog project key
    #[arg(long)]
    pub project_key: String,

    /// Set pattern (regular expression) to search for wiki pages
    #[arg(long)]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct PageId {
    /// Set backlog wiki id
    #[arg(long)]
    pub wiki_id: i64,
}

#[derive(Debug, Clone, Args)]
pub struct RenameArgs {
    /// Set string to be replaced in wiki page name
    #[arg(long)]
    pub old: String,

    /// Set new string after replacement in wiki page name
    #[arg(long)]
    pub new: String,
}

#[derive(Debug, Clone, Args)]
pub struct PairArgs {
    /// Set pairs of old and new replacements for wiki page content (old,new,...)
    #[arg(long, required = true, value_delimiter = ',')]
    pub pairs: Vec<String>,
}

impl WikiCommand {
    pub async fn execute<W: Write>(&self, client: &ClientArgs, out: &mut W) -> Result<(), CliError> {
        let client = client.wiki_client()?;

        info!("started");
        self.action.run(&client, out).await?;
        info!("stopped");

        Ok(())
    }
}

impl WikiAction {
    async fn run<W: Write>(&self, client: &WikiClient, out: &mut W) -> Result<(), CliError> {
        match self {
            Self::List(selection) => {
                let pages = client
                    .list(&selection.project_key, selection.pattern.as_deref())
                    .await?;
                for page in &pages {
                    write_json_line(out, page)?;
                }
            }
            Self::Rename { target, rename } => {
                let page = client.get(target.wiki_id).await?;
                let renamed = client.rename(&page, &rename.old, &rename.new).await?;
                write_line(out, &renamed)?;
            }
            Self::Replace { target, pairs } => {
                let page = client.get(target.wiki_id).await?;
                let replaced = client.replace(&page, pairs.pairs.as_slice()).await?;
                write_line(out, &replaced)?;
            }
            Self::RenameAll { selection, rename } => {
                let pages = client
                    .list(&selection.project_key, selection.pattern.as_deref())
                    .await?;
                for page in &pages {
                    let renamed = client.rename(page, &rename.old, &rename.new).await?;
                    write_line(out, &renamed)?;
                }
            }
            Self::ReplaceAll { selection, pairs } => {
                let pages = client
                    .list(&selection.project_key, selection.pattern.as_deref())
                    .await?;
                for page in &pages {
                    // Listing omits content.
                    let detail = client.get(page.id).await?;
                    let replaced = client.replace(&detail, pairs.pairs.as_slice()).await?;
                    write_line(out, &replaced)?;
                }
            }
        }

        Ok(())
    }
}
