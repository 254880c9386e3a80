//! termchan - browse imageboard-style forums from the terminal
//!
//! A thin command-line front end over the forum API client: each subcommand
//! maps to one API operation and prints a plain-text rendering of the result.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use termchan::api::ForumClient;
use termchan::cli::{Cli, ForumCommand};
use termchan::data::{NewPost, NewThread};

/// Installs the log subscriber. RUST_LOG wins; otherwise --verbose turns on
/// debug logs for the crate.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "termchan=debug" } else { "termchan=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let mut client = ForumClient::new(args.client_config());

    match &args.command {
        ForumCommand::Boards => {
            let boards = client.boards().await?;
            if boards.is_empty() {
                println!("no boards yet");
            }
            for board in boards {
                println!("/{}/", board.name);
            }
        }
        ForumCommand::Threads { board } => {
            let threads = client.threads(board).await?;
            if threads.is_empty() {
                println!("no threads on /{}/ yet", board);
            }
            for thread in threads {
                println!("#{:<6} {}  ({})", thread.id, thread.title, thread.created_at);
            }
        }
        ForumCommand::Thread { board, thread_id } => {
            let thread = client.thread(board, *thread_id).await?;
            println!("#{} {}  ({})", thread.id, thread.title, thread.created_at);
            for post in &thread.posts {
                println!("  [{}] {}", post.id, post.content);
            }
        }
        ForumCommand::NewBoard { name } => {
            let created = client.create_board(name).await?;
            println!("created board /{}/ (id {})", name, created.id);
        }
        ForumCommand::NewThread {
            board,
            title,
            message,
        } => {
            let thread = NewThread {
                title: title.clone(),
                message: message.clone(),
            };
            let created = client.create_thread(board, &thread).await?;
            println!("created thread #{} on /{}/", created.id, board);
        }
        ForumCommand::Post {
            board,
            thread_id,
            content,
        } => {
            let post = NewPost {
                content: content.clone(),
            };
            let created = client.create_post(board, *thread_id, &post).await?;
            println!("posted #{} to thread #{}", created.id, thread_id);
        }
        ForumCommand::Time => {
            let time = client.server_time().await?;
            match time.parse() {
                Some(parsed) => println!("server time: {}", parsed),
                None => println!("server time: {}", time.time),
            }
        }
    }

    Ok(())
}
