use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use juno::{cli, config, error, types::PkceToken, ui};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Subcommand; without one the interactive browser starts
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Generate a playlist from a genre and tuning input
    Generate(GenerateOptions),

    /// List your playlists
    Playlists,

    /// List the tracks of a playlist
    Tracks(TracksOptions),

    /// Play a track on YouTube in the default browser
    Play(PlayOptions),

    /// Launch the interactive browser
    Ui,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    /// Genre tag to search tracks for
    #[clap(long)]
    pub genre: String,

    /// Mood between 0 and 1; invalid input falls back to 0.5
    #[clap(long)]
    pub mood: Option<String>,

    /// Energy between 0 and 1; invalid input falls back to 0.5
    #[clap(long)]
    pub energy: Option<String>,

    /// Name of the playlist to create
    #[clap(long)]
    pub name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Playlist id as shown by the Spotify API
    pub playlist_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// Play the first track found for this genre
    #[clap(long)]
    pub genre: Option<String>,

    /// Play a specific track by id
    #[clap(long)]
    pub track: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    // the three credentials are required before any surface comes up
    if let Err(var) = config::ensure_credentials() {
        error!(
            "Missing required environment variable: {}\nSee the .env.example next to your juno data directory.",
            var
        );
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Auth) => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }

        Some(Command::Generate(opt)) => {
            cli::generate(opt.genre, opt.mood, opt.energy, opt.name).await
        }

        Some(Command::Playlists) => cli::playlists().await,

        Some(Command::Tracks(opt)) => cli::tracks(opt.playlist_id).await,

        Some(Command::Play(opt)) => cli::play(opt.genre, opt.track).await,

        Some(Command::Completions(opt)) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }

        Some(Command::Ui) | None => {
            if let Err(e) = ui::run() {
                error!("Interface error: {}", e);
            }
        }
    }
}
