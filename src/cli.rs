//! CLI definitions for badapple
//!
//! The clap structure lives in the library so xtask can render man pages and
//! the flag reference from the same definition the binary parses.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use clap_complete::Shell as CompletionShell;

/// Build clap styles for help output.
///
/// - Green: headers, usage, flag names
/// - White: placeholders and valid values (light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug, Default)]
#[command(name = "badapple")]
#[command(about = "[ badapple ] - play Bad Apple!! as ASCII art in your terminal")]
#[command(
    long_about = "badapple - play an embedded ASCII-art video in the terminal.

The frames and the audio clip are compiled into the binary. Audio is played
through an external system player (afplay on macOS, aplay on Linux).

EXAMPLES:
    badapple                       Play the video once at 30 fps
    badapple --audio               Play the video with sound
    badapple --repeat              Loop until interrupted (Ctrl+C)
    badapple --times 3 --fps 24    Play three times at 24 fps
    badapple --audio-only          Only play the sound

CONFIGURATION:
    Defaults can be set in ~/.config/badapple/config.toml.
    Command-line flags always win over the config file."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Play audio along with the video
    #[arg(long)]
    pub audio: bool,

    /// Play audio only (no video)
    #[arg(long = "audio-only")]
    pub audio_only: bool,

    /// Loop until interrupted
    #[arg(long)]
    pub repeat: bool,

    /// Number of times to play (ignored with --repeat, values below 1 play once)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub times: Option<i64>,

    /// Frames per second for the video [default: 30]
    #[arg(long, value_name = "FPS", allow_negative_numbers = true)]
    pub fps: Option<f64>,

    /// Audio player command to invoke with the clip path
    #[arg(long, value_name = "CMD")]
    pub player: Option<String>,

    /// Read frames from a gzip file instead of the embedded ones
    #[arg(long, value_name = "FILE")]
    pub frames: Option<PathBuf>,

    /// Play this WAV file instead of the embedded clip
    #[arg(long = "audio-file", value_name = "FILE")]
    pub audio_file: Option<PathBuf>,

    /// Config file to use instead of ~/.config/badapple/config.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL", hide = true)]
    pub completions: Option<CompletionShell>,
}
