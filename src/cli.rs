use clap::Parser;
use std::path::PathBuf;

/// Convert a QuickTime .mov file to .mp4 (H.264 + AAC) with ffmpeg.
///
/// With an INPUT the conversion runs in the terminal; without one a window opens.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Source .mov file; omit to open the converter window
    pub input: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_input() {
        let args = Args::try_parse_from(["movmp4", "-v", "clip.mov"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("clip.mov")));
        assert!(args.verbose);
        assert!(!args.json);
    }

    #[test]
    fn test_no_input_means_window() {
        let args = Args::try_parse_from(["movmp4", "--config", "alt.toml"]).unwrap();
        assert!(args.input.is_none());
        assert_eq!(args.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn test_rejects_second_positional() {
        assert!(Args::try_parse_from(["movmp4", "a.mov", "b.mov"]).is_err());
    }
}
