use clap::Parser;
use std::path::PathBuf;

/// Lyrics Overlay - a floating lyrics pager for your terminal 🎤
#[derive(Parser, Debug)]
#[command(name = "lyrics-overlay", version, about)]
pub struct Args {
    /// Lyric file (songs separated by two or more blank lines).
    /// Defaults to a `.txt` file found next to the executable.
    pub path: Option<PathBuf>,

    /// Lines shown per page
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u16).range(1..))]
    pub lines: Option<u16>,

    /// Initial text scale (8-48)
    #[arg(long, short = 'f', value_parser = clap::value_parser!(u16).range(8..=48))]
    pub font_size: Option<u16>,

    /// Write logs here instead of the cache directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_path_and_flags() {
        let args = Args::try_parse_from(["lyrics-overlay", "songs.txt", "-n", "6", "--font-size", "20"])
            .unwrap();
        assert_eq!(args.path, Some(PathBuf::from("songs.txt")));
        assert_eq!(args.lines, Some(6));
        assert_eq!(args.font_size, Some(20));
        assert!(!args.generate_config);
    }

    #[test]
    fn test_rejects_zero_lines_and_huge_font() {
        assert!(Args::try_parse_from(["lyrics-overlay", "--lines", "0"]).is_err());
        assert!(Args::try_parse_from(["lyrics-overlay", "--font-size", "49"]).is_err());
    }
}
