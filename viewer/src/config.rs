use clap::Parser;
use macroquad::window::Conf;

const WINDOW_TITLE: &str = "Larger than Life";

/// Command line options for the viewer window.
#[derive(Debug, Clone, Parser)]
#[command(name = "ltl-viewer", about = "Interactive Larger than Life viewer", version)]
pub struct Args {
    /// Side of the square window, in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u16).range(300..))]
    pub window_size: u16,

    /// Initial frames (and generations) per second
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub fps: u32,

    /// Side of randomly generated boards; defaults to the window size
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub board_size: Option<u16>,

    #[arg(long)]
    pub fullscreen: bool,
}

impl Args {
    pub fn board_size(&self) -> usize {
        usize::from(self.board_size.unwrap_or(self.window_size))
    }

    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: WINDOW_TITLE.to_owned(),
            window_width: self.window_size as i32,
            window_height: self.window_size as i32,
            high_dpi: false,
            fullscreen: self.fullscreen,
            window_resizable: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ltl-viewer"]).unwrap();
        assert_eq!(args.window_size, 600);
        assert_eq!(args.fps, 1);
        assert_eq!(args.board_size(), 600);

        let conf = args.window_conf();
        assert_eq!(conf.window_width, 600);
        assert_eq!(conf.window_title, "Larger than Life");
    }

    #[test]
    fn test_board_size_override() {
        let args = Args::try_parse_from(["ltl-viewer", "--board-size", "120", "--fps", "12"]).unwrap();
        assert_eq!(args.board_size(), 120);
        assert_eq!(args.fps, 12);
    }

    #[test]
    fn test_board_size_bounds() {
        assert!(Args::try_parse_from(["ltl-viewer", "--board-size", "0"]).is_err());
        assert!(Args::try_parse_from(["ltl-viewer", "--board-size", "65536"]).is_err());
        let args = Args::try_parse_from(["ltl-viewer", "--board-size", "65535"]).unwrap();
        assert_eq!(args.board_size(), 65535);
    }

    #[test]
    fn test_fps_out_of_range_rejected() {
        assert!(Args::try_parse_from(["ltl-viewer", "--fps", "0"]).is_err());
        assert!(Args::try_parse_from(["ltl-viewer", "--fps", "61"]).is_err());
    }
}
