//! 命令行参数模块
//!
//! # 设计思路
//!
//! 参数解析只负责把命令行输入转换为 `OverlayRequest` 与 `OverlayConfig`，
//! 不包含任何业务逻辑。编号范围在这一层由 clap 直接拒绝。

use std::path::PathBuf;

use clap::Parser;

use crate::overlay::{
    DEFAULT_HEIGHT_OFFSET, DEFAULT_WIDTH_OFFSET, MAX_IMAGE_NUMBER, MIN_IMAGE_NUMBER, OverlayConfig,
    OverlayRequest,
};

/// Image Numbering Program
#[derive(Parser, Debug)]
#[command(name = "addnumber", version, about = "Image Numbering Program")]
pub struct Cli {
    /// name of file to be numbered
    pub imagefile: PathBuf,

    /// number to add to the image
    #[arg(
        short = 'n',
        long = "number",
        value_parser = clap::value_parser!(u32).range(MIN_IMAGE_NUMBER as i64..=MAX_IMAGE_NUMBER as i64)
    )]
    pub number: u32,

    /// number of pixels from the top to offset the number
    #[arg(
        short = 'y',
        long = "heightoffset",
        default_value_t = DEFAULT_HEIGHT_OFFSET,
        allow_negative_numbers = true
    )]
    pub height_offset: i32,

    /// number of pixels from the right to offset the number
    #[arg(
        short = 'x',
        long = "widthoffset",
        default_value_t = DEFAULT_WIDTH_OFFSET,
        allow_negative_numbers = true
    )]
    pub width_offset: i32,

    /// if specified, display debugging messages
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// if specified, do not display normal messages
    #[arg(short = 's', long = "silent")]
    pub silent: bool,

    /// path to the number image files; defaults to current directory
    #[arg(short = 'p', long = "path", default_value = "")]
    pub numbers_path: String,
}

impl Cli {
    pub fn overlay_request(&self) -> OverlayRequest {
        OverlayRequest::new(&self.imagefile, self.number)
            .with_numbers_dir(self.numbers_path.clone())
            .with_offsets(self.height_offset, self.width_offset)
    }

    pub fn overlay_config(&self) -> OverlayConfig {
        OverlayConfig {
            verbose: self.debug,
            ..OverlayConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_required_args_given() {
        let cli = Cli::try_parse_from(["addnumber", "photo.jpg", "-n", "5"]).expect("parse");
        assert_eq!(cli.imagefile, PathBuf::from("photo.jpg"));
        assert_eq!(cli.number, 5);
        assert_eq!(cli.height_offset, 35);
        assert_eq!(cli.width_offset, 35);
        assert!(!cli.debug);
        assert!(!cli.silent);
        assert_eq!(cli.numbers_path, "");

        let request = cli.overlay_request();
        assert_eq!(request.numbers_dir, "");
        assert!(!cli.overlay_config().verbose);
    }

    #[test]
    fn all_flags_are_recognised() {
        let cli = Cli::try_parse_from([
            "addnumber",
            "photo.jpg",
            "--number",
            "40",
            "-y",
            "10",
            "-x",
            "-5",
            "-d",
            "-s",
            "-p",
            "glyphs/",
        ])
        .expect("parse");

        let request = cli.overlay_request();
        assert_eq!(request.number, 40);
        assert_eq!(request.height_offset, 10);
        assert_eq!(request.width_offset, -5);
        assert_eq!(request.numbers_dir, "glyphs/");
        assert!(cli.silent);
        assert!(cli.overlay_config().verbose);
    }

    #[test]
    fn number_outside_range_is_rejected() {
        assert!(Cli::try_parse_from(["addnumber", "photo.jpg", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["addnumber", "photo.jpg", "-n", "41"]).is_err());
        assert!(Cli::try_parse_from(["addnumber", "photo.jpg"]).is_err());
    }
}
