//! # 路径命名模块
//!
//! 编号图片路径：`<numbers_dir><number>.png`，目录前缀与编号直接拼接（不自动补分隔符）。
//!
//! 输出路径：`<源图目录>/<源图文件名去掉最后一个扩展名>-<三位补零编号>.png`，
//! 例如 `photo.jpg` + 5 → `photo-005.png`，与源图位于同一目录。
//! 以 `.` 开头且不含其他 `.` 的文件名（如 `.shot`）整体视为主名。

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::config::{
    NUMBER_FILE_EXTENSION, OUTPUT_EXTENSION, OUTPUT_NUMBER_SEPARATOR, OUTPUT_NUMBER_WIDTH,
};

/// 拼接编号图片路径。
pub fn number_image_path(numbers_dir: &str, number: u32) -> PathBuf {
    PathBuf::from(format!("{}{}{}", numbers_dir, number, NUMBER_FILE_EXTENSION))
}

/// 由源图路径与编号推导输出路径。
///
/// 文件名按 `OsStr` 处理，非 UTF-8 文件名原样保留。
pub fn output_path_for(source_path: &Path, number: u32) -> PathBuf {
    // 仅去掉最后一个扩展名：`a.tar.gz` -> `a.tar`
    let mut output_name = source_path
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();

    output_name.push(format!(
        "{}{:0width$}{}",
        OUTPUT_NUMBER_SEPARATOR,
        number,
        OUTPUT_EXTENSION,
        width = OUTPUT_NUMBER_WIDTH
    ));

    match source_path.parent() {
        Some(parent) => parent.join(output_name),
        None => PathBuf::from(output_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn output_name_is_zero_padded_to_three_digits() {
        assert_eq!(output_path_for(Path::new("photo.jpg"), 5), PathBuf::from("photo-005.png"));
        assert_eq!(output_path_for(Path::new("photo.jpg"), 40), PathBuf::from("photo-040.png"));
        assert_eq!(output_path_for(Path::new("photo.jpg"), 12), PathBuf::from("photo-012.png"));
    }

    #[test]
    fn output_stays_in_source_directory() {
        let output = output_path_for(Path::new("shots/step/photo.jpeg"), 7);
        assert_eq!(output, Path::new("shots/step").join("photo-007.png"));
    }

    #[test]
    fn only_last_extension_is_stripped() {
        assert_eq!(
            output_path_for(Path::new("archive.tar.gz"), 3),
            PathBuf::from("archive.tar-003.png")
        );
        assert_eq!(output_path_for(Path::new("noext"), 3), PathBuf::from("noext-003.png"));
    }

    #[test]
    fn dotfile_without_extension_keeps_its_name() {
        assert_eq!(output_path_for(Path::new(".shot"), 2), PathBuf::from(".shot-002.png"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_name_round_trips() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let source = Path::new("shots").join(OsStr::from_bytes(b"caf\xe9.jpg"));
        let output = output_path_for(&source, 9);

        assert_eq!(output.parent(), Some(Path::new("shots")));
        assert_eq!(
            output.file_name().expect("file name").as_bytes(),
            b"caf\xe9-009.png"
        );
    }

    #[test]
    fn number_path_is_plain_concatenation() {
        assert_eq!(number_image_path("", 7), PathBuf::from("7.png"));
        assert_eq!(number_image_path("glyphs/", 12), PathBuf::from("glyphs/12.png"));
        assert_eq!(number_image_path("glyphs/n", 3), PathBuf::from("glyphs/n3.png"));
    }

    proptest! {
        #[test]
        fn suffix_is_always_three_digits(number in 1u32..=40) {
            let output = output_path_for(Path::new("dir/image.jpg"), number);
            let name = output.file_name().unwrap().to_string_lossy().into_owned();
            let expected = format!("image-{:03}.png", number);
            prop_assert_eq!(name.len(), "image-000.png".len());
            prop_assert_eq!(name, expected);
        }
    }
}
