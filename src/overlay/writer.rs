//! # 输出写入模块
//!
//! 输出文件固定编码为 PNG。先在内存中完成编码，成功后才一次性写盘；
//! 编码失败时不会创建或截断输出文件，已有的同名输出保持原样。

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use super::{OverlayCompositor, OverlayConfig, OverlayError};

impl OverlayCompositor {
    /// 将合成结果以 PNG 写入 `path`。
    pub(super) fn write_output(
        &self,
        image: &DynamicImage,
        path: &Path,
        config: &OverlayConfig,
    ) -> Result<(), OverlayError> {
        self.trace(config, &format!("saving {}", path.display()));

        let bytes = Self::encode_png(image).map_err(|e| {
            OverlayError::Write(format!("PNG 编码失败 {}：{}", path.display(), e))
        })?;

        std::fs::write(path, &bytes).map_err(|e| {
            OverlayError::Write(format!("保存图片失败 {}：{}", path.display(), e))
        })?;

        self.trace(config, "new image saved");
        Ok(())
    }

    fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }
}
