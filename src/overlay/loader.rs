//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验：源图与编号图片的存在性检查都发生在任何解码之前，
//! 校验失败时不会产生任何磁盘写入。
//!
//! ## 实现思路
//!
//! - 存在性：`Path::exists`，分别映射为 `SourceNotFound` / `OverlayNotFound`。
//! - 读取：`std::fs::read` 一次性读入字节，文件句柄在返回前即释放（无论后续成功与否）。
//! - 尺寸：先读文件头尺寸并按像素上限快速拒绝，再完整解码。

use std::io::Cursor;
use std::path::Path;

use super::source::LoadedImage;
use super::{OverlayCompositor, OverlayConfig, OverlayError};

impl OverlayCompositor {
    /// 确认源图存在。
    pub(super) fn ensure_source_exists(path: &Path) -> Result<(), OverlayError> {
        if !path.exists() {
            return Err(OverlayError::SourceNotFound(format!(
                "source file {} does not exist",
                path.display()
            )));
        }
        Ok(())
    }

    /// 确认编号图片存在。
    pub(super) fn ensure_number_image_exists(path: &Path) -> Result<(), OverlayError> {
        if !path.exists() {
            return Err(OverlayError::OverlayNotFound(format!(
                "number file {} does not exist",
                path.display()
            )));
        }
        Ok(())
    }

    /// 读取并解码图片文件。
    pub(super) fn load_image(
        &self,
        path: &Path,
        config: &OverlayConfig,
    ) -> Result<LoadedImage, OverlayError> {
        self.trace(config, &format!("opening file: {}", path.display()));

        let bytes = std::fs::read(path).map_err(|e| {
            OverlayError::Decode(format!("无法读取图片文件 {}：{}", path.display(), e))
        })?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let image = image::load_from_memory(&bytes).map_err(|e| {
            OverlayError::Decode(format!("图片解码失败 {}：{}", path.display(), e))
        })?;

        Ok(LoadedImage {
            image,
            path: path.to_path_buf(),
        })
    }

    /// 仅通过内存中的图片头信息读取宽高。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), OverlayError> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| OverlayError::Decode(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| OverlayError::Decode(format!("无法读取图片尺寸：{}", e)))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(
        config: &OverlayConfig,
        width: u32,
        height: u32,
    ) -> Result<(), OverlayError> {
        let pixels = (width as u64) * (height as u64);

        if pixels > config.max_decoded_pixels {
            return Err(OverlayError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}
