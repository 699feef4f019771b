//! # 坐标计算与合成流水线模块
//!
//! ## 设计思路
//!
//! 粘贴坐标以源图右上角为基准：`x = (源宽 - 编号宽) - 右偏移`，`y = 顶偏移`。
//! 坐标可能为负或让编号图片部分 / 全部落在画布外，这里统一按“裁剪”处理：
//! 只绘制编号图片与画布的交集，不报错、不回绕。
//!
//! ## 实现思路
//!
//! 1. 按源图位深复制为 RGBA8 / RGBA16 画布（源图本身不被修改）
//! 2. 用 `imageops::overlay` 以编号图片的 alpha 通道为蒙版合成，越界部分由其裁剪
//! 3. `visible_region` 只用于计算实际绘制区域与裁剪告警
//! 4. 还原为源图的颜色类型（L8 仍为 L8，Rgb16 仍为 Rgb16）；
//!    PNG 不支持浮点，32 位浮点源图写为同通道的 16 位

use image::{DynamicImage, imageops};

use super::source::{Anchor, LoadedImage, Region};
use super::{OverlayCompositor, OverlayConfig};

/// 计算编号图片左上角的粘贴坐标。
///
/// 使用 `i64` 计算，任意 `u32` 尺寸与 `i32` 偏移组合都不会溢出。
pub fn compute_anchor(
    source_width: u32,
    number_width: u32,
    height_offset: i32,
    width_offset: i32,
) -> Anchor {
    let x = (source_width as i64 - number_width as i64) - width_offset as i64;
    Anchor {
        x,
        y: height_offset as i64,
    }
}

/// 编号图片落在画布内的可见区域（画布坐标）。
pub fn visible_region(canvas: (u32, u32), overlay: (u32, u32), anchor: Anchor) -> Region {
    let left = anchor.x.max(0);
    let top = anchor.y.max(0);
    let right = (anchor.x + overlay.0 as i64).min(canvas.0 as i64);
    let bottom = (anchor.y + overlay.1 as i64).min(canvas.1 as i64);

    if right <= left || bottom <= top {
        return Region {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        };
    }

    Region {
        x: left as u32,
        y: top as u32,
        width: (right - left) as u32,
        height: (bottom - top) as u32,
    }
}

/// 在源图位深对应的 RGBA 画布上合成编号图片。
fn paste(source: &DynamicImage, number: &DynamicImage, anchor: Anchor) -> DynamicImage {
    let color = source.color();
    if color.bytes_per_pixel() == color.channel_count() {
        let mut canvas = source.to_rgba8();
        imageops::overlay(&mut canvas, &number.to_rgba8(), anchor.x, anchor.y);
        DynamicImage::ImageRgba8(canvas)
    } else {
        let mut canvas = source.to_rgba16();
        imageops::overlay(&mut canvas, &number.to_rgba16(), anchor.x, anchor.y);
        DynamicImage::ImageRgba16(canvas)
    }
}

/// 把合成画布还原为源图的颜色类型。
fn restore_color(canvas: DynamicImage, source: &DynamicImage) -> DynamicImage {
    match source {
        DynamicImage::ImageLuma8(_) => DynamicImage::ImageLuma8(canvas.to_luma8()),
        DynamicImage::ImageLumaA8(_) => DynamicImage::ImageLumaA8(canvas.to_luma_alpha8()),
        DynamicImage::ImageRgb8(_) => DynamicImage::ImageRgb8(canvas.to_rgb8()),
        DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma16(canvas.to_luma16()),
        DynamicImage::ImageLumaA16(_) => DynamicImage::ImageLumaA16(canvas.to_luma_alpha16()),
        DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgb32F(_) => {
            DynamicImage::ImageRgb16(canvas.to_rgb16())
        }
        _ => canvas,
    }
}

impl OverlayCompositor {
    /// 复制源图并把编号图片合成上去。
    pub(super) fn compose(
        &self,
        source: &LoadedImage,
        number: &LoadedImage,
        anchor: Anchor,
        config: &OverlayConfig,
    ) -> (DynamicImage, Region) {
        self.trace(config, "duplicating source image");
        self.trace(config, "compositing number image");
        let canvas = paste(&source.image, &number.image, anchor);
        self.trace(config, "number composited onto image");

        let painted = visible_region(
            (source.width(), source.height()),
            (number.width(), number.height()),
            anchor,
        );
        let fully_visible = painted.width == number.width() && painted.height == number.height();
        if !fully_visible {
            log::warn!(
                "⚠️ 编号图片超出画布范围，已裁剪 - 坐标: {} 编号尺寸: {}x{} 可见区域: {}x{}",
                anchor,
                number.width(),
                number.height(),
                painted.width,
                painted.height
            );
        }

        (restore_color(canvas, &source.image), painted)
    }
}
