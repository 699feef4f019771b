//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调参数”集中到 `OverlayConfig`，由调用方显式构造后传入编排器，
//! 而不是读取进程级全局开关（调试 / 静默）。这样单次叠加只依赖显式输入，便于测试。
//!
//! ## 实现思路
//!
//! - 常量对应编号图片与输出文件的命名约定。
//! - `Default` 关闭诊断输出，并给出解码像素上限。
//! - `validate_number` 在拼接文件路径之前做编号范围校验。

use std::ops::RangeInclusive;

use super::OverlayError;

/// 可叠加的最小编号。
pub const MIN_IMAGE_NUMBER: u32 = 1;
/// 可叠加的最大编号。
pub const MAX_IMAGE_NUMBER: u32 = 40;

/// 距顶部的默认偏移（像素）。
pub const DEFAULT_HEIGHT_OFFSET: i32 = 35;
/// 距右侧的默认偏移（像素）。
pub const DEFAULT_WIDTH_OFFSET: i32 = 35;

/// 编号图片文件后缀。
pub const NUMBER_FILE_EXTENSION: &str = ".png";
/// 输出文件后缀，输出格式固定为 PNG。
pub const OUTPUT_EXTENSION: &str = ".png";
/// 输出文件名中基础名与编号之间的分隔符（例如 `foo-025`）。
pub const OUTPUT_NUMBER_SEPARATOR: char = '-';
/// 输出文件名中编号补零后的宽度。
pub const OUTPUT_NUMBER_WIDTH: usize = 3;

/// 编号合法区间。
pub fn number_range() -> RangeInclusive<u32> {
    MIN_IMAGE_NUMBER..=MAX_IMAGE_NUMBER
}

/// 编排器配置。
///
/// 叠加参数本身（源图、编号、偏移）见 `OverlayRequest`，这里只放运行时开关与资源上限。
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// 是否输出逐步诊断信息。
    pub verbose: bool,
    /// 解码后的像素上限（`width * height`），在完整解码前按文件头尺寸检查。
    pub max_decoded_pixels: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            max_decoded_pixels: 100_000_000,
        }
    }
}

/// 校验编号是否在 `[MIN_IMAGE_NUMBER, MAX_IMAGE_NUMBER]` 区间内。
pub fn validate_number(number: u32) -> Result<(), OverlayError> {
    if !number_range().contains(&number) {
        return Err(OverlayError::InvalidNumber(format!(
            "image number {} is out of range ({}~{})",
            number, MIN_IMAGE_NUMBER, MAX_IMAGE_NUMBER
        )));
    }
    Ok(())
}
