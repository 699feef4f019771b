//! # 输入与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入”和“流水线中间结果”解耦：
//! - `OverlayRequest` 表示一次叠加的全部显式输入
//! - `LoadedImage` 表示已解码的栅格图像及其来源
//! - `Anchor` / `Region` 表示粘贴坐标与实际可见区域
//! - `OverlayOutcome` 表示成功结果

use std::path::PathBuf;

use image::DynamicImage;

use super::config::{DEFAULT_HEIGHT_OFFSET, DEFAULT_WIDTH_OFFSET};

/// 一次编号叠加的输入参数。
#[derive(Debug, Clone)]
pub struct OverlayRequest {
    /// 源图片路径。
    pub source_path: PathBuf,
    /// 要叠加的编号（1~40）。
    pub number: u32,
    /// 编号图片所在目录前缀，直接与编号字符串拼接；空串表示当前目录。
    pub numbers_dir: String,
    /// 距顶部偏移（像素）。
    pub height_offset: i32,
    /// 距右侧偏移（像素）。
    pub width_offset: i32,
}

impl OverlayRequest {
    /// 使用默认偏移与当前目录创建请求。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use addnumber::overlay::OverlayRequest;
    ///
    /// let request = OverlayRequest::new("photo.jpg", 5)
    ///     .with_numbers_dir("glyphs/")
    ///     .with_offsets(10, 20);
    /// ```
    pub fn new(source_path: impl Into<PathBuf>, number: u32) -> Self {
        Self {
            source_path: source_path.into(),
            number,
            numbers_dir: String::new(),
            height_offset: DEFAULT_HEIGHT_OFFSET,
            width_offset: DEFAULT_WIDTH_OFFSET,
        }
    }

    pub fn with_numbers_dir(mut self, numbers_dir: impl Into<String>) -> Self {
        self.numbers_dir = numbers_dir.into();
        self
    }

    /// 设置偏移，参数顺序为（距顶部，距右侧）。
    pub fn with_offsets(mut self, height_offset: i32, width_offset: i32) -> Self {
        self.height_offset = height_offset;
        self.width_offset = width_offset;
        self
    }
}

/// 加载阶段输出：解码后的图像与来源路径。
pub(crate) struct LoadedImage {
    pub(crate) image: DynamicImage,
    pub(crate) path: PathBuf,
}

impl LoadedImage {
    pub(crate) fn width(&self) -> u32 {
        self.image.width()
    }

    pub(crate) fn height(&self) -> u32 {
        self.image.height()
    }
}

/// 编号图片左上角在输出画布上的坐标，可以为负或超出画布。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: i64,
    pub y: i64,
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 画布上的矩形区域（像素坐标）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// 叠加成功的结果。
#[derive(Debug, Clone)]
pub struct OverlayOutcome {
    /// 写出的输出文件路径。
    pub output_path: PathBuf,
    /// 实际使用的粘贴坐标。
    pub anchor: Anchor,
    /// 编号图片在画布内实际绘制的区域（已裁剪，可能为空）。
    pub painted: Region,
    /// 输出图像尺寸，恒等于源图尺寸。
    pub dimensions: (u32, u32),
}

impl OverlayOutcome {
    /// 面向用户的确认消息。
    pub fn message(&self) -> String {
        format!("{} created", self.output_path.display())
    }
}
