//! # 编号叠加模块（overlay）
//!
//! ## 设计思路
//!
//! 该模块将“输入校验 → 加载解码 → 坐标计算 → alpha 合成 → PNG 写出”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线
//! - `loader`：存在性校验、文件读取、尺寸检查与解码
//! - `naming`：编号图片路径与输出文件名推导
//! - `pipeline`：粘贴坐标、可见区域与 `imageops::overlay` 合成
//! - `writer`：PNG 编码与写盘
//! - `trace`：可注入的诊断输出
//! - `config/error/source`：配置、错误、输入与中间数据模型
//!
//! ## 新同事快速上手
//!
//! 可以按下面顺序理解调用链：
//!
//! ```text
//! main.rs（命令行解析 + 日志初始化）
//!    ↓
//! add_number_to_image()
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（存在性校验 + 读取解码）
//!    ├─ naming.rs（输出路径）
//!    ├─ pipeline.rs（坐标 + 合成）
//!    └─ writer.rs（写出 PNG）
//!    ↓
//! Result<OverlayOutcome, OverlayError>
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod naming;
mod pipeline;
mod source;
mod trace;
mod writer;

pub use config::{
    DEFAULT_HEIGHT_OFFSET, DEFAULT_WIDTH_OFFSET, MAX_IMAGE_NUMBER, MIN_IMAGE_NUMBER,
    NUMBER_FILE_EXTENSION, OUTPUT_EXTENSION, OUTPUT_NUMBER_SEPARATOR, OUTPUT_NUMBER_WIDTH,
    OverlayConfig, number_range, validate_number,
};
pub use error::{OverlayError, OverlayErrorKind};
pub use handler::OverlayCompositor;
pub use naming::{number_image_path, output_path_for};
pub use pipeline::{compute_anchor, visible_region};
pub use source::{Anchor, OverlayOutcome, OverlayRequest, Region};
pub use trace::{LogTraceSink, TraceSink};

/// 使用默认诊断输出执行一次编号叠加。
pub fn add_number_to_image(
    request: &OverlayRequest,
    config: OverlayConfig,
) -> Result<OverlayOutcome, OverlayError> {
    OverlayCompositor::new(config).overlay(request)
}
