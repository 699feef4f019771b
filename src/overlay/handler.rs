//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `OverlayCompositor` 只负责流程编排，不直接与命令行绑定。
//! 处理链路固定为：
//! 1. 编号范围校验
//! 2. 源图 / 编号图片存在性校验（失败即返回，不做任何解码与写入）
//! 3. 推导输出路径
//! 4. 解码两张图片并计算粘贴坐标
//! 5. 复制源图并合成
//! 6. 写出 PNG
//!
//! ## 实现思路
//!
//! - 配置在构造时显式注入，单次调用内使用同一份配置快照。
//! - 诊断信息经 `TraceSink` 输出，仅在 `verbose` 打开时发出，不影响返回值。
//! - 记录 `load/compose/save/total` 阶段耗时，便于性能诊断。

use std::sync::Arc;
use std::time::Instant;

use super::naming::{number_image_path, output_path_for};
use super::pipeline::compute_anchor;
use super::trace::{LogTraceSink, TraceSink};
use super::{OverlayConfig, OverlayError, OverlayOutcome, OverlayRequest, validate_number};

/// 编号叠加编排器。
pub struct OverlayCompositor {
    config: OverlayConfig,
    sink: Arc<dyn TraceSink>,
}

impl OverlayCompositor {
    /// 使用默认诊断输出（`log::debug!`）创建编排器。
    pub fn new(config: OverlayConfig) -> Self {
        Self::with_sink(config, Arc::new(LogTraceSink))
    }

    /// 使用自定义诊断接收端创建编排器。
    pub fn with_sink(config: OverlayConfig, sink: Arc<dyn TraceSink>) -> Self {
        Self { config, sink }
    }

    /// 获取配置快照。
    fn config_snapshot(&self) -> OverlayConfig {
        self.config.clone()
    }

    pub(super) fn trace(&self, config: &OverlayConfig, message: &str) {
        if config.verbose {
            self.sink.trace(message);
        }
    }

    /// 处理主入口：把编号图片叠加到源图副本上并写出新文件。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use addnumber::overlay::{OverlayCompositor, OverlayConfig, OverlayRequest};
    ///
    /// let compositor = OverlayCompositor::new(OverlayConfig::default());
    /// let outcome = compositor.overlay(&OverlayRequest::new("photo.jpg", 5))?;
    /// println!("{}", outcome.message());
    /// # Ok::<(), addnumber::overlay::OverlayError>(())
    /// ```
    pub fn overlay(&self, request: &OverlayRequest) -> Result<OverlayOutcome, OverlayError> {
        let config = self.config_snapshot();
        let total_start = Instant::now();

        self.trace(&config, &format!("image file: {}", request.source_path.display()));
        self.trace(&config, &format!("image number: {}", request.number));
        self.trace(&config, &format!("path to number image files: {}", request.numbers_dir));
        self.trace(&config, &format!("height offset: {}", request.height_offset));
        self.trace(&config, &format!("width offset: {}", request.width_offset));

        validate_number(request.number)?;
        Self::ensure_source_exists(&request.source_path)?;

        let number_path = number_image_path(&request.numbers_dir, request.number);
        self.trace(&config, &format!("number file: {}", number_path.display()));
        Self::ensure_number_image_exists(&number_path)?;

        let output_path = output_path_for(&request.source_path, request.number);
        self.trace(&config, &format!("output file: {}", output_path.display()));

        let load_start = Instant::now();
        let source = self.load_image(&request.source_path, &config)?;
        self.trace(
            &config,
            &format!("source file size is {} x {}", source.width(), source.height()),
        );
        let number = self.load_image(&number_path, &config)?;
        self.trace(
            &config,
            &format!("number file size is {} x {}", number.width(), number.height()),
        );
        let load_elapsed = load_start.elapsed();

        let anchor = compute_anchor(
            source.width(),
            number.width(),
            request.height_offset,
            request.width_offset,
        );
        self.trace(
            &config,
            &format!("paste location for number on source image is {}", anchor),
        );

        let compose_start = Instant::now();
        let (output, painted) = self.compose(&source, &number, anchor, &config);
        let compose_elapsed = compose_start.elapsed();

        let save_start = Instant::now();
        self.write_output(&output, &output_path, &config)?;
        let save_elapsed = save_start.elapsed();

        log::info!(
            "✅ 编号叠加完成 - {} -> {} load={}ms compose={}ms save={}ms total={}ms",
            source.path.display(),
            output_path.display(),
            load_elapsed.as_millis(),
            compose_elapsed.as_millis(),
            save_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(OverlayOutcome {
            output_path,
            anchor,
            painted,
            dimensions: (output.width(), output.height()),
        })
    }
}
