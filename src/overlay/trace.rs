//! # 诊断输出模块
//!
//! 编排器通过注入的 `TraceSink` 输出逐步诊断信息，而不是直接读取全局调试开关。
//! 诊断内容只用于观察，不参与任何分支判断。

/// 诊断信息接收端。
pub trait TraceSink: Send + Sync {
    fn trace(&self, message: &str);
}

/// 转发到 `log::debug!` 的默认实现。
///
/// 实际是否打印由 `env_logger` 的过滤级别决定（命令行 `-d` 会打开 debug 级别）。
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTraceSink;

impl TraceSink for LogTraceSink {
    fn trace(&self, message: &str) {
        log::debug!("{}", message);
    }
}
