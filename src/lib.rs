//! # 图片编号工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   命令行入口（clap + env_logger + 退出码）      │
//! │     │                                                    │
//! │     ├─ cli ──────── 参数 → OverlayRequest / OverlayConfig │
//! │     ├─ error ────── AppError (统一错误类型 + 退出码)      │
//! │     ├─ logging ──── env_logger 配置（-d 输出到 stdout）   │
//! │     │                                                    │
//! │     └─ overlay ──── 编号叠加流水线                       │
//! │         ├─ loader       存在性校验 + 读取解码            │
//! │         ├─ naming       输出文件命名                     │
//! │         ├─ pipeline     粘贴坐标 + alpha 合成            │
//! │         └─ writer       PNG 写出                         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，命令行入口的返回类型 |
//! | [`cli`] | 命令行参数定义与转换 |
//! | [`logging`] | 日志器构建与初始化 |
//! | [`overlay`] | 把编号图片叠加到源图副本并写出 `<名称>-NNN.png` |

pub mod cli;
pub mod error;
pub mod logging;
pub mod overlay;

use std::io::Write;

use error::{AppError, EXIT_SUCCESS};
use overlay::OverlayOutcome;

/// 按命令行参数执行一次编号叠加。
pub fn run(cli: &cli::Cli) -> Result<OverlayOutcome, AppError> {
    Ok(overlay::add_number_to_image(
        &cli.overlay_request(),
        cli.overlay_config(),
    )?)
}

/// 输出最终结果消息（静默模式下不输出），返回进程退出码。
///
/// 退出码与是否静默无关。
pub fn report<W: Write>(
    result: &Result<OverlayOutcome, AppError>,
    silent: bool,
    out: &mut W,
) -> Result<u8, AppError> {
    let (code, message) = match result {
        Ok(outcome) => (EXIT_SUCCESS, outcome.message()),
        Err(err) => (err.exit_code(), err.to_string()),
    };

    if !silent {
        writeln!(out, "{}", message)?;
        out.flush()?;
    }

    Ok(code)
}
