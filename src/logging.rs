//! # 日志初始化模块
//!
//! 默认过滤级别为 `warn`，正常运行只输出最终结果消息；`RUST_LOG` 设置时以其为准。
//! `-d` 打开后，本 crate 的 debug 诊断改写到标准输出，格式为 `<程序名>: <消息>`。

use std::io::Write;

use env_logger::{Builder, Env, Target};

/// 诊断行前缀使用的程序名。
pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// 构建日志器配置，`main` 与测试共用。
pub fn logger_builder(debug: bool) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    if debug {
        builder
            .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Debug)
            .target(Target::Stdout)
            .format(|buf, record| writeln!(buf, "{}: {}", PROGRAM_NAME, record.args()));
    }

    builder
}

/// 初始化全局日志器；重复初始化只打印提示，不中断运行。
pub fn init_logger(debug: bool) {
    if let Err(err) = logger_builder(debug).try_init() {
        eprintln!("日志初始化失败: {err}");
    }
}
