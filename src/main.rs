//! # 图片编号工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数解析与退出码。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::process::ExitCode;

use addnumber::cli::Cli;
use addnumber::error::EXIT_FAILURE;
use addnumber::logging::init_logger;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let result = addnumber::run(&cli);
    if let Err(err) = &result {
        log::debug!("处理失败: {err:?}");
    }

    match addnumber::report(&result, cli.silent, &mut std::io::stdout()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            log::error!("输出结果消息失败: {err}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
