//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError` 枚举，命令行入口统一返回 `Result<T, AppError>`，
//! 并由 `exit_code` 决定进程退出码。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `OverlayError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::overlay::OverlayError;

/// 处理成功时的退出码。
pub const EXIT_SUCCESS: u8 = 0;
/// 任何失败的退出码。
pub const EXIT_FAILURE: u8 = 1;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 编号叠加流水线错误（校验 / 解码 / 写入）
    #[error("{0}")]
    Overlay(#[from] OverlayError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 所有失败统一映射为退出码 1。
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_errors_keep_their_message() {
        let err: AppError =
            OverlayError::OverlayNotFound("number file 7.png does not exist".to_string()).into();
        assert_eq!(err.to_string(), "number file 7.png does not exist");
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn io_errors_fail_the_run() {
        let err: AppError = std::io::Error::other("disk full").into();
        assert_eq!(err.exit_code(), 1);
    }
}
