//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载编号叠加链路中的所有失败来源，避免 `(code, message)` 二元组式返回。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! 其中 `SourceNotFound` / `OverlayNotFound` 在任何解码之前主动检测；
//! `Decode` / `Write` 则承接编解码与磁盘写入阶段的失败。

/// 编号叠加统一错误类型。
///
/// 每个分支携带完整的提示文本，`Display` 直接输出该文本。
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("{0}")]
    InvalidNumber(String),

    #[error("{0}")]
    SourceNotFound(String),

    #[error("{0}")]
    OverlayNotFound(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("写入错误：{0}")]
    Write(String),
}

/// 错误种类（不携带消息），供调用侧做稳定分支判断。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayErrorKind {
    InvalidNumber,
    SourceNotFound,
    OverlayNotFound,
    ResourceLimit,
    Decode,
    Write,
}

impl OverlayError {
    pub fn kind(&self) -> OverlayErrorKind {
        match self {
            Self::InvalidNumber(_) => OverlayErrorKind::InvalidNumber,
            Self::SourceNotFound(_) => OverlayErrorKind::SourceNotFound,
            Self::OverlayNotFound(_) => OverlayErrorKind::OverlayNotFound,
            Self::ResourceLimit(_) => OverlayErrorKind::ResourceLimit,
            Self::Decode(_) => OverlayErrorKind::Decode,
            Self::Write(_) => OverlayErrorKind::Write,
        }
    }
}
