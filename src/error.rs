//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，作为可执行入口 `main` 的返回错误类型。
//! 任一阶段失败都会直接终止整次生成，由进程以非零状态退出并打印原始诊断信息。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 提供 `From` 转换，`main` 中可直接使用 `?`。

use crate::icon_generator::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标生成流水线错误（解码 / 缩放 / 写盘 / 清理）
    #[error("{0}")]
    Icon(#[from] IconError),
}
