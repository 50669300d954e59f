//! # Android 启动图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   日志初始化 → IconGenerator::run → 完成提示     │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<GenerationReport, IconError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────────── AppError (统一错误类型)              │
//! │  └─ icon_generator   源图解码·缩放·圆形裁剪·写盘·清理     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，可执行入口的返回错误 |
//! | [`icon_generator`] | 从单张源图生成各密度档位的启动图标、圆形图标与前景层 |

pub mod error;
pub mod icon_generator;
