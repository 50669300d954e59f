//! # Android 启动图标生成工具 — 应用入口
//!
//! 本文件仅负责日志初始化与调用生成器，业务逻辑详见 `lib.rs` 架构文档。
//! 没有命令行参数，路径与尺寸均为 `IconConfig::default()` 中的固定常量。

use launcher_icons::error::AppError;
use launcher_icons::icon_generator::{IconConfig, IconGenerator};

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let generator = IconGenerator::new(IconConfig::default());
    let report = generator.run()?;
    log::info!(
        "输出 {} 个文件，旧前景文件{}",
        report.outputs.len(),
        if report.stale_removed { "已删除" } else { "不存在" }
    );

    println!("Icons generated successfully!");
    Ok(())
}
