//! # 写盘模块
//!
//! 目录创建、PNG 持久化与旧文件清理的薄封装，统一把 `std::io` / `image` 错误映射为
//! `IconError` 并在消息中带上路径。目标文件存在时直接覆盖。

use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 递归创建目录，已存在时不做任何事。
    pub(crate) fn ensure_dir(dir: &Path) -> Result<(), IconError> {
        fs::create_dir_all(dir).map_err(|e| {
            IconError::FileSystem(format!("创建目录 '{}' 失败：{}", dir.display(), e))
        })
    }

    pub(crate) fn save_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
        image.save_with_format(path, ImageFormat::Png).map_err(|e| match e {
            image::ImageError::IoError(io) => {
                IconError::FileSystem(format!("写入 '{}' 失败：{}", path.display(), io))
            }
            other => IconError::Encode(format!("编码 '{}' 失败：{}", path.display(), other)),
        })?;

        log::debug!(
            "💾 已写入 {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(())
    }

    /// 文件存在时删除并返回 `true`；不存在时返回 `false`。删除失败直接上抛。
    pub(crate) fn remove_stale(path: &Path) -> Result<bool, IconError> {
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(path).map_err(|e| {
            IconError::FileSystem(format!("删除旧文件 '{}' 失败：{}", path.display(), e))
        })?;

        log::info!("🧹 已删除旧的矢量前景文件：{}", path.display());
        Ok(true)
    }
}
