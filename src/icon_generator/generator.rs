//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，单次运行严格顺序执行：
//! 1. 加载并解码源图（失败时尚未创建任何目录）
//! 2. 逐个密度档位：建目录 → 缩放写入 → 圆形裁剪写入
//! 3. 前景层：从源图独立缩放并写入 `drawable`
//! 4. 删除旧的矢量前景文件（若存在）
//!
//! ## 实现思路
//!
//! - 任一步骤出错立即返回，已写入的文件不回滚。
//! - 记录 `load/mipmap/foreground/total` 阶段耗时，便于诊断。

use std::time::Instant;

use super::config::{LAUNCHER_FILE, LAUNCHER_ROUND_FILE};
use super::source::{DENSITY_BUCKETS, GenerationReport};
use super::{IconConfig, IconError};

/// 启动图标生成器。
pub struct IconGenerator {
    config: IconConfig,
}

impl IconGenerator {
    /// 根据配置创建生成器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use launcher_icons::icon_generator::{IconConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(IconConfig::default());
    /// let report = generator.run()?;
    /// # Ok::<(), launcher_icons::icon_generator::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    /// 处理主入口：生成全部密度档位图标与前景层，并清理旧文件。
    pub fn run(&self) -> Result<GenerationReport, IconError> {
        let config = &self.config;
        let total_start = Instant::now();
        let mut report = GenerationReport::default();

        let load_start = Instant::now();
        let source = Self::load_source(&config.source_path)?;
        let load_elapsed = load_start.elapsed();

        let mipmap_start = Instant::now();
        for bucket in DENSITY_BUCKETS {
            let mipmap_dir = config.mipmap_dir(bucket.label);
            Self::ensure_dir(&mipmap_dir)?;

            let resized = Self::resize_square(&source.pixels, bucket.size, config.resize_filter)?;
            let launcher_path = mipmap_dir.join(LAUNCHER_FILE);
            Self::save_png(&resized, &launcher_path)?;
            report.outputs.push(launcher_path);

            let round = Self::round_crop(&resized);
            let round_path = mipmap_dir.join(LAUNCHER_ROUND_FILE);
            Self::save_png(&round, &round_path)?;
            report.outputs.push(round_path);

            log::info!(
                "✅ mipmap-{} 已生成 ({}x{})",
                bucket.label,
                bucket.size,
                bucket.size
            );
        }
        let mipmap_elapsed = mipmap_start.elapsed();

        let foreground_start = Instant::now();
        Self::ensure_dir(&config.drawable_dir())?;
        let foreground =
            Self::resize_square(&source.pixels, config.foreground_size, config.resize_filter)?;
        let foreground_path = config.foreground_path();
        Self::save_png(&foreground, &foreground_path)?;
        report.outputs.push(foreground_path);
        log::info!(
            "✅ 前景层已生成 ({}x{})",
            config.foreground_size,
            config.foreground_size
        );
        let foreground_elapsed = foreground_start.elapsed();

        report.stale_removed = Self::remove_stale(&config.stale_foreground_path())?;

        log::info!(
            "✅ 图标生成完成 - 来源: {} 输出: {} 个文件 load={}ms mipmap={}ms foreground={}ms total={}ms",
            source.source_hint,
            report.outputs.len(),
            load_elapsed.as_millis(),
            mipmap_elapsed.as_millis(),
            foreground_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(report)
    }
}
