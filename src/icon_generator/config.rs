//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有固定常量（源图路径、输出根目录、前景尺寸、缩放滤镜）集中到 `IconConfig`，
//! 可执行入口只使用 `Default`，测试则可以把路径指向临时目录。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产使用的固定路径与参数。
//! - 输出路径统一由本模块的辅助方法拼接，编排层不直接拼字符串。

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

/// 默认源图路径。
pub const DEFAULT_SOURCE_IMAGE: &str = "/opt/nf-watch/branding/premium_watch_icon.png";
/// 默认 Android 资源根目录。
pub const DEFAULT_RES_DIR: &str = "/opt/nf-watch/app/src/main/res";
/// 自适应图标前景层边长（像素）。
pub const FOREGROUND_SIZE: u32 = 432;

pub(crate) const LAUNCHER_FILE: &str = "ic_launcher.png";
pub(crate) const LAUNCHER_ROUND_FILE: &str = "ic_launcher_round.png";
pub(crate) const FOREGROUND_FILE: &str = "ic_launcher_foreground.png";
pub(crate) const STALE_FOREGROUND_FILE: &str = "ic_launcher_foreground.xml";

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 源图路径。
    pub source_path: PathBuf,
    /// 输出资源根目录（`res`）。
    pub res_dir: PathBuf,
    /// 前景层边长。
    pub foreground_size: u32,
    /// 缩放滤镜，需保证放大与缩小时的画质（不可使用最近邻）。
    pub resize_filter: FilterType,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_IMAGE),
            res_dir: PathBuf::from(DEFAULT_RES_DIR),
            foreground_size: FOREGROUND_SIZE,
            resize_filter: FilterType::Lanczos3,
        }
    }
}

impl IconConfig {
    /// 以指定源图与输出目录构建配置，其余参数取默认值。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use launcher_icons::icon_generator::IconConfig;
    ///
    /// let config = IconConfig::with_paths("icon.png", "app/src/main/res");
    /// assert_eq!(config.foreground_size, 432);
    /// ```
    pub fn with_paths(source_path: impl AsRef<Path>, res_dir: impl AsRef<Path>) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            res_dir: res_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// `<res_dir>/mipmap-<density>`
    pub fn mipmap_dir(&self, density: &str) -> PathBuf {
        self.res_dir.join(format!("mipmap-{density}"))
    }

    /// `<res_dir>/drawable`
    pub fn drawable_dir(&self) -> PathBuf {
        self.res_dir.join("drawable")
    }

    pub fn foreground_path(&self) -> PathBuf {
        self.drawable_dir().join(FOREGROUND_FILE)
    }

    /// 旧版矢量前景占位文件，生成 PNG 前景后需要删除。
    pub fn stale_foreground_path(&self) -> PathBuf {
        self.drawable_dir().join(STALE_FOREGROUND_FILE)
    }
}
