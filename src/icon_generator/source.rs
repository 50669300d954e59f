//! # 数据源与中间模型
//!
//! 将“固定尺寸表”和“流水线中间结果”解耦：
//! - `DensityBucket` / `DENSITY_BUCKETS` 表示密度档位与边长
//! - `SourceImage` 表示已解码为 RGBA 的源图
//! - `GenerationReport` 表示一次生成的输出结果

use std::path::PathBuf;

use image::RgbaImage;

/// 密度档位：名称与正方形边长（像素）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityBucket {
    pub label: &'static str,
    pub size: u32,
}

/// 固定尺寸表，运行期间不会被修改。
pub const DENSITY_BUCKETS: [DensityBucket; 5] = [
    DensityBucket { label: "mdpi", size: 48 },
    DensityBucket { label: "hdpi", size: 72 },
    DensityBucket { label: "xhdpi", size: 96 },
    DensityBucket { label: "xxhdpi", size: 144 },
    DensityBucket { label: "xxxhdpi", size: 192 },
];

/// 加载阶段输出：RGBA 源图与来源标识。
pub(crate) struct SourceImage {
    /// 解码并转换为 RGBA 的像素数据，加载后只读。
    pub(crate) pixels: RgbaImage,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: String,
}

/// 一次生成的结果汇总。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// 按写入顺序排列的输出文件。
    pub outputs: Vec<PathBuf>,
    /// 是否删除了旧的矢量前景文件。
    pub stale_removed: bool,
}
