//! # 启动图标生成模块（icon_generator）
//!
//! ## 设计思路
//!
//! 该模块将“源图加载 → 缩放 → 圆形裁剪 → 写盘 → 旧文件清理”按职责拆分为多个子模块，
//! 避免单文件膨胀与耦合。
//!
//! - `config`：固定路径与参数、输出路径拼接
//! - `generator`：编排整条生成流程
//! - `loader`：读取并解码源图
//! - `pipeline`：正方形缩放与圆形遮罩
//! - `writer`：建目录、写 PNG、删除旧文件
//! - `error/source`：错误与数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! generator.rs（顺序编排 + 阶段耗时日志）
//!    ├─ loader.rs（读取 + 解码为 RGBA）
//!    ├─ pipeline.rs（缩放 + 圆形裁剪）
//!    └─ writer.rs（目录 / PNG / 清理）
//!    ↓
//! GenerationReport 或 IconError
//! ```

mod config;
mod error;
mod generator;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{DEFAULT_RES_DIR, DEFAULT_SOURCE_IMAGE, FOREGROUND_SIZE, IconConfig};
pub use error::IconError;
pub use generator::IconGenerator;
pub use source::{DENSITY_BUCKETS, DensityBucket, GenerationReport};
