//! # 加载模块
//!
//! ## 设计思路
//!
//! 在任何输出目录被创建之前完成源图读取与解码，源图缺失或损坏时尽早失败。
//!
//! ## 实现思路
//!
//! - 文件：存在性检查 + 读取字节。
//! - 解码：按文件签名识别格式，完整解码后统一转换为 RGBA（无透明通道的源图补全不透明 alpha）。

use std::path::Path;

use image::GenericImageView;

use super::source::SourceImage;
use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 从本地文件加载源图并转换为 RGBA。
    pub(crate) fn load_source(path: &Path) -> Result<SourceImage, IconError> {
        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        if !path.exists() {
            return Err(IconError::FileSystem(format!(
                "源图不存在：{}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取源图文件：{}", e)))?;

        Self::decode_source(&bytes, path.display().to_string())
    }

    fn decode_source(bytes: &[u8], source_hint: String) -> Result<SourceImage, IconError> {
        if bytes.is_empty() {
            return Err(IconError::Decode("源图内容为空".to_string()));
        }

        let decoded = image::load_from_memory(bytes)
            .map_err(|e| IconError::Decode(format!("源图解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        log::info!(
            "✅ 源图解码成功 - 来源: {} 尺寸: {}x{} 颜色: {:?}",
            source_hint,
            width,
            height,
            decoded.color()
        );

        Ok(SourceImage {
            pixels: decoded.to_rgba8(),
            source_hint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    fn create_rgb_png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 255) as u8, (y % 255) as u8, ((x + y) % 255) as u8])
        });

        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("failed to encode test image");
        cursor.into_inner()
    }

    #[test]
    fn decode_source_adds_opaque_alpha_to_rgb_input() {
        let png = create_rgb_png_bytes(20, 10);

        let source = IconGenerator::decode_source(&png, "test".to_string())
            .expect("decode should succeed");

        assert_eq!(source.pixels.dimensions(), (20, 10));
        assert!(source.pixels.pixels().all(|p| p[3] == 255));
        assert_eq!(source.source_hint, "test");
    }

    #[test]
    fn decode_source_rejects_non_image_payload() {
        let result = IconGenerator::decode_source(b"Hello, world", "text".to_string());

        assert!(matches!(result, Err(IconError::Decode(_))));
    }

    #[test]
    fn decode_source_rejects_empty_payload() {
        let result = IconGenerator::decode_source(&[], "empty".to_string());

        assert!(matches!(result, Err(IconError::Decode(_))));
    }

    #[test]
    fn load_source_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let missing = dir.path().join("missing.png");

        let result = IconGenerator::load_source(&missing);

        assert!(matches!(result, Err(IconError::FileSystem(_))));
    }
}
