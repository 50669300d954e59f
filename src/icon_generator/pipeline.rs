//! # 缩放与圆形裁剪流水线模块
//!
//! ## 设计思路
//!
//! 每个输出尺寸都从同一份 RGBA 源图独立缩放，圆形图标从对应档位刚缩放出的图像派生，
//! 前景层同样直接从源图缩放，不复用任何档位的输出，避免多级缩放累积误差。
//!
//! ## 实现思路
//!
//! 1. 校验目标边长与滤镜
//! 2. 借用源图缓冲，使用 `fast_image_resize` 卷积缩放，失败直接上抛
//! 3. 圆形裁剪：在单通道缓冲中绘制内切实心椭圆，再整体替换副本的 alpha 通道

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{GrayImage, ImageBuffer, Luma, Rgba, RgbaImage};

use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 将源图缩放为 `edge x edge` 的正方形。
    ///
    /// 非正方形源图会被直接拉伸到目标尺寸；最近邻滤镜会被拒绝。
    pub(crate) fn resize_square(
        source: &RgbaImage,
        edge: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, IconError> {
        if edge == 0 {
            return Err(IconError::InvalidSize("目标边长不能为 0".to_string()));
        }
        if filter == FilterType::Nearest {
            return Err(IconError::InvalidSize(
                "不支持最近邻缩放（filter=Nearest）".to_string(),
            ));
        }

        let (src_width, src_height) = source.dimensions();
        let src_image = fr::images::ImageRef::new(
            src_width,
            src_height,
            source.as_raw(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| IconError::Resize(format!("构建源图像视图失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(edge, edge, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(
            Self::to_fast_filter(filter),
        ));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(edge, edge, dst_image.into_vec())
            .ok_or_else(|| IconError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }

    /// 生成圆形裁剪副本：内切圆内 alpha = 255，圆外 alpha = 0。
    ///
    /// 遮罩直接替换 alpha 通道，RGB 保持不变。
    pub(crate) fn round_crop(image: &RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        let mut mask = GrayImage::new(width, height);
        Self::draw_filled_ellipse(&mut mask, 255);

        let mut result = image.clone();
        for (pixel, alpha) in result.pixels_mut().zip(mask.pixels()) {
            pixel[3] = alpha[0];
        }
        result
    }

    /// 在单通道缓冲中填充与整幅边界内切的椭圆。
    ///
    /// 以像素中心 `(x + 0.5, y + 0.5)` 判断是否落在椭圆内（含边界）。
    pub(crate) fn draw_filled_ellipse(mask: &mut GrayImage, value: u8) {
        let (width, height) = mask.dimensions();
        if width == 0 || height == 0 {
            return;
        }

        let rx = width as f64 / 2.0;
        let ry = height as f64 / 2.0;

        for (x, y, pixel) in mask.enumerate_pixels_mut() {
            let dx = (x as f64 + 0.5 - rx) / rx;
            let dy = (y as f64 + 0.5 - ry) / ry;
            if dx * dx + dy * dy <= 1.0 {
                *pixel = Luma([value]);
            }
        }
    }
}
