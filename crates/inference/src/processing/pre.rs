use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use ndarray::{Array, IxDyn};
use schema::ColorFormat;

const PAD_COLOR: u8 = 114;

/// One frame letterboxed into the detector's input layout, together with
/// the forward transform that produced it. The postprocessor inverts the
/// same transform to bring boxes back into original-image pixels.
pub struct PreprocessedFrame {
    /// 1x3xHxW channels-first tensor, normalized to \[0, 1\]
    pub tensor: Array<f32, IxDyn>,
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

pub struct Preprocessor {
    input_size: (u32, u32),
    rgb_buffer: Vec<u8>,
    canvas: Vec<u8>,
    resizer: Resizer,
}

impl Preprocessor {
    pub fn new(input_size: (u32, u32)) -> Self {
        Self {
            input_size,
            rgb_buffer: Vec::with_capacity(1920 * 1080 * 3),
            canvas: vec![PAD_COLOR; (input_size.0 * input_size.1 * 3) as usize],
            resizer: Resizer::new(),
        }
    }

    /// Swap BGR to RGB if needed, resize with bilinear interpolation onto a
    /// centered letterbox canvas, then normalize into CHW floats.
    pub fn run(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        format: ColorFormat,
    ) -> anyhow::Result<PreprocessedFrame> {
        anyhow::ensure!(width > 0 && height > 0, "empty frame: {width}x{height}");

        let expected = (width as usize) * (height as usize) * 3;

        self.rgb_buffer.clear();
        match format {
            ColorFormat::RGB => {
                self.rgb_buffer.extend_from_slice(pixels);
            }
            ColorFormat::BGR => {
                self.rgb_buffer.reserve(expected);
                for px in pixels.chunks_exact(3) {
                    self.rgb_buffer.push(px[2]);
                    self.rgb_buffer.push(px[1]);
                    self.rgb_buffer.push(px[0]);
                }
            }
            ColorFormat::GRAY => {
                anyhow::bail!("grayscale frames are not supported");
            }
            other => {
                anyhow::bail!("unknown color format: {other:?}");
            }
        }

        anyhow::ensure!(
            self.rgb_buffer.len() == expected,
            "pixel buffer mismatch: expected {} bytes for {}x{} RGB, got {}",
            expected,
            width,
            height,
            self.rgb_buffer.len()
        );

        let (input_w, input_h) = self.input_size;
        let scale = (input_w as f32 / width as f32).min(input_h as f32 / height as f32);
        let new_width = (width as f32 * scale) as u32;
        let new_height = (height as f32 * scale) as u32;
        let offset_x = (input_w - new_width) / 2;
        let offset_y = (input_h - new_height) / 2;

        let src = Image::from_slice_u8(width, height, &mut self.rgb_buffer, PixelType::U8x3)?;
        let mut resized = Image::new(new_width, new_height, PixelType::U8x3);
        self.resizer.resize(
            &src,
            &mut resized,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
        )?;

        self.canvas.fill(PAD_COLOR);

        let resized_data = resized.buffer();
        for row in 0..new_height {
            let src_start = (row * new_width * 3) as usize;
            let src_end = src_start + (new_width * 3) as usize;
            let dst_start = ((row + offset_y) * input_w * 3 + offset_x * 3) as usize;
            let dst_end = dst_start + (new_width * 3) as usize;

            self.canvas[dst_start..dst_end].copy_from_slice(&resized_data[src_start..src_end]);
        }

        let mut tensor = Array::zeros(IxDyn(&[1, 3, input_h as usize, input_w as usize]));
        for y in 0..input_h as usize {
            for x in 0..input_w as usize {
                let idx = (y * input_w as usize + x) * 3;
                tensor[[0, 0, y, x]] = self.canvas[idx] as f32 / 255.0;
                tensor[[0, 1, y, x]] = self.canvas[idx + 1] as f32 / 255.0;
                tensor[[0, 2, y, x]] = self.canvas[idx + 2] as f32 / 255.0;
            }
        }

        Ok(PreprocessedFrame {
            tensor,
            scale,
            offset_x: offset_x as f32,
            offset_y: offset_y as f32,
        })
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new((640, 640))
    }
}
