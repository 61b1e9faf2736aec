use anyhow::Result;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};

pub const WIDTH: u32 = 300;
pub const HEIGHT: u32 = 300;

/// Pure blue
pub const FILL_COLOR: Rgb<u8> = Rgb([0, 0, 255]);

/// Output file name, relative to the working directory
pub const OUTPUT_PATH: &str = "test-image.png";

pub const SUCCESS_MESSAGE: &str = "Test image created successfully";

/// Generates a solid-color PNG test image
pub struct ImageGenerator {
    pub width: u32,
    pub height: u32,
    pub fill: Rgb<u8>,
    pub output_path: PathBuf,
}

impl ImageGenerator {
    pub fn new() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            fill: FILL_COLOR,
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }

    /// Allocate the raster buffer with every pixel set to the fill color
    pub fn create_image(&self) -> RgbImage {
        RgbImage::from_pixel(self.width, self.height, self.fill)
    }

    /// Encode `img` as PNG at `path`, replacing any existing file
    pub fn save(&self, img: &RgbImage, path: &Path) -> Result<()> {
        img.save_with_format(path, ImageFormat::Png)
            .map_err(|e| anyhow::anyhow!("Failed to save image {:?}: {}", path, e))
    }

    pub fn report(&self) {
        println!("{}", SUCCESS_MESSAGE);
    }

    /// Create the image, write it to the output path and report success
    pub fn run(&self) -> Result<()> {
        self.run_in(Path::new(""))?;
        Ok(())
    }

    /// Same as [`run`](Self::run) but writes into `dir`. Returns the written path.
    pub fn run_in(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.output_path);
        let img = self.create_image();
        self.save(&img, &path)?;
        self.report();
        Ok(path)
    }
}

impl Default for ImageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

