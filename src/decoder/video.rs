use anyhow::{anyhow, Result};
use opencv::{core::Vector, imgcodecs, prelude::*, videoio};
use serde::Serialize;
use std::path::Path;

/// Stream-level metadata reported by the decoder backend.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VideoInfo {
    pub frames: u64,
    pub fps: f64,
    pub width: u32,
    pub height: u32,
}

impl VideoInfo {
    pub fn duration_secs(&self) -> f64 {
        if self.fps > 0.0 {
            self.frames as f64 / self.fps
        } else {
            0.0
        }
    }
}

/// Sequential-read handle over a video file.
///
/// All decoding, seeking and image encoding is OpenCV's; this type only
/// exposes the "read the next frame, tell me if it worked" contract the
/// extractor needs.
pub struct VideoStream {
    capture: videoio::VideoCapture,
    info: VideoInfo,
}

impl VideoStream {
    pub fn open(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .ok_or_else(|| anyhow!("video path is not valid UTF-8: {}", path.display()))?;

        // CAP_ANY lets OpenCV pick the best backend for the platform.
        let capture = videoio::VideoCapture::from_file(path_str, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(anyhow!("not a valid video file: {}", path.display()));
        }

        let info = VideoInfo {
            frames: capture.get(videoio::CAP_PROP_FRAME_COUNT)?.max(0.0) as u64,
            fps: capture.get(videoio::CAP_PROP_FPS)?,
            width: capture.get(videoio::CAP_PROP_FRAME_WIDTH)?.max(0.0) as u32,
            height: capture.get(videoio::CAP_PROP_FRAME_HEIGHT)?.max(0.0) as u32,
        };

        crate::utils::logger::debug(&format!(
            "opened {}: {} frames @ {:.3} fps, {}x{}",
            path.display(),
            info.frames,
            info.fps,
            info.width,
            info.height
        ));

        Ok(Self { capture, info })
    }

    pub fn info(&self) -> VideoInfo {
        self.info
    }

    /// Read the next frame; `None` at the end of the stream.
    pub fn read_frame(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }
        Ok(Some(frame))
    }

    /// Encode `frame` to the image format implied by the path extension.
    pub fn save_frame(frame: &Mat, path: &Path) -> Result<()> {
        let path_str = path
            .to_str()
            .ok_or_else(|| anyhow!("output path is not valid UTF-8: {}", path.display()))?;

        if !imgcodecs::imwrite(path_str, frame, &Vector::new())? {
            return Err(anyhow!("failed to write image: {}", path.display()));
        }
        Ok(())
    }
}
