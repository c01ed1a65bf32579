use anyhow::Result;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::decoder::VideoStream;
use crate::style::Formatter;
use crate::ui::screen;
use crate::ui::spinner::{CancelToken, Spinner};
use crate::utils::time_utils::{humanize_duration, Timecode};
use crate::utils::logger;

/// Everything the extraction loop needs, validated up front by the wizard.
#[derive(Debug, Clone)]
pub struct ExtractionPlan {
    pub video: PathBuf,
    /// Keep one frame out of every `rate`.
    pub rate: u64,
    /// Index of the first frame considered for extraction.
    pub offset: u64,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct ExtractionReport {
    pub extracted: u64,
    pub elapsed: Duration,
}

/// Whether the frame at `index` lands on the sampling grid: at or past the
/// offset, and a whole number of `rate` steps away from it.
pub fn should_extract(index: u64, rate: u64, offset: u64) -> bool {
    index >= offset && index % rate == offset % rate
}

/// File name for one extracted frame:
/// `{stem}_{extracted}_{index}_{HH}_{MM}_{SS}_{mmm}.jpg`.
fn frame_file_name(plan: &ExtractionPlan, extracted: u64, index: u64, fps: f64) -> String {
    let stem = plan
        .video
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "frame".to_string());

    format!(
        "{}_{}_{}_{}.jpg",
        stem,
        extracted,
        index,
        Timecode::from_frame(index, fps).file_tag()
    )
}

/// Read the stream sequentially and write every sampled frame as a JPEG.
///
/// A spinner line announces each extraction; the previous spinner is stopped
/// before a new one starts so only one feedback thread runs at a time.
/// `cancel` is checked between frames, so Ctrl+C lands at a frame boundary.
pub fn extract(
    plan: &ExtractionPlan,
    stream: &mut VideoStream,
    cancel: &CancelToken,
) -> Result<ExtractionReport> {
    let fps = stream.info().fps;
    let started = Instant::now();

    let mut index: i64 = -1;
    let mut extracted: u64 = 0;
    let mut spinner: Option<Spinner> = None;

    while let Some(frame) = stream.read_frame()? {
        if cancel.is_cancelled() {
            break;
        }

        index += 1;
        let index = index as u64;

        if !should_extract(index, plan.rate, plan.offset) {
            continue;
        }

        let position = Timecode::from_frame(index, fps);
        if let Some(previous) = spinner.take() {
            previous.stop();
        }
        spinner = Some(Spinner::start(
            screen::line(&format!(
                "Extracting frame {} at {:02}:{:02}:{:02}.{:03} (# {})",
                extracted + 1,
                position.hours,
                position.minutes,
                position.seconds,
                position.millis,
                index
            )),
            Formatter::new().bold().blue(),
        ));

        let path = plan
            .output_dir
            .join(frame_file_name(plan, extracted, index, fps));
        VideoStream::save_frame(&frame, &path)?;
        extracted += 1;
    }

    if let Some(spinner) = spinner.take() {
        spinner.stop();
    }

    let report = ExtractionReport {
        extracted,
        elapsed: started.elapsed(),
    };
    logger::info(&format!(
        "extraction finished: {} frames in {}",
        report.extracted,
        humanize_duration(report.elapsed.as_secs_f64())
    ));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> ExtractionPlan {
        ExtractionPlan {
            video: PathBuf::from("/clips/holiday.mp4"),
            rate: 10,
            offset: 3,
            output_dir: PathBuf::from("/out"),
        }
    }

    #[test]
    fn sampling_starts_at_the_offset() {
        assert!(!should_extract(0, 10, 3));
        assert!(!should_extract(2, 10, 3));
        assert!(should_extract(3, 10, 3));
    }

    #[test]
    fn sampling_repeats_every_rate_frames() {
        let hits: Vec<u64> = (0..35).filter(|&i| should_extract(i, 10, 3)).collect();
        assert_eq!(hits, vec![3, 13, 23, 33]);
    }

    #[test]
    fn rate_one_takes_every_frame_past_the_offset() {
        let hits: Vec<u64> = (0..5).filter(|&i| should_extract(i, 1, 2)).collect();
        assert_eq!(hits, vec![2, 3, 4]);
    }

    #[test]
    fn zero_offset_includes_the_first_frame() {
        assert!(should_extract(0, 4, 0));
        assert!(!should_extract(1, 4, 0));
        assert!(should_extract(4, 4, 0));
    }

    #[test]
    fn file_names_carry_stem_counters_and_timecode() {
        // Frame 93 at 30 fps sits at 3.1 s.
        let name = frame_file_name(&plan(), 7, 93, 30.0);
        assert_eq!(name, "holiday_7_93_00_00_03_100.jpg");
    }
}
