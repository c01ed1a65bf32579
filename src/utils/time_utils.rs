/// Timestamp of a frame inside the video, split for file naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timecode {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
}

impl Timecode {
    /// Position of frame `index` in a stream running at `fps`.
    pub fn from_frame(index: u64, fps: f64) -> Self {
        let total = if fps > 0.0 { index as f64 / fps } else { 0.0 };
        Self::from_seconds(total)
    }

    pub fn from_seconds(mut seconds: f64) -> Self {
        let hours = (seconds / 3600.0) as u64;
        seconds %= 3600.0;
        let minutes = (seconds / 60.0) as u64;
        seconds %= 60.0;

        Self {
            hours,
            minutes,
            seconds: seconds as u64,
            millis: ((seconds - seconds.floor()) * 1000.0) as u64,
        }
    }

    /// `HH_MM_SS_mmm`, underscore-separated for filenames.
    pub fn file_tag(&self) -> String {
        format!(
            "{:02}_{:02}_{:02}_{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

/// Convert a duration in seconds to a human readable `HH:MM:SS.ss` string.
pub fn humanize_duration(mut seconds: f64) -> String {
    let hours = (seconds / 3600.0) as u64;
    seconds %= 3600.0;
    let minutes = (seconds / 60.0) as u64;
    seconds %= 60.0;

    format!("{:02}:{:02}:{:05.2}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanizes_durations() {
        assert_eq!(humanize_duration(0.0), "00:00:00.00");
        assert_eq!(humanize_duration(61.5), "00:01:01.50");
        assert_eq!(humanize_duration(3723.25), "01:02:03.25");
    }

    #[test]
    fn timecode_from_frame_index() {
        // Frame 90 at 30 fps is exactly 3 seconds in.
        let tc = Timecode::from_frame(90, 30.0);
        assert_eq!(tc, Timecode { hours: 0, minutes: 0, seconds: 3, millis: 0 });

        // Frame 1 at 25 fps is 40 ms in.
        let tc = Timecode::from_frame(1, 25.0);
        assert_eq!(tc.millis, 40);
        assert_eq!(tc.file_tag(), "00_00_00_040");
    }

    #[test]
    fn timecode_splits_long_positions() {
        let tc = Timecode::from_seconds(3661.5);
        assert_eq!(tc, Timecode { hours: 1, minutes: 1, seconds: 1, millis: 500 });
        assert_eq!(tc.file_tag(), "01_01_01_500");
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        let tc = Timecode::from_frame(42, 0.0);
        assert_eq!(tc.file_tag(), "00_00_00_000");
    }
}
