//! Linear prompt flow collecting everything the extractor needs.
//!
//! Each question is asked until the answer validates; answers handed in on
//! the command line are echoed instead of prompted and fall back to the
//! prompt when rejected.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::extractor::ExtractionPlan;
use crate::decoder::{VideoInfo, VideoStream};
use crate::style::Formatter;
use crate::ui::screen::{self, line, line_top};
use crate::ui::spinner::CancelToken;
use crate::utils::{file_utils, logger};

/// Answers supplied up front on the command line.
#[derive(Debug, Default)]
pub struct Prefill {
    pub input: Option<String>,
    pub rate: Option<u64>,
    pub offset: Option<i64>,
    pub output: Option<String>,
}

/// A validated plan plus the already-open stream it was validated against.
pub struct Session {
    pub plan: ExtractionPlan,
    pub stream: VideoStream,
}

/// Run the wizard. `None` means the user canceled (Ctrl+C or closed stdin).
pub fn run(prefill: Prefill, cancel: &CancelToken) -> Result<Option<Session>> {
    let Some((video, stream)) = ask_video(prefill.input, cancel)? else {
        return Ok(None);
    };
    let info = stream.info();

    let Some(rate) = ask_rate(prefill.rate, &video, &info, cancel)? else {
        return Ok(None);
    };

    let Some(offset) = ask_offset(prefill.offset, &video, &info, rate, cancel)? else {
        return Ok(None);
    };

    let Some(output_dir) =
        ask_output_dir(prefill.output, &video, &info, rate, offset, cancel)?
    else {
        return Ok(None);
    };

    // Final recap screen before extraction starts.
    screen::print_header()?;
    print_settings(&video, &info, Some(rate), Some(offset), Some(&output_dir));
    println!();

    let plan = ExtractionPlan {
        video,
        rate,
        offset,
        output_dir,
    };
    logger::info(&format!(
        "wizard done: video={} rate={} offset={} output={}",
        plan.video.display(),
        plan.rate,
        plan.offset,
        plan.output_dir.display()
    ));

    Ok(Some(Session { plan, stream }))
}

fn prompt_label(text: &str) -> String {
    Formatter::new().bold().cyan().render(text)
}

/// Echo the prefilled answer or prompt for one. `None` means canceled.
fn take_or_ask(
    pending: &mut Option<String>,
    prompt: &str,
    cancel: &CancelToken,
) -> Result<Option<String>> {
    if cancel.is_cancelled() {
        return Ok(None);
    }
    if let Some(value) = pending.take() {
        println!("{}{}", prompt, value);
        return Ok(Some(value));
    }

    let answer = screen::ask(prompt)?;
    if cancel.is_cancelled() {
        return Ok(None);
    }
    Ok(answer)
}

fn reject(message: &str) {
    println!("{}", line_top(&screen::error(message)));
    screen::press_enter_to(
        "try again",
        Formatter::new().red(),
        Formatter::new().white(),
    );
}

fn ask_video(
    prefill: Option<String>,
    cancel: &CancelToken,
) -> Result<Option<(PathBuf, VideoStream)>> {
    let mut pending = prefill;
    let prompt = line(&prompt_label("Input video: "));

    loop {
        screen::print_header()?;

        let Some(answer) = take_or_ask(&mut pending, &prompt, cancel)? else {
            return Ok(None);
        };

        if answer.is_empty() {
            reject("Invalid input!");
            continue;
        }

        let path = Path::new(&answer);
        if !path.is_file() {
            reject("The input path is not a valid file!");
            continue;
        }
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        match VideoStream::open(&path) {
            Ok(stream) => return Ok(Some((path, stream))),
            Err(err) => {
                logger::error(&format!("open failed for {}: {err:#}", path.display()));
                reject("The input file is not a valid video file!");
            }
        }
    }
}

fn ask_rate(
    prefill: Option<u64>,
    video: &Path,
    info: &VideoInfo,
    cancel: &CancelToken,
) -> Result<Option<u64>> {
    let mut pending = prefill.map(|r| r.to_string());
    let prompt = line_top(&prompt_label("Extraction frame rate: "));

    loop {
        screen::print_header()?;
        print_settings(video, info, None, None, None);

        let Some(answer) = take_or_ask(&mut pending, &prompt, cancel)? else {
            return Ok(None);
        };

        match answer.parse::<i64>() {
            Ok(rate) if rate >= 1 => return Ok(Some(rate as u64)),
            Ok(_) => reject("This value must be greater than zero!"),
            Err(_) => reject("Invalid value!"),
        }
    }
}

fn ask_offset(
    prefill: Option<i64>,
    video: &Path,
    info: &VideoInfo,
    rate: u64,
    cancel: &CancelToken,
) -> Result<Option<u64>> {
    let mut pending = prefill.map(|o| o.to_string());
    let prompt = line_top(&prompt_label("Frame offset: "));

    loop {
        screen::print_header()?;
        print_settings(video, info, Some(rate), None, None);

        let Some(answer) = take_or_ask(&mut pending, &prompt, cancel)? else {
            return Ok(None);
        };

        match answer.parse::<i64>() {
            Ok(offset) if offset < 0 => reject("This value must be positive!"),
            Ok(offset) if (offset as u64) >= info.frames => {
                reject(&format!("This value must be lower than {}!", info.frames));
            }
            Ok(offset) => return Ok(Some(offset as u64)),
            Err(_) => reject("Invalid value!"),
        }
    }
}

fn ask_output_dir(
    prefill: Option<String>,
    video: &Path,
    info: &VideoInfo,
    rate: u64,
    offset: u64,
    cancel: &CancelToken,
) -> Result<Option<PathBuf>> {
    let mut pending = prefill;
    let prompt = line_top(&prompt_label("Output folder (optional): "));

    loop {
        screen::print_header()?;
        print_settings(video, info, Some(rate), Some(offset), None);

        let Some(answer) = take_or_ask(&mut pending, &prompt, cancel)? else {
            return Ok(None);
        };

        let dir = if answer.is_empty() {
            file_utils::default_output_dir(video)
        } else {
            PathBuf::from(answer)
        };

        match file_utils::prepare_output_dir(&dir) {
            Ok(resolved) => return Ok(Some(resolved)),
            Err(err) => {
                logger::error(&format!("output dir rejected: {err:#}"));
                reject("Write permission denied!");
            }
        }
    }
}

/// The recap block above every question: video metadata plus the settings
/// confirmed so far.
pub fn print_settings(
    video: &Path,
    info: &VideoInfo,
    rate: Option<u64>,
    offset: Option<u64>,
    output_dir: Option<&Path>,
) {
    println!(
        "{}",
        line(&format!("{} {}", screen::info("Input video:"), video.display()))
    );
    screen::print_video_info(info);

    let setting = Formatter::new().bold().magenta();
    if let Some(rate) = rate {
        println!(
            "{}",
            line_top(&format!(
                "{} {}",
                setting.render("Extraction frame rate:"),
                rate
            ))
        );
    }
    if let Some(offset) = offset {
        println!(
            "{}",
            line(&format!("{} {}", setting.render("Frame offset:"), offset))
        );
    }
    if let Some(dir) = output_dir {
        println!(
            "{}",
            line_top(&format!(
                "{} {}",
                setting.render("Output folder:"),
                dir.display()
            ))
        );
    }
}
