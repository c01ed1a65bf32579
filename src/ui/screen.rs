//! Header, one-line message styles and the "press ENTER" pause.

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    event,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{stdin, stdout, BufRead, Write};
use std::time::Duration;

use crate::decoder::VideoInfo;
use crate::shared::constants::{self, DEFAULT_MARGIN_H, DEFAULT_MARGIN_V};
use crate::style::layout::visible_width;
use crate::style::{pad_left, pad_left_top, Formatter};
use crate::utils::time_utils::humanize_duration;

/// `text` behind the default left margin.
pub fn line(text: &str) -> String {
    pad_left(text, DEFAULT_MARGIN_H)
}

/// `text` behind the default left margin, under one blank line.
pub fn line_top(text: &str) -> String {
    pad_left_top(text, DEFAULT_MARGIN_H, DEFAULT_MARGIN_V)
}

/// Clear the screen and print the app logo with the product line under it.
pub fn print_header() -> Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let blue = Formatter::new().blue();
    let logo_width = constants::LOGO
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    for logo_line in constants::LOGO {
        writeln!(out, "{}", line(&blue.render(logo_line)))?;
    }

    let bold = Formatter::new().bold();
    let product = format!(
        "{}ideo {}rame {}tractor",
        bold.render("V"),
        bold.render("F"),
        bold.render("Ex")
    );
    // Center under the logo; the product line carries escape bytes, so
    // measure its visible glyphs only.
    let centering = logo_width.saturating_sub(visible_width(&product)) / 2;
    writeln!(
        out,
        "{}\n",
        pad_left_top(&product, DEFAULT_MARGIN_H + centering as i32, 1)
    )?;
    out.flush()?;

    Ok(())
}

pub fn info(text: &str) -> String {
    Formatter::new().erase().blue().render(text)
}

pub fn error(text: &str) -> String {
    Formatter::new().erase().red().render(text)
}

pub fn success(text: &str) -> String {
    Formatter::new().erase().green().render(text)
}

pub fn warning(text: &str) -> String {
    Formatter::new().erase().yellow().render(text)
}

/// Print the video metadata block shown above every wizard question.
pub fn print_video_info(video: &VideoInfo) {
    if video.frames == 0 || video.fps <= 0.0 {
        println!(
            "{}",
            line_top(&warning(
                "Could not determine any information about the video!"
            ))
        );
        return;
    }

    println!(
        "{}",
        line_top(&format!(
            "{} {}",
            info("Duration:"),
            humanize_duration(video.duration_secs())
        ))
    );
    println!(
        "{}",
        line_top(&format!("{} {}", info("Total of frames:"), video.frames))
    );
    println!(
        "{}",
        line(&format!("{} {}", info("Frame rate (FPS):"), video.fps))
    );
    println!(
        "{}",
        line_top(&format!(
            "{} {}x{}",
            info("Resolution:"),
            video.width,
            video.height
        ))
    );
}

/// Show "Press [ENTER] to `action`..." and block until ENTER.
///
/// Pending terminal input is drained first so a key mashed during the
/// previous screen does not skip the pause.
pub fn press_enter_to(action: &str, message: Formatter, enter: Formatter) {
    drain_pending_input();

    let prompt = format!(
        "{}{}{}{}{}",
        message.render("Press ["),
        enter.render("ENTER"),
        message.render("] to "),
        action.to_lowercase(),
        message.render("...")
    );
    print!("{}", line_top(&prompt));
    let _ = stdout().flush();

    let mut discard = String::new();
    let _ = stdin().lock().read_line(&mut discard);
}

/// Throw away any input events already queued on the terminal.
fn drain_pending_input() {
    while let Ok(true) = event::poll(Duration::ZERO) {
        if event::read().is_err() {
            break;
        }
    }
}

/// Prompt with `message` and read one trimmed line from stdin.
/// Returns `None` on end of input (closed stdin).
pub fn ask(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    stdout().flush()?;

    let mut answer = String::new();
    let read = stdin().lock().read_line(&mut answer)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(answer.trim().to_string()))
}
