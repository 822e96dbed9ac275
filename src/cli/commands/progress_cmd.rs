//! Progress command implementation.
//!
//! Steps a bar from 0% to 100% at a fixed cadence, redrawing it in place.

use std::io::{self, Write};
use std::time::Duration;

use crate::progress::{finish_progress, render_progress_styled, ProgressStyle};

/// Smallest accepted step; anything lower (or NaN) is raised to this.
pub const MIN_STEP: f64 = 0.001;

/// Settings for one run of the progress demo.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDemo {
    /// Bar width in characters.
    pub width: usize,
    /// Bar characters and color.
    pub style: ProgressStyle,
    /// Fraction added per step.
    pub step: f64,
    /// Milliseconds between steps.
    pub step_ms: u64,
}

/// Render the bar from 0 to 1, sleeping `step_ms` between renders.
///
/// The final render always shows 100%, followed by a newline.
pub async fn run_progress(out: &mut impl Write, demo: &ProgressDemo) -> io::Result<()> {
    let step = demo.step.max(MIN_STEP);
    let delay = Duration::from_millis(demo.step_ms);
    let mut fraction = 0.0_f64;

    loop {
        render_progress_styled(out, fraction, demo.width, &demo.style)?;
        if fraction >= 1.0 {
            break;
        }
        tokio::time::sleep(delay).await;
        fraction = (fraction + step).min(1.0);
    }

    finish_progress(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::strip_ansi;

    fn demo(step: f64) -> ProgressDemo {
        ProgressDemo {
            width: 10,
            style: ProgressStyle::default(),
            step,
            step_ms: 100,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_progress_quarters() {
        let mut buf = Vec::new();
        run_progress(&mut buf, &demo(0.25)).await.unwrap();

        let text = String::from_utf8(buf).unwrap();
        let labels: Vec<String> = strip_ansi(&text)
            .split('\r')
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_start_matches('=').trim_end().to_string())
            .collect();
        assert_eq!(labels, vec!["0%", "25%", "50%", "75%", "100%"]);
        assert!(text.ends_with("100%\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_progress_takes_step_ms_per_step() {
        let start = tokio::time::Instant::now();
        let mut buf = Vec::new();
        run_progress(&mut buf, &demo(0.5)).await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_progress_never_overshoots() {
        let mut buf = Vec::new();
        run_progress(&mut buf, &demo(0.3)).await.unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("\x1b[32m==========\x1b[0m100%\n"));
        assert!(!text.contains("120%"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_positive_step_is_raised() {
        let mut buf = Vec::new();
        let mut settings = demo(0.0);
        settings.step_ms = 1;
        run_progress(&mut buf, &settings).await.unwrap();
        assert!(String::from_utf8(buf).unwrap().ends_with("100%\n"));
    }
}
