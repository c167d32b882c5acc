//! Clock formatting for the demo player

/// Format seconds as `MM:SS`, flooring to whole seconds
///
/// Negative and non-finite input renders as `00:00`.
pub fn format_clock(seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", whole / 60, whole % 60)
}
