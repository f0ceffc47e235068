//! Collaborator contracts at the presentation boundary

/// Tick-driven consumer of wheel geometry.
///
/// Receives the ordered segment labels and the current rotation angle;
/// purely observational, with no way to reach back into engine state.
pub trait WheelRenderer {
    fn render(&mut self, labels: &[String], angle: f64);
}

/// Observer notified with each resolved winner batch.
///
/// Injected as an optional capability; the controller functions with no
/// sink attached.
pub trait CelebrationSink {
    fn celebrate(&mut self, winners: &[String]);
}

/// Shorten a label for on-wheel display.
pub fn display_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let head: String = name.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}
