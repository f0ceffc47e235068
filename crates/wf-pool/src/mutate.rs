//! Winner removal from raw roster text

/// Remove every line whose parsed name is one of `winner_names`.
///
/// Matching lines are dropped whole; everything else passes through
/// byte-identical, including malformed lines the parser would have
/// degraded. The `\n` separator is preserved.
pub fn remove_winners(raw_text: &str, winner_names: &[String]) -> String {
    let before = raw_text.split('\n').count();
    let kept: Vec<&str> = raw_text
        .split('\n')
        .filter(|line| {
            let name = line.split('|').next().unwrap_or("").trim();
            !winner_names.iter().any(|w| w == name)
        })
        .collect();
    log::debug!("removed {} of {before} roster line(s)", before - kept.len());
    kept.join("\n")
}
