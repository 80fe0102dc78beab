//! Post-processing and display of a resolved trail.

use owo_colors::OwoColorize;

use super::BreadcrumbSegment;

/// Separator used between crumbs in plain output.
pub const SEPARATOR: &str = " › ";

/// Keep only the last `max` segments, preserving order.
///
/// `max == 0` disables truncation; so does a `max` at or above the length.
pub fn truncate_last(mut trail: Vec<BreadcrumbSegment>, max: usize) -> Vec<BreadcrumbSegment> {
    if max > 0 && trail.len() > max {
        trail.drain(..trail.len() - max);
    }
    trail
}

/// Render `Label › Label › Label` without colors.
pub fn render_plain(trail: &[BreadcrumbSegment]) -> String {
    trail
        .iter()
        .map(|segment| segment.label.as_str())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Render a trail for the terminal.
///
/// Ancestors are dimmed, the current location is bold. With `with_paths`
/// each crumb is followed by its target path.
pub fn render_colored(trail: &[BreadcrumbSegment], with_paths: bool) -> String {
    let last = trail.len().saturating_sub(1);
    trail
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let label = if i == last {
                segment.label.bold().to_string()
            } else {
                segment.label.dimmed().to_string()
            };
            if with_paths {
                format!("{label} {}", format!("({})", segment.path).cyan())
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR.dimmed().to_string().as_str())
}
