/// Scroll progress as a percentage of the scrollable distance.
///
/// Not clamped: a page no taller than the viewport yields `inf`, `NaN` or a
/// negative value, which the browser drops when written as a width.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    (scroll_top / scrollable) * 100.0
}

/// CSS width value for the progress bar
pub fn progress_width(progress: f64) -> String {
    format!("{}%", progress)
}
