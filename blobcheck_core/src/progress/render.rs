//! Text rendering of a progress line for stderr.

use super::ProgressState;
use std::time::Duration;

/// Builds `message▕bar▏pos/total (pct%) rate eta`, filling `width` columns.
pub fn render_line(state: &ProgressState, width: usize) -> String {
	let total = state.total.max(1);
	let pos = state.position.min(total);
	let msg = &state.message;
	let elapsed = state.start.elapsed().as_secs_f64();

	let per_sec = if elapsed > 0.0 { pos as f64 / elapsed } else { 0.0 };
	let eta_secs = if pos > 0 {
		(elapsed * ((total - pos) as f64 / pos as f64)).max(0.0)
	} else {
		0.0
	};

	let percent = (state.fraction() * 100.0).floor() as u64;
	let rate = format_rate(per_sec);
	let eta = format_eta(Duration::from_secs_f64(eta_secs));

	let line = |bar: &str| format!("{msg}▕{bar}▏{pos}/{total} ({percent:>3}%) {rate:>5} {eta:>5}");
	let bar_width = width.saturating_sub(line("").chars().count());
	line(&make_bar(state.fraction(), bar_width))
}

pub fn format_rate(per_sec: f64) -> String {
	if per_sec.is_finite() {
		human_number(per_sec) + "/s"
	} else {
		"--/s".to_string()
	}
}

pub fn human_number(v: f64) -> String {
	let abs = v.abs();
	if abs >= 1_000_000_000.0 {
		format!("{:.1}G", v / 1_000_000_000.0)
	} else if abs >= 1_000_000.0 {
		format!("{:.1}M", v / 1_000_000.0)
	} else if abs >= 1_000.0 {
		format!("{:.1}k", v / 1_000.0)
	} else {
		format!("{v:.0}")
	}
}

pub fn format_eta(d: Duration) -> String {
	let total = d.as_secs();
	let days = total / 86_400;
	let hours = (total % 86_400) / 3_600;
	let minutes = (total % 3_600) / 60;
	let seconds = total % 60;

	if total < 60 {
		format!("{seconds}s")
	} else if total < 3_600 {
		format!("{minutes:02}:{seconds:02}")
	} else if total < 86_400 {
		format!("{hours}:{minutes:02}:{seconds:02}")
	} else {
		format!("{days}d{hours:02}h")
	}
}

/// Terminal width, or 80 when stderr is not a terminal.
pub fn terminal_width() -> usize {
	if let Some((width, _)) = terminal_size::terminal_size() {
		return usize::from(width.0.max(10));
	}
	80
}

/// Bar of `width` cells with eighth-cell resolution.
pub fn make_bar(fraction: f64, width: usize) -> String {
	const PARTIALS: [char; 8] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];

	let width = width.max(1);
	let exact = fraction.clamp(0.0, 1.0) * width as f64;
	let whole = (exact.floor() as usize).min(width);

	let mut bar = String::with_capacity(width * 3);
	bar.extend(std::iter::repeat_n('█', whole));
	if whole < width {
		let eighths = ((exact - whole as f64) * 8.0).floor() as usize;
		bar.push(PARTIALS[eighths.min(7)]);
		bar.extend(std::iter::repeat_n(' ', width - whole - 1));
	}
	bar
}
