//! Parsing of the raw model output into per-slide records.
//!
//! The model is instructed to separate slide blocks with a run of ten
//! dollar symbols. Within a block the first line is the slide title and
//! every following non-blank line is one bullet point.

/// Separator the model is told to emit between slide blocks.
pub const SENTINEL: &str = "$$$$$$$$$$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRecord {
	pub title: String,
	pub bullets: Vec<String>,
}

/// Split raw model text into slide records.
///
/// Tolerates any number of sentinel occurrences (including none), blank
/// segments around separators and blank lines inside a segment. A segment
/// that is empty after trimming produces no record, so every returned
/// record has a non-empty title. This never fails; garbage input just
/// yields fewer records, possibly zero.
pub fn parse(raw_text: &str) -> Vec<SlideRecord> {
	let mut records = Vec::new();
	for segment in raw_text.split(SENTINEL) {
		let segment = segment.trim();
		if segment.is_empty() {
			continue;
		}
		let mut lines = segment
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty());
		let title = match lines.next() {
			Some(title) => title.to_string(),
			None => continue,
		};
		let bullets = lines.map(str::to_string).collect();
		records.push(SlideRecord { title, bullets });
	}
	records
}

/// Re-serialise records back into the sentinel format.
///
/// `parse(&to_sentinel_text(&records))` reproduces `records` as long as
/// titles and bullets are non-blank single lines, which `parse` guarantees
/// for its own output.
pub fn to_sentinel_text(records: &[SlideRecord]) -> String {
	let mut out = String::new();
	for record in records {
		out.push_str(&record.title);
		out.push('\n');
		for bullet in record.bullets.iter() {
			out.push_str(bullet);
			out.push('\n');
		}
		out.push_str(SENTINEL);
		out.push('\n');
	}
	out
}
