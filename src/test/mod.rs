use super::*;
use std::io::{Cursor, Read};

use crate::slides::SlideRecord;

#[test]
fn parse_single_block_without_sentinel() {
	let records = slides::parse("Rust in Practice\nOwnership\nBorrowing\nLifetimes");
	assert_eq!(records.len(), 1);
	assert_eq!(records[0].title, "Rust in Practice");
	assert_eq!(records[0].bullets, vec!["Ownership", "Borrowing", "Lifetimes"]);
}

#[test]
fn parse_two_blocks() {
	let records = slides::parse("A\nB\n$$$$$$$$$$\nC\nD\n$$$$$$$$$$");
	assert_eq!(
		records,
		vec![
			SlideRecord { title: "A".to_string(), bullets: vec!["B".to_string()] },
			SlideRecord { title: "C".to_string(), bullets: vec!["D".to_string()] },
		]
	);
}

#[test]
fn parse_whitespace_and_sentinels_only() {
	let records = slides::parse("  \n$$$$$$$$$$\n\n\t\n$$$$$$$$$$$$$$$$$$$$\n   ");
	assert!(records.is_empty());
}

#[test]
fn parse_elides_blank_lines() {
	let records = slides::parse("Title\n\n\nBullet1");
	assert_eq!(records.len(), 1);
	assert_eq!(records[0].title, "Title");
	assert_eq!(records[0].bullets, vec!["Bullet1"]);
}

#[test]
fn parse_tolerates_repeated_and_trailing_sentinels() {
	let raw = "$$$$$$$$$$\nFirst\none\n$$$$$$$$$$$$$$$$$$$$\nSecond\n$$$$$$$$$$\n";
	let records = slides::parse(raw);
	assert_eq!(records.len(), 2);
	assert_eq!(records[0].title, "First");
	assert_eq!(records[1].title, "Second");
	assert!(records[1].bullets.is_empty());
}

#[test]
fn parse_bullets_keep_their_order() {
	let records = slides::parse("T\nfirst\nsecond\nthird");
	assert_eq!(records[0].bullets, vec!["first", "second", "third"]);
}

#[test]
fn sentinel_round_trip() {
	let records = vec![
		SlideRecord {
			title: "Memory Safety".to_string(),
			bullets: vec!["No data races".to_string(), "No dangling pointers".to_string()],
		},
		SlideRecord { title: "Tooling".to_string(), bullets: vec![] },
	];
	let reparsed = slides::parse(&slides::to_sentinel_text(&records));
	assert_eq!(reparsed, records);
}

#[test]
fn single_slide_deck_requests_no_content() {
	assert!(!content_slides_requested(1));
	assert!(content_slides_requested(2));
}

#[test]
fn groq_response_parse_test() {
	let mut file = std::fs::File::open("testdata/sampleresponse.json").unwrap();
	let mut content = String::new();
	file.read_to_string(&mut content).unwrap();
	std::mem::drop(file);
	let message = groqapi::ChatClient::parse_response(&content).unwrap();
	assert_eq!(message.role, "assistant");
	let raw_text = message.content.unwrap();
	let records = slides::parse(&raw_text);
	assert_eq!(records.len(), 2);
	assert_eq!(records[0].title, "Getting Started");
	assert_eq!(records[1].bullets, vec!["Read the book"]);
}

#[test]
fn response_parse_rejects_missing_choices() {
	assert!(groqapi::ChatClient::parse_response("{}").is_err());
	assert!(groqapi::ChatClient::parse_response("{\"choices\":[]}").is_err());
	assert!(groqapi::ChatClient::parse_response("not json").is_err());
}

#[test]
fn outline_prompt_names_block_count_and_sentinel() {
	let prompt = groqapi::ChatClient::outline_prompt("Rust", 5);
	assert!(prompt.contains("slides 2 to 5"));
	assert!(prompt.contains("exactly 4 slides"));
	assert!(prompt.contains(slides::SENTINEL));
}

#[test]
fn output_filename_appends_timestamp_after_extension() {
	// Deliberate: the timestamp goes after .pptx, matching what the tool
	// has always produced.
	let name = helpers::output_filename("Rust Programming", "20260830_101112");
	assert_eq!(name, "Rust_Programming_Presentation.pptx20260830_101112");
}

#[test]
fn deck_package_has_expected_parts() {
	let mut deck = pptx::Deck::new();
	deck.add_title_slide("Presentation on Ownership & Borrowing", "Ada Lovelace   42");
	deck.add_content_slide(
		"Move Semantics",
		&["Values have one owner".to_string(), "Assignment moves".to_string()],
	);
	assert_eq!(deck.slide_count(), 2);

	let cursor = deck.write_to(Cursor::new(Vec::new())).unwrap();
	let mut archive = zip::ZipArchive::new(cursor).unwrap();
	for name in [
		"[Content_Types].xml",
		"_rels/.rels",
		"docProps/core.xml",
		"docProps/app.xml",
		"ppt/presentation.xml",
		"ppt/_rels/presentation.xml.rels",
		"ppt/slideMasters/slideMaster1.xml",
		"ppt/slideLayouts/slideLayout1.xml",
		"ppt/slideLayouts/slideLayout2.xml",
		"ppt/theme/theme1.xml",
		"ppt/slides/slide1.xml",
		"ppt/slides/slide2.xml",
	] {
		assert!(archive.by_name(name).is_ok(), "missing part {}", name);
	}

	let mut slide1 = String::new();
	archive.by_name("ppt/slides/slide1.xml").unwrap().read_to_string(&mut slide1).unwrap();
	assert!(slide1.contains("Presentation on Ownership &amp; Borrowing"));
	assert!(slide1.contains("Ada Lovelace   42"));
	assert!(slide1.contains("sz=\"1400\""));

	let mut slide2 = String::new();
	archive.by_name("ppt/slides/slide2.xml").unwrap().read_to_string(&mut slide2).unwrap();
	assert!(slide2.contains("Move Semantics"));
	assert!(slide2.contains("Values have one owner"));

	let mut content_types = String::new();
	archive.by_name("[Content_Types].xml").unwrap().read_to_string(&mut content_types).unwrap();
	assert!(content_types.contains("/ppt/slides/slide2.xml"));
}

#[test]
fn content_slide_without_bullets_still_has_a_paragraph() {
	let mut deck = pptx::Deck::new();
	deck.add_content_slide("Lonely Title", &[]);
	let cursor = deck.write_to(Cursor::new(Vec::new())).unwrap();
	let mut archive = zip::ZipArchive::new(cursor).unwrap();
	let mut slide1 = String::new();
	archive.by_name("ppt/slides/slide1.xml").unwrap().read_to_string(&mut slide1).unwrap();
	assert!(slide1.contains("<a:p/>"));
}

#[test]
fn deck_save_writes_pptx_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("deck.pptx");
	let mut deck = pptx::Deck::new();
	deck.add_title_slide("Presentation on Rust", "Somebody   007");
	deck.save(&path).unwrap();
	let bytes = std::fs::read(&path).unwrap();
	assert_eq!(&bytes[..2], b"PK");
}
