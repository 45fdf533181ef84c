//! Minimal OOXML presentation writer.
//!
//! Builds a `.pptx` package from scratch: the invariant parts (theme,
//! slide master, the two layouts) are baked in as constants, the parts
//! that depend on the slide list are generated with quick-xml and the
//! whole lot is zipped up. The part inventory is the smallest set that
//! common viewers accept: content types, package rels, presentation,
//! one master, a title layout and a title+body layout, one theme, the
//! slides and docProps.

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

#[derive(Debug, Error)]
pub enum DeckError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Zip error: {0}")]
	Zip(#[from] zip::result::ZipError),
	#[error("XML error: {0}")]
	Xml(String),
}

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const NS_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const CT_PRESENTATION: &str = "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_MASTER: &str = "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str = "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_CORE_PROPS: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_APP_PROPS: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";

const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_SLIDE_MASTER: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

/// All text runs are written at this size, in hundredths of a point.
const FONT_SIZE: &str = "1400"; // 14 pt

/// 4:3 slide surface in EMU, same default python-pptx ships.
const SLIDE_CX: &str = "9144000";
const SLIDE_CY: &str = "6858000";

enum Slide {
	Title { title: String, subtitle: String },
	Content { title: String, bullets: Vec<String> },
}

/// An in-memory deck. Slides are appended in render order and nothing
/// is written until `save`/`write_to`.
pub struct Deck {
	slides: Vec<Slide>,
}

impl Deck {
	pub fn new() -> Self {
		Deck { slides: Vec::new() }
	}

	pub fn add_title_slide(&mut self, title: &str, subtitle: &str) {
		self.slides.push(Slide::Title {
			title: title.to_string(),
			subtitle: subtitle.to_string(),
		});
	}

	pub fn add_content_slide(&mut self, title: &str, bullets: &[String]) {
		self.slides.push(Slide::Content {
			title: title.to_string(),
			bullets: bullets.to_vec(),
		});
	}

	pub fn slide_count(&self) -> usize {
		self.slides.len()
	}

	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DeckError> {
		let file = File::create(path.as_ref())?;
		self.write_to(file)?;
		Ok(())
	}

	/// Write the package and hand the underlying writer back so callers
	/// can reopen in-memory archives.
	pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W, DeckError> {
		let mut zip = ZipWriter::new(writer);
		let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
		let n = self.slides.len();

		zip.start_file("[Content_Types].xml", options)?;
		zip.write_all(content_types_xml(n)?.as_bytes())?;
		zip.start_file("_rels/.rels", options)?;
		zip.write_all(ROOT_RELS.as_bytes())?;
		zip.start_file("docProps/core.xml", options)?;
		zip.write_all(CORE_PROPS_XML.as_bytes())?;
		zip.start_file("docProps/app.xml", options)?;
		zip.write_all(APP_PROPS_XML.as_bytes())?;
		zip.start_file("ppt/presentation.xml", options)?;
		zip.write_all(presentation_xml(n)?.as_bytes())?;
		zip.start_file("ppt/_rels/presentation.xml.rels", options)?;
		zip.write_all(presentation_rels_xml(n)?.as_bytes())?;
		zip.start_file("ppt/slideMasters/slideMaster1.xml", options)?;
		zip.write_all(SLIDE_MASTER_XML.as_bytes())?;
		zip.start_file("ppt/slideMasters/_rels/slideMaster1.xml.rels", options)?;
		zip.write_all(SLIDE_MASTER_RELS.as_bytes())?;
		zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;
		zip.write_all(TITLE_LAYOUT_XML.as_bytes())?;
		zip.start_file("ppt/slideLayouts/slideLayout2.xml", options)?;
		zip.write_all(CONTENT_LAYOUT_XML.as_bytes())?;
		zip.start_file("ppt/slideLayouts/_rels/slideLayout1.xml.rels", options)?;
		zip.write_all(SLIDE_LAYOUT_RELS.as_bytes())?;
		zip.start_file("ppt/slideLayouts/_rels/slideLayout2.xml.rels", options)?;
		zip.write_all(SLIDE_LAYOUT_RELS.as_bytes())?;
		zip.start_file("ppt/theme/theme1.xml", options)?;
		zip.write_all(THEME_XML.as_bytes())?;

		for (i, slide) in self.slides.iter().enumerate() {
			let number = i + 1;
			zip.start_file(format!("ppt/slides/slide{}.xml", number), options)?;
			zip.write_all(slide_xml(slide)?.as_bytes())?;
			zip.start_file(format!("ppt/slides/_rels/slide{}.xml.rels", number), options)?;
			zip.write_all(slide_rels_xml(slide)?.as_bytes())?;
		}

		Ok(zip.finish()?)
	}
}

/// Thin wrapper over the quick-xml writer so each caller does not have
/// to repeat the error mapping on every event.
struct Xml {
	writer: Writer<Cursor<Vec<u8>>>,
}

impl Xml {
	fn new() -> Result<Self, DeckError> {
		let mut writer = Writer::new(Cursor::new(Vec::new()));
		writer
			.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
			.map_err(|e| DeckError::Xml(e.to_string()))?;
		Ok(Xml { writer })
	}

	fn elem(name: &str, attrs: &[(&str, &str)]) -> BytesStart<'static> {
		let mut elem = BytesStart::new(name.to_string());
		for (key, value) in attrs {
			elem.push_attribute((*key, *value));
		}
		elem
	}

	fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), DeckError> {
		self.writer
			.write_event(Event::Start(Self::elem(name, attrs)))
			.map_err(|e| DeckError::Xml(e.to_string()))
	}

	fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), DeckError> {
		self.writer
			.write_event(Event::Empty(Self::elem(name, attrs)))
			.map_err(|e| DeckError::Xml(e.to_string()))
	}

	fn end(&mut self, name: &str) -> Result<(), DeckError> {
		self.writer
			.write_event(Event::End(BytesEnd::new(name.to_string())))
			.map_err(|e| DeckError::Xml(e.to_string()))
	}

	fn text(&mut self, content: &str) -> Result<(), DeckError> {
		self.writer
			.write_event(Event::Text(BytesText::new(content)))
			.map_err(|e| DeckError::Xml(e.to_string()))
	}

	fn finish(self) -> Result<String, DeckError> {
		let bytes = self.writer.into_inner().into_inner();
		String::from_utf8(bytes).map_err(|e| DeckError::Xml(e.to_string()))
	}
}

fn content_types_xml(num_slides: usize) -> Result<String, DeckError> {
	let mut xml = Xml::new()?;
	xml.start("Types", &[("xmlns", NS_CT)])?;
	xml.empty("Default", &[("Extension", "rels"), ("ContentType", "application/vnd.openxmlformats-package.relationships+xml")])?;
	xml.empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])?;
	for (part, content_type) in [
		("/ppt/presentation.xml", CT_PRESENTATION),
		("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER),
		("/ppt/slideLayouts/slideLayout1.xml", CT_SLIDE_LAYOUT),
		("/ppt/slideLayouts/slideLayout2.xml", CT_SLIDE_LAYOUT),
		("/ppt/theme/theme1.xml", CT_THEME),
		("/docProps/core.xml", CT_CORE_PROPS),
		("/docProps/app.xml", CT_APP_PROPS),
	] {
		xml.empty("Override", &[("PartName", part), ("ContentType", content_type)])?;
	}
	for number in 1..=num_slides {
		let part = format!("/ppt/slides/slide{}.xml", number);
		xml.empty("Override", &[("PartName", &part), ("ContentType", CT_SLIDE)])?;
	}
	xml.end("Types")?;
	xml.finish()
}

fn presentation_xml(num_slides: usize) -> Result<String, DeckError> {
	let mut xml = Xml::new()?;
	xml.start("p:presentation", &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)])?;
	xml.start("p:sldMasterIdLst", &[])?;
	xml.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
	xml.end("p:sldMasterIdLst")?;
	if num_slides > 0 {
		xml.start("p:sldIdLst", &[])?;
		for number in 1..=num_slides {
			// Slide ids start at 256 by OOXML convention; rId1 is the master.
			let id = (255 + number).to_string();
			let r_id = format!("rId{}", number + 1);
			xml.empty("p:sldId", &[("id", &id), ("r:id", &r_id)])?;
		}
		xml.end("p:sldIdLst")?;
	}
	xml.empty("p:sldSz", &[("cx", SLIDE_CX), ("cy", SLIDE_CY)])?;
	xml.empty("p:notesSz", &[("cx", SLIDE_CY), ("cy", SLIDE_CX)])?;
	xml.end("p:presentation")?;
	xml.finish()
}

fn presentation_rels_xml(num_slides: usize) -> Result<String, DeckError> {
	let mut xml = Xml::new()?;
	xml.start("Relationships", &[("xmlns", NS_REL)])?;
	xml.empty("Relationship", &[
		("Id", "rId1"),
		("Type", REL_SLIDE_MASTER),
		("Target", "slideMasters/slideMaster1.xml"),
	])?;
	for number in 1..=num_slides {
		let r_id = format!("rId{}", number + 1);
		let target = format!("slides/slide{}.xml", number);
		xml.empty("Relationship", &[("Id", &r_id), ("Type", REL_SLIDE), ("Target", &target)])?;
	}
	xml.end("Relationships")?;
	xml.finish()
}

fn slide_rels_xml(slide: &Slide) -> Result<String, DeckError> {
	let layout = match slide {
		Slide::Title { .. } => "../slideLayouts/slideLayout1.xml",
		Slide::Content { .. } => "../slideLayouts/slideLayout2.xml",
	};
	let mut xml = Xml::new()?;
	xml.start("Relationships", &[("xmlns", NS_REL)])?;
	xml.empty("Relationship", &[
		("Id", "rId1"),
		("Type", "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout"),
		("Target", layout),
	])?;
	xml.end("Relationships")?;
	xml.finish()
}

fn slide_xml(slide: &Slide) -> Result<String, DeckError> {
	let mut xml = Xml::new()?;
	xml.start("p:sld", &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)])?;
	xml.start("p:cSld", &[])?;
	xml.start("p:spTree", &[])?;
	xml.start("p:nvGrpSpPr", &[])?;
	xml.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
	xml.empty("p:cNvGrpSpPr", &[])?;
	xml.empty("p:nvPr", &[])?;
	xml.end("p:nvGrpSpPr")?;
	xml.empty("p:grpSpPr", &[])?;
	match slide {
		Slide::Title { title, subtitle } => {
			write_placeholder(&mut xml, "2", "Title 1", "ctrTitle", None, std::slice::from_ref(title))?;
			write_placeholder(&mut xml, "3", "Subtitle 2", "subTitle", Some("1"), std::slice::from_ref(subtitle))?;
		}
		Slide::Content { title, bullets } => {
			write_placeholder(&mut xml, "2", "Title 1", "title", None, std::slice::from_ref(title))?;
			write_placeholder(&mut xml, "3", "Content Placeholder 2", "body", Some("1"), bullets)?;
		}
	}
	xml.end("p:spTree")?;
	xml.end("p:cSld")?;
	xml.start("p:clrMapOvr", &[])?;
	xml.empty("a:masterClrMapping", &[])?;
	xml.end("p:clrMapOvr")?;
	xml.end("p:sld")?;
	xml.finish()
}

/// One placeholder shape with one paragraph per entry in `paragraphs`,
/// every run at the fixed 14 pt size. An empty `paragraphs` still emits
/// one empty paragraph, a text body may not have zero of them.
fn write_placeholder(
	xml: &mut Xml,
	id: &str,
	name: &str,
	ph_type: &str,
	ph_idx: Option<&str>,
	paragraphs: &[String],
) -> Result<(), DeckError> {
	xml.start("p:sp", &[])?;
	xml.start("p:nvSpPr", &[])?;
	xml.empty("p:cNvPr", &[("id", id), ("name", name)])?;
	xml.start("p:cNvSpPr", &[])?;
	xml.empty("a:spLocks", &[("noGrp", "1")])?;
	xml.end("p:cNvSpPr")?;
	xml.start("p:nvPr", &[])?;
	match ph_idx {
		Some(idx) => xml.empty("p:ph", &[("type", ph_type), ("idx", idx)])?,
		None => xml.empty("p:ph", &[("type", ph_type)])?,
	}
	xml.end("p:nvPr")?;
	xml.end("p:nvSpPr")?;
	xml.empty("p:spPr", &[])?;
	xml.start("p:txBody", &[])?;
	xml.empty("a:bodyPr", &[])?;
	xml.empty("a:lstStyle", &[])?;
	if paragraphs.is_empty() {
		xml.empty("a:p", &[])?;
	}
	for paragraph in paragraphs {
		xml.start("a:p", &[])?;
		xml.start("a:r", &[])?;
		xml.empty("a:rPr", &[("lang", "en-US"), ("sz", FONT_SIZE), ("dirty", "0")])?;
		xml.start("a:t", &[])?;
		xml.text(paragraph)?;
		xml.end("a:t")?;
		xml.end("a:r")?;
		xml.end("a:p")?;
	}
	xml.end("p:txBody")?;
	xml.end("p:sp")?;
	Ok(())
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>
"#;

const CORE_PROPS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<dc:creator>pptgen</dc:creator>
<cp:lastModifiedBy>pptgen</cp:lastModifiedBy>
</cp:coreProperties>
"#;

const APP_PROPS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
<Application>pptgen</Application>
</Properties>
"#;

const SLIDE_MASTER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:cSld>
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr/>
</p:spTree>
</p:cSld>
<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
<p:sldLayoutIdLst>
<p:sldLayoutId id="2147483649" r:id="rId1"/>
<p:sldLayoutId id="2147483650" r:id="rId2"/>
</p:sldLayoutIdLst>
</p:sldMaster>
"#;

const SLIDE_MASTER_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout2.xml"/>
<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>
</Relationships>
"#;

const SLIDE_LAYOUT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>
"#;

// Placeholder geometry matches the stock 4:3 title and title+body
// layouts so inheriting slides get sensible frames.
const TITLE_LAYOUT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="title">
<p:cSld name="Title Slide">
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr/>
<p:sp>
<p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="ctrTitle"/></p:nvPr></p:nvSpPr>
<p:spPr><a:xfrm><a:off x="685800" y="2130425"/><a:ext cx="7772400" cy="1470025"/></a:xfrm></p:spPr>
<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody>
</p:sp>
<p:sp>
<p:nvSpPr><p:cNvPr id="3" name="Subtitle 2"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="subTitle" idx="1"/></p:nvPr></p:nvSpPr>
<p:spPr><a:xfrm><a:off x="1371600" y="3886200"/><a:ext cx="6400800" cy="1752600"/></a:xfrm></p:spPr>
<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody>
</p:sp>
</p:spTree>
</p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>
"#;

const CONTENT_LAYOUT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="obj">
<p:cSld name="Title and Content">
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr/>
<p:sp>
<p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>
<p:spPr><a:xfrm><a:off x="457200" y="274638"/><a:ext cx="8229600" cy="1143000"/></a:xfrm></p:spPr>
<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody>
</p:sp>
<p:sp>
<p:nvSpPr><p:cNvPr id="3" name="Content Placeholder 2"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr>
<p:spPr><a:xfrm><a:off x="457200" y="1600200"/><a:ext cx="8229600" cy="4525963"/></a:xfrm></p:spPr>
<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody>
</p:sp>
</p:spTree>
</p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>
"#;

const THEME_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">
<a:themeElements>
<a:clrScheme name="Office">
<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
<a:dk2><a:srgbClr val="44546A"/></a:dk2>
<a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
<a:accent1><a:srgbClr val="4472C4"/></a:accent1>
<a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
<a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
<a:accent4><a:srgbClr val="FFC000"/></a:accent4>
<a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
<a:accent6><a:srgbClr val="70AD47"/></a:accent6>
<a:hlink><a:srgbClr val="0563C1"/></a:hlink>
<a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
</a:clrScheme>
<a:fontScheme name="Office">
<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
</a:fontScheme>
<a:fmtScheme name="Office">
<a:fillStyleLst>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
</a:fillStyleLst>
<a:lnStyleLst>
<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
</a:lnStyleLst>
<a:effectStyleLst>
<a:effectStyle><a:effectLst/></a:effectStyle>
<a:effectStyle><a:effectLst/></a:effectStyle>
<a:effectStyle><a:effectLst/></a:effectStyle>
</a:effectStyleLst>
<a:bgFillStyleLst>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
</a:bgFillStyleLst>
</a:fmtScheme>
</a:themeElements>
</a:theme>
"#;
