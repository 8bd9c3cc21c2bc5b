//! `.docx` text extraction: unzip the package and walk the WordprocessingML parts.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

const MAIN_PART: &str = "word/document.xml";

/// Returns the plain text of the document body, preceded by headers and
/// followed by footers. Paragraphs end with a newline; `<w:tab/>` becomes a tab.
pub fn extract(bytes: &[u8]) -> Result<String, String> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| format!("not a docx package: {e}"))?;

    let mut headers = Vec::new();
    let mut footers = Vec::new();
    for name in archive.file_names() {
        if !name.starts_with("word/") || !name.ends_with(".xml") {
            continue;
        }
        let stem = &name["word/".len()..];
        if stem.starts_with("header") {
            headers.push(name.to_string());
        } else if stem.starts_with("footer") {
            footers.push(name.to_string());
        }
    }
    headers.sort();
    footers.sort();

    let mut text = String::new();
    for part in headers.iter().map(String::as_str) {
        text.push_str(&part_text(&mut archive, part)?);
    }
    text.push_str(&part_text(&mut archive, MAIN_PART)?);
    for part in footers.iter().map(String::as_str) {
        text.push_str(&part_text(&mut archive, part)?);
    }

    Ok(text)
}

fn part_text(archive: &mut ZipArchive<Cursor<&[u8]>>, part: &str) -> Result<String, String> {
    let mut xml = Vec::new();
    archive
        .by_name(part)
        .map_err(|e| format!("missing part {part}: {e}"))?
        .read_to_end(&mut xml)
        .map_err(|e| format!("failed to read {part}: {e}"))?;
    xml_to_text(&xml).map_err(|e| format!("malformed {part}: {e}"))
}

fn xml_to_text(xml: &[u8]) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => text.push_str(&t.unescape()?),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}
