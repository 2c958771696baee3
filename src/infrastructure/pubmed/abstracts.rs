// src/infrastructure/pubmed/abstracts.rs
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

#[derive(Default)]
struct PendingArticle {
    pmid: Option<String>,
    sections: Vec<String>,
}

/// Map each PMID in an `efetch` XML document to its plain-text abstract.
/// Structured abstracts keep their section labels (`METHODS: ...`).
/// Articles without an abstract are absent from the map. Parsing stops at
/// the first malformed element; abstracts read before it are kept.
pub fn extract_abstracts(xml: &str) -> HashMap<String, String> {
    let mut abstracts = HashMap::new();
    let mut reader = Reader::from_str(xml);
    let mut path: Vec<String> = Vec::new();
    let mut article: Option<PendingArticle> = None;
    // Text of the PMID or AbstractText element being read.
    let mut buffer: Option<String> = None;
    let mut label: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let name = element_name(&start);
                match name.as_str() {
                    "PubmedArticle" => article = Some(PendingArticle::default()),
                    "PMID"
                        if parent_is(&path, "MedlineCitation")
                            && article.as_ref().is_some_and(|a| a.pmid.is_none()) =>
                    {
                        buffer = Some(String::new());
                    }
                    "AbstractText" if parent_is(&path, "Abstract") && article.is_some() => {
                        label = section_label(&start);
                        buffer = Some(String::new());
                    }
                    _ => {}
                }
                path.push(name);
            }
            Ok(Event::Text(text)) => {
                if let Some(buffer) = buffer.as_mut() {
                    match text.unescape() {
                        Ok(decoded) => buffer.push_str(&decoded),
                        Err(err) => {
                            tracing::debug!(error = %err, "keeping undecodable text as is");
                            buffer.push_str(&String::from_utf8_lossy(&text));
                        }
                    }
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(buffer) = buffer.as_mut() {
                    buffer.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Ok(Event::End(_)) => {
                let Some(name) = path.pop() else {
                    continue;
                };
                match name.as_str() {
                    "PMID" => {
                        if let (Some(text), Some(current)) = (buffer.take(), article.as_mut()) {
                            let pmid = collapse_whitespace(&text);
                            if !pmid.is_empty() {
                                current.pmid = Some(pmid);
                            }
                        }
                    }
                    "AbstractText" => {
                        if let (Some(text), Some(current)) = (buffer.take(), article.as_mut()) {
                            let body = collapse_whitespace(&text);
                            match label.take() {
                                _ if body.is_empty() => {}
                                Some(label) if !label.is_empty() => {
                                    current.sections.push(format!("{label}: {body}"))
                                }
                                _ => current.sections.push(body),
                            }
                        }
                    }
                    "PubmedArticle" => match article.take() {
                        Some(PendingArticle {
                            pmid: Some(pmid),
                            sections,
                        }) if !sections.is_empty() => {
                            abstracts.entry(pmid).or_insert_with(|| sections.join(" "));
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    position = reader.buffer_position(),
                    "efetch xml is malformed"
                );
                break;
            }
            Ok(_) => {}
        }
    }
    abstracts
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn parent_is(path: &[String], name: &str) -> bool {
    path.last().is_some_and(|parent| parent == name)
}

fn section_label(start: &BytesStart<'_>) -> Option<String> {
    let attribute = start.try_get_attribute("Label").ok().flatten()?;
    let value = attribute.unescape_value().ok()?;
    Some(value.trim().to_string())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
