//! RSS feed parsing.
//!
//! Feeds differ per site in which element carries the guid, the tags and the
//! timestamps (`pubDate`, `dc:created`, `UpdateDate`, ...). The parser
//! therefore collects every child element of an `<item>` by qualified name
//! into a [`RawFeedItem`], and [`parse_feed`] maps those onto [`FeedItem`]
//! using the source's [`FeedSpec`](crate::source::FeedSpec).

use crate::error::{Result, ScrapeError};
use crate::models::FeedItem;
use crate::source::Source;
use crate::timestamps::parse_timestamp;
use crate::utils::resolve_link;
use chrono::NaiveDateTime;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Child element texts of one `<item>`, keyed by qualified element name.
#[derive(Debug, Default, Clone)]
pub struct RawFeedItem {
    fields: BTreeMap<String, Vec<String>>,
}

impl RawFeedItem {
    pub fn push(&mut self, name: &str, value: &str) {
        self.fields
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// First value of `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Every value of `name`, in document order.
    pub fn all(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Split a feed document into raw items.
pub fn parse_items(xml: &str) -> Result<Vec<RawFeedItem>> {
    let mut reader = Reader::from_str(xml);

    let mut items = Vec::new();
    let mut current_item: Option<RawFeedItem> = None;
    let mut current_element: Option<String> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "item" {
                    current_item = Some(RawFeedItem::default());
                } else if current_item.is_some() {
                    current_element = Some(name);
                    text.clear();
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "item" {
                    if let Some(item) = current_item.take() {
                        items.push(item);
                    }
                } else if let (Some(item), Some(element)) =
                    (current_item.as_mut(), current_element.take())
                {
                    let value = text.trim();
                    if !value.is_empty() {
                        item.push(&element, value);
                    }
                    text.clear();
                }
            }
            Ok(Event::Text(t)) => {
                if current_element.is_some() {
                    text.push_str(&String::from_utf8_lossy(&t));
                }
            }
            Ok(Event::CData(c)) => {
                if current_element.is_some() {
                    text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Ok(Event::GeneralRef(r)) => {
                if current_element.is_some() {
                    resolve_reference(&String::from_utf8_lossy(&r), &mut text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ScrapeError::Feed(format!(
                    "XML parse error at {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    debug!(count = items.len(), "Parsed raw feed items");
    Ok(items)
}

/// Append the expansion of an entity reference (`amp`, `#1488`, `#x5D0`).
/// Unknown references are kept verbatim.
fn resolve_reference(name: &str, out: &mut String) {
    let ch = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    };

    match (ch, resolve_predefined_entity(name)) {
        (Some(c), _) => out.push(c),
        (None, Some(s)) => out.push_str(s),
        (None, None) => {
            out.push('&');
            out.push_str(name);
            out.push(';');
        }
    }
}

fn item_timestamp(
    item: &RawFeedItem,
    tag: Option<&str>,
    format: &str,
    source_name: &str,
) -> Option<NaiveDateTime> {
    let raw = item.first(tag?)?;
    match parse_timestamp(raw, format) {
        Ok(ts) => Some(ts),
        Err(e) => {
            warn!(source = source_name, error = %e, "Unparseable feed timestamp");
            None
        }
    }
}

/// Parse a source's feed body into normalized items.
pub fn parse_feed(source: &dyn Source, body: &str) -> Result<Vec<FeedItem>> {
    source.check_feed_error(body)?;

    let info = source.info();
    let spec = &info.feed;
    let root = source.root_url()?;

    let items = parse_items(body)?
        .into_iter()
        .map(|raw| {
            let link = raw.first("link").map(|href| {
                resolve_link(&root, href, info.include_query_string)
                    .map(|u| u.to_string())
                    .unwrap_or_else(|_| href.to_string())
            });
            FeedItem {
                guid: raw.first(spec.guid_tag).map(str::to_string),
                link,
                title: raw.first("title").map(str::to_string),
                published: item_timestamp(
                    &raw,
                    Some(spec.created_tag),
                    spec.datetime_format,
                    info.name,
                ),
                modified: item_timestamp(&raw, spec.modified_tag, spec.datetime_format, info.name),
                tags: source.feed_item_tags(&raw),
            }
        })
        .collect();

    Ok(items)
}
