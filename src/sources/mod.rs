//! Site adapters for Israeli news outlets.
//!
//! | Source | Module | Metadata from | Notes |
//! |--------|--------|---------------|-------|
//! | Arutz 7 | [`arutz7`] | HTML | Only `/News/` links count as substories |
//! | Haaretz | [`haaretz`] | HTML | Premium flag from the URL |
//! | Israel Hayom | [`israelhayom`] | HTML | Homepage needs JS; selectors match the server render |
//! | Maariv | [`maariv`] | JSON-LD | Top headline read from the article page |
//! | N12 | [`n12`] | HTML | Published/updated pairs in one element |
//! | 0404 | [`news0404`] | HTML | Links keep their `?p=` query |
//! | News 13 | [`news13`] | HTML | Homepage needs JS |
//! | Walla | [`walla`] | HTML | |
//! | Ynet | [`ynet`] | HTML | Premium paywall marker, feed block page detection |

use crate::error::{Result, ScrapeError};
use crate::source::Source;

pub mod arutz7;
pub mod haaretz;
pub mod israelhayom;
pub mod maariv;
pub mod n12;
pub mod news0404;
pub mod news13;
pub mod walla;
pub mod ynet;

/// Every adapter, in a stable order.
pub fn all() -> Vec<Box<dyn Source>> {
    vec![
        Box::new(arutz7::Arutz7Source),
        Box::new(haaretz::HaaretzSource),
        Box::new(israelhayom::IsraelHayomSource),
        Box::new(maariv::MaarivSource),
        Box::new(n12::N12Source),
        Box::new(news13::News13Source),
        Box::new(news0404::News0404Source),
        Box::new(walla::WallaSource),
        Box::new(ynet::YnetSource),
    ]
}

/// Look up an adapter by its name (`"ynet"`, `"0404"`, ...).
pub fn by_name(name: &str) -> Result<Box<dyn Source>> {
    all()
        .into_iter()
        .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ScrapeError::UnknownSource(name.to_string()))
}

/// Adapters for `names`, or all of them when `names` is empty.
pub fn select(names: &[String]) -> Result<Vec<Box<dyn Source>>> {
    if names.is_empty() {
        return Ok(all());
    }
    names.iter().map(|n| by_name(n)).collect()
}
