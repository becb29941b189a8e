//! Exercise option lists for the logging form.
//!
//! [`resolve`] merges the remote catalog with the user's custom exercises for
//! one muscle group, keeping a previously chosen exercise pinned at the front
//! even when neither source still lists it.

pub mod remote;

use std::collections::HashMap;

use serde::Serialize;

use crate::models::muscle_group;

pub use remote::{CatalogError, NinjaCatalogClient};

/// Where an option came from. A pinned name that also appears in a source
/// takes that source's provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSource {
    Pinned,
    Remote,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogOption {
    pub name: String,
    pub source: OptionSource,
}

/// Insertion-ordered set of names; the first occurrence keeps its slot.
#[derive(Default)]
struct OrderedOptions {
    options: Vec<CatalogOption>,
    index: HashMap<String, usize>,
}

impl OrderedOptions {
    fn insert(&mut self, name: &str, source: OptionSource) {
        if name.is_empty() {
            return;
        }
        match self.index.get(name) {
            Some(&slot) => {
                let option = &mut self.options[slot];
                if option.source == OptionSource::Pinned {
                    option.source = source;
                }
            }
            None => {
                self.index.insert(name.to_string(), self.options.len());
                self.options.push(CatalogOption {
                    name: name.to_string(),
                    source,
                });
            }
        }
    }

    fn into_vec(self) -> Vec<CatalogOption> {
        self.options
    }
}

/// Deduplicated options for `muscle_group`: pinned first, then remote names
/// in order, then custom names in order. The "Other" group has no options.
pub fn resolve(
    muscle_group: &str,
    remote: &[String],
    custom: &[String],
    pinned: Option<&str>,
) -> Vec<CatalogOption> {
    if muscle_group::is_other(muscle_group) {
        return Vec::new();
    }

    let mut options = OrderedOptions::default();

    if let Some(name) = pinned {
        options.insert(name, OptionSource::Pinned);
    }
    for name in remote {
        options.insert(name, OptionSource::Remote);
    }
    for name in custom {
        options.insert(name, OptionSource::Custom);
    }

    options.into_vec()
}

pub fn option_names(options: &[CatalogOption]) -> Vec<&str> {
    options.iter().map(|option| option.name.as_str()).collect()
}
