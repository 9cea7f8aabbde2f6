//! About-section collection.
//!
//! "About this place" data is grouped into sections (accessibility,
//! amenities, payments, ...), each holding boolean options whose enabled flag
//! sits several levels deeper than the option name.

use super::path;
use crate::types::{AboutOption, AboutSection};
use serde_json::Value;

const ABOUT_ITEMS: &[usize] = &[100, 1];

/// Option enabled flag, relative to the option node: integer 1 means enabled.
const OPTION_ENABLED: &[usize] = &[2, 1, 0, 0];

/// Collects the about sections. Options whose name resolves empty are
/// dropped; sections are kept even with zero options, including sections
/// whose node is malformed (they surface with empty id and name).
pub(super) fn about_sections(data: &[Value]) -> Vec<AboutSection> {
    path::sequence(data, ABOUT_ITEMS)
        .iter()
        .map(|section| {
            let section = path::as_sequence(section);
            let options = path::sequence(section, &[2])
                .iter()
                .filter_map(|option| {
                    let option = path::as_sequence(option);
                    let name = path::field::<String>(option, &[1]);
                    let enabled = path::field::<i64>(option, OPTION_ENABLED) == 1;

                    (!name.is_empty()).then_some(AboutOption { name, enabled })
                })
                .collect();

            AboutSection {
                id: path::field::<String>(section, &[0]),
                name: path::field::<String>(section, &[1]),
                options,
            }
        })
        .collect()
}
