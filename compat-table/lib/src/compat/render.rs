//! HTML generation for the compatibility table, detail dialogs and legend.

use crate::html::Element;
use crate::markdown::IdGenerator;

use super::icons::{Icon, IconSet};
use super::pivot::PivotTable;
use super::types::{SupportEntry, SupportLevel, TimelineEntry};

/// Namespace for dialog identifiers.
const DIALOG_ID_NAMESPACE: &str = "compat-dialog";

/// Legend entries, in display order.
pub const LEGEND: [(Icon, &str); 6] = [
    (Icon::Full, "Full support."),
    (Icon::Partial, "Partial support."),
    (Icon::NoSupport, "No support."),
    (Icon::Deprecated, "Deprecated. Do not use in new scripts."),
    (
        Icon::Experimental,
        "Experimental. Expect behavior to change in the future.",
    ),
    (Icon::Dots, "See implementation notes."),
];

/// Heading emitted above every block.
pub fn generate_heading(text: &str, level: u8) -> Element {
    let mut heading = Element::new(format!("h{}", level.clamp(1, 6)));
    heading.push_text(text);
    heading
}

/// Inline notice shown instead of the table when the payload cannot be decoded.
pub fn generate_error_notice(detail: &str) -> Element {
    let mut notice = Element::new("p");
    notice
        .sub_element("em")
        .push_text(format!("Invalid compatibility JSON: {}", detail));
    notice
}

/// Builds the compatibility table for a pivoted payload.
///
/// Every row has one label cell followed by one status cell per platform.
/// Cells whose entry has a timeline get a trigger button and their own dialog.
pub fn generate_table(pivot: &PivotTable, icons: &dyn IconSet, ids: &mut IdGenerator) -> Element {
    let mut table = Element::new("table").with_class("compat-table");

    let header = table.sub_element("thead").sub_element("tr");
    header.sub_element("th");
    for platform in pivot.platforms() {
        header
            .sub_element("th")
            .set_attr("class", "compat-table-system")
            .set_attr("scope", "col")
            .push_text(platform.as_str());
    }

    let body = table.sub_element("tbody");
    for row in pivot.rows() {
        let tr = body.sub_element("tr");
        tr.sub_element("th")
            .set_attr("scope", "row")
            .push_text(row.feature.as_str());

        for platform in pivot.platforms() {
            let cell = generate_cell(&row.feature, platform, row.cell(platform), icons, ids);
            tr.push(cell);
        }
    }

    tracing::debug!(
        platforms = pivot.platforms().len(),
        features = pivot.rows().len(),
        "Generated compatibility table"
    );

    table
}

/// One status cell. `entry` is `None` when the platform does not list the feature.
fn generate_cell(
    feature: &str,
    platform: &str,
    entry: Option<&SupportEntry>,
    icons: &dyn IconSet,
    ids: &mut IdGenerator,
) -> Element {
    let support = entry.map(|e| e.support).unwrap_or(SupportLevel::None);
    let label = entry.map(SupportEntry::label).unwrap_or(support.default_label());

    let mut td = Element::new("td").with_class(format!("compat-table-item {}", support.css_class()));
    td.push(icons.icon(support.icon()));
    td.sub_element("span").push_text(label);

    if let Some(entry) = entry.filter(|e| e.has_timeline()) {
        let dialog_id = ids.next_id(DIALOG_ID_NAMESPACE);
        tracing::trace!(feature, platform, id = %dialog_id, "Attaching timeline dialog");

        let trigger = td
            .sub_element("button")
            .set_attr("type", "button")
            .set_attr("class", "compat-table-more")
            .set_attr("title", "Implementation notes")
            .set_attr("aria-haspopup", "dialog")
            .set_attr("aria-controls", dialog_id.as_str())
            .set_attr(
                "onclick",
                format!("document.getElementById('{}').showModal()", dialog_id),
            );
        trigger.push(icons.icon(Icon::Dots));

        td.push(generate_compat_item(feature, platform, &entry.timeline, &dialog_id, icons));
    }

    td
}

/// Builds the closed detail dialog for one feature/platform pair.
pub fn generate_compat_item(
    feature: &str,
    platform: &str,
    timeline: &[TimelineEntry],
    dialog_id: &str,
    icons: &dyn IconSet,
) -> Element {
    let title = format!("{} ({})", feature, platform);
    let mut dialog = Element::new("dialog")
        .with_attr("id", dialog_id)
        .with_class("compat-dialog")
        .with_attr("aria-label", title.as_str());

    let topbar = dialog.sub_element("div").set_attr("class", "compat-dialog-topbar");
    topbar.sub_element("h4").push_text(title);
    topbar
        .sub_element("form")
        .set_attr("method", "dialog")
        .sub_element("button")
        .set_attr("type", "submit")
        .set_attr("aria-label", "Close")
        .push_text("\u{2715}");

    let list = dialog.sub_element("dl");
    for entry in timeline {
        let marker = if entry.milestone { Icon::Disc } else { Icon::SemiDisc };
        list.sub_element("dt")
            .set_attr("class", "compat-table-dt")
            .push(icons.icon(marker));

        let dd = list.sub_element("dd");
        if !entry.label.is_empty() {
            dd.sub_element("strong").push_text(entry.label.as_str());
            dd.push_text(" ");
        }
        dd.push_text(entry.description.as_str());
    }

    dialog
}

/// The fixed six-entry legend.
pub fn generate_legend(icons: &dyn IconSet) -> Element {
    let mut legend = Element::new("div").with_class("compat-table-legend");
    for (icon, text) in LEGEND {
        let item = legend
            .sub_element("div")
            .set_attr("class", "compat-table-legend-item");
        item.push(icons.icon(icon));
        item.sub_element("span").push_text(text);
    }
    legend
}
