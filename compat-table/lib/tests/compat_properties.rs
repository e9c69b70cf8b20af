//! Property-based tests for table shape and dialog wiring.

use std::collections::{HashMap, HashSet};

use compat_table::CompatibilityBlockProcessor;
use compat_table::html::Element;
use compat_table::markdown::IdGenerator;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

const FEATURES: &[&str] = &["pipes", "signals", "epoll", "kqueue", "mmap", "fork"];
const SUPPORT: &[&str] = &["full", "partial", "deprecated", "experimental", "bogus", ""];

#[derive(Debug, Clone)]
struct Record {
    feature: &'static str,
    support: &'static str,
    version: Option<String>,
    timeline_len: usize,
}

fn record() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(FEATURES),
        prop::sample::select(SUPPORT),
        prop::option::of("[0-9]{1,2}\\.[0-9]"),
        0usize..3,
    )
        .prop_map(|(feature, support, version, timeline_len)| Record {
            feature,
            support,
            version,
            timeline_len,
        })
}

fn payload() -> impl Strategy<Value = Vec<(String, Vec<Record>)>> {
    prop::collection::btree_map("[A-Z][a-z]{2,7}", prop::collection::vec(record(), 0..6), 0..5)
        .prop_map(|platforms| platforms.into_iter().collect())
}

fn to_json(platforms: &[(String, Vec<Record>)]) -> String {
    let mut object = Map::new();
    for (platform, records) in platforms {
        let list: Vec<Value> = records
            .iter()
            .map(|r| {
                let mut value = json!({"feature": r.feature, "support": r.support});
                if let Some(version) = &r.version {
                    value["version"] = json!(version);
                }
                let timeline: Vec<Value> = (0..r.timeline_len)
                    .map(|i| json!([i == 0, format!("step {}", i), ""]))
                    .collect();
                value["timeline"] = Value::Array(timeline);
                value
            })
            .collect();
        object.insert(platform.clone(), Value::Array(list));
    }
    Value::Object(object).to_string()
}

fn render(platforms: &[(String, Vec<Record>)]) -> Element {
    let block = format!("{{{{{{compatibility:\n{}\n}}}}}}", to_json(platforms));
    let mut ids = IdGenerator::for_document(&block);
    CompatibilityBlockProcessor::default().render(&block, &mut ids)
}

fn body_rows(block: &Element) -> Vec<&Element> {
    block.find_by_tag("tbody")[0].child_elements().collect()
}

proptest! {
    #[test]
    fn prop_row_count_is_distinct_features(platforms in payload()) {
        let block = render(&platforms);
        let distinct: HashSet<_> = platforms
            .iter()
            .flat_map(|(_, records)| records.iter().map(|r| r.feature))
            .collect();
        prop_assert_eq!(body_rows(&block).len(), distinct.len());
    }

    #[test]
    fn prop_every_row_has_one_cell_per_platform(platforms in payload()) {
        let block = render(&platforms);
        for row in body_rows(&block) {
            prop_assert_eq!(row.child_elements().count(), 1 + platforms.len());
        }
    }

    #[test]
    fn prop_triggers_follow_last_record_timeline(platforms in payload()) {
        let block = render(&platforms);

        let mut last: HashMap<(&str, &str), &Record> = HashMap::new();
        for (platform, records) in &platforms {
            for r in records {
                last.insert((platform.as_str(), r.feature), r);
            }
        }
        let expected = last.values().filter(|r| r.timeline_len > 0).count();

        prop_assert_eq!(block.find_by_class("compat-table-more").len(), expected);
        prop_assert_eq!(block.find_by_class("compat-dialog").len(), expected);
    }

    #[test]
    fn prop_dialog_ids_are_unique(platforms in payload()) {
        let block = render(&platforms);
        let ids: Vec<_> = block
            .find_by_class("compat-dialog")
            .iter()
            .filter_map(|d| d.attr("id"))
            .collect();
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn prop_legend_always_has_six_entries(platforms in payload()) {
        let block = render(&platforms);
        prop_assert_eq!(block.find_by_class("compat-table-legend").len(), 1);
        prop_assert_eq!(block.find_by_class("compat-table-legend-item").len(), 6);
    }

    #[test]
    fn prop_arbitrary_block_text_never_panics(body in "\\PC{0,200}") {
        let block = format!("{{{{{{compatibility:\n{}", body);
        let mut ids = IdGenerator::for_document(&block);
        let rendered = CompatibilityBlockProcessor::default().render(&block, &mut ids);
        let has_table = !rendered.find_by_class("compat-table").is_empty();
        let has_notice = !rendered.find_by_tag("em").is_empty();
        prop_assert!(has_table ^ has_notice);
    }
}
