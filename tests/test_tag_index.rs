use std::collections::BTreeSet;

use proptest::prelude::*;
use starsite::content::{NarrativeRecord, TagIndex};

fn record(index: usize, tags: Vec<String>) -> NarrativeRecord {
    NarrativeRecord {
        identifier: format!("story-{index}"),
        title: format!("Story {index}"),
        tags,
        situation: String::new(),
        task: String::new(),
        action: String::new(),
        result: String::new(),
        short_summary_situation: None,
        short_summary_task: None,
        short_summary_action: None,
        short_summary_result: None,
        published: index % 2 == 0,
        date: "2024-01-01".to_string(),
    }
}

#[test]
fn example_union() {
    let records = vec![
        record(0, vec!["go".into(), "cli".into()]),
        record(1, vec!["go".into(), "web".into()]),
    ];
    assert_eq!(
        TagIndex::from_records(&records).as_slice(),
        ["cli", "go", "web"]
    );
}

proptest! {
    #[test]
    fn tag_index_is_sorted_deduplicated_union(
        tag_lists in prop::collection::vec(
            prop::collection::vec("[a-e]{1,3}", 0..5),
            0..8,
        )
    ) {
        let records: Vec<NarrativeRecord> = tag_lists
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, tags)| record(i, tags))
            .collect();

        let index = TagIndex::from_records(&records);

        let expected: Vec<String> = tag_lists
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(index.as_slice(), expected.as_slice());
        prop_assert!(index.as_slice().windows(2).all(|w| w[0] < w[1]));

        for tags in &tag_lists {
            for tag in tags {
                prop_assert!(index.contains(tag));
            }
        }
    }

    #[test]
    fn tag_index_ignores_record_order(
        mut tag_lists in prop::collection::vec(
            prop::collection::vec("[a-e]{1,3}", 0..5),
            0..8,
        )
    ) {
        let forward: Vec<NarrativeRecord> = tag_lists
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, tags)| record(i, tags))
            .collect();
        tag_lists.reverse();
        let reversed: Vec<NarrativeRecord> = tag_lists
            .into_iter()
            .enumerate()
            .map(|(i, tags)| record(i, tags))
            .collect();

        prop_assert_eq!(
            TagIndex::from_records(&forward),
            TagIndex::from_records(&reversed)
        );
    }
}
