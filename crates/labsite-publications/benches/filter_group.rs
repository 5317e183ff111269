use labsite_publications::{
    EngineConfig, FilterCriteria, GroupBy, PublicationRecord, apply_filters, build_year_options,
    group_and_order,
};

const TAGS: [&str; 5] = ["complex-activity", "biomedical", "materials", "wildlife", "geospatial"];
const CATEGORIES: [&str; 4] = ["recent", "journal", "book", "poster"];

/// Synthetic list roughly the shape of a long-running lab's output
fn synthetic(n: usize) -> Vec<PublicationRecord> {
    (0..n)
        .map(|i| {
            let mut r = PublicationRecord::new(format!("p{i}"), format!("Paper {i}"));
            r.year = (i % 13 != 0).then_some(2000 + (i % 25) as i32);
            r.tags = (i % 4 != 0).then(|| vec![TAGS[i % TAGS.len()].to_string()]);
            r.category = Some(CATEGORIES[i % CATEGORIES.len()].to_string());
            r
        })
        .collect()
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn filter_by_tag_and_year(bencher: divan::Bencher, n: usize) {
    let all = synthetic(n);
    let criteria = FilterCriteria {
        year: Some(2010),
        tag: Some("wildlife".to_string()),
        category: None,
    };
    bencher.bench(|| apply_filters(&all, &criteria).len());
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn group_by_year(bencher: divan::Bencher, n: usize) {
    let all = synthetic(n);
    let refs: Vec<&PublicationRecord> = all.iter().collect();
    let config = EngineConfig::default();
    bencher.bench(|| group_and_order(&refs, &config).len());
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn group_by_category(bencher: divan::Bencher, n: usize) {
    let all = synthetic(n);
    let refs: Vec<&PublicationRecord> = all.iter().collect();
    let config = EngineConfig {
        group_by: GroupBy::Category,
        ..Default::default()
    };
    bencher.bench(|| group_and_order(&refs, &config).len());
}

#[divan::bench(args = [1_000, 10_000])]
fn year_options(bencher: divan::Bencher, n: usize) {
    let all = synthetic(n);
    bencher.bench(|| build_year_options(&all));
}

fn main() {
    divan::main();
}
