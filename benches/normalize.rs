// benches/normalize.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use fire_scrape::{
    config::options::GeocodeTarget,
    geocode::NullGeocoder,
    incident::RawIncidentRow,
    normalize,
    specs::listing,
};

fn sample_rows() -> Vec<RawIncidentRow> {
    (0..200)
        .map(|i| RawIncidentRow {
            name: format!("Fire {i}:\u{a0} more info..."),
            time: "Updated: October 30, 2018 10:18  am".to_string(),
            county: "Tulare County\u{a0}\u{a0}, CA".to_string(),
            location: "Road 208 and Avenue 380, 5 miles north of Woodlake  ".to_string(),
            acres_containment: if i % 3 == 0 {
                "TBD".to_string()
            } else {
                format!("{} acres -  {}% contained", i * 10, i % 101)
            },
        })
        .collect()
}

fn sample_page() -> String {
    let mut doc = String::from(r#"<table class="incident_table"><tr><td>Legend</td></tr></table>"#);
    for i in 0..5 {
        doc.push_str(&format!(
            r#"<table class="incident_table">
                <tr><td>Fire {i}:&nbsp; <a>more info...</a></td><td>Updated: October 30, 2018 10:18 am</td></tr>
                <tr><td>County:</td><td>Tulare County&nbsp;</td></tr>
                <tr><td>Location:</td><td>Road 208</td></tr>
                <tr><td>Acres:</td><td>120 acres - 100% contained</td></tr>
            </table>"#
        ));
    }
    doc
}

fn bench_normalize(c: &mut Criterion) {
    let rows = sample_rows();
    let page = sample_page();

    c.bench_function("normalize_rows", |b| {
        b.iter(|| {
            let mut geo = NullGeocoder;
            let n = black_box(&rows)
                .iter()
                .filter_map(|r| normalize::normalize_row(r, &mut geo, GeocodeTarget::County).ok())
                .count();
            black_box(n)
        })
    });

    c.bench_function("parse_listing_page", |b| {
        b.iter(|| {
            let tables = listing::parse_incident_tables(black_box(&page), 1);
            black_box(tables.len())
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
