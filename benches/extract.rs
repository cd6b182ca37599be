use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pollen::extract_records;

const CATEGORIES: [(&str, &str); 6] = [
    ("Tree Pollen", "Low"),
    ("Grass Pollen", "Moderate"),
    ("Ragweed Pollen", "High"),
    ("Mold", "Very High"),
    ("Dust &amp; Dander", "Low"),
    ("UV Index", "High"),
];

fn health_page() -> String {
    let mut html = String::from("<html><head><title>Leiden</title></head><body>");
    for _ in 0..20 {
        for (name, status) in CATEGORIES {
            html.push_str(&format!(
                r#"<a href="/en/nl/leiden/251527/x" class="index-list-card ">
                    <div class="index-name" data-qa="name">{name}</div>
                    <div class="index-status"><div class="index-status-text">{status}</div></div>
                </a>"#
            ));
        }
        html.push_str(&"<p>filler markup</p>".repeat(50));
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let html = health_page();
    c.bench_function("extract_records", |b| {
        b.iter(|| extract_records(black_box(&html)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
