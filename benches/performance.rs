use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tabsplit::{split_receipt, Item, Receipt, TipSpec};

fn build_sample_receipt(item_count: usize, people: usize) -> Receipt {
    let names: Vec<String> = (0..people).map(|idx| format!("guest-{idx:03}")).collect();
    let items = (0..item_count)
        .map(|idx| {
            let attendees = names
                .iter()
                .skip(idx % people)
                .take(1 + idx % 4)
                .cloned()
                .collect::<Vec<_>>();
            Item::new(format!("dish-{idx}"), 5.0 + (idx % 40) as f64, attendees)
                .with_quantity((idx % 3) as u32)
        })
        .collect();
    Receipt::new(items)
        .with_tax(42.0)
        .with_surcharge(7.5)
        .with_tip(TipSpec::Percent(18.0))
}

fn bench_split(c: &mut Criterion) {
    let receipt = build_sample_receipt(10_000, 200);

    c.bench_function("split_10k_items", |b| {
        b.iter(|| {
            let report = split_receipt(black_box(&receipt)).expect("split");
            black_box(report);
        })
    });
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
