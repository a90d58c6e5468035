// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `propstyle` + `propstyle_components`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;

use propstyle::{Composer, PropRegistry, Props, Rule, compose, resolve, specs};
use propstyle_components::Component;
use propstyle_theme::{PropValue, Scalar, ScaleKey, Theme};

fn bench_resolve(c: &mut Criterion) {
    let theme = Theme::default();
    let space = theme.scale(ScaleKey::SPACE);

    let mut group = c.benchmark_group("propstyle/resolve");
    group.bench_function("scale_index", |b| {
        let value = Scalar::from(3);
        b.iter(|| {
            black_box(resolve(
                &value,
                space,
                Some(propstyle::negative_space),
                propstyle::Unit::Px,
            ))
        });
    });
    group.bench_function("fraction", |b| {
        let value = Scalar::from(0.5);
        b.iter(|| black_box(resolve(&value, None, Some(propstyle::fraction), propstyle::Unit::Px)));
    });
    group.bench_function("pass_through", |b| {
        let value = Scalar::from("tomato");
        b.iter(|| black_box(resolve(&value, None, None, propstyle::Unit::None)));
    });
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let theme = Theme::default();
    let registry = PropRegistry::standard();

    let mut group = c.benchmark_group("propstyle/compose");

    group.bench_function("flat", |b| {
        let props = Props::new()
            .set("p", 3)
            .set("mx", -2)
            .set("bg", "tomato")
            .set("color", "white")
            .set("width", 0.5);
        b.iter(|| black_box(compose(&props, &theme, registry)));
    });

    for count in [1_usize, 3, 8] {
        group.bench_with_input(BenchmarkId::new("responsive", count), &count, |b, &count| {
            let values = (0..=count).map(|i| Some(Scalar::from(i32::try_from(i).unwrap_or(0))));
            let props = Props::new()
                .set("p", PropValue::array(values.clone()))
                .set("m", PropValue::array(values));
            b.iter(|| black_box(compose(&props, &theme, registry)));
        });
    }

    group.bench_function("theme_override", |b| {
        let props = Props::from_json(&json!({
            "variant": "primary",
            "theme": { "buttons": { "primary": { "bg": "tomato", "borderRadius": 9999 } } }
        }))
        .unwrap();
        let composer = Composer::new(registry).variant_group("buttons");
        b.iter_batched(
            || props.clone(),
            |props| black_box(composer.compose(&props, &theme)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let theme = Theme::default();
    let props = Props::new()
        .set("p", PropValue::array([Some(Scalar::from(2)), Some(Scalar::from(3))]))
        .set("mr", 3)
        .set("onClick", "save");

    let mut group = c.benchmark_group("propstyle/render");
    for component in Component::ALL {
        group.bench_function(component.name(), |b| {
            b.iter(|| black_box(component.render(&props, &theme)));
        });
    }

    group.bench_function("emit", |b| {
        let element = Component::Button.render(&props, &theme);
        b.iter(|| {
            let mut rules: Vec<Rule> = Vec::new();
            element.style.emit(theme.breakpoints(), &mut rules);
            black_box(rules)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_compose, bench_components);
criterion_main!(benches);
