//! Benchmarks for the tilepath resolver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tilepath::{
    AssetIndex, CivProfile, EraList, ThemeConfig, ThemeContext, ThemePaths, ThemeRegistry,
    UnitProfile,
};

fn eras() -> EraList {
    EraList::new([
        "Ancient era",
        "Classical era",
        "Medieval era",
        "Renaissance era",
        "Industrial era",
        "Modern era",
        "Atomic era",
        "Information era",
    ])
}

fn context() -> ThemeContext {
    let mut themes = ThemeRegistry::new();
    themes.insert("HighRes", ThemeConfig::with_fallback("Default"));
    themes.insert("Default", ThemeConfig::default());

    // Bare base art for 50 units plus a handful of qualified variants, so
    // probes exercise both the early-exit and the full walk.
    let mut paths: Vec<String> = (0..50)
        .map(|i| format!("TileSets/Default/Units/Unit{}", i))
        .collect();
    paths.push("TileSets/Default/Units/Unit0-Ancient era".to_string());
    paths.push("TileSets/Default/Units/Unit1-Greek".to_string());
    paths.push("TileSets/Default/Hexagon".to_string());

    ThemeContext::new(themes, AssetIndex::from_paths(paths), eras())
}

// -- Concatenation benchmarks --

fn bench_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("concat");

    let ctx = context();

    group.bench_function("build_path_warm", |b| {
        let table = ThemePaths::new("Default", ctx.clone());
        // Prime the boundary cache once.
        table.build_path(&["TileSets/Default/", "Units/", "Warrior", "-Greek"]);
        b.iter(|| {
            table.build_path(black_box(&[
                "TileSets/Default/",
                "Units/",
                "Warrior",
                "-Greek",
            ]))
        })
    });

    group.bench_function("build_path_cold", |b| {
        b.iter(|| {
            let table = ThemePaths::new("Default", ctx.clone());
            table.build_path(black_box(&[
                "TileSets/Default/",
                "Units/",
                "Warrior",
                "-Greek",
            ]))
        })
    });

    group.finish();
}

// -- Unit resolution benchmarks --

fn bench_unit_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_resolution");

    let ctx = context();
    let owner = CivProfile::new("Greece", "Information era").with_style("Greek");

    group.bench_function("resolve_cold", |b| {
        let unit = UnitProfile::new("Unit20");
        b.iter(|| {
            let table = ThemePaths::new("Default", ctx.clone());
            table.unit_image_path(black_box(&unit), black_box(&owner))
        })
    });

    group.bench_function("resolve_warm", |b| {
        let table = ThemePaths::new("Default", ctx.clone());
        let unit = UnitProfile::new("Unit20");
        b.iter(|| table.unit_image_path(black_box(&unit), black_box(&owner)))
    });

    group.bench_function("resolve_through_fallback", |b| {
        let unit = UnitProfile::new("Unit20");
        b.iter(|| {
            let table = ThemePaths::new("HighRes", ctx.clone());
            table.unit_image_path(black_box(&unit), black_box(&owner))
        })
    });

    group.finish();
}

// -- Owned-tile resolution benchmarks --

fn bench_owned_tile(c: &mut Criterion) {
    let mut group = c.benchmark_group("owned_tile");

    let ctx = context();
    let owner = CivProfile::new("France", "Industrial era").with_style("French");

    group.bench_function("resolve_default_art", |b| {
        let table = ThemePaths::new("Default", ctx.clone());
        b.iter(|| {
            table.owned_tile_image_path(black_box("TileSets/Default/Grassland"), black_box(&owner))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_concat, bench_unit_resolution, bench_owned_tile);
criterion_main!(benches);
