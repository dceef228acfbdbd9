// Criterion benchmarks for the PantryPal matching pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pantrypal_api::catalog;
use pantrypal_api::core::{match_recipes, merge_sources, rank_matches};
use pantrypal_api::models::{Ingredient, Recipe, RecipeSource};

fn create_recipe(id: usize, ingredient_count: usize) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: format!("Recipe {}", id),
        image: None,
        ready_in_minutes: Some(30),
        servings: Some(4),
        source: RecipeSource::Catalog,
        ingredients: (0..ingredient_count)
            .map(|i| Ingredient::new(format!("ingredient {}", (id + i) % 40)))
            .collect(),
        instructions: None,
        extended_ingredients: vec![],
    }
}

fn create_pantry(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("ingredient {}", i)).collect()
}

fn bench_match_catalog(c: &mut Criterion) {
    let pantry = vec![
        "chicken".to_string(),
        "garlic".to_string(),
        "rice".to_string(),
        "soy sauce".to_string(),
        "onion".to_string(),
    ];

    c.bench_function("match_catalog_16_recipes", |b| {
        b.iter(|| {
            match_recipes(
                black_box(catalog::fallback_recipes()),
                black_box(&pantry),
            )
        });
    });
}

fn bench_match_scaling(c: &mut Criterion) {
    let pantry = create_pantry(20);

    let mut group = c.benchmark_group("matching");

    for recipe_count in [10, 50, 100, 500, 1000].iter() {
        let recipes: Vec<Recipe> = (0..*recipe_count)
            .map(|i| create_recipe(i, 8))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("match_recipes", recipe_count),
            recipe_count,
            |b, _| {
                b.iter(|| match_recipes(black_box(recipes.clone()), black_box(&pantry)));
            },
        );
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let pantry = create_pantry(20);
    let primary: Vec<Recipe> = (0..12).map(|i| create_recipe(i, 8)).collect();
    let secondary: Vec<Recipe> = (6..24).map(|i| create_recipe(i, 8)).collect();

    c.bench_function("merge_rank_truncate_pipeline", |b| {
        b.iter(|| {
            let sources = vec![
                match_recipes(black_box(primary.clone()), &pantry),
                match_recipes(black_box(secondary.clone()), &pantry),
                match_recipes(catalog::fallback_recipes(), &pantry),
            ];
            let mut ranked = rank_matches(merge_sources(sources));
            ranked.truncate(12);
            black_box(ranked)
        });
    });
}

criterion_group!(
    benches,
    bench_match_catalog,
    bench_match_scaling,
    bench_full_pipeline
);

criterion_main!(benches);
