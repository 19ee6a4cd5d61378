//! Benchmark for craft simulation performance.
//!
//! Run with: cargo bench --package emberforge_economy --bench craft_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emberforge_economy::craft::{CraftArena, CraftSimulator};
use emberforge_economy::inventory::Inventory;
use emberforge_economy::items::{Ingredient, ItemId, Recipe, RecipeBook};

/// Linear chain: item `i` needs one of item `i - 1`; item 0 is base stock.
fn chain_setup(depth: ItemId) -> (RecipeBook, Inventory) {
    let mut book = RecipeBook::new();
    for i in 1..=depth {
        let recipe = Recipe::new(i, vec![Ingredient::new(i - 1, 1)]).expect("valid recipe");
        book.add_recipe(recipe);
    }

    let mut stock = Inventory::new();
    stock.add_item(0, 1_000_000);

    (book, stock)
}

/// One recipe fanning out into `width` distinct base resources.
fn wide_setup(width: ItemId) -> (RecipeBook, Inventory) {
    let output = width + 1;
    let ingredients: Vec<Ingredient> = (1..=width).map(|i| Ingredient::new(i, 2)).collect();
    let mut book = RecipeBook::new();
    book.add_recipe(Recipe::new(output, ingredients).expect("valid recipe"));

    let mut stock = Inventory::new();
    for i in 1..=width {
        stock.add_item(i, 640);
    }

    (book, stock)
}

fn benchmark_deep_chain(c: &mut Criterion) {
    let depth = 64;
    let (book, stock) = chain_setup(depth);
    let sim = CraftSimulator::new(&book, &stock);
    let mut arena = CraftArena::new(64 * 1024).expect("arena backing");

    c.bench_function("simulate_chain_depth_64", |b| {
        b.iter(|| {
            arena.reset();
            black_box(sim.simulate(&mut arena, depth, 1).expect("pass"))
        });
    });
}

fn benchmark_wide_recipe(c: &mut Criterion) {
    let width = 128;
    let (book, stock) = wide_setup(width);
    let sim = CraftSimulator::new(&book, &stock);
    let mut arena = CraftArena::new(64 * 1024).expect("arena backing");

    c.bench_function("simulate_wide_recipe_128", |b| {
        b.iter(|| {
            arena.reset();
            black_box(sim.simulate(&mut arena, width + 1, 1).expect("pass"))
        });
    });
}

criterion_group!(benches, benchmark_deep_chain, benchmark_wide_recipe);
criterion_main!(benches);
