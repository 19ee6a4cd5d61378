//! # EMBERFORGE Demo
//!
//! Wires the full craftability pipeline: balance data from TOML, an arena
//! sized from the node footprint, one simulation pass, and a printed report.

use std::mem::size_of;
use std::process::ExitCode;

use emberforge_economy::{CraftArena, CraftNode, CraftSimulator, Inventory, ItemId, RecipeBook};

const IRON_SWORD: ItemId = 3;

const BALANCE_DATA: &str = include_str!("../data/economy.toml");

fn item_name(item: ItemId) -> &'static str {
    match item {
        1 => "IronOre",
        2 => "IronIngot",
        3 => "IronSword",
        4 => "Wood",
        5 => "Stick",
        _ => "Unknown",
    }
}

fn run() -> Result<(), emberforge_economy::CraftError> {
    let book = RecipeBook::from_toml_str(BALANCE_DATA)?;
    let stock = Inventory::from_toml_str(BALANCE_DATA)?;

    // A handful of nodes is plenty for the demo tree.
    let mut arena = CraftArena::new(size_of::<CraftNode>() * 10)?;
    let simulator = CraftSimulator::new(&book, &stock);

    let root_id = simulator.simulate(&mut arena, IRON_SWORD, 1)?;

    if let Some(root) = arena.node(root_id) {
        println!(
            "Can craft {}: {}/{}",
            item_name(root.output_item),
            root.amount_available,
            root.amount_needed
        );

        for (i, &child_id) in arena.children_of(root).iter().enumerate() {
            if let Some(child) = arena.node(child_id) {
                println!(
                    "  Sub ingredient {}: {}, available: {}, needed: {}",
                    i,
                    item_name(child.output_item),
                    child.amount_available,
                    child.amount_needed
                );
            }
        }

        println!(
            "Arena: {} nodes, {}/{} bytes used",
            arena.node_count(),
            arena.used(),
            arena.capacity()
        );
    }

    // The whole tree dies together: rewind, then release the reservation.
    arena.reset();
    arena.dispose();

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("craft simulation failed: {err}");
            ExitCode::FAILURE
        }
    }
}
