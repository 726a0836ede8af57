//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire the core together for a deterministic scripted board session.
//! - Keep output free of random ids so runs are comparable.

use dragboard_core::{
    filter_by_status, BoardColumn, DragSource, DropZone, ProjectDraft, ProjectIntake,
    ProjectStatus, SharedProjectStore,
};
use std::error::Error;

fn main() {
    if let Err(err) = run() {
        eprintln!("dragboard demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("dragboard_core version={}", dragboard_core::core_version());

    let store = SharedProjectStore::new();
    store.subscribe(|projects| {
        println!("-- board updated ({} project(s))", projects.len());
        for status in [ProjectStatus::Active, ProjectStatus::Finished] {
            let column = filter_by_status(&projects, status);
            let titles: Vec<&str> = column.iter().map(|project| project.title.as_str()).collect();
            println!("   {}: {}", status.as_str(), titles.join(", "));
        }
    })?;

    let intake = ProjectIntake::new(store.clone());
    let first = intake.submit(&ProjectDraft {
        title: "Test".to_string(),
        description: "Demo project one".to_string(),
        people: 3,
    })?;
    intake.submit(&ProjectDraft {
        title: "Test2".to_string(),
        description: "Demo project two".to_string(),
        people: 1,
    })?;

    // Drag the first card onto the finished column.
    let mut card = DragSource::new(first);
    let transfer = card.drag_start();
    let mut finished = DropZone::new(BoardColumn::Finished);
    if finished.drag_over(&transfer) {
        let moved = store.with_mut(|projects| finished.drop_transfer(&transfer, projects))?;
        card.record_drop(moved.is_some());
    }
    card.drag_end();

    Ok(())
}
