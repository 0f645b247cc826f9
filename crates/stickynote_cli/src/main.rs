//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `stickynote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use serde_json::json;
use stickynote_core::{dispatch_tool, Scene, SceneNoteStore, ToolStatus, TOOL_NAME};

fn main() {
    println!("stickynote_core version={}", stickynote_core::core_version());

    let mut scene = Scene::new();
    let root = scene.spawn("Level", None).expect("spawn root");
    let cube = scene.spawn("Cube", Some(root)).expect("spawn cube");
    let lamp = scene.spawn("Lamp", Some(root)).expect("spawn lamp");
    scene
        .attach_note(cube, "scale this cube down", 5)
        .expect("attach cube note");
    scene
        .attach_note(lamp, "turn the lamp toward the door", 1)
        .expect("attach lamp note");

    let listing = dispatch_tool(SceneNoteStore::new(&mut scene), TOOL_NAME, &json!({}));
    println!("get_all: {}", listing.message);
    if let Some(notes) = listing.data.get("notes").and_then(|value| value.as_array()) {
        for note in notes {
            println!(
                "  [{}] {} -> {}",
                note["priority"],
                note["path"].as_str().unwrap_or_default(),
                note["message"].as_str().unwrap_or_default()
            );
        }
    }

    let responded = dispatch_tool(
        SceneNoteStore::new(&mut scene),
        TOOL_NAME,
        &json!({
            "action": "respond",
            "path": "Level/Lamp",
            "response_message": "rotated the lamp 45 degrees",
            "completed": true,
        }),
    );
    let status = match responded.status {
        ToolStatus::Success => "success",
        ToolStatus::Error => "error",
    };
    println!("respond: status={status} message={}", responded.message);
}
