use stickynote_core::{
    NoteQueryService, NoteResponseService, NoteView, RespondError, RespondRequest, Scene,
    SceneNoteStore,
};

fn snapshot(scene: &mut Scene) -> Vec<NoteView> {
    let service = NoteQueryService::new(SceneNoteStore::new(scene));
    service.list_all().unwrap().notes
}

#[test]
fn respond_by_path_updates_exactly_one_record() {
    let mut scene = Scene::new();
    let cube = scene.spawn("Cube", None).unwrap();
    let sphere = scene.spawn("Sphere", None).unwrap();
    scene.attach_note(cube, "resize", 2).unwrap();
    scene.attach_note(sphere, "recolor", 1).unwrap();
    scene.clear_dirty();

    let mut service = NoteResponseService::new(SceneNoteStore::new(&mut scene));
    let view = service
        .respond(&RespondRequest {
            path: "Cube".to_string(),
            response: "resized to 50%".to_string(),
            completed: true,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(view.path, "Cube");
    assert_eq!(view.response, "resized to 50%");
    assert!(view.completed);

    let after = snapshot(&mut scene);
    let cube_view = after.iter().find(|n| n.path == "Cube").unwrap();
    let sphere_view = after.iter().find(|n| n.path == "Sphere").unwrap();
    assert_eq!(cube_view.response, "resized to 50%");
    assert!(cube_view.completed);
    assert!(sphere_view.response.is_empty());
    assert!(!sphere_view.completed);
    assert!(scene.is_dirty(cube));
    assert!(!scene.is_dirty(sphere));
}

#[test]
fn respond_overwrites_previous_response() {
    let mut scene = Scene::new();
    let cube = scene.spawn("Cube", None).unwrap();
    scene.attach_note(cube, "tweak", 1).unwrap();

    let mut service = NoteResponseService::new(SceneNoteStore::new(&mut scene));
    service
        .respond(&RespondRequest {
            path: "Cube".to_string(),
            response: "first attempt".to_string(),
            completed: false,
            ..Default::default()
        })
        .unwrap();
    let second = service
        .respond(&RespondRequest {
            path: "Cube".to_string(),
            response: "final version".to_string(),
            completed: true,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(second.response, "final version");
    assert!(second.completed);
}

#[test]
fn respond_to_unknown_path_mutates_nothing() {
    let mut scene = Scene::new();
    let cube = scene.spawn("Cube", None).unwrap();
    scene.attach_note(cube, "untouched", 3).unwrap();
    let before = snapshot(&mut scene);

    let mut service = NoteResponseService::new(SceneNoteStore::new(&mut scene));
    let err = service
        .respond(&RespondRequest {
            path: "nonexistent-path".to_string(),
            response: "should not land".to_string(),
            completed: true,
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err, RespondError::NotFound("nonexistent-path".to_string()));
    assert_eq!(snapshot(&mut scene), before);
}

#[test]
fn respond_without_target_fails_and_mutates_nothing() {
    let mut scene = Scene::new();
    let cube = scene.spawn("Cube", None).unwrap();
    scene.attach_note(cube, "untouched", 3).unwrap();
    let before = snapshot(&mut scene);

    let mut service = NoteResponseService::new(SceneNoteStore::new(&mut scene));
    let err = service
        .respond(&RespondRequest {
            path: "   ".to_string(),
            response: "ignored".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err, RespondError::MissingPath);
    assert_eq!(snapshot(&mut scene), before);
}

#[test]
fn duplicate_paths_resolve_to_first_in_enumeration_order() {
    let mut scene = Scene::new();
    let first = scene.spawn("Twin", None).unwrap();
    let second = scene.spawn("Twin", None).unwrap();
    scene.attach_note(first, "first twin", 1).unwrap();
    scene.attach_note(second, "second twin", 1).unwrap();

    let mut service = NoteResponseService::new(SceneNoteStore::new(&mut scene));
    let view = service
        .respond(&RespondRequest {
            path: "Twin".to_string(),
            response: "handled".to_string(),
            completed: true,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(view.message, "first twin");

    let after = snapshot(&mut scene);
    let untouched = after.iter().find(|n| n.message == "second twin").unwrap();
    assert!(untouched.response.is_empty());
}

#[test]
fn stable_note_id_targets_across_duplicate_paths() {
    let mut scene = Scene::new();
    let first = scene.spawn("Twin", None).unwrap();
    let second = scene.spawn("Twin", None).unwrap();
    scene.attach_note(first, "first twin", 1).unwrap();
    let second_note = scene.attach_note(second, "second twin", 1).unwrap();

    let mut service = NoteResponseService::new(SceneNoteStore::new(&mut scene));
    let view = service
        .respond(&RespondRequest {
            path: "Twin".to_string(),
            note_id: Some(second_note),
            response: "precisely targeted".to_string(),
            completed: true,
        })
        .unwrap();
    assert_eq!(view.id, second_note);
    assert_eq!(view.message, "second twin");

    let after = snapshot(&mut scene);
    let untouched = after.iter().find(|n| n.message == "first twin").unwrap();
    assert!(untouched.response.is_empty());
}

#[test]
fn unmatched_note_id_falls_back_to_path_match() {
    let mut scene = Scene::new();
    let cube = scene.spawn("Cube", None).unwrap();
    scene.attach_note(cube, "fallback target", 1).unwrap();

    let mut service = NoteResponseService::new(SceneNoteStore::new(&mut scene));
    let view = service
        .respond(&RespondRequest {
            path: "Cube".to_string(),
            note_id: Some(uuid::Uuid::new_v4()),
            response: "landed via path".to_string(),
            completed: false,
        })
        .unwrap();
    assert_eq!(view.message, "fallback target");
    assert_eq!(view.response, "landed via path");
}
