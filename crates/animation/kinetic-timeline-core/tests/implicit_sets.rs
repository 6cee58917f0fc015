use kinetic_timeline_core::{
    kinds, AnimationDefaults, ImplicitAnimationSet, ImplicitTimeline, KeyframeSpec, NativeKind,
    TimelineError, VisualHandle, VisualId,
};

struct Panel {
    id: u64,
}

impl VisualHandle for Panel {
    fn visual_id(&self) -> VisualId {
        VisualId(self.id)
    }
}

fn transitions() -> ImplicitAnimationSet {
    ImplicitAnimationSet::new()
        // Offset changes slide the element; opacity rides along on the same trigger.
        .with(kinds::offset().with_implicit_target("Offset"))
        .with(kinds::opacity().with_from(0.0).with_implicit_target("Offset"))
        .with(kinds::scale().with_from([0.8, 0.8, 1.0]))
        .with(kinds::rotation_in_degrees().with_to(90.0))
}

#[test]
fn collection_groups_by_trigger_channel() {
    let panel = Panel { id: 3 };
    let collection = transitions()
        .implicit_collection(&panel, &AnimationDefaults::default())
        .unwrap();

    let keys: Vec<&str> = collection.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Offset", "Scale", "RotationAngleInDegrees"]);

    let offset_group = &collection["Offset"];
    assert_eq!(offset_group.len(), 2);
    assert_eq!(offset_group[0].target, "Offset");
    assert_eq!(offset_group[0].kind, NativeKind::Vector3);
    assert_eq!(offset_group[1].target, "Opacity");
    assert_eq!(offset_group[1].kind, NativeKind::Scalar);

    for group in collection.values() {
        for anim in group {
            assert_eq!(anim.visual, VisualId(3));
        }
    }
}

#[test]
fn animation_group_keeps_insertion_order() {
    let group = transitions()
        .animation_group(&VisualId(1), &AnimationDefaults::default())
        .unwrap();
    let targets: Vec<&str> = group.iter().map(|a| a.target.as_str()).collect();
    assert_eq!(
        targets,
        vec!["Offset", "Opacity", "Scale", "RotationAngleInDegrees"]
    );
}

#[test]
fn a_failing_member_fails_the_set() {
    let set = transitions().with(kinds::opacity().with_keyframe(KeyframeSpec::new(-1.0, 0.0)));
    let err = set
        .implicit_collection(&VisualId(1), &AnimationDefaults::default())
        .unwrap_err();
    assert!(matches!(err, TimelineError::ProgressOutOfRange { .. }));
}

#[test]
fn timelines_are_usable_as_trait_objects() {
    let boxed: Vec<Box<dyn ImplicitTimeline>> = vec![
        Box::new(kinds::color()),
        Box::new(kinds::size().with_to([100.0, 40.0])),
    ];
    let defaults = AnimationDefaults::default();
    let produced: Vec<NativeKind> = boxed
        .iter()
        .map(|t| t.build_animation(&VisualId(9), &defaults).unwrap().0.kind)
        .collect();
    assert_eq!(produced, vec![NativeKind::Color, NativeKind::Vector2]);
    assert!(ImplicitAnimationSet::new().is_empty());
}
