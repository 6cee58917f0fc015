use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kinetic_timeline_core::{
    kinds, parse_animation_set_json, AnimationDefaults, EasingMode, EasingType, KeyframeSpec,
    VisualId,
};
use serde_json::json;

fn keyframed_offset(count: usize) -> kinds::Vector3Animation {
    (0..count).fold(kinds::offset().with_to([10.0, 0.0, 0.0]), |anim, i| {
        let progress = i as f32 / count as f32;
        anim.with_keyframe(
            KeyframeSpec::new(progress, [progress * 10.0, 0.0, 0.0])
                .with_easing(EasingType::Sine, EasingMode::EaseInOut),
        )
    })
}

fn animation_set_json(count: usize) -> String {
    let animations: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            json!({
                "kind": "scalar",
                "target": format!("Properties.Channel{i}"),
                "from": 0,
                "to": i.to_string(),
                "durationMs": 250,
            })
        })
        .collect();
    json!({ "animations": animations }).to_string()
}

fn bench_build_animation(c: &mut Criterion) {
    let defaults = AnimationDefaults::default();
    let mut group = c.benchmark_group("build_animation");
    group.bench_function("fallback", |b| {
        let anim = kinds::opacity();
        b.iter(|| anim.build_animation(black_box(&VisualId(1)), &defaults).unwrap())
    });
    for count in [4usize, 32, 256] {
        let anim = keyframed_offset(count);
        group.bench_with_input(BenchmarkId::new("keyframes", count), &anim, |b, anim| {
            b.iter(|| anim.build_animation(black_box(&VisualId(1)), &defaults).unwrap())
        });
    }
    group.finish();
}

fn bench_definition_load(c: &mut Criterion) {
    let defaults = AnimationDefaults::default();
    let mut group = c.benchmark_group("definition_load");
    for count in [8usize, 64] {
        let json = animation_set_json(count);
        group.bench_with_input(BenchmarkId::new("parse_and_collect", count), &json, |b, json| {
            b.iter(|| {
                let set = parse_animation_set_json(black_box(json)).unwrap();
                set.implicit_collection(&VisualId(1), &defaults).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_animation, bench_definition_load);
criterion_main!(benches);
