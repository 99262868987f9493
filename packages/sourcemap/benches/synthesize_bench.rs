use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sfc_sourcemap::{synthesize, CompiledScript, Position, RawSourceMap, SourceMapBuilder};

fn document(script_lines: usize) -> String {
    let mut doc = String::from("<template>\n  <div class=\"hello\">{{ msg }}</div>\n</template>\n<script>\n");
    for i in 0..script_lines {
        doc.push_str(&format!("const value{i} = {i};\n"));
    }
    doc.push_str("</script>\n");
    doc
}

fn script_code(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("var value{i} = {i};"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn synthesize_identity(c: &mut Criterion) {
    let doc = document(500);
    let script = CompiledScript::inline(script_code(500), None);

    c.bench_function("synthesize_identity_500_lines", |b| {
        b.iter(|| {
            synthesize(
                black_box(Some(&script)),
                black_box(&doc),
                "/project/components/Large.vue",
                502,
                540,
                1,
            )
        })
    });
}

fn synthesize_with_script_map(c: &mut Criterion) {
    let doc = document(500);

    let mut builder = SourceMapBuilder::new("Large.ts");
    for line in 1..=500 {
        builder
            .add_mapping(Position::new(line, 4), Position::new(line + 4, 6), None)
            .unwrap();
    }
    let raw = RawSourceMap::from_source_map(&builder.build()).unwrap();
    let script = CompiledScript::inline(script_code(500), Some(raw));

    c.bench_function("synthesize_script_map_500_lines", |b| {
        b.iter(|| {
            synthesize(
                black_box(Some(&script)),
                black_box(&doc),
                "/project/components/Large.vue",
                502,
                540,
                1,
            )
        })
    });
}

criterion_group!(benches, synthesize_identity, synthesize_with_script_map);
criterion_main!(benches);
