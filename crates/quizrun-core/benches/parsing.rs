use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizrun_core::parser::{parse_problems_str, validate_problem_set};

fn bench_yaml_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("yaml_parsing");

    let small = generate_problems_yaml(5);
    let medium = generate_problems_yaml(100);
    let large = generate_problems_yaml(1000);

    group.bench_function("5_problems", |b| {
        b.iter(|| parse_problems_str(black_box(&small)))
    });

    group.bench_function("100_problems", |b| {
        b.iter(|| parse_problems_str(black_box(&medium)))
    });

    group.bench_function("1000_problems", |b| {
        b.iter(|| parse_problems_str(black_box(&large)))
    });

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    let set = parse_problems_str(&generate_problems_yaml(1000)).unwrap();

    group.bench_function("1000_problems", |b| {
        b.iter(|| validate_problem_set(black_box(&set)))
    });

    group.finish();
}

fn generate_problems_yaml(n: usize) -> String {
    let mut s = String::from("problems:\n");
    for i in 0..n {
        s.push_str(&format!(
            "  - question: What is {i} plus {i}\n    answer: \"{}\"\n",
            i * 2
        ));
    }
    s
}

criterion_group!(benches, bench_yaml_parsing, bench_validation);
criterion_main!(benches);
