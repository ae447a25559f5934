use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use celer::datasets::{csc_array::CSCArray, DatasetBase};
use celer::estimators::{lasso::Lasso, traits::Fit};
use celer::helpers::helpers::compute_alpha_max;
use celer::helpers::test_helpers::{
    dense_to_csc, generate_random_data, generate_random_sparse_data,
};

fn bench_lasso(c: &mut Criterion) {
    let mut group = c.benchmark_group("lasso");
    group.sample_size(10);

    for n_samples in [10, 100] {
        for n_features in [100, 1000] {
            for reg in [0.1, 0.01, 0.005] {
                let (x, y) = generate_random_data(n_samples, n_features);
                let dataset = DatasetBase::from((x, y));

                let alpha = compute_alpha_max(&dataset) * reg;

                let clf = Lasso::params().alpha(alpha);
                let config = (n_samples, n_features, reg);
                let config_string = format!("{}, {}, {}", n_samples, n_features, reg);

                group.bench_with_input(
                    BenchmarkId::new("celer", config_string),
                    &config,
                    |b, _| b.iter(|| clf.fit(&dataset).unwrap()),
                );
            }
        }
    }

    group.finish();
}

fn bench_sparse_lasso(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_lasso");
    group.sample_size(10);

    for (n_samples, n_features) in [(100, 1000), (500, 5000)] {
        for prune in [true, false] {
            let (x, y) = generate_random_sparse_data(n_samples, n_features, 0.05);
            let (data, indices, indptr) = dense_to_csc(x.view());
            let x_sparse = CSCArray::new(data.view(), indices.view(), indptr.view());
            let dataset = DatasetBase::from((x_sparse, y.view()));

            let alpha = compute_alpha_max(&dataset) * 0.01;

            let clf = Lasso::params().alpha(alpha).prune(prune);
            let config_string = format!("{}, {}, prune={}", n_samples, n_features, prune);

            group.bench_with_input(
                BenchmarkId::new("celer", config_string),
                &prune,
                |b, _| b.iter(|| clf.fit(&dataset).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_lasso, bench_sparse_lasso);
criterion_main!(benches);
