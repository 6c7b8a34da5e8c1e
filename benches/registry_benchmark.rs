use criterion::{criterion_group, criterion_main, Criterion};
use observer_registry::registry::ObserverRegistry;
use std::sync::Arc;

fn register_observers(observers: &[Arc<u64>]) -> ObserverRegistry<u64> {
    let mut registry = ObserverRegistry::new();
    for observer in observers {
        registry.register_observer(observer);
    }
    registry
}

fn bench_register_observers(c: &mut Criterion) {
    let observers: Vec<Arc<u64>> = (0..100u64).map(Arc::new).collect();

    c.bench_function("register 100 observers", |b| {
        b.iter(|| register_observers(&observers))
    });
}

fn bench_register_and_remove_observers(c: &mut Criterion) {
    let observers: Vec<Arc<u64>> = (0..100u64).map(Arc::new).collect();

    c.bench_function("register and remove 100 observers", |b| {
        b.iter(|| {
            let mut registry = register_observers(&observers);
            for observer in observers.iter().rev() {
                registry.remove_observer(observer);
            }
            registry
        })
    });
}

criterion_group!(
    benches,
    bench_register_observers,
    bench_register_and_remove_observers
);
criterion_main!(benches);
