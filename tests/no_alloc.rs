use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

use ferrite_tiny::train::train_step;
use ferrite_tiny::{Network, Sgd};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Counts allocations made on threads that have opted in.
struct CountingAlloc {
    allocs: AtomicUsize,
}

thread_local! {
    static COUNTING: Cell<bool> = const { Cell::new(false) };
}

impl CountingAlloc {
    fn record(&self) {
        if COUNTING.with(|c| c.get()) {
            self.allocs.fetch_add(1, Ordering::Relaxed);
        }
    }
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        self.record();
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        self.record();
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        self.record();
        unsafe { System.realloc(ptr, layout, new_size) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc {
    allocs: AtomicUsize::new(0),
};

#[test]
fn training_and_inference_do_not_allocate() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut network: Network<4, 8, 3> = Network::new(&mut rng);
    let sgd = Sgd::new(0.1);
    let samples = [
        ([0.1, 0.2, 0.3, 0.4], [1.0, 0.0, 0.0]),
        ([0.9, 0.1, 0.0, 0.5], [0.0, 1.0, 0.0]),
        ([0.0, 0.7, 0.7, 0.2], [0.0, 0.0, 1.0]),
    ];

    COUNTING.with(|c| c.set(true));
    for _ in 0..1000 {
        for (input, expected) in &samples {
            train_step(&mut network, input, expected, &sgd);
            network.forward(input);
            network.backpropagate(input, expected, &sgd);
        }
    }
    let mut outputs = [[0.0; 3]; 3];
    for (out, (input, _)) in outputs.iter_mut().zip(samples.iter()) {
        *out = network.predict(input);
    }
    COUNTING.with(|c| c.set(false));

    assert_eq!(GLOBAL.allocs.load(Ordering::Relaxed), 0);
    assert!(outputs.iter().flatten().all(|x| x.is_finite()));
}
