mod support;

use nalgebra::Vector3;
use pegbox::{
    CrossSection, GeometryKernel, KernelError,
    kernel::{BspKernel, KernelCell, shared_kernel},
    mesh::Mesh,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::support::{approx_eq, bounds};

#[test]
fn extruded_rounded_rectangle_spans_its_outline() {
    let kernel = BspKernel;
    let outline = CrossSection::rounded_rectangle(80.0, 60.0, 6.0, 12);
    let slab = kernel.extrude(&outline, 52.0).unwrap();
    let bb = bounds(&kernel.bounding_box(&slab));
    let expected = [-40.0, -30.0, 0.0, 40.0, 30.0, 52.0];
    for (got, want) in bb.iter().zip(expected) {
        assert!(approx_eq(*got, want, 1e-9), "{bb:?}");
    }
    assert!(approx_eq(kernel.volume(&slab), outline.signed_area() * 52.0, 1e-6));
}

#[test]
fn hollow_shell_volume_is_outer_minus_cavity() {
    let kernel = BspKernel;
    let outer = CrossSection::rounded_rectangle(40.0, 30.0, 4.0, 8);
    let inner = CrossSection::rounded_rectangle(36.0, 26.0, 2.0, 8);
    let body = kernel.extrude(&outer, 20.0).unwrap();
    let cavity = kernel
        .translate(&kernel.extrude(&inner, 19.0).unwrap(), 0.0, 0.0, 2.0)
        .unwrap();
    let shell = kernel.difference(&body, &cavity).unwrap();
    let expected = outer.signed_area() * 20.0 - inner.signed_area() * 18.0;
    assert!(approx_eq(kernel.volume(&shell), expected, 1e-6));
}

#[test]
fn chamfered_clip_loses_its_lower_corner() {
    let kernel = BspKernel;
    let clip = kernel.extrude(&CrossSection::clip_profile(), 12.0).unwrap();
    let trimmed = kernel
        .trim_by_plane(&clip, &Vector3::new(0.0, 1.0, 1.0), 0.0)
        .unwrap();
    assert!(kernel.volume(&trimmed) < kernel.volume(&clip));
    assert!(kernel.volume(&trimmed) > 0.5 * kernel.volume(&clip));
    for poly in &trimmed.polygons {
        for v in &poly.vertices {
            assert!(v.pos.y + v.pos.z >= -1e-6);
        }
    }
}

#[test]
fn degenerate_inputs_are_kernel_errors() {
    let kernel = BspKernel;
    let square = CrossSection::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    assert_eq!(
        kernel.extrude(&square, -1.0).unwrap_err(),
        KernelError::InvalidHeight(-1.0)
    );
    let bow_tie = CrossSection::from_coords(&[[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0]]);
    assert!(matches!(
        kernel.extrude(&bow_tie, 1.0),
        Err(KernelError::SelfIntersection { .. })
    ));
    let solid = kernel.extrude(&square, 1.0).unwrap();
    assert_eq!(
        kernel.mirror(&solid, &Vector3::zeros(), 0.0).unwrap_err(),
        KernelError::DegeneratePlane
    );
}

#[test]
fn union_all_folds_left_to_right() {
    let kernel = BspKernel;
    let cubes = (0..3)
        .map(|i| {
            let cube = kernel.cube(&Vector3::new(1.0, 1.0, 1.0)).unwrap();
            kernel.translate(&cube, 2.0 * i as f64, 0.0, 0.0).unwrap()
        })
        .collect::<Vec<Mesh>>();
    let all = kernel.union_all(cubes).unwrap().unwrap();
    assert!(approx_eq(kernel.volume(&all), 3.0, 1e-9));
    assert!(approx_eq(kernel.bounding_box(&all).maxs.x, 5.0, 1e-12));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_use_initialises_once() {
    static CELL: KernelCell<usize> = KernelCell::new();
    let runs = Arc::new(AtomicUsize::new(0));

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let runs = Arc::clone(&runs);
            tokio::spawn(async move {
                *CELL
                    .get_or_init(|| async move {
                        runs.fetch_add(1, Ordering::SeqCst);
                        tokio::task::yield_now().await;
                        42
                    })
                    .await
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), 42);
    }
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert_eq!(CELL.get(), Some(&42));
}

#[tokio::test]
async fn shared_kernel_is_reused() {
    let first: *const BspKernel = shared_kernel().await;
    let second: *const BspKernel = shared_kernel().await;
    assert_eq!(first, second);
}
