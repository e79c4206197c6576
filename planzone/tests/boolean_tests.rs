use float_cmp::approx_eq;

use planzone::entities::{BooleanOutcome, Plan, Zone, ZoneEvent, ZoneKey, ZoneKind};
use planzone::geometry::boolean::{Advisory, BooleanOp, GeoClipper};
use planzone::geometry::primitives::{Point, Ring};

fn square_ring(x0: f64, y0: f64, size: f64) -> Ring {
    Ring::new(vec![
        Point(x0, y0),
        Point(x0 + size, y0),
        Point(x0 + size, y0 + size),
        Point(x0, y0 + size),
    ])
    .unwrap()
}

fn plan_with(zones: Vec<(&str, Ring)>) -> (Plan, Vec<ZoneKey>) {
    let mut plan = Plan::new(1, 100.0);
    let keys = zones
        .into_iter()
        .map(|(name, ring)| plan.add_zone(Zone::new(ring, ZoneKind::Planned, name.to_string())))
        .collect();
    plan.drain_events();
    (plan, keys)
}

fn single_created(plan: &Plan, outcome: BooleanOutcome) -> ZoneKey {
    match outcome {
        BooleanOutcome::Applied { created, .. } => {
            assert_eq!(created.len(), 1);
            assert!(plan.zone(created[0]).is_some());
            created[0]
        }
        BooleanOutcome::Advisory(a) => panic!("expected an applied outcome, got advisory {a:?}"),
    }
}

#[test]
fn union_of_overlapping_squares_is_a_strict_superset() {
    let (mut plan, keys) = plan_with(vec![
        ("A", square_ring(0.0, 0.0, 1.0)),
        ("B", square_ring(0.5, 0.5, 1.0)),
    ]);
    let outcome = plan
        .apply_boolean(&GeoClipper, BooleanOp::Union, &keys)
        .unwrap();

    let key = single_created(&plan, outcome);
    let union = plan.zone(key).unwrap();
    assert_eq!(union.name, "A + B");
    assert!(union.ring.area() > 1.0);
    assert!(union.ring.area() < 2.0);
    assert!(approx_eq!(f64, union.ring.area(), 1.75, epsilon = 1e-9));
}

#[test]
fn intersection_of_disjoint_squares_is_an_advisory() {
    let (mut plan, keys) = plan_with(vec![
        ("A", square_ring(0.0, 0.0, 1.0)),
        ("B", square_ring(2.0, 2.0, 1.0)),
    ]);
    let outcome = plan
        .apply_boolean(&GeoClipper, BooleanOp::Intersection, &keys)
        .unwrap();

    assert_eq!(outcome, BooleanOutcome::Advisory(Advisory::NoOverlap));
    //originals untouched
    assert_eq!(plan.n_zones(), 2);
    assert!(plan.zone(keys[0]).is_some());
    assert!(plan.zone(keys[1]).is_some());
    assert!(plan.drain_events().is_empty());
}

#[test]
fn intersection_of_overlapping_squares() {
    let (mut plan, keys) = plan_with(vec![
        ("A", square_ring(0.0, 0.0, 1.0)),
        ("B", square_ring(0.5, 0.5, 1.0)),
    ]);
    let outcome = plan
        .apply_boolean(&GeoClipper, BooleanOp::Intersection, &keys)
        .unwrap();

    let key = single_created(&plan, outcome);
    let shared = plan.zone(key).unwrap();
    assert_eq!(shared.name, "A ∩ B");
    assert!(approx_eq!(f64, shared.ring.area(), 0.25, epsilon = 1e-9));
}

#[test]
fn difference_subtracts_the_second_zone_from_the_base() {
    let (mut plan, keys) = plan_with(vec![
        ("A", square_ring(0.0, 0.0, 1.0)),
        ("B", square_ring(0.5, 0.5, 1.0)),
    ]);
    let outcome = plan
        .apply_boolean(&GeoClipper, BooleanOp::Difference, &keys)
        .unwrap();

    let key = single_created(&plan, outcome);
    let remainder = plan.zone(key).unwrap();
    assert_eq!(remainder.name, "A − B");
    assert!(approx_eq!(f64, remainder.ring.area(), 0.75, epsilon = 1e-9));
}

#[test]
fn difference_that_erases_the_base_is_an_advisory() {
    let (mut plan, keys) = plan_with(vec![
        ("A", square_ring(0.25, 0.25, 0.5)),
        ("B", square_ring(0.0, 0.0, 1.0)),
    ]);
    let outcome = plan
        .apply_boolean(&GeoClipper, BooleanOp::Difference, &keys)
        .unwrap();

    assert_eq!(outcome, BooleanOutcome::Advisory(Advisory::NothingToSubtract));
    assert_eq!(plan.n_zones(), 2);
}

#[test]
fn fragmentation_conserves_total_area() {
    let (mut plan, keys) = plan_with(vec![
        ("A", square_ring(0.0, 0.0, 1.0)),
        ("B", square_ring(0.5, 0.5, 1.0)),
    ]);
    let outcome = plan
        .apply_boolean(&GeoClipper, BooleanOp::Fragment, &keys)
        .unwrap();

    let BooleanOutcome::Applied { created, .. } = outcome else {
        panic!("expected fragmentation to apply");
    };
    //two exclusive remainders plus the shared region
    assert_eq!(created.len(), 3);

    let total: f64 = created
        .iter()
        .map(|&k| plan.zone(k).unwrap().ring.area())
        .sum();
    //remainders + shared region counted once = area of the union
    assert!(approx_eq!(f64, total, 1.75, epsilon = 1e-9));

    let names: Vec<&str> = created
        .iter()
        .map(|&k| plan.zone(k).unwrap().name.as_str())
        .collect();
    assert!(names.contains(&"A"));
    assert!(names.contains(&"B"));
    assert!(names.contains(&"A ∩ B"));
}

#[test]
fn fragmentation_of_disjoint_zones_keeps_the_originals_as_pieces() {
    let (mut plan, keys) = plan_with(vec![
        ("A", square_ring(0.0, 0.0, 1.0)),
        ("B", square_ring(2.0, 2.0, 1.0)),
    ]);
    let outcome = plan
        .apply_boolean(&GeoClipper, BooleanOp::Fragment, &keys)
        .unwrap();

    let BooleanOutcome::Applied { created, .. } = outcome else {
        panic!("expected fragmentation to apply");
    };
    assert_eq!(created.len(), 2);
    let total: f64 = created
        .iter()
        .map(|&k| plan.zone(k).unwrap().ring.area())
        .sum();
    assert!(approx_eq!(f64, total, 2.0, epsilon = 1e-9));
}

#[test]
fn keep_all_points_concatenates_the_vertex_sets() {
    let (mut plan, keys) = plan_with(vec![
        ("A", square_ring(0.0, 0.0, 1.0)),
        ("B", square_ring(2.0, 0.0, 1.0)),
    ]);
    let outcome = plan
        .apply_boolean(&GeoClipper, BooleanOp::KeepAllPoints, &keys)
        .unwrap();

    let key = single_created(&plan, outcome);
    let combined = plan.zone(key).unwrap();
    assert_eq!(combined.name, "A + B");
    assert_eq!(combined.ring.n_vertices(), 8);
}

#[test]
fn convex_hull_of_all_wraps_every_selected_zone() {
    let (mut plan, keys) = plan_with(vec![
        ("A", square_ring(0.0, 0.0, 1.0)),
        ("B", square_ring(2.0, 0.0, 1.0)),
    ]);
    let outcome = plan
        .apply_boolean(&GeoClipper, BooleanOp::ConvexHullOfAll, &keys)
        .unwrap();

    let key = single_created(&plan, outcome);
    let hull = plan.zone(key).unwrap();
    assert_eq!(hull.ring.n_vertices(), 4);
    assert!(approx_eq!(f64, hull.ring.area(), 3.0, epsilon = 1e-9));
}

#[test]
fn sources_are_deleted_and_results_inserted_as_a_unit() {
    let (mut plan, keys) = plan_with(vec![
        ("A", square_ring(0.0, 0.0, 1.0)),
        ("B", square_ring(0.5, 0.5, 1.0)),
    ]);
    let outcome = plan
        .apply_boolean(&GeoClipper, BooleanOp::Union, &keys)
        .unwrap();
    let created = single_created(&plan, outcome);

    assert!(plan.zone(keys[0]).is_none());
    assert!(plan.zone(keys[1]).is_none());
    assert_eq!(plan.n_zones(), 1);

    let events = plan.drain_events();
    assert!(events.contains(&ZoneEvent::Deleted(keys[0])));
    assert!(events.contains(&ZoneEvent::Deleted(keys[1])));
    assert!(events.contains(&ZoneEvent::Saved(created)));
}

#[test]
fn result_zones_inherit_the_base_zone_style() {
    let mut plan = Plan::new(1, 100.0);
    let mut a = Zone::new(square_ring(0.0, 0.0, 1.0), ZoneKind::Planned, "A".to_string());
    a.style.color = "#ff0000".to_string();
    let key_a = plan.add_zone(a);
    let key_b = plan.add_zone(Zone::new(
        square_ring(0.5, 0.5, 1.0),
        ZoneKind::Planned,
        "B".to_string(),
    ));

    let outcome = plan
        .apply_boolean(&GeoClipper, BooleanOp::Union, &[key_a, key_b])
        .unwrap();
    let key = single_created(&plan, outcome);
    assert_eq!(plan.zone(key).unwrap().style.color, "#ff0000");
}

#[test]
fn boolean_operations_require_at_least_two_zones() {
    let (mut plan, keys) = plan_with(vec![("A", square_ring(0.0, 0.0, 1.0))]);
    assert!(
        plan.apply_boolean(&GeoClipper, BooleanOp::Union, &keys)
            .is_err()
    );
}
