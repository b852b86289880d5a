use fly_fighter::collision::*;
use fly_fighter::entities::Rect;

fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect { x, y, width, height }
}

#[test]
fn overlapping_boxes() {
    assert!(overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(5.0, 5.0, 10.0, 10.0)));
}

#[test]
fn touching_edges_count_as_overlap() {
    assert!(overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(10.0, 10.0, 5.0, 5.0)));
}

#[test]
fn separated_boxes_do_not_overlap() {
    assert!(!overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(10.5, 0.0, 5.0, 5.0)));
    assert!(!overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(0.0, 10.5, 5.0, 5.0)));
}

#[test]
fn top_edge_inside_target_is_contact() {
    let target = rect(100.0, 100.0, 50.0, 38.0);
    assert!(top_edge_contact(&rect(120.0, 100.5, 4.0, 40.0), &target));
    assert!(top_edge_contact(&rect(120.0, 138.0, 4.0, 40.0), &target));
}

#[test]
fn top_edge_at_or_above_target_top_is_not_contact() {
    let target = rect(100.0, 100.0, 50.0, 38.0);
    assert!(!top_edge_contact(&rect(120.0, 100.0, 4.0, 40.0), &target));
    // Overlapping boxes, but the mover straddles the target's top edge
    assert!(!top_edge_contact(&rect(120.0, 80.0, 4.0, 40.0), &target));
}

#[test]
fn top_edge_below_target_is_not_contact() {
    let target = rect(100.0, 100.0, 50.0, 38.0);
    assert!(!top_edge_contact(&rect(120.0, 138.5, 4.0, 40.0), &target));
}

#[test]
fn contact_needs_horizontal_overlap() {
    let target = rect(100.0, 100.0, 50.0, 38.0);
    assert!(top_edge_contact(&rect(150.0, 110.0, 4.0, 40.0), &target));
    assert!(top_edge_contact(&rect(96.0, 110.0, 4.0, 40.0), &target));
    assert!(!top_edge_contact(&rect(150.5, 110.0, 4.0, 40.0), &target));
    assert!(!top_edge_contact(&rect(95.5, 110.0, 4.0, 40.0), &target));
}
