use super::*;

#[test]
fn centered_child_sits_in_the_middle() {
    let parent = Rect::new(0.0, 100.0, 400.0, 800.0);
    let child = parent.centered_child(Size::new(75.0, 4.0), 15.0);

    assert_eq!(child, Rect::new(162.5, 115.0, 75.0, 4.0));
    assert_eq!(child.bottom(), 119.0);
}

#[test]
fn rect_contains_is_inclusive() {
    let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert!(rect.contains(Point::new(10.0, 30.0)));
    assert!(!rect.contains(Point::new(9.9, 15.0)));
}

#[test]
fn grey_matches_css_grey() {
    let grey = Color::GREY;
    assert!((grey.0 - 128.0 / 255.0).abs() < f32::EPSILON);
    assert_eq!(grey.3, 1.0);
}
