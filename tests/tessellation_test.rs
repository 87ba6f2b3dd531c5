use fireworks_timer::physic_engine::types::{Color, Head, Position, Segment};
use fireworks_timer::renderer_engine::types::{head_vertex, tessellate_segment, VertexGPU};

fn segment(from: (f64, f64), to: (f64, f64), width: f64) -> Segment {
    Segment {
        from: Position::new(from.0, from.1),
        to: Position::new(to.0, to.1),
        color: Color::Blue,
        width,
    }
}

#[test]
fn test_vertex_layout_is_six_floats() {
    assert_eq!(std::mem::size_of::<VertexGPU>(), 24);
}

#[test]
fn test_horizontal_segment_becomes_centered_quad() {
    let quad = tessellate_segment(&segment((0.0, 0.0), (10.0, 0.0), 2.0), 1.0).unwrap();

    for v in &quad {
        assert!(v.pos_x == 0.0 || v.pos_x == 10.0);
        assert_eq!(v.pos_y.abs(), 1.0);
        assert_eq!([v.col_r, v.col_g, v.col_b], Color::Blue.rgb());
    }
    // deux triangles qui partagent la diagonale
    assert_eq!(quad[2], quad[3]);
    assert_eq!(quad[1], quad[4]);
}

#[test]
fn test_width_scale_multiplies_thickness() {
    let quad = tessellate_segment(&segment((0.0, 0.0), (0.0, 5.0), 1.6), 2.5).unwrap();
    let xs: Vec<f32> = quad.iter().map(|v| v.pos_x.abs()).collect();
    assert!(xs.iter().all(|x| (x - 2.0).abs() < 1e-6), "{:?}", xs);
}

#[test]
fn test_zero_length_segment_is_skipped() {
    assert!(tessellate_segment(&segment((3.0, 3.0), (3.0, 3.0), 1.0), 1.0).is_none());
}

#[test]
fn test_head_vertex_carries_point_size() {
    let head = Head {
        pos: Position::new(-4.0, 8.0),
        color: Color::Orange,
    };
    let v = head_vertex(&head, 3.0);
    assert_eq!((v.pos_x, v.pos_y, v.size), (-4.0, 8.0, 3.0));
    assert_eq!([v.col_r, v.col_g, v.col_b], Color::Orange.rgb());
}
