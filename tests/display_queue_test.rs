use fireworks_timer::physic_engine::display_queue::{
    AnimationEvent, DisplayQueue, FireworkAnimation, FireworkPhase, BASE_PEN_WIDTH,
    PEN_WIDTH_INCREMENT,
};
use fireworks_timer::physic_engine::firework::Firework;
use fireworks_timer::physic_engine::launch_site::LaunchSite;
use fireworks_timer::physic_engine::types::Color;

fn small_firework(lines: usize, steps: usize) -> Firework {
    Firework::from_launch(
        Color::Yellow,
        lines,
        steps,
        LaunchSite::new(0.0, -300.0, 90.0),
        600.0,
        0.8,
    )
}

// ==================================
// 1. DisplayQueue
// ==================================

#[test]
fn test_closing_slot_i_retires_slot_i_minus_two() {
    let mut queue = DisplayQueue::new(2);
    let mut retired = Vec::new();

    for i in 0..5 {
        assert_eq!(queue.open_slot(Some(i)), i);
        assert_eq!(queue.current(), Some(&i));
        if let Some(expired) = queue.close_slot() {
            retired.push((i, expired));
        }
    }

    assert_eq!(retired, vec![(2, 0), (3, 1), (4, 2)]);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
}

#[test]
fn test_trailing_empty_slots_clear_everything() {
    let launches = 4;
    let mut queue = DisplayQueue::new(2);
    let total = queue.total_slots(launches);
    assert_eq!(total, launches + 2);

    for slot in 0..total {
        let item = (slot < launches).then_some(slot);
        queue.open_slot(item);
        queue.close_slot();
    }
    assert!(queue.is_empty());
    assert_eq!(queue.next_slot(), total);
}

#[test]
fn test_no_launch_no_slot() {
    let queue: DisplayQueue<u8> = DisplayQueue::new(2);
    assert_eq!(queue.total_slots(0), 0);
}

#[test]
fn test_look_behind_zero_retires_immediately() {
    let mut queue = DisplayQueue::new(0);
    queue.open_slot(Some("a"));
    assert_eq!(queue.close_slot(), Some("a"));
    assert!(queue.is_empty());
}

#[test]
fn test_empty_slot_has_no_current() {
    let mut queue = DisplayQueue::new(2);
    queue.open_slot(Some(1));
    queue.close_slot();
    queue.open_slot(None);
    assert_eq!(queue.current(), None);
    assert_eq!(queue.len(), 1);
}

// ==================================
// 2. FireworkAnimation
// ==================================

#[test]
fn test_animation_walks_through_phases() {
    let steps = 3;
    let mut anim = FireworkAnimation::new(small_firework(4, steps));
    assert_eq!(anim.phase(), FireworkPhase::Ascending { frame: 0 });

    for frame in 1..=steps {
        assert_eq!(anim.advance(), AnimationEvent::Advanced);
        assert_eq!(anim.phase(), FireworkPhase::Ascending { frame });
    }
    assert_eq!(anim.advance(), AnimationEvent::Exploded);
    assert_eq!(anim.phase(), FireworkPhase::Exploding { frame: 0 });

    for frame in 1..=steps {
        assert!(!anim.is_finished());
        assert_eq!(anim.advance(), AnimationEvent::Advanced);
        assert_eq!(anim.phase(), FireworkPhase::Exploding { frame });
    }
    assert!(anim.is_finished());
    assert_eq!(anim.advance(), AnimationEvent::Idle);

    anim.retire();
    assert!(anim.is_retired());
    assert!(anim.segments().is_empty());
    assert!(anim.heads().is_empty());
}

#[test]
fn test_ascent_stroke_grows_then_disappears_on_explosion() {
    let mut anim = FireworkAnimation::new(small_firework(5, 4));
    assert!(anim.segments().is_empty());
    assert_eq!(anim.heads().len(), 1);

    anim.advance();
    anim.advance();
    let segments = anim.segments();
    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|s| s.width == BASE_PEN_WIDTH));
    assert!(segments.iter().all(|s| s.color == Color::Yellow));

    while anim.advance() != AnimationEvent::Exploded {}
    // au pas 0 de l'explosion, chaque branche n'est qu'un point
    assert!(anim.segments().is_empty());
    assert_eq!(anim.heads().len(), 5);
}

#[test]
fn test_explosion_pen_thickens_each_step() {
    let lines = 3;
    let mut anim = FireworkAnimation::new(small_firework(lines, 4));
    while anim.advance() != AnimationEvent::Exploded {}
    anim.advance();
    anim.advance();
    anim.advance();

    let segments = anim.segments();
    assert_eq!(segments.len(), lines * 3);
    let mut widths: Vec<f64> = segments.iter().map(|s| s.width).collect();
    widths.dedup();
    let expected: Vec<f64> = (1..=3)
        .map(|j| BASE_PEN_WIDTH + PEN_WIDTH_INCREMENT * j as f64)
        .cycle()
        .take(lines * 3)
        .collect();
    assert_eq!(segments.iter().map(|s| s.width).collect::<Vec<_>>(), expected);
    assert!(widths.len() > 1);
}

#[test]
fn test_explosion_heads_follow_arms_in_lockstep() {
    let mut anim = FireworkAnimation::new(small_firework(6, 5));
    while anim.advance() != AnimationEvent::Exploded {}
    anim.advance();
    anim.advance();

    let heads = anim.heads();
    let explosion = anim.firework().explosion();
    for (head, arm) in heads.iter().zip(explosion.iter()) {
        assert_eq!(head.pos, arm.positions()[2]);
    }
}
