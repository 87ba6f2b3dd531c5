use fireworks_timer::physic_engine::config::PhysicConfig;
use fireworks_timer::physic_engine::types::{Color, Head, Position, Segment, UpdateResult};
use fireworks_timer::physic_engine::{PhysicEngine, PhysicEngineFull, PhysicEngineIterator};
use fireworks_timer::renderer_engine::RendererEngine;
use std::cell::RefCell;
use std::rc::Rc;

#[allow(dead_code)]
#[derive(Default)]
pub struct DummyPhysic {
    config: PhysicConfig,
}

impl PhysicEngine for DummyPhysic {
    fn set_window_size(&mut self, _width: f32, _height: f32) {}
    fn update(&mut self, _dt: f32) -> UpdateResult {
        UpdateResult::default()
    }
    fn is_show_over(&self) -> bool {
        true
    }
    fn reload_config(&mut self, _config: &PhysicConfig) -> bool {
        false
    }
    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }
}

impl PhysicEngineIterator for DummyPhysic {
    fn iter_segments<'a>(&'a self) -> Box<dyn Iterator<Item = Segment> + 'a> {
        Box::new(std::iter::empty())
    }
    fn iter_heads<'a>(&'a self) -> Box<dyn Iterator<Item = Head> + 'a> {
        Box::new(std::iter::empty())
    }
}

/// Moteur qui expose un segment et une pointe fixes, et trace ses appels.
#[allow(dead_code)]
pub struct TestPhysic {
    log: Rc<RefCell<Vec<String>>>,
    config: PhysicConfig,
}

#[allow(dead_code)]
impl TestPhysic {
    pub fn new(log: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            log,
            config: PhysicConfig::default(),
        }
    }
}

impl PhysicEngine for TestPhysic {
    fn set_window_size(&mut self, _width: f32, _height: f32) {
        self.log.borrow_mut().push("physic.set_window_size".into());
    }
    fn update(&mut self, _dt: f32) -> UpdateResult {
        self.log.borrow_mut().push("physic.update".into());
        UpdateResult::default()
    }
    fn is_show_over(&self) -> bool {
        false
    }
    fn close(&mut self) {
        self.log.borrow_mut().push("physic.close".into());
    }
    fn reload_config(&mut self, _config: &PhysicConfig) -> bool {
        self.log.borrow_mut().push("physic.reload_config".into());
        false
    }
    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }
}

impl PhysicEngineIterator for TestPhysic {
    fn iter_segments<'a>(&'a self) -> Box<dyn Iterator<Item = Segment> + 'a> {
        Box::new(std::iter::once(Segment {
            from: Position::new(0.0, 0.0),
            to: Position::new(10.0, 0.0),
            color: Color::Red,
            width: 1.0,
        }))
    }
    fn iter_heads<'a>(&'a self) -> Box<dyn Iterator<Item = Head> + 'a> {
        Box::new(std::iter::once(Head {
            pos: Position::new(10.0, 0.0),
            color: Color::Red,
        }))
    }
}

#[allow(dead_code)]
#[derive(Default)]
pub struct DummyRenderer;

impl RendererEngine for DummyRenderer {
    fn render_frame<P: PhysicEngineFull>(&mut self, _physic: &P) -> usize {
        0
    }
    fn set_window_size(&mut self, _width: i32, _height: i32) {}
    fn close(&mut self) {}
}

/// Renderer qui compte ce que le moteur lui expose.
#[allow(dead_code)]
pub struct TestRenderer {
    log: Rc<RefCell<Vec<String>>>,
}

#[allow(dead_code)]
impl TestRenderer {
    pub fn new(log: Rc<RefCell<Vec<String>>>) -> Self {
        Self { log }
    }
}

impl RendererEngine for TestRenderer {
    fn render_frame<P: PhysicEngineFull>(&mut self, physic: &P) -> usize {
        let drawn = physic.iter_segments().count() + physic.iter_heads().count();
        self.log.borrow_mut().push("renderer.render_frame".into());
        drawn
    }
    fn set_window_size(&mut self, _width: i32, _height: i32) {
        self.log.borrow_mut().push("renderer.set_window_size".into());
    }
    fn close(&mut self) {
        self.log.borrow_mut().push("renderer.close".into());
    }
}
