use std::collections::VecDeque;

use life_core::patterns;
use life_core::{
    CELLS_X, CELLS_Y, ColorMode, DrawList, FrameController, FrameHost, InputEdges, LifeConfig, Rgb,
};

#[derive(Default)]
struct ScriptedHost {
    pending: usize,
    inputs: VecDeque<InputEdges>,
    submitted: Vec<DrawList>,
}

impl FrameHost for ScriptedHost {
    fn pending_frames(&self) -> usize {
        self.pending
    }

    fn poll_input(&mut self) -> InputEdges {
        self.inputs.pop_front().unwrap_or_default()
    }

    fn submit_frame(&mut self, frame: &DrawList) {
        self.submitted.push(frame.clone());
    }
}

const RESET: InputEdges = InputEdges { reset: true, toggle_color: false };
const TOGGLE: InputEdges = InputEdges { reset: false, toggle_color: true };

fn controller() -> FrameController {
    FrameController::new(LifeConfig { seed: Some(11), ..LifeConfig::default() }).unwrap()
}

fn run(controller: &mut FrameController, host: &mut ScriptedHost, frames: usize) {
    for _ in 0..frames {
        controller.run_frame(host).unwrap();
    }
}

#[test]
fn ticks_every_eighth_frame() {
    let mut controller = controller();
    let mut host = ScriptedHost::default();
    let mut ticked_on = Vec::new();
    for _ in 0..25 {
        let frame = controller.state().frame;
        if controller.run_frame(&mut host).unwrap().ticked {
            ticked_on.push(frame);
        }
    }
    assert_eq!(ticked_on, vec![0, 8, 16, 24]);
    assert_eq!(controller.state().ticks, 4);
    assert_eq!(controller.state().frame, 25);
    assert_eq!(host.submitted.len(), 25);
}

#[test]
fn active_buffer_flips_on_each_tick() {
    let mut controller = controller();
    let mut host = ScriptedHost::default();
    assert_eq!(controller.state().active, 0);
    run(&mut controller, &mut host, 1);
    assert_eq!(controller.state().active, 1);
    run(&mut controller, &mut host, 8);
    assert_eq!(controller.state().active, 0);
}

#[test]
fn backlog_skips_drawing_but_not_simulation() {
    let mut controller = controller();
    let mut host = ScriptedHost { pending: 2, ..ScriptedHost::default() };
    run(&mut controller, &mut host, 16);
    assert!(host.submitted.is_empty());
    assert_eq!(controller.state().frame, 16);
    assert_eq!(controller.state().ticks, 2);

    host.pending = 1;
    let report = controller.run_frame(&mut host).unwrap();
    assert!(report.presented);
    assert_eq!(host.submitted.len(), 1);
}

#[test]
fn reset_restamps_the_board_and_keeps_counters() {
    let mut controller = controller();
    let mut host = ScriptedHost::default();
    run(&mut controller, &mut host, 13);

    host.inputs.push_back(RESET);
    let report = controller.run_frame(&mut host).unwrap();
    assert!(report.reset);

    let state = *controller.state();
    assert_eq!(state.frame, 14);
    assert_eq!(state.ticks, 2);
    for row in controller.store().grid(state.active) {
        for cell in row {
            assert_eq!(cell.last_changed, 13);
        }
    }
}

#[test]
fn toggle_switches_palette_and_background() {
    let mut controller = controller();
    let mut host = ScriptedHost::default();
    assert_eq!(controller.state().color_mode, ColorMode::Grayscale);

    host.inputs.push_back(TOGGLE);
    run(&mut controller, &mut host, 2);
    assert_eq!(controller.state().color_mode, ColorMode::Hue);
    assert_eq!(host.submitted[0].clear, Rgb::WHITE);
    assert_eq!(host.submitted[1].clear, Rgb::BLACK);

    host.inputs.push_back(TOGGLE);
    run(&mut controller, &mut host, 1);
    assert_eq!(controller.state().color_mode, ColorMode::Grayscale);
}

#[test]
fn submitted_quads_match_live_cells() {
    let mut controller = controller();
    let mut host = ScriptedHost::default();
    let live = controller.store().alive_count(controller.state().active);
    run(&mut controller, &mut host, 1);
    assert_eq!(host.submitted[0].quads().len(), live);
    assert_eq!(host.submitted[0].capacity(), CELLS_X * CELLS_Y);
}

#[test]
fn pattern_start_is_centred() {
    let blinker = patterns::find("blinker").unwrap();
    let config = LifeConfig { seed: Some(1), ..LifeConfig::default() };
    let mut controller: FrameController = FrameController::with_pattern(config, blinker).unwrap();
    let mut host = ScriptedHost::default();
    run(&mut controller, &mut host, 1);

    let coords: Vec<_> = host.submitted[0].quads().iter().map(|q| (q.x, q.y)).collect();
    assert_eq!(coords, vec![(-10, -5), (-5, -5), (0, -5)]);

    // The tick on frame 0 turned it vertical
    let live: Vec<_> = controller
        .store()
        .alive_cells(controller.state().active)
        .map(|(row, col, _)| (row, col))
        .collect();
    assert_eq!(live, vec![(18, 24), (19, 24), (20, 24)]);
}
