use super::*;

#[test]
fn new_controller_is_idle() {
    let controller = PollController::new();
    assert!(!controller.is_running());
}

#[test]
fn begin_marks_generation_current() {
    let controller = PollController::new();
    let generation = controller.begin();
    assert!(controller.is_running());
    assert!(controller.is_current(generation));
}

#[test]
fn stop_ends_current_generation() {
    let controller = PollController::new();
    let generation = controller.begin();
    controller.stop();
    assert!(!controller.is_running());
    assert!(!controller.is_current(generation));
}

#[test]
fn restart_retires_previous_loop() {
    let controller = PollController::new();
    let first = controller.begin();
    let second = controller.begin();
    assert!(!controller.is_current(first));
    assert!(controller.is_current(second));
}

#[test]
fn clones_share_lifecycle() {
    let controller = PollController::new();
    let handle = controller.clone();
    let generation = controller.begin();
    handle.stop();
    assert!(!controller.is_current(generation));
}
