use behavior_tree::builder::{
    action, condition, inverter, parallel, repeat, selector, sequence, wait,
};
use behavior_tree::{Behavior, Status};

#[derive(Default)]
struct Guard {
    alert: bool,
    steps: u32,
}

fn patrol_tree() -> Box<dyn Behavior<Guard>> {
    selector(vec![
        sequence(vec![
            condition(|g: &Guard| g.alert),
            wait(0.3),
            action(|g: &mut Guard, _dt| {
                g.alert = false;
                Status::Success
            }),
        ]),
        sequence(vec![
            inverter(condition(|g: &Guard| g.steps >= 10)),
            repeat(
                action(|g: &mut Guard, _dt| {
                    g.steps += 1;
                    Status::Success
                }),
                2,
            ),
            parallel(vec![wait(0.2), wait(0.4)], 2),
        ]),
    ])
}

fn run(tree: &mut Box<dyn Behavior<Guard>>, frames: usize) -> Vec<Status> {
    let mut guard = Guard {
        alert: true,
        steps: 0,
    };
    (0..frames).map(|_| tree.tick(&mut guard, 0.1)).collect()
}

#[test]
fn reset_tree_replays_fresh_statuses() {
    let expected = run(&mut patrol_tree(), 40);

    let mut reused = patrol_tree();
    // Leave cursors, timers and counters mid-flight.
    let _ = run(&mut reused, 7);
    reused.reset();

    assert_eq!(run(&mut reused, 40), expected);
}

#[test]
fn reset_is_idempotent() {
    let expected = run(&mut patrol_tree(), 25);

    let mut reused = patrol_tree();
    let _ = run(&mut reused, 3);
    reused.reset();
    reused.reset();

    assert_eq!(run(&mut reused, 25), expected);
}

#[test]
fn alert_branch_preempts_patrol() {
    let mut tree = patrol_tree();
    let statuses = run(&mut tree, 3);

    // Wait(0.3) needs three 0.1s frames; floating point accumulation may
    // need one more, so only the first two frames are fixed.
    assert_eq!(statuses[0], Status::Running);
    assert_eq!(statuses[1], Status::Running);
}
