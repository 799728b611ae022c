// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios VTIME VMIN ICANON VINTR VQUIT VERASE VKILL

//! Verifies that leaving raw mode reapplies exactly the attributes captured before it,
//! both through an explicit restore and through drop, over several cycles.

use crate::{ControlledChild, TerminalModeController, assert_controlled_success,
            controlled_fail, controlled_print, controlled_succeed, controller_reader,
            generate_pty_test};
use rustix::termios::{self, LocalModes, SpecialCodeIndex, Termios};
use std::io;

const CYCLES: usize = 3;

generate_pty_test! {
    /// Captures the attributes, then enters and leaves raw mode [`CYCLES`] times
    /// (alternating between `restore()` and drop), recapturing after each cycle.
    test_fn: test_restore_round_trip,
    controller: controller_entry_point,
    controlled: controlled_entry_point
}

fn controller_entry_point(pty_pair: portable_pty::PtyPair, child: ControlledChild) {
    let reader = controller_reader(&pty_pair);
    let lines = assert_controlled_success(reader, pty_pair, child);
    let cycles = lines.iter().filter(|it| it.starts_with("cycle ")).count();
    assert_eq!(cycles, CYCLES);
}

fn capture() -> Termios {
    match termios::tcgetattr(io::stdin()) {
        Ok(it) => it,
        Err(error) => controlled_fail(&format!("tcgetattr: {error}")),
    }
}

/// Names of the fields that differ between `lhs` and `rhs`.
fn differences(lhs: &Termios, rhs: &Termios) -> Vec<&'static str> {
    let mut it = vec![];
    if lhs.input_modes != rhs.input_modes {
        it.push("input_modes");
    }
    if lhs.output_modes != rhs.output_modes {
        it.push("output_modes");
    }
    if lhs.control_modes != rhs.control_modes {
        it.push("control_modes");
    }
    if lhs.local_modes != rhs.local_modes {
        it.push("local_modes");
    }
    for (index, name) in [
        (SpecialCodeIndex::VINTR, "VINTR"),
        (SpecialCodeIndex::VQUIT, "VQUIT"),
        (SpecialCodeIndex::VERASE, "VERASE"),
        (SpecialCodeIndex::VKILL, "VKILL"),
        (SpecialCodeIndex::VMIN, "VMIN"),
        (SpecialCodeIndex::VTIME, "VTIME"),
    ] {
        if lhs.special_codes[index] != rhs.special_codes[index] {
            it.push(name);
        }
    }
    if lhs.input_speed() != rhs.input_speed() || lhs.output_speed() != rhs.output_speed() {
        it.push("speed");
    }
    it
}

fn controlled_entry_point() -> ! {
    let before = capture();
    if !before.local_modes.contains(LocalModes::ICANON) {
        controlled_fail("terminal did not start in canonical mode");
    }

    for cycle in 0..CYCLES {
        let mut controller = match TerminalModeController::enter_raw_mode(false) {
            Ok(it) => it,
            Err(error) => controlled_fail(&format!("enter_raw_mode: {error}")),
        };

        if capture().local_modes.contains(LocalModes::ICANON) {
            controlled_fail("raw mode was not applied");
        }
        if !differences(controller.original(), &before).is_empty() {
            controlled_fail("original snapshot differs from the pre raw capture");
        }

        if cycle % 2 == 0 {
            if let Err(error) = controller.restore() {
                controlled_fail(&format!("restore: {error}"));
            }
            // A second restore (and the one from drop) must be a no-op.
            if let Err(error) = controller.restore() {
                controlled_fail(&format!("second restore: {error}"));
            }
        }
        drop(controller);

        let diff = differences(&capture(), &before);
        if !diff.is_empty() {
            controlled_fail(&format!("cycle {cycle} changed {diff:?}"));
        }
        controlled_print(&format!("cycle {cycle} restored"));
    }

    controlled_succeed("attributes round trip exactly");
}
