// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios VTIME VMIN NCCS ICANON ISIG IEXTEN OPOST ICRNL INLCR IGNCR ISTRIP

//! Verifies the exact attributes that raw polling mode applies to a real terminal.

use crate::{ControlledChild, TerminalModeController, TermiosDump, VMIN_POLL_MODE,
            VTIME_POLL_MODE, special_code_slot, special_codes_len,
            assert_controlled_success, controlled_fail, controlled_print,
            controlled_succeed, controller_reader, generate_pty_test};
use rustix::termios::{self, ControlModes, InputModes, LocalModes, OutputModes,
                      SpecialCodeIndex};
use std::io;

generate_pty_test! {
    /// Checks:
    /// - Local modes: ICANON, ECHO, ISIG, IEXTEN off
    /// - Output modes: OPOST off
    /// - Control modes: CS8 on
    /// - Input modes: ICRNL, INLCR, IGNCR, IXON, ISTRIP off
    /// - Special codes: VMIN=0, VTIME=2 (return after 200ms idle)
    test_fn: test_raw_mode_flags,
    controller: controller_entry_point,
    controlled: controlled_entry_point
}

fn controller_entry_point(pty_pair: portable_pty::PtyPair, child: ControlledChild) {
    let reader = controller_reader(&pty_pair);
    let lines = assert_controlled_success(reader, pty_pair, child);
    assert!(lines.iter().any(|it| it.contains("VMIN=0 VTIME=2")));
}

fn controlled_entry_point() -> ! {
    let controller = match TerminalModeController::enter_raw_mode(false) {
        Ok(it) => it,
        Err(error) => controlled_fail(&format!("enter_raw_mode: {error}")),
    };

    let current = match termios::tcgetattr(io::stdin()) {
        Ok(it) => it,
        Err(error) => controlled_fail(&format!("tcgetattr: {error}")),
    };

    for (flag, name) in [
        (LocalModes::ICANON, "ICANON"),
        (LocalModes::ECHO, "ECHO"),
        (LocalModes::ISIG, "ISIG"),
        (LocalModes::IEXTEN, "IEXTEN"),
    ] {
        if current.local_modes.contains(flag) {
            controlled_fail(&format!("{name} is still on"));
        }
    }

    if current.output_modes.contains(OutputModes::OPOST) {
        controlled_fail("OPOST is still on");
    }

    if !current.control_modes.contains(ControlModes::CS8) {
        controlled_fail("CS8 is off");
    }

    let unwanted_input_modes = InputModes::ICRNL
        | InputModes::INLCR
        | InputModes::IGNCR
        | InputModes::IXON
        | InputModes::ISTRIP;
    if current.input_modes.intersects(unwanted_input_modes) {
        controlled_fail("input processing modes are still on");
    }

    let vmin = current.special_codes[SpecialCodeIndex::VMIN];
    let vtime = current.special_codes[SpecialCodeIndex::VTIME];
    if vmin != VMIN_POLL_MODE || vtime != VTIME_POLL_MODE {
        controlled_fail(&format!("VMIN={vmin} VTIME={vtime}"));
    }
    controlled_print(&format!("VMIN={vmin} VTIME={vtime}"));

    let dump = TermiosDump(&current).to_string();
    let header = format!(
        "NCCS={} VMIN={} VTIME={}",
        special_codes_len(),
        special_code_slot(&current.special_codes, SpecialCodeIndex::VMIN),
        special_code_slot(&current.special_codes, SpecialCodeIndex::VTIME),
    );
    if !dump.contains(&header) || !dump.contains("special_codes[VMIN]   0000") {
        controlled_fail(&format!("unexpected termios dump: {dump:?}"));
    }
    #[cfg(target_os = "linux")]
    if !header.ends_with("NCCS=19 VMIN=6 VTIME=5") || !dump.contains("special_codes[VSWTC]") {
        controlled_fail(&format!("unexpected termios dump: {dump:?}"));
    }

    if controller.raw().local_modes != current.local_modes
        || controller.raw().input_modes != current.input_modes
    {
        controlled_fail("applied attributes differ from the derived ones");
    }

    drop(controller);
    controlled_succeed("raw polling mode flags verified");
}
