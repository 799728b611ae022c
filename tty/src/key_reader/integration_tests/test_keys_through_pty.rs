// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Writes keys one at a time into a PTY and checks the names that the controlled
//! process reports for them, and that background tasks ticked while it was idle.

use crate::{BackgroundTask, ControlledChild, LogicalKey, READY_MARKER,
            TtySession, TtySessionConfig, assert_controlled_success, controlled_fail,
            controlled_print, controlled_succeed, controller_reader, generate_pty_test,
            read_until_marker};
use std::{cell::RefCell,
          io::Write,
          rc::Rc,
          thread,
          time::Duration};

/// Longer than one idle timeout (200ms), so each write lands in its own read.
const PAUSE_BETWEEN_KEYS: Duration = Duration::from_millis(300);

/// Long enough for at least two idle polls before the first key.
const PAUSE_BEFORE_FIRST_KEY: Duration = Duration::from_millis(700);

const KEYS_TO_SEND: [&[u8]; 6] = [
    b"\x1b[A",
    b"a",
    b"\x1b[3~",
    b"\x1b[15~",
    b"\x1bOQ",
    b"q",
];

const QUIT_KEY: LogicalKey = LogicalKey::Char(b'q');

generate_pty_test! {
    /// Sends arrow up, a literal, Delete, F5, F2 and finally `q`, each in its own write.
    test_fn: test_keys_decoded_through_pty,
    controller: controller_entry_point,
    controlled: controlled_entry_point
}

fn controller_entry_point(pty_pair: portable_pty::PtyPair, child: ControlledChild) {
    let mut reader = controller_reader(&pty_pair);
    let (_, ready) = read_until_marker(&mut reader, READY_MARKER);
    assert!(ready, "Controlled process never became ready");

    let mut writer = pty_pair.master.take_writer().expect("Failed to take writer");
    thread::sleep(PAUSE_BEFORE_FIRST_KEY);
    for key in KEYS_TO_SEND {
        writer.write_all(key).expect("Failed to write key");
        writer.flush().expect("Failed to flush writer");
        thread::sleep(PAUSE_BETWEEN_KEYS);
    }
    drop(writer);

    let lines = assert_controlled_success(reader, pty_pair, child);
    let keys: Vec<&str> = lines
        .iter()
        .filter_map(|it| it.strip_prefix("key: "))
        .collect();
    assert_eq!(
        keys,
        vec![
            "KEY_ARROW_UP",
            "a",
            "KEY_DELETE",
            "KEY_F5",
            "KEY_F2",
            "q"
        ]
    );
}

#[derive(Default)]
struct IdleTickCounter {
    ticks: usize,
}

impl BackgroundTask for IdleTickCounter {
    fn run_tick(&mut self) -> miette::Result<()> {
        self.ticks += 1;
        Ok(())
    }
}

fn controlled_entry_point() -> ! {
    let mut session = match TtySession::try_new(TtySessionConfig::default()) {
        Ok(it) => it,
        Err(error) => controlled_fail(&format!("TtySession::try_new: {error}")),
    };
    let counter = Rc::new(RefCell::new(IdleTickCounter::default()));
    session.add_background_task(counter.clone());

    controlled_print(READY_MARKER);

    loop {
        let key = match session.get_next_key() {
            Ok(it) => it,
            Err(error) => controlled_fail(&format!("get_next_key: {error}")),
        };
        controlled_print(&format!("key: {key}"));
        if key == QUIT_KEY {
            break;
        }
    }

    let ticks = counter.borrow().ticks;
    if let Err(error) = session.finish() {
        controlled_fail(&format!("finish: {error}"));
    }

    // 700ms of idle polling before the first key, plus one tick per read.
    if ticks < KEYS_TO_SEND.len() + 2 {
        controlled_fail(&format!("only {ticks} ticks"));
    }
    controlled_succeed(&format!("{} keys, {ticks} ticks", KEYS_TO_SEND.len()));
}
