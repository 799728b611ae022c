// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Generates a PTY based integration test that runs in two processes.
///
/// The test binary is started once by `cargo test` (the controller). The macro opens a
/// 24x80 PTY pair and spawns the same test binary again, filtered to this one test, with
/// its stdin, stdout and stderr attached to the controlled side. The second process (the
/// controlled one) sees a real tty on stdin, so it can enter raw mode and read keys.
///
/// ```text
/// cargo test ─▶ $test_name (controller)
///                 │ openpty(24x80)
///                 │ spawn current_exe --test-threads 1 --nocapture $test_name
///                 │       with R3BL_TTY_PTY_TEST_CONTROLLED=1
///                 ▼
///               $controller(pty_pair, child)   ◀─ PTY I/O ─▶   $controlled()
///               writes keys, reads lines                        raw mode, prints
///                                                               results, exits
/// ```
///
/// # Notes
///
/// - Skipped (with a message) when [`is_ci::cached()`] is true, since CI runners often
///   lack a usable PTY device.
/// - `$controlled` must end the process with [`std::process::exit()`]. Returning would
///   run the rest of the test as if it were the controller.
/// - stdout and stderr of the controlled process are merged in the PTY. Filter the lines
///   you read by content, not by stream.
/// - Output written by the controlled process in raw mode has no `\n` to `\r\n`
///   translation. Use `\r\n` explicitly.
///
/// # Parameters
///
/// - `test_fn`: name of the generated `#[test]` function.
/// - `controller`: function taking `(portable_pty::PtyPair, ControlledChild)`.
/// - `controlled`: function that runs in the child process and never returns.
///
/// [`is_ci::cached()`]: https://docs.rs/is_ci
#[macro_export]
macro_rules! generate_pty_test {
    (
        $(#[$meta:meta])*
        test_fn: $test_name:ident,
        controller: $controller_fn:expr,
        controlled: $controlled_fn:expr
    ) => {
        $(#[$meta])*
        #[test]
        fn $test_name() {
            use portable_pty::{CommandBuilder, NativePtySystem, PtySize, PtySystem};
            use std::io::Write;

            const PTY_CONTROLLED_ENV_VAR: &str = "R3BL_TTY_PTY_TEST_CONTROLLED";

            let controlled_env_var = std::env::var(PTY_CONTROLLED_ENV_VAR);

            if controlled_env_var.is_err() && is_ci::cached() {
                println!("⏭️  Skipped in CI (requires a PTY)");
                return;
            }

            if controlled_env_var.is_ok() {
                print!("CONTROLLED_STARTING\r\n");
                std::io::stdout().flush().expect("Failed to flush stdout");
                $controlled_fn();
            }

            let pty_system = NativePtySystem::default();
            let pty_pair = pty_system
                .openpty(PtySize {
                    rows: 24,
                    cols: 80,
                    pixel_width: 0,
                    pixel_height: 0,
                })
                .expect("Failed to create PTY pair");

            let test_binary =
                std::env::current_exe().expect("Failed to get current executable");
            let mut cmd = CommandBuilder::new(&test_binary);
            cmd.env(PTY_CONTROLLED_ENV_VAR, "1");
            cmd.env("RUST_BACKTRACE", "1");
            cmd.args(&["--test-threads", "1", "--nocapture", stringify!($test_name)]);

            eprintln!("🚀 Controller: spawning {}", stringify!($test_name));
            let child = pty_pair
                .slave
                .spawn_command(cmd)
                .expect("Failed to spawn controlled process");

            $controller_fn(pty_pair, child);
        }
    };
}
