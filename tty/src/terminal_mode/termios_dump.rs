// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios VTIME VMIN VINTR VQUIT VERASE VKILL VSWTC NCCS

//! Field by field hex dump of terminal attributes, for the diagnostics channel.

use crate::{CRLF, fmt_hex};
use rustix::termios::{SpecialCodeIndex, SpecialCodes, Termios};
use std::fmt::{Display, Formatter, Result};

/// Displays every field of a [`Termios`] on its own `\r\n` terminated line, as 4 digit
/// hex, eg:
///
/// ```text
/// size_of::<Termios>()=44 NCCS=19 VMIN=6 VTIME=5
/// input_modes          0500 /* input mode flags */
/// output_modes         0005 /* output mode flags */
/// ...
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TermiosDump<'a>(pub &'a Termios);

impl Display for TermiosDump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let tio = self.0;

        let codes = &tio.special_codes;
        write!(
            f,
            "{CRLF}size_of::<Termios>()={} NCCS={} VMIN={} VTIME={}{CRLF}",
            size_of::<Termios>(),
            special_codes_len(),
            special_code_slot(codes, SpecialCodeIndex::VMIN),
            special_code_slot(codes, SpecialCodeIndex::VTIME),
        )?;

        write_field(f, "input_modes", u64::from(tio.input_modes.bits()), "input mode flags")?;
        write_field(f, "output_modes", u64::from(tio.output_modes.bits()), "output mode flags")?;
        write_field(f, "control_modes", u64::from(tio.control_modes.bits()), "control mode flags")?;
        write_field(f, "local_modes", u64::from(tio.local_modes.bits()), "local mode flags")?;

        #[cfg(any(target_os = "linux", target_os = "android"))]
        write_field(f, "line_discipline", u64::from(tio.line_discipline), "line discipline")?;

        for (label, index) in [
            ("special_codes[VINTR]", SpecialCodeIndex::VINTR),
            ("special_codes[VQUIT]", SpecialCodeIndex::VQUIT),
            ("special_codes[VERASE]", SpecialCodeIndex::VERASE),
            ("special_codes[VKILL]", SpecialCodeIndex::VKILL),
            ("special_codes[VEOF]", SpecialCodeIndex::VEOF),
            ("special_codes[VTIME]", SpecialCodeIndex::VTIME),
            ("special_codes[VMIN]", SpecialCodeIndex::VMIN),
        ] {
            write_field(f, label, u64::from(codes[index]), "control characters")?;
        }

        #[cfg(any(target_os = "linux", target_os = "android"))]
        write_field(
            f,
            "special_codes[VSWTC]",
            u64::from(codes[SpecialCodeIndex::VSWTC]),
            "control characters",
        )?;

        write_field(f, "input_speed", u64::from(tio.input_speed()), "input speed")?;
        write_field(f, "output_speed", u64::from(tio.output_speed()), "output speed")
    }
}

/// Number of special code slots (`NCCS`). [`SpecialCodes`] is a transparent wrapper
/// around the `c_cc` byte array, so its size is the slot count.
#[must_use]
pub fn special_codes_len() -> usize { size_of::<SpecialCodes>() }

/// Position of `index` in the `c_cc` array, eg: 6 for `VMIN` on Linux.
#[must_use]
pub fn special_code_slot(codes: &SpecialCodes, index: SpecialCodeIndex) -> usize {
    let base = std::ptr::from_ref(codes).cast::<u8>().addr();
    std::ptr::from_ref(&codes[index]).addr() - base
}

fn write_field(f: &mut Formatter<'_>, label: &str, value: u64, comment: &str) -> Result {
    write!(f, "{label:<22}{} /* {comment} */{CRLF}", fmt_hex(value, 4))
}
