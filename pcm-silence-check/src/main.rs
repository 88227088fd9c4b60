// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use clap::Parser;
use pcm_silence_check::{Args, run, setup_logging};

fn main() -> ExitCode {
    setup_logging();
    run(&Args::parse())
}
