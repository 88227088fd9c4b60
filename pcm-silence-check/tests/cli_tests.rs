// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Option parsing and the mapping of options onto the sweep configuration.

use std::process::ExitCode;

use clap::Parser;
use pcm_silence::{
    Error, FillRejectedPolicy, FormatSelection, LayoutKind, MismatchPolicy, MismatchReport,
    RandomSource, SampleFormat, SweepConfig, SweepReport,
    sweep::{FormatOutcome, FormatStatus, Mismatch},
};
use pcm_silence_check::{Args, render, render_json, run};

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("pcm-silence-check").chain(args.iter().copied()))
        .unwrap()
}

#[test]
fn defaults_sweep_everything_at_the_limits() {
    let args = parse(&[]);
    assert_eq!(args.random_device, std::path::Path::new("/dev/urandom"));
    assert!(!args.json);

    let config = args.sweep_config().unwrap();
    assert_eq!(config, SweepConfig::default());
}

#[test]
fn short_and_long_options() {
    let short = parse(&["-d", "3", "-c", "4", "-s", "2", "-f", "S16_LE"]);
    let long = parse(&[
        "--dst-offset",
        "3",
        "--frame-count=4",
        "--samples-per-frame",
        "2",
        "--sample-format",
        "s16_le",
    ]);

    for args in [short, long] {
        let config = args.sweep_config().unwrap();
        assert_eq!(config.max_dst_offset, 3);
        assert_eq!(config.max_frames, 4);
        assert_eq!(config.max_channels, 2);
        assert_eq!(config.formats, FormatSelection::Single(SampleFormat::S16Le));
    }
}

#[test]
fn policy_flags() {
    let config = parse(&[
        "--collect-mismatches",
        "--skip-rejected-formats",
        "--no-outside-check",
    ])
    .sweep_config()
    .unwrap();
    assert_eq!(config.mismatch_policy, MismatchPolicy::CollectTrial);
    assert_eq!(config.fill_rejected_policy, FillRejectedPolicy::SkipFormat);
    assert!(!config.check_outside);
}

#[test]
fn unknown_format_is_rejected() {
    let err = parse(&["-f", "S16"]).sweep_config().unwrap_err();
    assert!(matches!(err, Error::UnknownFormat(name) if name == "S16"));
}

#[test]
fn out_of_range_bounds_are_rejected() {
    for args in [
        &["-s", "0"][..],
        &["-s", "17"],
        &["-c", "0"],
        &["-c", "33"],
        &["-d", "65"],
    ] {
        let err = parse(args).sweep_config().unwrap_err();
        assert!(matches!(err, Error::InvalidBound { .. }), "{args:?}: {err}");
    }
    assert_eq!(parse(&["-d", "0"]).sweep_config().unwrap().max_dst_offset, 0);
}

#[test]
fn non_numeric_bounds_fail_to_parse() {
    assert!(Args::try_parse_from(["pcm-silence-check", "-c", "many"]).is_err());
    assert!(Args::try_parse_from(["pcm-silence-check", "-d", "-1"]).is_err());
}

#[test]
fn seed_selects_the_pseudo_random_generator() {
    let args = parse(&["--seed", "7", "--random-device", "/nonexistent/random"]);
    assert_eq!(args.seed, Some(7));
    let mut random = args.random_source().unwrap();
    let mut buf = [0; 16];
    random.fill_random(&mut buf).unwrap();

    let args = parse(&["--random-device", "/nonexistent/random"]);
    if args.seed.is_none() {
        assert!(matches!(args.random_source(), Err(Error::Io(_))));
    }
}

#[test]
fn run_exit_status() {
    let passing = parse(&["--seed", "1", "-f", "U16_BE", "-s", "2", "-c", "2", "-d", "2"]);
    assert_eq!(run(&passing), ExitCode::SUCCESS);

    let skipped = parse(&["--seed", "1", "-f", "GSM", "--json"]);
    assert_eq!(run(&skipped), ExitCode::SUCCESS);

    let bad_bound = parse(&["--seed", "1", "-c", "0"]);
    assert_eq!(run(&bad_bound), ExitCode::FAILURE);

    let missing_device = parse(&["-f", "S8", "--random-device", "/nonexistent/random"]);
    if missing_device.seed.is_none() {
        assert_eq!(run(&missing_device), ExitCode::FAILURE);
    }
}

fn mismatch_report() -> MismatchReport {
    let mismatch = |channel| Mismatch {
        channel,
        frame: 1,
        byte_offset: 4 + channel * 2,
        expected: vec![0x00, 0x80],
        actual: vec![0x00, 0x00],
    };
    MismatchReport {
        format: SampleFormat::U16Le,
        physical_width: 16,
        layout: LayoutKind::Interleaved,
        dst_offset: 0,
        channels: 2,
        frames: 2,
        mismatches: vec![mismatch(0), mismatch(1)],
        corruptions: Vec::new(),
    }
}

#[test]
fn mismatch_lines_are_rendered_once() {
    let outcome = Err(Error::MismatchDetected(Box::new(mismatch_report())));
    let (lines, status) = render(&outcome, false);

    assert_eq!(status, ExitCode::FAILURE);
    assert_eq!(
        lines,
        [
            "testcase: U16_LE",
            "  phys_width 16, dst_offset 000, ch 000/(002), frames 001/(002), interleaved",
            "  phys_width 16, dst_offset 000, ch 001/(002), frames 001/(002), interleaved",
            "  failed due to silence mismatch.",
        ]
    );
}

#[test]
fn json_mismatch_report() {
    let outcome = Err(Error::MismatchDetected(Box::new(mismatch_report())));
    let (lines, status) = render(&outcome, true);

    assert_eq!(status, ExitCode::FAILURE);
    assert_eq!(lines.len(), 1);
    let json: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(json["format"], "U16_LE");
    assert_eq!(json["mismatches"].as_array().unwrap().len(), 2);
}

#[test]
fn serialization_failure_fails_the_run() {
    for status in [ExitCode::SUCCESS, ExitCode::FAILURE] {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let (lines, rendered) = render_json(Err(err), status);
        assert_eq!(rendered, ExitCode::FAILURE);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Fail to serialize report: "), "{}", lines[0]);
    }
    assert_eq!(
        render_json(Ok("{}".to_string()), ExitCode::SUCCESS),
        (vec!["{}".to_string()], ExitCode::SUCCESS)
    );
}

#[test]
fn summary_lists_rejected_formats() {
    let outcome = |format, status| FormatOutcome { format, status };
    let report = SweepReport {
        outcomes: vec![
            outcome(SampleFormat::S8, FormatStatus::Passed { trials: 10 }),
            outcome(SampleFormat::ImaAdpcm, FormatStatus::Skipped),
            outcome(
                SampleFormat::DsdU8,
                FormatStatus::Rejected {
                    reason: "not supported".to_string(),
                },
            ),
            outcome(
                SampleFormat::DsdU16Le,
                FormatStatus::Rejected {
                    reason: "not supported".to_string(),
                },
            ),
        ],
    };

    let (lines, status) = render(&Ok(report.clone()), false);
    assert_eq!(status, ExitCode::SUCCESS);
    assert_eq!(
        lines,
        [
            "passed: 1 format(s), 10 trial(s); skipped: 1 ineligible format(s)",
            "rejected by the fill, not tested: DSD_U8, DSD_U16_LE",
        ]
    );

    let full = SweepReport {
        outcomes: report.outcomes[..2].to_vec(),
    };
    let (lines, _) = render(&Ok(full), false);
    assert_eq!(lines.len(), 1);
}

#[test]
fn other_failures_are_rendered_with_their_reason() {
    let outcome = Err(Error::RandomSourceExhausted {
        requested: 64,
        delivered: 40,
    });
    let (lines, status) = render(&outcome, false);
    assert_eq!(status, ExitCode::FAILURE);
    assert_eq!(
        lines,
        ["  failed due to Random source exhausted: requested 64 byte(s), got 40."]
    );
}
