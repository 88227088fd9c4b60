// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Tests of channel area geometry and the layout builders.

use pcm_silence::{ChannelArea, FillRegion, LayoutKind};

#[test]
fn interleaved_areas() {
    let areas = LayoutKind::Interleaved.build(3, 5, 16, 0);
    assert_eq!(
        areas,
        vec![
            ChannelArea::new(0, 0, 48),
            ChannelArea::new(0, 16, 48),
            ChannelArea::new(0, 32, 48),
        ]
    );
    // Frame 2 of channel 1 sits after two full frames and one sample.
    assert_eq!(areas[1].sample_byte_offset(2), Some(2 * 6 + 2));
}

#[test]
fn non_interleaved_areas() {
    let areas = LayoutKind::NonInterleaved.build(3, 5, 24, 0);
    assert_eq!(
        areas,
        vec![
            ChannelArea::new(0, 0, 24),
            ChannelArea::new(0, 120, 24),
            ChannelArea::new(0, 240, 24),
        ]
    );
    assert_eq!(areas[2].sample_byte_offset(4), Some(30 + 12));
    assert!(areas.iter().all(|area| area.is_contiguous(24)));
}

#[test]
fn mono_layouts_coincide() {
    for width in [8, 16, 24, 32, 64] {
        assert_eq!(
            LayoutKind::Interleaved.build(1, 7, width, 0),
            LayoutKind::NonInterleaved.build(1, 7, width, 0)
        );
    }
}

#[test]
fn base_offset_is_shared_by_all_areas() {
    let areas = LayoutKind::Interleaved.build(4, 2, 8, 10);
    assert!(areas.iter().all(|area| area.base == 10));
    assert_eq!(areas[3].sample_byte_offset(1), Some(10 + 3 + 4));
    assert_eq!(areas[3].sample_bit_offset(1), Some(80 + 24 + 32));
}

#[test]
fn labels() {
    assert_eq!(LayoutKind::Interleaved.label(), "interleaved");
    assert_eq!(LayoutKind::NonInterleaved.label(), "non-interleaved");
    assert_eq!(LayoutKind::NonInterleaved.to_string(), "non-interleaved");
    assert_eq!(
        LayoutKind::ALL,
        [LayoutKind::Interleaved, LayoutKind::NonInterleaved]
    );
}

#[test]
fn build_into_replaces_previous_areas() {
    let mut areas = LayoutKind::Interleaved.build(8, 4, 32, 0);
    let label = LayoutKind::NonInterleaved.build_into(&mut areas, 2, 4, 16, 0);
    assert_eq!(label, "non-interleaved");
    assert_eq!(areas, LayoutKind::NonInterleaved.build(2, 4, 16, 0));
}

#[test]
fn sample_ranges() {
    let area = ChannelArea::new(4, 16, 32);
    assert_eq!(area.sample_byte_offset(3), Some(4 + 2 + 12));
    assert_eq!(area.sample_range(3, 2), Some(18..20));
}

#[test]
fn sample_offsets_that_overflow_are_none() {
    let area = ChannelArea::new(0, 8, 16);
    assert_eq!(area.sample_bit_offset(usize::MAX), None);
    assert_eq!(area.sample_byte_offset(usize::MAX), None);
    assert_eq!(area.sample_range(usize::MAX, 2), None);
    assert_eq!(ChannelArea::new(usize::MAX, 0, 8).sample_bit_offset(0), None);
    assert_eq!(ChannelArea::new(usize::MAX, 0, 8).sample_range(0, 1), None);
}

#[test]
fn fill_region() {
    let region = FillRegion::new(3, 4, 2);
    assert_eq!(region.frame_range(), 3..7);
    assert!(!region.is_empty());
    assert!(FillRegion::new(3, 0, 2).is_empty());
    assert!(FillRegion::new(3, 4, 0).is_empty());

    assert_eq!(region.last_frame(), Some(6));
    assert_eq!(FillRegion::new(3, 0, 2).last_frame(), None);
    assert_eq!(FillRegion::new(usize::MAX, 1, 1).last_frame(), Some(usize::MAX));
    assert_eq!(FillRegion::new(usize::MAX, 2, 1).last_frame(), None);
    assert_eq!(FillRegion::new(usize::MAX, 2, 1).frame_range(), usize::MAX..usize::MAX);
}
