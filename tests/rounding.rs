use binary32_text::fields::{
    field_value, round_to_nearest_even, round_up, to_fixed_width, BIAS,
};

#[test]
fn guard_bits_below_half_truncate() {
    // Guard bits 0xx: always round down, whatever the kept bits end in.
    let kept_odd = "00000000000000000000011";
    assert_eq!(round_to_nearest_even(&format!("{kept_odd}011")), kept_odd);
    assert_eq!(round_to_nearest_even(&format!("{kept_odd}000")), kept_odd);
}

#[test]
fn tie_with_even_kept_bit_rounds_down() {
    // Guard bits exactly 100 with an even (0) last kept bit: no increment.
    let kept_even = "00000000000000000000010";
    assert_eq!(round_to_nearest_even(&format!("{kept_even}100")), kept_even);
}

#[test]
fn tie_with_odd_kept_bit_rounds_up() {
    // Guard bits exactly 100 with an odd (1) last kept bit: one increment at
    // the LSB.
    assert_eq!(
        round_to_nearest_even("00000000000000000000011100"),
        "00000000000000000000100"
    );
}

#[test]
fn guard_bits_above_half_round_up() {
    for guard in ["101", "110", "111"] {
        assert_eq!(
            round_to_nearest_even(&format!("00000000000000000000010{guard}")),
            "00000000000000000000011",
            "guard {guard}"
        );
    }
}

#[test]
fn round_up_propagates_the_carry_through_trailing_ones() {
    assert_eq!(
        round_up("10101111111111111111111"),
        "10110000000000000000000"
    );
    assert_eq!(
        round_up("11111111111111111111110"),
        "11111111111111111111111"
    );
    // Carry travels all the way to the top bit when it is the only zero.
    assert_eq!(
        round_up("01111111111111111111111"),
        "10000000000000000000000"
    );
}

#[test]
fn round_up_saturates_on_all_ones() {
    // An all-ones fraction cannot absorb the carry; it is returned unchanged
    // rather than overflowing into the exponent.
    let all_ones = "11111111111111111111111";
    assert_eq!(round_up(all_ones), all_ones);
}

#[test]
fn fixed_width_rendering_left_pads_with_zeros() {
    assert_eq!(to_fixed_width(BIAS as u32, 8), "01111111");
    assert_eq!(to_fixed_width(5, 8), "00000101");
    assert_eq!(to_fixed_width(255, 8), "11111111");
    assert_eq!(to_fixed_width(0, 23), "0".repeat(23));
}

#[test]
fn field_values_parse_big_endian() {
    assert_eq!(field_value("10000000"), 128);
    assert_eq!(field_value("01111011"), 123);
    assert_eq!(field_value("00000000000000000000000"), 0);
}
