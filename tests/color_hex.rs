use function_graph_wasm::domain::GraphError;
use function_graph_wasm::domain::functions::{PaletteColor, Rgba};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

#[quickcheck]
fn hex_round_trips(r: u8, g: u8, b: u8) -> bool {
    let color = Rgba::opaque(r, g, b);
    Rgba::from_hex(&color.to_hex()) == Ok(color)
}

#[test]
fn palette_hex_matches_channels() {
    let hex: Vec<String> = PaletteColor::iter().map(|c| c.rgba().to_hex()).collect();
    assert_eq!(hex, vec![
        "#2424ff", "#ff0000", "#000000", "#ff00ff", "#2dc82d", "#ffa019", "#a52a2a",
    ]);
}

#[test]
fn single_digit_channels_are_padded() {
    assert_eq!(Rgba::opaque(0, 9, 10).to_hex(), "#00090a");
}

#[test]
fn each_channel_uses_two_digits() {
    assert_eq!(Rgba::from_hex("#123456"), Ok(Rgba::opaque(0x12, 0x34, 0x56)));
}

#[test]
fn malformed_input_is_an_invalid_color() {
    for bad in ["", "#", "#fff", "#1234567", "#gg0000", "12 456"] {
        assert_eq!(Rgba::from_hex(bad), Err(GraphError::InvalidColor(bad.to_string())), "{bad}");
    }
}
