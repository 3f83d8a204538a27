use function_graph_wasm::application::use_cases::{ComposeFrameUseCase, FrameImage};
use function_graph_wasm::domain::functions::{FunctionId, FunctionList, Rgba};
use function_graph_wasm::domain::graph::{AXIS_BIT, PixelSize};

const A_BIT: u32 = 1 << 1;
const B_BIT: u32 = 1 << 2;
const C_BIT: u32 = 1 << 3;

fn id(raw: u32) -> FunctionId {
    FunctionId::new(raw).unwrap()
}

fn two_functions() -> FunctionList {
    let mut list = FunctionList::new();
    list.add("a", id(0)).unwrap();
    list.add("b", id(1)).unwrap();
    list
}

fn compose(list: &FunctionList, buffer: &[u32]) -> Vec<Rgba> {
    let compositor = ComposeFrameUseCase::new(Rgba::opaque(9, 9, 9));
    let mut image = FrameImage::default();
    let size = PixelSize::new(buffer.len() as u32, 1);
    compositor.compose(buffer, size, list, &mut image).unwrap();
    image.pixels().to_vec()
}

#[test]
fn earlier_function_wins_shared_pixels() {
    let mut list = two_functions();
    let (a, b) = (list.as_slice()[0].color, list.as_slice()[1].color);

    assert_eq!(compose(&list, &[A_BIT | B_BIT, B_BIT]), vec![a, b]);

    list.layer_down(id(0)).unwrap();
    assert_eq!(compose(&list, &[A_BIT | B_BIT, A_BIT]), vec![b, a]);
}

#[test]
fn front_function_wins_over_a_non_adjacent_one() {
    let mut list = two_functions();
    list.add("c", id(2)).unwrap();
    let colors: Vec<Rgba> = list.iter().map(|f| f.color).collect();
    let (a, b, c) = (colors[0], colors[1], colors[2]);

    let buffer = [A_BIT | C_BIT, B_BIT | C_BIT, A_BIT | B_BIT | C_BIT];
    assert_eq!(compose(&list, &buffer), vec![a, b, a]);

    list.layer_up(id(2)).unwrap();
    list.layer_up(id(2)).unwrap();
    assert_eq!(compose(&list, &[A_BIT | C_BIT]), vec![c]);
}

#[test]
fn axis_shows_only_where_no_curve_is() {
    let list = two_functions();
    let a = list.as_slice()[0].color;
    let axis = Rgba::opaque(9, 9, 9);

    assert_eq!(compose(&list, &[AXIS_BIT, AXIS_BIT | A_BIT, 0]), vec![
        axis,
        a,
        Rgba::TRANSPARENT,
    ]);
}

#[test]
fn bits_of_removed_functions_stay_transparent() {
    let mut list = two_functions();
    list.remove(id(1)).unwrap();

    assert_eq!(compose(&list, &[B_BIT, B_BIT | AXIS_BIT]), vec![Rgba::TRANSPARENT; 2]);
}

#[test]
fn empty_list_draws_axis_only() {
    let axis = Rgba::opaque(9, 9, 9);
    assert_eq!(compose(&FunctionList::new(), &[0, AXIS_BIT, A_BIT]), vec![
        Rgba::TRANSPARENT,
        axis,
        Rgba::TRANSPARENT,
    ]);
}

#[test]
fn color_edit_shows_on_next_composition() {
    let mut list = two_functions();
    list.set_color_hex(id(0), "#102030").unwrap();

    assert_eq!(compose(&list, &[A_BIT]), vec![Rgba::opaque(0x10, 0x20, 0x30)]);
}

#[test]
fn image_is_reused_across_sizes() {
    let compositor = ComposeFrameUseCase::new(Rgba::BLACK);
    let list = FunctionList::new();
    let mut image = FrameImage::default();

    compositor.compose(&[AXIS_BIT; 6], PixelSize::new(3, 2), &list, &mut image).unwrap();
    compositor.compose(&[0; 2], PixelSize::new(2, 1), &list, &mut image).unwrap();

    assert_eq!(image.size(), PixelSize::new(2, 1));
    assert_eq!(image.pixels(), &[Rgba::TRANSPARENT; 2]);
    assert_eq!(image.as_bytes().len(), 8);
}
