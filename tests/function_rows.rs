use function_graph_wasm::domain::functions::{FunctionId, FunctionList};
use function_graph_wasm::global_state::{entry_by_id, function_entries};

fn id(raw: u32) -> FunctionId {
    FunctionId::new(raw).unwrap()
}

#[test]
fn row_follows_recolor_and_reorder_by_id() {
    let mut list = FunctionList::new();
    list.add("sin(x)", id(4)).unwrap();
    list.add("x^2", id(9)).unwrap();
    let before = entry_by_id(&function_entries(&list), 9).unwrap();

    list.set_color_hex(id(9), "#00ff00").unwrap();
    list.layer_up(id(9)).unwrap();
    let entries = function_entries(&list);

    assert_eq!(entries.iter().map(|e| e.id).collect::<Vec<_>>(), vec![9, 4]);
    let after = entry_by_id(&entries, 9).unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.label, "x^2");
    assert_eq!(after.color_hex, "#00ff00");
    assert_ne!(after.color_hex, before.color_hex);
}

#[test]
fn removed_row_has_no_entry() {
    let mut list = FunctionList::new();
    list.add("x", id(1)).unwrap();
    list.remove(id(1)).unwrap();

    assert_eq!(entry_by_id(&function_entries(&list), 1), None);
}
