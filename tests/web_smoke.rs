#![cfg(target_arch = "wasm32")]

use liquid_engine::{cell_solid, flow_bottom, World};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_steps_and_exposes_buffers() {
    let mut world = World::new(3, 3).expect("valid dimensions");
    world.set_type(0, 2, cell_solid()).unwrap();
    world.add_liquid(1, 0, 1.0).unwrap();
    world.step();

    assert_eq!(world.frame(), 1);
    assert_eq!(world.render_len(), 9);
    assert_eq!(world.liquid_at(1, 1).unwrap(), 1.0);
    assert_eq!(world.flow_bitmask_at(1, 0).unwrap(), flow_bottom());
    assert_eq!(world.type_at(0, 2).unwrap(), cell_solid());
}

#[wasm_bindgen_test]
fn facade_reports_errors_as_strings() {
    let mut world = World::new(2, 2).unwrap();

    let err = world.add_liquid(5, 0, 1.0).unwrap_err();
    assert!(err.as_string().unwrap().contains("out of bounds"));
    assert!(world.set_type_in_radius(0, 0, 1, 9).is_err());
    assert!(world.load_config("{\"min_value\": 2.0}".to_string()).is_err());
    assert!(world.get_config_json().unwrap().contains("settle_ticks"));
}
